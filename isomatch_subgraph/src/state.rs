use crate::index::NodeId;
use crate::mapping::NodeMapping;
use crate::util::Progress;

/// Mutable search state threaded through the backtracking recursion.
#[derive(Debug)]
pub(crate) struct State {
    pub(crate) mapping: NodeMapping,
    pub(crate) progress: Progress,
}

impl State {
    pub(crate) fn new(mapping: NodeMapping, progress: Progress) -> Self {
        State { mapping, progress }
    }

    pub(crate) fn done(&self) -> bool {
        self.mapping.is_complete()
    }
}

/// Map `p -> t`, run `f`, then undo the assignment whatever `f` returned.
pub(crate) fn with_mapping<R>(
    st: &mut State,
    p: NodeId,
    t: NodeId,
    f: impl FnOnce(&mut State) -> R,
) -> R {
    st.mapping.map(p, t);
    let out = f(st);
    st.mapping.unmap(p, t);
    out
}

use crate::index::NodeId;

/// Partial injective map between pattern and target ids, kept in both
/// directions so "is this target vertex taken" is a single lookup.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeMapping {
    pattern_to_target: Vec<Option<NodeId>>,
    target_to_pattern: Vec<Option<NodeId>>,
    len: usize,
}

impl NodeMapping {
    #[contracts::debug_ensures(ret.len == 0)]
    pub(crate) fn new(pattern_len: usize, target_len: usize) -> Self {
        NodeMapping {
            pattern_to_target: vec![None; pattern_len],
            target_to_pattern: vec![None; target_len],
            len: 0,
        }
    }

    #[contracts::debug_requires(self.pattern_to_target[p].is_none(), "pattern vertex already mapped")]
    #[contracts::debug_requires(self.target_to_pattern[t].is_none(), "target vertex already used")]
    #[contracts::debug_ensures(self.len == old(self.len) + 1)]
    pub(crate) fn map(&mut self, p: NodeId, t: NodeId) {
        self.pattern_to_target[p] = Some(t);
        self.target_to_pattern[t] = Some(p);
        self.len += 1;
    }

    #[contracts::debug_requires(self.pattern_to_target[p] == Some(t), "unmapping a pair that was never mapped")]
    #[contracts::debug_ensures(self.len == old(self.len) - 1)]
    pub(crate) fn unmap(&mut self, p: NodeId, t: NodeId) {
        self.pattern_to_target[p] = None;
        self.target_to_pattern[t] = None;
        self.len -= 1;
    }

    pub(crate) fn target_of(&self, p: NodeId) -> Option<NodeId> {
        self.pattern_to_target[p]
    }

    pub(crate) fn is_target_used(&self, t: NodeId) -> bool {
        self.target_to_pattern[t].is_some()
    }

    /// Whether every pattern vertex has an image.
    pub(crate) fn is_complete(&self) -> bool {
        self.len == self.pattern_to_target.len()
    }

    /// `(pattern, target)` pairs in pattern id order.
    pub(crate) fn pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.pattern_to_target
            .iter()
            .enumerate()
            .filter_map(|(p, t)| t.map(|t| (p, t)))
    }

    /// Sorted target ids covered by the mapping.
    pub(crate) fn signature(&self) -> Vec<NodeId> {
        let sig: Vec<NodeId> = self
            .target_to_pattern
            .iter()
            .enumerate()
            .filter_map(|(t, p)| p.map(|_| t))
            .collect();
        tracing::event!(tracing::Level::TRACE, "NodeMapping::signature -> {:?}", sig);
        sig
    }
}

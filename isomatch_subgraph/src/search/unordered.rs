//! Naive strategy: every unused target vertex is a candidate at every level.

use std::hash::Hash;
use std::ops::ControlFlow;

use tracing::trace;

use super::{Context, Flow};
use crate::embedding::Collector;
use crate::index::NodeId;
use crate::state::{State, with_mapping};

pub(super) fn backtrack<K, D>(
    ctx: &Context<'_, '_, K, D>,
    st: &mut State,
    out: &mut Collector<K>,
    level: usize,
) -> Flow
where
    K: Clone + Eq + Hash + Ord,
{
    st.progress.enter_frame(out.len())?;

    if st.done() {
        return Ok(ctx.emit(st, out));
    }
    let Some(entry) = ctx.order.get(level) else {
        return Ok(ControlFlow::Continue(()));
    };
    let v = entry.node;

    // Phase 1: filter with only immutable access to `st`.
    let candidates: Vec<NodeId> = ctx
        .target
        .ids()
        .filter(|&w| ctx.admissible(&st.mapping, v, w))
        .collect();

    let scanned = ctx.target.len() as u64;
    st.progress.inc_scanned(scanned);
    st.progress.inc_pruned(scanned - candidates.len() as u64);
    trace!(level, pattern = v, candidates = candidates.len(), "unordered frame");

    // Phase 2: scoped assignments.
    for w in candidates {
        let flow = with_mapping(st, v, w, |st| backtrack(ctx, st, out, level + 1))?;
        if flow.is_break() {
            return Ok(flow);
        }
    }

    Ok(ControlFlow::Continue(()))
}

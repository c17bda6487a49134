//! Constraint-propagating strategy.
//!
//! Candidates for the next pattern vertex come from a candidate table. Each
//! assignment narrows a copy of the table (see `CandidateTable::refine`) and
//! a branch dies as soon as any pattern vertex runs out of candidates. The
//! caller's table is never touched, so siblings see the table as it was.

use std::hash::Hash;
use std::ops::ControlFlow;

use tracing::trace;

use super::{Context, Flow};
use crate::candidates::CandidateTable;
use crate::embedding::Collector;
use crate::index::NodeId;
use crate::state::{State, with_mapping};

pub(super) fn backtrack<K, D>(
    ctx: &Context<'_, '_, K, D>,
    st: &mut State,
    out: &mut Collector<K>,
    level: usize,
    table: &CandidateTable,
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

    let options: Vec<NodeId> = table
        .get(v)
        .iter()
        .filter(|&w| !st.mapping.is_target_used(w))
        .collect();
    st.progress.inc_scanned(options.len() as u64);
    trace!(level, pattern = v, candidates = options.len(), "propagating frame");

    for w in options {
        let mut refined = table.clone();
        if !refined.refine(ctx.pattern, ctx.target, ctx.mode, v, w) {
            st.progress.inc_pruned(1);
            continue;
        }

        let flow = with_mapping(st, v, w, |st| {
            backtrack(ctx, st, out, level + 1, &refined)
        })?;
        if flow.is_break() {
            return Ok(flow);
        }
    }

    Ok(ControlFlow::Continue(()))
}

//! DFS-ordered strategy.
//!
//! Pattern vertices are placed in DFS preorder, so every vertex except a
//! component root has a DFS-tree parent that is already mapped. Its image has
//! to be a target neighbor of the parent's image, which keeps the candidate
//! pool down to one adjacency list.

use std::hash::Hash;
use std::ops::ControlFlow;

use itertools::Either;
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

    let pool = match entry.parent {
        Some(parent) => {
            let Some(image) = st.mapping.target_of(parent) else {
                return Ok(ControlFlow::Continue(()));
            };
            Either::Left(ctx.target.neighbors(image).iter().copied())
        }
        // component roots fall back to their whole candidate set
        None => Either::Right(ctx.candidates.get(v).iter()),
    };

    let mut scanned = 0u64;
    let candidates: Vec<NodeId> = pool
        .inspect(|_| scanned += 1)
        .filter(|&w| ctx.admissible(&st.mapping, v, w))
        .collect();

    st.progress.inc_scanned(scanned);
    st.progress.inc_pruned(scanned - candidates.len() as u64);
    trace!(
        level,
        pattern = v,
        parent = ?entry.parent,
        candidates = candidates.len(),
        "ordered frame"
    );

    for w in candidates {
        let flow = with_mapping(st, v, w, |st| backtrack(ctx, st, out, level + 1))?;
        if flow.is_break() {
            return Ok(flow);
        }
    }

    Ok(ControlFlow::Continue(()))
}

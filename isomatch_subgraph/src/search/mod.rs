//! Backtracking search over pattern-to-target assignments.
//!
//! [`run`] handles everything that does not depend on the strategy: size
//! prechecks, indexing, the initial candidate table and result collection.
//! The strategy modules only decide which target vertices to try for the
//! pattern vertex at each level.

mod ordered;
mod propagating;
mod unordered;

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::ControlFlow;

use isomatch_graph::{Graph, Labeled};
use tracing::{debug, warn};

use crate::candidates::CandidateTable;
use crate::compat::preserves_adjacency;
use crate::config::{Config, MatchMode, Strategy};
use crate::dedupe::Deduper;
use crate::embedding::{Collector, Embeddings, ShortCircuit};
use crate::error::MatchError;
use crate::index::{Index, NodeId};
use crate::mapping::NodeMapping;
use crate::order::VisitOrder;
use crate::state::State;
use crate::util::Progress;

/// `Break` once the result limit is reached, `Err` when a bound is exceeded.
pub(crate) type Flow = Result<ControlFlow<()>, MatchError>;

/// Read-only inputs shared by every frame of one search.
pub(crate) struct Context<'a, 'g, K, D> {
    pub(crate) pattern: &'a Index<'g, K, D>,
    pub(crate) target: &'a Index<'g, K, D>,
    pub(crate) candidates: &'a CandidateTable,
    pub(crate) order: VisitOrder,
    pub(crate) mode: MatchMode,
}

impl<K, D> Context<'_, '_, K, D>
where
    K: Clone + Eq + Hash + Ord,
{
    /// Candidate filter shared by the unordered and ordered strategies.
    fn admissible(&self, mapping: &NodeMapping, v: NodeId, w: NodeId) -> bool {
        !mapping.is_target_used(w)
            && self.candidates.get(v).contains(w)
            && preserves_adjacency(self.pattern, self.target, mapping, self.mode, v, w)
    }

    fn emit(&self, st: &State, out: &mut Collector<K>) -> ControlFlow<()> {
        out.emit(
            &st.mapping,
            |p| self.pattern.key(p).clone(),
            |t| self.target.key(t).clone(),
        )
    }
}

/// Why the search cannot succeed, judged on counts alone.
fn size_precheck<K, D>(
    pattern: &Graph<K, D>,
    target: &Graph<K, D>,
    mode: MatchMode,
) -> Option<ShortCircuit<K>>
where
    K: Clone + Eq + Hash,
{
    let fits = |p: usize, t: usize| match mode {
        MatchMode::Isomorphism => p == t,
        MatchMode::Subgraph => p <= t,
    };

    if !fits(pattern.node_count(), target.node_count()) {
        return Some(ShortCircuit::NodeCount {
            pattern: pattern.node_count(),
            target: target.node_count(),
        });
    }
    if !fits(pattern.edge_count(), target.edge_count()) {
        return Some(ShortCircuit::EdgeCount {
            pattern: pattern.edge_count(),
            target: target.edge_count(),
        });
    }
    None
}

/// Enumerate the embeddings of `pattern` in `target` under `config`.
pub(crate) fn run<K, D>(
    pattern: &Graph<K, D>,
    target: &Graph<K, D>,
    config: &Config,
) -> Result<Embeddings<K>, MatchError>
where
    K: Clone + Eq + Hash + Ord + Debug,
    D: Labeled,
{
    debug!(
        mode = ?config.mode,
        strategy = ?config.strategy,
        pattern = %pattern.summary(),
        target = %target.summary(),
        "starting search"
    );

    if let Some(reason) = size_precheck(pattern, target, config.mode) {
        debug!(?reason, "search short-circuited on size");
        return Ok(Embeddings::short_circuited(reason));
    }

    let p_index = Index::build(pattern);
    let t_index = Index::build(target);

    let candidates = CandidateTable::build(&p_index, &t_index, config.mode);
    if let Some(v) = candidates.first_empty() {
        let vertex = p_index.key(v).clone();
        debug!(?vertex, "search short-circuited: pattern vertex has no candidates");
        return Ok(Embeddings::short_circuited(ShortCircuit::EmptyCandidates {
            vertex,
        }));
    }

    let order = match config.strategy {
        Strategy::Ordered => VisitOrder::dfs_forest(pattern),
        Strategy::Unordered | Strategy::Propagating => VisitOrder::insertion(p_index.len()),
    };
    debug_assert_eq!(order.len(), p_index.len());

    let ctx = Context {
        pattern: &p_index,
        target: &t_index,
        candidates: &candidates,
        order,
        mode: config.mode,
    };
    let mut st = State::new(
        NodeMapping::new(p_index.len(), t_index.len()),
        Progress::new(config.max_steps, config.timeout),
    );
    let mut out = Collector::new(Deduper::new(config.dedupe), config.limit);

    let flow = match config.strategy {
        Strategy::Unordered => unordered::backtrack(&ctx, &mut st, &mut out, 0),
        Strategy::Ordered => ordered::backtrack(&ctx, &mut st, &mut out, 0),
        Strategy::Propagating => propagating::backtrack(&ctx, &mut st, &mut out, 0, &candidates),
    };

    let stats = st.progress.snapshot();
    match flow {
        Ok(ControlFlow::Break(())) => {
            debug!(found = out.len(), ?stats, "search stopped at result limit");
        }
        Ok(ControlFlow::Continue(())) => {
            debug!(found = out.len(), ?stats, "search finished");
        }
        Err(err) => {
            warn!(%err, ?stats, "search aborted");
            return Err(err);
        }
    }

    Ok(Embeddings {
        items: out.into_items(),
        stats,
        short_circuit: None,
    })
}

//! Backtracking graph isomorphism and subgraph isomorphism.
//!
//! Entry points:
//! - [`isomorphisms`] and [`subgraph_isomorphisms`] return every mapping with
//!   default settings.
//! - [`SubgraphMatcher::search`] / [`find_subgraphs`] take a [`Config`] and
//!   return [`Embeddings`] with search statistics, or a [`MatchError`] when a
//!   configured bound is exceeded.
//!
//! ```
//! use isomatch_graph::families;
//! use isomatch_subgraph::{Config, SubgraphMatcher};
//!
//! let triangle = families::complete(3);
//! let k4 = families::complete(4);
//!
//! let found = SubgraphMatcher::search(&triangle, &k4, &Config::subgraph()).unwrap();
//! assert_eq!(found.len(), 24);
//!
//! let distinct = Config::builder().subgraph().image_set().build();
//! let found = SubgraphMatcher::search(&triangle, &k4, &distinct).unwrap();
//! assert_eq!(found.len(), 4);
//! ```

mod candidates;
mod compat;
mod config;
mod dedupe;
mod embedding;
mod error;
mod index;
mod mapping;
mod order;
mod search;
mod state;
mod util;

use std::fmt::Debug;
use std::hash::Hash;

use isomatch_graph::{Graph, Labeled};

pub use config::{Config, ConfigBuilder, DedupeMode, MatchMode, Strategy};
pub use embedding::{Embedding, Embeddings, SearchStats, ShortCircuit};
pub use error::MatchError;

/// Configured search entry point.
pub struct SubgraphMatcher;

impl SubgraphMatcher {
    /// Enumerate the mappings of `pattern` onto `target` described by `config`.
    ///
    /// Results are in discovery order, which is deterministic for given
    /// graphs and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError`] when `config.max_steps` or `config.timeout` is
    /// exceeded. Unbounded searches never fail.
    pub fn search<K, D>(
        pattern: &Graph<K, D>,
        target: &Graph<K, D>,
        config: &Config,
    ) -> Result<Embeddings<K>, MatchError>
    where
        K: Clone + Eq + Hash + Ord + Debug,
        D: Labeled,
    {
        search::run(pattern, target, config)
    }
}

/// Shorthand for [`SubgraphMatcher::search`].
///
/// # Errors
///
/// See [`SubgraphMatcher::search`].
pub fn find_subgraphs<K, D>(
    pattern: &Graph<K, D>,
    target: &Graph<K, D>,
    config: &Config,
) -> Result<Embeddings<K>, MatchError>
where
    K: Clone + Eq + Hash + Ord + Debug,
    D: Labeled,
{
    SubgraphMatcher::search(pattern, target, config)
}

/// Every bijection between `a` and `b` that preserves labels and adjacency.
///
/// Empty when the graphs differ in size.
pub fn isomorphisms<K, D>(a: &Graph<K, D>, b: &Graph<K, D>) -> Vec<Embedding<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
    D: Labeled,
{
    // an unbounded config cannot abort
    SubgraphMatcher::search(a, b, &Config::isomorphism())
        .map(Embeddings::into_mappings)
        .unwrap_or_default()
}

/// Every injective, label- and adjacency-preserving map of `pattern` into
/// `target`.
///
/// Empty when the pattern is larger than the target.
pub fn subgraph_isomorphisms<K, D>(pattern: &Graph<K, D>, target: &Graph<K, D>) -> Vec<Embedding<K>>
where
    K: Clone + Eq + Hash + Ord + Debug,
    D: Labeled,
{
    SubgraphMatcher::search(pattern, target, &Config::subgraph())
        .map(Embeddings::into_mappings)
        .unwrap_or_default()
}

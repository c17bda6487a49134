//! Configuration for the isomorphism search.
//!
//! The main knobs are:
//! - mode: full graph isomorphism (equal-size bijection) or subgraph
//!   isomorphism (injective embedding of the pattern into the target).
//! - strategy: how the backtracking search proposes candidates.
//! - dedupe: how to deduplicate embeddings as they are found.
//! - limit / max_steps / timeout: bound the work done by one search.
//!
//! Quick examples
//!
//! Subgraph search with the default (ordered) strategy:
//! ```
//! use isomatch_subgraph::Config;
//! let cfg = Config::builder().subgraph().build();
//! ```
//!
//! Isomorphism search that collapses automorphisms and stops after the first hit:
//! ```
//! use isomatch_subgraph::Config;
//! let cfg = Config::builder().isomorphism().image_set().first().build();
//! ```
//!
//! Propagating search with a frame budget:
//! ```
//! use isomatch_subgraph::Config;
//! let cfg = Config::builder().subgraph().propagating().max_steps(10_000).build();
//! ```

use std::time::Duration;

/// Which relation the search enumerates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Bijections between two graphs of equal size. Degrees must be equal.
    Isomorphism,
    /// Injective embeddings of the pattern into the target. Target degrees
    /// must be at least the pattern degrees.
    #[default]
    Subgraph,
}

impl MatchMode {
    /// Whether a target vertex of degree `target` may host a pattern vertex
    /// of degree `pattern`.
    pub fn admits_degree(self, pattern: usize, target: usize) -> bool {
        match self {
            MatchMode::Isomorphism => pattern == target,
            MatchMode::Subgraph => pattern <= target,
        }
    }

    /// The strategy used when none is configured explicitly.
    pub fn default_strategy(self) -> Strategy {
        match self {
            MatchMode::Isomorphism => Strategy::Unordered,
            MatchMode::Subgraph => Strategy::Ordered,
        }
    }
}

/// How the backtracking search proposes and filters candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Pattern vertices in insertion order; every unused target vertex is
    /// tried at every level.
    Unordered,
    /// Pattern vertices in DFS preorder; candidates are the target neighbors
    /// of the image of the vertex's DFS-tree parent.
    Ordered,
    /// Pattern vertices in insertion order; candidates come from a per-vertex
    /// candidate table that is narrowed after every assignment.
    Propagating,
}

/// Control how embeddings are deduplicated.
///
/// - None:
///     Keep every embedding. Automorphisms of the pattern show up as distinct
///     embeddings onto the same target vertices.
/// - ImageSet:
///     Two embeddings are the same if they cover the same SET of target
///     vertices, regardless of which pattern vertex maps where. Only the
///     first one found is kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DedupeMode {
    /// Keep all embeddings.
    #[default]
    None,
    /// Collapse embeddings that cover the same target vertex set.
    ImageSet,
}

/// Global search configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Isomorphism or subgraph isomorphism.
    pub mode: MatchMode,
    /// Candidate generation strategy.
    pub strategy: Strategy,
    /// How to deduplicate embeddings.
    pub dedupe: DedupeMode,
    /// Stop after this many embeddings.
    pub limit: Option<usize>,
    /// Abort with an error after this many search frames.
    pub max_steps: Option<u64>,
    /// Abort with an error once the search has run this long.
    pub timeout: Option<Duration>,
}

impl Config {
    /// Start building a configuration.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full isomorphism with the default strategy and no bounds.
    pub fn isomorphism() -> Self {
        Self::builder().isomorphism().build()
    }

    /// Subgraph isomorphism with the default strategy and no bounds.
    pub fn subgraph() -> Self {
        Self::builder().subgraph().build()
    }

    /// Whether the search can abort with an error.
    pub fn is_bounded(&self) -> bool {
        self.max_steps.is_some() || self.timeout.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::subgraph()
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    mode: MatchMode,
    strategy: Option<Strategy>,
    dedupe: DedupeMode,
    limit: Option<usize>,
    max_steps: Option<u64>,
    timeout: Option<Duration>,
}

impl ConfigBuilder {
    /// Set the match mode.
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enumerate full isomorphisms.
    pub fn isomorphism(self) -> Self {
        self.mode(MatchMode::Isomorphism)
    }

    /// Enumerate subgraph isomorphisms.
    pub fn subgraph(self) -> Self {
        self.mode(MatchMode::Subgraph)
    }

    /// Set the strategy. Without this the mode's default is used.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Use [`Strategy::Unordered`].
    pub fn unordered(self) -> Self {
        self.strategy(Strategy::Unordered)
    }

    /// Use [`Strategy::Ordered`].
    pub fn ordered(self) -> Self {
        self.strategy(Strategy::Ordered)
    }

    /// Use [`Strategy::Propagating`].
    pub fn propagating(self) -> Self {
        self.strategy(Strategy::Propagating)
    }

    /// Set the dedupe mode.
    pub fn dedupe(mut self, dedupe: DedupeMode) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Keep every embedding.
    pub fn none(self) -> Self {
        self.dedupe(DedupeMode::None)
    }

    /// Collapse embeddings covering the same target vertices.
    pub fn image_set(self) -> Self {
        self.dedupe(DedupeMode::ImageSet)
    }

    /// Stop after `limit` embeddings.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Stop after the first embedding.
    pub fn first(self) -> Self {
        self.limit(1)
    }

    /// Abort after `steps` search frames.
    pub fn max_steps(mut self, steps: u64) -> Self {
        self.max_steps = Some(steps);
        self
    }

    /// Abort once the search has run for `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> Config {
        Config {
            mode: self.mode,
            strategy: self.strategy.unwrap_or(self.mode.default_strategy()),
            dedupe: self.dedupe,
            limit: self.limit,
            max_steps: self.max_steps,
            timeout: self.timeout,
        }
    }
}

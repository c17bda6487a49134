use thiserror::Error;

/// Argument combinations that cannot describe a graph or a search.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("a cycle needs at least 3 nodes, got {0}")]
    CycleTooSmall(usize),

    #[error("segments need at least one label")]
    NoSegmentLabels,

    #[error("a graph of {0} nodes is larger than the CLI generates")]
    TooLarge(usize),

    #[error("--limit must be positive")]
    ZeroLimit,
}

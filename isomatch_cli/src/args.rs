use std::time::Duration;

use clap::Parser;
use isomatch_graph::{Graph, families};
use isomatch_subgraph::{Config, DedupeMode, MatchMode, Strategy};

use crate::error::CliError;

/// Largest graph the CLI will generate.
pub const MAX_NODES: usize = 1 << 20;

/// isomatch - enumerate isomorphisms and subgraph isomorphisms between
/// generated graphs
#[derive(Parser, Debug)]
#[command(name = "isomatch")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Family of the pattern graph
    #[arg(long, value_enum, default_value = "complete")]
    pub pattern: FamilyArg,
    /// Node count of the pattern (copies, for segments)
    #[arg(long, default_value_t = 3)]
    pub pattern_size: usize,

    /// Family of the target graph
    #[arg(long, value_enum, default_value = "complete")]
    pub target: FamilyArg,
    /// Node count of the target (copies, for segments)
    #[arg(long, default_value_t = 4)]
    pub target_size: usize,

    /// Labels along each segment
    #[arg(long, value_delimiter = ',', default_value = "0,1,2")]
    pub labels: Vec<usize>,

    /// Relation to enumerate
    #[arg(long, value_enum, default_value = "subgraph")]
    pub mode: ModeArg,
    /// Candidate strategy; defaults to the mode's own choice
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
    /// How to collapse equivalent embeddings
    #[arg(long, value_enum, default_value = "none")]
    pub dedupe: DedupeArg,

    /// Stop after this many embeddings
    #[arg(long)]
    pub limit: Option<usize>,
    /// Abort after this many search frames
    #[arg(long)]
    pub max_steps: Option<u64>,
    /// Abort after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Print every embedding, not just the count
    #[arg(short = 'p', long, default_value_t = false)]
    pub print: bool,
}

impl Args {
    /// Convert command-line arguments into a search configuration
    pub fn to_config(&self) -> Result<Config, CliError> {
        let mut builder = Config::builder()
            .mode(self.mode.clone().into())
            .dedupe(self.dedupe.clone().into());

        if let Some(strategy) = &self.strategy {
            builder = builder.strategy(strategy.clone().into());
        }
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(CliError::ZeroLimit);
            }
            builder = builder.limit(limit);
        }
        if let Some(steps) = self.max_steps {
            builder = builder.max_steps(steps);
        }
        if let Some(ms) = self.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(builder.build())
    }

    pub fn pattern_graph(&self) -> Result<Graph<usize, usize>, CliError> {
        self.pattern.build(self.pattern_size, &self.labels)
    }

    pub fn target_graph(&self) -> Result<Graph<usize, usize>, CliError> {
        self.target.build(self.target_size, &self.labels)
    }
}

/// Command-line wrapper for the generated graph families
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum FamilyArg {
    /// Every pair of nodes adjacent
    #[value(name = "complete")]
    Complete,
    /// Simple path
    #[value(name = "path")]
    Path,
    /// Simple cycle
    #[value(name = "cycle")]
    Cycle,
    /// One center joined to every other node
    #[value(name = "star")]
    Star,
    /// Disjoint labelled paths
    #[value(name = "segments")]
    Segments,
}

impl FamilyArg {
    fn build(&self, size: usize, labels: &[usize]) -> Result<Graph<usize, usize>, CliError> {
        let nodes = match self {
            FamilyArg::Segments => size.saturating_mul(labels.len()),
            _ => size,
        };
        if nodes > MAX_NODES {
            return Err(CliError::TooLarge(nodes));
        }

        Ok(match self {
            FamilyArg::Complete => families::complete(size),
            FamilyArg::Path => families::path(size),
            FamilyArg::Cycle if size < 3 => return Err(CliError::CycleTooSmall(size)),
            FamilyArg::Cycle => families::cycle(size),
            FamilyArg::Star => families::star(size),
            FamilyArg::Segments if labels.is_empty() => return Err(CliError::NoSegmentLabels),
            FamilyArg::Segments => families::segments(size, labels),
        })
    }
}

/// Command-line wrapper for MatchMode
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ModeArg {
    /// Bijections between equal-size graphs
    #[value(name = "iso")]
    Isomorphism,
    /// Injective embeddings of the pattern into the target
    #[value(name = "subgraph")]
    Subgraph,
}

impl From<ModeArg> for MatchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Isomorphism => MatchMode::Isomorphism,
            ModeArg::Subgraph => MatchMode::Subgraph,
        }
    }
}

/// Command-line wrapper for Strategy
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum StrategyArg {
    #[value(name = "unordered")]
    Unordered,
    #[value(name = "ordered")]
    Ordered,
    #[value(name = "propagating")]
    Propagating,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Unordered => Strategy::Unordered,
            StrategyArg::Ordered => Strategy::Ordered,
            StrategyArg::Propagating => Strategy::Propagating,
        }
    }
}

/// Command-line wrapper for DedupeMode
#[derive(Debug, Clone, clap::ValueEnum)]
pub enum DedupeArg {
    /// Keep every embedding
    #[value(name = "none")]
    None,
    /// One embedding per covered target vertex set
    #[value(name = "image-set")]
    ImageSet,
}

impl From<DedupeArg> for DedupeMode {
    fn from(arg: DedupeArg) -> Self {
        match arg {
            DedupeArg::None => DedupeMode::None,
            DedupeArg::ImageSet => DedupeMode::ImageSet,
        }
    }
}

use std::fmt;
use std::hash::Hash;

use crate::Graph;

/// Size and degree statistics of a graph, for logs and reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphSummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Smallest node degree.
    pub min_degree: usize,
    /// Largest node degree.
    pub max_degree: usize,
    /// Mean node degree.
    pub avg_degree: f64,
}

impl<K, D> Graph<K, D>
where
    K: Clone + Eq + Hash,
{
    /// Collects the summary statistics of this graph.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            nodes: self.node_count(),
            edges: self.edge_count(),
            min_degree: self.min_degree(),
            max_degree: self.max_degree(),
            avg_degree: self.avg_degree(),
        }
    }
}

impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes={} edges={} degree(min={} max={} avg={:.2})",
            self.nodes, self.edges, self.min_degree, self.max_degree, self.avg_degree
        )
    }
}

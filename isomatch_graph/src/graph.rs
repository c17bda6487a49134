use std::hash::Hash;

use indexmap::IndexMap;
use indexmap::IndexSet;
use tracing::trace;

/// In- and out-degree of a node.
///
/// Every edge is inserted in both directions, so the two values are always
/// equal. Both are kept so callers written against a directed interface read
/// naturally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Degree {
    /// Number of edges entering the node.
    pub in_degree: usize,
    /// Number of edges leaving the node.
    pub out_degree: usize,
}

impl Degree {
    fn symmetric(n: usize) -> Self {
        Self {
            in_degree: n,
            out_degree: n,
        }
    }
}

#[derive(Clone, Debug)]
struct NodeEntry<K, D> {
    data: D,
    neighbors: IndexSet<K>,
}

/// An undirected, node-labelled graph keyed by unique node keys.
///
/// Nodes iterate in insertion order. Adjacency is stored as one neighbor set
/// per node, so every node (including isolated ones) owns an adjacency entry
/// and edges are always symmetric. Parallel edges cannot be represented; a
/// self loop is stored once in the node's own neighbor set.
///
/// Operations on keys that are not in the graph never panic: mutations become
/// no-ops and queries return an empty or zero value.
#[derive(Clone, Debug)]
pub struct Graph<K, D> {
    nodes: IndexMap<K, NodeEntry<K, D>>,
    edge_count: usize,
}

impl<K, D> Default for Graph<K, D> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            edge_count: 0,
        }
    }
}

/// Iterator over the neighbors of a node, in edge insertion order.
#[derive(Clone, Debug)]
pub struct Neighbors<'g, K> {
    inner: Option<indexmap::set::Iter<'g, K>>,
}

impl<'g, K> Iterator for Neighbors<'g, K> {
    type Item = &'g K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut().and_then(Iterator::next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<K, D> Graph<K, D>
where
    K: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Inserts a node, or replaces the data of an existing node.
    ///
    /// Replacing keeps the node's position and its edges. Returns the previous
    /// data when the key was already present.
    pub fn add_node(&mut self, key: K, data: D) -> Option<D> {
        match self.nodes.get_mut(&key) {
            Some(entry) => Some(std::mem::replace(&mut entry.data, data)),
            None => {
                self.nodes.insert(
                    key,
                    NodeEntry {
                        data,
                        neighbors: IndexSet::new(),
                    },
                );
                None
            }
        }
    }

    /// Connects `a` and `b` in both directions.
    ///
    /// Returns `false` without changing anything when either endpoint is
    /// missing or the edge already exists.
    pub fn add_edge(&mut self, a: &K, b: &K) -> bool {
        if !self.contains_node(a) || !self.contains_node(b) {
            trace!("add_edge: endpoint missing, ignoring");
            return false;
        }

        let inserted = self
            .nodes
            .get_mut(a)
            .is_some_and(|entry| entry.neighbors.insert(b.clone()));
        if !inserted {
            return false;
        }
        if a != b {
            if let Some(entry) = self.nodes.get_mut(b) {
                entry.neighbors.insert(a.clone());
            }
        }

        self.edge_count += 1;
        true
    }

    /// Disconnects `a` and `b`. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, a: &K, b: &K) -> bool {
        let removed = self
            .nodes
            .get_mut(a)
            .is_some_and(|entry| entry.neighbors.shift_remove(b));
        if !removed {
            return false;
        }
        if a != b {
            if let Some(entry) = self.nodes.get_mut(b) {
                entry.neighbors.shift_remove(a);
            }
        }

        self.edge_count -= 1;
        true
    }

    /// Removes a node together with every edge touching it.
    ///
    /// The remaining nodes keep their relative order.
    pub fn remove_node(&mut self, key: &K) -> Option<D> {
        let entry = self.nodes.shift_remove(key)?;

        for neighbor in entry.neighbors.iter().filter(|n| *n != key) {
            if let Some(other) = self.nodes.get_mut(neighbor) {
                other.neighbors.shift_remove(key);
            }
        }
        self.edge_count -= entry.neighbors.len();

        Some(entry.data)
    }

    /// Removes every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }

    /// Whether `key` is a node of this graph.
    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// The data stored for `key`.
    pub fn node(&self, key: &K) -> Option<&D> {
        self.nodes.get(key).map(|entry| &entry.data)
    }

    /// Mutable access to the data stored for `key`.
    pub fn node_mut(&mut self, key: &K) -> Option<&mut D> {
        self.nodes.get_mut(key).map(|entry| &mut entry.data)
    }

    /// The key as stored in the graph, borrowed for the graph's lifetime.
    pub fn key(&self, key: &K) -> Option<&K> {
        self.nodes.get_key_value(key).map(|(k, _)| k)
    }

    /// Position of `key` in insertion order.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.nodes.get_index_of(key)
    }

    /// Iterates `(key, data)` pairs in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (&K, &D)> {
        self.nodes.iter().map(|(key, entry)| (key, &entry.data))
    }

    /// Iterates node keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.nodes.keys()
    }

    /// Iterates every edge exactly once, as `(a, b)` with `a` inserted no
    /// later than `b`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> {
        self.nodes.iter().enumerate().flat_map(move |(i, (a, entry))| {
            entry.neighbors.iter().filter_map(move |b| {
                let j = self.nodes.get_index_of(b)?;
                (i <= j).then_some((a, b))
            })
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges. A self loop counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Edges are always stored in both directions.
    pub fn is_undirected(&self) -> bool {
        true
    }

    /// Degree of `key`; zero for a missing node.
    pub fn degree(&self, key: &K) -> Degree {
        Degree::symmetric(self.nodes.get(key).map_or(0, |e| e.neighbors.len()))
    }

    /// In-degree of `key`; zero for a missing node.
    pub fn in_degree(&self, key: &K) -> usize {
        self.degree(key).in_degree
    }

    /// Out-degree of `key`; zero for a missing node.
    pub fn out_degree(&self, key: &K) -> usize {
        self.degree(key).out_degree
    }

    /// Neighbors of `key`; empty for a missing node.
    pub fn neighbors(&self, key: &K) -> Neighbors<'_, K> {
        Neighbors {
            inner: self.nodes.get(key).map(|entry| entry.neighbors.iter()),
        }
    }

    /// Whether an edge connects `a` and `b`.
    pub fn adjacent(&self, a: &K, b: &K) -> bool {
        self.nodes
            .get(a)
            .is_some_and(|entry| entry.neighbors.contains(b))
    }

    /// Smallest degree in the graph, or zero when empty.
    pub fn min_degree(&self) -> usize {
        self.nodes
            .values()
            .map(|e| e.neighbors.len())
            .min()
            .unwrap_or(0)
    }

    /// Largest degree in the graph, or zero when empty.
    pub fn max_degree(&self) -> usize {
        self.nodes
            .values()
            .map(|e| e.neighbors.len())
            .max()
            .unwrap_or(0)
    }

    /// Mean degree, or zero when empty.
    pub fn avg_degree(&self) -> f64 {
        if self.nodes.is_empty() {
            return 0.0;
        }
        let total: usize = self.nodes.values().map(|e| e.neighbors.len()).sum();
        total as f64 / self.nodes.len() as f64
    }

    /// The subgraph induced by `keys`.
    ///
    /// Keeps every listed node that exists in `self` and every edge whose
    /// endpoints are both kept. Nodes appear in the order they are listed.
    pub fn induced_subgraph<'k, I>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = &'k K>,
        K: 'k,
        D: Clone,
    {
        let mut subgraph = Self::new();
        for key in keys {
            if let Some(data) = self.node(key) {
                subgraph.add_node(key.clone(), data.clone());
            }
        }

        let kept: Vec<K> = subgraph.keys().cloned().collect();
        for a in &kept {
            for b in self.neighbors(a) {
                if subgraph.contains_node(b) {
                    subgraph.add_edge(a, b);
                }
            }
        }
        subgraph
    }
}

use std::hash::Hash;

use isomatch_graph::{Graph, Labeled};

/// Dense node id: the node's position in its graph's insertion order.
pub(crate) type NodeId = usize;

/// Read-only, id-addressed view of a graph for the search.
///
/// Ids are contiguous and stable for the lifetime of the borrow. Neighbor
/// lists are sorted by id so adjacency tests are a binary search and candidate
/// iteration is deterministic.
#[derive(Clone, Debug)]
pub(crate) struct Index<'g, K, D> {
    keys: Vec<&'g K>,
    data: Vec<&'g D>,
    neighbors: Vec<Vec<NodeId>>,
}

impl<'g, K, D> Index<'g, K, D>
where
    K: Clone + Eq + Hash,
{
    pub(crate) fn build(graph: &'g Graph<K, D>) -> Self {
        let mut keys = Vec::with_capacity(graph.node_count());
        let mut data = Vec::with_capacity(graph.node_count());
        let mut neighbors = Vec::with_capacity(graph.node_count());

        for (key, node_data) in graph.nodes() {
            let mut adjacent: Vec<NodeId> = graph
                .neighbors(key)
                .filter_map(|n| graph.index_of(n))
                .collect();
            adjacent.sort_unstable();

            keys.push(key);
            data.push(node_data);
            neighbors.push(adjacent);
        }

        Index {
            keys,
            data,
            neighbors,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn key(&self, id: NodeId) -> &'g K {
        self.keys[id]
    }

    pub(crate) fn degree(&self, id: NodeId) -> usize {
        self.neighbors[id].len()
    }

    pub(crate) fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.neighbors[id]
    }

    pub(crate) fn adjacent(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbors[a].binary_search(&b).is_ok()
    }

    pub(crate) fn ids(&self) -> std::ops::Range<NodeId> {
        0..self.len()
    }
}

impl<K, D> Index<'_, K, D>
where
    D: Labeled,
{
    /// Whether `p` (in `self`) and `t` (in `other`) carry equal labels.
    pub(crate) fn same_label(&self, p: NodeId, other: &Index<'_, K, D>, t: NodeId) -> bool {
        self.data[p].label() == other.data[t].label()
    }
}

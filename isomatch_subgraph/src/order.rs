use std::hash::Hash;

use isomatch_graph::{Graph, traversal};

use crate::index::NodeId;

/// One level of the search: which pattern vertex to place and, for the
/// ordered strategy, which earlier vertex anchors its candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct OrderEntry {
    pub(crate) node: NodeId,
    pub(crate) parent: Option<NodeId>,
}

/// The sequence in which pattern vertices are assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct VisitOrder {
    entries: Vec<OrderEntry>,
}

impl VisitOrder {
    /// Pattern vertices in insertion order, none anchored.
    pub(crate) fn insertion(len: usize) -> Self {
        VisitOrder {
            entries: (0..len)
                .map(|node| OrderEntry { node, parent: None })
                .collect(),
        }
    }

    /// DFS preorder over every component of the pattern.
    ///
    /// Each component is rooted at its first vertex in insertion order. Every
    /// non-root vertex is anchored on its DFS-tree parent, which always comes
    /// earlier in the order.
    pub(crate) fn dfs_forest<K, D>(pattern: &Graph<K, D>) -> Self
    where
        K: Clone + Eq + Hash,
    {
        let mut placed = vec![false; pattern.node_count()];
        let mut entries = Vec::with_capacity(pattern.node_count());

        for (root, root_key) in pattern.keys().enumerate() {
            if placed[root] {
                continue;
            }

            // spine[d] is the id of the most recent vertex at depth d
            let mut spine: Vec<NodeId> = Vec::new();
            for (key, depth) in traversal::dfs_with_depth(pattern, root_key) {
                let Some(node) = pattern.index_of(&key) else {
                    continue;
                };
                spine.truncate(depth);
                let parent = spine.last().copied();
                spine.push(node);

                placed[node] = true;
                entries.push(OrderEntry { node, parent });
            }
        }

        tracing::trace!("dfs visit order: {:?}", entries);
        VisitOrder { entries }
    }

    pub(crate) fn get(&self, level: usize) -> Option<OrderEntry> {
        self.entries.get(level).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

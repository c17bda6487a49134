//! Depth-first traversal primitives.
//!
//! Both entry points walk the graph with an explicit stack of neighbor
//! iterators, so the visiting order is the same preorder a recursive DFS
//! produces while deep graphs cannot overflow the call stack.

use std::collections::HashSet;
use std::hash::Hash;

use crate::{Graph, Neighbors};

/// Every node reachable from `start`.
///
/// With `max_depth = Some(d)` only nodes discovered at DFS depth `< d` are
/// visited: `Some(1)` yields just `start`, `Some(2)` adds its neighbors, and
/// so on. `Some(0)` visits nothing. A missing `start` yields an empty set.
pub fn dfs<K, D>(graph: &Graph<K, D>, start: &K, max_depth: Option<usize>) -> HashSet<K>
where
    K: Clone + Eq + Hash,
{
    walk(graph, start, max_depth)
        .into_iter()
        .map(|(key, _)| key.clone())
        .collect()
}

/// Preorder path of a full DFS from `start`, with the depth of every node in
/// the DFS tree. The first entry is `(start, 0)`.
pub fn dfs_with_depth<K, D>(graph: &Graph<K, D>, start: &K) -> Vec<(K, usize)>
where
    K: Clone + Eq + Hash,
{
    walk(graph, start, None)
        .into_iter()
        .map(|(key, depth)| (key.clone(), depth))
        .collect()
}

fn walk<'g, K, D>(
    graph: &'g Graph<K, D>,
    start: &K,
    max_depth: Option<usize>,
) -> Vec<(&'g K, usize)>
where
    K: Clone + Eq + Hash,
{
    let Some(root) = graph.key(start) else {
        return Vec::new();
    };
    if max_depth == Some(0) {
        return Vec::new();
    }

    let expands = |depth: usize| max_depth.is_none_or(|max| depth + 1 < max);

    let mut visited: HashSet<&'g K> = HashSet::new();
    let mut path: Vec<(&'g K, usize)> = Vec::new();
    let mut stack: Vec<(usize, Neighbors<'g, K>)> = Vec::new();

    visited.insert(root);
    path.push((root, 0));
    if expands(0) {
        stack.push((0, graph.neighbors(root)));
    }

    while let Some((depth, neighbors)) = stack.last_mut() {
        let depth = *depth;
        let Some(next) = neighbors.next() else {
            stack.pop();
            continue;
        };
        if visited.insert(next) {
            path.push((next, depth + 1));
            if expands(depth + 1) {
                stack.push((depth + 1, graph.neighbors(next)));
            }
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn k4_plus_edge() -> Graph<u32, ()> {
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(i, ());
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2), (1, 3), (4, 5)] {
            g.add_edge(&a, &b);
        }
        g
    }

    #[test]
    fn depth_limited_search() {
        let g = k4_plus_edge();
        assert_eq!(dfs(&g, &0, None).len(), 4);
        assert_eq!(dfs(&g, &0, Some(1)).len(), 1);
        assert_eq!(dfs(&g, &0, Some(2)).len(), 4);
        assert!(dfs(&g, &0, Some(0)).is_empty());
    }

    #[test]
    fn path_is_recursive_preorder() {
        let mut g: Graph<u32, ()> = Graph::new();
        for i in 0..5 {
            g.add_node(i, ());
        }
        // 0 - 1 - 2, 0 - 3 - 4
        for (a, b) in [(0, 1), (1, 2), (0, 3), (3, 4)] {
            g.add_edge(&a, &b);
        }
        let path = dfs_with_depth(&g, &0);
        assert_eq!(path, vec![(0, 0), (1, 1), (2, 2), (3, 1), (4, 2)]);
    }

    #[test]
    fn missing_start_is_empty() {
        let g = k4_plus_edge();
        assert!(dfs(&g, &99, None).is_empty());
        assert!(dfs_with_depth(&g, &99).is_empty());
    }
}

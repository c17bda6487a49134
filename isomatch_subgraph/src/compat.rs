use std::hash::Hash;

use crate::config::MatchMode;
use crate::index::{Index, NodeId};
use crate::mapping::NodeMapping;

/// Whether placing pattern vertex `v` on target vertex `w` keeps every edge
/// between `v` and the already mapped part of the pattern.
///
/// A self loop on `v` needs a self loop on `w`. Non-edges are not checked in
/// either mode; for full isomorphism the equal degree and size gates make
/// an extra target edge impossible once all vertices are placed.
pub(crate) fn preserves_adjacency<K, D>(
    pattern: &Index<'_, K, D>,
    target: &Index<'_, K, D>,
    mapping: &NodeMapping,
    mode: MatchMode,
    v: NodeId,
    w: NodeId,
) -> bool
where
    K: Clone + Eq + Hash,
{
    if !mode.admits_degree(pattern.degree(v), target.degree(w)) {
        return false;
    }

    pattern.neighbors(v).iter().all(|&x| {
        if x == v {
            return target.adjacent(w, w);
        }
        mapping
            .target_of(x)
            .is_none_or(|image| target.adjacent(image, w))
    })
}

#[cfg(test)]
mod tests {
    use isomatch_graph::{Graph, families};

    use super::*;

    #[test]
    fn mapped_neighbors_must_stay_adjacent() {
        let pattern = families::path(3);
        let target = families::path(4);
        let p = Index::build(&pattern);
        let t = Index::build(&target);

        let mut mapping = NodeMapping::new(p.len(), t.len());
        mapping.map(0, 0);
        assert!(preserves_adjacency(&p, &t, &mapping, MatchMode::Subgraph, 1, 1));
        // 2 is not adjacent to the image of pattern vertex 0
        assert!(!preserves_adjacency(&p, &t, &mapping, MatchMode::Subgraph, 1, 2));
    }

    #[test]
    fn self_loops_need_self_loops() {
        let mut pattern: Graph<u8, ()> = Graph::new();
        pattern.add_node(0, ());
        pattern.add_edge(&0, &0);

        let mut target: Graph<u8, ()> = Graph::new();
        target.add_node(0, ());
        target.add_node(1, ());
        target.add_node(2, ());
        target.add_edge(&1, &1);
        target.add_edge(&0, &2);

        let p = Index::build(&pattern);
        let t = Index::build(&target);
        let mapping = NodeMapping::new(p.len(), t.len());

        assert!(!preserves_adjacency(&p, &t, &mapping, MatchMode::Subgraph, 0, 0));
        assert!(preserves_adjacency(&p, &t, &mapping, MatchMode::Subgraph, 0, 1));
    }
}

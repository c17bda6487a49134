//! Generated graph families.
//!
//! All builders key nodes `0..n` in insertion order and label them with
//! `usize` values. Unless stated otherwise every node carries label `0`.

use crate::Graph;

/// Complete graph `K_n`.
pub fn complete(n: usize) -> Graph<usize, usize> {
    let mut g = isolated(n);
    for a in 0..n {
        for b in (a + 1)..n {
            g.add_edge(&a, &b);
        }
    }
    g
}

/// Path `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> Graph<usize, usize> {
    let mut g = isolated(n);
    for a in 1..n {
        g.add_edge(&(a - 1), &a);
    }
    g
}

/// Cycle on `n` nodes. For `n < 3` this degenerates to a path.
pub fn cycle(n: usize) -> Graph<usize, usize> {
    let mut g = path(n);
    if n >= 3 {
        g.add_edge(&(n - 1), &0);
    }
    g
}

/// Star with center `0` and `n - 1` leaves.
pub fn star(n: usize) -> Graph<usize, usize> {
    let mut g = isolated(n);
    for leaf in 1..n {
        g.add_edge(&0, &leaf);
    }
    g
}

/// `copies` disjoint paths, each labelled with `labels` in order.
///
/// `segments(n, &[0, 1, 2])` builds `n` separate `0 - 1 - 2` paths.
pub fn segments(copies: usize, labels: &[usize]) -> Graph<usize, usize> {
    let width = labels.len();
    let mut g = Graph::with_capacity(copies.saturating_mul(width));
    for copy in 0..copies {
        let base = copy * width;
        for (offset, label) in labels.iter().enumerate() {
            g.add_node(base + offset, *label);
            if offset > 0 {
                g.add_edge(&(base + offset - 1), &(base + offset));
            }
        }
    }
    g
}

fn isolated(n: usize) -> Graph<usize, usize> {
    let mut g = Graph::with_capacity(n);
    for key in 0..n {
        g.add_node(key, 0);
    }
    g
}

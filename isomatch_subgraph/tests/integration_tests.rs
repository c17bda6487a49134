#![allow(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

use std::time::Duration;

use isomatch_graph::{Graph, families};
use isomatch_subgraph::{
    Config, MatchError, MatchMode, ShortCircuit, Strategy, SubgraphMatcher, find_subgraphs,
    isomorphisms, subgraph_isomorphisms,
};
use lazy_static::lazy_static;
use rstest::rstest;

mod common;

use common::setup_test_logging;

lazy_static! {
    static ref K4: Graph<usize, usize> = families::complete(4);
    static ref TRIANGLE: Graph<usize, usize> = families::complete(3);
    static ref SEGMENT: Graph<usize, usize> = families::segments(1, &[0, 1, 2]);
}

fn config(mode: MatchMode, strategy: Strategy) -> Config {
    Config::builder().mode(mode).strategy(strategy).build()
}

#[rstest]
fn k4_automorphisms(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let found = SubgraphMatcher::search(&*K4, &*K4, &config(MatchMode::Isomorphism, strategy))
        .expect("unbounded search");
    assert_eq!(found.len(), 24);
    assert!(found.short_circuit.is_none());
}

#[rstest]
fn triangle_in_k4(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let found = SubgraphMatcher::search(&*TRIANGLE, &*K4, &config(MatchMode::Subgraph, strategy))
        .expect("unbounded search");
    assert_eq!(found.len(), 24);
}

#[rstest]
#[case::cycle4(families::cycle(4), 8)]
#[case::path4(families::path(4), 2)]
#[case::star5(families::star(5), 24)]
fn automorphism_counts(
    #[case] graph: Graph<usize, usize>,
    #[case] expected: usize,
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let found = SubgraphMatcher::search(&graph, &graph, &config(MatchMode::Isomorphism, strategy))
        .expect("unbounded search");
    assert_eq!(found.len(), expected);
}

#[rstest]
fn labelled_segments(
    #[values(1, 2, 4, 8)] copies: usize,
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let target = families::segments(copies, &[0, 1, 2]);
    let found = SubgraphMatcher::search(&*SEGMENT, &target, &config(MatchMode::Subgraph, strategy))
        .expect("unbounded search");
    assert_eq!(found.len(), copies);

    for (copy, e) in found.iter().enumerate() {
        assert_eq!(e.get(&0), Some(&(copy * 3)));
        assert_eq!(e.get(&2), Some(&(copy * 3 + 2)));
    }
}

#[rstest]
fn disconnected_pattern(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let pattern = families::segments(2, &[0, 1]);
    let target = families::segments(3, &[0, 1]);
    let found = SubgraphMatcher::search(&pattern, &target, &config(MatchMode::Subgraph, strategy))
        .expect("unbounded search");
    // an ordered pair of distinct target segments
    assert_eq!(found.len(), 6);
}

#[rstest]
fn star_in_complete(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let found = SubgraphMatcher::search(
        &families::star(4),
        &*K4,
        &config(MatchMode::Subgraph, strategy),
    )
    .expect("unbounded search");
    assert_eq!(found.len(), 24);
}

#[test]
fn first_embedding_is_deterministic() {
    setup_test_logging();
    let found = subgraph_isomorphisms(&*TRIANGLE, &*K4);
    let first: Vec<(usize, usize)> = found[0].iter().map(|(p, t)| (*p, *t)).collect();
    assert_eq!(first, vec![(0, 0), (1, 1), (2, 2)]);
}

#[rstest]
#[case::too_many_nodes(families::complete(4), families::complete(3), ShortCircuit::NodeCount { pattern: 4, target: 3 })]
#[case::too_many_edges(families::cycle(4), families::path(4), ShortCircuit::EdgeCount { pattern: 4, target: 3 })]
#[case::no_label_match(families::segments(1, &[5]), families::segments(2, &[0, 1]), ShortCircuit::EmptyCandidates { vertex: 0 })]
fn preconditions_short_circuit(
    #[case] pattern: Graph<usize, usize>,
    #[case] target: Graph<usize, usize>,
    #[case] reason: ShortCircuit<usize>,
) {
    setup_test_logging();
    let found = find_subgraphs(&pattern, &target, &Config::subgraph()).expect("unbounded search");
    assert!(found.is_empty());
    assert_eq!(found.short_circuit, Some(reason));
    assert_eq!(found.stats.frames, 0);
}

#[test]
fn pruning_is_not_a_short_circuit() {
    setup_test_logging();
    // sizes and candidate sets allow a triangle, the edges do not
    let found = find_subgraphs(&*TRIANGLE, &families::path(5), &Config::subgraph())
        .expect("unbounded search");
    assert!(found.is_empty());
    assert!(!found.is_short_circuited());
    assert!(found.stats.frames > 0);
    assert!(found.stats.candidates_scanned > 0);
}

#[test]
fn isomorphism_size_mismatch_is_empty() {
    setup_test_logging();
    assert!(isomorphisms(&*TRIANGLE, &*K4).is_empty());
    assert!(isomorphisms(&families::cycle(4), &families::star(4)).is_empty());
}

fn two_triangles() -> Graph<usize, usize> {
    let mut g = Graph::with_capacity(6);
    for key in 0..6 {
        g.add_node(key, 0);
    }
    for (a, b) in [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)] {
        g.add_edge(&a, &b);
    }
    g
}

#[rstest]
fn equal_degrees_but_not_isomorphic(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    // same node count, edge count and degree sequence as the 6-cycle
    let (hexagon, triangles) = (families::cycle(6), two_triangles());
    let cfg = config(MatchMode::Isomorphism, strategy);

    for (pattern, target) in [(&hexagon, &triangles), (&triangles, &hexagon)] {
        let found = SubgraphMatcher::search(pattern, target, &cfg).expect("unbounded search");
        assert!(found.is_empty());
        assert_eq!(found.short_circuit, None);
    }
}

#[rstest]
fn image_set_dedupe(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let cfg = Config::builder().subgraph().strategy(strategy).image_set().build();
    let found = SubgraphMatcher::search(&*TRIANGLE, &*K4, &cfg).expect("unbounded search");
    assert_eq!(found.len(), 4);

    let images: std::collections::HashSet<Vec<&usize>> =
        found.iter().map(|e| e.image()).collect();
    assert_eq!(images.len(), 4);
}

#[rstest]
#[case::first(1)]
#[case::five(5)]
#[case::above_total(100)]
fn result_limit(#[case] limit: usize) {
    setup_test_logging();
    let cfg = Config::builder().subgraph().limit(limit).build();
    let found = SubgraphMatcher::search(&*TRIANGLE, &*K4, &cfg).expect("unbounded search");
    assert_eq!(found.len(), limit.min(24));

    // a limit keeps the prefix of the unlimited enumeration
    let all = subgraph_isomorphisms(&*TRIANGLE, &*K4);
    assert_eq!(found.items[..], all[..found.len()]);
}

#[test]
fn step_budget_aborts() {
    setup_test_logging();
    let cfg = Config::builder().subgraph().unordered().max_steps(5).build();
    let err = SubgraphMatcher::search(&*TRIANGLE, &families::complete(6), &cfg)
        .expect_err("budget is far too small");
    assert!(matches!(err, MatchError::StepBudgetExhausted { limit: 5, .. }));
}

#[test]
fn generous_budget_is_not_hit() {
    setup_test_logging();
    let cfg = Config::builder().isomorphism().max_steps(1_000_000).build();
    let found = SubgraphMatcher::search(&*K4, &*K4, &cfg).expect("budget is large enough");
    assert_eq!(found.len(), 24);
    assert!(found.stats.frames <= 1_000_000);
}

#[test]
fn zero_timeout_aborts() {
    setup_test_logging();
    let cfg = Config::builder().subgraph().timeout(Duration::ZERO).build();
    let err = SubgraphMatcher::search(&*TRIANGLE, &*K4, &cfg).expect_err("deadline already passed");
    assert!(matches!(err, MatchError::Timeout { found: 0, .. }));
}

#[test]
fn empty_pattern_has_one_empty_embedding() {
    setup_test_logging();
    let empty: Graph<usize, usize> = Graph::new();

    let found = subgraph_isomorphisms(&empty, &*K4);
    assert_eq!(found.len(), 1);
    assert!(found[0].is_empty());

    let found = isomorphisms(&empty, &empty);
    assert_eq!(found.len(), 1);
    assert!(isomorphisms(&empty, &*K4).is_empty());
}

#[rstest]
fn self_loops_are_preserved(
    #[values(Strategy::Unordered, Strategy::Ordered, Strategy::Propagating)] strategy: Strategy,
) {
    setup_test_logging();
    let mut pattern: Graph<u8, ()> = Graph::new();
    pattern.add_node(0, ());
    pattern.add_edge(&0, &0);

    let mut target: Graph<u8, ()> = Graph::new();
    for key in 0..3 {
        target.add_node(key, ());
    }
    target.add_edge(&0, &2);
    target.add_edge(&1, &1);

    let found = SubgraphMatcher::search(&pattern, &target, &config(MatchMode::Subgraph, strategy))
        .expect("unbounded search");
    assert_eq!(found.len(), 1);
    assert_eq!(found.items[0].get(&0), Some(&1));
}

#[test]
fn string_keys_and_labels() {
    setup_test_logging();
    let mut target: Graph<&str, &str> = Graph::new();
    target.add_node("c1", "C");
    target.add_node("o1", "O");
    target.add_node("c2", "C");
    target.add_node("h1", "H");
    target.add_edge(&"c1", &"o1");
    target.add_edge(&"o1", &"c2");
    target.add_edge(&"c2", &"h1");

    let mut pattern: Graph<&str, &str> = Graph::new();
    pattern.add_node("x", "C");
    pattern.add_node("y", "O");
    pattern.add_edge(&"x", &"y");

    let found = subgraph_isomorphisms(&pattern, &target);
    let pairs: Vec<Vec<(&str, &str)>> = found
        .iter()
        .map(|e| e.iter().map(|(p, t)| (*p, *t)).collect())
        .collect();
    assert_eq!(
        pairs,
        vec![
            vec![("x", "c1"), ("y", "o1")],
            vec![("x", "c2"), ("y", "o1")],
        ]
    );
    assert_eq!(found[0].inverse().get(&"o1"), Some(&"y"));
}

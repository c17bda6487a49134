#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Once;

use isomatch_graph::{Graph, Labeled};
use isomatch_subgraph::{Embedding, MatchMode};
use quickcheck::{Arbitrary, Gen};

static INIT: Once = Once::new();

pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Small random labelled graph for property tests.
#[derive(Clone, Debug)]
pub struct SmallGraph(pub Graph<u8, u8>);

impl SmallGraph {
    fn generate(g: &mut Gen, max_nodes: u8) -> Self {
        let n = u8::arbitrary(g) % (max_nodes + 1);
        let mut graph = Graph::new();
        for key in 0..n {
            // two labels keep matches frequent without making every vertex alike
            graph.add_node(key, u8::arbitrary(g) % 2);
        }
        if n > 0 {
            let edges = usize::arbitrary(g) % (usize::from(n) * 2 + 1);
            for _ in 0..edges {
                let a = u8::arbitrary(g) % n;
                let b = u8::arbitrary(g) % n;
                if a != b {
                    graph.add_edge(&a, &b);
                }
            }
        }
        SmallGraph(graph)
    }
}

/// Pattern side: at most 4 vertices.
#[derive(Clone, Debug)]
pub struct SmallPattern(pub SmallGraph);

impl Arbitrary for SmallPattern {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallPattern(SmallGraph::generate(g, 4))
    }
}

/// Target side: at most 7 vertices.
#[derive(Clone, Debug)]
pub struct SmallTarget(pub SmallGraph);

impl Arbitrary for SmallTarget {
    fn arbitrary(g: &mut Gen) -> Self {
        SmallTarget(SmallGraph::generate(g, 7))
    }
}

/// Check that `e` is a valid embedding of `pattern` into `target` under `mode`.
#[track_caller]
pub fn check_embedding<D>(
    pattern: &Graph<u8, D>,
    target: &Graph<u8, D>,
    e: &Embedding<u8>,
    mode: MatchMode,
) -> Result<(), String>
where
    D: Labeled,
{
    if e.len() != pattern.node_count() {
        return Err(format!(
            "mapping covers {} of {} pattern vertices",
            e.len(),
            pattern.node_count()
        ));
    }

    let image: HashSet<&u8> = e.iter().map(|(_, t)| t).collect();
    if image.len() != e.len() {
        return Err("mapping is not injective".to_string());
    }
    if mode == MatchMode::Isomorphism && image.len() != target.node_count() {
        return Err("isomorphism does not cover the target".to_string());
    }

    for (p, t) in e {
        let (Some(pd), Some(td)) = (pattern.node(p), target.node(t)) else {
            return Err(format!("{p} -> {t} uses an unknown key"));
        };
        if pd.label() != td.label() {
            return Err(format!("{p} -> {t} changes the label"));
        }
        if pattern.degree(p).out_degree > target.degree(t).out_degree {
            return Err(format!("{p} -> {t} lowers the degree"));
        }
    }

    for (a, b) in pattern.edges() {
        let (Some(ta), Some(tb)) = (e.get(a), e.get(b)) else {
            return Err(format!("edge {a}-{b} has an unmapped endpoint"));
        };
        if !target.adjacent(ta, tb) {
            return Err(format!("edge {a}-{b} is not preserved"));
        }
    }

    Ok(())
}

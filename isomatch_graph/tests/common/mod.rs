#![allow(dead_code)]

use std::sync::Once;

use isomatch_graph::Graph;

static INIT: Once = Once::new();

pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert that an invariant holds
#[macro_export]
macro_rules! assert_invariant {
    ($cond:expr, $invariant_name:expr) => {
        if !$cond {
            panic!(
                "Invariant violated: {}\nCondition: {}",
                $invariant_name,
                stringify!($cond)
            );
        }
    };
}

/// Build a graph on `0..n` from an arbitrary edge list, folding endpoints
/// into range so every generated edge is valid.
pub fn graph_from_edges(n: u8, edges: &[(u8, u8)]) -> Graph<u8, ()> {
    let mut g = Graph::new();
    for key in 0..n {
        g.add_node(key, ());
    }
    if n == 0 {
        return g;
    }
    for (a, b) in edges {
        g.add_edge(&(a % n), &(b % n));
    }
    g
}

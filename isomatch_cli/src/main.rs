//! isomatch CLI
//!
//! Builds a pattern and a target graph from the generated families, runs one
//! search and prints the result count, the search statistics and optionally
//! every embedding.

mod args;
mod error;

use clap::Parser;
use isomatch_subgraph::SubgraphMatcher;
use tracing::info;

use args::Args;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let config = args.to_config()?;
    let pattern = args.pattern_graph()?;
    let target = args.target_graph()?;

    info!("pattern: {}", pattern.summary());
    info!("target: {}", target.summary());
    info!("config: {:?}", config);

    let found = SubgraphMatcher::search(&pattern, &target, &config)?;

    if let Some(reason) = &found.short_circuit {
        println!("no search needed: {reason:?}");
    }
    println!("{} embeddings", found.len());
    println!(
        "frames={} scanned={} pruned={} elapsed={:?}",
        found.stats.frames, found.stats.candidates_scanned, found.stats.pruned, found.stats.elapsed
    );

    if args.print {
        for (i, embedding) in found.iter().enumerate() {
            let pairs: Vec<String> = embedding.iter().map(|(p, t)| format!("{p}->{t}")).collect();
            println!("{i}: {}", pairs.join(" "));
        }
    }

    Ok(())
}

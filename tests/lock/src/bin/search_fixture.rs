//! Binary that runs a graph search and prints deterministic output lines for
//! cross-process verification.
//!
//! Usage: `search_fixture [GRAPH_JSON START TARGET [POLICY_JSON]]`
//!
//! With no arguments, searches the built-in sample graph from 0 to 12 under
//! the default policy. Logs go to stderr (filter with `RUST_LOG`); stdout
//! carries only `key=value` lines.

use pathwright_harness::graph::XyGraph;
use pathwright_harness::runner::run_search_with_digest;
use pathwright_search::policy::SearchPolicy;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (graph, start, target, policy) = match args.as_slice() {
        [] => (XyGraph::sample(), 0, 12, SearchPolicy::default()),
        [graph_path, start, target, rest @ ..] if rest.len() <= 1 => {
            let bytes = std::fs::read(graph_path).expect("read graph file");
            let graph = XyGraph::from_json_slice(&bytes).expect("valid graph JSON");
            let policy = rest.first().map_or_else(SearchPolicy::default, |path| {
                let bytes = std::fs::read(path).expect("read policy file");
                SearchPolicy::from_json_slice(&bytes).expect("valid policy JSON")
            });
            (
                graph,
                start.parse().expect("numeric start id"),
                target.parse().expect("numeric target id"),
                policy,
            )
        }
        _ => {
            eprintln!("usage: search_fixture [GRAPH_JSON START TARGET [POLICY_JSON]]");
            std::process::exit(2);
        }
    };

    let graph_digest = graph.digest().expect("graph canonicalizes");
    let (report, digest) =
        run_search_with_digest(&graph, start, target, &policy).expect("search run failed");

    let path = report.path.as_ref().map_or_else(
        || "none".to_string(),
        |ids| {
            ids.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",")
        },
    );
    let cost = report
        .cost
        .map_or_else(|| "none".to_string(), |c| c.to_string());

    println!("graph_digest={}", graph_digest.as_str());
    println!("termination={}", report.termination);
    println!("steps={}", report.stats.steps);
    println!("expansions={}", report.stats.expansions);
    println!("path={path}");
    println!("cost={cost}");
    println!("report_digest={}", digest.as_str());
}

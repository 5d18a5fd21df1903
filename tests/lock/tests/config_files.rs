//! Loading policies and graphs from files on disk.

use std::fs;

use pathwright_harness::graph::{GraphError, XyGraph};
use pathwright_harness::runner::{run_search, RunError};
use pathwright_search::error::SearchError;
use pathwright_search::policy::SearchPolicy;
use pathwright_search::search::Termination;

#[test]
fn policy_and_graph_load_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("graph.json");
    let policy_path = dir.path().join("policy.json");
    fs::write(
        &graph_path,
        r#"{
            "nodes": [
                {"id": 10, "x": 0, "y": 0, "neighbors": [11, 12]},
                {"id": 11, "x": 5, "y": 0, "neighbors": [13]},
                {"id": 12, "x": 0, "y": 1, "neighbors": [13]},
                {"id": 13, "x": 5, "y": 1}
            ]
        }"#,
    )
    .unwrap();
    fs::write(&policy_path, r#"{"max_steps": 64}"#).unwrap();

    let graph = XyGraph::from_json_slice(&fs::read(&graph_path).unwrap()).unwrap();
    let policy = SearchPolicy::from_json_slice(&fs::read(&policy_path).unwrap()).unwrap();
    assert_eq!(policy.max_steps, 64);
    assert_eq!(policy.beam_width, None);

    let report = run_search(&graph, 10, 13, &policy).unwrap();
    assert_eq!(report.termination, Termination::Solved);
    assert_eq!(report.cost, Some(6));
    // 11 and 12 tie on total 6; the lower id is expanded and reaches 13 first.
    assert_eq!(report.path, Some(vec![10, 11, 13]));
}

#[test]
fn empty_policy_document_takes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, "{}").unwrap();
    let policy = SearchPolicy::from_json_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(policy, SearchPolicy::default());
}

#[test]
fn zero_beam_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("policy.json");
    fs::write(&path, r#"{"beam_width": 0}"#).unwrap();
    let err = SearchPolicy::from_json_slice(&fs::read(&path).unwrap()).unwrap_err();
    assert!(matches!(err, SearchError::InvalidPolicy { .. }));
}

#[test]
fn graph_with_duplicate_ids_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{"nodes": [{"id": 1, "x": 0, "y": 0}, {"id": 1, "x": 2, "y": 2}]}"#,
    )
    .unwrap();
    let err = XyGraph::from_json_slice(&fs::read(&path).unwrap()).unwrap_err();
    assert!(matches!(err, GraphError::DuplicateNode { id: 1 }));
}

#[test]
fn graph_file_round_trips_through_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.json");
    let doc = serde_json::json!({ "nodes": XyGraph::sample().to_records() });
    fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();

    let loaded = XyGraph::from_json_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(loaded, XyGraph::sample());
    assert_eq!(loaded.digest().unwrap(), XyGraph::sample().digest().unwrap());
}

#[test]
fn missing_endpoint_in_loaded_graph() {
    let graph = XyGraph::from_json_slice(br#"{"nodes": [{"id": 0, "x": 0, "y": 0}]}"#).unwrap();
    let err = run_search(&graph, 0, 5, &SearchPolicy::default()).unwrap_err();
    assert!(matches!(err, RunError::Graph(GraphError::UnknownNode { id: 5 })));
    assert_eq!(err.to_string(), "node 5 is not in the graph");
}

//! Property tests over small random graphs.
//!
//! Manhattan edge costs with a Manhattan heuristic are admissible and
//! consistent, so plain A* must agree with Bellman-Ford on every instance.

use std::collections::BTreeMap;

use lock_tests::graph_helpers::{
    bellman_ford, build_graph, path_cost, reachable, AdmissionLog, RecordingEnumerator,
};
use pathwright_harness::graph::{AdjacencyEnumerator, NodeId, XyGraph};
use pathwright_harness::runner::run_search;
use pathwright_search::contract::MatchId;
use pathwright_search::policy::SearchPolicy;
use pathwright_search::search::{AStar, Termination};
use proptest::prelude::*;

/// A graph of 1 to 11 nodes plus a start and target inside it.
fn instance() -> impl Strategy<Value = (XyGraph, NodeId, NodeId)> {
    (1_u32..12).prop_flat_map(|n| {
        let len = n as usize;
        (
            prop::collection::vec((-20_i64..20, -20_i64..20), len),
            prop::collection::vec((0..n, 0..n), 0..len * 3),
            0..n,
            0..n,
        )
            .prop_map(|(coords, edges, start, target)| {
                (build_graph(&coords, &edges), start, target)
            })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn astar_cost_matches_bellman_ford((graph, start, target) in instance()) {
        let report = run_search(&graph, start, target, &SearchPolicy::default()).unwrap();
        let expected = bellman_ford(&graph, start).get(&target).copied();

        match expected {
            Some(cost) => {
                prop_assert_eq!(report.termination, Termination::Solved);
                prop_assert_eq!(report.cost, Some(cost));
                let path = report.path.unwrap();
                prop_assert_eq!(path.first().copied(), Some(start));
                prop_assert_eq!(path.last().copied(), Some(target));
                prop_assert_eq!(path_cost(&graph, &path), Some(cost));
            }
            None => {
                prop_assert_eq!(report.termination, Termination::Exhausted);
                prop_assert!(report.path.is_none());
            }
        }
    }

    #[test]
    fn steps_bounded_by_reachable_nodes((graph, start, target) in instance()) {
        let report = run_search(&graph, start, target, &SearchPolicy::default()).unwrap();
        let bound = reachable(&graph, start).len() as u64 + 1;
        prop_assert!(report.stats.steps <= bound, "{} steps > {}", report.stats.steps, bound);
        prop_assert!(report.stats.expansions < bound);
    }

    #[test]
    fn no_node_expanded_twice((graph, start, target) in instance()) {
        let mut engine = AStar::new(
            graph.node(start).unwrap().clone(),
            graph.node(target).unwrap().clone(),
            MatchId(target),
            RecordingEnumerator::new(&graph),
        ).unwrap();
        engine.run(1_000).unwrap();

        let expanded = &engine.enumerator().expanded;
        let mut unique = expanded.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), expanded.len());
        prop_assert!(!expanded.contains(&target), "accepted node is never expanded");
        for id in expanded {
            prop_assert!(engine.closed_set().contains(id));
        }
    }

    #[test]
    fn cost_revisions_strictly_decrease((graph, start, target) in instance()) {
        let mut engine = AStar::with_beam(
            graph.node(start).unwrap().clone(),
            graph.node(target).unwrap().clone(),
            MatchId(target),
            AdjacencyEnumerator::new(&graph),
            AdmissionLog::default(),
        ).unwrap();
        engine.run(1_000).unwrap();

        let mut last: BTreeMap<NodeId, i64> = BTreeMap::new();
        for &(id, g) in &engine.beam_filter().admitted {
            if let Some(&previous) = last.get(&id) {
                prop_assert!(g < previous, "node {} revised from {} to {}", id, previous, g);
            }
            last.insert(id, g);
        }
        // The predecessor map holds one entry per admitted identity.
        prop_assert_eq!(engine.solution().len(), last.len());
    }

    #[test]
    fn beam_width_bounds_frontier(
        (graph, start, target) in instance(),
        width in 1_usize..5,
    ) {
        let policy = SearchPolicy { beam_width: Some(width), ..SearchPolicy::default() };
        let report = run_search(&graph, start, target, &policy).unwrap();
        prop_assert!(report.stats.frontier_high_water <= width);

        // A beam never invents a cheaper path than the exact search.
        if let (Some(beam_cost), Some(exact)) =
            (report.cost, bellman_ford(&graph, start).get(&target).copied())
        {
            prop_assert!(beam_cost >= exact);
        }
    }

    #[test]
    fn budgeted_runs_resume_to_the_same_answer(
        (graph, start, target) in instance(),
        chunk in 1_u64..4,
    ) {
        let mut chunked = AStar::new(
            graph.node(start).unwrap().clone(),
            graph.node(target).unwrap().clone(),
            MatchId(target),
            AdjacencyEnumerator::new(&graph),
        ).unwrap();
        let mut termination = chunked.run(chunk).unwrap();
        while termination == Termination::StepBudgetExceeded {
            prop_assert!(chunked.stats().steps % chunk == 0);
            termination = chunked.run(chunk).unwrap();
        }

        let whole = run_search(&graph, start, target, &SearchPolicy::default()).unwrap();
        prop_assert_eq!(termination, whole.termination);
        prop_assert_eq!(chunked.path(), whole.path);
        prop_assert_eq!(chunked.stats(), whole.stats);
    }
}

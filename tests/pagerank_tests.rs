// tests/pagerank_tests.rs

use quantum_walk::pagerank::exact;
use quantum_walk::{
    ClassicalPageRank, ConvergenceConfig, DirectedGraph, Distribution, ExactConfig, GraphBuilder,
    NodeId, PageRank, QuantumPageRank, WalkError, WalkPhase, check_distribution, l1_distance,
};

// Helper: initialize test logging once per process
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper: eight nodes, one of them (7) with no in-edges
fn web_graph() -> Result<DirectedGraph, WalkError> {
    DirectedGraph::from_edges([
        (0u64, 1u64),
        (0, 2),
        (0, 3),
        (0, 5),
        (1, 0),
        (1, 2),
        (1, 3),
        (2, 1),
        (2, 6),
        (3, 5),
        (4, 1),
        (4, 5),
        (5, 2),
        (6, 4),
        (7, 1),
        (7, 2),
        (7, 6),
    ])
}

// Helper function to compare a distribution against expected (node, weight) pairs
fn check_ranks(ranks: &Distribution<NodeId>, expected: &[(u64, f64)], tolerance: f64) {
    for &(node, weight) in expected {
        let actual = ranks
            .get(&NodeId(node))
            .unwrap_or_else(|| panic!("Node {} missing from ranking", node));
        assert!(
            (actual - weight).abs() < tolerance,
            "Node {}: got {:.5}, expected {:.5}",
            node, actual, weight
        );
    }
}

#[test]
fn test_exact_pagerank_reference_values() -> Result<(), WalkError> {
    init_logging();
    let graph = web_graph()?;
    let ranks = exact::pagerank(&graph, &ExactConfig::default())?;
    check_distribution(&ranks, Some(1e-9))?;
    check_ranks(
        &ranks,
        &[
            (0, 0.0722),
            (1, 0.1886),
            (2, 0.2291),
            (3, 0.0875),
            (4, 0.1220),
            (5, 0.1603),
            (6, 0.1214),
            (7, 0.01875),
        ],
        1e-3,
    );
    assert_eq!(ranks.argmax(), Some(NodeId(2)));
    Ok(())
}

#[test]
fn test_classical_estimate_approaches_exact() -> Result<(), WalkError> {
    init_logging();
    let graph = web_graph()?;
    let mut cpr = ClassicalPageRank::with_seed(&graph, 0.85, 20_240_601)?;
    cpr.run(200_000)?;

    let estimate = cpr.result()?;
    let exact = cpr.classical_solution()?;
    let distance = l1_distance(&estimate, &exact)?;
    println!("classical L1 distance after {} steps: {:.4}", cpr.steps(), distance);
    assert!(distance < 0.05);
    check_distribution(&estimate, Some(1e-9))?;
    Ok(())
}

#[test]
fn test_quantum_solution_on_web_graph() -> Result<(), WalkError> {
    init_logging();
    let graph = web_graph()?;
    let mut qpr = QuantumPageRank::new(&graph);
    let solution = qpr.converge()?;

    assert_eq!(qpr.phase(), WalkPhase::Converged);
    assert_eq!(qpr.steps(), 47);
    check_distribution(&solution, Some(1e-9))?;
    check_ranks(
        &solution,
        &[
            (0, 0.0584),
            (1, 0.1911),
            (2, 0.2590),
            (3, 0.0739),
            (4, 0.1095),
            (5, 0.1745),
            (6, 0.1051),
            (7, 0.0285),
        ],
        1e-3,
    );
    // Same leader as the exact ranking.
    assert_eq!(solution.argmax(), Some(NodeId(2)));
    Ok(())
}

#[test]
fn test_quantum_solution_is_deterministic() -> Result<(), WalkError> {
    let graph = web_graph()?;
    let a = QuantumPageRank::new(&graph).quantum_solution()?;
    let b = QuantumPageRank::new(&graph).quantum_solution()?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test_quantum_convergence_on_small_graphs() -> Result<(), WalkError> {
    let cases: [(&[(u64, u64)], u64); 3] = [
        (&[(0, 1), (1, 2), (2, 0), (2, 1)], 33),
        (&[(0, 1), (0, 2), (1, 2), (2, 0), (3, 0)], 33),
        (&[(0, 1)], 15),
    ];
    for (edges, expected_steps) in cases {
        let graph = DirectedGraph::from_edges(edges.iter().copied())?;
        let mut qpr = QuantumPageRank::new(&graph);
        let solution = qpr.converge()?;
        assert_eq!(qpr.steps(), expected_steps, "edges {:?}", edges);
        assert!((solution.total() - 1.0).abs() < 1e-9);
    }
    Ok(())
}

#[test]
fn test_tight_step_cap_fails() -> Result<(), WalkError> {
    let graph = web_graph()?;
    let config = ConvergenceConfig::default().with_max_steps(10);
    let mut qpr = QuantumPageRank::with_config(&graph, config)?;
    match qpr.converge() {
        Err(WalkError::NonConvergence { steps, .. }) => assert_eq!(steps, 10),
        other => panic!("expected NonConvergence, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_builder_graph_matches_edge_list() -> Result<(), WalkError> {
    let graph = GraphBuilder::new()
        .add_node(9u64)
        .add_edges([(0u64, 1u64), (1, 0)])
        .build()?;
    // Node 9 is isolated: every visit to it teleports.
    assert_eq!(graph.node_ids().len(), 3);
    let ranks = exact::pagerank(&graph, &ExactConfig::default())?;
    check_distribution(&ranks, Some(1e-9))?;
    let isolated = ranks.get(&NodeId(9)).unwrap_or_default();
    assert!(isolated > 0.0 && isolated < 0.2);
    Ok(())
}

#[test]
fn test_estimator_errors() -> Result<(), WalkError> {
    let graph = web_graph()?;
    let cpr = ClassicalPageRank::new(&graph);
    assert!(matches!(cpr.result(), Err(WalkError::EmptyWalk { .. })));
    assert!(matches!(
        exact::pagerank(&graph, &ExactConfig::default().with_alpha(-0.1)),
        Err(WalkError::InvalidParameter { .. })
    ));
    assert!(matches!(
        exact::pagerank(&graph, &ExactConfig::default().with_max_iterations(1)),
        Err(WalkError::NonConvergence { steps: 1, .. })
    ));
    Ok(())
}

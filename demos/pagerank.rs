//! Example ranking the nodes of a small web graph three ways:
//! a Monte-Carlo random surfer, the quantum walk, and exact power iteration.

use quantum_walk::{
    ClassicalPageRank, DirectedGraph, PageRank, QuantumPageRank, WalkError, l1_distance,
};

fn main() -> Result<(), WalkError> {
    env_logger::init();
    println!("--- quantum_walk Example: Quantum PageRank ---");

    let graph = DirectedGraph::from_edges([
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
    ])?;
    println!("\nGraph:\n{}", graph);

    // --- Classical surfer, checked at growing step counts ---
    let mut classical = ClassicalPageRank::new(&graph);
    let exact = classical.classical_solution()?;
    println!("Exact PageRank:\n{}", exact);

    println!("\nClassical estimate (L1 distance to exact):");
    for target in [1u64, 10, 100, 1_000, 10_000] {
        classical.run(target - classical.steps())?;
        let estimate = classical.result()?;
        println!("  {:>6} steps: {:.4}", target, l1_distance(&estimate, &exact)?);
    }
    println!("\nClassical estimate after {} steps:\n{}", classical.steps(), classical.result()?);

    // --- Quantum walk ---
    let mut quantum = QuantumPageRank::new(&graph);
    match quantum.converge() {
        Ok(solution) => {
            println!("\nQuantum solution after {} steps:\n{}", quantum.steps(), solution);
            println!("L1 distance to exact: {:.4}", l1_distance(&solution, &exact)?);
            if let (Some(q), Some(c)) = (solution.argmax(), exact.argmax()) {
                println!("Top node: quantum {}, exact {}", q, c);
            }
        }
        Err(e) => {
            eprintln!("\n--- Quantum walk failed ---");
            eprintln!("Error: {}", e);
            return Err(e);
        }
    }

    Ok(())
}

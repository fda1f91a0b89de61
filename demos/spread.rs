//! Example comparing a coherent Hadamard walk with its decoherent counterpart.
//! The coherent walk spreads ballistically; the decoherent one diffuses.

use quantum_walk::{AmplitudePair, Lattice, LatticeWalk, WalkError};

const STEPS: u32 = 40;
const BAR_WIDTH: f64 = 120.0;

fn spread(decoherence: bool) -> Result<LatticeWalk, WalkError> {
    // Wide enough that nothing reaches the boundary.
    let mut walk = LatticeWalk::new(Lattice::centered(STEPS + 1), decoherence);
    walk.seed(0, AmplitudePair::balanced())?;
    walk.run(u64::from(STEPS))?;
    Ok(walk)
}

fn print_histogram(walk: &LatticeWalk) {
    let probs = walk.probabilities();
    // Odd step counts leave every even site empty, and vice versa.
    for (position, p) in probs.iter().filter(|(x, _)| (x - i64::from(STEPS)) % 2 == 0) {
        let bar = "#".repeat((p * BAR_WIDTH).round() as usize);
        println!("{:>4} {:.4} {}", position, p, bar);
    }
    let variance: f64 = probs.iter().map(|(x, p)| (x * x) as f64 * p).sum();
    println!("variance: {:.3}", variance);
}

fn main() -> Result<(), WalkError> {
    env_logger::init();
    println!("--- quantum_walk Example: Lattice Spread ({} steps) ---", STEPS);

    let coherent = spread(false)?;
    println!("\nCoherent walk on {}:", coherent.lattice());
    print_histogram(&coherent);

    let decoherent = spread(true)?;
    println!("\nDecoherent walk on {}:", decoherent.lattice());
    print_histogram(&decoherent);

    println!("\nThe coherent variance grows with t^2, the decoherent one with t.");
    Ok(())
}

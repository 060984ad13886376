// src/bin/search_race.rs

//! Demo: amplitude-amplified search next to a classical linear scan.
//! Searches the 32-entry space for index 18 (binary 10010) both ways and
//! prints the two cost reports.

use ampsearch::{BitString, SearchDriver, linear_search, recommended_iterations};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_qubits = 5;
    let target: usize = 0b10010; // 18

    let driver = SearchDriver::new(num_qubits)?;
    let n = driver.dim();
    let iterations = recommended_iterations(num_qubits, 1); // round((π/4)·√32) = 4

    // 1. Classical baseline: probe 0, 1, 2, … and count every check.
    let classical = linear_search(n, target);
    println!("CLASSICAL (linear) over N={}", n);
    println!("Target: {} (bin {})", target, BitString::from_index(target, num_qubits));
    match classical.found {
        Some(found) => {
            println!("Found:  {}  (bin {})", found, BitString::from_index(found, num_qubits));
        }
        None => println!("Found:  none"),
    }
    println!("Checks: {}   (avg ≈ {}, worst = {})", classical.comparisons, n / 2, n);
    println!();

    // 2. Quantum run: superposition, four amplification rounds, one
    //    measurement. Fresh OS-seeded randomness per invocation, so
    //    repeated runs show the (rare) misses too.
    let mut rng = rand::rng();
    let quantum = driver.run(target, iterations, &mut rng)?;

    println!("QUANTUM (Grover) over N={}", n);
    println!(
        "Target:         {} (bin {})",
        quantum.target(),
        BitString::from_index(quantum.target(), num_qubits)
    );
    println!(
        "Measured:       {} (bin {})",
        quantum.measured_index(),
        quantum.measured_bits()
    );
    println!("Iterations:     {}", quantum.iterations());
    println!(
        "Oracle checks:  {}   (≈ √N; diffusion not counted as checks)",
        quantum.oracle_calls()
    );
    println!();
    println!("Note: Grover is probabilistic; run a few times to see the success rate.");
    if quantum.is_hit() {
        println!("- Success! Measured index matches the marked index.");
    }

    Ok(())
}

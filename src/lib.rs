// src/lib.rs

//! `ampsearch` - Amplitude-amplification search over a simulated register
//!
//! This library simulates Grover-style search on an n-qubit state vector
//! and pairs it with a classical linear-search baseline, so the O(√N)
//! oracle cost can be demonstrated next to the classical O(N) probe cost.

pub mod baseline;
pub mod core;
pub mod measurement;
pub mod operators;
pub mod search;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use core::{BitString, SearchError, StateVector};
pub use operators::Operator;
pub use search::{
    GroverEngine,
    SearchDriver,
    SearchOutcome,
    recommended_iterations,
    run_grover_search,
};
pub use measurement::{MeasurementResult, measure, sample_index};
pub use validation::check_normalization;
pub use baseline::{BaselineOutcome, linear_search};

// Example: one complete seeded search run
// Prepares the 32-entry space, amplifies index 18 for the canonical four
// rounds, and measures once.
/// ```
/// use ampsearch::{SearchDriver, SearchError, recommended_iterations};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// fn main() -> Result<(), SearchError> {
///     let driver = SearchDriver::new(5)?;
///     let iterations = recommended_iterations(5, 1);
///     assert_eq!(iterations, 4);
///
///     let mut rng = StdRng::seed_from_u64(42);
///     let outcome = driver.run(18, iterations, &mut rng)?;
///     println!("{}", outcome);
///
///     // Four rounds means exactly four oracle applications, and the
///     // measured index always lies inside the space.
///     assert_eq!(outcome.oracle_calls(), 4);
///     assert!(outcome.measured_index() < driver.dim());
///     assert_eq!(outcome.measured_bits().to_index(), outcome.measured_index());
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example: quantum run next to the classical baseline
/// ```
/// use ampsearch::{linear_search, run_grover_search, SearchError};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// fn main() -> Result<(), SearchError> {
///     let classical = linear_search(32, 18);
///     assert_eq!(classical.found, Some(18));
///     assert_eq!(classical.comparisons, 19);
///
///     let mut rng = StdRng::seed_from_u64(7);
///     let quantum = run_grover_search(5, 18, 4, &mut rng)?;
///     // The oracle was consulted four times against nineteen classical probes.
///     assert_eq!(quantum.oracle_calls(), 4);
///     Ok(())
/// }
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

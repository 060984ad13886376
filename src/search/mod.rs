// src/search/mod.rs

//! Drives complete amplitude-amplification search runs.
//! This module contains the `SearchDriver` entry point and the `GroverEngine`
//! responsible for evolving the register through its oracle/diffusion rounds.

// Engine stays its own module so callers who want per-round control
// (inspecting P(target) between rounds, measuring by hand) can use it
// directly; the driver is the one-call path.
pub mod engine;
mod outcome;

// Re-export the main public interface types
pub use engine::GroverEngine;
pub use outcome::SearchOutcome;

use rand::Rng;
use std::f64::consts::PI;

use crate::core::SearchError;
use crate::core::state;
use crate::measurement;

/// Entry point for running searches over a fixed register width.
///
/// The driver itself is reusable: each [`run`](Self::run) builds a fresh
/// single-use [`GroverEngine`], so consecutive runs never share state.
#[derive(Debug, Clone)]
pub struct SearchDriver {
    num_qubits: usize,
    dim: usize,
}

impl SearchDriver {
    /// Creates a driver for an n-qubit search space of `2^n` indices.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidDimension`] if `num_qubits` is zero or
    /// `2^num_qubits` overflows `usize`.
    pub fn new(num_qubits: usize) -> Result<Self, SearchError> {
        let dim = state::checked_dimension(num_qubits)?;
        Ok(Self { num_qubits, dim })
    }

    /// The register width n.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The search-space size N = 2^n.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Runs one complete search: superposition, `iterations` rounds of
    /// amplification for `target`, then a single measurement drawn from
    /// `rng`.
    ///
    /// The iteration count is applied exactly as given. Callers wanting the
    /// canonical count use [`recommended_iterations`]; the driver never
    /// derives or clamps it, so deliberately under- and over-rotated runs
    /// are expressible.
    ///
    /// # Arguments
    /// * `target` - The index the oracle marks, in `[0, 2^n)`.
    /// * `iterations` - Number of (oracle, diffusion) rounds to apply.
    /// * `rng` - Injected randomness for the final measurement. Seed it for
    ///   a reproducible run.
    ///
    /// # Returns
    /// * `Ok(SearchOutcome)` with the measured index (plus its MSB-first
    ///   bit sequence) and the oracle-call count. A measurement that misses
    ///   the target is still `Ok`.
    /// * `Err(SearchError)` if the target is out of range or the register
    ///   loses normalization mid-run.
    pub fn run<R: Rng + ?Sized>(
        &self,
        target: usize,
        iterations: u32,
        rng: &mut R,
    ) -> Result<SearchOutcome, SearchError> {
        let mut engine = GroverEngine::new(self.num_qubits, target)?;
        engine.run_iterations(iterations)?;

        let oracle_calls = engine.oracle_calls();
        let measurement = measurement::measure(engine.into_state(), rng);
        Ok(SearchOutcome::new(measurement, oracle_calls, iterations, target))
    }
}

/// One-shot convenience wrapper: builds a [`SearchDriver`] and runs a single
/// search with it.
///
/// # Errors
/// As [`SearchDriver::new`] and [`SearchDriver::run`].
pub fn run_grover_search<R: Rng + ?Sized>(
    num_qubits: usize,
    target: usize,
    iterations: u32,
    rng: &mut R,
) -> Result<SearchOutcome, SearchError> {
    SearchDriver::new(num_qubits)?.run(target, iterations, rng)
}

/// The canonical iteration count round((π/4)·√(N/M)) for an n-qubit space
/// with `marked_count` marked indices, floored at 1.
///
/// Advisory only: nothing in this crate applies it implicitly; the caller
/// decides what to pass to [`SearchDriver::run`]. A `marked_count` of zero
/// is treated as 1 (the formula has no meaning for an empty marked set).
pub fn recommended_iterations(num_qubits: usize, marked_count: usize) -> u32 {
    let n = (num_qubits as f64).exp2();
    let m = marked_count.max(1) as f64;
    let k = ((PI / 4.0) * (n / m).sqrt()).round();
    k.max(1.0) as u32
}

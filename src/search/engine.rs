// src/search/engine.rs

//! The single-use amplitude-amplification engine.
//!
//! A [`GroverEngine`] owns one prepared [`StateVector`] and walks it through
//! the oracle/diffusion rounds of a single search run, counting oracle
//! applications as it goes. Reuse is ruled out by a small phase machine:
//! once `run_iterations` has been called, a second call is an error rather
//! than a silent re-run over an already rotated state.

use crate::core::{SearchError, StateVector};
use crate::operators::Operator;

/// Progress of an engine through its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EnginePhase {
    /// Superposition prepared, iterations not yet requested.
    Initialized,
    /// Oracle/diffusion rounds in flight (also the resting phase if an
    /// iteration failed mid-run; the engine stays unusable either way).
    Iterating,
    /// Iterations consumed. Only inspection and measurement remain.
    Completed,
}

/// One search run over an n-qubit register: uniform superposition, then
/// `k` (oracle, diffusion) rounds on demand.
#[derive(Debug)]
pub struct GroverEngine {
    state: StateVector,
    target: usize,
    oracle_calls: u64,
    phase: EnginePhase,
}

impl GroverEngine {
    /// Prepares an engine for one run: builds the register at |0…0⟩,
    /// validates the target against its dimension, and applies the uniform
    /// superposition, so the returned engine already holds every index at
    /// probability 1/N.
    ///
    /// # Arguments
    /// * `num_qubits` - Register width n; the search space is `[0, 2^n)`.
    /// * `target` - The index the oracle will mark.
    ///
    /// # Errors
    /// * [`SearchError::InvalidDimension`] for an unrepresentable register.
    /// * [`SearchError::InvalidTarget`] if `target` lies outside `[0, 2^n)`;
    ///   no operator has run when this is raised.
    pub fn new(num_qubits: usize, target: usize) -> Result<Self, SearchError> {
        let mut state = StateVector::new(num_qubits)?;
        if target >= state.dim() {
            return Err(SearchError::InvalidTarget { target, dim: state.dim() });
        }
        state.apply_unitary(&Operator::Superposition)?;

        Ok(Self {
            state,
            target,
            oracle_calls: 0,
            phase: EnginePhase::Initialized,
        })
    }

    /// Runs `iterations` (oracle, diffusion) rounds, advancing the oracle
    /// counter by one per round. The count is applied exactly as given:
    /// no clamping toward the optimal rotation, so over-rotation is the
    /// caller's to observe. `iterations == 0` is a valid run that leaves
    /// the uniform superposition in place and still completes the engine.
    ///
    /// # Errors
    /// * [`SearchError::EngineAlreadyCompleted`] if this engine has already
    ///   run (each engine serves exactly one call).
    /// * [`SearchError::NumericalInstability`] if normalization drifts
    ///   beyond tolerance after any round.
    pub fn run_iterations(&mut self, iterations: u32) -> Result<(), SearchError> {
        if self.phase != EnginePhase::Initialized {
            return Err(SearchError::EngineAlreadyCompleted);
        }
        self.phase = EnginePhase::Iterating;

        let oracle = Operator::Oracle { target: self.target };
        for _ in 0..iterations {
            self.state.apply_unitary(&oracle)?;
            self.oracle_calls += 1;
            self.state.apply_unitary(&Operator::Diffusion)?;
        }

        self.phase = EnginePhase::Completed;
        Ok(())
    }

    /// How many times the oracle has been applied so far.
    pub fn oracle_calls(&self) -> u64 {
        self.oracle_calls
    }

    /// The index the oracle marks.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Read access to the evolving register, e.g. to inspect P(target)
    /// after the run.
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Hands the final register to measurement, consuming the engine.
    pub fn into_state(self) -> StateVector {
        self.state
    }
}

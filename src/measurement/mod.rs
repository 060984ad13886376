// src/measurement/mod.rs

//! Born-rule sampling of a [`StateVector`].
//!
//! Measurement is the only randomized step in a search run, and the
//! randomness is injected: callers hand in the `Rng`, so a seeded
//! generator makes whole runs reproducible.

use rand::{Rng, RngExt};
use std::fmt;

use crate::core::{BitString, StateVector};

/// The outcome of measuring a register: the collapsed basis index together
/// with its bit sequence, most-significant bit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementResult {
    index: usize,
    bits: BitString,
}

impl MeasurementResult {
    /// The measured basis index, in `[0, N)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The measured index as an n-bit word, most-significant bit first.
    pub fn bits(&self) -> &BitString {
        &self.bits
    }
}

impl fmt::Display for MeasurementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.index, self.bits)
    }
}

/// Draws one basis index from the state's probability distribution.
///
/// Consumes exactly one `f64` from `rng`: the draw `r ∈ [0, 1)` is walked
/// against the cumulative probabilities and the first index whose running
/// sum exceeds `r` is selected. If floating-point drift leaves `r`
/// unconsumed past the final bucket, the last index is returned, so a
/// valid index comes back for every normalized state.
///
/// # Arguments
/// * `state` - The state to sample. Borrowed, so repeated sampling of one
///   prepared state (e.g. to histogram its distribution) is possible.
/// * `rng` - The injected randomness source.
pub fn sample_index<R: Rng + ?Sized>(state: &StateVector, rng: &mut R) -> usize {
    let r: f64 = rng.random::<f64>();
    let mut cumulative = 0.0;
    // Fallback to the last index in case r is never exceeded.
    let mut chosen = state.dim() - 1;

    for (index, amplitude) in state.amplitudes().iter().enumerate() {
        cumulative += amplitude.norm_sqr();
        if r < cumulative {
            chosen = index;
            break;
        }
    }
    chosen
}

/// Measures the register once, consuming the state.
///
/// Taking `state` by value reflects the contract that a state vector
/// belongs to a single run: after measurement there is no live
/// superposition left to reuse.
///
/// # Returns
/// The collapsed index with its most-significant-bit-first bit sequence.
pub fn measure<R: Rng + ?Sized>(state: StateVector, rng: &mut R) -> MeasurementResult {
    let index = sample_index(&state, rng);
    let bits = BitString::from_index(index, state.num_qubits());
    MeasurementResult { index, bits }
}

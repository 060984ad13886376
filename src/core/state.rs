// src/core/state.rs

use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

use super::error::SearchError;
use crate::operators::Operator;
use crate::validation;

/// The amplitude vector of an n-qubit register.
///
/// Holds one complex amplitude per basis index `0..N` where `N = 2^n`, with
/// index `i` read as the n-bit binary representation of `i`, most-significant
/// bit first. The squared magnitude of an amplitude is the probability of
/// measuring that index.
///
/// Invariant: Σ|amplitude_i|² = 1 within
/// [`validation::DEFAULT_NORM_TOLERANCE`], re-checked after every
/// [`apply_unitary`](Self::apply_unitary) call.
///
/// A `StateVector` belongs to exactly one search run: it is created at the
/// all-zero basis state, mutated in place by each operator, and consumed by
/// measurement at the end of the run. It is never shared across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVector {
    /// Amplitudes indexed by basis state, length `2^num_qubits`.
    amplitudes: Vec<Complex<f64>>,
    /// Number of qubits n the vector represents.
    num_qubits: usize,
}

impl StateVector {
    /// Creates the all-zero basis state |0…0⟩ for `num_qubits` qubits:
    /// amplitude 1 at index 0, 0 everywhere else.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidDimension`] if `num_qubits` is zero or
    /// the `2^num_qubits` dimension overflows `usize`.
    pub fn new(num_qubits: usize) -> Result<Self, SearchError> {
        let dim = checked_dimension(num_qubits)?;

        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);

        Ok(Self { amplitudes, num_qubits })
    }

    /// Wraps a raw amplitude vector, inferring the qubit count from its
    /// length. Intended for tests and callers preparing bespoke states; no
    /// normalization is performed here (the first `apply_unitary` will
    /// surface a badly normalized input as `NumericalInstability`).
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidDimension`] unless the length is `2^n`
    /// for some qubit count n >= 1.
    pub fn from_amplitudes(amplitudes: Vec<Complex<f64>>) -> Result<Self, SearchError> {
        let dim = amplitudes.len();
        if dim < 2 || !dim.is_power_of_two() {
            return Err(SearchError::InvalidDimension {
                message: format!(
                    "amplitude vector length {} is not 2^n for a positive qubit count",
                    dim
                ),
            });
        }
        let num_qubits = dim.trailing_zeros() as usize;
        Ok(Self { amplitudes, num_qubits })
    }

    /// Applies `op`'s transform to the amplitudes in place, then re-checks
    /// the normalization invariant.
    ///
    /// The mutation is atomic from the caller's perspective: the `&mut`
    /// borrow rules out observation of a partially updated vector, and on
    /// error the run is over (the error is fatal by contract).
    ///
    /// # Errors
    /// Propagates the operator's own validation (an `Oracle` target outside
    /// the vector is [`SearchError::InvalidTarget`]), and returns
    /// [`SearchError::NumericalInstability`] if Σ|amplitude|² deviates from
    /// 1 beyond tolerance after the transform.
    pub fn apply_unitary(&mut self, op: &Operator) -> Result<(), SearchError> {
        op.transform(&mut self.amplitudes)?;
        validation::check_normalization(self, None)
    }

    /// Returns |amplitude_index|², the probability of measuring `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.dim()`.
    pub fn probability_of(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    /// Read-only view of the amplitudes, for measurement and inspection.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// The dimension N = 2^n of the vector.
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The number of qubits n the vector represents.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }
}

/// Computes the state dimension N = 2^num_qubits with the construction
/// guards shared by [`StateVector::new`] and the search driver.
///
/// # Errors
/// Returns [`SearchError::InvalidDimension`] if `num_qubits` is zero or the
/// dimension overflows `usize`.
pub(crate) fn checked_dimension(num_qubits: usize) -> Result<usize, SearchError> {
    if num_qubits == 0 {
        return Err(SearchError::InvalidDimension {
            message: "qubit count must be positive".to_string(),
        });
    }
    1usize
        .checked_shl(u32::try_from(num_qubits).unwrap_or(u32::MAX))
        .ok_or_else(|| SearchError::InvalidDimension {
            message: format!("state dimension 2^{} overflows usize", num_qubits),
        })
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}

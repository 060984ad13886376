//! Error taxonomy for search runs.

use std::fmt;

/// Error types covering every failure a search run can surface.
///
/// All of these are detected synchronously at the point of violation and
/// none are retried internally: they are either caller misuse
/// (`InvalidDimension`, `InvalidTarget`, `EngineAlreadyCompleted`) or an
/// unrecoverable arithmetic defect (`NumericalInstability`). A successful
/// return from any public entry point therefore always carries a fully
/// normalized, validly sampled result.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The register cannot be constructed with the requested dimension.
    /// Raised for a zero qubit count, a qubit count whose 2^n dimension
    /// overflows `usize`, or a raw amplitude vector whose length is not a
    /// power of two.
    InvalidDimension {
        /// Description of the rejected dimension.
        message: String,
    },

    /// The target index lies outside the search space `[0, N)`.
    /// Raised before any operator is applied.
    InvalidTarget {
        /// The rejected target index.
        target: usize,
        /// The dimension N of the search space.
        dim: usize,
    },

    /// The normalization invariant Σ|amplitude|² = 1 was violated beyond
    /// tolerance after an operator application. This signals a defect in an
    /// operator's definition (or accumulated arithmetic error), not a
    /// recoverable condition; the state is never silently re-normalized.
    NumericalInstability {
        /// The measured Σ|amplitude|² that broke the invariant.
        norm_sqr: f64,
    },

    /// A `GroverEngine` was asked to iterate again after completing its run.
    /// Engines are single-use: re-amplifying an already-iterated state does
    /// not correspond to a physically meaningful run.
    EngineAlreadyCompleted,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidDimension { message } => {
                write!(f, "Invalid Dimension: {}", message)
            }
            SearchError::InvalidTarget { target, dim } => {
                write!(f, "Invalid Target: index {} outside search space [0, {})", target, dim)
            }
            SearchError::NumericalInstability { norm_sqr } => {
                write!(f, "Numerical Instability: Sum(|amplitude|^2) = {} after unitary application", norm_sqr)
            }
            SearchError::EngineAlreadyCompleted => {
                write!(f, "Engine Already Completed: run_iterations may only be called once per engine")
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for SearchError {}

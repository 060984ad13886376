// src/validation/mod.rs

//! Provides functions to validate a `StateVector` against the
//! normalization invariant.

use crate::core::{SearchError, StateVector};

/// Default allowed deviation of Σ|amplitude|² from 1.0 (can be overridden
/// by caller).
pub const DEFAULT_NORM_TOLERANCE: f64 = 1e-9;

/// Sums |amplitude|² over the whole vector. Equals 1.0 for a normalized
/// state, up to floating-point error.
pub fn total_probability(state: &StateVector) -> f64 {
    state.amplitudes().iter().map(|c| c.norm_sqr()).sum()
}

/// Checks that the state vector is normalized (sum of squared amplitude
/// magnitudes ≈ 1.0). Every operator in this crate is unitary, so a
/// failure here means accumulated floating-point drift or a defective
/// transform, not a recoverable condition.
///
/// # Arguments
/// * `state` - The `StateVector` to check.
/// * `tolerance` - Allowed deviation from 1.0. Defaults to
///   [`DEFAULT_NORM_TOLERANCE`].
///
/// # Returns
/// * `Ok(())` if normalized within tolerance.
/// * `Err(SearchError::NumericalInstability)` carrying the offending sum
///   otherwise.
pub fn check_normalization(state: &StateVector, tolerance: Option<f64>) -> Result<(), SearchError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_NORM_TOLERANCE);
    let norm_sqr = total_probability(state);
    if (norm_sqr - 1.0).abs() > effective_tolerance {
        Err(SearchError::NumericalInstability { norm_sqr })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex;

    #[test]
    fn fresh_basis_state_is_normalized() -> Result<(), SearchError> {
        let state = StateVector::new(3)?;
        check_normalization(&state, None)
    }

    #[test]
    fn unnormalized_vector_is_flagged() -> Result<(), SearchError> {
        let raw = vec![Complex::new(1.0, 0.0), Complex::new(1.0, 0.0)];
        let state = StateVector::from_amplitudes(raw)?;
        match check_normalization(&state, None) {
            Err(SearchError::NumericalInstability { norm_sqr }) => {
                assert!((norm_sqr - 2.0).abs() < 1e-12);
                Ok(())
            }
            other => panic!("expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn tolerance_override_is_respected() -> Result<(), SearchError> {
        let raw = vec![Complex::new(0.7, 0.0), Complex::new(0.7, 0.0)];
        let state = StateVector::from_amplitudes(raw)?;
        // |0.7|^2 * 2 = 0.98, inside a loose tolerance but outside the default
        assert!(check_normalization(&state, Some(0.05)).is_ok());
        assert!(check_normalization(&state, None).is_err());
        Ok(())
    }
}

// src/operators/mod.rs

//! Defines the unitary transforms an amplitude-amplification search
//! applies to a [`StateVector`](crate::core::StateVector).
//!
//! Each operator is expressed directly as its effect on the amplitude
//! vector rather than as a matrix: every rule here is O(N) in the state
//! dimension, where the equivalent dense matrix product would be O(N²).

use num_complex::Complex;

use crate::core::SearchError;

/// A unitary transform over the amplitude vector.
///
/// The three variants are the building blocks of one Grover-style search
/// run: prepare the uniform superposition once, then alternate the oracle
/// and diffusion transforms for the requested number of iterations.
///
/// `Oracle` and `Diffusion` are involutions: applying either twice in a
/// row restores the amplitudes it started from.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// Overwrites every amplitude with the real value 1/√N, giving all N
    /// basis indices equal probability 1/N. Applied to the all-zero basis
    /// state this is the Hadamard-on-every-qubit preparation step.
    Superposition,

    /// The phase oracle for a single marked index: negates the amplitude
    /// at `target` and leaves every other amplitude untouched. The marked
    /// index becomes distinguishable through interference only, not
    /// through any probability change of this step alone.
    Oracle {
        /// The basis index the oracle marks. Must lie in `[0, N)` for the
        /// state the operator is applied to.
        target: usize,
    },

    /// Inversion about the mean: with μ the mean of all N amplitudes,
    /// every amplitude `a` becomes `2μ - a`. Amplitudes below the mean
    /// (after an oracle flip, the marked one is far below) are reflected
    /// above it, which is the amplification half of a Grover iteration.
    Diffusion,
}

impl Operator {
    /// Applies this operator's rule to `amplitudes` in place.
    ///
    /// # Errors
    /// Returns [`SearchError::InvalidTarget`] if an `Oracle` target lies
    /// outside the vector.
    pub(crate) fn transform(&self, amplitudes: &mut [Complex<f64>]) -> Result<(), SearchError> {
        match self {
            Operator::Superposition => {
                let amp = Complex::new(1.0 / (amplitudes.len() as f64).sqrt(), 0.0);
                amplitudes.fill(amp);
            }
            Operator::Oracle { target } => {
                if *target >= amplitudes.len() {
                    return Err(SearchError::InvalidTarget {
                        target: *target,
                        dim: amplitudes.len(),
                    });
                }
                amplitudes[*target] = -amplitudes[*target];
            }
            Operator::Diffusion => {
                let mean: Complex<f64> =
                    amplitudes.iter().sum::<Complex<f64>>() / amplitudes.len() as f64;
                for amp in amplitudes.iter_mut() {
                    *amp = 2.0 * mean - *amp;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn oracle_rejects_out_of_range_target() {
        let mut amplitudes = vec![Complex::zero(); 8];
        let result = Operator::Oracle { target: 8 }.transform(&mut amplitudes);
        match result {
            Err(SearchError::InvalidTarget { target: 8, dim: 8 }) => {}
            other => panic!("expected InvalidTarget, got {:?}", other),
        }
    }

    #[test]
    fn oracle_flips_only_the_marked_amplitude() -> Result<(), SearchError> {
        let mut amplitudes = vec![Complex::new(0.5, 0.0); 4];
        Operator::Oracle { target: 2 }.transform(&mut amplitudes)?;
        assert_eq!(amplitudes[2], Complex::new(-0.5, 0.0));
        for (i, amp) in amplitudes.iter().enumerate() {
            if i != 2 {
                assert_eq!(*amp, Complex::new(0.5, 0.0));
            }
        }
        Ok(())
    }
}

// tests/operator_tests.rs

// Import necessary types from the ampsearch crate
use ampsearch::{Operator, SearchError, StateVector, validation};

use num_complex::Complex;

const TEST_TOLERANCE: f64 = 1e-9;

// Helper: asserts that two complex amplitude vectors are approximately
// equal component-wise.
fn assert_complex_vec_approx_equal(
    actual: &[Complex<f64>],
    expected: &[Complex<f64>],
    tolerance: f64,
    context: &str,
) {
    assert_eq!(actual.len(), expected.len(), "Vector length mismatch - {}", context);
    for i in 0..actual.len() {
        let dist_sq = (actual[i] - expected[i]).norm_sqr();
        assert!(
            dist_sq < tolerance * tolerance,
            "Vector mismatch at index {} - Actual: {}, Expected: {}, DistSq: {:.3e}, Context: {}",
            i,
            actual[i],
            expected[i],
            dist_sq,
            context
        );
    }
}

// Helper: the uniform superposition over 2^n indices
fn uniform_state(num_qubits: usize) -> Result<StateVector, SearchError> {
    let mut state = StateVector::new(num_qubits)?;
    state.apply_unitary(&Operator::Superposition)?;
    Ok(state)
}

// Helper: a normalized, deliberately non-uniform 2-qubit state
// (0.64 + 0.16 + 0.16 + 0.04 = 1)
fn lopsided_state() -> Result<StateVector, SearchError> {
    StateVector::from_amplitudes(vec![
        Complex::new(0.8, 0.0),
        Complex::new(0.4, 0.0),
        Complex::new(0.4, 0.0),
        Complex::new(0.2, 0.0),
    ])
}

#[test]
fn test_superposition_is_uniform() -> Result<(), SearchError> {
    let state = uniform_state(5)?;
    let expected_amp = Complex::new(1.0 / 32.0f64.sqrt(), 0.0);
    let expected = vec![expected_amp; 32];
    assert_complex_vec_approx_equal(
        state.amplitudes(),
        &expected,
        TEST_TOLERANCE,
        "uniform superposition over 32 indices",
    );
    for i in 0..32 {
        assert!(
            (state.probability_of(i) - 1.0 / 32.0).abs() < TEST_TOLERANCE,
            "index {} should sit at probability 1/32",
            i
        );
    }
    Ok(())
}

#[test]
fn test_oracle_negates_exactly_the_marked_amplitude() -> Result<(), SearchError> {
    let mut state = uniform_state(5)?;
    state.apply_unitary(&Operator::Oracle { target: 18 })?;

    assert!(state.amplitudes()[18].re < 0.0, "marked amplitude should carry the flipped phase");
    // Phase is not probability: the distribution is untouched.
    for i in 0..32 {
        assert!(
            (state.probability_of(i) - 1.0 / 32.0).abs() < TEST_TOLERANCE,
            "oracle alone must not change P({})",
            i
        );
    }
    Ok(())
}

#[test]
fn test_oracle_is_self_inverse() -> Result<(), SearchError> {
    for mut state in [uniform_state(2)?, lopsided_state()?] {
        let original = state.amplitudes().to_vec();

        state.apply_unitary(&Operator::Oracle { target: 2 })?;
        state.apply_unitary(&Operator::Oracle { target: 2 })?;

        assert_complex_vec_approx_equal(
            state.amplitudes(),
            &original,
            TEST_TOLERANCE,
            "oracle applied twice",
        );
    }
    Ok(())
}

#[test]
fn test_diffusion_is_self_inverse() -> Result<(), SearchError> {
    // On a non-uniform state, where inversion about the mean actually moves
    // every amplitude
    let mut state = lopsided_state()?;
    let original = state.amplitudes().to_vec();

    state.apply_unitary(&Operator::Diffusion)?;
    state.apply_unitary(&Operator::Diffusion)?;

    assert_complex_vec_approx_equal(
        state.amplitudes(),
        &original,
        TEST_TOLERANCE,
        "diffusion applied twice",
    );
    Ok(())
}

#[test]
fn test_one_round_amplifies_to_the_closed_form_value() -> Result<(), SearchError> {
    // One (oracle, diffusion) round from uniform over N=32 gives the marked
    // index amplitude 2.875/sqrt(32), i.e. probability 8.265625/32.
    let mut state = uniform_state(5)?;
    state.apply_unitary(&Operator::Oracle { target: 18 })?;
    state.apply_unitary(&Operator::Diffusion)?;

    let expected = 8.265625 / 32.0;
    let p = state.probability_of(18);
    assert!(
        (p - expected).abs() < TEST_TOLERANCE,
        "P(18) after one round was {}, expected {}",
        p,
        expected
    );

    // Every unmarked index shrinks to (0.875)^2/32.
    let expected_rest = 0.765625 / 32.0;
    for i in (0..32).filter(|&i| i != 18) {
        assert!(
            (state.probability_of(i) - expected_rest).abs() < TEST_TOLERANCE,
            "P({}) after one round should be {}",
            i,
            expected_rest
        );
    }
    Ok(())
}

#[test]
fn test_normalization_survives_every_round_prefix() -> Result<(), SearchError> {
    let mut state = uniform_state(5)?;
    for round in 1..=8 {
        state.apply_unitary(&Operator::Oracle { target: 18 })?;
        state.apply_unitary(&Operator::Diffusion)?;
        let total = validation::total_probability(&state);
        assert!(
            (total - 1.0).abs() < TEST_TOLERANCE,
            "normalization drifted to {} after {} rounds",
            total,
            round
        );
    }
    Ok(())
}

#[test]
fn test_diffusion_fixes_the_uniform_state() -> Result<(), SearchError> {
    // Every amplitude already equals the mean, so 2μ - a leaves each one
    // where it was: the uniform state is diffusion's fixed point.
    let mut state = uniform_state(4)?;
    let original = state.amplitudes().to_vec();
    state.apply_unitary(&Operator::Diffusion)?;
    assert_complex_vec_approx_equal(
        state.amplitudes(),
        &original,
        TEST_TOLERANCE,
        "diffusion on the uniform state",
    );
    Ok(())
}

// src/search/outcome.rs
use crate::core::BitString;
use crate::measurement::MeasurementResult;
use std::fmt;

/// Holds the result of one amplitude-amplification search run: what the
/// final measurement collapsed to, and how much oracle work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    measurement: MeasurementResult,
    oracle_calls: u64,
    iterations: u32,
    target: usize,
}

impl SearchOutcome {
    /// Assembles an outcome from a finished engine run. (Internal
    /// visibility: only the driver builds these.)
    pub(crate) fn new(
        measurement: MeasurementResult,
        oracle_calls: u64,
        iterations: u32,
        target: usize,
    ) -> Self {
        Self { measurement, oracle_calls, iterations, target }
    }

    /// The basis index the final measurement collapsed to.
    pub fn measured_index(&self) -> usize {
        self.measurement.index()
    }

    /// The measured index as an n-bit word, most-significant bit first.
    pub fn measured_bits(&self) -> &BitString {
        self.measurement.bits()
    }

    /// The full measurement record.
    pub fn measurement(&self) -> &MeasurementResult {
        &self.measurement
    }

    /// Number of oracle applications the run consumed.
    pub fn oracle_calls(&self) -> u64 {
        self.oracle_calls
    }

    /// Number of (oracle, diffusion) rounds that were requested and run.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// The index the oracle marked.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Whether the measurement found the marked index. A miss is a valid
    /// outcome of a probabilistic run, not an error.
    pub fn is_hit(&self) -> bool {
        self.measurement.index() == self.target
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.measurement.bits().len();
        let target_bits = BitString::from_index(self.target, width);
        writeln!(f, "Search Outcome:")?;
        writeln!(f, "  Target:   {} ({})", self.target, target_bits)?;
        writeln!(
            f,
            "  Measured: {} ({}){}",
            self.measurement.index(),
            self.measurement.bits(),
            if self.is_hit() { " [hit]" } else { " [miss]" }
        )?;
        writeln!(
            f,
            "  Iterations: {} ({} oracle calls)",
            self.iterations, self.oracle_calls
        )
    }
}

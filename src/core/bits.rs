// src/core/bits.rs

use std::fmt;

/// An n-bit binary word, most-significant bit first.
///
/// Basis index `i` of an n-qubit register corresponds to the n-bit binary
/// representation of `i`; bit 0 of a `BitString` is the highest-order bit.
/// For example index 18 on 5 qubits is `10010`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// Converts a basis index into its fixed-width bit sequence. Only the
    /// low `num_qubits` bits of `index` are read, which is the whole value
    /// whenever `index < 2^num_qubits`; widths beyond `usize::BITS` gain
    /// leading zeros.
    pub fn from_index(index: usize, num_qubits: usize) -> Self {
        let bits = (0..num_qubits)
            .map(|pos| {
                let shift = num_qubits - 1 - pos;
                // Positions above the machine word hold no index bits.
                shift < usize::BITS as usize && (index >> shift) & 1 == 1
            })
            .collect();
        Self { bits }
    }

    /// Reassembles the basis index this bit sequence encodes.
    pub fn to_index(&self) -> usize {
        self.bits.iter().fold(0, |acc, &b| (acc << 1) | usize::from(b))
    }

    /// The bits, most-significant first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of bits (the register width n).
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True for the zero-width word.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{}", if b { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_18_on_five_qubits_reads_msb_first() {
        let bits = BitString::from_index(18, 5);
        assert_eq!(bits.to_string(), "10010");
        assert_eq!(
            bits.bits(),
            &[true, false, false, true, false],
            "bit 0 must be the highest-order bit"
        );
    }

    #[test]
    fn index_round_trips_through_bits() {
        for index in 0..32 {
            assert_eq!(BitString::from_index(index, 5).to_index(), index);
        }
    }

    #[test]
    fn boundary_indices_convert() {
        assert_eq!(BitString::from_index(0, 5).to_string(), "00000");
        assert_eq!(BitString::from_index(31, 5).to_string(), "11111");
    }

    #[test]
    fn single_qubit_width() {
        assert_eq!(BitString::from_index(1, 1).to_string(), "1");
        assert_eq!(BitString::from_index(0, 1).to_string(), "0");
    }

    #[test]
    fn widths_beyond_the_machine_word_gain_leading_zeros() {
        let width = usize::BITS as usize + 8;
        let bits = BitString::from_index(1, width);
        assert_eq!(bits.len(), width);
        assert!(bits.bits()[..8].iter().all(|&b| !b));
        assert_eq!(bits.to_index(), 1);
    }
}

//! `Bits` — the concrete bit-vector backend.
//!
//! A `Bits` value IS the bit pattern: every operator produces a freshly
//! allocated `BitVec`, stored MSB-first (index 0 is the most significant
//! bit), mirroring the ordering guarantees of §5 (`to_bits`/`bits()` emit
//! MSB-first). All integer and string conversions are total.

use crate::gates::Gates;
use alloc::{
    string::String,
    vec::Vec,
};
use bitvec::prelude::*;

/// A concrete, evaluated bit vector.
#[derive(Clone, Eq)]
pub struct Bits {
    bits: BitVec<u8, Msb0>,
    names: Vec<String>,
}

impl Bits {
    /// Build directly from an MSB-first `bool` iterator.
    pub fn from_bools(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
            names: Vec::new(),
        }
    }

    /// Names attached via [`Gates::named`], most recent last.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Bits MSB-first, as owned `bool`s. Equivalent to [`Gates::to_bits`]
    /// but infallible, since a `Bits` value is always a constant.
    pub fn to_bools(&self) -> Vec<bool> {
        self.bits.iter().by_vals().collect()
    }

    fn zip_bitwise(&self, rhs: &Self, f: impl Fn(bool, bool) -> bool) -> Self {
        let bits = self
            .bits
            .iter()
            .by_vals()
            .zip(rhs.bits.iter().by_vals())
            .map(|(a, b)| f(a, b))
            .collect();
        Self {
            bits,
            names: Vec::new(),
        }
    }
}

impl PartialEq for Bits {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl core::fmt::Debug for Bits {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Bits({})", self.to_bstr_checked().unwrap_or_default())
    }
}

impl Gates for Bits {
    fn empty() -> Self {
        Self {
            bits: BitVec::new(),
            names: Vec::new(),
        }
    }

    fn width(&self) -> usize {
        self.bits.len()
    }

    fn from_bool_vec(bits: Vec<bool>) -> Self {
        Self::from_bools(bits)
    }

    fn concat_raw(parts: &[Self]) -> Self {
        let mut bits = BitVec::with_capacity(parts.iter().map(Gates::width).sum());
        for part in parts {
            bits.extend_from_bitslice(&part.bits);
        }
        Self {
            bits,
            names: Vec::new(),
        }
    }

    fn select_raw(&self, hi: usize, lo: usize) -> Self {
        let w = self.width();
        let start = w - 1 - hi;
        let end = w - 1 - lo;
        Self {
            bits: self.bits[start..=end].to_bitvec(),
            names: Vec::new(),
        }
    }

    fn named_raw(&self, name: &str) -> Self {
        let mut out = self.clone();
        out.names.push(name.into());
        out
    }

    fn and_raw(&self, rhs: &Self) -> Self {
        self.zip_bitwise(rhs, |a, b| a & b)
    }

    fn or_raw(&self, rhs: &Self) -> Self {
        self.zip_bitwise(rhs, |a, b| a | b)
    }

    fn xor_raw(&self, rhs: &Self) -> Self {
        self.zip_bitwise(rhs, |a, b| a ^ b)
    }

    fn not_raw(&self) -> Self {
        Self {
            bits: self.bits.iter().by_vals().map(|b| !b).collect(),
            names: Vec::new(),
        }
    }

    fn to_u64_checked(&self) -> Option<u64> {
        Some(
            self.bits
                .iter()
                .by_vals()
                .fold(0u64, |acc, bit| acc.wrapping_shl(1).wrapping_add(bit as u64)),
        )
    }

    fn to_sint64_checked(&self) -> Option<i64> {
        let w = self.width();
        if w == 0 {
            return Some(0);
        }
        let magnitude = self.to_u64_checked()?;
        if w >= 64 {
            return Some(magnitude as i64);
        }
        let sign_bit = 1u64 << (w - 1);
        Some(if magnitude & sign_bit != 0 {
            (magnitude as i64) - (1i64 << w)
        } else {
            magnitude as i64
        })
    }

    fn to_bstr_checked(&self) -> Option<String> {
        Some(
            self.bits
                .iter()
                .by_vals()
                .map(|b| if b { '1' } else { '0' })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_law_holds_for_concat() {
        let a = Bits::const_str("101");
        let b = Bits::const_str("11");
        let c = Bits::concat(&[a, b]);
        assert_eq!(c.width(), 5);
        assert_eq!(c.to_bstr(), "10111");
    }

    #[test]
    fn select_extracts_msb_first_range() {
        // bits (LSB index 0..4): 1 0 1 1 0, i.e. "01101" MSB-first.
        let x = Bits::const_str("01101");
        assert_eq!(x.select(4, 0).to_bstr(), "01101");
        assert_eq!(x.select(0, 0).to_bstr(), "1");
        assert_eq!(x.select(4, 4).to_bstr(), "0");
        assert_eq!(x.select(2, 1).to_bstr(), "10");
    }

    #[test]
    fn bitwise_ops_require_equal_width() {
        let a = Bits::const_str("10");
        let b = Bits::const_str("010");
        assert!(std::panic::catch_unwind(|| a.and(&b)).is_err());
    }

    #[test]
    fn empty_is_width_zero_and_rejected_elsewhere() {
        let e = Bits::empty();
        assert!(e.is_empty());
        assert_eq!(e.width(), 0);
        assert!(std::panic::catch_unwind(|| e.not()).is_err());
    }

    #[test]
    fn to_bstr_round_trips_through_const_str() {
        for lit in ["0", "1", "1011001", "00000000"] {
            assert_eq!(Bits::const_str(lit).to_bstr(), lit);
        }
    }

    #[test]
    fn signed_and_unsigned_readback() {
        let x = Bits::const_str("4'B1111"); // -1 in 4 bits
        assert_eq!(x.to_sint64(), -1);
        assert_eq!(x.to_int64(), 0b1111);
    }

    #[test]
    fn to_bits_is_msb_first_and_to_bit_array_is_lsb_first() {
        let x = Bits::const_str("1011");
        assert_eq!(x.to_bits(), vec![true, false, true, true]);
        assert_eq!(x.bits(), x.to_bits());
        assert_eq!(x.to_bit_array(), vec![true, true, false, true]);
        assert_eq!(x.to_array(), x.to_bit_array());
        assert_eq!(x.to_bools(), x.to_bits());
    }
}

//! The minimal bit-vector substrate every backend provides.
//!
//! `Gates` is deliberately small: a backend implements the handful of
//! required methods below (construction from raw bits, width, bitwise
//! ops, naming, and constant readback), and the default methods on this
//! trait turn them into the checked, panicking public API described by the
//! width algebra. [`crate::Primitives`] and [`crate::Comb`] build the rest
//! of the surface on top without ever touching a backend's internals.

use crate::{
    constant,
    error::Error,
};
use alloc::{
    string::String,
    vec::Vec,
};

/// The backend contract: an opaque, width-carrying bit-vector value.
///
/// Implementors provide the *_raw methods, each of which may assume its
/// documented precondition already holds; the default methods validate
/// inputs, report the error classes of the width algebra, and either
/// panic (the `const_str`/`concat`/... family) or return a `Result` (the
/// `try_*` family) as documented per method.
pub trait Gates: Sized + Clone + PartialEq + core::fmt::Debug {
    /// The sole width-0 value.
    fn empty() -> Self;

    /// Bit count of this signal.
    fn width(&self) -> usize;

    /// Construct a constant from an MSB-first bit pattern. Width equals
    /// `bits.len()`.
    fn from_bool_vec(bits: Vec<bool>) -> Self;

    /// Concatenate `parts` MSB-first (`parts[0]` becomes the most
    /// significant bits). Assumes `parts` is non-empty and every element
    /// is non-empty.
    fn concat_raw(parts: &[Self]) -> Self;

    /// Extract bits `[lo, hi]` inclusive. Assumes `lo <= hi < self.width()`.
    fn select_raw(&self, hi: usize, lo: usize) -> Self;

    /// Attach a name, returning a value equal in bit-pattern and width.
    /// Assumes `!self.is_empty()`.
    fn named_raw(&self, name: &str) -> Self;

    /// Bitwise AND. Assumes `self.width() == rhs.width()` and both are
    /// non-empty.
    fn and_raw(&self, rhs: &Self) -> Self;

    /// Bitwise OR. Same preconditions as [`Gates::and_raw`].
    fn or_raw(&self, rhs: &Self) -> Self;

    /// Bitwise XOR. Same preconditions as [`Gates::and_raw`].
    fn xor_raw(&self, rhs: &Self) -> Self;

    /// Bitwise complement. Assumes `!self.is_empty()`.
    fn not_raw(&self) -> Self;

    /// `self` interpreted as an unsigned magnitude, truncated (modulo
    /// `2^64`) into the native 64-bit domain. `None` if this backend
    /// cannot evaluate `self` as a constant (e.g. a non-constant node in a
    /// symbolic DAG).
    fn to_u64_checked(&self) -> Option<u64>;

    /// `self` interpreted as two's-complement signed, sign-extended from
    /// `self.width()` and then truncated into the native 64-bit domain.
    /// `None` for the same reason as [`Gates::to_u64_checked`].
    fn to_sint64_checked(&self) -> Option<i64>;

    /// MSB-first binary string readback, or `None` for the same reason as
    /// [`Gates::to_u64_checked`].
    fn to_bstr_checked(&self) -> Option<String>;

    /// True iff this signal carries zero bits.
    fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Parse and construct a constant from literal text (§6.1 grammar).
    ///
    /// # Panics
    /// Panics with [`Error::BadConstant`] if `s` matches neither the binary
    /// nor the Verilog-style grammar.
    fn const_str(s: &str) -> Self {
        Self::try_const_str(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible form of [`Gates::const_str`].
    fn try_const_str(s: &str) -> Result<Self, Error> {
        constant::parse(s).map(Self::from_bool_vec)
    }

    /// Concatenate `parts`, `parts[0]` becoming the most significant bits.
    ///
    /// # Panics
    /// Panics if `parts` is empty or any element is empty.
    fn concat(parts: &[Self]) -> Self {
        Self::try_concat(parts).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible form of [`Gates::concat`].
    fn try_concat(parts: &[Self]) -> Result<Self, Error> {
        if parts.is_empty() {
            return Err(Error::EmptyInput("concat"));
        }
        if parts.iter().any(Self::is_empty) {
            return Err(Error::EmptyInput("concat"));
        }
        Ok(Self::concat_raw(parts))
    }

    /// Concatenate `parts`, silently dropping any empty signals first.
    /// Returns [`Gates::empty`] if every part is empty (or the list is
    /// empty).
    fn concat_e(parts: &[Self]) -> Self {
        let nonempty: Vec<Self> = parts.iter().filter(|p| !p.is_empty()).cloned().collect();
        if nonempty.is_empty() {
            Self::empty()
        } else {
            Self::concat_raw(&nonempty)
        }
    }

    /// Extract bits `[lo, hi]` inclusive (`hi - lo + 1` bits wide).
    ///
    /// # Panics
    /// Panics if `self` is empty, `lo > hi`, or `hi >= self.width()`.
    fn select(&self, hi: usize, lo: usize) -> Self {
        self.try_select(hi, lo).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible form of [`Gates::select`].
    fn try_select(&self, hi: usize, lo: usize) -> Result<Self, Error> {
        if self.is_empty() {
            return Err(Error::EmptyInput("select"));
        }
        if lo > hi || hi >= self.width() {
            return Err(Error::OutOfRangeSlice {
                hi,
                lo,
                width: self.width(),
            });
        }
        Ok(self.select_raw(hi, lo))
    }

    /// Extract bits `[lo, hi]` inclusive, or [`Gates::empty`] if the range
    /// is out of bounds.
    fn select_e(&self, hi: usize, lo: usize) -> Self {
        if self.is_empty() || lo > hi || hi >= self.width() {
            Self::empty()
        } else {
            self.select_raw(hi, lo)
        }
    }

    /// Attach a name; value and width are unchanged.
    ///
    /// # Panics
    /// Panics if `self` is empty.
    fn named(&self, name: &str) -> Self {
        if self.is_empty() {
            panic!("{}", Error::EmptyInput("named"));
        }
        self.named_raw(name)
    }

    /// Bitwise AND of two equal-width, non-empty signals.
    ///
    /// # Panics
    /// Panics on a width mismatch or an empty operand.
    fn and(&self, rhs: &Self) -> Self {
        check_binary(self, rhs, "and").unwrap_or_else(|e| panic!("{e}"));
        self.and_raw(rhs)
    }

    /// Bitwise OR. Same preconditions as [`Gates::and`].
    fn or(&self, rhs: &Self) -> Self {
        check_binary(self, rhs, "or").unwrap_or_else(|e| panic!("{e}"));
        self.or_raw(rhs)
    }

    /// Bitwise XOR. Same preconditions as [`Gates::and`].
    fn xor(&self, rhs: &Self) -> Self {
        check_binary(self, rhs, "xor").unwrap_or_else(|e| panic!("{e}"));
        self.xor_raw(rhs)
    }

    /// Bitwise complement.
    ///
    /// # Panics
    /// Panics if `self` is empty.
    fn not(&self) -> Self {
        if self.is_empty() {
            panic!("{}", Error::EmptyInput("not"));
        }
        self.not_raw()
    }

    /// `self` as an unsigned magnitude, truncated into 64 bits. This is
    /// `to_int` in the distilled spec's naming.
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn to_int64(&self) -> i64 {
        self.to_u64_checked().unwrap_or_else(|| panic!("{}", Error::NotConstant)) as i64
    }

    /// Fallible form of [`Gates::to_int64`].
    fn try_to_int64(&self) -> Result<i64, Error> {
        self.to_u64_checked().map(|v| v as i64).ok_or(Error::NotConstant)
    }

    /// [`Gates::to_int64`] truncated to 32 bits.
    fn to_int32(&self) -> i32 {
        self.to_int64() as i32
    }

    /// Fallible form of [`Gates::to_int32`].
    fn try_to_int32(&self) -> Result<i32, Error> {
        self.try_to_int64().map(|v| v as i32)
    }

    /// Alias for [`Gates::to_int64`], the native-width unsigned readback.
    fn to_int(&self) -> i64 {
        self.to_int64()
    }

    /// `self` as two's-complement signed, sign-extended from its own
    /// width. This is `to_sint` in the distilled spec's naming.
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn to_sint64(&self) -> i64 {
        self.to_sint64_checked().unwrap_or_else(|| panic!("{}", Error::NotConstant))
    }

    /// Fallible form of [`Gates::to_sint64`].
    fn try_to_sint64(&self) -> Result<i64, Error> {
        self.to_sint64_checked().ok_or(Error::NotConstant)
    }

    /// [`Gates::to_sint64`] truncated to 32 bits.
    fn to_sint32(&self) -> i32 {
        self.to_sint64() as i32
    }

    /// Fallible form of [`Gates::to_sint32`].
    fn try_to_sint32(&self) -> Result<i32, Error> {
        self.try_to_sint64().map(|v| v as i32)
    }

    /// Alias for [`Gates::to_sint64`], the native-width signed readback.
    fn to_sint(&self) -> i64 {
        self.to_sint64()
    }

    /// MSB-first binary string readback, `self.width()` characters long.
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn to_bstr(&self) -> String {
        self.to_bstr_checked().unwrap_or_else(|| panic!("{}", Error::NotConstant))
    }

    /// Fallible form of [`Gates::to_bstr`].
    fn try_to_bstr(&self) -> Result<String, Error> {
        self.to_bstr_checked().ok_or(Error::NotConstant)
    }

    /// This signal's bits, MSB-first, as owned `bool`s. Alias for
    /// [`Gates::to_bits`].
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn bits(&self) -> Vec<bool> {
        self.to_bits()
    }

    /// This signal's bits, MSB-first, as owned `bool`s.
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn to_bits(&self) -> Vec<bool> {
        self.to_bstr().chars().map(|c| c == '1').collect()
    }

    /// Fallible form of [`Gates::to_bits`].
    fn try_to_bits(&self) -> Result<Vec<bool>, Error> {
        Ok(self.try_to_bstr()?.chars().map(|c| c == '1').collect())
    }

    /// This signal's bits with the least-significant bit at index 0 (the
    /// reverse of [`Gates::to_bits`]'s MSB-first order).
    ///
    /// # Panics
    /// Panics with [`Error::NotConstant`] if this backend cannot evaluate
    /// `self`.
    fn to_bit_array(&self) -> Vec<bool> {
        let mut bits = self.to_bits();
        bits.reverse();
        bits
    }

    /// Fallible form of [`Gates::to_bit_array`].
    fn try_to_bit_array(&self) -> Result<Vec<bool>, Error> {
        let mut bits = self.try_to_bits()?;
        bits.reverse();
        Ok(bits)
    }

    /// Alias for [`Gates::to_bit_array`].
    fn to_array(&self) -> Vec<bool> {
        self.to_bit_array()
    }
}

pub(crate) fn check_binary<T: Gates>(lhs: &T, rhs: &T, op: &'static str) -> Result<(), Error> {
    if lhs.is_empty() || rhs.is_empty() {
        return Err(Error::EmptyInput(op));
    }
    if lhs.width() != rhs.width() {
        return Err(Error::WidthMismatch {
            left: lhs.width(),
            right: rhs.width(),
        });
    }
    Ok(())
}

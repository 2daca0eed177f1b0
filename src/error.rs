//! Error variants raised by precondition violations in the signal algebra.
//!
//! Every variant here corresponds to one of the fatal error classes of the
//! combinational core: a malformed operand combination that the algebra
//! refuses to give meaning to. The panicking entry points on [`crate::Gates`],
//! [`crate::Primitives`] and [`crate::Comb`] construct one of these and abort
//! via `panic!`; the `try_*` mirrors return it instead.

use alloc::string::String;

/// Precondition violation raised by a combinational operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// A binary bitwise or arithmetic operator was given operands of
    /// different widths.
    #[cfg_attr(feature = "std", error("width mismatch: left is {left} bits, right is {right} bits"))]
    WidthMismatch {
        /// Width of the left-hand operand.
        left: usize,
        /// Width of the right-hand operand.
        right: usize,
    },
    /// A single-bit index was outside `[0, width)`.
    #[cfg_attr(feature = "std", error("bit index {index} out of range for a {width}-bit signal"))]
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Width of the signal being indexed.
        width: usize,
    },
    /// A `select`-style range was outside `[0, width)` or had `hi < lo`.
    #[cfg_attr(
        feature = "std",
        error("range [{lo}, {hi}] out of range for a {width}-bit signal")
    )]
    OutOfRangeSlice {
        /// Requested high bound (inclusive).
        hi: usize,
        /// Requested low bound (inclusive).
        lo: usize,
        /// Width of the signal being sliced.
        width: usize,
    },
    /// An operator that rejects the empty signal was given one.
    #[cfg_attr(feature = "std", error("{0} does not accept an empty signal"))]
    EmptyInput(&'static str),
    /// A constant literal string did not match any accepted grammar.
    #[cfg_attr(feature = "std", error("malformed constant literal: {0:?}"))]
    BadConstant(String),
    /// `to_u64`/`to_i64`/`to_bstr` (or a sized variant) was called on a
    /// non-constant symbolic signal.
    #[cfg_attr(feature = "std", error("value is not a constant and cannot be converted"))]
    NotConstant,
    /// `mux` was given fewer than two inputs, or more than `2^width(sel)`.
    #[cfg_attr(
        feature = "std",
        error("mux arity {len} is invalid for a selector of {sel_width} bits (max {max})")
    )]
    MuxArity {
        /// Number of inputs supplied.
        len: usize,
        /// Width of the selector.
        sel_width: usize,
        /// Maximum number of inputs the selector can address (`2^sel_width`).
        max: usize,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

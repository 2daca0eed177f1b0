//! Width-automatic typed views over a [`Comb`] signal.
//!
//! [`Unsigned`] and [`Signed`] wrap a raw signal and make mixed-width
//! arithmetic safe by construction: every binary operator first resizes
//! both operands to a common width wide enough to hold the result
//! (`max(wa, wb) + 1` for `+`/`-`, `max(wa, wb)` for comparisons, and
//! `wa + wb` for multiply, which needs no resize since that's already
//! what [`crate::Primitives::umul`]/[`crate::Primitives::smul`] produce).
//! [`Uop`]/[`Sop`] are the same resizing logic exposed as free functions
//! over the raw signal type, for call sites that don't want the wrapper.

use crate::Comb;

/// A signal viewed as an unsigned magnitude; arithmetic auto-resizes.
#[derive(Clone, Debug, PartialEq)]
pub struct Unsigned<T>(T);

impl<T: Comb> Unsigned<T> {
    /// Wrap a raw signal with no reinterpretation (identity-with-view-tag).
    pub fn of_signal(raw: T) -> Self {
        Self(raw)
    }

    /// Unwrap back to the raw signal.
    pub fn to_signal(self) -> T {
        self.0
    }

    /// The wrapped signal's width.
    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// `self + rhs`, both first zero-extended to `max(wa, wb) + 1` bits.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(Uop::add(&self.0, &rhs.0))
    }

    /// `self - rhs`, both first zero-extended to `max(wa, wb) + 1` bits.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(Uop::sub(&self.0, &rhs.0))
    }

    /// `self * rhs`; output width `wa + wb`, no pre-resize needed.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(Uop::mul(&self.0, &rhs.0))
    }

    /// Unsigned less-than, both first zero-extended to `max(wa, wb)` bits.
    pub fn lt(&self, rhs: &Self) -> T {
        Uop::lt(&self.0, &rhs.0)
    }

    /// Unsigned less-or-equal, same resizing as [`Unsigned::lt`].
    pub fn le(&self, rhs: &Self) -> T {
        Uop::le(&self.0, &rhs.0)
    }

    /// Unsigned greater-than, same resizing as [`Unsigned::lt`].
    pub fn gt(&self, rhs: &Self) -> T {
        Uop::gt(&self.0, &rhs.0)
    }

    /// Unsigned greater-or-equal, same resizing as [`Unsigned::lt`].
    pub fn ge(&self, rhs: &Self) -> T {
        Uop::ge(&self.0, &rhs.0)
    }
}

/// A signal viewed as two's-complement signed; arithmetic auto-resizes.
#[derive(Clone, Debug, PartialEq)]
pub struct Signed<T>(T);

impl<T: Comb> Signed<T> {
    /// Wrap a raw signal with no reinterpretation.
    pub fn of_signal(raw: T) -> Self {
        Self(raw)
    }

    /// Unwrap back to the raw signal.
    pub fn to_signal(self) -> T {
        self.0
    }

    /// The wrapped signal's width.
    pub fn width(&self) -> usize {
        self.0.width()
    }

    /// `self + rhs`, both first sign-extended to `max(wa, wb) + 1` bits.
    pub fn add(&self, rhs: &Self) -> Self {
        Self(Sop::add(&self.0, &rhs.0))
    }

    /// `self - rhs`, both first sign-extended to `max(wa, wb) + 1` bits.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self(Sop::sub(&self.0, &rhs.0))
    }

    /// `self * rhs`; output width `wa + wb`, no pre-resize needed.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self(Sop::mul(&self.0, &rhs.0))
    }

    /// Signed less-than, both first sign-extended to `max(wa, wb)` bits.
    pub fn lt(&self, rhs: &Self) -> T {
        Sop::lt(&self.0, &rhs.0)
    }

    /// Signed less-or-equal, same resizing as [`Signed::lt`].
    pub fn le(&self, rhs: &Self) -> T {
        Sop::le(&self.0, &rhs.0)
    }

    /// Signed greater-than, same resizing as [`Signed::lt`].
    pub fn gt(&self, rhs: &Self) -> T {
        Sop::gt(&self.0, &rhs.0)
    }

    /// Signed greater-or-equal, same resizing as [`Signed::lt`].
    pub fn ge(&self, rhs: &Self) -> T {
        Sop::ge(&self.0, &rhs.0)
    }
}

fn common_width<T: Comb>(a: &T, b: &T, extra: usize) -> usize {
    a.width().max(b.width()) + extra
}

/// Free-function form of [`Unsigned`]'s resizing arithmetic, returning the
/// raw signal type directly.
pub struct Uop;

impl Uop {
    /// `a + b`, both zero-extended to `max(wa, wb) + 1` bits first.
    pub fn add<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 1);
        a.uresize(w).add(&b.uresize(w))
    }

    /// `a - b`, both zero-extended to `max(wa, wb) + 1` bits first.
    pub fn sub<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 1);
        a.uresize(w).sub(&b.uresize(w))
    }

    /// `a * b`; output width `width(a) + width(b)`.
    pub fn mul<T: Comb>(a: &T, b: &T) -> T {
        a.umul(b)
    }

    /// Unsigned less-than, both zero-extended to `max(wa, wb)` bits first.
    pub fn lt<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.uresize(w).ult(&b.uresize(w))
    }

    /// Unsigned less-or-equal, same resizing as [`Uop::lt`].
    pub fn le<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.uresize(w).ule(&b.uresize(w))
    }

    /// Unsigned greater-than, same resizing as [`Uop::lt`].
    pub fn gt<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.uresize(w).ugt(&b.uresize(w))
    }

    /// Unsigned greater-or-equal, same resizing as [`Uop::lt`].
    pub fn ge<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.uresize(w).uge(&b.uresize(w))
    }
}

/// Free-function form of [`Signed`]'s resizing arithmetic, returning the
/// raw signal type directly.
pub struct Sop;

impl Sop {
    /// `a + b`, both sign-extended to `max(wa, wb) + 1` bits first.
    pub fn add<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 1);
        a.sresize(w).add(&b.sresize(w))
    }

    /// `a - b`, both sign-extended to `max(wa, wb) + 1` bits first.
    pub fn sub<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 1);
        a.sresize(w).sub(&b.sresize(w))
    }

    /// `a * b`; output width `width(a) + width(b)`.
    pub fn mul<T: Comb>(a: &T, b: &T) -> T {
        a.smul(b)
    }

    /// Signed less-than, both sign-extended to `max(wa, wb)` bits first.
    pub fn lt<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.sresize(w).slt(&b.sresize(w))
    }

    /// Signed less-or-equal, same resizing as [`Sop::lt`].
    pub fn le<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.sresize(w).sle(&b.sresize(w))
    }

    /// Signed greater-than, same resizing as [`Sop::lt`].
    pub fn gt<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.sresize(w).sgt(&b.sresize(w))
    }

    /// Signed greater-or-equal, same resizing as [`Sop::lt`].
    pub fn ge<T: Comb>(a: &T, b: &T) -> T {
        let w = common_width(a, b, 0);
        a.sresize(w).sge(&b.sresize(w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn unsigned_add_extends_by_one_bit() {
        let a = Unsigned::of_signal(Bits::const_str("1111")); // 15, width 4
        let b = Unsigned::of_signal(Bits::const_str("0001")); // 1, width 4
        let sum = a.add(&b);
        assert_eq!(sum.width(), 5);
        assert_eq!(sum.to_signal().to_int64(), 16);
    }

    #[test]
    fn unsigned_mul_width_is_sum_of_widths() {
        let a = Unsigned::of_signal(Bits::const_str("110"));
        let b = Unsigned::of_signal(Bits::const_str("101"));
        let p = a.mul(&b);
        assert_eq!(p.width(), 6);
    }

    #[test]
    fn signed_add_handles_mixed_width_negatives() {
        let a = Signed::of_signal(Bits::const_str("111")); // -1, width 3
        let b = Signed::of_signal(Bits::const_str("00001")); // 1, width 5
        let sum = a.add(&b);
        assert_eq!(sum.width(), 6);
        assert_eq!(sum.to_signal().to_sint64(), 0);
    }

    #[test]
    fn uop_and_sop_match_wrapper_results() {
        let a = Bits::const_str("1010");
        let b = Bits::const_str("0110");
        assert_eq!(Uop::add(&a, &b), Unsigned::of_signal(a.clone()).add(&Unsigned::of_signal(b.clone())).to_signal());
        assert_eq!(Sop::lt(&a, &b), Signed::of_signal(a).lt(&Signed::of_signal(b)));
    }
}

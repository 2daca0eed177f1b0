//! `Primitives` — mux, add/sub, multiply, equality, and unsigned
//! less-than, synthesized from [`Gates`] alone.
//!
//! Every method here has a default body built purely from `Gates`
//! operators (the "slow-but-correct reference" the distilled spec calls
//! `MakePrimitives`); a backend is free to override any of them with a
//! faster native definition as long as the width contract in the table
//! below is preserved.
//!
//! | Operator | Output width | Precondition |
//! |---|---|---|
//! | `mux` | width of the (equal-width) inputs | `2 <= len <= 2^width(sel)` |
//! | `add`/`sub` | width of the (equal-width) operands | equal widths |
//! | `umul`/`smul` | `width(a) + width(b)` | — |
//! | `eq` | 1 | equal widths |
//! | `ult` | 1 | equal widths |

use crate::{
    error::Error,
    gates::{
        check_binary,
        Gates,
    },
};
use alloc::vec::Vec;

/// Gates plus mux/add/sub/mul/eq/ult.
pub trait Primitives: Gates {
    /// Select among `xs` by `sel`, zero-extending the address space by
    /// repeating the last element when `xs.len() < 2^width(sel)`.
    ///
    /// # Panics
    /// Panics if `xs.len() < 2`, `xs.len() > 2^width(sel)`, or the
    /// elements of `xs` are not all the same width.
    fn mux(sel: &Self, xs: &[Self]) -> Self {
        Self::try_mux(sel, xs).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Fallible form of [`Primitives::mux`].
    fn try_mux(sel: &Self, xs: &[Self]) -> Result<Self, Error> {
        let max = 1usize
            .checked_shl(sel.width() as u32)
            .unwrap_or(usize::MAX);
        if xs.len() < 2 || xs.len() > max {
            return Err(Error::MuxArity {
                len: xs.len(),
                sel_width: sel.width(),
                max,
            });
        }
        let width = xs[0].width();
        if xs.iter().any(|x| x.width() != width) {
            return Err(Error::WidthMismatch {
                left: width,
                right: xs.iter().map(Gates::width).find(|&w| w != width).unwrap(),
            });
        }
        Ok(mux_tree(sel, xs, max))
    }

    /// Ripple-carry addition. Overflow wraps (no width extension).
    ///
    /// # Panics
    /// Panics on a width mismatch or an empty operand.
    fn add(&self, rhs: &Self) -> Self {
        ripple(self, rhs, false).0
    }

    /// Ripple-carry subtraction, computed as `self + !rhs + 1`. Overflow
    /// wraps.
    ///
    /// # Panics
    /// Panics on a width mismatch or an empty operand.
    fn sub(&self, rhs: &Self) -> Self {
        ripple(self, rhs, true).0
    }

    /// Unsigned multiply. Output width is `width(self) + width(rhs)`.
    fn umul(&self, rhs: &Self) -> Self {
        let out_w = self.width() + rhs.width();
        let a_ext = zero_extend(self, out_w);
        let mut acc = zero_const::<Self>(out_w);
        for i in 0..rhs.width() {
            let bit = rhs.select(i, i);
            let term = mask_with_bit(&shl_const(&a_ext, i), &bit);
            acc = ripple(&acc, &term, false).0;
        }
        acc
    }

    /// Signed (two's-complement) multiply via sign-magnitude: factor out
    /// each operand's sign, multiply the unsigned magnitudes, and restore
    /// the sign of the result. Output width is `width(self) + width(rhs)`.
    fn smul(&self, rhs: &Self) -> Self {
        let a_sign = self.select(self.width() - 1, self.width() - 1);
        let b_sign = rhs.select(rhs.width() - 1, rhs.width() - 1);
        let a_mag = Self::mux(&a_sign, &[self.clone(), negate(self)]);
        let b_mag = Self::mux(&b_sign, &[rhs.clone(), negate(rhs)]);
        let magnitude = a_mag.umul(&b_mag);
        let result_sign = a_sign.xor(&b_sign);
        Self::mux(&result_sign, &[magnitude.clone(), negate(&magnitude)])
    }

    /// Bitwise equality. Output width is always 1.
    ///
    /// # Panics
    /// Panics on a width mismatch or an empty operand.
    fn eq(&self, rhs: &Self) -> Self {
        let diff = self.xor(rhs);
        let w = diff.width();
        let mut any_set = diff.select(0, 0);
        for i in 1..w {
            any_set = any_set.or(&diff.select(i, i));
        }
        any_set.not()
    }

    /// Unsigned less-than, via subtract and borrow-out. Output width is
    /// always 1.
    ///
    /// # Panics
    /// Panics on a width mismatch or an empty operand.
    fn ult(&self, rhs: &Self) -> Self {
        // carry-out of (self + !rhs + 1) is 1 iff self >= rhs (no borrow).
        ripple(self, rhs, true).1.not()
    }
}

impl<T: Gates> Primitives for T {}

/// Address-decoded AND-OR mux tree: for each candidate index, build the
/// one-hot "selector matches this address" signal, mask the corresponding
/// data input with it, and OR every masked input together.
fn mux_tree<T: Gates>(sel: &T, xs: &[T], max: usize) -> T {
    let data_width = xs[0].width();
    if data_width == 0 {
        return T::empty();
    }
    let mut acc: Option<T> = None;
    for index in 0..max {
        let data = xs.get(index).unwrap_or_else(|| xs.last().unwrap());
        let matches = decode_match(sel, index);
        let masked = mask_with_bit(data, &matches);
        acc = Some(match acc {
            None => masked,
            Some(prev) => prev.or(&masked),
        });
    }
    acc.unwrap_or_else(|| zero_const(data_width))
}

/// One-hot "does `sel` equal `index`" signal, built bit by bit.
fn decode_match<T: Gates>(sel: &T, index: usize) -> T {
    let w = sel.width();
    let mut acc: Option<T> = None;
    for bit_pos in 0..w {
        let bit = sel.select(bit_pos, bit_pos);
        let desired = (index >> bit_pos) & 1 == 1;
        let term = if desired { bit } else { bit.not() };
        acc = Some(match acc {
            None => term,
            Some(prev) => prev.and(&term),
        });
    }
    acc.unwrap_or_else(|| T::const_str("1"))
}

/// Broadcast a single bit across `width(data)` and AND it with `data`.
fn mask_with_bit<T: Gates>(data: &T, bit: &T) -> T {
    let parts: Vec<T> = core::iter::repeat(bit.clone()).take(data.width()).collect();
    data.and(&T::concat(&parts))
}

/// A ripple-carry full-adder chain. With `invert_rhs = true` this computes
/// `a - b` (`a + !b + 1`); the returned carry-out is then 1 iff `a >= b`.
///
/// # Panics
/// Panics on a width mismatch or an empty operand.
fn ripple<T: Gates>(a: &T, b: &T, invert_rhs: bool) -> (T, T) {
    check_binary(a, b, "ripple").unwrap_or_else(|e| panic!("{e}"));
    let w = a.width();
    let rhs = if invert_rhs { b.not() } else { b.clone() };
    let mut carry = T::const_str(if invert_rhs { "1" } else { "0" });
    let mut sum_lsb_first = Vec::with_capacity(w);
    for i in 0..w {
        let ai = a.select(i, i);
        let bi = rhs.select(i, i);
        let a_xor_b = ai.xor(&bi);
        let sum = a_xor_b.xor(&carry);
        let carry_out = ai.and(&bi).or(&carry.and(&a_xor_b));
        sum_lsb_first.push(sum);
        carry = carry_out;
    }
    sum_lsb_first.reverse();
    (T::concat(&sum_lsb_first), carry)
}

fn negate<T: Gates>(x: &T) -> T {
    ripple(&zero_const(x.width()), x, true).0
}

fn zero_const<T: Gates>(width: usize) -> T {
    if width == 0 {
        T::empty()
    } else {
        T::from_bool_vec(alloc::vec![false; width])
    }
}

/// Zero-extend `x` to `width` bits (assumes `width >= x.width()`).
fn zero_extend<T: Gates>(x: &T, width: usize) -> T {
    if width <= x.width() {
        return x.clone();
    }
    if x.is_empty() {
        return zero_const(width);
    }
    let pad = zero_const::<T>(width - x.width());
    T::concat(&[pad, x.clone()])
}

/// Logical shift-left by a constant distance, dropping bits off the top
/// and filling with zeros at the bottom. `n >= width(x)` yields all-zero.
fn shl_const<T: Gates>(x: &T, n: usize) -> T {
    let w = x.width();
    if n >= w {
        return zero_const(w);
    }
    if n == 0 {
        return x.clone();
    }
    let kept = x.select(w - 1 - n, 0);
    let fill = zero_const::<T>(n);
    T::concat(&[kept, fill])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bits::Bits;

    #[test]
    fn mux_selects_by_address() {
        let sel = Bits::const_str("10");
        let xs = [
            Bits::const_str("00"),
            Bits::const_str("01"),
            Bits::const_str("10"),
            Bits::const_str("11"),
        ];
        assert_eq!(Bits::mux(&sel, &xs).to_bstr(), "10");
    }

    #[test]
    fn mux_repeats_last_input_for_missing_addresses() {
        let sel = Bits::const_str("11");
        let xs = [
            Bits::const_str("00"),
            Bits::const_str("01"),
            Bits::const_str("10"),
        ];
        assert_eq!(Bits::mux(&sel, &xs).to_bstr(), "10");
    }

    #[test]
    fn add_wraps_modularly() {
        let a = Bits::const_str("1101");
        let b = Bits::const_str("0011");
        assert_eq!(a.add(&b).to_bstr(), "0000");
    }

    #[test]
    fn sub_matches_integer_subtraction() {
        let a = Bits::const_str("1000"); // 8
        let b = Bits::const_str("0011"); // 3
        assert_eq!(a.sub(&b).to_int64(), 5);
    }

    #[test]
    fn umul_output_width_is_sum_of_widths() {
        let a = Bits::const_str("110"); // 6
        let b = Bits::const_str("101"); // 5
        let p = a.umul(&b);
        assert_eq!(p.width(), 6);
        assert_eq!(p.to_int64(), 30);
    }

    #[test]
    fn smul_handles_negative_operands() {
        let a = Bits::const_str("4'B1111"); // -1
        let b = Bits::const_str("4'd3"); // 3
        let p = a.smul(&b);
        assert_eq!(p.width(), 8);
        assert_eq!(p.to_sint64(), -3);
    }

    #[test]
    fn eq_and_ult() {
        let a = Bits::const_str("0101");
        let b = Bits::const_str("0101");
        let c = Bits::const_str("0110");
        assert_eq!(a.eq(&b).to_int64(), 1);
        assert_eq!(a.eq(&c).to_int64(), 0);
        assert_eq!(a.ult(&c).to_int64(), 1);
        assert_eq!(c.ult(&a).to_int64(), 0);
    }

    #[test]
    fn add_sub_ult_reject_width_mismatch() {
        let a = Bits::const_str("01");
        let b = Bits::const_str("0011");
        assert!(std::panic::catch_unwind(|| a.add(&b)).is_err());
        assert!(std::panic::catch_unwind(|| a.sub(&b)).is_err());
        assert!(std::panic::catch_unwind(|| a.ult(&b)).is_err());
    }

    #[test]
    fn mux_arity_errors() {
        let sel = Bits::const_str("1");
        assert!(Bits::try_mux(&sel, &[Bits::const_str("0")]).is_err());
        let xs = [Bits::const_str("0"), Bits::const_str("1"), Bits::const_str("0")];
        assert!(Bits::try_mux(&sel, &xs).is_err());
    }
}

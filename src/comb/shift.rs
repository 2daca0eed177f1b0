//! Constant-distance shifts (`sll`/`srl`/`sra`) and the generic
//! `log_shift` combinator variable-distance shifts are built from.

use crate::{
    comb::mux::mux2,
    gates::Gates,
    primitives::Primitives,
};

/// Logical shift-left by a constant distance `n`. Bits shifted past the top
/// are dropped; the bottom is zero-filled. `n >= width(x)` yields all-zero.
pub fn sll<T: Gates>(x: &T, n: usize) -> T {
    let w = x.width();
    if n == 0 {
        return x.clone();
    }
    if n >= w {
        return zero(w);
    }
    T::concat(&[x.select(w - 1 - n, 0), zero(n)])
}

/// Logical shift-right by a constant distance `n`. Bits shifted past the
/// bottom are dropped; the top is zero-filled.
pub fn srl<T: Gates>(x: &T, n: usize) -> T {
    let w = x.width();
    if n == 0 {
        return x.clone();
    }
    if n >= w {
        return zero(w);
    }
    T::concat(&[zero(n), x.select(w - 1, n)])
}

/// Arithmetic shift-right by a constant distance `n`: the top is filled
/// with copies of the sign bit rather than zero.
pub fn sra<T: Gates>(x: &T, n: usize) -> T {
    let w = x.width();
    if n == 0 {
        return x.clone();
    }
    let sign = x.select(w - 1, w - 1);
    if n >= w {
        return T::concat(&core::iter::repeat(sign).take(w).collect::<alloc::vec::Vec<_>>());
    }
    let fill: alloc::vec::Vec<T> = core::iter::repeat(sign).take(n).collect();
    T::concat(&[T::concat(&fill), x.select(w - 1, n)])
}

fn zero<T: Gates>(width: usize) -> T {
    if width == 0 {
        T::empty()
    } else {
        T::from_bool_vec(alloc::vec![false; width])
    }
}

/// Recursive-halving variable shift: for each bit `i` of `distance` from
/// the LSB up, conditionally apply `base_op(x, 2^i)` via a two-way mux.
/// Depth equals `width(distance)`.
pub fn log_shift<T: Primitives>(base_op: impl Fn(&T, usize) -> T, x: &T, distance: &T) -> T {
    let mut acc = x.clone();
    for i in 0..distance.width() {
        let bit = distance.select(i, i);
        let shifted = base_op(&acc, 1usize << i);
        acc = mux2(&bit, &shifted, &acc);
    }
    acc
}

/// Variable-distance logical shift-left.
pub fn dsll<T: Primitives>(x: &T, distance: &T) -> T {
    log_shift(sll, x, distance)
}

/// Variable-distance logical shift-right.
pub fn dsrl<T: Primitives>(x: &T, distance: &T) -> T {
    log_shift(srl, x, distance)
}

/// Variable-distance arithmetic shift-right.
pub fn dsra<T: Primitives>(x: &T, distance: &T) -> T {
    log_shift(sra, x, distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn sll_and_srl_fill_with_zero() {
        let x = Bits::const_str("1101");
        assert_eq!(sll(&x, 0).to_bstr(), "1101");
        assert_eq!(sll(&x, 1).to_bstr(), "1010");
        assert_eq!(sll(&x, 4).to_bstr(), "0000");
        assert_eq!(srl(&x, 1).to_bstr(), "0110");
        assert_eq!(srl(&x, 4).to_bstr(), "0000");
    }

    #[test]
    fn sra_fills_with_sign() {
        let neg = Bits::const_str("1100");
        assert_eq!(sra(&neg, 1).to_bstr(), "1110");
        assert_eq!(sra(&neg, 3).to_bstr(), "1111");
        let pos = Bits::const_str("0100");
        assert_eq!(sra(&pos, 1).to_bstr(), "0010");
    }

    #[test]
    fn dsll_matches_constant_shift() {
        let x = Bits::const_str("00010110");
        for n in 0..8 {
            let distance = Bits::const_str(&alloc::format!("{:08b}", n));
            assert_eq!(dsll(&x, &distance), sll(&x, n));
            assert_eq!(dsrl(&x, &distance), srl(&x, n));
            assert_eq!(dsra(&x, &distance), sra(&x, n));
        }
    }
}

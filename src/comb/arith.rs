//! Relational variants beyond `eq`/`ult`, logical reduction (`land`/`lor`),
//! and the `_int` family of integer-promoted overloads.

use crate::{
    gates::Gates,
    primitives::Primitives,
};
use alloc::vec::Vec;

/// Unsigned less-or-equal.
pub fn ule<T: Primitives>(a: &T, b: &T) -> T {
    b.ult(a).not()
}

/// Unsigned greater-than.
pub fn ugt<T: Primitives>(a: &T, b: &T) -> T {
    b.ult(a)
}

/// Unsigned greater-or-equal.
pub fn uge<T: Primitives>(a: &T, b: &T) -> T {
    a.ult(b).not()
}

/// Bitwise inequality.
pub fn ne<T: Primitives>(a: &T, b: &T) -> T {
    a.eq(b).not()
}

/// Signed less-than: flip both operands' sign bit, compare unsigned.
pub fn slt<T: Primitives>(a: &T, b: &T) -> T {
    flip_msb(a).ult(&flip_msb(b))
}

/// Signed less-or-equal.
pub fn sle<T: Primitives>(a: &T, b: &T) -> T {
    flip_msb(b).ult(&flip_msb(a)).not()
}

/// Signed greater-than.
pub fn sgt<T: Primitives>(a: &T, b: &T) -> T {
    flip_msb(b).ult(&flip_msb(a))
}

/// Signed greater-or-equal.
pub fn sge<T: Primitives>(a: &T, b: &T) -> T {
    flip_msb(a).ult(&flip_msb(b)).not()
}

/// Logical AND: reduce each side to a single "is nonzero" bit, then AND.
pub fn land<T: Primitives>(a: &T, b: &T) -> T {
    is_nonzero(a).and(&is_nonzero(b))
}

/// Logical OR: reduce each side to a single "is nonzero" bit, then OR.
pub fn lor<T: Primitives>(a: &T, b: &T) -> T {
    is_nonzero(a).or(&is_nonzero(b))
}

fn flip_msb<T: Gates>(x: &T) -> T {
    let w = x.width();
    let mask = T::from_bool_vec({
        let mut bits = alloc::vec![false; w];
        bits[0] = true;
        bits
    });
    x.xor(&mask)
}

fn is_nonzero<T: Gates>(x: &T) -> T {
    let w = x.width();
    let mut acc = x.select(0, 0);
    for i in 1..w {
        acc = acc.or(&x.select(i, i));
    }
    acc
}

/// Promote a native integer to a `T`-constant of `width` bits, two's
/// complement, MSB-first.
pub fn const_of_width<T: Gates>(value: i64, width: usize) -> T {
    let mut bits = Vec::with_capacity(width);
    for i in (0..width).rev() {
        bits.push((value >> i) & 1 == 1);
    }
    T::from_bool_vec(bits)
}

/// Integer-promoted overload: the right-hand operand is a native integer,
/// promoted to a constant the same width as the left operand.
macro_rules! int_variant {
    ($name:ident, $base:ident, $bound:path) => {
        pub fn $name<T: $bound>(a: &T, i: i64) -> T {
            let b = const_of_width::<T>(i, a.width());
            $base(a, &b)
        }
    };
}

pub fn add_int<T: Primitives>(a: &T, i: i64) -> T {
    a.add(&const_of_width::<T>(i, a.width()))
}

pub fn sub_int<T: Primitives>(a: &T, i: i64) -> T {
    a.sub(&const_of_width::<T>(i, a.width()))
}

pub fn and_int<T: Gates>(a: &T, i: i64) -> T {
    a.and(&const_of_width::<T>(i, a.width()))
}

pub fn or_int<T: Gates>(a: &T, i: i64) -> T {
    a.or(&const_of_width::<T>(i, a.width()))
}

pub fn xor_int<T: Gates>(a: &T, i: i64) -> T {
    a.xor(&const_of_width::<T>(i, a.width()))
}

pub fn eq_int<T: Primitives>(a: &T, i: i64) -> T {
    a.eq(&const_of_width::<T>(i, a.width()))
}

int_variant!(ne_int, ne, Primitives);
pub fn ult_int<T: Primitives>(a: &T, i: i64) -> T {
    a.ult(&const_of_width::<T>(i, a.width()))
}
int_variant!(ule_int, ule, Primitives);
int_variant!(ugt_int, ugt, Primitives);
int_variant!(uge_int, uge, Primitives);
int_variant!(slt_int, slt, Primitives);
int_variant!(sle_int, sle, Primitives);
int_variant!(sgt_int, sgt, Primitives);
int_variant!(sge_int, sge, Primitives);

pub fn umul_int<T: Primitives>(a: &T, i: i64) -> T {
    a.umul(&const_of_width::<T>(i, a.width()))
}

pub fn smul_int<T: Primitives>(a: &T, i: i64) -> T {
    a.smul(&const_of_width::<T>(i, a.width()))
}

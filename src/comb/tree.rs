//! Log-depth structural generators: the `tree`/`reduce` combinators
//! themselves, and everything built from them — priority/onehot select,
//! popcount, leading/trailing run counts, and floor/ceil log2.
//!
//! Every generator below is parameterized by a branching factor `b >= 2`;
//! depth is `ceil(log_b n)` for an `n`-element input list.

use crate::{
    comb::{
        arith::const_of_width,
        mux::mux2,
        resize::uresize,
    },
    gates::Gates,
    primitives::Primitives,
};
use alloc::vec::Vec;

/// A 1-bit valid flag paired with a data signal: "optional data of fixed
/// width". `data` is unspecified (but still a well-formed signal) when
/// `valid` is low.
#[derive(Clone, Debug, PartialEq)]
pub struct Valid<T> {
    /// High iff `data` holds a meaningful value.
    pub valid: T,
    /// The payload. Don't-care when `valid` is low.
    pub data: T,
}

/// Recursively partition `inputs` into chunks of `arity`, apply `f` to
/// each chunk, and repeat on the resulting (shorter) list until one
/// element remains.
///
/// # Panics
/// Panics if `inputs` is empty.
pub fn tree<T: Clone>(arity: usize, f: impl Fn(&[T]) -> T, inputs: Vec<T>) -> T {
    assert!(arity >= 2, "tree: arity must be >= 2, got {arity}");
    assert!(!inputs.is_empty(), "tree: inputs must not be empty");
    #[cfg(feature = "tracing")]
    tracing::trace!(arity, len = inputs.len(), "building reduction tree");
    let mut level = inputs;
    while level.len() > 1 {
        #[cfg(feature = "tracing")]
        tracing::trace!(level_len = level.len(), "reducing tree level");
        level = level.chunks(arity).map(&f).collect();
    }
    level.into_iter().next().unwrap()
}

/// Left-fold `xs` with `f`.
///
/// # Panics
/// Panics if `xs` is empty.
pub fn reduce<T: Clone>(f: impl Fn(T, T) -> T, xs: &[T]) -> T {
    assert!(!xs.is_empty(), "reduce: xs must not be empty");
    let mut acc = xs[0].clone();
    for x in &xs[1..] {
        acc = f(acc, x.clone());
    }
    acc
}

/// Scanning in list order, select the data of the first case whose valid
/// bit is high. The combined valid flag is the OR of every case's valid.
pub fn priority_select<T: Gates>(branching_factor: usize, cases: &[Valid<T>]) -> Valid<T> {
    #[cfg(feature = "tracing")]
    tracing::debug!(branching_factor, cases = cases.len(), "priority_select");
    tree(
        branching_factor,
        |chunk: &[Valid<T>]| reduce(merge_priority, chunk),
        cases.to_vec(),
    )
}

fn merge_priority<T: Gates>(a: Valid<T>, b: Valid<T>) -> Valid<T> {
    Valid {
        valid: a.valid.or(&b.valid),
        data: mux2_raw(&a.valid, &a.data, &b.data),
    }
}

/// [`priority_select`], returning `default` instead of an invalid flag
/// when no case matched.
pub fn priority_select_with_default<T: Primitives>(
    branching_factor: usize,
    default: &T,
    cases: &[Valid<T>],
) -> T {
    let result = priority_select(branching_factor, cases);
    mux2(&result.valid, &result.data, default)
}

/// OR-of-AND select: bitwise OR, across every case, of (the condition
/// broadcast across the value's width) AND the value. All-zero if no
/// condition is high; behavior when more than one is high is still a
/// well-defined OR, but not a meaningful "pick one".
pub fn onehot_select<T: Gates>(branching_factor: usize, cases: &[(T, T)]) -> T {
    if cases.is_empty() {
        return T::empty();
    }
    let premasked: Vec<T> = cases
        .iter()
        .map(|(cond, val)| {
            let w = val.width();
            let mask: Vec<T> = core::iter::repeat(cond.clone()).take(w).collect();
            val.and(&T::concat(&mask))
        })
        .collect();
    tree(
        branching_factor,
        |chunk| reduce(|a: T, b: T| a.or(&b), chunk),
        premasked,
    )
}

/// Number of bits needed to represent any value in `0..=n`.
fn count_result_width(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

/// Number of bits needed to represent any index into a `w`-bit signal
/// (`0..w`), i.e. `ceil(log2(w))`, with a floor of 1 bit.
fn index_width(w: usize) -> usize {
    if w <= 1 {
        1
    } else {
        count_result_width(w - 1)
    }
}

/// Tree-sum of the individual bits of `x`. Result width is sized to hold
/// any count from `0` to `width(x)` without overflow.
pub fn popcount<T: Primitives>(branching_factor: usize, x: &T) -> T {
    let w = x.width();
    let out_w = count_result_width(w);
    let leaves: Vec<T> = (0..w).map(|i| uresize(&x.select(i, i), out_w)).collect();
    tree(branching_factor, |chunk| reduce(|a: T, b: T| a.add(&b), chunk), leaves)
}

/// `popcount(x) == 1`.
pub fn is_pow2<T: Primitives>(branching_factor: usize, x: &T) -> T {
    let count = popcount(branching_factor, x);
    let one = const_of_width::<T>(1, count.width());
    count.eq(&one)
}

/// Index of the highest set bit, or invalid when `x` is all-zero.
pub fn floor_log2<T: Primitives>(branching_factor: usize, x: &T) -> Valid<T> {
    let w = x.width();
    let out_w = index_width(w);
    let cases: Vec<Valid<T>> = (0..w)
        .rev()
        .map(|i| Valid {
            valid: x.select(i, i),
            data: const_of_width::<T>(i as i64, out_w),
        })
        .collect();
    priority_select(branching_factor, &cases)
}

/// `floor_log2(x - 1) + 1`, or `0` when `x == 1`; invalid when `x == 0`.
/// Output is one bit wider than [`floor_log2`]'s, since `ceil_log2` of a
/// `w`-bit all-ones input is `w` itself, which [`floor_log2`]'s index
/// width cannot represent.
pub fn ceil_log2<T: Primitives>(branching_factor: usize, x: &T) -> Valid<T> {
    let w = x.width();
    let out_w = count_result_width(w);
    let one = const_of_width::<T>(1, w);
    let is_one = x.eq(&one);
    let x_minus_1 = x.sub(&one);
    let below = floor_log2(branching_factor, &x_minus_1);
    let plus_one = uresize(&below.data, out_w).add(&const_of_width::<T>(1, out_w));
    let zero = const_of_width::<T>(0, out_w);
    Valid {
        valid: is_nonzero(x),
        data: mux2(&is_one, &zero, &plus_one),
    }
}

fn is_nonzero<T: Gates>(x: &T) -> T {
    let w = x.width();
    let mut acc = x.select(0, 0);
    for i in 1..w {
        acc = acc.or(&x.select(i, i));
    }
    acc
}

/// Count of consecutive zero bits from the MSB.
pub fn leading_zeros<T: Primitives>(branching_factor: usize, x: &T) -> T {
    let w = x.width();
    let out_w = count_result_width(w);
    let found = floor_log2(branching_factor, x);
    let lz_found = const_of_width::<T>((w - 1) as i64, out_w).sub(&uresize(&found.data, out_w));
    mux2(&found.valid, &lz_found, &const_of_width::<T>(w as i64, out_w))
}

/// Count of consecutive one bits from the MSB.
pub fn leading_ones<T: Primitives>(branching_factor: usize, x: &T) -> T {
    leading_zeros(branching_factor, &x.not())
}

fn reverse<T: Gates>(x: &T) -> T {
    let w = x.width();
    let bits: Vec<T> = (0..w).map(|i| x.select(i, i)).collect();
    T::concat(&bits)
}

/// Count of consecutive zero bits from the LSB.
pub fn trailing_zeros<T: Primitives>(branching_factor: usize, x: &T) -> T {
    leading_zeros(branching_factor, &reverse(x))
}

/// Count of consecutive one bits from the LSB.
pub fn trailing_ones<T: Primitives>(branching_factor: usize, x: &T) -> T {
    leading_ones(branching_factor, &reverse(x))
}

/// Raw two-way select without the `Primitives` bound, for use inside
/// `merge_priority` where only `Gates` is available structurally (the
/// trait bound is carried by the outer `priority_select` call).
fn mux2_raw<T: Gates>(c: &T, t: &T, f: &T) -> T {
    let w = t.width();
    let mask: Vec<T> = core::iter::repeat(c.clone()).take(w).collect();
    let c_bcast = T::concat(&mask);
    let not_c_bcast = c_bcast.not();
    t.and(&c_bcast).or(&f.and(&not_c_bcast))
}

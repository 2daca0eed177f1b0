//! Bit selection and slicing: `bit`, `msb`/`lsb`, `drop_*`/`sel_*`,
//! `insert`, `reverse`, `repeat`, and the `split*` family.

use crate::{
    error::Error,
    gates::Gates,
};
use alloc::vec::Vec;

pub fn bit<T: Gates>(x: &T, i: usize) -> T {
    x.select(i, i)
}

pub fn msb<T: Gates>(x: &T) -> T {
    x.select(x.width() - 1, x.width() - 1)
}

pub fn lsb<T: Gates>(x: &T) -> T {
    x.select(0, 0)
}

pub fn msbs<T: Gates>(x: &T) -> T {
    x.select(x.width() - 1, 1)
}

pub fn lsbs<T: Gates>(x: &T) -> T {
    x.select(x.width() - 2, 0)
}

/// Drop the bottom `n` bits.
///
/// # Panics
/// Panics if `n > width(x)`.
pub fn drop_bottom<T: Gates>(x: &T, n: usize) -> T {
    try_drop_bottom(x, n).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`drop_bottom`].
pub fn try_drop_bottom<T: Gates>(x: &T, n: usize) -> Result<T, Error> {
    let w = x.width();
    if n > w {
        return Err(Error::OutOfRange { index: n, width: w });
    }
    if n == w {
        return Ok(T::empty());
    }
    Ok(x.select(w - 1, n))
}

/// Drop the top `n` bits.
///
/// # Panics
/// Panics if `n > width(x)`.
pub fn drop_top<T: Gates>(x: &T, n: usize) -> T {
    try_drop_top(x, n).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`drop_top`].
pub fn try_drop_top<T: Gates>(x: &T, n: usize) -> Result<T, Error> {
    let w = x.width();
    if n > w {
        return Err(Error::OutOfRange { index: n, width: w });
    }
    if n == w {
        return Ok(T::empty());
    }
    Ok(x.select(w - 1 - n, 0))
}

/// Keep the bottom `n` bits.
///
/// # Panics
/// Panics if `n > width(x)`.
pub fn sel_bottom<T: Gates>(x: &T, n: usize) -> T {
    try_sel_bottom(x, n).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`sel_bottom`].
pub fn try_sel_bottom<T: Gates>(x: &T, n: usize) -> Result<T, Error> {
    let w = x.width();
    if n > w {
        return Err(Error::OutOfRange { index: n, width: w });
    }
    if n == 0 {
        return Ok(T::empty());
    }
    Ok(x.select(n - 1, 0))
}

/// Keep the top `n` bits.
///
/// # Panics
/// Panics if `n > width(x)`.
pub fn sel_top<T: Gates>(x: &T, n: usize) -> T {
    try_sel_top(x, n).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`sel_top`].
pub fn try_sel_top<T: Gates>(x: &T, n: usize) -> Result<T, Error> {
    let w = x.width();
    if n > w {
        return Err(Error::OutOfRange { index: n, width: w });
    }
    if n == 0 {
        return Ok(T::empty());
    }
    Ok(x.select(w - 1, w - n))
}

/// Replace bits `[n, n + width(f) - 1]` of `t` with `f`.
///
/// # Panics
/// Panics if `n + width(f) > width(t)`.
pub fn insert<T: Gates>(t: &T, f: &T, n: usize) -> T {
    try_insert(t, f, n).unwrap_or_else(|e| panic!("{e}"))
}

/// Fallible form of [`insert`].
pub fn try_insert<T: Gates>(t: &T, f: &T, n: usize) -> Result<T, Error> {
    let wt = t.width();
    let wf = f.width();
    if n + wf > wt {
        return Err(Error::OutOfRangeSlice {
            hi: n + wf,
            lo: n,
            width: wt,
        });
    }
    let mut parts = Vec::with_capacity(3);
    if n + wf < wt {
        parts.push(t.select(wt - 1, n + wf));
    }
    if !f.is_empty() {
        parts.push(f.clone());
    }
    if n > 0 {
        parts.push(t.select(n - 1, 0));
    }
    Ok(if parts.is_empty() { T::empty() } else { T::concat(&parts) })
}

pub fn reverse<T: Gates>(x: &T) -> T {
    let w = x.width();
    let bits: Vec<T> = (0..w).map(|i| x.select(i, i)).collect();
    T::concat(&bits)
}

pub fn repeat<T: Gates>(x: &T, n: usize) -> T {
    assert!(n >= 1, "repeat: n must be >= 1");
    let parts: Vec<T> = core::iter::repeat(x.clone()).take(n).collect();
    T::concat(&parts)
}

pub fn split_in_half<T: Gates>(x: &T) -> (T, T) {
    let w = x.width();
    assert!(w % 2 == 0, "split_in_half: width must be even, got {w}");
    let half = w / 2;
    (x.select(w - 1, half), x.select(half - 1, 0))
}

/// Split `x` into `part_width`-wide chunks, LSB-first. When `exact` is
/// false, the final (most-significant) fragment may be narrower.
pub fn split<T: Gates>(x: &T, part_width: usize, exact: bool) -> Vec<T> {
    assert!(part_width >= 1, "split: part_width must be >= 1");
    let w = x.width();
    if exact {
        assert!(
            w % part_width == 0,
            "split: width {w} not a multiple of part_width {part_width}"
        );
    }
    let mut parts = Vec::new();
    let mut lo = 0;
    while lo < w {
        let hi = (lo + part_width - 1).min(w - 1);
        parts.push(x.select(hi, lo));
        lo += part_width;
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn msb_lsb_and_trims() {
        let x = Bits::const_str("1011");
        assert_eq!(msb(&x).to_bstr(), "1");
        assert_eq!(lsb(&x).to_bstr(), "1");
        assert_eq!(msbs(&x).to_bstr(), "011");
        assert_eq!(lsbs(&x).to_bstr(), "101");
    }

    #[test]
    fn drop_and_sel_are_total_over_range() {
        let x = Bits::const_str("10110");
        assert_eq!(try_drop_bottom(&x, 2).unwrap().to_bstr(), "101");
        assert_eq!(try_drop_top(&x, 2).unwrap().to_bstr(), "110");
        assert_eq!(try_sel_bottom(&x, 2).unwrap().to_bstr(), "10");
        assert_eq!(try_sel_top(&x, 2).unwrap().to_bstr(), "10");
        assert!(try_drop_bottom(&x, 6).is_err());
    }

    #[test]
    fn panicking_wrappers_match_their_try_forms() {
        let x = Bits::const_str("10110");
        assert_eq!(drop_bottom(&x, 2), try_drop_bottom(&x, 2).unwrap());
        assert_eq!(drop_top(&x, 2), try_drop_top(&x, 2).unwrap());
        assert_eq!(sel_bottom(&x, 2), try_sel_bottom(&x, 2).unwrap());
        assert_eq!(sel_top(&x, 2), try_sel_top(&x, 2).unwrap());
        assert!(std::panic::catch_unwind(|| drop_bottom(&x, 6)).is_err());
        assert!(std::panic::catch_unwind(|| sel_top(&x, 6)).is_err());
    }

    #[test]
    fn insert_replaces_a_subrange() {
        let t = Bits::const_str("11110000");
        let f = Bits::const_str("101");
        let out = try_insert(&t, &f, 2).unwrap();
        assert_eq!(out.to_bstr(), "11110100");
        assert_eq!(insert(&t, &f, 2), out);
        assert!(std::panic::catch_unwind(|| insert(&t, &f, 7)).is_err());
    }

    #[test]
    fn reverse_flips_bit_order() {
        assert_eq!(reverse(&Bits::const_str("1000")).to_bstr(), "0001");
    }

    #[test]
    fn repeat_concatenates_n_copies() {
        assert_eq!(repeat(&Bits::const_str("10"), 3).to_bstr(), "101010");
    }

    #[test]
    fn split_in_half_and_split_chunks() {
        let (hi, lo) = split_in_half(&Bits::const_str("110010"));
        assert_eq!((hi.to_bstr(), lo.to_bstr()), ("110".into(), "010".into()));

        let parts = split(&Bits::const_str("11010110"), 3, false);
        let strs: Vec<_> = parts.iter().map(|p| p.to_bstr()).collect();
        assert_eq!(strs, vec!["110", "010", "11"]);
    }
}

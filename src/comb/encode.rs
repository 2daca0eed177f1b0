//! Binary/onehot and binary/gray conversions.

use crate::gates::Gates;
use alloc::vec::Vec;

/// Onehot vector with bit `x` (as an unsigned index) set; width
/// `2^width(x)`.
pub fn binary_to_onehot<T: Gates>(x: &T) -> T {
    let w = x.width();
    let out_w = 1usize << w;
    #[cfg(feature = "tracing")]
    tracing::debug!(in_width = w, out_width = out_w, "binary_to_onehot");
    let bits: Vec<T> = (0..out_w)
        .rev()
        .map(|i| {
            let key = {
                let mut b = alloc::vec::Vec::with_capacity(w);
                for bit_pos in (0..w).rev() {
                    b.push((i >> bit_pos) & 1 == 1);
                }
                T::from_bool_vec(b)
            };
            x.eq(&key)
        })
        .collect();
    T::concat(&bits)
}

/// Inverse of [`binary_to_onehot`]: for each output bit `i`, OR together
/// the onehot bits whose index has bit `i` set.
pub fn onehot_to_binary<T: Gates>(x: &T) -> T {
    let in_w = x.width();
    let out_w = (usize::BITS - (in_w - 1).leading_zeros()) as usize;
    let out_bits: Vec<T> = (0..out_w)
        .rev()
        .map(|bit_pos| {
            let mut acc: Option<T> = None;
            for i in 0..in_w {
                if (i >> bit_pos) & 1 == 1 {
                    let onehot_bit = x.select(i, i);
                    acc = Some(match acc {
                        None => onehot_bit,
                        Some(prev) => prev.or(&onehot_bit),
                    });
                }
            }
            acc.unwrap_or_else(|| T::from_bool_vec(alloc::vec![false]))
        })
        .collect();
    T::concat(&out_bits)
}

/// `x XOR (x >> 1)` (logical, zero-filled).
pub fn binary_to_gray<T: Gates>(x: &T) -> T {
    let w = x.width();
    if w <= 1 {
        return x.clone();
    }
    let shifted = T::concat(&[T::from_bool_vec(alloc::vec![false]), x.select(w - 1, 1)]);
    x.xor(&shifted)
}

/// Cumulative XOR from the MSB down: `b[w-1] = g[w-1]`, `b[i] = b[i+1] XOR g[i]`.
pub fn gray_to_binary<T: Gates>(g: &T) -> T {
    let w = g.width();
    let mut bits_msb_first: Vec<T> = Vec::with_capacity(w);
    let mut prev = g.select(w - 1, w - 1);
    bits_msb_first.push(prev.clone());
    for i in (0..w - 1).rev() {
        let gi = g.select(i, i);
        let bi = prev.xor(&gi);
        bits_msb_first.push(bi.clone());
        prev = bi;
    }
    T::concat(&bits_msb_first)
}

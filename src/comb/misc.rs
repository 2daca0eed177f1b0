//! Modular counters, negation, and PRNG-backed constant generation.

use crate::{
    gates::Gates,
    primitives::Primitives,
    rand::Lcg64,
};

/// Increment `x` modulo `max + 1`. When `max + 1` is a power of two, a
/// plain wrapping add already produces the correct wrap, so that's all
/// this does; otherwise it explicitly resets to zero at `max`.
pub fn mod_counter<T: Primitives>(max: i64, x: &T) -> T {
    let w = x.width();
    let one = crate::comb::arith::const_of_width::<T>(1, w);
    let incremented = x.add(&one);
    if (max + 1) & max == 0 {
        return incremented;
    }
    let max_const = crate::comb::arith::const_of_width::<T>(max, w);
    let at_max = x.eq(&max_const);
    let zero = crate::comb::arith::const_of_width::<T>(0, w);
    crate::comb::mux::mux2(&at_max, &zero, &incremented)
}

/// `0 - x`, same width as `x`.
pub fn negate<T: Primitives>(x: &T) -> T {
    let zero = crate::comb::arith::const_of_width::<T>(0, x.width());
    zero.sub(x)
}

/// A constant bit-vector of `width` bits drawn from `rng`.
pub fn srand<T: Gates>(rng: &mut Lcg64, width: usize) -> T {
    T::from_bool_vec(rng.next_bits(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn mod_counter_wraps_at_power_of_two() {
        let x = Bits::const_str("11"); // 3, max = 3 (width 2, power-of-two wrap)
        assert_eq!(mod_counter(3, &x).to_int64(), 0);
    }

    #[test]
    fn mod_counter_resets_at_non_power_of_two_max() {
        let x = Bits::const_str("0101"); // 5, max = 5
        assert_eq!(mod_counter(5, &x).to_int64(), 0);
        let y = Bits::const_str("0011"); // 3
        assert_eq!(mod_counter(5, &y).to_int64(), 4);
    }

    #[test]
    fn negate_is_self_inverse() {
        let x = Bits::const_str("0101");
        let neg = negate(&x);
        assert_eq!(negate(&neg), x);
    }

    #[test]
    fn srand_is_deterministic_for_same_seed() {
        let mut a = Lcg64::new(7);
        let mut b = Lcg64::new(7);
        let x: Bits = srand(&mut a, 16);
        let y: Bits = srand(&mut b, 16);
        assert_eq!(x, y);
        assert_eq!(x.width(), 16);
    }
}

//! The multiplexer family: two-way, indexed, keyed (`cases`/`matches`),
//! and priority/onehot selection over condition-value pairs.

use crate::{
    comb::arith::const_of_width,
    gates::Gates,
    primitives::Primitives,
};
use alloc::vec::Vec;

/// Two-way mux: `t` when `c` is high, else `f`.
pub fn mux2<T: Primitives>(c: &T, t: &T, f: &T) -> T {
    T::mux(c, &[f.clone(), t.clone()])
}

/// Indexed mux: `f(0), f(1), ..., f(n - 1)` selected by `sel`.
pub fn mux_init<T: Primitives>(sel: &T, n: usize, f: impl Fn(usize) -> T) -> T {
    let xs: Vec<T> = (0..n).map(f).collect();
    T::mux(sel, &xs)
}

/// Equality-keyed select: the value paired with the first matching literal
/// key, or `default` if none match.
pub fn cases<T: Primitives>(sel: &T, default: &T, table: &[(i64, T)]) -> T {
    let w = sel.width();
    let mut acc = default.clone();
    for (key, val) in table.iter().rev() {
        let key_const = const_of_width::<T>(*key, w);
        let cond = sel.eq(&key_const);
        acc = mux2(&cond, val, &acc);
    }
    acc
}

/// Like [`cases`], but table values (and `default`) may differ in width;
/// every candidate is passed through `resize` to a common target width
/// (the widest among them) before selection.
pub fn matches<T: Primitives>(
    sel: &T,
    default: Option<&T>,
    table: &[(i64, T)],
    resize: impl Fn(&T, usize) -> T,
) -> T {
    let target = table
        .iter()
        .map(|(_, v)| v.width())
        .chain(default.map(Gates::width))
        .max()
        .unwrap_or(0);
    let resized_table: Vec<(i64, T)> = table.iter().map(|(k, v)| (*k, resize(v, target))).collect();
    let resized_default = match default {
        Some(d) => resize(d, target),
        None => {
            if target == 0 {
                T::empty()
            } else {
                T::from_bool_vec(alloc::vec![false; target])
            }
        }
    };
    cases(sel, &resized_default, &resized_table)
}

/// Priority mux: the value of the first `(cond, value)` pair whose
/// condition is high, scanning in list order; `default` if none match.
pub fn pmux<T: Primitives>(cases: &[(T, T)], default: &T) -> T {
    let mut acc = default.clone();
    for (cond, val) in cases.iter().rev() {
        acc = mux2(cond, val, &acc);
    }
    acc
}

/// Like [`pmux`], but with no default: the caller guarantees at most one
/// condition is high. The result is all-zero when none are.
pub fn pmuxl<T: Primitives>(cases: &[(T, T)]) -> T {
    let w = cases.first().map(|(_, v)| v.width()).unwrap_or(0);
    let default = if w == 0 { T::empty() } else { T::from_bool_vec(alloc::vec![false; w]) };
    pmux(cases, &default)
}

/// One-hot select: the bitwise OR of (condition broadcast AND value) over
/// every case. All-zero if no condition is high; undefined bit pattern
/// (though still well-defined as an OR) if more than one is.
pub fn pmux1h<T: Gates>(cases: &[(T, T)]) -> T {
    let w = cases.first().map(|(_, v)| v.width()).unwrap_or(0);
    let mut acc = if w == 0 { T::empty() } else { T::from_bool_vec(alloc::vec![false; w]) };
    for (cond, val) in cases {
        let mask: Vec<T> = core::iter::repeat(cond.clone()).take(val.width()).collect();
        let masked = val.and(&T::concat(&mask));
        acc = acc.or(&masked);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn mux2_picks_by_condition() {
        let t = Bits::const_str("11");
        let f = Bits::const_str("00");
        assert_eq!(mux2(&Bits::const_str("1"), &t, &f).to_bstr(), "11");
        assert_eq!(mux2(&Bits::const_str("0"), &t, &f).to_bstr(), "00");
    }

    #[test]
    fn mux_init_builds_table_from_closure() {
        let sel = Bits::const_str("10");
        let out = mux_init(&sel, 4, |i| Bits::const_str(&alloc::format!("{:02b}", i * 3 % 4)));
        assert_eq!(out.to_int64(), (2 * 3) % 4);
    }

    #[test]
    fn cases_first_match_wins() {
        let sel = Bits::const_str("010");
        let table = [
            (1i64, Bits::const_str("0001")),
            (2i64, Bits::const_str("0010")),
        ];
        let default = Bits::const_str("1111");
        assert_eq!(cases(&sel, &default, &table).to_bstr(), "0010");
        let sel2 = Bits::const_str("011");
        assert_eq!(cases(&sel2, &default, &table).to_bstr(), "1111");
    }

    #[test]
    fn pmux_pmuxl_and_pmux1h_agree_when_one_hot() {
        let gnd = Bits::const_str("0");
        let vdd = Bits::const_str("1");
        let cases_list = [
            (gnd.clone(), Bits::const_str("0111")),
            (vdd.clone(), Bits::const_str("0011")),
            (gnd, Bits::const_str("1001")),
        ];
        let default = Bits::const_str("0000");
        assert_eq!(pmux(&cases_list, &default).to_bstr(), "0011");
        assert_eq!(pmuxl(&cases_list).to_bstr(), "0011");
        assert_eq!(pmux1h(&cases_list).to_bstr(), "0011");
    }
}

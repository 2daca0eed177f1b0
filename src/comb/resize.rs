//! Width resizing: zero-extend/truncate (`uresize`) and sign-extend/
//! truncate (`sresize`).

use crate::gates::Gates;
use alloc::vec::Vec;

pub fn uresize<T: Gates>(x: &T, width: usize) -> T {
    let w = x.width();
    if width == w {
        return x.clone();
    }
    if width < w {
        return if width == 0 { T::empty() } else { x.select(width - 1, 0) };
    }
    let pad = width - w;
    if x.is_empty() {
        return T::from_bool_vec(alloc::vec![false; width]);
    }
    let zeros = T::from_bool_vec(alloc::vec![false; pad]);
    T::concat(&[zeros, x.clone()])
}

pub fn sresize<T: Gates>(x: &T, width: usize) -> T {
    let w = x.width();
    if width == w {
        return x.clone();
    }
    if width < w {
        return if width == 0 { T::empty() } else { x.select(width - 1, 0) };
    }
    let pad = width - w;
    let sign = x.select(w - 1, w - 1);
    let fill: Vec<T> = core::iter::repeat(sign).take(pad).collect();
    T::concat(&[T::concat(&fill), x.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bits;

    #[test]
    fn uresize_zero_extends_and_truncates() {
        let x = Bits::const_str("101");
        assert_eq!(uresize(&x, 5).to_bstr(), "00101");
        assert_eq!(uresize(&x, 2).to_bstr(), "01");
        assert_eq!(uresize(&x, 3).to_bstr(), "101");
    }

    #[test]
    fn sresize_sign_extends_and_truncates() {
        let neg = Bits::const_str("101"); // -3 in 3 bits
        assert_eq!(sresize(&neg, 5).to_bstr(), "11101");
        let pos = Bits::const_str("011");
        assert_eq!(sresize(&pos, 5).to_bstr(), "00011");
        assert_eq!(sresize(&neg, 2).to_bstr(), "01");
    }

    #[test]
    fn double_resize_law() {
        let x = Bits::const_str("10110");
        let once = uresize(&uresize(&x, 8), 3);
        let direct = uresize(&x, 3);
        assert_eq!(once, direct);
    }
}

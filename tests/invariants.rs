//! The universal invariants of §8: width law, resize laws, concat/select
//! laws, and the handful of algebraic identities tying signed/unsigned
//! variants back to their `Primitives` kernels.

use combinational::{
    Bits,
    Comb,
    Gates,
    Primitives,
};
use quickcheck_macros::quickcheck;
use rstest::rstest;

#[rstest]
#[case(3, 8, 5)]
#[case(5, 4, 2)]
#[case(0, 6, 0)]
fn double_resize_law(#[case] value: u32, #[case] w1: usize, #[case] w2: usize) {
    let x = Bits::const_str(&format!("{:08b}", value));
    let once = x.uresize(w1).uresize(w2);
    let direct = x.uresize(w2);
    assert_eq!(once, direct);
}

#[rstest]
#[case("1101", "0011")]
#[case("0000", "1111")]
#[case("1010", "0101")]
fn adder_is_modular(#[case] a: &str, #[case] b: &str) {
    let av = i64::from_str_radix(a, 2).unwrap();
    let bv = i64::from_str_radix(b, 2).unwrap();
    let w = a.len() as u32;
    let expected = (av + bv) % (1i64 << w);
    let sum = Bits::const_str(a).add(&Bits::const_str(b));
    assert_eq!(sum.to_int64(), expected);
}

#[test]
fn concat_associativity() {
    let a = Bits::const_str("10");
    let b = Bits::const_str("011");
    let c = Bits::const_str("1");
    let left = Bits::concat(&[a.clone(), Bits::concat(&[b.clone(), c.clone()])]);
    let right = Bits::concat(&[a, b, c]);
    assert_eq!(left, right);
}

#[test]
fn slice_of_concat_matches_subrange() {
    let a = Bits::const_str("1100");
    let b = Bits::const_str("1010");
    let whole = Bits::concat(&[a, b]);
    assert_eq!(whole.select(7, 4).to_bstr(), "1100");
    assert_eq!(whole.select(3, 0).to_bstr(), "1010");
    assert_eq!(whole.select(5, 2).to_bstr(), "0010");
}

#[test]
fn mux_repetition_matches_explicit_padding() {
    let sel = Bits::const_str("11"); // addresses index 3, past the 3-element list
    let xs = [Bits::const_str("00"), Bits::const_str("01"), Bits::const_str("10")];
    let padded = [xs[0].clone(), xs[1].clone(), xs[2].clone(), xs[2].clone()];
    assert_eq!(Bits::mux(&sel, &xs), Bits::mux(&sel, &padded));
}

#[test]
fn sign_extension_is_idempotent() {
    let x = Bits::const_str("1011");
    assert_eq!(x.sresize(4), x.sresize(4).sresize(4));
}

#[test]
fn shift_identities() {
    let x = Bits::const_str("10110110");
    assert_eq!(x.sll(0), x);
    assert_eq!(x.srl(8), Bits::const_str("00000000"));
    let neg = Bits::const_str("10000000");
    assert_eq!(neg.sra(7), Bits::const_str("11111111"));
}

#[test]
fn pmux1h_matches_pmuxl_when_one_hot() {
    let gnd = Bits::const_str("0");
    let vdd = Bits::const_str("1");
    let cases = [
        (gnd.clone(), Bits::const_str("0001")),
        (vdd, Bits::const_str("0010")),
        (gnd, Bits::const_str("0100")),
    ];
    assert_eq!(Bits::pmuxl(&cases), Bits::pmux1h(&cases));
}

#[test]
fn signed_compare_matches_flipped_unsigned() {
    let a = Bits::const_str("1001"); // -7
    let b = Bits::const_str("0011"); // 3
    let mask = Bits::const_str("1000");
    assert_eq!(a.slt(&b), a.xor(&mask).ult(&b.xor(&mask)));
}

#[quickcheck]
fn gray_round_trip_qc(value: u16) -> bool {
    let x = Bits::const_str(&format!("{:016b}", value));
    x.binary_to_gray().gray_to_binary() == x
}

#[quickcheck]
fn onehot_round_trip_qc(value: u8) -> bool {
    let v = (value % 16) as u32; // keep width(x) <= 32 per the spec's test bound
    let x = Bits::const_str(&format!("{:04b}", v));
    x.binary_to_onehot().onehot_to_binary().to_int64() == v as i64
}

#[quickcheck]
fn double_resize_law_qc(value: u16, w1: usize, w2: usize) -> bool {
    let w1 = 1 + (w1 % 16);
    let w2 = 1 + (w2 % w1.max(1));
    let x = Bits::const_str(&format!("{:016b}", value));
    x.uresize(w1).uresize(w2) == x.uresize(w2)
}

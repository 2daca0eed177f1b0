//! End-to-end scenarios against the `Bits` backend.

use combinational::{
    Bits,
    Comb,
    Gates,
    Primitives,
};

#[test]
fn s1_add_wraps_then_widens() {
    let a = Bits::const_str("1101");
    let b = Bits::const_str("0011");
    assert_eq!(a.add(&b).to_bstr(), "0000");

    let a5 = a.uresize(5);
    let b5 = b.uresize(5);
    assert_eq!(a5.add(&b5).to_bstr(), "10000");
}

#[test]
fn s2_mux_selects_and_repeats_last() {
    let sel = Bits::const_str("10");
    let xs4 = [
        Bits::const_str("00"),
        Bits::const_str("01"),
        Bits::const_str("10"),
        Bits::const_str("11"),
    ];
    assert_eq!(Bits::mux(&sel, &xs4).to_bstr(), "10");

    let sel3 = Bits::const_str("11");
    let xs3 = [Bits::const_str("00"), Bits::const_str("01"), Bits::const_str("10")];
    assert_eq!(Bits::mux(&sel3, &xs3).to_bstr(), "10");
}

#[test]
fn s3_popcount_is_four_bits_wide() {
    let x = Bits::const_str("10110100");
    let count = x.popcount();
    assert_eq!(count.width(), 4);
    assert_eq!(count.to_int64(), 4);
}

#[test]
fn s4_gray_round_trip() {
    let x = Bits::const_str("1011");
    let g = x.binary_to_gray();
    assert_eq!(g.to_bstr(), "1110");
    assert_eq!(g.gray_to_binary(), x);
}

#[test]
fn s5_priority_select_picks_first_valid() {
    use combinational::Valid;

    let gnd = Bits::const_str("0");
    let vdd = Bits::const_str("1");
    let cases = [
        Valid { valid: gnd, data: Bits::const_str("00000111") },
        Valid { valid: vdd.clone(), data: Bits::const_str("00000011") },
        Valid { valid: vdd, data: Bits::const_str("00001001") },
    ];
    let result = Bits::priority_select(&cases);
    assert_eq!(result.valid.to_int64(), 1);
    assert_eq!(result.data.to_int64(), 3);
}

#[test]
fn s6_floor_log2_valid_and_invalid() {
    let x = Bits::const_str("00101100");
    let r = x.floor_log2();
    assert_eq!(r.valid.to_int64(), 1);
    assert_eq!(r.data.to_int64(), 5);

    let zero = Bits::const_str("00000000");
    assert_eq!(zero.floor_log2().valid.to_int64(), 0);
}

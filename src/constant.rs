//! Parsing of constant literal text into MSB-first bit vectors.
//!
//! Two forms are accepted, matching the grammar in the external interface:
//!
//! ```text
//! const    := bin | verilog
//! bin      := [01]+
//! verilog  := <digits> "'" base <digits>
//! base     := 'b' | 'o' | 'h' | 'd'   (unsigned)
//!           | 'B' | 'O' | 'H' | 'D'   (signed, sign-extended from the
//!                                      literal's own natural width)
//! ```
//!
//! `Gates::const_str` dispatches on the presence of a `'`: a plain run of
//! `0`/`1` characters is binary (width equal to the string length); anything
//! containing `'` is parsed as a Verilog-style width-tagged literal.

use crate::error::Error;
use alloc::{
    string::ToString,
    vec,
    vec::Vec,
};

/// Parse a constant literal into an MSB-first bit vector.
///
/// The returned vector's length is the signal's width: for a plain binary
/// literal this is the string length; for a Verilog literal it is the
/// declared width.
pub fn parse(s: &str) -> Result<Vec<bool>, Error> {
    match s.find('\'') {
        Some(idx) => parse_verilog(s, idx),
        None => parse_binary(s),
    }
}

fn parse_binary(s: &str) -> Result<Vec<bool>, Error> {
    let mut bits = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::BadConstant(s.to_string())),
        }
    }
    Ok(bits)
}

fn parse_verilog(s: &str, apostrophe: usize) -> Result<Vec<bool>, Error> {
    let bad = || Error::BadConstant(s.to_string());

    let width_str = &s[..apostrophe];
    let width: usize = width_str.parse().map_err(|_| bad())?;

    let mut rest = s[apostrophe + 1..].chars();
    let base = rest.next().ok_or_else(bad)?;
    let digits = rest.as_str();
    if digits.is_empty() {
        return Err(bad());
    }

    let (signed, natural) = match base {
        'b' => (false, radix_digits_to_bits(digits, 2, 1).ok_or_else(bad)?),
        'o' => (false, radix_digits_to_bits(digits, 8, 3).ok_or_else(bad)?),
        'h' => (false, radix_digits_to_bits(digits, 16, 4).ok_or_else(bad)?),
        'd' => (false, decimal_digits_to_bits(digits).ok_or_else(bad)?),
        'B' => (true, radix_digits_to_bits(digits, 2, 1).ok_or_else(bad)?),
        'O' => (true, radix_digits_to_bits(digits, 8, 3).ok_or_else(bad)?),
        'H' => (true, radix_digits_to_bits(digits, 16, 4).ok_or_else(bad)?),
        'D' => (true, decimal_digits_to_bits(digits).ok_or_else(bad)?),
        _ => return Err(bad()),
    };

    Ok(resize_natural(natural, width, signed))
}

/// Pack each digit into `bits_per_digit` MSB-first bits, digits read
/// left-to-right as usual (most significant digit first).
fn radix_digits_to_bits(digits: &str, radix: u32, bits_per_digit: usize) -> Option<Vec<bool>> {
    let mut bits = Vec::with_capacity(digits.len() * bits_per_digit);
    for c in digits.chars() {
        let v = c.to_digit(radix)?;
        for i in (0..bits_per_digit).rev() {
            bits.push((v >> i) & 1 == 1);
        }
    }
    Some(bits)
}

/// Big-endian decimal string to its minimal-width unsigned bit pattern, via
/// a base-256 accumulator (`bytes[0]` is least significant).
fn decimal_digits_to_bits(digits: &str) -> Option<Vec<bool>> {
    let mut bytes: Vec<u8> = vec![0];
    for c in digits.chars() {
        let d = c.to_digit(10)?;
        let mut carry = d;
        for b in bytes.iter_mut() {
            let v = (*b as u32) * 10 + carry;
            *b = (v & 0xFF) as u8;
            carry = v >> 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &b in bytes.iter().rev() {
        for i in (0..8).rev() {
            bits.push((b >> i) & 1 == 1);
        }
    }
    while bits.len() > 1 && !bits[0] {
        bits.remove(0);
    }
    Some(bits)
}

/// Resize a literal's natural-width bit pattern to the declared width,
/// zero- or sign-extending on growth and keeping the low bits on shrink.
fn resize_natural(natural: Vec<bool>, width: usize, signed: bool) -> Vec<bool> {
    let n = natural.len();
    if width == n {
        return natural;
    }
    if width > n {
        let fill = if signed { natural[0] } else { false };
        let mut out = vec![fill; width - n];
        out.extend(natural);
        out
    } else {
        natural[n - width..].to_vec()
    }
}

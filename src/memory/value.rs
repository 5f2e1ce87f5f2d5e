//! Arithmetic on memory values
//!
//! Memory cells hold arbitrary-precision integers ([`BigInt`]). The helpers here
//! implement the handful of operations whose rounding behaviour is part of the
//! language: floored division, byte output and IP selection by `#`.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};

/// Quotient and remainder rounded toward negative infinity
///
/// Computed from the truncating pair: when the remainder is nonzero and the
/// operands have opposite signs, the quotient is decremented and the divisor
/// added to the remainder. Returns `None` for a zero divisor.
pub fn floor_div_rem(left: &BigInt, right: &BigInt) -> Option<(BigInt, BigInt)> {
    if right.is_zero() {
        return None;
    }

    let mut div = left / right;
    let mut rem = left % right;
    if !rem.is_zero() && (left.is_negative() ^ right.is_negative()) {
        rem += right;
        div -= 1u32;
    }
    Some((div, rem))
}

/// Non-negative remainder of `value` by a small positive modulus
fn wrap_to(value: &BigInt, modulus: u32) -> BigInt {
    ((value % modulus) + modulus) % modulus
}

/// The byte written by `;`: the value modulo 256, in 0..=255
pub fn to_output_byte(value: &BigInt) -> u8 {
    wrap_to(value, 256).to_u8().unwrap_or_default()
}

/// The IP index selected by `#`: the value modulo 6, in 0..=5
pub fn to_ip_index(value: &BigInt) -> usize {
    wrap_to(value, 6).to_usize().unwrap_or_default()
}

/// Append a decimal digit, growing away from zero for negative values
pub fn push_digit(value: &BigInt, digit: u32) -> BigInt {
    let scaled = value * 10u32;
    if value.is_negative() {
        scaled - digit
    } else {
        scaled + digit
    }
}

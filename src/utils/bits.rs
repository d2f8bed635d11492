// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains conversions between arbitrary-precision integers
//! and their binary or byte representations.

use crate::error::IBEResult;
use qfall_math::integer::Z;

/// Computes the binary representation of a non-negative integer.
///
/// Parameters:
/// - `value`: specifies the integer to decompose
///
/// Returns the bits of `value`, most significant bit first.
/// `0` and negative values are represented by an empty vector.
///
/// # Examples
/// ```
/// use bf_ibe::utils::bits::to_bits_msb;
/// use qfall_math::integer::Z;
///
/// assert_eq!(vec![true, true, false], to_bits_msb(&Z::from(6)));
/// ```
pub fn to_bits_msb(value: &Z) -> Vec<bool> {
    let two = Z::from(2);
    let mut bits = Vec::new();
    let mut rest = value.clone();
    while rest > Z::ZERO {
        let half = rest.div_floor(&two);
        bits.push(rest != &half * &two);
        rest = half;
    }
    bits.reverse();
    bits
}

/// Checks whether a non-negative integer is odd.
pub fn is_odd(value: &Z) -> bool {
    let two = Z::from(2);
    value != &(value.div_floor(&two) * two)
}

/// Encodes a non-negative integer as `len` big-endian bytes.
/// Bits above the `8 * len` least significant ones are discarded.
///
/// Parameters:
/// - `value`: specifies the integer to encode
/// - `len`: specifies the number of output bytes
///
/// # Examples
/// ```
/// use bf_ibe::utils::bits::to_be_bytes;
/// use qfall_math::integer::Z;
///
/// assert_eq!(vec![0, 1, 2], to_be_bytes(&Z::from(258), 3));
/// ```
pub fn to_be_bytes(value: &Z, len: usize) -> Vec<u8> {
    let bits = to_bits_msb(value);
    let total = 8 * len;
    let mut padded = vec![false; total.saturating_sub(bits.len())];
    padded.extend_from_slice(&bits[bits.len().saturating_sub(total)..]);

    padded
        .chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
        .collect()
}

/// Interprets a byte slice as a big-endian non-negative integer.
///
/// Returns the decoded [`Z`] or a [`MathError`](qfall_math::error::MathError)
/// wrapped in an [`IBEError`](crate::error::IBEError) if the conversion fails.
///
/// # Examples
/// ```
/// use bf_ibe::utils::bits::from_be_bytes;
/// use qfall_math::integer::Z;
///
/// assert_eq!(Z::from(258), from_be_bytes(&[0, 1, 2]).unwrap());
/// ```
pub fn from_be_bytes(bytes: &[u8]) -> IBEResult<Z> {
    if bytes.is_empty() {
        return Ok(Z::ZERO);
    }
    let hex: String = bytes.iter().map(|byte| format!("{byte:02x}")).collect();
    Ok(Z::from_str_b(&hex, 16)?)
}

#[cfg(test)]
mod test_bits {
    use super::{from_be_bytes, is_odd, to_be_bytes, to_bits_msb};
    use qfall_math::integer::Z;

    /// Ensures the bit decomposition is most significant bit first.
    #[test]
    fn decomposition() {
        assert_eq!(vec![true], to_bits_msb(&Z::ONE));
        assert_eq!(vec![true, false, true, true], to_bits_msb(&Z::from(11)));
        assert!(to_bits_msb(&Z::ZERO).is_empty());
    }

    /// Ensures parity is read from the least significant bit.
    #[test]
    fn parity() {
        assert!(is_odd(&Z::from(6143)));
        assert!(!is_odd(&Z::from(6144)));
        assert!(!is_odd(&Z::ZERO));
    }

    /// Ensures byte encoding pads on the left and truncates high bits.
    #[test]
    fn byte_encoding() {
        assert_eq!(vec![0, 0, 0xff], to_be_bytes(&Z::from(255), 3));
        assert_eq!(vec![0x34], to_be_bytes(&Z::from(0x1234), 1));
        assert!(to_be_bytes(&Z::from(7), 0).is_empty());
    }

    /// Ensures decoding reads big-endian and ignores leading zero bytes.
    #[test]
    fn byte_decoding() {
        assert_eq!(Z::from(0x1234), from_be_bytes(&[0, 0, 0x12, 0x34]).unwrap());
        assert_eq!(Z::ZERO, from_be_bytes(&[]).unwrap());
        assert_eq!(Z::ZERO, from_be_bytes(&[0, 0]).unwrap());

        let value = Z::from(u64::MAX);
        assert_eq!(value, from_be_bytes(&to_be_bytes(&value, 8)).unwrap());
    }
}

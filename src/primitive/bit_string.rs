// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains fixed-width bit strings, i.e. elements of `{0,1}^n`
//! for a multiple `n` of 8, as they are used for messages, paddings
//! and hash outputs.

use crate::{
    error::{IBEError, IBEResult},
    utils::bits::{from_be_bytes, to_be_bytes},
};
use qfall_math::{integer::Z, traits::Pow};
use serde::{Deserialize, Serialize};

/// An element of `{0,1}^n` stored as `n / 8` big-endian bytes.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::bit_string::BitString;
///
/// let message = BitString::fit(b"A", 16);
///
/// assert_eq!(&[0, b'A'], message.as_bytes());
/// assert_eq!(b"A".to_vec(), message.to_trimmed_bytes());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitString {
    bytes: Vec<u8>,
}

impl BitString {
    /// Wraps `bytes` into a bit string of length `8 * bytes.len()`.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Returns the all-zero bit string of `len_bits` bits.
    pub fn zero(len_bits: u64) -> Self {
        Self {
            bytes: vec![0; byte_len(len_bits)],
        }
    }

    /// Reduces an arbitrary byte string to exactly `len_bits` bits.
    /// Inputs that are too long are truncated, keeping their first bytes,
    /// inputs that are too short are padded with zeros on the left.
    ///
    /// Parameters:
    /// - `bytes`: specifies the input
    /// - `len_bits`: specifies the output length, a multiple of 8
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::primitive::bit_string::BitString;
    ///
    /// assert_eq!(&[1, 2], BitString::fit(&[1, 2, 3], 16).as_bytes());
    /// assert_eq!(&[0, 0, 7], BitString::fit(&[7], 24).as_bytes());
    /// ```
    pub fn fit(bytes: &[u8], len_bits: u64) -> Self {
        let len = byte_len(len_bits);
        let kept = &bytes[..bytes.len().min(len)];
        let mut fitted = vec![0; len - kept.len()];
        fitted.extend_from_slice(kept);
        Self { bytes: fitted }
    }

    /// Samples a uniformly random bit string of `len_bits` bits.
    ///
    /// # Errors and Failures
    /// - Returns a [`IBEError::Math`] if sampling fails.
    pub fn sample_uniform(len_bits: u64) -> IBEResult<Self> {
        let len = byte_len(len_bits);
        let upper_bound = Z::from(2).pow(8 * len as u64)?;
        let value = Z::sample_uniform(Z::ZERO, &upper_bound)?;
        Ok(Self {
            bytes: to_be_bytes(&value, len),
        })
    }

    /// Computes the bitwise XOR of two bit strings of the same length.
    ///
    /// Returns the XOR or an [`IBEError::Arithmetic`] if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::primitive::bit_string::BitString;
    ///
    /// let a = BitString::new(vec![0b1100]);
    /// let b = BitString::new(vec![0b1010]);
    ///
    /// assert_eq!(BitString::new(vec![0b0110]), a.xor(&b).unwrap());
    /// ```
    pub fn xor(&self, other: &Self) -> IBEResult<Self> {
        if self.bytes.len() != other.bytes.len() {
            return Err(IBEError::Arithmetic(format!(
                "cannot xor bit strings of {} and {} bits",
                self.len_bits(),
                other.len_bits()
            )));
        }
        Ok(Self {
            bytes: self
                .bytes
                .iter()
                .zip(&other.bytes)
                .map(|(a, b)| a ^ b)
                .collect(),
        })
    }

    /// Flips the bit at `index`, counted from the most significant bit.
    ///
    /// # Panics ...
    /// - if `index >= self.len_bits()`.
    pub fn flip(&mut self, index: u64) {
        let byte = (index / 8) as usize;
        self.bytes[byte] ^= 0x80 >> (index % 8);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len_bits(&self) -> u64 {
        8 * self.bytes.len() as u64
    }

    /// Returns the bytes without the zero bytes on the left,
    /// i.e. undoes the padding of [`BitString::fit`].
    pub fn to_trimmed_bytes(&self) -> Vec<u8> {
        let start = self
            .bytes
            .iter()
            .position(|byte| *byte != 0)
            .unwrap_or(self.bytes.len());
        self.bytes[start..].to_vec()
    }

    /// Interprets the bit string as a big-endian integer.
    pub fn to_z(&self) -> IBEResult<Z> {
        from_be_bytes(&self.bytes)
    }
}

fn byte_len(len_bits: u64) -> usize {
    (len_bits / 8) as usize
}

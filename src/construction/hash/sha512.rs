// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains SHA-512 based hashes into byte strings of arbitrary
//! length and into `Z_q`.

use crate::{error::IBEResult, utils::bits::from_be_bytes};
use qfall_math::{
    error::MathError,
    integer::Z,
    integer_mod_q::{Modulus, Zq},
};
use sha2::{Digest, Sha512};

/// The output length of SHA-512 in bytes.
pub const SHA512_BYTES: usize = 64;

/// Computes the SHA-512 hash value of a given byte string.
///
/// Parameters:
/// - `input`: specifies the value that is hashed
///
/// Returns the 64 bytes of the hash value.
///
/// # Examples
/// ```
/// use bf_ibe::construction::hash::sha512::sha512;
///
/// let hash = sha512(b"abc");
///
/// assert_eq!([0xdd, 0xaf, 0x35, 0xa1], hash[..4]);
/// ```
pub fn sha512(input: &[u8]) -> Vec<u8> {
    let mut hasher = Sha512::new();
    hasher.update(input);
    hasher.finalize().to_vec()
}

/// Expands a byte string to exactly `num_bytes` pseudorandom bytes.
///
/// With `t = ceil(num_bytes / 64)` blocks, block `i` is the SHA-512 hash of
/// the `i`-th interleaved subsequence of `input`, i.e. of the bytes at the
/// positions `i, i + t, i + 2t, ...`. The blocks are concatenated and
/// truncated to `num_bytes`.
///
/// Parameters:
/// - `input`: specifies the value that is hashed
/// - `num_bytes`: specifies the length of the output
///
/// Returns a vector of exactly `num_bytes` bytes.
///
/// # Examples
/// ```
/// use bf_ibe::construction::hash::sha512::{expand_sha512, sha512};
///
/// assert_eq!(sha512(b"abc"), expand_sha512(b"abc", 64));
/// assert_eq!(128, expand_sha512(b"abc", 128).len());
/// ```
pub fn expand_sha512(input: &[u8], num_bytes: usize) -> Vec<u8> {
    let blocks = num_bytes.div_ceil(SHA512_BYTES);
    let mut output = Vec::with_capacity(blocks * SHA512_BYTES);
    for i in 0..blocks {
        let subsequence: Vec<u8> = input.iter().skip(i).step_by(blocks).copied().collect();
        output.extend(sha512(&subsequence));
    }
    output.truncate(num_bytes);
    output
}

/// Hashes a given byte string into `Z_q`.
///
/// Enough counter-prefixed SHA-512 blocks are concatenated to exceed the bit
/// length of `q` by at least 128 bits before reducing, such that the
/// distribution of the result is statistically close to uniform.
///
/// Parameters:
/// - `input`: specifies the value that is hashed
/// - `modulus`: specifies the modulus of the returned `Zq` value
///
/// Returns a [`Zq`] as a hash value for the given input.
///
/// # Examples
/// ```
/// use bf_ibe::construction::hash::sha512::hash_to_zq_sha512;
/// use qfall_math::integer::Z;
///
/// let hash = hash_to_zq_sha512(b"Hello World!", &Z::from(101)).unwrap();
///
/// assert!(hash.get_value() < Z::from(101));
/// ```
///
/// # Errors and Failures
/// - Returns a [`IBEError::Math`](crate::error::IBEError::Math) if `modulus <= 1`.
pub fn hash_to_zq_sha512(input: &[u8], modulus: &Z) -> IBEResult<Zq> {
    let bitsize = modulus.bits();
    let prefix = format!("{modulus} ");

    let mut bytes = Vec::new();
    // hashing into e.g. Zq with 512 bit length of q from 512 bit will result in
    // lower values to be up to two times as likely as higher values
    for i in 0..=(bitsize + 128) / 512 {
        let mut block = format!("{i} {prefix}").into_bytes();
        block.extend_from_slice(input);
        bytes.extend(sha512(&block));
    }

    if modulus <= &Z::ONE {
        return Err(MathError::InvalidIntegerInput(format!(
            "the modulus {modulus} has to be larger than 1"
        ))
        .into());
    }
    Ok(Zq::from((from_be_bytes(&bytes)?, Modulus::from(modulus))))
}

// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the four random oracles of the Boneh-Franklin scheme
//! with the Fujisaki-Okamoto transform, all instantiated with SHA-512.
//!
//! - `G: {0,1}^* -> F_p` hashes identities, see [`hash_identity`]
//! - `H: F_{p^2} -> {0,1}^n` masks the padding, see [`hash_pairing_value`]
//! - `G1: {0,1}^n -> {0,1}^n` masks the message, see [`hash_padding`]
//! - `H1: {0,1}^n x {0,1}^n -> Z_q` derandomizes encryption, see [`hash_to_scalar`]

use super::{
    sha512::{expand_sha512, hash_to_zq_sha512, sha512},
    HashInto,
};
use crate::{
    error::IBEResult,
    primitive::{
        bit_string::BitString,
        field::{Fp, Fp2, PrimeField},
    },
    utils::bits::from_be_bytes,
};
use qfall_math::{integer::Z, integer_mod_q::Zq};

impl HashInto<Fp> for PrimeField {
    fn hash(&self, m: &[u8]) -> IBEResult<Fp> {
        let value = hash_to_zq_sha512(m, &self.characteristic())?;
        Ok(self.element(value.get_value()))
    }
}

/// The oracle `G`, which hashes an identity into the base field.
///
/// # Examples
/// ```
/// use bf_ibe::{construction::hash::oracles::hash_identity, primitive::field::PrimeField};
///
/// let field = PrimeField::new(101).unwrap();
///
/// let a = hash_identity(b"bob@mail.com", &field).unwrap();
/// let b = hash_identity(b"bob@mail.com", &field).unwrap();
///
/// assert_eq!(a, b);
/// ```
pub fn hash_identity(identity: &[u8], field: &PrimeField) -> IBEResult<Fp> {
    field.hash(identity)
}

/// The oracle `H`, which hashes a pairing value into `{0,1}^len_bits`
/// by expanding its canonical string representation.
pub fn hash_pairing_value(value: &Fp2, len_bits: u64) -> BitString {
    let num_bytes = (len_bits / 8) as usize;
    BitString::new(expand_sha512(value.to_string().as_bytes(), num_bytes))
}

/// The oracle `G1`, which hashes the padding `o` into a bit string of the same length.
pub fn hash_padding(padding: &BitString) -> BitString {
    let bytes = padding.as_bytes();
    BitString::new(expand_sha512(bytes, bytes.len()))
}

/// The oracle `H1`, which computes `SHA512(o) * SHA512(m) mod q`.
///
/// Parameters:
/// - `padding`: specifies the padding `o`
/// - `message`: specifies the message `m`
/// - `q`: specifies the order of the subgroup
///
/// Returns the scalar `r` in `[0, q)`.
///
/// # Examples
/// ```
/// use bf_ibe::{construction::hash::oracles::hash_to_scalar, primitive::bit_string::BitString};
/// use qfall_math::integer::Z;
///
/// let o = BitString::fit(b"o", 128);
/// let m = BitString::fit(b"m", 128);
///
/// let r = hash_to_scalar(&o, &m, &Z::from(17)).unwrap();
///
/// assert!(r < Z::from(17));
/// ```
pub fn hash_to_scalar(padding: &BitString, message: &BitString, q: &Z) -> IBEResult<Z> {
    let o = from_be_bytes(&sha512(padding.as_bytes()))?;
    let m = from_be_bytes(&sha512(message.as_bytes()))?;
    Ok(Zq::from((o * m, q)).get_value())
}

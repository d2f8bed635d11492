// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the versioned domain parameters of the
//! Boneh-Franklin scheme, i.e. the message length, the prime modulus
//! and the curve coefficients, and their validation.

use crate::error::{IBEError, IBEResult};
use qfall_math::{integer::Z, traits::Pow};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, str::FromStr};
use tracing::debug;

/// The only format version of [`DomainParameters`] understood by this crate.
pub const VERSION: u32 = 1;

/// The cofactor `#E(F_p) / q` of the curve `y^2 = x^3 + 1` for `p = 6q - 1`.
pub const COFACTOR: i64 = 6;

/// Serializes integers as decimal strings, such that arbitrarily large
/// values survive any JSON parser unchanged.
mod decimal {
    use qfall_math::integer::Z;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &Z, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Z, D::Error> {
        let value = String::deserialize(deserializer)?;
        Z::from_str(value.trim()).map_err(D::Error::custom)
    }
}

/// This struct stores the domain parameters a Boneh-Franklin instance is built on.
///
/// Attributes:
/// - `version`: specifies the format version, see [`VERSION`]
/// - `message_bits`: specifies the length `n` of messages and hash outputs in bits
/// - `modulus`: specifies the prime `p = 6q - 1` of the base field
/// - `curve_a`: specifies the coefficient `a` of `y^2 = x^3 + ax + b`
/// - `curve_b`: specifies the coefficient `b` of `y^2 = x^3 + ax + b`
///
/// # Examples
/// ```
/// use bf_ibe::utils::domain_parameters::DomainParameters;
///
/// let json = DomainParameters::toy().to_json().unwrap();
/// let parameters = DomainParameters::from_json(&json).unwrap();
///
/// assert_eq!(DomainParameters::toy(), parameters);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainParameters {
    version: u32,
    message_bits: u64,
    #[serde(with = "decimal")]
    modulus: Z,
    #[serde(with = "decimal")]
    curve_a: Z,
    #[serde(with = "decimal")]
    curve_b: Z,
}

impl DomainParameters {
    /// Instantiates [`DomainParameters`] for the curve `y^2 = x^3 + 1`
    /// with the current [`VERSION`].
    ///
    /// Parameters:
    /// - `message_bits`: specifies the length `n` of messages in bits
    /// - `modulus`: specifies the prime modulus `p`
    ///
    /// Returns the validated parameters or an [`IBEError::InvalidParameters`]
    /// if they do not describe a valid instance, see [`DomainParameters::check_validity`].
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::utils::domain_parameters::DomainParameters;
    ///
    /// // 6 * 17 - 1
    /// let parameters = DomainParameters::new(8, 101).unwrap();
    /// ```
    pub fn new(message_bits: u64, modulus: impl Into<Z>) -> IBEResult<Self> {
        let parameters = Self {
            version: VERSION,
            message_bits,
            modulus: modulus.into(),
            curve_a: Z::ZERO,
            curve_b: Z::ONE,
        };
        parameters.check_validity()?;
        Ok(parameters)
    }

    /// Generates fresh domain parameters by sampling primes `q` until
    /// `p = 6q - 1` is a prime with exactly `modulus_bits` bits.
    ///
    /// Parameters:
    /// - `modulus_bits`: specifies the bit length of `p`, at least 8
    /// - `message_bits`: specifies the length `n` of messages in bits
    ///
    /// Returns valid parameters or an [`IBEError::InvalidParameters`]
    /// if `modulus_bits < 8` or `message_bits` is invalid.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::utils::domain_parameters::DomainParameters;
    ///
    /// let parameters = DomainParameters::generate(64, 128).unwrap();
    ///
    /// assert_eq!(64, parameters.modulus().bits());
    /// ```
    pub fn generate(modulus_bits: u64, message_bits: u64) -> IBEResult<Self> {
        if modulus_bits < 8 {
            return Err(IBEError::InvalidParameters(String::from(
                "the modulus must have at least 8 bits",
            )));
        }

        let cofactor = Z::from(COFACTOR);
        let lower_p = Z::from(2).pow(modulus_bits - 1)?;
        let upper_p = Z::from(2).pow(modulus_bits)?;
        // 6q - 1 in [2^(b-1), 2^b)  <=>  q in [ceil((2^(b-1) + 1) / 6), ceil((2^b + 1) / 6))
        let lower_q = (lower_p + Z::ONE).div_ceil(&cofactor);
        let upper_q = (upper_p + Z::ONE).div_ceil(&cofactor);

        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let q = Z::sample_prime_uniform(&lower_q, &upper_q)?;
            let p = &q * &cofactor - Z::ONE;
            if p.is_prime() {
                debug!(modulus_bits, attempts, "generated domain parameters");
                return Self::new(message_bits, p);
            }
        }
    }

    /// Checks whether these parameters describe a correct instance:
    /// - the format version is [`VERSION`],
    /// - `n > 0` and `n` is a multiple of 8,
    /// - `p` is prime and `p ≡ 5 mod 6`,
    /// - `q = (p + 1) / 6` is a prime larger than 3,
    /// - the curve is `y^2 = x^3 + 1`, which has order `p + 1` and the
    ///   distortion map `(x, y) -> (ωx, y)`.
    ///
    /// Returns an empty result or an [`IBEError::InvalidParameters`]
    /// describing the first violated requirement.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::utils::domain_parameters::DomainParameters;
    ///
    /// assert!(DomainParameters::toy().check_validity().is_ok());
    /// ```
    pub fn check_validity(&self) -> IBEResult<()> {
        if self.version != VERSION {
            return Err(IBEError::InvalidParameters(format!(
                "unsupported version {}, expected {VERSION}",
                self.version
            )));
        }
        if self.message_bits == 0 || self.message_bits % 8 != 0 {
            return Err(IBEError::InvalidParameters(String::from(
                "the message length must be a positive multiple of 8",
            )));
        }
        if !self.modulus.is_prime() {
            return Err(IBEError::InvalidParameters(String::from(
                "the modulus p must be prime",
            )));
        }
        let cofactor = Z::from(COFACTOR);
        let q = self.subgroup_order();
        if &q * &cofactor - Z::ONE != self.modulus {
            return Err(IBEError::InvalidParameters(String::from(
                "the modulus p must satisfy p ≡ 5 mod 6",
            )));
        }
        if q <= Z::from(3) || !q.is_prime() {
            return Err(IBEError::InvalidParameters(String::from(
                "q = (p + 1) / 6 must be a prime larger than 3",
            )));
        }
        if self.curve_a != Z::ZERO || self.curve_b != Z::ONE {
            return Err(IBEError::InvalidParameters(String::from(
                "only the curve y^2 = x^3 + 1 is supported",
            )));
        }
        Ok(())
    }

    /// Parses and validates parameters from their JSON representation.
    ///
    /// # Errors and Failures
    /// - Returns a [`IBEError::Config`] if `json` is malformed.
    /// - Returns a [`IBEError::InvalidParameters`] if the parsed parameters are invalid.
    pub fn from_json(json: &str) -> IBEResult<Self> {
        let parameters: Self = serde_json::from_str(json)?;
        parameters.check_validity()?;
        Ok(parameters)
    }

    /// Reads and validates parameters from a JSON file.
    ///
    /// # Errors and Failures
    /// - Returns a [`IBEError::Io`] if the file can not be read.
    /// - Returns the errors of [`DomainParameters::from_json`] otherwise.
    pub fn load(path: impl AsRef<Path>) -> IBEResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading domain parameters");
        Self::from_json(&json)
    }

    /// Returns the parameters as pretty-printed JSON.
    pub fn to_json(&self) -> IBEResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn message_bits(&self) -> u64 {
        self.message_bits
    }

    pub fn modulus(&self) -> &Z {
        &self.modulus
    }

    /// Returns the prime order `q = (p + 1) / 6` of the subgroup used by the scheme.
    pub fn subgroup_order(&self) -> Z {
        (&self.modulus + Z::ONE).div_floor(&Z::from(COFACTOR))
    }

    pub fn curve_a(&self) -> &Z {
        &self.curve_a
    }

    pub fn curve_b(&self) -> &Z {
        &self.curve_b
    }

    /// Returns 1024-bit domain parameters with 1024-bit messages.
    ///
    /// The modulus was generated via `DomainParameters::generate(1024, 1024)`.
    pub fn secure1024() -> Self {
        Self::from_decimal(
            1024,
            "131681241508707973391798176922156728780089396790356794464561547194067090418610662399771593873725640576581264571183277056662172717670815941154716848564280226180714938629365718984854012284129318063664101776294329040297585455807663762542275101164680498677421930298895771394871659793334819146225548104264633483873",
        )
    }

    /// Returns domain parameters with a 98-bit modulus and 128-bit messages.
    /// This parameter choice is not secure as the modulus is too small,
    /// but it provides an efficient working example.
    pub fn toy() -> Self {
        Self::from_decimal(128, "237684487542793012780631866613")
    }

    /// Builds parameters from a modulus literal known to be valid.
    fn from_decimal(message_bits: u64, modulus: &str) -> Self {
        Self {
            version: VERSION,
            message_bits,
            modulus: Z::from_str(modulus).unwrap_or(Z::ZERO),
            curve_a: Z::ZERO,
            curve_b: Z::ONE,
        }
    }
}

impl Default for DomainParameters {
    /// Initializes [`DomainParameters`] with [`DomainParameters::secure1024`].
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::utils::domain_parameters::DomainParameters;
    ///
    /// let parameters = DomainParameters::default();
    ///
    /// assert_eq!(1024, parameters.message_bits());
    /// ```
    fn default() -> Self {
        Self::secure1024()
    }
}

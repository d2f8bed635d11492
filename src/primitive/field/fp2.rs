// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the quadratic extension `F_{p^2} = F_p[ω] / (ω^2 + ω + 1)`.
//!
//! The polynomial `ω^2 + ω + 1` is irreducible over `F_p` if and only if
//! `p ≡ 2 mod 3`, which every characteristic admitted by
//! [`DomainParameters`](crate::utils::domain_parameters::DomainParameters) satisfies.
//! Then `ω` is a primitive cube root of unity, which is what the distortion map
//! of the supersingular curve `y^2 = x^3 + 1` needs.

use super::{FieldElement, Fp};
use crate::error::{IBEError, IBEResult};
use qfall_math::integer::Z;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An element `c0 + c1 * ω` of `F_{p^2}`.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::field::{FieldElement, Fp2, PrimeField};
///
/// let field = PrimeField::new(11).unwrap();
/// let omega = Fp2::new(field.zero(), field.one());
///
/// // ω is a primitive cube root of unity
/// assert!(!omega.is_one());
/// assert!(omega.square().mul(&omega).is_one());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fp2 {
    c0: Fp,
    c1: Fp,
}

impl Fp2 {
    /// Creates `c0 + c1 * ω`. Both coefficients have to be elements of the same prime field.
    pub fn new(c0: Fp, c1: Fp) -> Self {
        Self { c0, c1 }
    }

    /// Embeds an element of the base field.
    pub fn from_base(value: &Fp) -> Self {
        Self {
            c1: value.zero(),
            c0: value.clone(),
        }
    }

    /// Returns `ω` in the extension of the prime field of `value`.
    pub fn omega(value: &Fp) -> Self {
        Self {
            c0: value.zero(),
            c1: value.one(),
        }
    }

    pub fn c0(&self) -> &Fp {
        &self.c0
    }

    pub fn c1(&self) -> &Fp {
        &self.c1
    }

    /// Returns the base field element if `self` lies in `F_p`.
    pub fn to_base(&self) -> Option<Fp> {
        if self.c1.is_zero() {
            Some(self.c0.clone())
        } else {
            None
        }
    }

    /// Multiplies `self` with an element of the base field.
    pub fn scale(&self, factor: &Fp) -> Self {
        Self {
            c0: self.c0.mul(factor),
            c1: self.c1.mul(factor),
        }
    }

    /// Returns the norm `N(c0 + c1 ω) = c0^2 - c0 c1 + c1^2` into `F_p`.
    pub fn norm(&self) -> Fp {
        self.c0
            .square()
            .sub(&self.c0.mul(&self.c1))
            .add(&self.c1.square())
    }
}

impl FieldElement for Fp2 {
    fn zero(&self) -> Self {
        Self::from_base(&self.c0.zero())
    }

    fn one(&self) -> Self {
        Self::from_base(&self.c0.one())
    }

    fn from_z(&self, value: &Z) -> Self {
        Self::from_base(&self.c0.from_z(value))
    }

    fn add(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.add(&other.c0),
            c1: self.c1.add(&other.c1),
        }
    }

    fn sub(&self, other: &Self) -> Self {
        Self {
            c0: self.c0.sub(&other.c0),
            c1: self.c1.sub(&other.c1),
        }
    }

    /// (a + bω)(c + dω) = ac + (ad + bc)ω + bdω^2 with ω^2 = -1 - ω
    fn mul(&self, other: &Self) -> Self {
        let ac = self.c0.mul(&other.c0);
        let bd = self.c1.mul(&other.c1);
        let ad_bc = self.c0.mul(&other.c1).add(&self.c1.mul(&other.c0));

        Self {
            c0: ac.sub(&bd),
            c1: ad_bc.sub(&bd),
        }
    }

    /// Uses `(a + bω)^{-1} = ((a - b) - bω) / N(a + bω)`.
    fn inverse(&self) -> IBEResult<Self> {
        let norm = self.norm();
        if norm.is_zero() {
            return Err(IBEError::Arithmetic(String::from(
                "zero has no multiplicative inverse",
            )));
        }
        let norm_inverse = norm.inverse()?;
        let conjugate = Self {
            c0: self.c0.sub(&self.c1),
            c1: self.c1.negate(),
        };

        Ok(conjugate.scale(&norm_inverse))
    }

    fn pow(&self, exponent: &Z) -> IBEResult<Self> {
        if *exponent < Z::ZERO {
            return Err(IBEError::Arithmetic(format!(
                "negative exponent {exponent} is not supported"
            )));
        }

        let mut result = self.one();
        for bit in crate::utils::bits::to_bits_msb(exponent) {
            result = result.square();
            if bit {
                result = result.mul(self);
            }
        }
        Ok(result)
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn characteristic(&self) -> Z {
        self.c0.characteristic()
    }

    fn multiplicative_order(&self) -> Z {
        let p = self.characteristic();
        &p * &p - Z::ONE
    }

    fn sample_uniform(&self) -> IBEResult<Self> {
        Ok(Self {
            c0: self.c0.sample_uniform()?,
            c1: self.c1.sample_uniform()?,
        })
    }
}

impl fmt::Display for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}*w", self.c0, self.c1)
    }
}

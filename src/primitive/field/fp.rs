// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the prime field `F_p` and its elements.

use super::FieldElement;
use crate::{
    error::{IBEError, IBEResult},
    utils::bits::is_odd,
};
use qfall_math::{
    integer::Z,
    integer_mod_q::{Modulus, Zq},
    traits::Pow,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The prime field `F_p` for an odd prime `p`.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::field::{FieldElement, PrimeField};
///
/// let field = PrimeField::new(11).unwrap();
/// let x = field.element(7);
///
/// assert_eq!(field.one(), x.mul(&x.inverse().unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrimeField {
    modulus: Modulus,
}

impl PrimeField {
    /// Instantiates the prime field with characteristic `p`.
    ///
    /// Returns the [`PrimeField`] or an [`IBEError::InvalidParameters`]
    /// if `p` is not an odd prime.
    pub fn new(p: impl Into<Z>) -> IBEResult<Self> {
        let p: Z = p.into();
        if p <= Z::from(2) || !p.is_prime() {
            return Err(IBEError::InvalidParameters(format!(
                "the field characteristic {p} is not an odd prime"
            )));
        }

        Ok(Self {
            modulus: Modulus::from(&p),
        })
    }

    /// Returns `value mod p` as an element of this field.
    pub fn element(&self, value: impl Into<Z>) -> Fp {
        Fp {
            value: Zq::from((value, &self.modulus)),
        }
    }

    pub fn zero(&self) -> Fp {
        self.element(Z::ZERO)
    }

    pub fn one(&self) -> Fp {
        self.element(Z::ONE)
    }

    pub fn characteristic(&self) -> Z {
        Z::from(&self.modulus)
    }

    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Samples a uniformly random element of this field.
    pub fn sample_uniform(&self) -> IBEResult<Fp> {
        self.zero().sample_uniform()
    }
}

/// An element of a [`PrimeField`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fp {
    value: Zq,
}

impl Fp {
    /// Returns the representative of `self` in `[0, p)`.
    pub fn value(&self) -> Z {
        self.value.get_value()
    }

    /// Returns the field `self` lives in.
    pub fn field(&self) -> PrimeField {
        PrimeField {
            modulus: self.value.get_mod(),
        }
    }

    /// Computes a square root of `self` with the Tonelli-Shanks algorithm.
    /// The quadratic non-residue is searched deterministically from `2` upwards,
    /// hence the same root is returned on every call.
    ///
    /// Returns `Some(y)` with `y^2 = self` or `None` if `self` is a quadratic
    /// non-residue.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::primitive::field::{FieldElement, PrimeField};
    ///
    /// let field = PrimeField::new(13).unwrap();
    /// let root = field.element(10).sqrt().unwrap().unwrap();
    ///
    /// assert_eq!(field.element(10), root.square());
    /// assert!(field.element(5).sqrt().unwrap().is_none());
    /// ```
    pub fn sqrt(&self) -> IBEResult<Option<Fp>> {
        if self.is_zero() {
            return Ok(Some(self.clone()));
        }

        let two = Z::from(2);
        let p_minus_one = self.multiplicative_order();
        let euler_exponent = p_minus_one.div_floor(&two);
        if !self.pow(&euler_exponent)?.is_one() {
            return Ok(None);
        }

        // p - 1 = 2^e * s with s odd
        let mut s = p_minus_one;
        let mut e = 0u64;
        while !is_odd(&s) {
            s = s.div_floor(&two);
            e += 1;
        }

        let mut non_residue = self.from_z(&two);
        while non_residue.pow(&euler_exponent)?.is_one() {
            non_residue = non_residue.add(&self.one());
        }

        let mut root = self.pow(&(&s + Z::ONE).div_floor(&two))?;
        let mut b = self.pow(&s)?;
        let mut g = non_residue.pow(&s)?;
        let mut r = e;
        loop {
            let mut t = b.clone();
            let mut m = 0u64;
            while !t.is_one() {
                t = t.square();
                m += 1;
            }
            if m == 0 {
                return Ok(Some(root));
            }

            let mut g_shift = g.clone();
            for _ in 0..(r - m - 1) {
                g_shift = g_shift.square();
            }
            g = g_shift.square();
            root = root.mul(&g_shift);
            b = b.mul(&g);
            r = m;
        }
    }
}

impl FieldElement for Fp {
    fn zero(&self) -> Self {
        self.from_z(&Z::ZERO)
    }

    fn one(&self) -> Self {
        self.from_z(&Z::ONE)
    }

    fn from_z(&self, value: &Z) -> Self {
        Fp {
            value: Zq::from((value, self.value.get_mod())),
        }
    }

    fn add(&self, other: &Self) -> Self {
        Fp {
            value: &self.value + &other.value,
        }
    }

    fn sub(&self, other: &Self) -> Self {
        Fp {
            value: &self.value - &other.value,
        }
    }

    fn mul(&self, other: &Self) -> Self {
        Fp {
            value: &self.value * &other.value,
        }
    }

    fn inverse(&self) -> IBEResult<Self> {
        if self.is_zero() {
            return Err(IBEError::Arithmetic(String::from(
                "zero has no multiplicative inverse",
            )));
        }
        Ok(Fp {
            value: self.value.pow(Z::MINUS_ONE)?,
        })
    }

    fn pow(&self, exponent: &Z) -> IBEResult<Self> {
        Ok(Fp {
            value: self.value.pow(exponent)?,
        })
    }

    fn is_zero(&self) -> bool {
        self.value.get_value() == Z::ZERO
    }

    fn characteristic(&self) -> Z {
        Z::from(&self.value.get_mod())
    }

    fn multiplicative_order(&self) -> Z {
        self.characteristic() - Z::ONE
    }

    fn sample_uniform(&self) -> IBEResult<Self> {
        let value = Z::sample_uniform(Z::ZERO, self.characteristic())?;
        Ok(self.from_z(&value))
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value.get_value())
    }
}

#[cfg(test)]
mod test_prime_field {
    use super::PrimeField;
    use crate::primitive::field::FieldElement;
    use qfall_math::integer::Z;

    /// Ensures only odd primes are accepted as characteristic.
    #[test]
    fn characteristic_validation() {
        assert!(PrimeField::new(11).is_ok());
        assert!(PrimeField::new(2).is_err());
        assert!(PrimeField::new(15).is_err());
        assert!(PrimeField::new(-7).is_err());
    }

    /// Ensures elements are reduced modulo `p`.
    #[test]
    fn reduction() {
        let field = PrimeField::new(11).unwrap();

        assert_eq!(field.element(3), field.element(14));
        assert_eq!(field.element(10), field.element(-1));
        assert_eq!(Z::from(3), field.element(25).value());
    }

    /// Checks the field operations on a small field.
    #[test]
    fn arithmetic() {
        let field = PrimeField::new(11).unwrap();
        let a = field.element(7);
        let b = field.element(9);

        assert_eq!(field.element(5), a.add(&b));
        assert_eq!(field.element(9), a.sub(&b).negate().add(&field.element(7)));
        assert_eq!(field.element(8), a.mul(&b));
        assert_eq!(field.element(5), a.square());
        assert_eq!(field.element(8), a.inverse().unwrap());
        assert_eq!(field.one(), a.pow(&Z::from(10)).unwrap());
        assert_eq!(Z::from(10), a.multiplicative_order());
    }

    /// Ensures zero is not invertible.
    #[test]
    fn zero_not_invertible() {
        let field = PrimeField::new(11).unwrap();

        assert!(field.zero().inverse().is_err());
    }

    /// Ensures sampled elements belong to the field.
    #[test]
    fn sampling() {
        let field = PrimeField::new(101).unwrap();

        for _ in 0..20 {
            let x = field.sample_uniform().unwrap();
            assert_eq!(field, x.field());
            assert!(x.value() < Z::from(101));
        }
    }
}

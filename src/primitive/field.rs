// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the finite fields the curve engine works over:
//! the prime field `F_p` and its quadratic extension `F_{p^2}`.
//!
//! Both element types implement [`FieldElement`], such that algorithms like
//! the cube root extraction in [`crate::utils::cube_root`] can be written once
//! for every field.

mod fp;
mod fp2;

pub use fp::{Fp, PrimeField};
pub use fp2::Fp2;

use crate::error::IBEResult;
use qfall_math::integer::Z;
use std::fmt::{Debug, Display};

/// Arithmetic every element of a finite field offers.
///
/// Elements know the field they live in, hence constants like
/// [`FieldElement::zero`] are derived from an existing element.
pub trait FieldElement: Clone + PartialEq + Debug + Display {
    /// Returns the additive identity of the field of `self`.
    fn zero(&self) -> Self;

    /// Returns the multiplicative identity of the field of `self`.
    fn one(&self) -> Self;

    /// Embeds the integer `value` into the field of `self`.
    fn from_z(&self, value: &Z) -> Self;

    fn add(&self, other: &Self) -> Self;
    fn sub(&self, other: &Self) -> Self;
    fn mul(&self, other: &Self) -> Self;

    fn square(&self) -> Self {
        self.mul(self)
    }

    fn negate(&self) -> Self {
        self.zero().sub(self)
    }

    /// Computes the multiplicative inverse.
    ///
    /// Returns an [`IBEError::Arithmetic`](crate::error::IBEError::Arithmetic)
    /// if `self` is zero.
    fn inverse(&self) -> IBEResult<Self>;

    /// Raises `self` to the non-negative power `exponent`.
    fn pow(&self, exponent: &Z) -> IBEResult<Self>;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool {
        *self == self.one()
    }

    /// Returns the characteristic `p` of the field of `self`.
    fn characteristic(&self) -> Z;

    /// Returns the order `p^m - 1` of the multiplicative group of the field of `self`.
    fn multiplicative_order(&self) -> Z;

    /// Samples a uniformly random element of the field of `self`.
    fn sample_uniform(&self) -> IBEResult<Self>;
}

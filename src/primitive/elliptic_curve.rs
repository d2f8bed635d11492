// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains short Weierstrass curves `y^2 = x^3 + ax + b` over a
//! [`FieldElement`] type together with their group law and pairings.
//!
//! Points are kept in affine coordinates. Every operation that has to divide
//! returns an [`IBEError::Arithmetic`] instead of panicking if the inputs
//! are malformed, e.g. points that do not lie on the curve.

mod pairing;

pub use pairing::{distort, modified_weil_pairing, weil_pairing};

use crate::{
    error::{IBEError, IBEResult},
    primitive::field::{FieldElement, Fp, Fp2},
    utils::bits::to_bits_msb,
};
use qfall_math::integer::Z;
use serde::{Deserialize, Serialize};

/// A point of an [`EllipticCurve`], either the point at infinity `O`
/// or an affine point `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Point<F> {
    Infinity,
    Affine { x: F, y: F },
}

impl<F: FieldElement> Point<F> {
    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn x(&self) -> Option<&F> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    pub fn y(&self) -> Option<&F> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl Point<Fp> {
    /// Embeds a point with coordinates in `F_p` into the curve over `F_{p^2}`.
    pub fn to_extension(&self) -> Point<Fp2> {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: Fp2::from_base(x),
                y: Fp2::from_base(y),
            },
        }
    }
}

/// The curve `y^2 = x^3 + ax + b` over the field of its coefficients.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::{elliptic_curve::EllipticCurve, field::PrimeField};
/// use qfall_math::integer::Z;
///
/// let field = PrimeField::new(29).unwrap();
/// let curve = EllipticCurve::new(field.zero(), field.one()).unwrap();
///
/// // y^2 = x^3 + 1 over F_29 has 30 points
/// let y = curve.corresponding_y(&field.element(2)).unwrap().unwrap();
/// let point = curve.point(field.element(2), y).unwrap();
///
/// assert!(curve.mul(&Z::from(30), &point).unwrap().is_infinity());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipticCurve<F> {
    a: F,
    b: F,
}

impl<F: FieldElement> EllipticCurve<F> {
    /// Instantiates the curve `y^2 = x^3 + ax + b`.
    ///
    /// Returns the curve or an [`IBEError::InvalidParameters`] if
    /// `4a^3 + 27b^2 = 0`, i.e. the curve is singular.
    pub fn new(a: F, b: F) -> IBEResult<Self> {
        let discriminant = a
            .from_z(&Z::from(4))
            .mul(&a.square().mul(&a))
            .add(&a.from_z(&Z::from(27)).mul(&b.square()));
        if discriminant.is_zero() {
            return Err(IBEError::InvalidParameters(String::from(
                "the curve is singular",
            )));
        }

        Ok(Self { a, b })
    }

    pub fn a(&self) -> &F {
        &self.a
    }

    pub fn b(&self) -> &F {
        &self.b
    }

    /// Constructs the affine point `(x, y)`.
    ///
    /// Returns the point or an [`IBEError::Arithmetic`] if it does not lie on the curve.
    pub fn point(&self, x: F, y: F) -> IBEResult<Point<F>> {
        let point = Point::Affine { x, y };
        if !self.contains(&point) {
            return Err(IBEError::Arithmetic(String::from(
                "the coordinates do not describe a point on the curve",
            )));
        }
        Ok(point)
    }

    /// Checks whether `point` lies on this curve, including that its
    /// coordinates belong to the field of the curve.
    pub fn contains(&self, point: &Point<F>) -> bool {
        match point {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let characteristic = self.a.characteristic();
                if x.characteristic() != characteristic || y.characteristic() != characteristic {
                    return false;
                }
                y.square() == self.rhs(x)
            }
        }
    }

    /// Evaluates `x^3 + ax + b`.
    fn rhs(&self, x: &F) -> F {
        x.square().mul(x).add(&self.a.mul(x)).add(&self.b)
    }

    pub fn negate(&self, point: &Point<F>) -> Point<F> {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: y.negate(),
            },
        }
    }

    /// Computes the slope of the line through `p1` and `p2`, the tangent if both are equal.
    ///
    /// Returns `None` if the line is vertical, i.e. `p1 = -p2`, and
    /// an error if one of the points is `O`.
    pub(crate) fn slope(&self, p1: &Point<F>, p2: &Point<F>) -> IBEResult<Option<F>> {
        let (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) = (p1, p2) else {
            return Err(IBEError::Arithmetic(String::from(
                "the point at infinity has no tangent or chord",
            )));
        };

        if x1 == x2 && y1.add(y2).is_zero() {
            return Ok(None);
        }

        let slope = if p1 == p2 {
            let numerator = x1.from_z(&Z::from(3)).mul(&x1.square()).add(&self.a);
            numerator.mul(&y1.add(y1).inverse()?)
        } else {
            y2.sub(y1).mul(&x2.sub(x1).inverse()?)
        };
        Ok(Some(slope))
    }

    /// Adds two points of this curve.
    pub fn add(&self, p1: &Point<F>, p2: &Point<F>) -> IBEResult<Point<F>> {
        let (x1, y1, x2) = match (p1, p2) {
            (Point::Infinity, _) => return Ok(p2.clone()),
            (_, Point::Infinity) => return Ok(p1.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, .. }) => (x1, y1, x2),
        };

        let Some(slope) = self.slope(p1, p2)? else {
            return Ok(Point::Infinity);
        };

        let x3 = slope.square().sub(x1).sub(x2);
        let y3 = slope.mul(&x1.sub(&x3)).sub(y1);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    pub fn double(&self, point: &Point<F>) -> IBEResult<Point<F>> {
        self.add(point, point)
    }

    /// Computes `scalar * point` with double-and-add.
    /// Negative scalars multiply the negated point.
    pub fn mul(&self, scalar: &Z, point: &Point<F>) -> IBEResult<Point<F>> {
        if *scalar < Z::ZERO {
            return self.mul(&(Z::ZERO - scalar), &self.negate(point));
        }

        let mut result = Point::Infinity;
        for bit in to_bits_msb(scalar) {
            result = self.double(&result)?;
            if bit {
                result = self.add(&result, point)?;
            }
        }
        Ok(result)
    }
}

impl EllipticCurve<Fp> {
    /// Looks up a `y` such that `(x, y)` lies on the curve.
    ///
    /// Returns `None` if `x^3 + ax + b` is a quadratic non-residue.
    /// The choice between `y` and `-y` is deterministic.
    pub fn corresponding_y(&self, x: &Fp) -> IBEResult<Option<Fp>> {
        self.rhs(x).sqrt()
    }

    /// Returns the same curve over `F_{p^2}`.
    pub fn to_extension(&self) -> EllipticCurve<Fp2> {
        EllipticCurve {
            a: Fp2::from_base(&self.a),
            b: Fp2::from_base(&self.b),
        }
    }
}

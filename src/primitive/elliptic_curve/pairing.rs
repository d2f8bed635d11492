// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the Weil pairing and its modified, symmetric variant
//! on the supersingular curve `y^2 = x^3 + 1`.
//!
//! The main references are listed in the following:
//! - \[1\] Miller, Victor S. (2004).
//! The Weil pairing, and its efficient calculation.
//! In: Journal of Cryptology 17.
//! <https://doi.org/10.1007/s00145-004-0315-8>
//! - \[2\] Boneh, Dan and Franklin, Matthew (2001).
//! Identity-based encryption from the Weil pairing.
//! In: Advances in Cryptology - CRYPTO 2001, Springer.
//! <https://crypto.stanford.edu/~dabo/papers/bfibe.pdf>

use super::{EllipticCurve, Point};
use crate::{
    error::{IBEError, IBEResult},
    primitive::field::{FieldElement, Fp, Fp2},
    utils::bits::{is_odd, to_bits_msb},
};
use qfall_math::integer::Z;

/// Evaluates `l_{t,p}(at) / v_{t+p}(at)` for the line `l` through `t` and `p`
/// and the vertical line `v` through `t + p`, see \[1\].
///
/// Returns the pair `(numerator, denominator)`.
fn evaluate_line<F: FieldElement>(
    curve: &EllipticCurve<F>,
    t: &Point<F>,
    p: &Point<F>,
    at: (&F, &F),
) -> IBEResult<(F, F)> {
    let (x, y) = at;
    let (Point::Affine { x: x_t, y: y_t }, Point::Affine { x: x_p, .. }) = (t, p) else {
        return Err(IBEError::Arithmetic(String::from(
            "the point order does not match the pairing order",
        )));
    };

    match curve.slope(t, p)? {
        None => Ok((x.sub(x_t), x.one())),
        Some(slope) => {
            let numerator = y.sub(y_t).sub(&slope.mul(&x.sub(x_t)));
            let denominator = x.add(x_t).add(x_p).sub(&slope.square());
            Ok((numerator, denominator))
        }
    }
}

/// Computes `f_{n,p}(at)` for the normalized function `f_{n,p}` with
/// divisor `n(p) - n(O)` using Miller's algorithm.
///
/// Returns the pair `(numerator, denominator)` or an error if the order of `p`
/// does not divide `n` or a line vanishes at `at`.
fn miller<F: FieldElement>(
    curve: &EllipticCurve<F>,
    p: &Point<F>,
    at: (&F, &F),
    n: &Z,
) -> IBEResult<(F, F)> {
    let mut numerator = at.0.one();
    let mut denominator = at.0.one();
    let mut t = p.clone();

    for bit in to_bits_msb(n).into_iter().skip(1) {
        let (line_numerator, line_denominator) = evaluate_line(curve, &t, &t, at)?;
        numerator = numerator.square().mul(&line_numerator);
        denominator = denominator.square().mul(&line_denominator);
        t = curve.double(&t)?;

        if bit {
            let (line_numerator, line_denominator) = evaluate_line(curve, &t, p, at)?;
            numerator = numerator.mul(&line_numerator);
            denominator = denominator.mul(&line_denominator);
            t = curve.add(&t, p)?;
        }

        if numerator.is_zero() || denominator.is_zero() {
            return Err(IBEError::Arithmetic(String::from(
                "degenerate pairing evaluation",
            )));
        }
    }

    if !t.is_infinity() {
        return Err(IBEError::Arithmetic(String::from(
            "the point order does not match the pairing order",
        )));
    }
    Ok((numerator, denominator))
}

/// Computes the Weil pairing `e_n(p, q) = (-1)^n f_{n,p}(q) / f_{n,q}(p)`
/// of two points `p` and `q` whose orders divide `n`.
///
/// Parameters:
/// - `curve`: specifies the curve both points lie on
/// - `p`: specifies the first argument
/// - `q`: specifies the second argument
/// - `n`: specifies the order of the pairing
///
/// Returns an `n`-th root of unity in the field of the curve, `1` if one of
/// the points is `O` or both are equal, or an [`IBEError::Arithmetic`] if the
/// evaluation degenerates.
pub fn weil_pairing<F: FieldElement>(
    curve: &EllipticCurve<F>,
    p: &Point<F>,
    q: &Point<F>,
    n: &Z,
) -> IBEResult<F> {
    let one = curve.a().one();
    let (Point::Affine { x: x_p, y: y_p }, Point::Affine { x: x_q, y: y_q }) = (p, q) else {
        return Ok(one);
    };
    if p == q {
        return Ok(one);
    }

    let (num_pq, den_pq) = miller(curve, p, (x_q, y_q), n)?;
    let (num_qp, den_qp) = miller(curve, q, (x_p, y_p), n)?;

    let value = num_pq
        .mul(&den_qp)
        .mul(&den_pq.mul(&num_qp).inverse()?);
    if is_odd(n) {
        Ok(value.negate())
    } else {
        Ok(value)
    }
}

/// Applies the distortion map `φ(x, y) = (ωx, y)` of `y^2 = x^3 + b`.
/// It maps points with coordinates in `F_p` to points whose `x`-coordinate
/// lies outside of `F_p`, hence linearly independent ones.
pub fn distort(point: &Point<Fp>) -> Point<Fp2> {
    match point {
        Point::Infinity => Point::Infinity,
        Point::Affine { x, y } => Point::Affine {
            x: Fp2::omega(x).scale(x),
            y: Fp2::from_base(y),
        },
    }
}

/// Computes the modified Weil pairing `ê(p, q) = e_n(p, φ(q))` from \[2\].
///
/// Unlike [`weil_pairing`] it does not vanish on two points of the same
/// cyclic subgroup of `E(F_p)` and satisfies `ê(aP, bQ) = ê(P, Q)^{ab}`.
///
/// Parameters:
/// - `curve`: specifies a curve `y^2 = x^3 + b` over `F_p` with `p ≡ 2 mod 3`
/// - `p`: specifies the first argument
/// - `q`: specifies the second argument
/// - `n`: specifies the order of the pairing
///
/// Returns an `n`-th root of unity in `F_{p^2}` or an error if `a ≠ 0`
/// or the evaluation degenerates.
///
/// # Examples
/// ```
/// use bf_ibe::primitive::{
///     elliptic_curve::{modified_weil_pairing, EllipticCurve},
///     field::{FieldElement, PrimeField},
/// };
/// use qfall_math::integer::Z;
///
/// // p = 6 * 17 - 1, the point (75, 10) has order 17
/// let field = PrimeField::new(101).unwrap();
/// let curve = EllipticCurve::new(field.zero(), field.one()).unwrap();
/// let point = curve.point(field.element(75), field.element(10)).unwrap();
/// let order = Z::from(17);
///
/// let e = modified_weil_pairing(&curve, &point, &point, &order).unwrap();
/// let double = curve.mul(&Z::from(2), &point).unwrap();
///
/// assert!(!e.is_one());
/// assert_eq!(
///     e.pow(&Z::from(2)).unwrap(),
///     modified_weil_pairing(&curve, &double, &point, &order).unwrap()
/// );
/// ```
pub fn modified_weil_pairing(
    curve: &EllipticCurve<Fp>,
    p: &Point<Fp>,
    q: &Point<Fp>,
    n: &Z,
) -> IBEResult<Fp2> {
    if !curve.a().is_zero() {
        return Err(IBEError::Arithmetic(String::from(
            "the distortion map requires a curve with a = 0",
        )));
    }

    weil_pairing(&curve.to_extension(), &p.to_extension(), &distort(q), n)
}

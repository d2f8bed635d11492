// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the extraction of cube roots in finite fields.
//!
//! The implementation follows the Adleman-Manders-Miller approach.
//! The main references are listed in the following:
//! - \[1\] Adleman, Leonard and Manders, Kenneth and Miller, Gary (1977).
//! On taking roots in finite fields.
//! In: 18th Annual Symposium on Foundations of Computer Science.
//! <https://doi.org/10.1109/SFCS.1977.21>

use crate::{
    error::{IBEError, IBEResult},
    primitive::field::FieldElement,
};
use qfall_math::integer::Z;
use tracing::trace;

/// Cubes `value` `times` times, i.e. computes `value^{3^times}`.
fn cube_repeatedly<F: FieldElement>(value: &F, times: u64) -> F {
    let mut result = value.clone();
    for _ in 0..times {
        result = result.square().mul(&result);
    }
    result
}

/// Samples a uniformly random element that is not a cube.
fn sample_non_cube<F: FieldElement>(field_element: &F, exponent: &Z) -> IBEResult<F> {
    loop {
        let candidate = field_element.sample_uniform()?;
        if !candidate.is_zero() && !candidate.pow(exponent)?.is_one() {
            return Ok(candidate);
        }
    }
}

/// Computes a cube root of a field element that is a cube.
///
/// If the multiplicative group of the field has order `3^t * s` with `3 ∤ s`,
/// the root is derived from `x^l`, where `s = 3l ± 1`, and a correction factor
/// built from a random non-cube, which is only sampled for `t ≥ 2`.
/// In `F_p` with `p ≡ 2 mod 3` cubing is a bijection and the root is unique.
///
/// Parameters:
/// - `x`: specifies the element whose cube root is computed
///
/// Returns an element `r` with `r^3 = x` or an [`IBEError::Arithmetic`]
/// if `x` is not a cube.
///
/// # Examples
/// ```
/// use bf_ibe::{primitive::field::{FieldElement, PrimeField}, utils::cube_root::cube_root};
///
/// let field = PrimeField::new(41).unwrap();
///
/// let root = cube_root(&field.element(8)).unwrap();
///
/// assert_eq!(field.element(2), root);
/// ```
///
/// # Errors and Failures
/// - Returns a [`IBEError::Arithmetic`] if `x` is not a cube.
/// - Returns a [`IBEError::Math`] if the field arithmetic fails.
pub fn cube_root<F: FieldElement>(x: &F) -> IBEResult<F> {
    if x.is_zero() {
        return Ok(x.zero());
    }

    let three = Z::from(3);
    let order = x.multiplicative_order();
    let mut s = order.clone();
    let mut t: u64 = 0;
    while s.div_floor(&three) * &three == s {
        s = s.div_floor(&three);
        t += 1;
    }
    let plus_one = s.div_floor(&three) * &three + Z::ONE == s;
    let l = if plus_one {
        (&s - Z::ONE).div_floor(&three)
    } else {
        (&s + Z::ONE).div_floor(&three)
    };
    trace!(t, "extracting cube root");

    let mut h = x.one();
    if t >= 2 {
        let rho = sample_non_cube(x, &order.div_floor(&three))?;
        let mut a = rho.pow(&s)?;
        let a_prime = cube_repeatedly(&a, t - 1);
        let mut b = x.pow(&s)?;

        for i in 1..t {
            let d = cube_repeatedly(&b, t - 1 - i);
            let k = if d.is_one() {
                0
            } else if d == a_prime {
                2
            } else {
                1
            };
            let a_cubed = cube_repeatedly(&a, 1);
            for _ in 0..k {
                b = b.mul(&a_cubed);
                h = h.mul(&a);
            }
            a = a_cubed;
        }
    }

    let mut root = x.pow(&l)?.mul(&h);
    if plus_one {
        root = root.inverse()?;
    }

    if cube_repeatedly(&root, 1) != *x {
        return Err(IBEError::Arithmetic(String::from(
            "the given field element is not a cube",
        )));
    }
    Ok(root)
}

#[cfg(test)]
mod test_cube_root {
    use super::cube_root;
    use crate::primitive::field::{FieldElement, Fp2, PrimeField};
    use qfall_math::integer::Z;
    use std::str::FromStr;

    /// Ensures that the cube of every element has a root, including
    /// moduli with `p ≡ 1 mod 3` and higher powers of 3 in `p - 1`.
    #[test]
    fn all_cubes_small_moduli() {
        for p in [7, 13, 19, 29, 37, 41, 109, 163, 487] {
            let field = PrimeField::new(p).unwrap();
            for value in 0..p {
                let cube = field.element(value).pow(&Z::from(3)).unwrap();

                let root = cube_root(&cube).unwrap();

                assert_eq!(cube, root.pow(&Z::from(3)).unwrap());
            }
        }
    }

    /// Ensures that the root is the unique preimage if `p ≡ 2 mod 3`.
    #[test]
    fn unique_root() {
        let field = PrimeField::new(41).unwrap();
        for value in 0..41 {
            let x = field.element(value);

            let root = cube_root(&x.pow(&Z::from(3)).unwrap()).unwrap();

            assert_eq!(x, root);
        }
    }

    /// Ensures that every element of a large field with `p ≡ 2 mod 3` has a root.
    #[test]
    fn large_modulus() {
        let field = PrimeField::new(Z::from_str("237684487542793012780631866613").unwrap()).unwrap();
        for _ in 0..10 {
            let x = field.sample_uniform().unwrap();

            let root = cube_root(&x).unwrap();

            assert_eq!(x, root.pow(&Z::from(3)).unwrap());
        }
    }

    /// Ensures that roots are found in `F_{p^2}`, where cubing is not bijective.
    /// `53^2 - 1` is divisible by `27`, which requires a random non-cube.
    #[test]
    fn extension_field() {
        for p in [53, 101] {
            let field = PrimeField::new(p).unwrap();
            for c0 in 0..6 {
                for c1 in 0..6 {
                    let value = Fp2::new(field.element(c0), field.element(c1));
                    let cube = value.pow(&Z::from(3)).unwrap();

                    let root = cube_root(&cube).unwrap();

                    assert_eq!(cube, root.pow(&Z::from(3)).unwrap());
                }
            }
        }
    }

    /// Ensures that non-cubes are rejected.
    #[test]
    fn non_cube() {
        let field = PrimeField::new(7).unwrap();

        assert!(cube_root(&field.element(3)).is_err());
    }
}

// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains an implementation of the IND-ID-CCA secure
//! identity based encryption scheme of Boneh and Franklin, i.e. the
//! basic scheme with the Fujisaki-Okamoto transform applied.
//!
//! The main references are listed in the following:
//! - \[1\] Boneh, Dan and Franklin, Matthew (2001).
//! Identity-based encryption from the Weil pairing.
//! In: Advances in Cryptology - CRYPTO 2001, Springer.
//! <https://crypto.stanford.edu/~dabo/papers/bfibe.pdf>
//! - \[2\] Fujisaki, Eiichiro and Okamoto, Tatsuaki (1999).
//! Secure integration of asymmetric and symmetric encryption schemes.
//! In: Advances in Cryptology - CRYPTO 1999, Springer.
//! <https://doi.org/10.1007/3-540-48405-1_34>

mod authority;

pub use authority::Authority;

use super::IBE;
use crate::{
    construction::hash::oracles::{
        hash_identity, hash_padding, hash_pairing_value, hash_to_scalar,
    },
    error::{IBEError, IBEResult},
    primitive::{
        bit_string::BitString,
        elliptic_curve::{modified_weil_pairing, EllipticCurve, Point},
        field::{FieldElement, Fp, Fp2, PrimeField},
    },
    utils::{
        cube_root::cube_root,
        domain_parameters::{DomainParameters, COFACTOR},
    },
};
use qfall_math::integer::Z;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// This struct manages the domain parameters of a [`BonehFranklinIBE`] instance.
///
/// # Examples
/// ```
/// use bf_ibe::{
///     construction::identity_based_encryption::{BonehFranklinIBE, IBE},
///     utils::domain_parameters::DomainParameters,
/// };
///
/// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
/// let (pp, msk) = ibe.setup().unwrap();
///
/// let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
/// let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"Hello").unwrap();
/// let message = ibe.decrypt(&pp, &sk, &cipher).unwrap();
///
/// assert_eq!(b"Hello".to_vec(), message);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonehFranklinIBE {
    domain: DomainParameters,
}

/// The public parameters `(n, p, q, F_p, E, P, P_pub)` output by
/// [`BonehFranklinIBE::setup`](IBE::setup).
///
/// Attributes:
/// - `message_bits`: specifies the length `n` of messages in bits
/// - `p`: specifies the prime modulus with `p = 6q - 1`
/// - `q`: specifies the prime order of the used subgroup
/// - `field`: specifies the field `F_p`
/// - `curve`: specifies the curve `y^2 = x^3 + 1` over `F_p`
/// - `base_point`: specifies the generator `P` of order `q`
/// - `public_point`: specifies `P_pub = sP` for the master secret `s`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicParameters {
    message_bits: u64,
    p: Z,
    q: Z,
    field: PrimeField,
    curve: EllipticCurve<Fp>,
    base_point: Point<Fp>,
    public_point: Point<Fp>,
}

/// The master secret `s` in `[1, q - 1]`.
/// It can neither be serialized nor printed.
#[derive(Clone, PartialEq)]
pub struct MasterSecret {
    s: Z,
}

/// The private key `sQ_id` of an identity.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateKey {
    point: Point<Fp>,
}

/// A ciphertext `(U, V, W)` with `U = rP`, `V = o ⊕ H(g_id^r)`, `W = m ⊕ G1(o)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ciphertext {
    u: Point<Fp>,
    v: BitString,
    w: BitString,
}

/// The encryption-side values `Q_id` and `g_id = ê(Q_id, P_pub)` of an identity.
/// They only depend on public values, hence they may be cached by the sender
/// to skip the pairing evaluation during [`BonehFranklinIBE::encrypt_precomputed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecomputedIdentity {
    point: Point<Fp>,
    pairing_value: Fp2,
}

impl BonehFranklinIBE {
    /// Instantiates a [`BonehFranklinIBE`] instance over the given domain parameters.
    ///
    /// Returns the instance or an [`IBEError::InvalidParameters`]
    /// if the domain parameters are invalid.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::{
    ///     construction::identity_based_encryption::BonehFranklinIBE,
    ///     utils::domain_parameters::DomainParameters,
    /// };
    ///
    /// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
    /// ```
    pub fn new(domain: DomainParameters) -> IBEResult<Self> {
        domain.check_validity()?;
        Ok(Self { domain })
    }

    pub fn domain_parameters(&self) -> &DomainParameters {
        &self.domain
    }

    /// Searches the base point `P` deterministically: starting at `x = 1`
    /// the first point `(x, y)` of the curve with `qP = O` is returned.
    fn find_base_point(
        curve: &EllipticCurve<Fp>,
        field: &PrimeField,
        q: &Z,
    ) -> IBEResult<Point<Fp>> {
        let mut x = field.one();
        let mut candidates = 0u64;
        loop {
            if let Some(y) = curve.corresponding_y(&x)? {
                candidates += 1;
                let point = curve.point(x.clone(), y)?;
                if curve.mul(q, &point)?.is_infinity() {
                    debug!(candidates, x = %x, "found base point");
                    return Ok(point);
                }
            }
            x = x.add(&field.one());
        }
    }

    /// Computes the values of `identity` that [`IBE::encrypt`] derives for
    /// every message, i.e. `Q_id` and `g_id = ê(Q_id, P_pub)`.
    ///
    /// Parameters:
    /// - `master_pk`: specifies the public parameters
    /// - `identity`: specifies the identity of the recipient
    ///
    /// Returns the [`PrecomputedIdentity`] or an [`IBEError::InvalidIdentity`]
    /// if `identity` is empty or its point fails the order check.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::{
    ///     construction::identity_based_encryption::{BonehFranklinIBE, IBE},
    ///     utils::domain_parameters::DomainParameters,
    /// };
    ///
    /// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
    /// let (pp, msk) = ibe.setup().unwrap();
    /// let bob = ibe.precompute(&pp, b"bob@mail.com").unwrap();
    ///
    /// let cipher = ibe.encrypt_precomputed(&pp, &bob, b"Hi").unwrap();
    ///
    /// let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
    /// assert_eq!(b"Hi".to_vec(), ibe.decrypt(&pp, &sk, &cipher).unwrap());
    /// ```
    pub fn precompute(
        &self,
        master_pk: &PublicParameters,
        identity: &[u8],
    ) -> IBEResult<PrecomputedIdentity> {
        let point = map_to_point(master_pk, identity)?;
        check_order(master_pk, &point)?;
        let pairing_value = modified_weil_pairing(
            &master_pk.curve,
            &point,
            &master_pk.public_point,
            &master_pk.q,
        )?;

        Ok(PrecomputedIdentity {
            point,
            pairing_value,
        })
    }

    /// Encrypts `message` for a precomputed identity, see [`IBE::encrypt`].
    ///
    /// # Errors and Failures
    /// - Returns a [`IBEError::Math`] if sampling the padding fails.
    pub fn encrypt_precomputed(
        &self,
        master_pk: &PublicParameters,
        identity: &PrecomputedIdentity,
        message: &[u8],
    ) -> IBEResult<Ciphertext> {
        let n = master_pk.message_bits;
        let m = BitString::fit(message, n);

        let (o, r) = sample_padding(&m, &master_pk.q)?;

        // U = rP, V = o ⊕ H(g_id^r), W = m ⊕ G1(o)
        let u = master_pk.curve.mul(&r, &master_pk.base_point)?;
        let v = o.xor(&hash_pairing_value(&identity.pairing_value.pow(&r)?, n))?;
        let w = m.xor(&hash_padding(&o))?;

        Ok(Ciphertext { u, v, w })
    }

    /// Decrypts `cipher = (U, V, W)` to the full `n`-bit message by following these steps:
    /// - o = V ⊕ H(ê(sk, U))
    /// - m = W ⊕ G1(o)
    /// - r = H1(o, m)
    /// - accept iff `U - rP = O`
    ///
    /// Parameters:
    /// - `master_pk`: specifies the public parameters
    /// - `sk`: specifies the private key of the recipient
    /// - `cipher`: specifies the ciphertext
    ///
    /// Returns `m` including its left zero padding.
    ///
    /// # Errors and Failures
    /// - Returns a [`IBEError::CiphertextRejected`] if `U` is not a point of
    /// order `q` on the curve, `V` or `W` are not `n` bits long or `U ≠ rP`.
    /// - Returns a [`IBEError::Arithmetic`] if `sk` is not a point of the curve.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::{
    ///     construction::identity_based_encryption::{BonehFranklinIBE, IBE},
    ///     utils::domain_parameters::DomainParameters,
    /// };
    ///
    /// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
    /// let (pp, msk) = ibe.setup().unwrap();
    /// let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
    ///
    /// let cipher = ibe.encrypt(&pp, b"bob@mail.com", &[0x00, 0x41]).unwrap();
    /// let m = ibe.decrypt_bits(&pp, &sk, &cipher).unwrap();
    ///
    /// assert_eq!(&[0x00, 0x41], &m.as_bytes()[14..]);
    /// ```
    pub fn decrypt_bits(
        &self,
        master_pk: &PublicParameters,
        sk: &PrivateKey,
        cipher: &Ciphertext,
    ) -> IBEResult<BitString> {
        let n = master_pk.message_bits;
        let curve = &master_pk.curve;
        if cipher.v.len_bits() != n
            || cipher.w.len_bits() != n
            || !curve.contains(&cipher.u)
            || cipher.u.is_infinity()
            || !curve.mul(&master_pk.q, &cipher.u)?.is_infinity()
        {
            warn!("rejected malformed ciphertext");
            return Err(IBEError::CiphertextRejected);
        }
        if !curve.contains(&sk.point) {
            return Err(IBEError::Arithmetic(String::from(
                "the private key is not a point of the curve",
            )));
        }

        let g = modified_weil_pairing(curve, &sk.point, &cipher.u, &master_pk.q)?;
        let o = cipher.v.xor(&hash_pairing_value(&g, n))?;
        let m = cipher.w.xor(&hash_padding(&o))?;
        let r = hash_to_scalar(&o, &m, &master_pk.q)?;

        let r_p = curve.mul(&r, &master_pk.base_point)?;
        if !curve.add(&cipher.u, &curve.negate(&r_p))?.is_infinity() {
            warn!("rejected ciphertext failing the consistency check");
            return Err(IBEError::CiphertextRejected);
        }

        Ok(m)
    }
}

impl Default for BonehFranklinIBE {
    /// Initializes a [`BonehFranklinIBE`] struct with [`DomainParameters::default`],
    /// i.e. a 1024-bit modulus and 1024-bit messages.
    fn default() -> Self {
        Self {
            domain: DomainParameters::default(),
        }
    }
}

impl IBE for BonehFranklinIBE {
    type MasterPublicKey = PublicParameters;
    type MasterSecretKey = MasterSecret;
    type SecretKey = PrivateKey;
    type Cipher = Ciphertext;

    /// Generates the public parameters and the master secret by following these steps:
    /// - set up `F_p` and `E: y^2 = x^3 + 1` from the domain parameters
    /// - search the base point `P` of order `q`
    /// - s <- [1, q - 1]
    /// - P_pub = sP
    ///
    /// Then, `pp = (n, p, q, F_p, E, P, P_pub)` and `msk = s` is output.
    ///
    /// # Examples
    /// ```
    /// use bf_ibe::{
    ///     construction::identity_based_encryption::{BonehFranklinIBE, IBE},
    ///     utils::domain_parameters::DomainParameters,
    /// };
    /// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
    ///
    /// let (pp, msk) = ibe.setup().unwrap();
    /// ```
    fn setup(&self) -> IBEResult<(Self::MasterPublicKey, Self::MasterSecretKey)> {
        // deserialized instances bypass the check in `new`
        self.domain.check_validity()?;
        let p = self.domain.modulus().clone();
        let q = self.domain.subgroup_order();
        let field = PrimeField::new(&p)?;
        let curve = EllipticCurve::new(
            field.element(self.domain.curve_a()),
            field.element(self.domain.curve_b()),
        )?;

        let base_point = Self::find_base_point(&curve, &field, &q)?;
        let s = Z::sample_uniform(Z::ONE, &q)?;
        let public_point = curve.mul(&s, &base_point)?;

        info!(
            modulus_bits = p.bits(),
            message_bits = self.domain.message_bits(),
            "set up Boneh-Franklin parameters"
        );
        Ok((
            PublicParameters {
                message_bits: self.domain.message_bits(),
                p,
                q,
                field,
                curve,
                base_point,
                public_point,
            },
            MasterSecret { s },
        ))
    }

    /// Extracts the private key `sQ_id` of `identity`.
    ///
    /// Parameters:
    /// - `master_pk`: specifies the public parameters
    /// - `master_sk`: specifies the master secret `s`
    /// - `identity`: specifies the identity the key is derived for
    ///
    /// Returns the [`PrivateKey`] of `identity` or an [`IBEError::InvalidIdentity`]
    /// if `identity` is empty or its point fails the order check.
    fn extract(
        &self,
        master_pk: &Self::MasterPublicKey,
        master_sk: &Self::MasterSecretKey,
        identity: &[u8],
    ) -> IBEResult<Self::SecretKey> {
        let point = map_to_point(master_pk, identity)?;
        check_order(master_pk, &point)?;

        debug!(identity = %String::from_utf8_lossy(identity), "extracting private key");
        Ok(PrivateKey {
            point: master_pk.curve.mul(&master_sk.s, &point)?,
        })
    }

    /// Generates an encryption of `message` for `identity` by following these steps:
    /// - m = `message` truncated or left-padded to `n` bits
    /// - o <- {0,1}^n
    /// - r = H1(o, m)
    /// - g_id = ê(Q_id, P_pub)
    ///
    /// Then, `cipher = (rP, o ⊕ H(g_id^r), m ⊕ G1(o))` is output.
    ///
    /// Parameters:
    /// - `master_pk`: specifies the public parameters
    /// - `identity`: specifies the identity of the recipient
    /// - `message`: specifies the message, of which only the first `n / 8` bytes are encrypted
    ///
    /// Returns the [`Ciphertext`] or an [`IBEError::InvalidIdentity`]
    /// if `identity` is empty or its point fails the order check.
    fn encrypt(
        &self,
        master_pk: &Self::MasterPublicKey,
        identity: &[u8],
        message: &[u8],
    ) -> IBEResult<Self::Cipher> {
        debug!(identity = %String::from_utf8_lossy(identity), "encrypting");
        let precomputed = self.precompute(master_pk, identity)?;
        self.encrypt_precomputed(master_pk, &precomputed, message)
    }

    /// Decrypts `cipher = (U, V, W)` using the private key `sk`,
    /// see [`BonehFranklinIBE::decrypt_bits`] for the individual steps.
    ///
    /// Parameters:
    /// - `master_pk`: specifies the public parameters
    /// - `sk`: specifies the private key of the recipient
    /// - `cipher`: specifies the ciphertext
    ///
    /// Returns the message without its left zero padding or an
    /// [`IBEError::CiphertextRejected`] if the consistency check fails
    /// or `cipher` does not fit the public parameters.
    /// Leading zero bytes of the message are stripped together with the padding,
    /// use [`BonehFranklinIBE::decrypt_bits`] to retrieve them.
    fn decrypt(
        &self,
        master_pk: &Self::MasterPublicKey,
        sk: &Self::SecretKey,
        cipher: &Self::Cipher,
    ) -> IBEResult<Vec<u8>> {
        Ok(self.decrypt_bits(master_pk, sk, cipher)?.to_trimmed_bytes())
    }
}

/// Samples `o <- {0,1}^n` and derives `r = H1(o, m)`.
/// Padding with `r = 0` is resampled, as `U = O` is rejected by decryption.
fn sample_padding(message: &BitString, q: &Z) -> IBEResult<(BitString, Z)> {
    loop {
        let o = BitString::sample_uniform(message.len_bits())?;
        let r = hash_to_scalar(&o, message, q)?;
        if r != Z::ZERO {
            return Ok((o, r));
        }
    }
}

/// Maps an identity deterministically to a point of order `q` or `1`
/// by following these steps:
/// - y = G(identity)
/// - x = (y^2 - 1)^{1/3}
/// - Q_id = 6 (x, y)
///
/// The result has to be validated with [`check_order`] before use.
///
/// Parameters:
/// - `master_pk`: specifies the public parameters
/// - `identity`: specifies the identity to map
///
/// Returns `Q_id` or an [`IBEError::InvalidIdentity`] if `identity` is empty.
///
/// # Examples
/// ```
/// use bf_ibe::{
///     construction::identity_based_encryption::{check_order, map_to_point, BonehFranklinIBE, IBE},
///     utils::domain_parameters::DomainParameters,
/// };
///
/// let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
/// let (pp, _) = ibe.setup().unwrap();
///
/// let point = map_to_point(&pp, b"bob@mail.com").unwrap();
///
/// assert!(check_order(&pp, &point).is_ok());
/// assert_eq!(point, map_to_point(&pp, b"bob@mail.com").unwrap());
/// ```
pub fn map_to_point(master_pk: &PublicParameters, identity: &[u8]) -> IBEResult<Point<Fp>> {
    if identity.is_empty() {
        return Err(IBEError::InvalidIdentity);
    }

    let y = hash_identity(identity, &master_pk.field)?;
    let x = cube_root(&y.square().sub(&y.one()))?;
    let point = master_pk.curve.point(x, y)?;
    master_pk.curve.mul(&Z::from(COFACTOR), &point)
}

/// Checks that `point` has order exactly `q`, i.e. `point ≠ O` and `q point = O`.
///
/// Returns an empty result or an [`IBEError::InvalidIdentity`] otherwise.
pub fn check_order(master_pk: &PublicParameters, point: &Point<Fp>) -> IBEResult<()> {
    if point.is_infinity()
        || !master_pk.curve.contains(point)
        || !master_pk.curve.mul(&master_pk.q, point)?.is_infinity()
    {
        return Err(IBEError::InvalidIdentity);
    }
    Ok(())
}

impl PublicParameters {
    pub fn message_bits(&self) -> u64 {
        self.message_bits
    }

    pub fn p(&self) -> &Z {
        &self.p
    }

    pub fn q(&self) -> &Z {
        &self.q
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn curve(&self) -> &EllipticCurve<Fp> {
        &self.curve
    }

    pub fn base_point(&self) -> &Point<Fp> {
        &self.base_point
    }

    pub fn public_point(&self) -> &Point<Fp> {
        &self.public_point
    }

    /// Checks public parameters obtained from an untrusted source:
    /// the domain parameters have to be valid, field and curve have to match
    /// them and both `P` and `P_pub` have to be points of order `q`.
    ///
    /// Returns an empty result or an [`IBEError::InvalidParameters`].
    pub fn check_validity(&self) -> IBEResult<()> {
        let domain = DomainParameters::new(self.message_bits, self.p.clone())?;
        let field = PrimeField::new(&self.p)?;
        if self.q != domain.subgroup_order()
            || self.field != field
            || self.curve.a() != &field.zero()
            || self.curve.b() != &field.one()
        {
            return Err(IBEError::InvalidParameters(String::from(
                "field, curve or q do not match the modulus",
            )));
        }
        for point in [&self.base_point, &self.public_point] {
            if check_order(self, point).is_err() {
                return Err(IBEError::InvalidParameters(String::from(
                    "the base point and the public point must have order q",
                )));
            }
        }
        Ok(())
    }
}

impl PrivateKey {
    pub fn point(&self) -> &Point<Fp> {
        &self.point
    }
}

impl Ciphertext {
    pub fn u(&self) -> &Point<Fp> {
        &self.u
    }

    pub fn v(&self) -> &BitString {
        &self.v
    }

    pub fn w(&self) -> &BitString {
        &self.w
    }
}

impl PrecomputedIdentity {
    pub fn point(&self) -> &Point<Fp> {
        &self.point
    }

    pub fn pairing_value(&self) -> &Fp2 {
        &self.pairing_value
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecret(<redacted>)")
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

#[cfg(test)]
mod test_boneh_franklin {
    use super::{
        check_order, map_to_point, sample_padding, BonehFranklinIBE, Ciphertext, PrivateKey,
        PublicParameters,
    };
    use crate::{
        construction::identity_based_encryption::IBE,
        error::IBEError,
        primitive::{
            bit_string::BitString,
            elliptic_curve::{modified_weil_pairing, Point},
            field::{FieldElement, Fp},
        },
        utils::domain_parameters::DomainParameters,
    };
    use qfall_math::integer::Z;

    fn toy_instance() -> (BonehFranklinIBE, PublicParameters, super::MasterSecret) {
        let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
        let (pp, msk) = ibe.setup().unwrap();
        (ibe, pp, msk)
    }

    /// Returns a point of the curve whose order is a multiple of 6.
    fn point_outside_subgroup(pp: &PublicParameters) -> Point<Fp> {
        let mut x = pp.field().one();
        loop {
            if let Some(y) = pp.curve().corresponding_y(&x).unwrap() {
                let point = pp.curve().point(x.clone(), y).unwrap();
                if !pp.curve().mul(pp.q(), &point).unwrap().is_infinity() {
                    return point;
                }
            }
            x = x.add(&pp.field().one());
        }
    }

    /// Checks whether the full-cycle of setup, extract, encrypt and decrypt works properly
    /// for messages of different lengths.
    #[test]
    fn cycle() {
        let (ibe, pp, msk) = toy_instance();
        let id = b"bob@mail.com";
        let sk = ibe.extract(&pp, &msk, id).unwrap();

        for message in [
            b"A".to_vec(),
            b"Hello World!".to_vec(),
            b"exactly 16 bytes".to_vec(),
            Vec::new(),
        ] {
            let cipher = ibe.encrypt(&pp, id, &message).unwrap();

            assert_eq!(message, ibe.decrypt(&pp, &sk, &cipher).unwrap());
        }
    }

    /// Ensures that messages longer than `n` bits are truncated to their first bytes.
    #[test]
    fn truncation() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let message = b"this message is longer than 128 bits";

        let cipher = ibe.encrypt(&pp, b"bob@mail.com", message).unwrap();

        assert_eq!(message[..16].to_vec(), ibe.decrypt(&pp, &sk, &cipher).unwrap());
    }

    /// Ensures that encryption is randomized.
    #[test]
    fn randomized() {
        let (ibe, pp, _) = toy_instance();

        let a = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();
        let b = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();

        assert_ne!(a, b);
    }

    /// Ensures that identities are mapped deterministically to distinct points.
    #[test]
    fn map_to_point_deterministic() {
        let (_, pp, _) = toy_instance();

        let bob = map_to_point(&pp, b"bob@mail.com").unwrap();

        assert_eq!(bob, map_to_point(&pp, b"bob@mail.com").unwrap());
        assert_ne!(bob, map_to_point(&pp, b"alice@mail.com").unwrap());
        assert_ne!(bob, map_to_point(&pp, b"bob@mail.co").unwrap());
    }

    /// Ensures that every mapped identity has order `q`.
    #[test]
    fn order_invariant() {
        let (_, pp, _) = toy_instance();

        for i in 0..20 {
            let point = map_to_point(&pp, format!("user{i}@mail.com").as_bytes()).unwrap();

            assert!(pp.curve().contains(&point));
            assert!(pp.curve().mul(pp.q(), &point).unwrap().is_infinity());
            assert!(check_order(&pp, &point).is_ok());
        }
    }

    /// Ensures that the order check rejects `O` and points outside of the subgroup.
    #[test]
    fn order_check() {
        let (_, pp, _) = toy_instance();

        assert!(matches!(
            check_order(&pp, &Point::Infinity),
            Err(IBEError::InvalidIdentity)
        ));
        assert!(matches!(
            check_order(&pp, &point_outside_subgroup(&pp)),
            Err(IBEError::InvalidIdentity)
        ));
        assert!(check_order(&pp, pp.base_point()).is_ok());
    }

    /// Ensures that the empty identity is rejected.
    #[test]
    fn empty_identity() {
        let (ibe, pp, msk) = toy_instance();

        assert!(matches!(
            ibe.extract(&pp, &msk, b""),
            Err(IBEError::InvalidIdentity)
        ));
        assert!(matches!(
            ibe.encrypt(&pp, b"", b"A"),
            Err(IBEError::InvalidIdentity)
        ));
    }

    /// Ensures that the key of another identity is rejected.
    #[test]
    fn wrong_key() {
        let (ibe, pp, msk) = toy_instance();
        let alice = ibe.extract(&pp, &msk, b"alice@mail.com").unwrap();

        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();

        assert!(matches!(
            ibe.decrypt(&pp, &alice, &cipher),
            Err(IBEError::CiphertextRejected)
        ));
    }

    /// Ensures that flipping single bits of `V` or `W` is detected.
    #[test]
    fn bit_flips() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();

        for index in [0, 1, 64, 126, 127] {
            let mut v = cipher.clone();
            v.v.flip(index);
            let mut w = cipher.clone();
            w.w.flip(index);

            assert!(matches!(
                ibe.decrypt(&pp, &sk, &v),
                Err(IBEError::CiphertextRejected)
            ));
            assert!(matches!(
                ibe.decrypt(&pp, &sk, &w),
                Err(IBEError::CiphertextRejected)
            ));
        }
    }

    /// Ensures that replacing `U` by other points is detected.
    #[test]
    fn replaced_u() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();
        let field = pp.field();

        let replacements = [
            pp.curve().mul(&Z::from(7), pp.base_point()).unwrap(),
            pp.curve().add(&cipher.u, pp.base_point()).unwrap(),
            point_outside_subgroup(&pp),
            Point::Affine {
                x: field.one(),
                y: field.one(),
            },
            Point::Infinity,
        ];

        for u in replacements {
            let tampered = Ciphertext {
                u,
                ..cipher.clone()
            };

            assert!(matches!(
                ibe.decrypt(&pp, &sk, &tampered),
                Err(IBEError::CiphertextRejected)
            ));
        }
    }

    /// Ensures that `V` and `W` of a different length are rejected.
    #[test]
    fn malformed_width() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();
        let mut long_v = cipher.v.as_bytes().to_vec();
        long_v.push(0);

        let tampered = Ciphertext {
            v: crate::primitive::bit_string::BitString::new(long_v),
            ..cipher.clone()
        };

        assert!(matches!(
            ibe.decrypt(&pp, &sk, &tampered),
            Err(IBEError::CiphertextRejected)
        ));
    }

    /// Ensures that a private key not on the curve is reported as arithmetic fault.
    #[test]
    fn key_off_curve() {
        let (ibe, pp, _) = toy_instance();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();
        let sk = PrivateKey {
            point: Point::Affine {
                x: pp.field().one(),
                y: pp.field().one(),
            },
        };

        assert!(matches!(
            ibe.decrypt(&pp, &sk, &cipher),
            Err(IBEError::Arithmetic(_))
        ));
    }

    /// Ensures that precomputation yields `g_id = ê(Q_id, P_pub)` and valid ciphertexts.
    #[test]
    fn precomputation() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();

        let bob = ibe.precompute(&pp, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt_precomputed(&pp, &bob, b"cached").unwrap();

        assert_eq!(&map_to_point(&pp, b"bob@mail.com").unwrap(), bob.point());
        assert_eq!(
            &modified_weil_pairing(pp.curve(), bob.point(), pp.public_point(), pp.q()).unwrap(),
            bob.pairing_value()
        );
        assert_eq!(b"cached".to_vec(), ibe.decrypt(&pp, &sk, &cipher).unwrap());
    }

    /// Ensures that the private key pairs like the master secret, i.e. `ê(sQ, P) = ê(Q, sP)`.
    #[test]
    fn key_consistency() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let q_id = map_to_point(&pp, b"bob@mail.com").unwrap();

        assert_eq!(
            modified_weil_pairing(pp.curve(), sk.point(), pp.base_point(), pp.q()).unwrap(),
            modified_weil_pairing(pp.curve(), &q_id, pp.public_point(), pp.q()).unwrap()
        );
    }

    /// Ensures that public parameters, keys and ciphertexts survive serialization
    /// and remain usable.
    #[test]
    fn serialization() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", b"A").unwrap();

        let pp_json = serde_json::to_string(&pp).unwrap();
        let sk_json = serde_json::to_string(&sk).unwrap();
        let cipher_json = serde_json::to_string(&cipher).unwrap();
        let pp_parsed: PublicParameters = serde_json::from_str(&pp_json).unwrap();
        let sk_parsed: PrivateKey = serde_json::from_str(&sk_json).unwrap();
        let cipher_parsed: Ciphertext = serde_json::from_str(&cipher_json).unwrap();

        assert_eq!(pp, pp_parsed);
        assert_eq!(sk, sk_parsed);
        assert_eq!(cipher, cipher_parsed);
        assert!(pp_parsed.check_validity().is_ok());
        assert_eq!(
            b"A".to_vec(),
            ibe.decrypt(&pp_parsed, &sk_parsed, &cipher_parsed).unwrap()
        );
    }

    /// Ensures that public parameters with a base point of the wrong order are detected.
    #[test]
    fn invalid_public_parameters() {
        let (_, pp, _) = toy_instance();

        let tampered = PublicParameters {
            base_point: point_outside_subgroup(&pp),
            ..pp.clone()
        };
        let wrong_q = PublicParameters {
            q: pp.q() + Z::ONE,
            ..pp.clone()
        };

        assert!(tampered.check_validity().is_err());
        assert!(wrong_q.check_validity().is_err());
    }

    /// Ensures that neither master secret nor private keys are printed.
    #[test]
    fn redacted_debug() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();

        assert_eq!("MasterSecret(<redacted>)", format!("{msk:?}"));
        assert_eq!("PrivateKey(<redacted>)", format!("{sk:?}"));
    }

    /// Ensures that invalid domain parameters are rejected.
    #[test]
    fn invalid_domain() {
        let domain: DomainParameters = serde_json::from_str(
            r#"{"version":1,"message_bits":16,"modulus":"43","curve_a":"0","curve_b":"1"}"#,
        )
        .unwrap();

        assert!(BonehFranklinIBE::new(domain).is_err());
    }

    /// Ensures that setup validates domain parameters that skipped [`BonehFranklinIBE::new`].
    #[test]
    fn setup_validates_deserialized_domain() {
        let unchecked = r#"{"domain":{"version":1,"message_bits":16,"modulus":"43","curve_a":"0","curve_b":"1"}}"#;
        let misaligned = r#"{"domain":{"version":1,"message_bits":12,"modulus":"237684487542793012780631866613","curve_a":"0","curve_b":"1"}}"#;

        for json in [unchecked, misaligned] {
            let ibe: BonehFranklinIBE = serde_json::from_str(json).unwrap();

            assert!(matches!(ibe.setup(), Err(IBEError::InvalidParameters(_))));
        }
    }

    /// Ensures that the base point is the point of order `q` with the smallest `x >= 1`
    /// and that repeated setups find the same one.
    #[test]
    fn deterministic_base_point() {
        let ibe = BonehFranklinIBE::new(DomainParameters::toy()).unwrap();
        let (pp_0, _) = ibe.setup().unwrap();
        let (pp_1, _) = ibe.setup().unwrap();

        assert_eq!(pp_0.base_point(), pp_1.base_point());
        assert_ne!(pp_0.public_point(), pp_1.public_point());

        let base_x = pp_0.base_point().x().unwrap().clone();
        let mut x = pp_0.field().one();
        while x != base_x {
            if let Some(y) = pp_0.curve().corresponding_y(&x).unwrap() {
                let point = pp_0.curve().point(x.clone(), y).unwrap();
                assert!(!pp_0.curve().mul(pp_0.q(), &point).unwrap().is_infinity());
            }
            x = x.add(&pp_0.field().one());
        }
    }

    /// Ensures that messages starting with zero bytes are recovered in full by
    /// [`BonehFranklinIBE::decrypt_bits`] while [`IBE::decrypt`] strips them.
    #[test]
    fn leading_zero_bytes() {
        let (ibe, pp, msk) = toy_instance();
        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let message = [0x00, 0x41];

        let cipher = ibe.encrypt(&pp, b"bob@mail.com", &message).unwrap();

        assert_eq!(
            BitString::fit(&message, pp.message_bits()),
            ibe.decrypt_bits(&pp, &sk, &cipher).unwrap()
        );
        assert_eq!(vec![0x41], ibe.decrypt(&pp, &sk, &cipher).unwrap());
    }

    /// Ensures that the sampled padding never yields the scalar `r = 0`,
    /// even if half of all paddings would.
    #[test]
    fn padding_scalar_non_zero() {
        let message = BitString::fit(b"A", 128);
        let q = Z::from(2);

        for _ in 0..32 {
            let (o, r) = sample_padding(&message, &q).unwrap();

            assert_eq!(Z::ONE, r);
            assert_eq!(128, o.len_bits());
        }
    }

    /// Checks whether the full-cycle works properly for the 1024-bit parameters.
    #[test]
    fn cycle_secure1024() {
        let ibe = BonehFranklinIBE::default();
        let (pp, msk) = ibe.setup().unwrap();
        let message = vec![0x5a; 128];

        let sk = ibe.extract(&pp, &msk, b"bob@mail.com").unwrap();
        let cipher = ibe.encrypt(&pp, b"bob@mail.com", &message).unwrap();

        assert_eq!(1024, cipher.v().len_bits());
        assert_eq!(message, ibe.decrypt(&pp, &sk, &cipher).unwrap());
    }
}

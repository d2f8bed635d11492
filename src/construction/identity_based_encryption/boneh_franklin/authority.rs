// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the private key generator of the Boneh-Franklin scheme,
//! which owns the master secret.

use super::{BonehFranklinIBE, MasterSecret, PrivateKey, PublicParameters};
use crate::{
    construction::identity_based_encryption::IBE, error::IBEResult,
    utils::domain_parameters::DomainParameters,
};
use tracing::info;

/// The trusted authority of a [`BonehFranklinIBE`] deployment.
/// It runs the setup once and afterwards extracts private keys
/// for arbitrary identities. Private keys are recomputed on every request.
///
/// # Examples
/// ```
/// use bf_ibe::{
///     construction::identity_based_encryption::{Authority, IBE},
///     utils::domain_parameters::DomainParameters,
/// };
///
/// let authority = Authority::new(DomainParameters::toy()).unwrap();
/// let pp = authority.public_parameters();
///
/// let cipher = authority.scheme().encrypt(pp, b"bob@mail.com", b"A").unwrap();
/// let sk = authority.extract(b"bob@mail.com").unwrap();
///
/// assert_eq!(b"A".to_vec(), authority.scheme().decrypt(pp, &sk, &cipher).unwrap());
/// ```
#[derive(Debug)]
pub struct Authority {
    scheme: BonehFranklinIBE,
    public_parameters: PublicParameters,
    master_secret: MasterSecret,
}

impl Authority {
    /// Validates the domain parameters and runs the setup.
    ///
    /// Returns the [`Authority`] or an [`IBEError::InvalidParameters`](crate::error::IBEError::InvalidParameters)
    /// if `domain` is invalid.
    pub fn new(domain: DomainParameters) -> IBEResult<Self> {
        let scheme = BonehFranklinIBE::new(domain)?;
        let (public_parameters, master_secret) = scheme.setup()?;
        info!("authority ready");

        Ok(Self {
            scheme,
            public_parameters,
            master_secret,
        })
    }

    pub fn scheme(&self) -> &BonehFranklinIBE {
        &self.scheme
    }

    /// Returns the public parameters to be distributed to all users.
    pub fn public_parameters(&self) -> &PublicParameters {
        &self.public_parameters
    }

    /// Extracts the private key of `identity`, see [`IBE::extract`].
    pub fn extract(&self, identity: &[u8]) -> IBEResult<PrivateKey> {
        self.scheme
            .extract(&self.public_parameters, &self.master_secret, identity)
    }
}

// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module provides the trait a struct should implement if it is an
//! instance of an identity based public key encryption scheme. Furthermore,
//! it contains cryptographic schemes implementing the `IBE` trait.

mod boneh_franklin;

pub use boneh_franklin::{
    check_order, map_to_point, Authority, BonehFranklinIBE, Ciphertext, MasterSecret,
    PrecomputedIdentity, PrivateKey, PublicParameters,
};

use crate::error::IBEResult;

/// This trait should be implemented by every identity based encryption scheme.
/// Identities and messages are arbitrary byte strings.
pub trait IBE {
    type MasterPublicKey;
    type MasterSecretKey;
    type SecretKey;
    type Cipher;

    fn setup(&self) -> IBEResult<(Self::MasterPublicKey, Self::MasterSecretKey)>;
    fn extract(
        &self,
        master_pk: &Self::MasterPublicKey,
        master_sk: &Self::MasterSecretKey,
        identity: &[u8],
    ) -> IBEResult<Self::SecretKey>;
    fn encrypt(
        &self,
        master_pk: &Self::MasterPublicKey,
        identity: &[u8],
        message: &[u8],
    ) -> IBEResult<Self::Cipher>;
    fn decrypt(
        &self,
        master_pk: &Self::MasterPublicKey,
        sk: &Self::SecretKey,
        cipher: &Self::Cipher,
    ) -> IBEResult<Vec<u8>>;
}

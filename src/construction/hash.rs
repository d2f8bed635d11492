// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains implementations of hash functions.

pub mod oracles;
pub mod sha512;

use crate::error::IBEResult;

/// This trait should be implemented by domains that byte strings can be hashed into.
pub trait HashInto<DigestSpace> {
    /// Hashes a given byte string.
    ///
    /// Parameters:
    /// - `m`: specifies the message to be hashed
    ///
    /// Returns a hash of type DigestSpace.
    fn hash(&self, m: &[u8]) -> IBEResult<DigestSpace>;
}

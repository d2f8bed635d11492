// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains cryptographic constructions built from the primitives
//! of this crate.
//! A construction is build the same way:
//!
//! 1. A trait that combines the common feature, e.g.
//! [`identity based encryption`](identity_based_encryption::IBE).
//! 2. Explicit implementations of the trait, e.g.
//! [`BonehFranklinIBE`](identity_based_encryption::BonehFranklinIBE).

pub mod hash;
pub mod identity_based_encryption;

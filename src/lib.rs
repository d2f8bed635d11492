// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This crate provides an identity based encryption scheme of the
//! Boneh-Franklin family together with the arithmetic it is built on:
//! prime and quadratic extension fields, the supersingular curve
//! `y^2 = x^3 + 1` and its modified Weil pairing.
//!
//! Any byte string, e.g. an email address, serves as public key. A trusted
//! [`Authority`](construction::identity_based_encryption::Authority) derives
//! the matching private keys from a single master secret.
//!
//! # Examples
//! ```
//! use bf_ibe::{
//!     construction::identity_based_encryption::{Authority, IBE},
//!     utils::domain_parameters::DomainParameters,
//! };
//!
//! let authority = Authority::new(DomainParameters::toy()).unwrap();
//! let pp = authority.public_parameters();
//! let ibe = authority.scheme();
//!
//! let cipher = ibe.encrypt(pp, b"bob@mail.com", b"Hello Bob!").unwrap();
//!
//! let sk = authority.extract(b"bob@mail.com").unwrap();
//! assert_eq!(b"Hello Bob!".to_vec(), ibe.decrypt(pp, &sk, &cipher).unwrap());
//! ```

pub mod construction;
pub mod error;
pub mod primitive;
pub mod utils;

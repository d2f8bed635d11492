// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains the error type shared by all constructions and
//! primitives of this crate.

use qfall_math::error::MathError;

/// Errors that can occur while setting up, extracting, encrypting or decrypting.
///
/// [`IBEError::InvalidIdentity`] and [`IBEError::CiphertextRejected`] are the
/// two outcomes a caller of the scheme has to expect during normal operation.
/// Neither is transient, retrying the same call yields the same result.
#[derive(Debug, thiserror::Error)]
pub enum IBEError {
    /// The identity is empty or its derived point does not have order `q`.
    #[error("invalid identity: the derived point does not have order q")]
    InvalidIdentity,

    /// The ciphertext failed the re-encryption check or does not match the
    /// public parameters.
    #[error("ciphertext rejected")]
    CiphertextRejected,

    #[error("invalid domain parameters: {0}")]
    InvalidParameters(String),

    /// Arithmetic faults detected by the curve and field engine itself.
    #[error("arithmetic fault: {0}")]
    Arithmetic(String),

    #[error(transparent)]
    Math(#[from] MathError),

    #[error("failed to parse domain parameters: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read domain parameters: {0}")]
    Io(#[from] std::io::Error),
}

pub type IBEResult<T> = Result<T, IBEError>;

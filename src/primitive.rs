// Copyright © 2026 The bf-ibe Contributors
//
// This file is part of bf-ibe.
//
// bf-ibe is free software: you can redistribute it and/or modify it under
// the terms of the Mozilla Public License Version 2.0 as published by the
// Mozilla Foundation. See <https://mozilla.org/en-US/MPL/2.0/>.

//! This module contains mathematical primitives that are useful for cryptographic
//! constructions/purposes, but themselves do not provide security guarantees like
//! confidentiality, integrity, ...

pub mod bit_string;
pub mod elliptic_curve;
pub mod field;

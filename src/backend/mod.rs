// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! JSON backend adapters and the candidate priority tables.
//!
//! This module provides one adapter per external JSON crate:
//! - [`sonic`] - sonic-rs adapter (feature `sonic-rs`)
//! - [`simd`] - simd-json adapter (feature `simd-json`)
//! - [`serde`] - serde_json adapter, always compiled; also supplies the
//!   guaranteed built-in encode tail
//! - [`availability`] - runtime enable/disable overrides
//!
//! The candidate tables ([`encoder_candidates`], [`decoder_candidates`]) are
//! the selection policy: a fixed, total priority order that resolution walks
//! first-match-wins. The encode table ends in a guaranteed built-in default;
//! the decode table has no guaranteed tail and may legitimately exhaust.

pub mod availability;
pub mod serde;
pub mod simd;
pub mod sonic;

use serde_json::Value;

use crate::core::Result;
use crate::resolve::Candidate;

/// Name of the sonic-rs backend.
pub const SONIC: &str = "sonic-rs";
/// Name of the simd-json backend.
pub const SIMD_JSON: &str = "simd-json";
/// Name of the probed serde_json backend.
pub const SERDE_JSON: &str = "serde-json";
/// Name of the guaranteed built-in encode tail.
pub const BUILTIN: &str = "builtin";

/// Common surface of installed backend routines.
pub trait BackendRoutine: Send + Sync {
    /// The fixed delegation expression this routine binds.
    ///
    /// Diagnostic only: traced when the routine is installed so the log
    /// records exactly what every future call will execute.
    fn describe(&self) -> &'static str;
}

/// An activated JSON encode backend.
///
/// The routine must be semantically equivalent to calling the backend crate
/// directly with its canonical default options (compact output, string keys,
/// strict JSON) - no additional transformation.
pub trait JsonEncoder: BackendRoutine {
    /// Encode a value to JSON text.
    fn encode(&self, value: &Value) -> Result<String>;
}

/// An activated JSON decode backend.
pub trait JsonDecoder: BackendRoutine {
    /// Decode JSON text to a value.
    ///
    /// Invalid input surfaces as
    /// [`MalformedInput`](crate::FastJsonError::MalformedInput); it is never
    /// retried against another backend.
    fn decode(&self, input: &str) -> Result<Value>;
}

/// An encode-direction candidate.
pub type EncoderCandidate = Candidate<dyn JsonEncoder>;

/// A decode-direction candidate.
pub type DecoderCandidate = Candidate<dyn JsonDecoder>;

/// The encode candidate table, fastest first.
///
/// The tail is a guaranteed built-in default, so encode resolution cannot
/// normally exhaust.
pub fn encoder_candidates() -> Vec<EncoderCandidate> {
    vec![
        Candidate::probed(SONIC, sonic::encoder),
        Candidate::probed(SIMD_JSON, simd::encoder),
        Candidate::probed(SERDE_JSON, serde::encoder),
        Candidate::guaranteed(BUILTIN, serde::builtin_encoder),
    ]
}

/// The decode candidate table, fastest first.
///
/// No guaranteed tail: with every backend unavailable, decode resolution
/// exhausts and the call fails.
pub fn decoder_candidates() -> Vec<DecoderCandidate> {
    vec![
        Candidate::probed(SONIC, sonic::decoder),
        Candidate::probed(SIMD_JSON, simd::decoder),
        Candidate::probed(SERDE_JSON, serde::decoder),
    ]
}

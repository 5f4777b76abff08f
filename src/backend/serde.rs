// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! serde_json adapter.
//!
//! serde_json is a non-optional dependency (it also supplies the `Value`
//! interchange type), so it plays two roles in the encode chain: the probed
//! `serde-json` candidate, which a runtime override can remove, and the
//! guaranteed `builtin` tail, which cannot be removed and keeps encode from
//! ever exhausting.

use serde_json::Value;

use super::{BackendRoutine, JsonDecoder, JsonEncoder, BUILTIN, SERDE_JSON};
use crate::core::{FastJsonError, Result};
use crate::resolve::ActivationResult;

/// Probed serde_json encoder (compact output).
pub struct SerdeJsonEncoder;

impl BackendRoutine for SerdeJsonEncoder {
    fn describe(&self) -> &'static str {
        "serde_json::to_string(value)"
    }
}

impl JsonEncoder for SerdeJsonEncoder {
    fn encode(&self, value: &Value) -> Result<String> {
        serde_json::to_string(value)
            .map_err(|e| FastJsonError::encode_failed(SERDE_JSON, e.to_string()))
    }
}

/// Probed serde_json decoder (strict JSON, string keys).
pub struct SerdeJsonDecoder;

impl BackendRoutine for SerdeJsonDecoder {
    fn describe(&self) -> &'static str {
        "serde_json::from_str(string)"
    }
}

impl JsonDecoder for SerdeJsonDecoder {
    fn decode(&self, input: &str) -> Result<Value> {
        serde_json::from_str(input).map_err(|e| FastJsonError::malformed(SERDE_JSON, e.to_string()))
    }
}

/// Guaranteed built-in encoder.
///
/// Same delegate as [`SerdeJsonEncoder`], distinct identity: this one sits
/// at the tail of the encode chain, is never probed, and cannot be disabled.
pub struct BuiltinEncoder;

impl BackendRoutine for BuiltinEncoder {
    fn describe(&self) -> &'static str {
        "serde_json::to_string(value)"
    }
}

impl JsonEncoder for BuiltinEncoder {
    fn encode(&self, value: &Value) -> Result<String> {
        serde_json::to_string(value).map_err(|e| FastJsonError::encode_failed(BUILTIN, e.to_string()))
    }
}

/// Activation step for the probed encode candidate.
pub fn encoder() -> ActivationResult<dyn JsonEncoder> {
    Ok(Box::new(SerdeJsonEncoder))
}

/// Activation step for the probed decode candidate.
pub fn decoder() -> ActivationResult<dyn JsonDecoder> {
    Ok(Box::new(SerdeJsonDecoder))
}

/// Activation step for the guaranteed encode tail.
///
/// Reaching it means every third-party encoder was unavailable; worth a
/// warning since the host is paying for a facade that selected the slowest
/// option.
pub fn builtin_encoder() -> ActivationResult<dyn JsonEncoder> {
    tracing::warn!(
        target: "fastjson",
        "no third-party JSON encoder available; falling back to the built-in serde_json encoder"
    );
    Ok(Box::new(BuiltinEncoder))
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! simd-json adapter (feature `simd-json`).
//!
//! simd-json parses in place, so the decode routine copies the input into a
//! scratch buffer before handing it over. The copy is the price of keeping
//! the facade's `&str` surface; callers holding mutable buffers should use
//! the crate directly.

use super::{JsonDecoder, JsonEncoder};
use crate::resolve::ActivationResult;

#[cfg(feature = "simd-json")]
mod imp {
    use serde_json::Value;

    use crate::backend::{BackendRoutine, JsonDecoder, JsonEncoder, SIMD_JSON};
    use crate::core::{FastJsonError, Result};

    pub struct SimdJsonEncoder;

    impl BackendRoutine for SimdJsonEncoder {
        fn describe(&self) -> &'static str {
            "simd_json::to_string(value)"
        }
    }

    impl JsonEncoder for SimdJsonEncoder {
        fn encode(&self, value: &Value) -> Result<String> {
            simd_json::to_string(value)
                .map_err(|e| FastJsonError::encode_failed(SIMD_JSON, e.to_string()))
        }
    }

    pub struct SimdJsonDecoder;

    impl BackendRoutine for SimdJsonDecoder {
        fn describe(&self) -> &'static str {
            "simd_json::from_slice(&mut string.into_bytes())"
        }
    }

    impl JsonDecoder for SimdJsonDecoder {
        fn decode(&self, input: &str) -> Result<Value> {
            let mut bytes = input.as_bytes().to_vec();
            simd_json::from_slice(&mut bytes)
                .map_err(|e| FastJsonError::malformed(SIMD_JSON, e.to_string()))
        }
    }
}

/// Activation step for the encode candidate.
#[cfg(feature = "simd-json")]
pub fn encoder() -> ActivationResult<dyn JsonEncoder> {
    Ok(Box::new(imp::SimdJsonEncoder))
}

/// Activation step for the encode candidate.
#[cfg(not(feature = "simd-json"))]
pub fn encoder() -> ActivationResult<dyn JsonEncoder> {
    Err(crate::core::Unavailable::not_compiled(super::SIMD_JSON))
}

/// Activation step for the decode candidate.
#[cfg(feature = "simd-json")]
pub fn decoder() -> ActivationResult<dyn JsonDecoder> {
    Ok(Box::new(imp::SimdJsonDecoder))
}

/// Activation step for the decode candidate.
#[cfg(not(feature = "simd-json"))]
pub fn decoder() -> ActivationResult<dyn JsonDecoder> {
    Err(crate::core::Unavailable::not_compiled(super::SIMD_JSON))
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! sonic-rs adapter (feature `sonic-rs`).
//!
//! Highest-priority backend in both directions. The activation functions are
//! compiled unconditionally; without the feature they report the backend as
//! not compiled in, which resolution treats as an ordinary fallback step.

use super::{JsonDecoder, JsonEncoder};
use crate::resolve::ActivationResult;

#[cfg(feature = "sonic-rs")]
mod imp {
    use serde_json::Value;

    use crate::backend::{BackendRoutine, JsonDecoder, JsonEncoder, SONIC};
    use crate::core::{FastJsonError, Result};

    pub struct SonicEncoder;

    impl BackendRoutine for SonicEncoder {
        fn describe(&self) -> &'static str {
            "sonic_rs::to_string(value)"
        }
    }

    impl JsonEncoder for SonicEncoder {
        fn encode(&self, value: &Value) -> Result<String> {
            sonic_rs::to_string(value).map_err(|e| FastJsonError::encode_failed(SONIC, e.to_string()))
        }
    }

    pub struct SonicDecoder;

    impl BackendRoutine for SonicDecoder {
        fn describe(&self) -> &'static str {
            "sonic_rs::from_str(string)"
        }
    }

    impl JsonDecoder for SonicDecoder {
        fn decode(&self, input: &str) -> Result<Value> {
            sonic_rs::from_str(input).map_err(|e| FastJsonError::malformed(SONIC, e.to_string()))
        }
    }
}

/// Activation step for the encode candidate.
#[cfg(feature = "sonic-rs")]
pub fn encoder() -> ActivationResult<dyn JsonEncoder> {
    Ok(Box::new(imp::SonicEncoder))
}

/// Activation step for the encode candidate.
#[cfg(not(feature = "sonic-rs"))]
pub fn encoder() -> ActivationResult<dyn JsonEncoder> {
    Err(crate::core::Unavailable::not_compiled(super::SONIC))
}

/// Activation step for the decode candidate.
#[cfg(feature = "sonic-rs")]
pub fn decoder() -> ActivationResult<dyn JsonDecoder> {
    Ok(Box::new(imp::SonicDecoder))
}

/// Activation step for the decode candidate.
#[cfg(not(feature = "sonic-rs"))]
pub fn decoder() -> ActivationResult<dyn JsonDecoder> {
    Err(crate::core::Unavailable::not_compiled(super::SONIC))
}

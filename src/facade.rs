// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Resolution cache and public facade.
//!
//! [`JsonFacade`] owns one candidate table and one cache slot per direction.
//! The first call in a direction resolves and installs a routine under the
//! slot's write lock (so concurrent first callers never duplicate resolution
//! work); every later call clones the installed `Arc` out of the read lock
//! and delegates. An explicit reset clears one slot without touching the
//! other.
//!
//! A process-wide facade behind [`global`] backs the free functions
//! re-exported at the crate root.

use std::sync::{Arc, OnceLock, RwLock};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::backend::{
    decoder_candidates, encoder_candidates, DecoderCandidate, EncoderCandidate, JsonDecoder,
    JsonEncoder,
};
use crate::core::{Direction, FastJsonError, Result};
use crate::logging::log_sink;
use crate::resolve::{install, resolve, Installed};

type Slot<B> = RwLock<Option<Arc<Installed<B>>>>;

/// JSON codec facade with per-direction resolution caches.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use fastjson::JsonFacade;
///
/// let facade = JsonFacade::new();
/// let text = facade.to_json(&serde_json::json!({"fast": "encoding"}))?;
/// let value = facade.from_json(&text)?;
/// # Ok(())
/// # }
/// ```
pub struct JsonFacade {
    encode_candidates: Vec<EncoderCandidate>,
    decode_candidates: Vec<DecoderCandidate>,
    encoder: Slot<dyn JsonEncoder>,
    decoder: Slot<dyn JsonDecoder>,
}

impl JsonFacade {
    /// Create a facade over the default candidate tables.
    pub fn new() -> Self {
        Self::with_candidates(encoder_candidates(), decoder_candidates())
    }

    /// Create a facade over custom candidate tables.
    ///
    /// Intended for embedders and test harnesses that need to control the
    /// simulated environment; the default tables are the supported selection
    /// policy.
    pub fn with_candidates(
        encode_candidates: Vec<EncoderCandidate>,
        decode_candidates: Vec<DecoderCandidate>,
    ) -> Self {
        JsonFacade {
            encode_candidates,
            decode_candidates,
            encoder: RwLock::new(None),
            decoder: RwLock::new(None),
        }
    }

    /// Encode a value to JSON text using the cached encode routine,
    /// resolving one on first use.
    ///
    /// # Errors
    ///
    /// - [`FastJsonError::InvalidValue`] if the value cannot be represented
    ///   as JSON
    /// - [`FastJsonError::NoBackendAvailable`] if the encode table exhausts
    ///   (unreachable with the default tables, which end in a guaranteed
    ///   built-in)
    /// - [`FastJsonError::EncodeFailed`] if the active backend fails
    pub fn to_json<T>(&self, value: &T) -> Result<String>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(value).map_err(|e| FastJsonError::invalid_value(e.to_string()))?;
        self.encoder()?.routine().encode(&value)
    }

    /// Decode JSON text to a value using the cached decode routine,
    /// resolving one on first use.
    ///
    /// # Errors
    ///
    /// - [`FastJsonError::NoBackendAvailable`] if every decode candidate is
    ///   unavailable
    /// - [`FastJsonError::MalformedInput`] if the active backend rejects the
    ///   input
    pub fn from_json(&self, input: &str) -> Result<Value> {
        self.decoder()?.routine().decode(input)
    }

    /// Decode JSON text directly into a deserializable type.
    ///
    /// Decoding goes through the facade's active backend; the resulting
    /// value is then shaped into `T`. A shape mismatch surfaces as
    /// [`FastJsonError::InvalidValue`] (the input was valid JSON, the value
    /// did not fit `T`).
    pub fn from_json_as<T: DeserializeOwned>(&self, input: &str) -> Result<T> {
        let value = self.from_json(input)?;
        serde_json::from_value(value).map_err(|e| FastJsonError::invalid_value(e.to_string()))
    }

    /// Clear the cached encode routine; the next encode re-resolves.
    ///
    /// A reset with nothing installed is a no-op.
    pub fn reset_encoder(&self) {
        let mut slot = self.encoder.write().unwrap_or_else(|e| e.into_inner());
        if let Some(installed) = slot.take() {
            log_sink().debug(&|| {
                format!("reset encode routine (was backend='{}')", installed.name())
            });
        }
    }

    /// Clear the cached decode routine; the next decode re-resolves.
    ///
    /// A reset with nothing installed is a no-op.
    pub fn reset_decoder(&self) {
        let mut slot = self.decoder.write().unwrap_or_else(|e| e.into_inner());
        if let Some(installed) = slot.take() {
            log_sink().debug(&|| {
                format!("reset decode routine (was backend='{}')", installed.name())
            });
        }
    }

    /// Name of the currently installed encode backend, if resolved.
    pub fn encoder_name(&self) -> Option<&'static str> {
        let slot = self.encoder.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|installed| installed.name())
    }

    /// Name of the currently installed decode backend, if resolved.
    pub fn decoder_name(&self) -> Option<&'static str> {
        let slot = self.decoder.read().unwrap_or_else(|e| e.into_inner());
        slot.as_ref().map(|installed| installed.name())
    }

    fn encoder(&self) -> Result<Arc<Installed<dyn JsonEncoder>>> {
        {
            let slot = self.encoder.read().unwrap_or_else(|e| e.into_inner());
            if let Some(installed) = slot.as_ref() {
                return Ok(installed.clone());
            }
        }

        let mut slot = self.encoder.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have resolved while we waited for the lock.
        if let Some(installed) = slot.as_ref() {
            return Ok(installed.clone());
        }
        let selected = resolve(Direction::Encode, &self.encode_candidates)?;
        let installed = install(Direction::Encode, selected);
        *slot = Some(installed.clone());
        Ok(installed)
    }

    fn decoder(&self) -> Result<Arc<Installed<dyn JsonDecoder>>> {
        {
            let slot = self.decoder.read().unwrap_or_else(|e| e.into_inner());
            if let Some(installed) = slot.as_ref() {
                return Ok(installed.clone());
            }
        }

        let mut slot = self.decoder.write().unwrap_or_else(|e| e.into_inner());
        if let Some(installed) = slot.as_ref() {
            return Ok(installed.clone());
        }
        let selected = resolve(Direction::Decode, &self.decode_candidates)?;
        let installed = install(Direction::Decode, selected);
        *slot = Some(installed.clone());
        Ok(installed)
    }
}

impl Default for JsonFacade {
    fn default() -> Self {
        Self::new()
    }
}

/// Global facade.
///
/// This is a convenience singleton backing the crate-root free functions.
/// For custom candidate tables, create a `JsonFacade` instance directly.
static GLOBAL: OnceLock<JsonFacade> = OnceLock::new();

/// Get the global facade.
pub fn global() -> &'static JsonFacade {
    GLOBAL.get_or_init(JsonFacade::new)
}

/// Encode a value to JSON text via the global facade.
pub fn to_json<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    global().to_json(value)
}

/// Decode JSON text to a value via the global facade.
pub fn from_json(input: &str) -> Result<Value> {
    global().from_json(input)
}

/// Decode JSON text into a deserializable type via the global facade.
pub fn from_json_as<T: DeserializeOwned>(input: &str) -> Result<T> {
    global().from_json_as(input)
}

/// Clear the global facade's cached encode routine.
pub fn reset_encoder() {
    global().reset_encoder()
}

/// Clear the global facade's cached decode routine.
pub fn reset_decoder() {
    global().reset_decoder()
}

/// Name of the global facade's installed encode backend, if resolved.
pub fn encoder_name() -> Option<&'static str> {
    global().encoder_name()
}

/// Name of the global facade's installed decode backend, if resolved.
pub fn decoder_name() -> Option<&'static str> {
    global().decoder_name()
}

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for fastjson.
//!
//! Two layers of failure exist and must not be confused:
//! - [`Unavailable`] - a candidate backend could not be activated; consumed
//!   inside the fallback chain and never surfaced to callers directly
//! - [`FastJsonError`] - failures that cross the public boundary

use std::fmt;

use super::Direction;

/// Errors surfaced by the fastjson facade.
#[derive(Debug, Clone)]
pub enum FastJsonError {
    /// Every candidate in a direction was unavailable
    NoBackendAvailable {
        /// Direction whose candidate list was exhausted
        direction: Direction,
        /// Last recorded unavailability
        cause: String,
    },

    /// The active decode backend rejected the input as invalid JSON
    MalformedInput {
        /// Backend that rejected the input
        backend: &'static str,
        /// Backend-reported parse error
        message: String,
    },

    /// A successfully activated backend failed while encoding
    EncodeFailed {
        /// Backend that failed
        backend: &'static str,
        /// Backend-reported error
        message: String,
    },

    /// Value cannot be represented as JSON (e.g. a map with non-string keys)
    InvalidValue {
        /// Conversion error message
        message: String,
    },

    /// Other error
    Other(String),
}

impl FastJsonError {
    /// Create a "no backend available" error for a direction.
    pub fn no_backend(direction: Direction, cause: impl Into<String>) -> Self {
        FastJsonError::NoBackendAvailable {
            direction,
            cause: cause.into(),
        }
    }

    /// Create a malformed-input error.
    pub fn malformed(backend: &'static str, message: impl Into<String>) -> Self {
        FastJsonError::MalformedInput {
            backend,
            message: message.into(),
        }
    }

    /// Create an encode failure error.
    pub fn encode_failed(backend: &'static str, message: impl Into<String>) -> Self {
        FastJsonError::EncodeFailed {
            backend,
            message: message.into(),
        }
    }

    /// Create an invalid-value error.
    pub fn invalid_value(message: impl Into<String>) -> Self {
        FastJsonError::InvalidValue {
            message: message.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            FastJsonError::NoBackendAvailable { direction, cause } => vec![
                ("direction", direction.as_str().to_string()),
                ("cause", cause.clone()),
            ],
            FastJsonError::MalformedInput { backend, message } => vec![
                ("backend", backend.to_string()),
                ("message", message.clone()),
            ],
            FastJsonError::EncodeFailed { backend, message } => vec![
                ("backend", backend.to_string()),
                ("message", message.clone()),
            ],
            FastJsonError::InvalidValue { message } => vec![("message", message.clone())],
            FastJsonError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl fmt::Display for FastJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FastJsonError::NoBackendAvailable { direction, cause } => {
                write!(
                    f,
                    "No JSON {} backend available: {cause}",
                    direction.as_str()
                )
            }
            FastJsonError::MalformedInput { backend, message } => {
                write!(f, "Malformed JSON input rejected by '{backend}': {message}")
            }
            FastJsonError::EncodeFailed { backend, message } => {
                write!(f, "Backend '{backend}' failed to encode value: {message}")
            }
            FastJsonError::InvalidValue { message } => {
                write!(f, "Value cannot be represented as JSON: {message}")
            }
            FastJsonError::Other(msg) => write!(f, "Other error: {msg}"),
        }
    }
}

impl std::error::Error for FastJsonError {}

/// Result type for fastjson operations.
pub type Result<T> = std::result::Result<T, FastJsonError>;

/// A candidate backend could not be activated.
///
/// This is the only failure that drives fallback: anything else raised by an
/// activated backend propagates unchanged. It is deliberately not a
/// [`FastJsonError`] variant - unavailability is an expected branch of
/// control flow inside resolution, not a caller-visible error.
#[derive(Debug, Clone)]
pub struct Unavailable {
    /// Name of the backend that could not be activated
    pub backend: &'static str,
    /// Why activation failed
    pub reason: String,
}

impl Unavailable {
    /// The backend crate was not compiled into this build.
    pub fn not_compiled(backend: &'static str) -> Self {
        Unavailable {
            backend,
            reason: format!("not compiled in (enable the `{backend}` feature)"),
        }
    }

    /// The backend was disabled at runtime.
    pub fn disabled(backend: &'static str) -> Self {
        Unavailable {
            backend,
            reason: "disabled at runtime".to_string(),
        }
    }

    /// Activation failed for a backend-specific reason.
    pub fn with_reason(backend: &'static str, reason: impl Into<String>) -> Self {
        Unavailable {
            backend,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "backend '{}' unavailable: {}", self.backend, self.reason)
    }
}

impl std::error::Error for Unavailable {}

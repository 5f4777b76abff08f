// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # fastjson
//!
//! JSON codec facade that selects the fastest available JSON backend at
//! runtime, installs a delegating routine once per process, and serves every
//! later call from the cached routine.
//!
//! This library never parses or emits JSON bytes itself - it decides *which*
//! external backend to invoke and exposes a single uniform call surface over
//! it:
//! - **Resolution** in [`resolve`] - ordered candidate probing,
//!   first-match-wins, progressive fallback on unavailability
//! - **Backends** in [`backend`] - one adapter per external JSON crate plus
//!   the candidate priority tables and runtime availability overrides
//! - **Facade** in [`facade`] - per-direction resolution caches, reset, and
//!   the global call surface
//! - **Diagnostics** in [`logging`] - replaceable debug-trace sink, no-op by
//!   default
//!
//! ## Backend selection
//!
//! Candidates are probed in a fixed priority order per direction:
//!
//! | Direction | Priority order |
//! |---|---|
//! | encode | `sonic-rs` → `simd-json` → `serde-json` → `builtin` (guaranteed) |
//! | decode | `sonic-rs` → `simd-json` → `serde-json` |
//!
//! `sonic-rs` and `simd-json` are optional backends behind the Cargo
//! features of the same names; a compiled-in backend can additionally be
//! disabled at runtime (see [`backend::availability`]). The encode chain
//! ends in a guaranteed built-in, so encoding always finds a backend; the
//! decode chain has no guaranteed tail and fails with
//! [`FastJsonError::NoBackendAvailable`] when every candidate is out.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = fastjson::to_json(&serde_json::json!({"fast": "encoding"}))?;
//! let value = fastjson::from_json(&text)?;
//! assert_eq!(value["fast"], "encoding");
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

// Re-export core types for convenience
pub use core::{Direction, FastJsonError, Result, Unavailable};

// Diagnostic sink collaborator
pub mod logging;

pub use logging::{log_sink, set_log_sink, LogSink, NullSink, TracingSink};

// Backend adapters, priority tables, availability overrides
pub mod backend;

pub use backend::{BackendRoutine, DecoderCandidate, EncoderCandidate, JsonDecoder, JsonEncoder};

// Backend resolution engine
pub mod resolve;

pub use resolve::{Candidate, Installed, Selected};

// Resolution cache and public facade
pub mod facade;

pub use facade::{
    decoder_name, encoder_name, from_json, from_json_as, global, reset_decoder, reset_encoder,
    to_json, JsonFacade,
};

// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, OnceLock};

use fastjson::backend::availability;

// ============================================================================
// Process-wide state serialization
// ============================================================================

/// Serialize tests that touch process-wide state: the runtime availability
/// overrides, the global facade, and the log sink.
///
/// The test harness runs tests on parallel threads; every test that mutates
/// shared state must hold this lock for its full body.
pub fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

// ============================================================================
// Availability guards
// ============================================================================

/// Disable a backend for the guard's lifetime.
pub struct DisabledBackend(&'static str);

impl DisabledBackend {
    pub fn new(backend: &'static str) -> Self {
        availability::disable(backend);
        DisabledBackend(backend)
    }
}

impl Drop for DisabledBackend {
    fn drop(&mut self) {
        availability::restore(self.0);
    }
}

/// Disable every probed backend in both default tables.
pub fn disable_all_probed() -> Vec<DisabledBackend> {
    vec![
        DisabledBackend::new(fastjson::backend::SONIC),
        DisabledBackend::new(fastjson::backend::SIMD_JSON),
        DisabledBackend::new(fastjson::backend::SERDE_JSON),
    ]
}

/// The highest-priority backend compiled into this build, in table order.
pub fn best_compiled_backend() -> &'static str {
    if cfg!(feature = "sonic-rs") {
        fastjson::backend::SONIC
    } else if cfg!(feature = "simd-json") {
        fastjson::backend::SIMD_JSON
    } else {
        fastjson::backend::SERDE_JSON
    }
}

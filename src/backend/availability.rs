// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Runtime backend availability overrides.
//!
//! Whether a backend is available has two layers: the backend crate is
//! compiled in (Cargo feature), and a compiled-in backend may additionally be
//! disabled here at runtime - to force a probed candidate out of the chain
//! without rebuilding, or to simulate environments in tests.
//!
//! The override set is seeded once from the `FASTJSON_DISABLE` environment
//! variable (comma-separated backend names) and then adjusted through
//! [`disable`] / [`restore`].

use std::collections::HashSet;
use std::sync::{OnceLock, RwLock};

/// Environment variable listing backends to disable at startup.
pub const DISABLE_ENV: &str = "FASTJSON_DISABLE";

static OVERRIDES: OnceLock<RwLock<HashSet<String>>> = OnceLock::new();

fn overrides() -> &'static RwLock<HashSet<String>> {
    OVERRIDES.get_or_init(|| RwLock::new(seed_from_env()))
}

fn seed_from_env() -> HashSet<String> {
    match std::env::var(DISABLE_ENV) {
        Ok(value) => value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => HashSet::new(),
    }
}

/// Disable a backend at runtime.
///
/// Probed candidates with this name report unavailable until [`restore`]d.
/// Returns `true` if the backend was not already disabled.
pub fn disable(backend: &str) -> bool {
    let mut set = overrides().write().unwrap_or_else(|e| e.into_inner());
    set.insert(backend.to_string())
}

/// Remove a runtime disable for a backend.
///
/// Returns `true` if the backend was disabled, `false` if not found.
/// Restoring a backend that was never disabled is a no-op.
pub fn restore(backend: &str) -> bool {
    let mut set = overrides().write().unwrap_or_else(|e| e.into_inner());
    set.remove(backend)
}

/// Check whether a backend is currently disabled.
pub fn is_disabled(backend: &str) -> bool {
    let set = overrides().read().unwrap_or_else(|e| e.into_inner());
    set.contains(backend)
}

/// Get all currently disabled backend names, sorted.
pub fn disabled_backends() -> Vec<String> {
    let set = overrides().read().unwrap_or_else(|e| e.into_inner());
    let mut names: Vec<String> = set.iter().cloned().collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests use names no real candidate table carries, so they stay
    // independent of every other test in the binary.

    #[test]
    fn test_disable_and_restore() {
        assert!(!is_disabled("availability-test-a"));
        assert!(disable("availability-test-a"));
        assert!(is_disabled("availability-test-a"));
        assert!(restore("availability-test-a"));
        assert!(!is_disabled("availability-test-a"));
    }

    #[test]
    fn test_disable_twice() {
        assert!(disable("availability-test-b"));
        assert!(!disable("availability-test-b"));
        restore("availability-test-b");
    }

    #[test]
    fn test_restore_unknown_is_noop() {
        assert!(!restore("availability-test-never-disabled"));
    }

    #[test]
    fn test_disabled_backends_sorted() {
        disable("availability-test-z");
        disable("availability-test-y");
        let names = disabled_backends();
        let z = names
            .iter()
            .position(|n| n == "availability-test-z")
            .unwrap();
        let y = names
            .iter()
            .position(|n| n == "availability-test-y")
            .unwrap();
        assert!(y < z);
        restore("availability-test-z");
        restore("availability-test-y");
    }
}

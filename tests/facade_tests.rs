// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Facade integration tests.
//!
//! Tests cover:
//! - Round-tripping values through whichever backend is active
//! - The global facade free functions and their resets
//! - Diagnostic traces emitted during resolution and installation
//! - Concurrent use of a shared facade

mod common;

use std::sync::{Arc, Mutex};

use common::env_lock;
use fastjson::{JsonFacade, LogSink, NullSink};
use serde::{Deserialize, Serialize};
use serde_json::json;

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn round_trip_matches_canonical_decoding() {
    let _guard = env_lock();
    let facade = JsonFacade::new();

    let value = json!({"fast": "encoding"});
    let encoded = facade.to_json(&value).unwrap();
    let round_tripped = facade.from_json(&encoded).unwrap();
    let canonical = facade.from_json(r#"{"fast":"encoding"}"#).unwrap();

    assert_eq!(round_tripped, canonical);
}

#[test]
fn encode_output_is_compact() {
    let _guard = env_lock();
    let facade = JsonFacade::new();

    let text = facade.to_json(&json!({"fast": "encoding"})).unwrap();
    assert_eq!(text, r#"{"fast":"encoding"}"#);
}

#[test]
fn round_trip_nested_value() {
    let _guard = env_lock();
    let facade = JsonFacade::new();

    let value = json!({
        "topics": ["/imu", "/odom"],
        "rates": [100, 50],
        "metadata": {"source": null, "compressed": false},
    });
    let decoded = facade.from_json(&facade.to_json(&value).unwrap()).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn serializable_types_round_trip_through_the_facade() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct ChannelInfo {
        topic: String,
        message_count: u64,
    }

    let _guard = env_lock();
    let facade = JsonFacade::new();

    let info = ChannelInfo {
        topic: "/imu".to_string(),
        message_count: 42,
    };
    let text = facade.to_json(&info).unwrap();
    let back: ChannelInfo = facade.from_json_as(&text).unwrap();
    assert_eq!(back, info);
}

// ============================================================================
// Global facade
// ============================================================================

#[test]
fn global_free_functions_share_one_cache() {
    let _guard = env_lock();

    let text = fastjson::to_json(&json!({"fast": "encoding"})).unwrap();
    assert_eq!(fastjson::from_json(&text).unwrap(), json!({"fast": "encoding"}));
    assert!(fastjson::encoder_name().is_some());
    assert!(fastjson::decoder_name().is_some());

    fastjson::reset_encoder();
    fastjson::reset_decoder();
    assert_eq!(fastjson::encoder_name(), None);
    assert_eq!(fastjson::decoder_name(), None);

    // Resetting an empty slot is a no-op, and the next call re-resolves.
    fastjson::reset_encoder();
    assert_eq!(fastjson::to_json(&json!([1, 2])).unwrap(), "[1,2]");
}

// ============================================================================
// Diagnostics
// ============================================================================

struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl LogSink for CaptureSink {
    fn debug(&self, message: &dyn Fn() -> String) {
        self.lines.lock().unwrap().push(message());
    }
}

#[test]
fn installation_is_traced_with_backend_and_delegate() {
    let _guard = env_lock();

    let capture = Arc::new(CaptureSink {
        lines: Mutex::new(Vec::new()),
    });
    fastjson::set_log_sink(capture.clone());

    let facade = JsonFacade::new();
    facade.to_json(&json!(1)).unwrap();
    facade.reset_encoder();

    fastjson::set_log_sink(Arc::new(NullSink));

    let lines = capture.lines.lock().unwrap();
    let installed = lines
        .iter()
        .find(|l| l.starts_with("installing encode backend="))
        .expect("installation trace missing");
    assert!(installed.contains("delegate="));
    assert!(lines.iter().any(|l| l.starts_with("reset encode routine")));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn concurrent_calls_share_one_installed_routine() {
    use std::thread;

    let _guard = env_lock();
    let facade = Arc::new(JsonFacade::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let facade = facade.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    let value = json!({"seq": i});
                    let text = facade.to_json(&value).unwrap();
                    assert_eq!(facade.from_json(&text).unwrap(), value);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(facade.encoder_name(), Some(common::best_compiled_backend()));
    assert_eq!(facade.decoder_name(), Some(common::best_compiled_backend()));
}

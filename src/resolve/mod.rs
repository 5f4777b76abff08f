// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Backend resolution: ordered candidate probing with first-match-wins.
//!
//! This module is the core of the crate:
//! - [`Candidate`] - one backend's (name, activation step) pair
//! - [`resolve`] - walk a candidate list strictly in priority order and
//!   return the first backend that activates
//! - [`install`] - wrap a resolution winner into the cache-ready routine,
//!   tracing what was bound
//!
//! Unavailability is an ordinary value ([`Unavailable`]), not an exception:
//! the chain falls back only on it. Any error raised by a backend that *did*
//! activate propagates unchanged - "present but erroring" is never treated
//! as "absent".

use std::sync::Arc;

use crate::backend::BackendRoutine;
use crate::core::{Direction, FastJsonError, Result, Unavailable};
use crate::logging::log_sink;

/// Result of one candidate's activation step.
pub type ActivationResult<B> = std::result::Result<Box<B>, Unavailable>;

/// One prioritized backend candidate for a direction.
///
/// A candidate pairs a backend name with an activation step that either
/// yields a ready-to-use routine or reports [`Unavailable`]. Probed
/// candidates additionally consult the runtime override set before
/// activating; guaranteed candidates (the built-in encode tail) bypass it
/// and must never fail.
pub struct Candidate<B: ?Sized> {
    name: &'static str,
    guaranteed: bool,
    activation: Box<dyn Fn() -> ActivationResult<B> + Send + Sync>,
}

impl<B: ?Sized> Candidate<B> {
    /// Create a probed candidate.
    ///
    /// The runtime override set is checked on every activation attempt, so a
    /// backend disabled between resolutions drops out of the chain on the
    /// next resolve.
    pub fn probed<F>(name: &'static str, activation: F) -> Self
    where
        F: Fn() -> ActivationResult<B> + Send + Sync + 'static,
    {
        Candidate {
            name,
            guaranteed: false,
            activation: Box::new(activation),
        }
    }

    /// Create a guaranteed candidate.
    ///
    /// Guaranteed candidates skip the override check; their activation step
    /// is expected to be infallible.
    pub fn guaranteed<F>(name: &'static str, activation: F) -> Self
    where
        F: Fn() -> ActivationResult<B> + Send + Sync + 'static,
    {
        Candidate {
            name,
            guaranteed: true,
            activation: Box::new(activation),
        }
    }

    /// Get the backend name this candidate activates.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this candidate bypasses the runtime override set.
    pub fn is_guaranteed(&self) -> bool {
        self.guaranteed
    }

    /// Run this candidate's probe.
    pub fn activate(&self) -> ActivationResult<B> {
        if !self.guaranteed && crate::backend::availability::is_disabled(self.name) {
            return Err(Unavailable::disabled(self.name));
        }
        (self.activation)()
    }
}

impl<B: ?Sized> std::fmt::Debug for Candidate<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("name", &self.name)
            .field("guaranteed", &self.guaranteed)
            .finish()
    }
}

/// A resolution winner: the first candidate that activated.
pub struct Selected<B: ?Sized> {
    /// Name of the winning backend
    pub name: &'static str,
    /// The activated backend routine
    pub backend: Box<B>,
}

impl<B: ?Sized> std::fmt::Debug for Selected<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Selected").field("name", &self.name).finish()
    }
}

/// An installed, cache-ready routine bound after resolution.
///
/// Its identity is opaque to callers; only its encode/decode behavior (and
/// the backend name, for introspection) is observable.
pub struct Installed<B: ?Sized> {
    name: &'static str,
    routine: Box<B>,
}

impl<B: ?Sized> Installed<B> {
    /// Name of the backend this routine delegates to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The bound routine.
    pub fn routine(&self) -> &B {
        &self.routine
    }
}

/// Walk a candidate list strictly in priority order and return the first
/// backend that activates.
///
/// # Arguments
///
/// * `direction` - Direction being resolved (diagnostics and error context)
/// * `candidates` - Ordered candidate list; earlier entries win
///
/// # Errors
///
/// Returns [`FastJsonError::NoBackendAvailable`] carrying the *last*
/// recorded unavailability when every candidate fails, or a fixed cause when
/// the list is empty. No later candidate is probed once one succeeds.
pub fn resolve<B: ?Sized>(direction: Direction, candidates: &[Candidate<B>]) -> Result<Selected<B>> {
    let mut last: Option<Unavailable> = None;

    for candidate in candidates {
        match candidate.activate() {
            Ok(backend) => {
                log_sink().debug(&|| {
                    format!("{direction} backend '{}' activated", candidate.name())
                });
                return Ok(Selected {
                    name: candidate.name(),
                    backend,
                });
            }
            Err(unavailable) => {
                log_sink().debug(&|| format!("{direction} {unavailable}"));
                last = Some(unavailable);
            }
        }
    }

    let cause = match last {
        Some(unavailable) => unavailable.to_string(),
        None => "no candidates registered".to_string(),
    };
    Err(FastJsonError::no_backend(direction, cause))
}

/// Bind a resolution winner into the routine the cache will serve.
///
/// Emits the debug trace naming the backend and the delegation expression it
/// binds *before* the routine is published to the cache slot.
pub fn install<B>(direction: Direction, selected: Selected<B>) -> Arc<Installed<B>>
where
    B: ?Sized + BackendRoutine,
{
    log_sink().debug(&|| {
        format!(
            "installing {direction} backend='{}' delegate={}",
            selected.name,
            selected.backend.describe()
        )
    });
    Arc::new(Installed {
        name: selected.name,
        routine: selected.backend,
    })
}

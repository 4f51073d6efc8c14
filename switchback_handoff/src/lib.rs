// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switchback Handoff: a single-slot resolve/execute handoff for URI action
//! navigation.
//!
//! ## Overview
//!
//! When a navigation host resolves views in two phases — first asking whether
//! a route names a view, later constructing and entering that view — a command
//! produced during the first phase has to be carried across to the second.
//! This crate owns that carry: a one-slot "pending action" register with a
//! resolve step and an execute step that must alternate correctly.
//!
//! - [`HandoffState`] is the coordinator: an explicit Idle ⇄ Pending state
//!   machine rather than a nullable field shared between callbacks.
//! - [`ExecutionHandle`] is the opaque ticket the host carries from the
//!   materialization phase to the activation phase.
//! - [`HandoffError`] and [`ExecuteError`] are the protocol's failure
//!   taxonomy: reentrant resolution, execution without a pending action, stale
//!   handles, and pass-through command failures.
//!
//! The coordinator never invokes a resolver or runs a command on its own; both
//! are supplied per call as closures. Pair it with `switchback_navigator` for
//! the seam traits binding it to a routing library and a view-resolution host.
//!
//! ## Guarantees
//!
//! - A command stored by a successful resolve is run exactly once, and only
//!   during execute.
//! - Immediately after any execute — successful or failing — the slot is
//!   Idle, so a subsequent resolve always has a clean machine.
//! - A reentrant resolve fails fast without ever invoking the resolver.
//!
//! ## Example
//!
//! ```
//! use switchback_handoff::{HandoffError, HandoffState};
//!
//! struct Log(&'static str);
//!
//! let mut handoff: HandoffState<Log> = HandoffState::new();
//!
//! // A miss leaves the machine idle and reports absence, not an error.
//! assert_eq!(handoff.resolve_with("/missing", |_| None), Ok(false));
//!
//! // A hit parks the command until the host activates the view.
//! assert_eq!(
//!     handoff.resolve_with("/audit", |_| Some(Log("audit"))),
//!     Ok(true)
//! );
//!
//! // Resolving again before execution is a sequencing bug in the host.
//! assert!(matches!(
//!     handoff.resolve_with("/other", |_| Some(Log("other"))),
//!     Err(HandoffError::AlreadyPending { .. })
//! ));
//!
//! let handle = handoff.materialize().unwrap();
//! handoff
//!     .execute(handle, |log| -> Result<(), ()> {
//!         assert_eq!(log.0, "audit");
//!         Ok(())
//!     })
//!     .unwrap();
//! assert!(!handoff.is_pending());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod handoff;

pub use error::{ExecuteError, HandoffError};
pub use handoff::{ExecutionHandle, HandoffState};

// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single-slot handoff state machine.
//!
//! ## Protocol
//!
//! A view-resolution host splits one navigation event into two callbacks: a
//! *name-resolution* call ("can you name a view for this route?") and a later
//! *view-materialization* call, followed by a view-activation call. Because
//! the naming phase may run speculatively and the construction phase lazily,
//! the command produced during resolution cannot be executed right away; it is
//! parked in a one-slot register and consumed when activation finally happens.
//!
//! [`HandoffState`] owns that register and enforces the alternation:
//!
//! - **Idle**: the slot is empty. Only [`resolve_with`](HandoffState::resolve_with)
//!   is legal; [`materialize`](HandoffState::materialize) and
//!   [`execute`](HandoffState::execute) fail with
//!   [`HandoffError::NothingPending`].
//! - **Pending**: the slot holds a command. Only `materialize` followed by
//!   `execute` is legal; a second `resolve_with` fails with
//!   [`HandoffError::AlreadyPending`].
//!
//! The machine starts Idle and cycles Idle ⇄ Pending for the lifetime of the
//! host. `execute` restores Idle on every exit path, a failing command
//! included, so one navigation can never strand the next.
//!
//! ## Handles
//!
//! [`materialize`](HandoffState::materialize) mints an [`ExecutionHandle`]
//! carrying the generation number of the pending resolution instead of the
//! command itself. A handle left over from a resolution that was canceled and
//! replaced is rejected with [`HandoffError::StaleHandle`] rather than running
//! the newer command.
//!
//! ## Threading
//!
//! All calls are expected to arrive sequentially from one logical navigation
//! thread, matching the host's own single-threaded view-resolution lifecycle.
//! Exclusivity is enforced purely by the Idle/Pending check; there are no
//! locks and no atomics.

use alloc::string::{String, ToString};

use crate::error::{ExecuteError, HandoffError};

/// Opaque ticket for executing the currently pending action.
///
/// Minted by [`HandoffState::materialize`] and consumed by
/// [`HandoffState::execute`]. The handle identifies *which* resolution it
/// belongs to; it does not carry the command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExecutionHandle {
    generation: u64,
}

#[derive(Clone, Debug)]
enum Slot<C> {
    Idle,
    Pending {
        command: C,
        route: String,
        generation: u64,
    },
}

/// Coordinator for the resolve/execute handoff of URI action commands.
///
/// Mediates between a two-call resolution protocol imposed by an external
/// view-resolution host and an action resolver that is stateless per call,
/// ensuring at most one command is in flight at a time and that it is executed
/// exactly once.
///
/// The coordinator is generic over the command type `C` and never runs a
/// command itself: [`execute`](Self::execute) delegates to a caller-supplied
/// runner, so this crate stays agnostic of what a command is or how it fails.
///
/// ```
/// use switchback_handoff::HandoffState;
///
/// struct Greet(&'static str);
///
/// let mut handoff: HandoffState<Greet> = HandoffState::new();
///
/// // Phase one: resolve the route key into a command.
/// let resolved = handoff
///     .resolve_with("/hello", |route| (route == "/hello").then(|| Greet("hello")))
///     .unwrap();
/// assert!(resolved);
///
/// // Phase two: materialize a handle, then execute exactly once.
/// let handle = handoff.materialize().unwrap();
/// let mut ran = Vec::new();
/// handoff
///     .execute(handle, |cmd| -> Result<(), ()> {
///         ran.push(cmd.0);
///         Ok(())
///     })
///     .unwrap();
/// assert_eq!(ran, vec!["hello"]);
/// assert!(!handoff.is_pending());
/// ```
#[derive(Clone, Debug)]
pub struct HandoffState<C> {
    slot: Slot<C>,
    /// Last successfully resolved route, kept for replay.
    current_route: Option<String>,
    /// Generation of the most recent successful resolution.
    generation: u64,
}

impl<C> HandoffState<C> {
    /// Create an idle coordinator.
    pub fn new() -> Self {
        Self {
            slot: Slot::Idle,
            current_route: None,
            generation: 0,
        }
    }

    /// Resolve a route key into a pending action.
    ///
    /// `lookup` is invoked with the route key and stands in for the external
    /// action resolver; callers close over the resolver and whatever routing
    /// context it needs. Returns `Ok(true)` if a command was produced and
    /// parked in the slot, `Ok(false)` on a miss (the route descriptor is
    /// cleared and the slot stays idle).
    ///
    /// Fails with [`HandoffError::AlreadyPending`] if a previous resolution's
    /// command has not been executed or canceled yet. The check happens
    /// before `lookup` runs, so a reentrant call never reaches the resolver.
    pub fn resolve_with<F>(&mut self, route: &str, lookup: F) -> Result<bool, HandoffError>
    where
        F: FnOnce(&str) -> Option<C>,
    {
        if let Slot::Pending { route, .. } = &self.slot {
            return Err(HandoffError::AlreadyPending {
                route: route.clone(),
            });
        }
        match lookup(route) {
            Some(command) => {
                self.generation += 1;
                self.slot = Slot::Pending {
                    command,
                    route: route.to_string(),
                    generation: self.generation,
                };
                self.current_route = Some(route.to_string());
                Ok(true)
            }
            None => {
                self.current_route = None;
                Ok(false)
            }
        }
    }

    /// Mint an execution handle for the pending action without clearing it.
    ///
    /// The slot stays Pending; calling this more than once before `execute`
    /// yields equal handles. Fails with [`HandoffError::NothingPending`] when
    /// the slot is idle.
    pub fn materialize(&self) -> Result<ExecutionHandle, HandoffError> {
        match &self.slot {
            Slot::Pending { generation, .. } => Ok(ExecutionHandle {
                generation: *generation,
            }),
            Slot::Idle => Err(HandoffError::NothingPending),
        }
    }

    /// Consume the pending action and run it through `runner`.
    ///
    /// The slot is idle again on every exit path: the command is removed
    /// before the runner is invoked, and a runner error is re-raised as
    /// [`ExecuteError::Command`] only after the slot has been cleared. The
    /// command is never retried.
    ///
    /// A handle from a resolution that is no longer the pending one is
    /// rejected with [`HandoffError::StaleHandle`] and the current pending
    /// action is left untouched.
    pub fn execute<F, E>(&mut self, handle: ExecutionHandle, runner: F) -> Result<(), ExecuteError<E>>
    where
        F: FnOnce(&mut C) -> Result<(), E>,
    {
        match &self.slot {
            Slot::Idle => return Err(ExecuteError::Handoff(HandoffError::NothingPending)),
            Slot::Pending { generation, .. } if *generation != handle.generation => {
                return Err(ExecuteError::Handoff(HandoffError::StaleHandle));
            }
            Slot::Pending { .. } => {}
        }
        let Slot::Pending { mut command, .. } = core::mem::replace(&mut self.slot, Slot::Idle)
        else {
            // Checked Pending just above; nothing can run in between on one
            // navigation thread.
            return Err(ExecuteError::Handoff(HandoffError::NothingPending));
        };
        runner(&mut command).map_err(ExecuteError::Command)
    }

    /// Abandon the pending action without executing it.
    ///
    /// Restores Idle and hands the command back to the caller, so a Pending
    /// slot always has a recovery path short of executing. The route
    /// descriptor is left in place. Returns `None` when nothing was pending.
    pub fn cancel(&mut self) -> Option<C> {
        match core::mem::replace(&mut self.slot, Slot::Idle) {
            Slot::Pending { command, .. } => Some(command),
            Slot::Idle => None,
        }
    }

    /// The last successfully resolved route key.
    ///
    /// Survives execution (it is overwritten by the next successful
    /// resolution and cleared by a miss), which is what makes a replay of the
    /// current navigation possible after the command has run.
    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    /// Whether a resolved command is waiting to be executed.
    pub fn is_pending(&self) -> bool {
        matches!(self.slot, Slot::Pending { .. })
    }

    /// Route key of the pending action, if any.
    pub fn pending_route(&self) -> Option<&str> {
        match &self.slot {
            Slot::Pending { route, .. } => Some(route),
            Slot::Idle => None,
        }
    }

    /// Borrow the pending command, if any.
    ///
    /// Callers must not run the command through this reference; execution is
    /// [`execute`](Self::execute)'s job and happens exactly once.
    pub fn pending_command(&self) -> Option<&C> {
        match &self.slot {
            Slot::Pending { command, .. } => Some(command),
            Slot::Idle => None,
        }
    }
}

impl<C> Default for HandoffState<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error taxonomy for the handoff protocol.
//!
//! Every failure is either a caller contract violation ([`HandoffError`],
//! surfaced immediately, never retried) or a pass-through of the command's own
//! failure ([`ExecuteError::Command`]). Nothing here is recoverable by waiting
//! or retrying at this layer.

use alloc::string::String;

/// Protocol violations raised by [`HandoffState`](crate::HandoffState).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HandoffError {
    /// A second resolution began while a previous one's command was still
    /// pending. This indicates a sequencing bug in the caller: the host is
    /// expected to execute (or cancel) one navigation before starting the
    /// next.
    #[error("already handling another navigation request (pending route {route:?})")]
    AlreadyPending {
        /// Route key of the resolution that is still in flight.
        route: String,
    },

    /// `materialize` or `execute` was called while the slot was idle. The
    /// host must never enter the execution phase without a preceding
    /// successful resolution.
    #[error("no action is pending; a successful resolve must precede this call")]
    NothingPending,

    /// The execution handle was minted for a resolution that is no longer the
    /// pending one (it was canceled and a newer resolution took its place).
    #[error("execution handle is stale; it does not match the pending action")]
    StaleHandle,
}

/// Errors surfaced by [`HandoffState::execute`](crate::HandoffState::execute).
///
/// A `Command` error is re-raised only after the slot has been cleared, so the
/// coordinator is never left stuck in its pending state by a failing command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError<E> {
    /// The execution phase itself violated the protocol; the command (if any)
    /// was not run.
    #[error(transparent)]
    Handoff(#[from] HandoffError),

    /// The command ran and failed. The slot is already idle again.
    #[error("action command failed")]
    Command(#[source] E),
}

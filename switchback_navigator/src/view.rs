// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action views and display dispatch.
//!
//! The host materializes one view per navigation event. For routes resolved
//! by this adapter that view is an [`ActionExecutionView`]: a carrier for the
//! execution handle whose activation runs the pending command. Every other
//! view belongs to the host and is forwarded to the user-provided display.
//!
//! Which of the two applies is carried by [`NavigatorView`] as an explicit
//! tag assigned at resolution time, not recovered later by inspecting the
//! concrete type of a constructed view.

use switchback_handoff::{ExecuteError, ExecutionHandle};

use crate::navigator::UriActionNavigator;
use crate::resolver::{ActionResolver, CommandError};

/// Display hook for views not produced by the action navigator.
///
/// Pass-through collaborator: the navigator forwards host views here and
/// never calls it for its own action views.
pub trait ViewDisplay<V> {
    /// Show a view produced elsewhere in the host.
    fn show_view(&mut self, view: &V);
}

/// Placeholder display for navigators configured without one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoDisplay;

impl<V> ViewDisplay<V> for NoDisplay {
    fn show_view(&mut self, _view: &V) {}
}

/// View materialized for a successfully resolved route.
///
/// Holds the [`ExecutionHandle`] of the pending action, not the command
/// itself; the command stays in the coordinator's slot until
/// [`enter`](Self::enter) consumes it. The pending command can be inspected
/// (but not run) through
/// [`UriActionNavigator::current_command`](crate::UriActionNavigator::current_command).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionExecutionView {
    handle: ExecutionHandle,
}

impl ActionExecutionView {
    pub(crate) fn new(handle: ExecutionHandle) -> Self {
        Self { handle }
    }

    /// Execution handle this view will activate.
    pub fn handle(&self) -> ExecutionHandle {
        self.handle
    }

    /// Activate the view: run the pending command exactly once.
    ///
    /// The coordinator clears its slot on every path, so after `enter`
    /// returns — command error included — the navigator is ready for the next
    /// resolution. The state machine is addressed explicitly through the
    /// navigator reference instead of a captured callback environment.
    pub fn enter<R, D>(
        self,
        navigator: &mut UriActionNavigator<R, D>,
    ) -> Result<(), ExecuteError<CommandError<R>>>
    where
        R: ActionResolver,
    {
        navigator.run_pending(self.handle)
    }
}

/// Tagged view outcome for display dispatch.
///
/// Replaces a runtime type test against the action view class: the
/// resolution step already knows whether a view is ours, so the tag travels
/// with the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigatorView<V> {
    /// Produced by this navigator; nothing to display, the command runs on
    /// [`ActionExecutionView::enter`].
    Action(ActionExecutionView),
    /// A view from elsewhere in the host, forwarded to the fallback display.
    Host(V),
}

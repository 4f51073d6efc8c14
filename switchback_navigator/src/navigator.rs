// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator implementation.
//!
//! ## Overview
//!
//! [`UriActionNavigator`] implements the two callbacks a view-resolution host
//! makes per navigation event — name resolution, then view materialization —
//! on top of a [`HandoffState`] coordinator and an [`ActionResolver`] seam.
//!
//! - [`view_name`](UriActionNavigator::view_name) asks the resolver for a
//!   command and parks it in the coordinator's slot; the fragment itself is
//!   echoed back as the view name on a hit.
//! - [`view`](UriActionNavigator::view) materializes an
//!   [`ActionExecutionView`] around the pending action's handle.
//! - [`ActionExecutionView::enter`] activates the view and runs the command
//!   exactly once.
//!
//! Hosts that do not split the phases can drive the whole cycle with
//! [`navigate_to`](UriActionNavigator::navigate_to), and re-trigger the last
//! successful navigation with [`replay`](UriActionNavigator::replay).
//!
//! A navigator without a resolver declines every fragment instead of failing;
//! an unset resolver means "no routes configured", letting the host fall back
//! to its other view providers.

use alloc::string::ToString;

use log::{debug, trace, warn};
use switchback_handoff::{ExecuteError, ExecutionHandle, HandoffError, HandoffState};

use crate::config::NavigatorConfig;
use crate::resolver::{
    ActionResolver, CommandError, ResolveRequest, RoutingFlags, UriActionCommand,
};
use crate::view::{ActionExecutionView, NavigatorView, NoDisplay, ViewDisplay};

/// Adapter between a view-resolution host and a URI action resolver.
///
/// ## Usage
///
/// - Construct with [`UriActionNavigator::with_resolver`], or with
///   [`UriActionNavigator::with_config`] when a fallback display, a routing
///   context, or non-default [`RoutingFlags`] are needed; collaborators can
///   also be supplied later through the setters.
/// - Wire [`view_name`](Self::view_name) and [`view`](Self::view) into the
///   host's view-provider callbacks, and [`show`](Self::show) into its
///   display hook.
/// - Or drive navigation directly with [`navigate_to`](Self::navigate_to).
///
/// All calls are expected on one logical navigation thread; see the handoff
/// crate for the exclusivity rules.
pub struct UriActionNavigator<R: ActionResolver, D = NoDisplay> {
    resolver: Option<R>,
    display: Option<D>,
    routing_context: Option<R::Context>,
    flags: RoutingFlags,
    handoff: HandoffState<R::Command>,
}

impl<R: ActionResolver, D> core::fmt::Debug for UriActionNavigator<R, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UriActionNavigator")
            .field("has_resolver", &self.resolver.is_some())
            .field("flags", &self.flags)
            .field("pending", &self.handoff.is_pending())
            .finish_non_exhaustive()
    }
}

impl<R: ActionResolver> UriActionNavigator<R> {
    /// Create a navigator with no resolver and default configuration.
    pub fn new() -> Self {
        Self::with_config(NavigatorConfig::default())
    }

    /// Create a navigator around `resolver` with default configuration.
    pub fn with_resolver(resolver: R) -> Self {
        let mut navigator = Self::new();
        navigator.set_resolver(resolver);
        navigator
    }
}

impl<R: ActionResolver> Default for UriActionNavigator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ActionResolver, D> UriActionNavigator<R, D> {
    /// Create a navigator from a configuration structure.
    ///
    /// The resolver is supplied separately via
    /// [`set_resolver`](Self::set_resolver); until then every fragment is
    /// declined.
    pub fn with_config(config: NavigatorConfig<D, R::Context>) -> Self {
        Self {
            resolver: None,
            display: config.display,
            routing_context: config.routing_context,
            flags: config.flags,
            handoff: HandoffState::new(),
        }
    }

    /// Set the action resolver consulted for every fragment.
    pub fn set_resolver(&mut self, resolver: R) {
        self.resolver = Some(resolver);
    }

    /// Set the routing context handed to the resolver on each resolution.
    pub fn set_routing_context(&mut self, context: R::Context) {
        self.routing_context = Some(context);
    }

    /// Set the fallback display for host views.
    pub fn set_display(&mut self, display: D) {
        self.display = Some(display);
    }

    /// Set the switches forwarded to the resolver.
    pub fn set_flags(&mut self, flags: RoutingFlags) {
        self.flags = flags;
    }

    /// Whether a resolver has been configured.
    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Borrow the configured resolver, if any.
    pub fn resolver(&self) -> Option<&R> {
        self.resolver.as_ref()
    }

    /// Currently configured flags.
    pub fn flags(&self) -> RoutingFlags {
        self.flags
    }

    /// Name-resolution phase: decide whether `fragment` is ours.
    ///
    /// On a hit the resolved command is parked in the coordinator's slot and
    /// the fragment is echoed back as the view name for the host to request
    /// next. `Ok(None)` covers both a resolver miss and an unset resolver.
    ///
    /// Fails with [`HandoffError::AlreadyPending`] when a previous
    /// navigation's command has not been executed or canceled yet; the
    /// resolver is not consulted in that case.
    pub fn view_name<'a>(&mut self, fragment: &'a str) -> Result<Option<&'a str>, HandoffError> {
        let Some(resolver) = self.resolver.as_ref() else {
            debug!("no action resolver configured; declining fragment {fragment:?}");
            return Ok(None);
        };
        let context = self.routing_context.as_ref();
        let flags = self.flags;
        let resolved = match self.handoff.resolve_with(fragment, |fragment| {
            resolver.resolve(ResolveRequest {
                fragment,
                context,
                flags,
            })
        }) {
            Ok(resolved) => resolved,
            Err(err) => {
                warn!("rejected overlapping navigation for {fragment:?}: {err}");
                return Err(err);
            }
        };
        if resolved {
            debug!("fragment {fragment:?} resolved to an action command");
            Ok(Some(fragment))
        } else {
            debug!("no action mapped for fragment {fragment:?}");
            Ok(None)
        }
    }

    /// View-materialization phase: wrap the pending action in a view.
    ///
    /// The command is not run here; the slot stays pending until the host
    /// enters the returned view. Fails with [`HandoffError::NothingPending`]
    /// without a preceding successful [`view_name`](Self::view_name).
    pub fn view(&self) -> Result<ActionExecutionView, HandoffError> {
        let handle = self.handoff.materialize()?;
        trace!(
            "materialized action view for {:?}",
            self.handoff.pending_route()
        );
        Ok(ActionExecutionView::new(handle))
    }

    /// Display dispatch over the tagged view outcome.
    ///
    /// Action views are a no-op (their command runs on
    /// [`ActionExecutionView::enter`]); host views are forwarded to the
    /// configured fallback display, or dropped when there is none.
    pub fn show<V>(&mut self, view: &NavigatorView<V>)
    where
        D: ViewDisplay<V>,
    {
        match view {
            NavigatorView::Action(_) => {
                trace!("action view reached the display hook; nothing to show");
            }
            NavigatorView::Host(host_view) => {
                if let Some(display) = self.display.as_mut() {
                    display.show_view(host_view);
                }
            }
        }
    }

    /// Run the full resolve → materialize → enter cycle for one fragment.
    ///
    /// Returns `Ok(true)` when the fragment resolved and its command ran,
    /// `Ok(false)` when the fragment is not ours.
    pub fn navigate_to(
        &mut self,
        fragment: &str,
    ) -> Result<bool, ExecuteError<CommandError<R>>> {
        if self.view_name(fragment)?.is_none() {
            return Ok(false);
        }
        let view = self.view()?;
        view.enter(self)?;
        Ok(true)
    }

    /// Re-trigger navigation for the last successfully resolved route.
    ///
    /// `Ok(false)` when no route has been resolved yet (or the last
    /// resolution was a miss).
    pub fn replay(&mut self) -> Result<bool, ExecuteError<CommandError<R>>> {
        let Some(route) = self.handoff.current_route() else {
            debug!("nothing to replay; no route has been resolved yet");
            return Ok(false);
        };
        let route = route.to_string();
        debug!("replaying navigation for {route:?}");
        self.navigate_to(&route)
    }

    /// Abandon the pending action without executing it.
    pub fn cancel(&mut self) -> Option<R::Command> {
        let canceled = self.handoff.cancel();
        if canceled.is_some() {
            debug!("canceled pending action for {:?}", self.current_route());
        }
        canceled
    }

    /// The last successfully resolved route key.
    pub fn current_route(&self) -> Option<&str> {
        self.handoff.current_route()
    }

    /// Borrow the command waiting to be executed, if any.
    pub fn current_command(&self) -> Option<&R::Command> {
        self.handoff.pending_command()
    }

    /// Whether a resolved command is waiting to be executed.
    pub fn is_pending(&self) -> bool {
        self.handoff.is_pending()
    }

    pub(crate) fn run_pending(
        &mut self,
        handle: ExecutionHandle,
    ) -> Result<(), ExecuteError<CommandError<R>>> {
        debug!(
            "executing action command for {:?}",
            self.handoff.pending_route()
        );
        self.handoff.execute(handle, UriActionCommand::run)
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use super::*;

    #[derive(Debug)]
    struct TestCommand {
        runs: Rc<Cell<u32>>,
        seen_context: Option<String>,
        fail: bool,
    }

    impl UriActionCommand for TestCommand {
        type Error = &'static str;

        fn run(&mut self) -> Result<(), &'static str> {
            self.runs.set(self.runs.get() + 1);
            if self.fail { Err("command failed") } else { Ok(()) }
        }
    }

    /// Resolver double: maps `/test` and `/fail`, records every request.
    struct TestResolver {
        runs: Rc<Cell<u32>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl ActionResolver for TestResolver {
        type Command = TestCommand;
        type Context = String;

        fn resolve(&self, request: ResolveRequest<'_, String>) -> Option<TestCommand> {
            self.requests.borrow_mut().push(request.fragment.to_string());
            let fail = match request.fragment {
                "/test" => false,
                "/fail" => true,
                _ => return None,
            };
            Some(TestCommand {
                runs: self.runs.clone(),
                seen_context: request.context.cloned(),
                fail,
            })
        }
    }

    fn navigator() -> (
        UriActionNavigator<TestResolver>,
        Rc<Cell<u32>>,
        Rc<RefCell<Vec<String>>>,
    ) {
        let runs = Rc::new(Cell::new(0));
        let requests = Rc::new(RefCell::new(Vec::new()));
        let navigator = UriActionNavigator::with_resolver(TestResolver {
            runs: runs.clone(),
            requests: requests.clone(),
        });
        (navigator, runs, requests)
    }

    #[test]
    fn two_phase_protocol_runs_command_exactly_once() {
        let (mut navigator, runs, _) = navigator();

        assert_eq!(navigator.view_name("/test").unwrap(), Some("/test"));
        assert_eq!(runs.get(), 0, "resolution must not run the command");

        let view = navigator.view().unwrap();
        assert_eq!(runs.get(), 0, "materialization must not run the command");
        assert!(navigator.is_pending());

        view.enter(&mut navigator).unwrap();
        assert_eq!(runs.get(), 1);
        assert!(!navigator.is_pending());
        assert_eq!(navigator.current_route(), Some("/test"));
    }

    #[test]
    fn unresolved_fragment_falls_through() {
        let (mut navigator, runs, _) = navigator();

        assert_eq!(navigator.view_name("/unknown").unwrap(), None);
        assert!(!navigator.is_pending());
        assert!(navigator.current_route().is_none());
        assert_eq!(runs.get(), 0);
        assert_eq!(
            navigator.view().unwrap_err(),
            HandoffError::NothingPending
        );
    }

    #[test]
    fn unset_resolver_declines_without_error() {
        let mut navigator: UriActionNavigator<TestResolver> = UriActionNavigator::new();
        assert!(!navigator.has_resolver());
        assert_eq!(navigator.view_name("/test").unwrap(), None);
        assert!(!navigator.is_pending());
    }

    #[test]
    fn overlapping_navigation_is_rejected_before_the_resolver() {
        let (mut navigator, _, requests) = navigator();

        navigator.view_name("/test").unwrap();
        let err = navigator.view_name("/test").unwrap_err();
        assert_eq!(
            err,
            HandoffError::AlreadyPending {
                route: "/test".to_string()
            }
        );
        assert_eq!(
            requests.borrow().len(),
            1,
            "the second request must not reach the resolver"
        );
    }

    #[test]
    fn routing_context_reaches_the_resolver_verbatim() {
        let (mut navigator, _, _) = navigator();
        navigator.set_routing_context("context data".to_string());

        navigator.view_name("/test").unwrap();
        let command = navigator.current_command().unwrap();
        assert_eq!(command.seen_context.as_deref(), Some("context data"));
    }

    #[test]
    fn failing_command_does_not_strand_the_navigator() {
        let (mut navigator, runs, _) = navigator();

        let err = navigator.navigate_to("/fail").unwrap_err();
        assert_eq!(err, ExecuteError::Command("command failed"));
        assert_eq!(runs.get(), 1);
        assert!(!navigator.is_pending());

        // The slot was cleared before the error surfaced.
        assert!(navigator.navigate_to("/test").unwrap());
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn navigate_to_and_replay() {
        let (mut navigator, runs, _) = navigator();

        assert!(!navigator.replay().unwrap());

        assert!(navigator.navigate_to("/test").unwrap());
        assert_eq!(runs.get(), 1);

        assert!(navigator.replay().unwrap());
        assert_eq!(runs.get(), 2);
        assert_eq!(navigator.current_route(), Some("/test"));
    }

    #[test]
    fn replay_after_a_miss_has_nothing_to_do() {
        let (mut navigator, runs, _) = navigator();

        navigator.navigate_to("/test").unwrap();
        assert!(!navigator.navigate_to("/unknown").unwrap());
        // The miss wiped the replay descriptor.
        assert!(!navigator.replay().unwrap());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn cancel_unblocks_the_next_navigation() {
        let (mut navigator, runs, _) = navigator();

        navigator.view_name("/test").unwrap();
        assert!(navigator.cancel().is_some());
        assert_eq!(runs.get(), 0, "canceled commands never run");

        assert_eq!(navigator.view_name("/test").unwrap(), Some("/test"));
    }

    #[test]
    fn stale_view_from_a_canceled_navigation_is_rejected() {
        let (mut navigator, runs, _) = navigator();

        navigator.view_name("/test").unwrap();
        let stale = navigator.view().unwrap();

        navigator.cancel();
        navigator.view_name("/fail").unwrap();

        let err = stale.enter(&mut navigator).unwrap_err();
        assert_eq!(err, ExecuteError::Handoff(HandoffError::StaleHandle));
        assert_eq!(runs.get(), 0, "neither command may run through a stale view");
        assert!(navigator.is_pending());

        navigator.cancel();
    }

    #[derive(Default)]
    struct RecordingDisplay {
        shown: Vec<&'static str>,
    }

    impl ViewDisplay<&'static str> for RecordingDisplay {
        fn show_view(&mut self, view: &&'static str) {
            self.shown.push(view);
        }
    }

    #[test]
    fn host_views_reach_the_fallback_display_and_action_views_do_not() {
        let mut navigator: UriActionNavigator<TestResolver, RecordingDisplay> =
            UriActionNavigator::with_config(NavigatorConfig {
                display: Some(RecordingDisplay::default()),
                ..NavigatorConfig::default()
            });
        navigator.set_resolver(TestResolver {
            runs: Rc::new(Cell::new(0)),
            requests: Rc::new(RefCell::new(Vec::new())),
        });

        navigator.view_name("/test").unwrap();
        let action_view = navigator.view().unwrap();
        navigator.show(&NavigatorView::<&'static str>::Action(action_view));
        navigator.show(&NavigatorView::Host("settings"));
        navigator.show(&NavigatorView::Host("inbox"));

        let display = navigator.display.as_ref().unwrap();
        assert_eq!(display.shown, ["settings", "inbox"]);

        action_view.enter(&mut navigator).unwrap();
    }
}

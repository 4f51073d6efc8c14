// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Switchback Navigator: glue between a view-resolution host and a URI
//! action resolver.
//!
//! ## Overview
//!
//! A navigation host turns one navigation event into two callbacks — "can you
//! name a view for this fragment?" followed by "construct that view" — and a
//! later activation call on the constructed view. An action resolver turns a
//! URI fragment into a command object. This crate wires the two together:
//!
//! 1. [`UriActionNavigator::view_name`] consults the [`ActionResolver`] and
//!    parks a resolved command in a single-slot handoff
//!    (`switchback_handoff`).
//! 2. [`UriActionNavigator::view`] materializes an [`ActionExecutionView`]
//!    carrying the pending action's execution handle.
//! 3. [`ActionExecutionView::enter`] runs the command exactly once and
//!    returns the coordinator to idle, on error paths too.
//!
//! Views the navigator did not produce travel as
//! [`NavigatorView::Host`] and are forwarded to the configured
//! [`ViewDisplay`]; the distinction is a tag assigned at resolution time, not
//! a runtime type test.
//!
//! ## Configuration
//!
//! The optional collaborators — fallback display, routing context,
//! [`RoutingFlags`] — live in one [`NavigatorConfig`] structure instead of
//! constructor overloads. A navigator without a resolver declines every
//! fragment, so hosts can install routing late or not at all.
//!
//! ## Example
//!
//! ```
//! use switchback_navigator::{
//!     ActionResolver, ResolveRequest, UriActionCommand, UriActionNavigator,
//! };
//!
//! struct Counter(u32);
//!
//! impl UriActionCommand for Counter {
//!     type Error = ();
//!     fn run(&mut self) -> Result<(), ()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! struct CountRoute;
//!
//! impl ActionResolver for CountRoute {
//!     type Command = Counter;
//!     type Context = ();
//!
//!     fn resolve(&self, request: ResolveRequest<'_, ()>) -> Option<Counter> {
//!         (request.fragment == "/count").then(|| Counter(0))
//!     }
//! }
//!
//! let mut navigator = UriActionNavigator::with_resolver(CountRoute);
//!
//! // Fragments the resolver does not know fall through to the host.
//! assert_eq!(navigator.navigate_to("/elsewhere"), Ok(false));
//!
//! // Known fragments resolve and execute in one navigation cycle.
//! assert_eq!(navigator.navigate_to("/count"), Ok(true));
//! assert_eq!(navigator.current_route(), Some("/count"));
//!
//! // The route descriptor survives execution, so it can be replayed.
//! assert_eq!(navigator.replay(), Ok(true));
//! ```
//!
//! ## Mapper
//!
//! The [`mapper`] module (feature `static_mapper`) provides a flat map-backed
//! resolver for tests and demos; real routing libraries plug in through
//! [`ActionResolver`] instead.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
#[cfg(feature = "static_mapper")]
pub mod mapper;
pub mod navigator;
pub mod resolver;
pub mod view;

pub use config::NavigatorConfig;
pub use navigator::UriActionNavigator;
pub use resolver::{
    ActionResolver, CommandError, ResolveRequest, RoutingFlags, UriActionCommand,
};
pub use view::{ActionExecutionView, NavigatorView, NoDisplay, ViewDisplay};

// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.

use crate::resolver::RoutingFlags;

/// Optional collaborators for a [`UriActionNavigator`](crate::UriActionNavigator).
///
/// One structure replaces the combinatorial constructor overloads that grew
/// around these options historically: every field is independent, and
/// [`Default`] gives the plain navigator (no fallback display, no routing
/// context, case-sensitive matching).
///
/// ```
/// use switchback_navigator::{NavigatorConfig, RoutingFlags};
///
/// let config: NavigatorConfig<(), u32> = NavigatorConfig {
///     routing_context: Some(7),
///     flags: RoutingFlags::empty(),
///     ..NavigatorConfig::default()
/// };
/// assert!(config.display.is_none());
/// ```
#[derive(Clone, Debug)]
pub struct NavigatorConfig<D, X> {
    /// Fallback display for views this navigator did not produce.
    pub display: Option<D>,
    /// Routing context handed to the resolver on every resolution.
    pub routing_context: Option<X>,
    /// Switches forwarded to the resolver.
    pub flags: RoutingFlags,
}

impl<D, X> Default for NavigatorConfig<D, X> {
    fn default() -> Self {
        Self {
            display: None,
            routing_context: None,
            flags: RoutingFlags::default(),
        }
    }
}

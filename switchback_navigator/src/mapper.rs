// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flat, map-backed action resolver.
//!
//! ## Feature
//!
//! Enable with `static_mapper`.
//!
//! ## Notes
//!
//! [`StaticActionMapper`] is the minimal stand-in for a real routing library:
//! a route-key → command-factory table with no fragment parsing, no parameter
//! typing, and no mapper hierarchy. It exists for tests, demos, and hosts
//! whose routes are genuinely flat.
//!
//! Factories receive the routing context of the request, which is where
//! context injection happens for commands built by this mapper. The
//! [`RoutingFlags::CASE_SENSITIVE`] switch is honored (case-insensitive
//! lookup falls back to a linear scan); [`RoutingFlags::RAW_PARAMETERS`] is
//! ignored since nothing here types parameters.

use alloc::boxed::Box;
use alloc::string::String;

use hashbrown::HashMap;

use crate::resolver::{ActionResolver, ResolveRequest, RoutingFlags, UriActionCommand};

type Factory<C, X> = Box<dyn Fn(Option<&X>) -> C>;

/// Route-key → command-factory table implementing [`ActionResolver`].
///
/// ```
/// use switchback_navigator::mapper::StaticActionMapper;
/// use switchback_navigator::{ActionResolver, ResolveRequest, RoutingFlags, UriActionCommand};
///
/// struct Ping;
///
/// impl UriActionCommand for Ping {
///     type Error = ();
///     fn run(&mut self) -> Result<(), ()> {
///         Ok(())
///     }
/// }
///
/// let mut mapper: StaticActionMapper<Ping> = StaticActionMapper::new();
/// mapper.map("/ping", |_| Ping);
///
/// let hit = mapper.resolve(ResolveRequest {
///     fragment: "/ping",
///     context: None,
///     flags: RoutingFlags::default(),
/// });
/// assert!(hit.is_some());
/// ```
pub struct StaticActionMapper<C, X = ()> {
    routes: HashMap<String, Factory<C, X>>,
}

impl<C, X> core::fmt::Debug for StaticActionMapper<C, X> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StaticActionMapper")
            .field("routes", &self.routes.len())
            .finish_non_exhaustive()
    }
}

impl<C: UriActionCommand, X> StaticActionMapper<C, X> {
    /// Create an empty mapper.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a command factory for a route key.
    ///
    /// The factory is invoked once per successful resolution with the
    /// request's routing context. Mapping the same key again replaces the
    /// earlier factory.
    pub fn map<F>(&mut self, route: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(Option<&X>) -> C + 'static,
    {
        self.routes.insert(route.into(), Box::new(factory));
        self
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<C: UriActionCommand, X> Default for StaticActionMapper<C, X> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: UriActionCommand, X> ActionResolver for StaticActionMapper<C, X> {
    type Command = C;
    type Context = X;

    fn resolve(&self, request: ResolveRequest<'_, X>) -> Option<C> {
        let factory = if request.flags.contains(RoutingFlags::CASE_SENSITIVE) {
            self.routes.get(request.fragment)
        } else {
            // Exact match first, then a linear scan with case folding. The
            // table is small by construction; a folded shadow index is not
            // worth carrying.
            self.routes.get(request.fragment).or_else(|| {
                self.routes
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(request.fragment))
                    .map(|(_, factory)| factory)
            })
        };
        factory.map(|build| build(request.context))
    }
}

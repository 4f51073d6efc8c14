// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seam traits for the external routing library.
//!
//! The navigator consumes the routing library as a black box through
//! [`ActionResolver`]: one synchronous operation turning a URI fragment (plus
//! an optional routing context) into a command object or absence. Parameter
//! typing, mapper hierarchies, and context injection into commands all live on
//! the resolver's side of this seam.

bitflags::bitflags! {
    /// Interpretation switches forwarded to the resolver on every request.
    ///
    /// These collapse the flag parameters the navigator used to thread
    /// through its construction into one value configured once and passed
    /// along verbatim. Resolvers honor the flags they understand and ignore
    /// the rest.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RoutingFlags: u8 {
        /// Match route keys exactly. Without this flag resolvers are expected
        /// to fold ASCII case when comparing fragments.
        const CASE_SENSITIVE  = 0b0000_0001;
        /// Hand parameter values through uninterpreted instead of converting
        /// them to their declared types. Only meaningful to resolvers that
        /// type their parameters.
        const RAW_PARAMETERS  = 0b0000_0010;
    }
}

impl Default for RoutingFlags {
    /// Case-sensitive matching, typed parameters.
    fn default() -> Self {
        Self::CASE_SENSITIVE
    }
}

/// One resolution request handed to an [`ActionResolver`].
#[derive(Clone, Copy, Debug)]
pub struct ResolveRequest<'a, X> {
    /// URI fragment naming the requested navigation target.
    pub fragment: &'a str,
    /// Routing context passed through verbatim for injection into commands.
    pub context: Option<&'a X>,
    /// Switches configured on the navigator.
    pub flags: RoutingFlags,
}

/// External fragment-to-command resolution.
///
/// From the navigator's point of view this is a pure function of the request:
/// no persistence, no retries, no async. Returning `None` means "this route is
/// not mine" and lets the host fall back to its other routing mechanisms.
pub trait ActionResolver {
    /// Command objects this resolver produces.
    type Command: UriActionCommand;
    /// Routing context accepted for injection into commands.
    type Context;

    /// Resolve a URI fragment into an action command, or report absence.
    fn resolve(&self, request: ResolveRequest<'_, Self::Context>) -> Option<Self::Command>;
}

/// An action to run upon successful navigation.
///
/// Commands are created by the resolver (which also performs any context
/// injection) and executed exactly once by the navigator when the host enters
/// the action view.
pub trait UriActionCommand {
    /// Failure type of [`run`](Self::run).
    type Error;

    /// Run the action. Errors are propagated to the host, never retried.
    fn run(&mut self) -> Result<(), Self::Error>;
}

/// Error type of the commands produced by resolver `R`.
pub type CommandError<R> =
    <<R as ActionResolver>::Command as UriActionCommand>::Error;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_are_case_sensitive_and_typed() {
        let flags = RoutingFlags::default();
        assert!(flags.contains(RoutingFlags::CASE_SENSITIVE));
        assert!(!flags.contains(RoutingFlags::RAW_PARAMETERS));
    }
}

// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full navigation cycle: static mapper + navigator + display fallback.
//!
//! This example shows how to combine:
//! - `switchback_navigator::mapper` as a stand-in for a routing library,
//! - `UriActionNavigator` driving the two-phase view-resolution protocol,
//! - a fallback `ViewDisplay` for views the navigator does not produce.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p switchback_demos --example uri_navigation`

use std::cell::RefCell;
use std::rc::Rc;

use switchback_navigator::mapper::StaticActionMapper;
use switchback_navigator::{
    NavigatorConfig, NavigatorView, RoutingFlags, UriActionCommand, UriActionNavigator,
    ViewDisplay,
};

/// Routing context injected into commands: who is navigating.
#[derive(Clone, Debug)]
struct Session {
    user: &'static str,
}

/// Command opening one page; records every visit in a shared journal.
struct OpenPage {
    page: &'static str,
    user: Option<&'static str>,
    journal: Rc<RefCell<Vec<String>>>,
}

impl UriActionCommand for OpenPage {
    type Error = String;

    fn run(&mut self) -> Result<(), String> {
        let user = self.user.unwrap_or("anonymous");
        self.journal.borrow_mut().push(format!("{} -> {}", user, self.page));
        println!("  [action] {} opened {}", user, self.page);
        Ok(())
    }
}

/// Display fallback: host views are just printed here.
#[derive(Debug, Default)]
struct TerminalDisplay;

impl ViewDisplay<&'static str> for TerminalDisplay {
    fn show_view(&mut self, view: &&'static str) {
        println!("  [display] showing host view {view:?}");
    }
}

fn main() {
    env_logger::init();

    let journal: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    // A flat routing table; each factory receives the session context.
    let mut mapper: StaticActionMapper<OpenPage, Session> = StaticActionMapper::new();
    for page in ["home", "reports"] {
        let journal = journal.clone();
        mapper.map(format!("/{page}"), move |session: Option<&Session>| OpenPage {
            page,
            user: session.map(|s| s.user),
            journal: journal.clone(),
        });
    }

    let mut navigator = UriActionNavigator::with_config(NavigatorConfig {
        display: Some(TerminalDisplay),
        routing_context: Some(Session { user: "ada" }),
        // Fold case when matching fragments.
        flags: RoutingFlags::empty(),
    });
    navigator.set_resolver(mapper);

    // The two-phase protocol, spelled out the way a host drives it.
    println!("== two-phase navigation to /reports ==");
    let name = navigator.view_name("/reports").unwrap();
    println!("  name phase resolved: {name:?}");
    let view = navigator.view().unwrap();
    navigator.show(&NavigatorView::<&'static str>::Action(view));
    view.enter(&mut navigator).unwrap();

    // The same cycle in one call, with case folding at work.
    println!("== navigate_to(\"/HOME\") ==");
    let handled = navigator.navigate_to("/HOME").unwrap();
    println!("  handled: {handled}");

    // Fragments that are not ours fall through to the host's own views.
    println!("== unknown fragment ==");
    let handled = navigator.navigate_to("/settings").unwrap();
    println!("  handled: {handled}");
    navigator.show(&NavigatorView::Host("settings"));

    // Replay re-runs the most recent successful navigation.
    println!("== replay ==");
    navigator.navigate_to("/home").unwrap();
    navigator.replay().unwrap();

    println!("\njournal:");
    for entry in journal.borrow().iter() {
        println!("  {entry}");
    }
}

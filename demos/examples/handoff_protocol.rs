// Copyright 2026 the Switchback Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The handoff state machine on its own, without the navigator layer.
//!
//! Walks the Idle ⇄ Pending cycle by hand: a hit, a miss, a reentrancy
//! rejection, a failing command, and a stale handle.
//!
//! Run:
//! - `cargo run -p switchback_demos --example handoff_protocol`

use switchback_handoff::{ExecuteError, HandoffState};

/// Toy command: may fail on demand.
struct Step {
    label: &'static str,
    fail: bool,
}

fn lookup(route: &str) -> Option<Step> {
    match route {
        "/ok" => Some(Step {
            label: "ok",
            fail: false,
        }),
        "/broken" => Some(Step {
            label: "broken",
            fail: true,
        }),
        _ => None,
    }
}

fn run(step: &mut Step) -> Result<(), String> {
    println!("  running {:?}", step.label);
    if step.fail {
        Err(format!("step {:?} failed", step.label))
    } else {
        Ok(())
    }
}

fn main() {
    let mut handoff: HandoffState<Step> = HandoffState::new();

    println!("== hit, then execute ==");
    assert!(handoff.resolve_with("/ok", lookup).unwrap());
    let handle = handoff.materialize().unwrap();
    handoff.execute(handle, run).unwrap();
    println!("  idle again: {}", !handoff.is_pending());

    println!("== miss ==");
    assert!(!handoff.resolve_with("/nowhere", lookup).unwrap());

    println!("== reentrancy is rejected ==");
    assert!(handoff.resolve_with("/ok", lookup).unwrap());
    let err = handoff.resolve_with("/ok", lookup).unwrap_err();
    println!("  {err}");

    println!("== stale handles are rejected ==");
    let stale = handoff.materialize().unwrap();
    handoff.cancel();
    assert!(handoff.resolve_with("/broken", lookup).unwrap());
    let err = handoff.execute(stale, run).unwrap_err();
    println!("  {err}");

    println!("== a failing command still clears the slot ==");
    let handle = handoff.materialize().unwrap();
    match handoff.execute(handle, run) {
        Err(ExecuteError::Command(msg)) => println!("  surfaced: {msg}"),
        other => println!("  unexpected: {other:?}"),
    }
    println!("  idle again: {}", !handoff.is_pending());
}

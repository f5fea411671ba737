// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `Activators`: attach-once reuse, routing, typed commands, and
//! generational handles.

mod support;

use support::{Event, Page};
use understory_activator::{Activators, Attach, Command, Config, Dom, Target};

#[test]
fn attach_twice_reuses_the_first_instance() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let target = page.element(body, "div", "target");
    let mut activators = Activators::new();

    let first = activators.attach(&mut page, button, Config::new().with_target("#target"));
    let second = activators.attach(
        &mut page,
        button,
        Config::new().with_active_class("never-used"),
    );

    assert!(matches!(first, Attach::Created(_)));
    assert_eq!(second, Attach::Existing(first.id()));
    assert_eq!(activators.len(), 1);
    assert_eq!(page.listeners(button, "click"), 1);

    assert!(activators.dispatch(&mut page, &button, &mut Event::click()));
    assert!(page.has_class(&target, "is-active"));
    assert!(!page.has_class(&target, "never-used"));
}

#[test]
fn dispatch_routes_by_host() {
    let mut page = Page::new();
    let body = page.body();
    let left = page.element(body, "button", "left");
    let right = page.element(body, "button", "right");
    let panel = page.element(body, "div", "panel");
    let mut activators = Activators::new();

    activators.attach(&mut page, left, Config::new());
    activators.attach(
        &mut page,
        right,
        Config::new().with_target(Target::classes([("#panel", "is-open")])),
    );

    assert!(activators.dispatch(&mut page, &right, &mut Event::click()));
    assert!(page.has_class(&panel, "is-open"));
    assert!(!page.has_class(&left, "is-active"));

    assert!(!activators.dispatch(&mut page, &panel, &mut Event::click()));
}

#[test]
fn invoke_runs_typed_commands() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let mut activators = Activators::new();
    let id = activators.attach(&mut page, button, Config::new()).id();

    assert!(activators.invoke(&mut page, id, Command::Toggle));
    assert!(page.has_class(&button, "is-active"));

    assert!(activators.invoke(&mut page, id, Command::Unbind));
    assert_eq!(page.listeners(button, "click"), 0);
    assert!(!activators.dispatch(&mut page, &button, &mut Event::click()));
    assert!(page.has_class(&button, "is-active"));

    // Still attached: the instance remains reachable for programmatic use.
    assert_eq!(activators.find(&button), Some(id));
    assert!(activators.invoke(&mut page, id, Command::Toggle));
    assert!(!page.has_class(&button, "is-active"));
}

#[test]
fn detach_unbinds_and_invalidates_the_handle() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let mut activators = Activators::new();
    let id = activators.attach(&mut page, button, Config::new()).id();

    let activator = activators.detach(&mut page, id).expect("live activator");
    assert_eq!(*activator.host(), button);
    assert!(!activator.is_bound());
    assert_eq!(page.listeners(button, "click"), 0);

    assert!(activators.is_empty());
    assert!(!activators.is_alive(id));
    assert!(activators.find(&button).is_none());
    assert!(activators.detach(&mut page, id).is_none());
    assert!(!activators.invoke(&mut page, id, Command::Toggle));
    assert!(!page.has_class(&button, "is-active"));
}

#[test]
fn reattach_after_detach_gets_a_fresh_handle() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let mut activators = Activators::new();

    let old = activators.attach(&mut page, button, Config::new()).id();
    activators.detach(&mut page, old);
    let new = activators
        .attach(&mut page, button, Config::new().with_active_class("again"));

    assert!(matches!(new, Attach::Created(_)));
    assert_ne!(new.id(), old);
    assert!(activators.get(old).is_none());
    assert_eq!(activators.get(new.id()).map(|a| a.event()), Some("click"));

    assert!(activators.dispatch(&mut page, &button, &mut Event::click()));
    assert!(page.has_class(&button, "again"));
}

#[test]
fn once_through_the_registry_keeps_the_instance() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let mut activators = Activators::new();
    let id = activators
        .attach(&mut page, button, Config::new().with_once(true))
        .id();

    assert!(activators.dispatch(&mut page, &button, &mut Event::click()));
    assert!(!activators.dispatch(&mut page, &button, &mut Event::click()));
    assert!(page.has_class(&button, "is-active"));
    assert!(activators.get(id).is_some_and(|a| !a.is_bound()));
}

#[test]
fn get_mut_exposes_the_instance() {
    let mut page = Page::new();
    let body = page.body();
    let button = page.element(body, "button", "button");
    let mut activators = Activators::new();
    let id = activators.attach(&mut page, button, Config::new()).id();

    let activator = activators.get_mut(id).expect("live activator");
    activator.toggle(&mut page);
    assert!(page.has_class(&button, "is-active"));
}

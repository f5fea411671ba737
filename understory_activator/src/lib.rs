// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_activator --heading-base-level=0

//! Understory Activator: bind a trigger event to activation classes.
//!
//! An [`Activator`] listens for one event (by default `click`) on a host element
//! and, on every trigger, flips an activation class (by default `is-active`) on
//! each of its targets. It can keep nested checkboxes in sync with the class,
//! detach itself after the first trigger, and call a change hook once all
//! targets have flipped.
//!
//! The crate does not know anything about documents. Element lookup, event
//! binding, and class mutation are provided by the host through the [`Dom`]
//! trait; dispatched events are seen through [`TriggerEvent`].
//!
//! ## Targets
//!
//! [`Target`] is resolved once, at construction, into an ordered list of
//! [`Binding`]s:
//!
//! - [`Target::Host`] (the default, also spelled `"this"`): the host element.
//! - [`Target::Selector`]: every element matching one selector.
//! - [`Target::Selectors`]: one binding per selector, in order, sharing the active class.
//! - [`Target::Classes`]: one binding per selector, each with its own class.
//!
//! A selector that matches nothing produces an empty binding; toggling it is a no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_activator::{Activators, Command, Config, Dom, TriggerEvent};
//! # #[derive(Default)]
//! # struct Page { ids: Vec<&'static str>, classes: Vec<Vec<String>> }
//! # impl Page {
//! #     fn add(&mut self, id: &'static str) -> usize {
//! #         self.ids.push(id);
//! #         self.classes.push(Vec::new());
//! #         self.ids.len() - 1
//! #     }
//! # }
//! # impl Dom for Page {
//! #     type Element = usize;
//! #     type Subscription = ();
//! #     fn query(&self, selector: &str) -> impl IntoIterator<Item = usize> {
//! #         let id = selector.trim_start_matches('#');
//! #         self.ids.iter().position(|candidate| *candidate == id)
//! #     }
//! #     fn bind(&mut self, _: &usize, _: &str) {}
//! #     fn unbind(&mut self, _: ()) {}
//! #     fn has_class(&self, element: &usize, class: &str) -> bool {
//! #         self.classes[*element].iter().any(|c| c == class)
//! #     }
//! #     fn add_class(&mut self, element: &usize, class: &str) {
//! #         self.classes[*element].push(class.into());
//! #     }
//! #     fn remove_class(&mut self, element: &usize, class: &str) {
//! #         self.classes[*element].retain(|c| c != class);
//! #     }
//! #     fn checkboxes(&self, _: &usize) -> impl IntoIterator<Item = usize> {
//! #         None::<usize>
//! #     }
//! #     fn set_checked(&mut self, _: &usize, _: bool) {}
//! # }
//! # struct Click { default_prevented: bool }
//! # impl TriggerEvent for Click {
//! #     fn event_type(&self) -> &str { "click" }
//! #     fn prevent_default(&mut self) { self.default_prevented = true; }
//! # }
//! let mut page = Page::default();
//! let button = page.add("menu-button");
//! let menu = page.add("menu");
//!
//! let mut activators = Activators::new();
//! let id = activators
//!     .attach(&mut page, button, Config::new().with_target("#menu"))
//!     .id();
//!
//! // The host's event loop routes the click to the registry.
//! let mut click = Click { default_prevented: false };
//! assert!(activators.dispatch(&mut page, &button, &mut click));
//! assert!(page.has_class(&menu, "is-active"));
//! assert!(click.default_prevented);
//!
//! // Programmatic toggle, without an event.
//! activators.invoke(&mut page, id, Command::Toggle);
//! assert!(!page.has_class(&menu, "is-active"));
//! ```
//!
//! ## Registry
//!
//! [`Activators`] owns activators by host element. Attaching twice to the same
//! host returns [`Attach::Existing`] with the original handle; the instance's
//! operations are then reached through [`Activators::invoke`] and
//! [`Activators::get_mut`].
//!
//! ## Diagnostics
//!
//! Attach, detach, and once-unbind are reported with `tracing::debug!`;
//! triggers and toggles with `tracing::trace!`. No subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod activator;
pub mod config;
pub mod dom;
pub mod registry;

pub use activator::{Activator, Binding, OnChange};
pub use config::{Config, DEFAULT_ACTIVE_CLASS, DEFAULT_EVENT, HOST_MARKER, Options, Target};
pub use dom::{Dom, TriggerEvent};
pub use registry::{ActivatorId, Activators, Attach, Command};

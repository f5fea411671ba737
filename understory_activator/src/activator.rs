// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The activator: resolved target bindings plus the trigger/toggle state machine.
//!
//! ## Lifecycle
//!
//! 1) [`Activator::new`] resolves the configured [`Target`](crate::Target) into an
//!    ordered list of [`Binding`]s, then binds one listener on the host element.
//!    Nothing is toggled at construction.
//! 2) Each dispatched event goes through [`Activator::handle`]: prevent the
//!    default action (if configured), [`toggle`](Activator::toggle), and detach
//!    the listener when the `ONCE` option is set.
//! 3) [`Activator::toggle`] can also be called directly for programmatic
//!    activation; it skips default prevention and never detaches.
//!
//! Bindings are resolved exactly once. Elements that start matching a selector
//! after construction are not picked up.
//!
//! ## Per-binding state
//!
//! Activation state is not stored here: the presence of the binding's class on
//! its elements *is* the state. Each toggle flips every element individually,
//! starting from whatever class membership the element had when it was bound.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use smallvec::SmallVec;

use crate::config::{Config, Options, Source};
use crate::dom::{Dom, TriggerEvent};

/// Change hook invoked after every toggle.
pub type OnChange<D> = Box<dyn FnMut(&Activator<D>, &D)>;

/// A resolved `(element set, class)` pair that flips together on each toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<E> {
    elements: SmallVec<[E; 1]>,
    active_class: String,
}

impl<E> Binding<E> {
    /// Elements this binding resolved to. May be empty.
    #[must_use]
    pub fn elements(&self) -> &[E] {
        &self.elements
    }

    /// Class toggled on this binding's elements.
    #[must_use]
    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    /// Returns `true` if the binding resolved to no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if any element of this binding carries its class.
    #[must_use]
    pub fn is_active<D>(&self, dom: &D) -> bool
    where
        D: Dom<Element = E>,
    {
        self.elements
            .iter()
            .any(|element| dom.has_class(element, &self.active_class))
    }

    fn flip<D>(&self, dom: &mut D)
    where
        D: Dom<Element = E>,
    {
        for element in &self.elements {
            if dom.has_class(element, &self.active_class) {
                dom.remove_class(element, &self.active_class);
            } else {
                dom.add_class(element, &self.active_class);
            }
        }
    }

    fn sync_checkboxes<D>(&self, dom: &mut D)
    where
        D: Dom<Element = E>,
    {
        let checked = self.is_active(dom);
        for element in &self.elements {
            let checkboxes: SmallVec<[E; 2]> = dom.checkboxes(element).into_iter().collect();
            for checkbox in &checkboxes {
                dom.set_checked(checkbox, checked);
            }
        }
    }
}

/// Binds a trigger event on a host element to activation classes on its targets.
pub struct Activator<D: Dom> {
    host: D::Element,
    event: String,
    options: Options,
    bindings: Vec<Binding<D::Element>>,
    subscription: Option<D::Subscription>,
    // Borrowed in place while it runs, so an unwinding hook is still installed afterwards.
    on_change: RefCell<Option<OnChange<D>>>,
}

impl<D: Dom> Activator<D> {
    /// Resolves the configured targets and binds the trigger event on `host`.
    pub fn new(dom: &mut D, host: D::Element, config: Config<D>) -> Self {
        let Config {
            target,
            active_class,
            event,
            options,
            on_change,
        } = config;

        let bindings: Vec<_> = target
            .entries(&active_class)
            .map(|(source, class)| Binding {
                elements: match source {
                    Source::Host => SmallVec::from_elem(host.clone(), 1),
                    Source::Query(selector) => dom.query(selector).into_iter().collect(),
                },
                active_class: String::from(class),
            })
            .collect();

        let subscription = dom.bind(&host, &event);
        tracing::debug!(
            host = ?host,
            event = %event,
            bindings = bindings.len(),
            options = ?options,
            "bound activator"
        );

        Self {
            host,
            event,
            options,
            bindings,
            subscription: Some(subscription),
            on_change: RefCell::new(on_change),
        }
    }

    /// The element the trigger event is bound on.
    #[must_use]
    pub fn host(&self) -> &D::Element {
        &self.host
    }

    /// Name of the bound trigger event.
    #[must_use]
    pub fn event(&self) -> &str {
        &self.event
    }

    /// Boolean options this activator was configured with.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Resolved bindings in target order.
    #[must_use]
    pub fn bindings(&self) -> &[Binding<D::Element>] {
        &self.bindings
    }

    /// Returns `true` while the trigger listener is attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.subscription.is_some()
    }

    /// Handles one dispatched event.
    ///
    /// Returns `false`, touching nothing, if the listener is detached or the
    /// event's type is not the bound one. Otherwise prevents the default
    /// action (when configured) before any class changes, toggles, and
    /// detaches the listener afterwards when `ONCE` is set, so the change
    /// hook still fires for that single trigger.
    pub fn handle<E>(&mut self, dom: &mut D, event: &mut E) -> bool
    where
        E: TriggerEvent + ?Sized,
    {
        if self.subscription.is_none() || event.event_type() != self.event {
            return false;
        }
        tracing::trace!(host = ?self.host, event = %self.event, "activator triggered");

        if self.options.contains(Options::PREVENT_DEFAULT) {
            event.prevent_default();
        }

        self.toggle(dom);

        if self.options.contains(Options::ONCE) {
            self.unbind(dom);
        }
        true
    }

    /// Flips every binding, syncs checkboxes, then runs the change hook once.
    pub fn toggle(&mut self, dom: &mut D) {
        let sync = self.options.contains(Options::CHECKBOX);
        for binding in &self.bindings {
            binding.flip(dom);
            if sync {
                binding.sync_checkboxes(dom);
            }
        }
        tracing::trace!(host = ?self.host, bindings = self.bindings.len(), "toggled");

        let mut hook = self.on_change.borrow_mut();
        if let Some(on_change) = hook.as_mut() {
            on_change(&*self, &*dom);
        }
    }

    /// Detaches the trigger listener. Returns `false` if it was already detached.
    ///
    /// Bindings keep their current state and [`Activator::toggle`] keeps working.
    pub fn unbind(&mut self, dom: &mut D) -> bool {
        match self.subscription.take() {
            Some(subscription) => {
                dom.unbind(subscription);
                tracing::debug!(host = ?self.host, event = %self.event, "unbound activator");
                true
            }
            None => false,
        }
    }
}

impl<D: Dom> fmt::Debug for Activator<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activator")
            .field("host", &self.host)
            .field("event", &self.event)
            .field("options", &self.options)
            .field("bindings", &self.bindings)
            .field("subscription", &self.subscription)
            .field(
                "on_change",
                &self.on_change.try_borrow().is_ok_and(|hook| hook.is_some()),
            )
            .finish()
    }
}

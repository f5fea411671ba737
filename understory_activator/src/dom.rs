// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator seams: the element, event, and class primitives an activator calls into.
//!
//! This crate never walks a document itself. Hosts implement [`Dom`] over their
//! own element handles (a browser binding, a retained widget tree, a test fake)
//! and [`TriggerEvent`] over their own event type.
//!
//! ## Contract
//!
//! - [`Dom::query`] returns the live matches for a selector at call time, in
//!   document order. Zero matches is a normal answer, not an error.
//! - [`Dom::bind`] registers interest in one named event on one element and
//!   returns a subscription token. The host is expected to route matching
//!   events back through [`Activator::handle`](crate::Activator::handle) or
//!   [`Activators::dispatch`](crate::Activators::dispatch) until the token is
//!   passed to [`Dom::unbind`].
//! - Class operations act on a single element and must be idempotent:
//!   adding a present class or removing an absent one is a no-op.

use core::fmt::Debug;
use core::hash::Hash;

/// Element query, event binding, and class mutation primitives.
pub trait Dom {
    /// Handle to a live element.
    type Element: Clone + Eq + Hash + Debug;
    /// Token identifying one bound listener.
    type Subscription: Debug;

    /// Resolves `selector` to zero or more elements.
    fn query(&self, selector: &str) -> impl IntoIterator<Item = Self::Element>;

    /// Binds a listener for `event` on `element`.
    fn bind(&mut self, element: &Self::Element, event: &str) -> Self::Subscription;

    /// Detaches a listener previously returned by [`Dom::bind`].
    fn unbind(&mut self, subscription: Self::Subscription);

    /// Returns `true` if `element` carries `class`.
    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Adds `class` to `element`.
    fn add_class(&mut self, element: &Self::Element, class: &str);

    /// Removes `class` from `element`.
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    /// Checkbox inputs nested within `element`.
    fn checkboxes(&self, element: &Self::Element) -> impl IntoIterator<Item = Self::Element>;

    /// Sets the checked state of a checkbox input.
    fn set_checked(&mut self, checkbox: &Self::Element, checked: bool);
}

/// A dispatched event, as seen by an activator.
pub trait TriggerEvent {
    /// The event's name, compared against the configured event.
    fn event_type(&self) -> &str;

    /// Suppresses the event's default action.
    fn prevent_default(&mut self);
}

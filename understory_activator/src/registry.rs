// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of activators keyed by host element.
//!
//! [`Activators`] owns every activator in a document and hands out
//! [`ActivatorId`] handles. A host element carries at most one activator:
//! attaching again returns the existing handle instead of building a second
//! instance, so repeated initialisation of the same markup is harmless.
//!
//! The host's event loop routes events with [`Activators::dispatch`]; other
//! code drives an instance through [`Activators::invoke`] with a typed
//! [`Command`].

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::activator::Activator;
use crate::config::Config;
use crate::dom::{Dom, TriggerEvent};

/// Identifier for an activator in an [`Activators`] registry.
///
/// A slot index plus a generation counter. Detaching frees the slot; a later
/// attach reusing it bumps the generation, so stale handles never alias a
/// different live activator.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ActivatorId(u32, u32);

impl ActivatorId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Outcome of [`Activators::attach`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Attach {
    /// A new activator was constructed and bound.
    Created(ActivatorId),
    /// The host already had an activator; the new configuration was dropped.
    Existing(ActivatorId),
}

impl Attach {
    /// The activator now attached to the host.
    #[must_use]
    pub const fn id(self) -> ActivatorId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }
}

/// Named operations an attached activator exposes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Command {
    /// [`Activator::toggle`].
    Toggle,
    /// [`Activator::unbind`].
    Unbind,
}

struct Slot<D: Dom> {
    generation: u32,
    activator: Option<Activator<D>>,
}

/// Owns the activators of one document.
pub struct Activators<D: Dom> {
    slots: Vec<Slot<D>>,
    free: Vec<u32>,
    by_host: HashMap<D::Element, ActivatorId>,
}

impl<D: Dom> Activators<D> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            by_host: HashMap::new(),
        }
    }

    /// Number of live activators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_host.len()
    }

    /// Returns `true` if no activator is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_host.is_empty()
    }

    /// Attaches an activator to `host`, or returns the one already there.
    pub fn attach(&mut self, dom: &mut D, host: D::Element, config: Config<D>) -> Attach {
        if let Some(&id) = self.by_host.get(&host) {
            tracing::debug!(host = ?host, ?id, "activator already attached");
            return Attach::Existing(id);
        }

        let activator = Activator::new(dom, host.clone(), config);
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.activator = Some(activator);
                ActivatorId(idx, slot.generation)
            }
            None => {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "one activator per host element; u32 slots are ample"
                )]
                let idx = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 1,
                    activator: Some(activator),
                });
                ActivatorId(idx, 1)
            }
        };
        self.by_host.insert(host, id);
        Attach::Created(id)
    }

    /// Returns `true` if `id` refers to a live activator.
    #[must_use]
    pub fn is_alive(&self, id: ActivatorId) -> bool {
        self.get(id).is_some()
    }

    /// The activator attached to `host`, if any.
    #[must_use]
    pub fn find(&self, host: &D::Element) -> Option<ActivatorId> {
        self.by_host.get(host).copied()
    }

    /// Borrows a live activator.
    #[must_use]
    pub fn get(&self, id: ActivatorId) -> Option<&Activator<D>> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.activator.as_ref())
    }

    /// Mutably borrows a live activator.
    pub fn get_mut(&mut self, id: ActivatorId) -> Option<&mut Activator<D>> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.activator.as_mut())
    }

    /// Routes an event dispatched on `host` to its activator.
    ///
    /// Returns `true` if an activator handled it.
    pub fn dispatch<E>(&mut self, dom: &mut D, host: &D::Element, event: &mut E) -> bool
    where
        E: TriggerEvent + ?Sized,
    {
        let Some(id) = self.find(host) else {
            return false;
        };
        self.get_mut(id)
            .is_some_and(|activator| activator.handle(dom, event))
    }

    /// Runs `command` on a live activator. Returns `false` for stale handles.
    pub fn invoke(&mut self, dom: &mut D, id: ActivatorId, command: Command) -> bool {
        let Some(activator) = self.get_mut(id) else {
            return false;
        };
        match command {
            Command::Toggle => activator.toggle(dom),
            Command::Unbind => {
                activator.unbind(dom);
            }
        }
        true
    }

    /// Unbinds and removes an activator, returning it.
    pub fn detach(&mut self, dom: &mut D, id: ActivatorId) -> Option<Activator<D>> {
        let slot = self
            .slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)?;
        let mut activator = slot.activator.take()?;
        activator.unbind(dom);
        self.by_host.remove(activator.host());
        self.free.push(id.0);
        tracing::debug!(host = ?activator.host(), ?id, "detached activator");
        Some(activator)
    }
}

impl<D: Dom> Default for Activators<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dom> fmt::Debug for Activators<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activators")
            .field("live", &self.by_host.len())
            .field("slots", &self.slots.len())
            .field("by_host", &self.by_host)
            .finish_non_exhaustive()
    }
}

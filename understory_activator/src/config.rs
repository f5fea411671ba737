// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activator configuration: target shapes, option flags, and defaults.
//!
//! A [`Config`] is built once and consumed by [`Activator::new`](crate::Activator::new).
//! Every field has a default, so the shortest configuration is `Config::new()`,
//! which toggles `is-active` on the host element whenever it is clicked.
//!
//! ```
//! use understory_activator::{Options, Target};
//!
//! // A lone selector, a list, and a selector → class mapping.
//! let one = Target::selector("#menu");
//! let many = Target::selectors(["#menu", "#overlay"]);
//! let mapped = Target::classes([("#menu", "is-open"), ("body", "has-menu")]);
//!
//! assert_eq!(Target::selector("this"), Target::Host);
//! assert_eq!(many.len(), 2);
//! assert!(!one.is_empty() && !mapped.is_empty());
//! assert_eq!(Options::default(), Options::PREVENT_DEFAULT);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::activator::{Activator, OnChange};
use crate::dom::Dom;

/// Selector marker that refers to the host element itself.
pub const HOST_MARKER: &str = "this";

/// Activation class used when none is configured.
pub const DEFAULT_ACTIVE_CLASS: &str = "is-active";

/// Trigger event used when none is configured.
pub const DEFAULT_EVENT: &str = "click";

/// Which element(s) an activator toggles, and with which class.
///
/// Construct through [`Target::selector`], [`Target::selectors`], or
/// [`Target::classes`] so that the `"this"` marker and duplicate mapping keys
/// are normalised once, up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Target {
    /// The host element, toggled with the configured active class.
    #[default]
    Host,
    /// A single selector, toggled with the configured active class.
    Selector(String),
    /// Several selectors in order, all toggled with the configured active class.
    Selectors(Vec<String>),
    /// Selector → class pairs in insertion order. The configured active class is ignored.
    ///
    /// A selector listed more than once binds once, at its first position,
    /// with its last class (see [`Target::classes`]).
    Classes(Vec<(String, String)>),
}

impl Target {
    /// A single selector; `"this"` becomes [`Target::Host`].
    pub fn selector(selector: impl Into<String>) -> Self {
        let selector = selector.into();
        if selector == HOST_MARKER {
            Self::Host
        } else {
            Self::Selector(selector)
        }
    }

    /// An ordered list of selectors sharing the configured active class.
    pub fn selectors<I, S>(selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selectors(selectors.into_iter().map(Into::into).collect())
    }

    /// A mapping from selector to the class it toggles.
    ///
    /// Entries keep their insertion order. A selector given twice keeps its
    /// first position and takes the last class, the way a repeated key in an
    /// object literal behaves.
    pub fn classes<I, S, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        let mut pairs: Vec<(String, String)> = Vec::new();
        for (selector, class) in entries {
            let selector = selector.into();
            let class = class.into();
            match pairs.iter_mut().find(|(existing, _)| *existing == selector) {
                Some(slot) => slot.1 = class,
                None => pairs.push((selector, class)),
            }
        }
        Self::Classes(pairs)
    }

    /// Number of bindings this target resolves to.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Host | Self::Selector(_) => 1,
            Self::Selectors(selectors) => selectors.len(),
            Self::Classes(_) => self.entries("").count(),
        }
    }

    /// Returns `true` if this target resolves to no bindings at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Walks the target as `(source, class)` pairs in binding order.
    pub(crate) fn entries<'a>(
        &'a self,
        active_class: &'a str,
    ) -> impl Iterator<Item = (Source<'a>, &'a str)> + 'a {
        let single = match self {
            Self::Host => Some(Source::Host),
            Self::Selector(selector) => Some(Source::of(selector)),
            Self::Selectors(_) | Self::Classes(_) => None,
        };
        let list: &'a [String] = match self {
            Self::Selectors(selectors) => selectors.as_slice(),
            _ => &[],
        };
        let pairs: &'a [(String, String)] = match self {
            Self::Classes(pairs) => pairs.as_slice(),
            _ => &[],
        };
        single
            .into_iter()
            .chain(list.iter().map(|selector| Source::of(selector)))
            .map(move |source| (source, active_class))
            .chain(
                pairs
                    .iter()
                    .enumerate()
                    .filter(move |(idx, (selector, _))| {
                        !pairs[..*idx].iter().any(|(earlier, _)| earlier == selector)
                    })
                    .map(move |(_, (selector, _))| {
                        let class = pairs
                            .iter()
                            .rev()
                            .find(|(later, _)| later == selector)
                            .map_or("", |(_, class)| class.as_str());
                        (Source::of(selector), class)
                    }),
            )
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::selector(selector)
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::selector(selector)
    }
}

impl From<Vec<String>> for Target {
    fn from(selectors: Vec<String>) -> Self {
        Self::Selectors(selectors)
    }
}

/// Where a binding's elements come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Source<'a> {
    Host,
    Query(&'a str),
}

impl<'a> Source<'a> {
    fn of(selector: &'a str) -> Self {
        if selector == HOST_MARKER {
            Self::Host
        } else {
            Self::Query(selector)
        }
    }
}

bitflags::bitflags! {
    /// Boolean activator options.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Options: u8 {
        /// Keep checkbox inputs nested in each target in sync with its active state.
        const CHECKBOX        = 0b0000_0001;
        /// Detach the listener after the first trigger.
        const ONCE            = 0b0000_0010;
        /// Suppress the trigger event's default action.
        const PREVENT_DEFAULT = 0b0000_0100;
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::PREVENT_DEFAULT
    }
}

/// Configuration for a single [`Activator`].
pub struct Config<D: Dom> {
    /// Element(s) to toggle.
    pub target: Target,
    /// Class toggled on every target, unless the target is [`Target::Classes`].
    pub active_class: String,
    /// Name of the event bound on the host element.
    pub event: String,
    /// Boolean options.
    pub options: Options,
    /// Called once per toggle, after every binding has flipped.
    pub on_change: Option<OnChange<D>>,
}

impl<D: Dom> Config<D> {
    /// A configuration with every option at its default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::Host,
            active_class: String::from(DEFAULT_ACTIVE_CLASS),
            event: String::from(DEFAULT_EVENT),
            options: Options::default(),
            on_change: None,
        }
    }

    /// Sets the target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<Target>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the class toggled on targets that don't carry their own.
    #[must_use]
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Sets the event bound on the host element.
    #[must_use]
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    /// Replaces the whole option set.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Enables or disables checkbox syncing.
    #[must_use]
    pub fn with_checkbox(mut self, enabled: bool) -> Self {
        self.options.set(Options::CHECKBOX, enabled);
        self
    }

    /// Enables or disables fire-once behavior.
    #[must_use]
    pub fn with_once(mut self, enabled: bool) -> Self {
        self.options.set(Options::ONCE, enabled);
        self
    }

    /// Enables or disables default-action suppression.
    #[must_use]
    pub fn with_prevent_default(mut self, enabled: bool) -> Self {
        self.options.set(Options::PREVENT_DEFAULT, enabled);
        self
    }

    /// Sets the change hook.
    ///
    /// The hook receives the activator and the DOM after all bindings have
    /// been toggled; it gets no description of what changed.
    #[must_use]
    pub fn with_on_change(mut self, on_change: impl FnMut(&Activator<D>, &D) + 'static) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

impl<D: Dom> Default for Config<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dom> fmt::Debug for Config<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("target", &self.target)
            .field("active_class", &self.active_class)
            .field("event", &self.event)
            .field("options", &self.options)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

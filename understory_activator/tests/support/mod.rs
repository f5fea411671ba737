// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory page for exercising activators.
//!
//! Selectors are deliberately simple: `#id`, `.class`, or a bare tag name.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use understory_activator::{Dom, TriggerEvent};

/// Handle to a node in a [`Page`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node(usize);

/// Token handed out by [`Page::bind`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Listener(u32);

#[derive(Debug, Default)]
struct Data {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    checkbox: bool,
    checked: bool,
    parent: Option<usize>,
}

#[derive(Debug, Default)]
pub struct Page {
    nodes: Vec<Data>,
    listeners: Vec<(Listener, Node, String)>,
    next_listener: u32,
}

impl Page {
    pub fn new() -> Self {
        let mut page = Self::default();
        page.push("body", None, None, false);
        page
    }

    pub fn body(&self) -> Node {
        Node(0)
    }

    /// Appends an element with an id under `parent`.
    pub fn element(&mut self, parent: Node, tag: &str, id: &str) -> Node {
        self.push(tag, Some(id), Some(parent), false)
    }

    /// Appends an `<input type="checkbox">` under `parent`.
    pub fn checkbox(&mut self, parent: Node) -> Node {
        self.push("input", None, Some(parent), true)
    }

    fn push(&mut self, tag: &str, id: Option<&str>, parent: Option<Node>, checkbox: bool) -> Node {
        self.nodes.push(Data {
            tag: tag.to_owned(),
            id: id.map(str::to_owned),
            checkbox,
            parent: parent.map(|node| node.0),
            ..Data::default()
        });
        Node(self.nodes.len() - 1)
    }

    pub fn classes(&self, node: Node) -> &[String] {
        &self.nodes[node.0].classes
    }

    pub fn is_checked(&self, node: Node) -> bool {
        self.nodes[node.0].checked
    }

    /// Number of listeners currently bound on `node` for `event`.
    pub fn listeners(&self, node: Node, event: &str) -> usize {
        self.listeners
            .iter()
            .filter(|(_, on, name)| *on == node && name == event)
            .count()
    }

    fn matches(&self, idx: usize, selector: &str) -> bool {
        let data = &self.nodes[idx];
        if let Some(id) = selector.strip_prefix('#') {
            data.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            data.classes.iter().any(|c| c == class)
        } else {
            data.tag == selector
        }
    }

    fn is_within(&self, mut idx: usize, ancestor: usize) -> bool {
        while let Some(parent) = self.nodes[idx].parent {
            if parent == ancestor {
                return true;
            }
            idx = parent;
        }
        false
    }
}

impl Dom for Page {
    type Element = Node;
    type Subscription = Listener;

    fn query(&self, selector: &str) -> impl IntoIterator<Item = Node> {
        (0..self.nodes.len())
            .filter(|&idx| self.matches(idx, selector))
            .map(Node)
            .collect::<Vec<_>>()
    }

    fn bind(&mut self, element: &Node, event: &str) -> Listener {
        let listener = Listener(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((listener, *element, event.to_owned()));
        listener
    }

    fn unbind(&mut self, subscription: Listener) {
        self.listeners.retain(|(listener, _, _)| *listener != subscription);
    }

    fn has_class(&self, element: &Node, class: &str) -> bool {
        self.nodes[element.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: &Node, class: &str) {
        if !self.has_class(element, class) {
            self.nodes[element.0].classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, element: &Node, class: &str) {
        self.nodes[element.0].classes.retain(|c| c != class);
    }

    fn checkboxes(&self, element: &Node) -> impl IntoIterator<Item = Node> {
        (0..self.nodes.len())
            .filter(|&idx| self.nodes[idx].checkbox && self.is_within(idx, element.0))
            .map(Node)
            .collect::<Vec<_>>()
    }

    fn set_checked(&mut self, checkbox: &Node, checked: bool) {
        self.nodes[checkbox.0].checked = checked;
    }
}

/// A dispatched event that records default prevention.
#[derive(Debug)]
pub struct Event {
    kind: &'static str,
    pub default_prevented: bool,
}

impl Event {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            default_prevented: false,
        }
    }

    pub fn click() -> Self {
        Self::new("click")
    }
}

impl TriggerEvent for Event {
    fn event_type(&self) -> &str {
        self.kind
    }

    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

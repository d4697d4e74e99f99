//! In-memory element tree.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::platform::{EventKind, Listener};

/// Handle of an element in a [`super::HeadlessPlatform`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

pub(crate) type SharedListener = Rc<RefCell<Listener>>;

#[derive(Default)]
pub(crate) struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub styles: BTreeMap<String, String>,
    pub attrs: BTreeMap<String, String>,
    pub text: String,
    /// Every value `text` has held, oldest first.
    pub text_history: Vec<String>,
    pub inner_html: Option<String>,
    pub value: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub listeners: Vec<(EventKind, SharedListener)>,
}

pub(crate) struct Dom {
    nodes: Vec<Element>,
}

pub(crate) const ROOT: NodeId = NodeId(0);
pub(crate) const BODY: NodeId = NodeId(1);

impl Dom {
    pub fn new() -> Self {
        let mut dom = Self { nodes: Vec::new() };
        let html = dom.create("html");
        let body = dom.create("body");
        dom.append(html, body);
        dom
    }

    pub fn create(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn get(&self, node: NodeId) -> &Element {
        &self.nodes[node.0]
    }

    pub fn get_mut(&mut self, node: NodeId) -> &mut Element {
        &mut self.nodes[node.0]
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.is_ancestor(child, parent) {
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    pub fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    pub fn clear(&mut self, node: NodeId) {
        let children = std::mem::take(&mut self.nodes[node.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        let el = &mut self.nodes[node.0];
        el.inner_html = None;
        el.text.clear();
    }

    /// Drop listeners below `root`, and on `root` when `including_root`.
    pub fn release_listeners(&mut self, root: NodeId, including_root: bool) {
        for node in self.descendants(root) {
            self.nodes[node.0].listeners.clear();
        }
        if including_root {
            self.nodes[root.0].listeners.clear();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.nodes.iter().map(|n| n.listeners.len()).sum()
    }

    fn is_ancestor(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = self.nodes[node.0].parent;
        while let Some(p) = current {
            if p == candidate {
                return true;
            }
            current = self.nodes[p.0].parent;
        }
        false
    }

    pub fn is_attached(&self, node: NodeId) -> bool {
        node == ROOT || self.is_ancestor(ROOT, node)
    }

    /// Pre-order walk below `start`, excluding `start` itself.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[start.0].children.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        out
    }

    pub fn find_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(ROOT)
            .into_iter()
            .find(|n| self.nodes[n.0].attrs.get("id").is_some_and(|v| v == id))
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.clear(node);
        let el = &mut self.nodes[node.0];
        el.text = text.to_string();
        el.text_history.push(text.to_string());
    }

    pub fn listeners(&self, node: NodeId, kind: EventKind) -> Vec<SharedListener> {
        self.nodes[node.0]
            .listeners
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, l)| Rc::clone(l))
            .collect()
    }
}

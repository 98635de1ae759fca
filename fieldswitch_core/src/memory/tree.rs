// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays element storage with topology, attributes and classes.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::id::{INVALID, NodeId};
use super::traverse::Descendants;
use crate::document::Document;

/// Struct-of-arrays storage for an element tree.
///
/// Slot 0 is the root element, created by [`new`](Self::new).
#[derive(Debug)]
pub struct MemoryDocument {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,

    // -- Element state --
    tag: Vec<String>,
    attributes: Vec<BTreeMap<String, String>>,
    classes: Vec<Vec<String>>,
    checked: Vec<bool>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// Creates a document holding only a root `body` element.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            tag: Vec::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            checked: Vec::new(),
        };
        doc.create_element("body");
        doc
    }

    /// Returns the root element.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the number of elements, attached or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tag.len()
    }

    /// Returns `true` if the document holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    // -- Allocation & topology --

    /// Creates a detached element and returns its handle.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let idx = u32::try_from(self.tag.len()).unwrap_or(INVALID);
        assert!(idx != INVALID, "element capacity exhausted");
        self.parent.push(INVALID);
        self.first_child.push(INVALID);
        self.next_sibling.push(INVALID);
        self.tag.push(tag.to_string());
        self.attributes.push(BTreeMap::new());
        self.classes.push(Vec::new());
        self.checked.push(false);
        NodeId(idx)
    }

    /// Adds `child` as the last child of `parent`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is out of range, if `child` is the root, or if
    /// `child` already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.validate(parent);
        self.validate(child);
        let p = parent.0;
        let c = child.0;
        assert!(c != 0, "the root cannot be appended");
        assert!(
            self.parent[c as usize] == INVALID,
            "child already has a parent"
        );
        assert!(
            p != c && !self.contains_idx(c, p),
            "appending would create a cycle"
        );

        self.parent[c as usize] = p;
        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to last child.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
        }
    }

    /// Creates an element with the given attributes and appends it to
    /// `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let el = self.create_element(tag);
        for &(name, value) in attrs {
            self.attributes[el.0 as usize].insert(name.to_string(), value.to_string());
        }
        self.append_child(parent, el);
        el
    }

    /// Returns a preorder iterator over the strict descendants of an element.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        self.validate(id);
        Descendants::new(self, id.0)
    }

    // -- Element state --

    /// Returns the tag name of an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        self.validate(id);
        &self.tag[id.0 as usize]
    }

    /// Returns the classes of an element, in insertion order.
    #[must_use]
    pub fn classes(&self, id: NodeId) -> &[String] {
        self.validate(id);
        &self.classes[id.0 as usize]
    }

    /// Sets the checked state of an element.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        self.validate(id);
        self.checked[id.0 as usize] = checked;
    }

    // -- Internal helpers --

    /// Returns whether `node` is a strict descendant of `ancestor`.
    fn contains_idx(&self, ancestor: u32, node: u32) -> bool {
        let mut cur = self.parent[node as usize];
        while cur != INVALID {
            if cur == ancestor {
                return true;
            }
            cur = self.parent[cur as usize];
        }
        false
    }

    /// Panics if the handle does not belong to this document.
    fn validate(&self, id: NodeId) {
        assert!(
            (id.0 as usize) < self.tag.len(),
            "NodeId({}) out of range",
            id.0
        );
    }
}

impl Document for MemoryDocument {
    type Node = NodeId;

    fn find_marked(&self, name: &str) -> Vec<NodeId> {
        let root = self.root();
        core::iter::once(root)
            .chain(self.descendants(root))
            .filter(|id| self.attributes[id.0 as usize].contains_key(name))
            .collect()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.validate(*node);
        self.attributes[node.0 as usize].get(name).cloned()
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        self.validate(*node);
        self.attributes[node.0 as usize].insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, node: &NodeId, name: &str) {
        self.validate(*node);
        self.attributes[node.0 as usize].remove(name);
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.classes(*node).iter().any(|c| c == class)
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.classes[node.0 as usize].push(class.to_string());
        }
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) {
        self.validate(*node);
        self.classes[node.0 as usize].retain(|c| c != class);
    }

    fn is_checked(&self, node: &NodeId) -> bool {
        self.validate(*node);
        self.checked[node.0 as usize]
    }

    fn descendants_with_any(&self, root: &NodeId, names: &[&str]) -> Vec<NodeId> {
        self.descendants(*root)
            .filter(|id| {
                let attrs = &self.attributes[id.0 as usize];
                names.iter().any(|name| attrs.contains_key(*name))
            })
            .collect()
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        self.validate(*ancestor);
        self.validate(*node);
        self.contains_idx(ancestor.0, node.0)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn descendants_are_preorder_and_bounded() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_element(root, "div", &[]);
        let a1 = doc.append_element(a, "span", &[]);
        let a1x = doc.append_element(a1, "input", &[]);
        let a2 = doc.append_element(a, "span", &[]);
        let b = doc.append_element(root, "div", &[]);

        let under_a: Vec<_> = doc.descendants(a).collect();
        assert_eq!(under_a, vec![a1, a1x, a2]);
        let all: Vec<_> = doc.descendants(root).collect();
        assert_eq!(all, vec![a, a1, a1x, a2, b]);
        assert_eq!(doc.descendants(b).count(), 0);
        assert_eq!(doc.tag(a1x), "input");
    }

    #[test]
    fn detached_elements_are_not_found() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let attached = doc.append_element(root, "input", &[("data-x", "1")]);
        let detached = doc.create_element("input");
        doc.set_attribute(&detached, "data-x", "2");

        assert_eq!(doc.find_marked("data-x"), vec![attached]);
    }

    #[test]
    fn find_by_attribute_matches_exact_values() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let one = doc.append_element(root, "div", &[("data-m", ""), ("data-id", "one")]);
        doc.append_element(root, "div", &[("data-m", ""), ("data-id", "one-two")]);
        doc.append_element(root, "div", &[("data-id", "one")]);

        assert_eq!(doc.find_by_attribute("data-m", "data-id", "one"), vec![one]);
    }

    #[test]
    fn classes_are_a_set() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let el = doc.append_element(root, "div", &[]);
        doc.add_class(&el, "hidden");
        doc.add_class(&el, "hidden");
        assert_eq!(doc.classes(el).len(), 1);
        doc.remove_class(&el, "hidden");
        assert!(!doc.has_class(&el, "hidden"));
        doc.remove_class(&el, "hidden");
    }

    #[test]
    fn containment_is_strict() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let outer = doc.append_element(root, "fieldset", &[]);
        let inner = doc.append_element(outer, "input", &[]);

        assert!(doc.contains(&outer, &inner));
        assert!(doc.contains(&root, &inner));
        assert!(!doc.contains(&inner, &outer));
        assert!(!doc.contains(&outer, &outer));
    }

    #[test]
    #[should_panic(expected = "child already has a parent")]
    fn double_append_panics() {
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_element(root, "div", &[]);
        let b = doc.append_element(root, "div", &[]);
        doc.append_child(b, a);
    }
}

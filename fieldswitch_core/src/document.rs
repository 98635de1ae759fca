// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document adapter contract.
//!
//! The controller never touches a DOM directly. It reads and mutates the page
//! through the [`Document`] trait, which covers exactly what conditional
//! fieldsets need:
//!
//! - **Find by marker** — every element carrying an attribute, in document
//!   order.
//! - **Find by identifier** — marker plus an exact attribute value
//!   ([`find_by_attribute`](Document::find_by_attribute) is provided in terms
//!   of the two primitives below, so implementations never build selectors
//!   from untrusted values).
//! - **Attributes** — get, set, remove.
//! - **Presentation class** — has, add, remove.
//! - **Checked state** — the current state of a trigger input.
//! - **Containment** — attribute-filtered descendant queries for fields, and
//!   an ancestor test for folding nested fieldsets.
//!
//! # Crate boundaries
//!
//! `fieldswitch_core` owns the behavior and this contract. Backend crates
//! (e.g. `fieldswitch_backend_web`) implement it over a live document;
//! [`MemoryDocument`](crate::memory::MemoryDocument) implements it over an
//! in-memory tree.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;

/// Read/write access to an element tree.
///
/// Mutating methods take `&mut self` even though a browser DOM is internally
/// mutable, so in-memory implementations need no interior mutability.
pub trait Document {
    /// Handle to one element. Equality must be element identity.
    type Node: Clone + PartialEq + Debug;

    /// Returns every element carrying attribute `name`, in document order.
    fn find_marked(&self, name: &str) -> Vec<Self::Node>;

    /// Returns the value of attribute `name` on `node`, if present.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Sets attribute `name` on `node` to `value`.
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Removes attribute `name` from `node`. Removing an absent attribute is a
    /// no-op.
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);

    /// Returns whether `node` has class `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    /// Adds class `class` to `node`.
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Removes class `class` from `node`.
    fn remove_class(&mut self, node: &Self::Node, class: &str);

    /// Returns the checked state of `node`. Non-input elements are unchecked.
    fn is_checked(&self, node: &Self::Node) -> bool;

    /// Returns descendants of `root` (excluding `root`) carrying at least one
    /// of `names`, in document order.
    fn descendants_with_any(&self, root: &Self::Node, names: &[&str]) -> Vec<Self::Node>;

    /// Returns whether `node` is a strict descendant of `ancestor`.
    fn contains(&self, ancestor: &Self::Node, node: &Self::Node) -> bool;

    /// Returns whether `node` carries attribute `name`.
    fn has_attribute(&self, node: &Self::Node, name: &str) -> bool {
        self.attribute(node, name).is_some()
    }

    /// Returns every element carrying `marker` whose `name` attribute equals
    /// `value` exactly, in document order.
    fn find_by_attribute(&self, marker: &str, name: &str, value: &str) -> Vec<Self::Node> {
        self.find_marked(marker)
            .into_iter()
            .filter(|node| self.attribute(node, name).as_deref() == Some(value))
            .collect()
    }
}

// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Document`] adapter over a live browser document.
//!
//! Queries go through `querySelectorAll` with attribute-presence selectors
//! built from schema names only; value matching happens in Rust (see
//! [`Document::find_by_attribute`]), so identifiers from the page never end up
//! inside a selector.

use alloc::string::String;
use alloc::vec::Vec;

use fieldswitch_core::document::Document;
use wasm_bindgen::JsCast as _;
use web_sys::{Element, HtmlInputElement, NodeList};

/// A [`Document`] backed by a `web_sys::Document`.
#[derive(Clone, Debug)]
pub struct DomDocument {
    document: web_sys::Document,
}

impl DomDocument {
    /// Wraps `document`.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Returns the wrapped document.
    #[must_use]
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Document for DomDocument {
    type Node = Element;

    fn find_marked(&self, name: &str) -> Vec<Element> {
        let selector = presence_selector(&[name]);
        match self.document.query_selector_all(&selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                tracing::warn!(%selector, ?err, "invalid attribute selector");
                Vec::new()
            }
        }
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn is_checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>()
            .is_some_and(HtmlInputElement::checked)
    }

    fn has_attribute(&self, node: &Element, name: &str) -> bool {
        node.has_attribute(name)
    }

    fn descendants_with_any(&self, root: &Element, names: &[&str]) -> Vec<Element> {
        let selector = presence_selector(names);
        match root.query_selector_all(&selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                tracing::warn!(%selector, ?err, "invalid attribute selector");
                Vec::new()
            }
        }
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        // `Node.contains` is inclusive.
        ancestor != node && ancestor.contains(Some(node.as_ref()))
    }
}

/// Builds a selector list matching elements that carry any of `names`.
pub(crate) fn presence_selector(names: &[&str]) -> String {
    let mut selector = String::new();
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            selector.push_str(", ");
        }
        selector.push('[');
        selector.push_str(name);
        selector.push(']');
    }
    selector
}

/// Collects the element entries of a `NodeList`, in list order.
fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

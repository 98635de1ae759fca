// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element tree.
//!
//! [`MemoryDocument`] stores elements in struct-of-arrays layout with index
//! handles ([`NodeId`]). Each element has:
//!
//! - A tag name, for diagnostics.
//! - Topology — parent, first-child, and sibling links forming an ordered tree
//!   rooted at [`MemoryDocument::root`].
//! - Attributes, an ordered class list, and a checked flag.
//!
//! Elements created with [`create_element`](MemoryDocument::create_element) are
//! detached until appended; only elements reachable from the root take part
//! in [`Document`](crate::document::Document) queries, as in a browser.
//! Document order is preorder.
//!
//! The `append_*` builders in this module write markup using a
//! [`Schema`](crate::schema::Schema), so tests and headless hosts can describe
//! a form without spelling out attribute names.

mod id;
mod markup;
mod traverse;
mod tree;

pub use id::{INVALID, NodeId};
pub use markup::TriggerMarkup;
pub use traverse::Descendants;
pub use tree::MemoryDocument;

// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::id::{INVALID, NodeId};
use super::tree::MemoryDocument;

/// A preorder iterator over the strict descendants of an element.
///
/// Created by [`MemoryDocument::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a MemoryDocument,
    root: u32,
    current: u32,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(doc: &'a MemoryDocument, root: u32) -> Self {
        Self {
            doc,
            root,
            current: doc.first_child[root as usize],
        }
    }

    /// Returns the preorder successor of `idx` within the subtree, or
    /// [`INVALID`] once the subtree is exhausted.
    fn successor(&self, idx: u32) -> u32 {
        let first = self.doc.first_child[idx as usize];
        if first != INVALID {
            return first;
        }
        let mut cur = idx;
        while cur != self.root {
            let next = self.doc.next_sibling[cur as usize];
            if next != INVALID {
                return next;
            }
            cur = self.doc.parent[cur as usize];
        }
        INVALID
    }
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == INVALID {
            return None;
        }
        let idx = self.current;
        self.current = self.successor(idx);
        Some(NodeId(idx))
    }
}

// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group exclusivity.
//!
//! Triggers sharing a group identifier form a single-choice set, even when
//! they are checkboxes. Selecting one member retracts the fieldsets of all
//! other members before the new selection is applied. The caller's own
//! fieldset is passed as the exception so it can be shown or hidden on its
//! own terms afterwards.

use alloc::vec::Vec;

use crate::changes::ChangeSet;
use crate::document::Document;
use crate::resolve::resolve_fieldset;
use crate::schema::Schema;
use crate::visibility::{self, Visibility};

/// Returns every trigger whose group identifier equals `group_id`, in
/// document order.
#[must_use]
pub fn group_members<D: Document>(doc: &D, schema: &Schema, group_id: &str) -> Vec<D::Node> {
    doc.find_by_attribute(&schema.trigger, &schema.group_id, group_id)
}

/// Hides the fieldset of every member of `group_id` except `except`.
///
/// Members whose fieldset cannot be resolved are logged and skipped. A group
/// with a single member is valid and leaves nothing to hide.
pub fn hide_group_members<D: Document>(
    doc: &mut D,
    schema: &Schema,
    group_id: &str,
    except: &D::Node,
    changes: &mut ChangeSet<D::Node>,
) {
    for member in group_members(doc, schema, group_id) {
        let fieldset = match resolve_fieldset(doc, schema, &member) {
            Ok(fieldset) => fieldset,
            Err(err) => {
                tracing::warn!(group = group_id, trigger = ?member, %err, "skipping group member");
                continue;
            }
        };
        if fieldset != *except {
            visibility::apply(doc, schema, &fieldset, Visibility::Hidden, changes);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::memory::{MemoryDocument, TriggerMarkup};

    #[test]
    fn hides_every_member_but_the_exception() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_fieldset(&s, root, "a");
        let b = doc.append_fieldset(&s, root, "b");
        let c = doc.append_fieldset(&s, root, "c");
        let outsider = doc.append_fieldset(&s, root, "d");
        for id in ["a", "b", "c"] {
            doc.append_trigger(&s, root, &TriggerMarkup::new(id).group("g"));
        }
        doc.append_trigger(&s, root, &TriggerMarkup::new("d").group("other"));

        let mut changes = ChangeSet::new();
        hide_group_members(&mut doc, &s, "g", &b, &mut changes);

        assert_eq!(changes.hidden, vec![a, c]);
        assert!(!doc.has_class(&b, &s.hidden_class));
        assert!(!doc.has_class(&outsider, &s.hidden_class));
    }

    #[test]
    fn broken_member_does_not_stop_the_pass() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_fieldset(&s, root, "a");
        let b = doc.append_fieldset(&s, root, "b");
        doc.append_trigger(&s, root, &TriggerMarkup::new("missing").group("g"));
        doc.append_trigger(&s, root, &TriggerMarkup::new("a").group("g"));
        doc.append_trigger(&s, root, &TriggerMarkup::new("b").group("g"));

        let mut changes = ChangeSet::new();
        hide_group_members(&mut doc, &s, "g", &b, &mut changes);

        assert_eq!(changes.hidden, vec![a]);
    }

    #[test]
    fn group_of_one_hides_nothing() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_fieldset(&s, root, "a");
        doc.append_trigger(&s, root, &TriggerMarkup::new("a").group("solo"));

        let mut changes = ChangeSet::new();
        hide_group_members(&mut doc, &s, "solo", &a, &mut changes);

        assert!(changes.is_empty());
        assert_eq!(group_members(&doc, &s, "solo").len(), 1);
    }
}

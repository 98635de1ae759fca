// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Required-field synchronization.
//!
//! A field inside a hidden fieldset must not block form submission, so its
//! native `required` attribute is swapped for the was-required marker. When
//! the fieldset becomes visible again the swap is reversed.
//!
//! [`synchronize_all`] works in two passes:
//!
//! 1. **Collect** — Note the hidden fieldsets, then gather the fields carrying
//!    either attribute under each outermost fieldset. A field's *effective
//!    hidden* state is whether any hidden fieldset contains it, so a field
//!    nested in several fieldsets is suppressed while any of them is hidden.
//!    Outermost subtrees are disjoint, so every field is visited once.
//! 2. **Reconcile** — Bring each field to [`FieldState::Suppressed`] or
//!    [`FieldState::Required`] according to its effective state.
//!
//! The work is linear in the number of fields when fieldsets do not nest, and
//! grows with the number of hidden fieldsets otherwise.
//!
//! The pass covers every fieldset on every call, since group exclusivity and
//! nesting change the visibility of fieldsets other than the one acted upon.
//! A second call with no intervening change records nothing.

use alloc::vec::Vec;

use crate::changes::ChangeSet;
use crate::document::Document;
use crate::schema::{REQUIRED_VALUE, Schema, WAS_REQUIRED_VALUE};
use crate::visibility::{Visibility, visibility_of};

/// Constraint state of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldState {
    /// The native `required` attribute is present.
    Required,
    /// The constraint is suppressed and recorded by the was-required marker.
    Suppressed,
}

/// Returns the constraint state of `field`, or `None` if it carries neither
/// attribute.
///
/// A field carrying both (never the case after synchronization) reads as
/// [`FieldState::Required`].
#[must_use]
pub fn field_state<D: Document>(doc: &D, schema: &Schema, field: &D::Node) -> Option<FieldState> {
    if doc.has_attribute(field, &schema.required) {
        Some(FieldState::Required)
    } else if doc.has_attribute(field, &schema.was_required) {
        Some(FieldState::Suppressed)
    } else {
        None
    }
}

/// Reconciles the constraint of every field inside every fieldset with the
/// fieldset's visibility.
pub fn synchronize_all<D: Document>(doc: &mut D, schema: &Schema, changes: &mut ChangeSet<D::Node>) {
    let names = [schema.required.as_str(), schema.was_required.as_str()];

    // Collect.
    let fieldsets = doc.find_marked(&schema.fieldset);
    let hidden_fieldsets: Vec<&D::Node> = fieldsets
        .iter()
        .filter(|fieldset| visibility_of(doc, schema, fieldset) == Visibility::Hidden)
        .collect();

    let mut fields: Vec<(D::Node, bool)> = Vec::new();
    // Document order is preorder, so a nested fieldset always follows the
    // outermost fieldset enclosing it.
    let mut outermost: Option<&D::Node> = None;
    for fieldset in &fieldsets {
        if outermost.is_some_and(|outer| doc.contains(outer, fieldset)) {
            continue;
        }
        outermost = Some(fieldset);
        for field in doc.descendants_with_any(fieldset, &names) {
            let hidden = hidden_fieldsets.iter().any(|fs| doc.contains(fs, &field));
            fields.push((field, hidden));
        }
    }

    // Reconcile.
    let mut restored = Vec::new();
    let mut suppressed = Vec::new();
    for (field, hidden) in fields {
        if hidden {
            if suppress(doc, schema, &field) {
                suppressed.push(field);
            }
        } else if restore(doc, schema, &field) {
            restored.push(field);
        }
    }
    changes.record_fields(restored, suppressed);
}

/// Moves `field` to [`FieldState::Suppressed`]. Returns `true` if its
/// `required` attribute was removed.
fn suppress<D: Document>(doc: &mut D, schema: &Schema, field: &D::Node) -> bool {
    let had_required = doc.has_attribute(field, &schema.required);
    if had_required {
        doc.remove_attribute(field, &schema.required);
    }
    if !doc.has_attribute(field, &schema.was_required) {
        doc.set_attribute(field, &schema.was_required, WAS_REQUIRED_VALUE);
    }
    had_required
}

/// Moves `field` to [`FieldState::Required`]. Returns `true` if its
/// `required` attribute was added.
fn restore<D: Document>(doc: &mut D, schema: &Schema, field: &D::Node) -> bool {
    if doc.has_attribute(field, &schema.was_required) {
        doc.remove_attribute(field, &schema.was_required);
    }
    if doc.has_attribute(field, &schema.required) {
        return false;
    }
    doc.set_attribute(field, &schema.required, REQUIRED_VALUE);
    true
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn hidden_fieldset_suppresses_required_fields() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_hidden_fieldset(&s, root, "a");
        let required = doc.append_field(&s, fs, true);
        let optional = doc.append_field(&s, fs, false);

        let mut changes = ChangeSet::new();
        synchronize_all(&mut doc, &s, &mut changes);

        assert_eq!(changes.suppressed, vec![required]);
        assert_eq!(field_state(&doc, &s, &required), Some(FieldState::Suppressed));
        assert_eq!(doc.attribute(&required, &s.was_required).as_deref(), Some("true"));
        assert_eq!(field_state(&doc, &s, &optional), None);
    }

    #[test]
    fn visible_fieldset_restores_suppressed_fields() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_fieldset(&s, root, "a");
        let field = doc.append_field(&s, fs, false);
        doc.set_attribute(&field, &s.was_required, "true");

        let mut changes = ChangeSet::new();
        synchronize_all(&mut doc, &s, &mut changes);

        assert_eq!(changes.restored, vec![field]);
        assert_eq!(doc.attribute(&field, &s.required).as_deref(), Some("required"));
        assert!(!doc.has_attribute(&field, &s.was_required));
    }

    #[test]
    fn both_attributes_collapse_to_one() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let shown = doc.append_fieldset(&s, root, "a");
        let hidden = doc.append_hidden_fieldset(&s, root, "b");
        let x = doc.append_field(&s, shown, true);
        let y = doc.append_field(&s, hidden, true);
        doc.set_attribute(&x, &s.was_required, "true");
        doc.set_attribute(&y, &s.was_required, "true");

        synchronize_all(&mut doc, &s, &mut ChangeSet::new());

        assert!(doc.has_attribute(&x, &s.required) && !doc.has_attribute(&x, &s.was_required));
        assert!(!doc.has_attribute(&y, &s.required) && doc.has_attribute(&y, &s.was_required));
    }

    #[test]
    fn second_pass_changes_nothing() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let a = doc.append_hidden_fieldset(&s, root, "a");
        let b = doc.append_fieldset(&s, root, "b");
        doc.append_field(&s, a, true);
        let restored = doc.append_field(&s, b, false);
        doc.set_attribute(&restored, &s.was_required, "true");

        let mut first = ChangeSet::new();
        synchronize_all(&mut doc, &s, &mut first);
        assert!(!first.is_empty());

        let mut second = ChangeSet::new();
        synchronize_all(&mut doc, &s, &mut second);
        assert!(second.is_empty());
    }

    #[test]
    fn hidden_outer_fieldset_wins_over_visible_inner() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let outer = doc.append_hidden_fieldset(&s, root, "outer");
        let inner = doc.append_fieldset(&s, outer, "inner");
        let field = doc.append_field(&s, inner, true);

        synchronize_all(&mut doc, &s, &mut ChangeSet::new());
        assert_eq!(field_state(&doc, &s, &field), Some(FieldState::Suppressed));

        doc.remove_class(&outer, &s.hidden_class);
        synchronize_all(&mut doc, &s, &mut ChangeSet::new());
        assert_eq!(field_state(&doc, &s, &field), Some(FieldState::Required));

        doc.add_class(&inner, &s.hidden_class);
        synchronize_all(&mut doc, &s, &mut ChangeSet::new());
        assert_eq!(field_state(&doc, &s, &field), Some(FieldState::Suppressed));
    }

    #[test]
    fn fields_outside_fieldsets_are_untouched() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        doc.append_hidden_fieldset(&s, root, "a");
        let loose = doc.append_field(&s, root, true);

        synchronize_all(&mut doc, &s, &mut ChangeSet::new());

        assert_eq!(field_state(&doc, &s, &loose), Some(FieldState::Required));
    }
}

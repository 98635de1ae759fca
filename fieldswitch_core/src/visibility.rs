// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fieldset visibility.
//!
//! A fieldset is hidden exactly when it carries the schema's hidden class.
//! [`show`] and [`hide`] are idempotent and touch nothing but that class.

use crate::changes::ChangeSet;
use crate::document::Document;
use crate::schema::Schema;

/// Presentation state of a fieldset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    /// The hidden class is absent.
    Visible,
    /// The hidden class is present.
    Hidden,
}

impl Visibility {
    /// The state a trigger asks for: visible when checked, flipped by
    /// `inverse`.
    #[must_use]
    pub const fn from_trigger(checked: bool, inverse: bool) -> Self {
        if checked != inverse {
            Self::Visible
        } else {
            Self::Hidden
        }
    }

    /// Returns `true` for [`Visibility::Hidden`].
    #[must_use]
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Returns the current visibility of `fieldset`.
#[must_use]
pub fn visibility_of<D: Document>(doc: &D, schema: &Schema, fieldset: &D::Node) -> Visibility {
    if doc.has_class(fieldset, &schema.hidden_class) {
        Visibility::Hidden
    } else {
        Visibility::Visible
    }
}

/// Removes the hidden class. Returns `true` if the fieldset was hidden.
pub fn show<D: Document>(doc: &mut D, schema: &Schema, fieldset: &D::Node) -> bool {
    if !doc.has_class(fieldset, &schema.hidden_class) {
        return false;
    }
    doc.remove_class(fieldset, &schema.hidden_class);
    true
}

/// Adds the hidden class. Returns `true` if the fieldset was visible.
pub fn hide<D: Document>(doc: &mut D, schema: &Schema, fieldset: &D::Node) -> bool {
    if doc.has_class(fieldset, &schema.hidden_class) {
        return false;
    }
    doc.add_class(fieldset, &schema.hidden_class);
    true
}

/// Applies `visibility` to `fieldset`, recording the transition in `changes`.
pub fn apply<D: Document>(
    doc: &mut D,
    schema: &Schema,
    fieldset: &D::Node,
    visibility: Visibility,
    changes: &mut ChangeSet<D::Node>,
) {
    match visibility {
        Visibility::Visible => {
            if show(doc, schema, fieldset) {
                changes.record_shown(fieldset.clone());
            }
        }
        Visibility::Hidden => {
            if hide(doc, schema, fieldset) {
                changes.record_hidden(fieldset.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn polarity_table() {
        assert_eq!(Visibility::from_trigger(true, false), Visibility::Visible);
        assert_eq!(Visibility::from_trigger(false, false), Visibility::Hidden);
        assert_eq!(Visibility::from_trigger(true, true), Visibility::Hidden);
        assert_eq!(Visibility::from_trigger(false, true), Visibility::Visible);
    }

    #[test]
    fn show_and_hide_are_idempotent() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_fieldset(&s, root, "a");

        assert!(!show(&mut doc, &s, &fs));
        assert!(hide(&mut doc, &s, &fs));
        assert!(!hide(&mut doc, &s, &fs));
        assert_eq!(doc.classes(fs).len(), 1);
        assert_eq!(visibility_of(&doc, &s, &fs), Visibility::Hidden);
        assert!(show(&mut doc, &s, &fs));
        assert_eq!(visibility_of(&doc, &s, &fs), Visibility::Visible);
    }

    #[test]
    fn other_classes_are_left_alone() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_fieldset(&s, root, "a");
        doc.add_class(&fs, "o-card");

        let mut changes = ChangeSet::new();
        apply(&mut doc, &s, &fs, Visibility::Hidden, &mut changes);
        apply(&mut doc, &s, &fs, Visibility::Visible, &mut changes);

        assert!(changes.is_empty());
        assert!(doc.has_class(&fs, "o-card"));
    }
}

// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schema-aware builders for conditional-fieldset markup.

use super::id::NodeId;
use super::tree::MemoryDocument;
use crate::document::Document;
use crate::schema::{INVERSE_VALUE, REQUIRED_VALUE, Schema};

/// Markup options for a trigger input.
///
/// ```
/// use fieldswitch_core::memory::TriggerMarkup;
///
/// let markup = TriggerMarkup::new("billing").group("address").checked();
/// assert_eq!(markup.group, Some("address"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerMarkup<'a> {
    /// Identifier of the fieldset the trigger controls.
    pub fieldset: &'a str,
    /// Exclusivity group, if any.
    pub group: Option<&'a str>,
    /// Whether polarity is inverted.
    pub inverse: bool,
    /// Initial checked state.
    pub checked: bool,
}

impl<'a> TriggerMarkup<'a> {
    /// A non-inverse, ungrouped, unchecked trigger for `fieldset`.
    #[must_use]
    pub const fn new(fieldset: &'a str) -> Self {
        Self {
            fieldset,
            group: None,
            inverse: false,
            checked: false,
        }
    }

    /// Places the trigger in group `group`.
    #[must_use]
    pub const fn group(mut self, group: &'a str) -> Self {
        self.group = Some(group);
        self
    }

    /// Inverts the trigger's polarity.
    #[must_use]
    pub const fn inverse(mut self) -> Self {
        self.inverse = true;
        self
    }

    /// Starts the trigger checked.
    #[must_use]
    pub const fn checked(mut self) -> Self {
        self.checked = true;
        self
    }
}

impl MemoryDocument {
    /// Appends a visible fieldset container with identifier `id`.
    pub fn append_fieldset(&mut self, schema: &Schema, parent: NodeId, id: &str) -> NodeId {
        let el = self.append_element(parent, "fieldset", &[]);
        self.set_attribute(&el, &schema.fieldset, "");
        self.set_attribute(&el, &schema.fieldset_id, id);
        el
    }

    /// Appends a fieldset container that starts hidden.
    pub fn append_hidden_fieldset(&mut self, schema: &Schema, parent: NodeId, id: &str) -> NodeId {
        let el = self.append_fieldset(schema, parent, id);
        self.add_class(&el, &schema.hidden_class);
        el
    }

    /// Appends a checkbox or radio trigger described by `markup`.
    pub fn append_trigger(
        &mut self,
        schema: &Schema,
        parent: NodeId,
        markup: &TriggerMarkup<'_>,
    ) -> NodeId {
        let el = self.append_element(parent, "input", &[]);
        self.set_attribute(&el, &schema.trigger, "");
        self.set_attribute(&el, &schema.fieldset_ref, markup.fieldset);
        if let Some(group) = markup.group {
            self.set_attribute(&el, &schema.group_id, group);
        }
        if markup.inverse {
            self.set_attribute(&el, &schema.inverse, INVERSE_VALUE);
        }
        self.set_checked(el, markup.checked);
        el
    }

    /// Appends an input field, carrying the native `required` constraint when
    /// `required` is set.
    pub fn append_field(&mut self, schema: &Schema, parent: NodeId, required: bool) -> NodeId {
        let el = self.append_element(parent, "input", &[]);
        if required {
            self.set_attribute(&el, &schema.required, REQUIRED_VALUE);
        }
        el
    }
}

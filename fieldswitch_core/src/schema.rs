// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markup vocabulary binding triggers to fieldsets.
//!
//! The defaults match the `data-conditional-*` contract. Note that a trigger
//! names its fieldset with the same attribute a fieldset uses to name itself;
//! the two are kept as separate fields so hosts can split them.

use alloc::string::String;

/// Value written to the was-required marker when a constraint is suppressed.
pub const WAS_REQUIRED_VALUE: &str = "true";

/// Value written to the native `required` attribute when it is restored.
pub const REQUIRED_VALUE: &str = "required";

/// Value of the inverse attribute that flips a trigger's polarity.
pub const INVERSE_VALUE: &str = "true";

/// Attribute and class names used to find triggers, fieldsets and fields.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Schema {
    /// Marker attribute on trigger inputs.
    pub trigger: String,
    /// Marker attribute on fieldset containers.
    pub fieldset: String,
    /// Identifier attribute on fieldset containers.
    pub fieldset_id: String,
    /// Attribute on a trigger naming the fieldset it controls.
    pub fieldset_ref: String,
    /// Optional attribute on a trigger naming its exclusivity group.
    pub group_id: String,
    /// Optional attribute on a trigger; [`INVERSE_VALUE`] inverts polarity.
    pub inverse: String,
    /// Marker on a field whose `required` constraint is currently suppressed.
    pub was_required: String,
    /// The native constraint attribute.
    pub required: String,
    /// Class present on a fieldset while it is hidden.
    pub hidden_class: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            trigger: "data-has-conditional-fieldset".into(),
            fieldset: "data-conditional-fieldset".into(),
            fieldset_id: "data-conditional-fieldset-id".into(),
            fieldset_ref: "data-conditional-fieldset-id".into(),
            group_id: "data-conditional-group-id".into(),
            inverse: "data-conditional-inverse".into(),
            was_required: "data-conditional-was-required".into(),
            required: "required".into(),
            hidden_class: "o-conditional-fieldset--is-hidden".into(),
        }
    }
}

impl Schema {
    /// Returns whether an inverse attribute value inverts polarity.
    ///
    /// Only the exact string `"true"` counts; an empty or `"false"` value
    /// leaves the trigger non-inverse.
    #[must_use]
    pub fn is_inverse_value(value: Option<&str>) -> bool {
        value == Some(INVERSE_VALUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_reference_shares_fieldset_identifier() {
        let schema = Schema::default();
        assert_eq!(schema.fieldset_ref, schema.fieldset_id);
        assert_ne!(schema.trigger, schema.fieldset);
    }

    #[test]
    fn only_exact_true_inverts() {
        assert!(Schema::is_inverse_value(Some("true")));
        assert!(!Schema::is_inverse_value(Some("")));
        assert!(!Schema::is_inverse_value(Some("TRUE")));
        assert!(!Schema::is_inverse_value(Some("false")));
        assert!(!Schema::is_inverse_value(None));
    }
}

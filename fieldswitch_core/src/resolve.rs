// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger → fieldset lookup.

use crate::document::Document;
use crate::error::ConfigurationError;
use crate::schema::Schema;

/// Returns the single fieldset bound to `trigger`.
///
/// The trigger's reference attribute is matched exactly against the
/// identifier of every element carrying the fieldset marker.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] if the trigger has no reference, or if the
/// reference matches zero or several fieldsets.
pub fn resolve_fieldset<D: Document>(
    doc: &D,
    schema: &Schema,
    trigger: &D::Node,
) -> Result<D::Node, ConfigurationError> {
    let reference = doc.attribute(trigger, &schema.fieldset_ref).ok_or_else(|| {
        ConfigurationError::MissingReference {
            attribute: schema.fieldset_ref.clone(),
        }
    })?;

    let mut matches = doc.find_by_attribute(&schema.fieldset, &schema.fieldset_id, &reference);
    match matches.len() {
        0 => Err(ConfigurationError::FieldsetNotFound { reference }),
        1 => Ok(matches.swap_remove(0)),
        count => Err(ConfigurationError::AmbiguousFieldset { reference, count }),
    }
}

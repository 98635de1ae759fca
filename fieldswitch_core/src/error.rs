// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.
//!
//! A misconfigured trigger/fieldset pair is a markup defect, not a runtime
//! fault. Every error here is reported for one trigger only; the controller
//! logs it and carries on with the rest of the page.

use alloc::string::String;

/// A trigger whose markup does not bind it to exactly one fieldset.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// The trigger carries no fieldset reference attribute.
    #[error("trigger has no `{attribute}` attribute")]
    MissingReference {
        /// Name of the missing attribute.
        attribute: String,
    },
    /// No fieldset carries the referenced identifier.
    #[error("no fieldset with id `{reference}`")]
    FieldsetNotFound {
        /// The identifier the trigger refers to.
        reference: String,
    },
    /// More than one fieldset carries the referenced identifier.
    #[error("{count} fieldsets share id `{reference}`")]
    AmbiguousFieldset {
        /// The identifier the trigger refers to.
        reference: String,
        /// How many fieldsets matched.
        count: usize,
    },
    /// The element was not discovered as a trigger when the controller
    /// started.
    #[error("element is not a registered trigger")]
    UnregisteredTrigger,
}

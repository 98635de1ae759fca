// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger registry and per-trigger transition.
//!
//! A [`Controller`] is built once per page by [`Controller::init`], which
//! discovers every trigger and brings the page to a consistent state. After
//! that, every change event on a trigger is forwarded to
//! [`Controller::on_trigger_changed`]:
//!
//! 1. Resolve the trigger's fieldset.
//! 2. Compute the desired [`Visibility`] from the checked state and the
//!    inverse flag.
//! 3. If the trigger belongs to a group, hide the other members' fieldsets.
//! 4. Apply the desired visibility to the trigger's own fieldset.
//! 5. Synchronize every field constraint on the page.
//!
//! Event listeners are thin adapters around step 1–5; tests drive the
//! transition directly with literal inputs.

use alloc::string::String;
use alloc::vec::Vec;

use crate::changes::ChangeSet;
use crate::document::Document;
use crate::error::ConfigurationError;
use crate::group::hide_group_members;
use crate::resolve::resolve_fieldset;
use crate::schema::Schema;
use crate::validation::synchronize_all;
use crate::visibility::{self, Visibility};

/// Configuration for a [`Controller`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Markup vocabulary.
    pub schema: Schema,
    /// Derive each fieldset's initial visibility from its trigger's checked
    /// state before the first synchronization. When `false`, the hidden
    /// classes rendered into the page are trusted as-is.
    pub reconcile_on_init: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            schema: Schema::default(),
            reconcile_on_init: true,
        }
    }
}

/// A trigger as read from the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerBinding<N> {
    /// The trigger element.
    pub trigger: N,
    /// Its exclusivity group, if any.
    pub group: Option<String>,
    /// Whether its polarity is inverted.
    pub inverse: bool,
}

impl<N> TriggerBinding<N> {
    /// Reads the group and inverse attributes of `trigger`.
    pub fn read<D: Document<Node = N>>(doc: &D, schema: &Schema, trigger: N) -> Self {
        let group = doc.attribute(&trigger, &schema.group_id);
        let inverse = Schema::is_inverse_value(doc.attribute(&trigger, &schema.inverse).as_deref());
        Self {
            trigger,
            group,
            inverse,
        }
    }

    /// The visibility this trigger asks for when its checked state is
    /// `checked`.
    #[must_use]
    pub const fn desired(&self, checked: bool) -> Visibility {
        Visibility::from_trigger(checked, self.inverse)
    }
}

/// Owns the triggers discovered on a page and applies their transitions.
///
/// The controller does not own the document; each call borrows it, so the
/// same controller works with any [`Document`] implementation.
#[derive(Clone, Debug)]
pub struct Controller<N> {
    config: ControllerConfig,
    triggers: Vec<TriggerBinding<N>>,
}

impl<N: Clone + PartialEq + core::fmt::Debug> Controller<N> {
    /// Discovers every trigger in `doc` and performs the first
    /// synchronization pass.
    ///
    /// With no triggers on the page, the document is left untouched.
    /// Misconfigured triggers are logged and still registered; their change
    /// events will keep failing with the same [`ConfigurationError`] without
    /// affecting the rest of the page.
    pub fn init<D: Document<Node = N>>(doc: &mut D, config: ControllerConfig) -> (Self, ChangeSet<N>) {
        let schema = &config.schema;
        let triggers: Vec<_> = doc
            .find_marked(&schema.trigger)
            .into_iter()
            .map(|trigger| TriggerBinding::read(doc, schema, trigger))
            .collect();

        let mut changes = ChangeSet::new();
        if triggers.is_empty() {
            tracing::debug!("no conditional triggers found");
            return (Self { config, triggers }, changes);
        }

        for binding in &triggers {
            if let Err(err) = resolve_fieldset(doc, schema, &binding.trigger) {
                tracing::warn!(trigger = ?binding.trigger, %err, "misconfigured trigger");
            }
        }

        let controller = Self { config, triggers };
        if controller.config.reconcile_on_init {
            controller.reconcile(doc, &mut changes);
        }
        synchronize_all(doc, &controller.config.schema, &mut changes);

        tracing::debug!(
            triggers = controller.triggers.len(),
            shown = changes.shown.len(),
            hidden = changes.hidden.len(),
            suppressed = changes.suppressed.len(),
            "conditional fieldsets initialized"
        );
        (controller, changes)
    }

    /// Returns the controller's configuration.
    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Returns the discovered triggers, in document order.
    #[must_use]
    pub fn triggers(&self) -> &[TriggerBinding<N>] {
        &self.triggers
    }

    /// Returns the binding for `trigger`, if it was discovered at init.
    #[must_use]
    pub fn binding(&self, trigger: &N) -> Option<&TriggerBinding<N>> {
        self.triggers.iter().find(|b| b.trigger == *trigger)
    }

    /// Applies a trigger's new checked state to the page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnregisteredTrigger`] for an element not
    /// discovered at init, or the resolver's error if the trigger's fieldset
    /// cannot be resolved. In both cases the document is left untouched.
    pub fn on_trigger_changed<D: Document<Node = N>>(
        &self,
        doc: &mut D,
        trigger: &N,
        checked: bool,
    ) -> Result<ChangeSet<N>, ConfigurationError> {
        let schema = &self.config.schema;
        let binding = self
            .binding(trigger)
            .ok_or(ConfigurationError::UnregisteredTrigger)?;
        let current = resolve_fieldset(doc, schema, trigger)?;
        let desired = binding.desired(checked);

        let mut changes = ChangeSet::new();
        if let Some(group) = &binding.group {
            hide_group_members(doc, schema, group, &current, &mut changes);
        }
        visibility::apply(doc, schema, &current, desired, &mut changes);
        synchronize_all(doc, schema, &mut changes);

        tracing::debug!(
            trigger = ?trigger,
            checked,
            ?desired,
            shown = changes.shown.len(),
            hidden = changes.hidden.len(),
            "trigger changed"
        );
        Ok(changes)
    }

    /// Re-runs the validation pass without any trigger change.
    pub fn synchronize<D: Document<Node = N>>(&self, doc: &mut D) -> ChangeSet<N> {
        let mut changes = ChangeSet::new();
        synchronize_all(doc, &self.config.schema, &mut changes);
        changes
    }

    /// Derives every fieldset's visibility from the current checked states.
    ///
    /// Hides are applied before shows, so a fieldset bound to several
    /// ungrouped triggers is visible if any of them asks for it. Group
    /// exclusivity takes precedence: within a group only the last member
    /// asking to be shown stays visible, and a superseded member's fieldset is
    /// hidden even if an ungrouped trigger showed it.
    fn reconcile<D: Document<Node = N>>(&self, doc: &mut D, changes: &mut ChangeSet<N>) {
        let schema = &self.config.schema;
        let mut shows: Vec<(&TriggerBinding<N>, N)> = Vec::new();

        for binding in &self.triggers {
            let Ok(fieldset) = resolve_fieldset(doc, schema, &binding.trigger) else {
                continue;
            };
            match binding.desired(doc.is_checked(&binding.trigger)) {
                Visibility::Hidden => {
                    visibility::apply(doc, schema, &fieldset, Visibility::Hidden, changes);
                }
                Visibility::Visible => shows.push((binding, fieldset)),
            }
        }

        for (binding, fieldset) in &shows {
            // A later show in the same group takes precedence.
            let superseded = binding.group.is_some()
                && shows
                    .iter()
                    .rev()
                    .find(|(other, _)| other.group == binding.group)
                    .is_some_and(|(_, winner)| winner != fieldset);
            let target = if superseded {
                Visibility::Hidden
            } else {
                Visibility::Visible
            };
            visibility::apply(doc, schema, fieldset, target, changes);
        }
    }
}

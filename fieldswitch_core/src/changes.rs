// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change tracking for a single controller operation.
//!
//! Every mutation the controller performs is recorded as a net delta: an
//! element shown and then hidden again within one operation cancels out and
//! appears in neither list. Callers can use the deltas to drive their own
//! follow-up work (focus management, analytics) without diffing the page.

use alloc::vec::Vec;

/// The set of changes produced by one [`Controller`](crate::controller::Controller)
/// operation.
///
/// Each list holds elements in the order they first changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeSet<N> {
    /// Fieldsets that went from hidden to visible.
    pub shown: Vec<N>,
    /// Fieldsets that went from visible to hidden.
    pub hidden: Vec<N>,
    /// Fields whose `required` constraint was restored.
    pub restored: Vec<N>,
    /// Fields whose `required` constraint was suppressed.
    pub suppressed: Vec<N>,
}

impl<N> Default for ChangeSet<N> {
    fn default() -> Self {
        Self {
            shown: Vec::new(),
            hidden: Vec::new(),
            restored: Vec::new(),
            suppressed: Vec::new(),
        }
    }
}

impl<N: PartialEq> ChangeSet<N> {
    /// Creates an empty change set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if nothing changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty()
            && self.hidden.is_empty()
            && self.restored.is_empty()
            && self.suppressed.is_empty()
    }

    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.shown.clear();
        self.hidden.clear();
        self.restored.clear();
        self.suppressed.clear();
    }

    /// Records a fieldset that became visible.
    pub fn record_shown(&mut self, fieldset: N) {
        record(&mut self.shown, &mut self.hidden, fieldset);
    }

    /// Records a fieldset that became hidden.
    pub fn record_hidden(&mut self, fieldset: N) {
        record(&mut self.hidden, &mut self.shown, fieldset);
    }

    /// Records a field whose constraint was restored.
    pub fn record_restored(&mut self, field: N) {
        record(&mut self.restored, &mut self.suppressed, field);
    }

    /// Records a field whose constraint was suppressed.
    pub fn record_suppressed(&mut self, field: N) {
        record(&mut self.suppressed, &mut self.restored, field);
    }

    /// Records the outcome of one synchronization pass.
    ///
    /// Each field appears at most once across `restored` and `suppressed`,
    /// so when no field deltas are pending the lists are taken as they are.
    pub(crate) fn record_fields(&mut self, restored: Vec<N>, suppressed: Vec<N>) {
        if self.restored.is_empty() && self.suppressed.is_empty() {
            self.restored = restored;
            self.suppressed = suppressed;
            return;
        }
        for field in restored {
            self.record_restored(field);
        }
        for field in suppressed {
            self.record_suppressed(field);
        }
    }
}

/// Pushes `item` onto `into`, unless it is pending in `opposite`, in which
/// case the two transitions cancel.
fn record<N: PartialEq>(into: &mut Vec<N>, opposite: &mut Vec<N>, item: N) {
    if let Some(pos) = opposite.iter().position(|n| *n == item) {
        opposite.remove(pos);
    } else if !into.contains(&item) {
        into.push(item);
    }
}

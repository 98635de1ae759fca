// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `change` event wiring.
//!
//! [`ChangeListeners`] owns the page's [`Controller`] and one JS closure per
//! trigger. Each closure is a thin adapter: it reads the trigger's checked
//! state and hands it to [`Controller::on_trigger_changed`]. Event handlers
//! run to completion one at a time, and attribute or class mutations never
//! dispatch `change`, so the shared state is never borrowed twice.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use fieldswitch_core::changes::ChangeSet;
use fieldswitch_core::controller::{Controller, ControllerConfig};
use fieldswitch_core::document::Document;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event};

use crate::dom::DomDocument;

const CHANGE: &str = "change";

type ChangeClosure = Closure<dyn FnMut(Event)>;

struct State<D: Document> {
    doc: D,
    controller: Controller<D::Node>,
}

/// Change listeners bound to every trigger of a document.
///
/// Dropping the value removes the listeners; use
/// [`keep_alive`](Self::keep_alive) to bind them for the life of the page.
pub struct ChangeListeners {
    state: Rc<RefCell<State<DomDocument>>>,
    closures: Vec<(Element, ChangeClosure)>,
}

impl ChangeListeners {
    /// Initializes a [`Controller`] for `document` and attaches a `change`
    /// listener to each discovered trigger.
    ///
    /// # Errors
    ///
    /// Returns the exception raised by `addEventListener`. Listeners attached
    /// before the failure are removed again.
    pub fn attach(document: web_sys::Document, config: ControllerConfig) -> Result<Self, JsValue> {
        let mut doc = DomDocument::new(document);
        let (controller, _) = Controller::init(&mut doc, config);
        let triggers: Vec<Element> = controller
            .triggers()
            .iter()
            .map(|binding| binding.trigger.clone())
            .collect();

        let mut listeners = Self {
            state: Rc::new(RefCell::new(State { doc, controller })),
            closures: Vec::with_capacity(triggers.len()),
        };

        for trigger in triggers {
            let state = Rc::clone(&listeners.state);
            let target = trigger.clone();
            let closure = Closure::wrap(Box::new(move |_event: Event| {
                let _ = on_change::<DomDocument>(&state, &target);
            }) as Box<dyn FnMut(Event)>);
            trigger.add_event_listener_with_callback(CHANGE, closure.as_ref().unchecked_ref())?;
            listeners.closures.push((trigger, closure));
        }

        tracing::debug!(triggers = listeners.closures.len(), "change listeners attached");
        Ok(listeners)
    }

    /// Returns the number of triggers being listened to.
    #[must_use]
    pub fn len(&self) -> usize {
        self.closures.len()
    }

    /// Returns `true` if the page had no triggers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }

    /// Leaves the listeners attached for the rest of the page's life.
    pub fn keep_alive(self) {
        core::mem::forget(self);
    }
}

/// Forwards one change event to the controller.
///
/// Returns `None` if the event was dropped, either because the state is
/// already borrowed or because the trigger is misconfigured.
fn on_change<D: Document>(
    state: &RefCell<State<D>>,
    trigger: &D::Node,
) -> Option<ChangeSet<D::Node>> {
    let Ok(mut state) = state.try_borrow_mut() else {
        tracing::warn!(?trigger, "re-entrant change event ignored");
        return None;
    };
    let State { doc, controller } = &mut *state;
    let checked = doc.is_checked(trigger);
    match controller.on_trigger_changed(doc, trigger, checked) {
        Ok(changes) => Some(changes),
        Err(err) => {
            tracing::warn!(?trigger, %err, "ignoring change on misconfigured trigger");
            None
        }
    }
}

impl Drop for ChangeListeners {
    fn drop(&mut self) {
        for (trigger, closure) in &self.closures {
            let _ = trigger
                .remove_event_listener_with_callback(CHANGE, closure.as_ref().unchecked_ref());
        }
    }
}

impl core::fmt::Debug for ChangeListeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeListeners")
            .field("triggers", &self.closures.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use fieldswitch_core::memory::{MemoryDocument, NodeId, TriggerMarkup};
    use fieldswitch_core::schema::Schema;

    use super::*;

    fn state_for(mut doc: MemoryDocument) -> RefCell<State<MemoryDocument>> {
        let (controller, _) = Controller::init(&mut doc, ControllerConfig::default());
        RefCell::new(State { doc, controller })
    }

    fn is_hidden(state: &RefCell<State<MemoryDocument>>, fieldset: NodeId) -> bool {
        let s = Schema::default();
        state.borrow().doc.has_class(&fieldset, &s.hidden_class)
    }

    #[test]
    fn change_reads_the_current_checked_state() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_hidden_fieldset(&s, root, "extra");
        let trigger = doc.append_trigger(&s, root, &TriggerMarkup::new("extra"));
        let state = state_for(doc);

        state.borrow_mut().doc.set_checked(trigger, true);
        let changes = on_change(&state, &trigger).unwrap();
        assert_eq!(changes.shown, [fs]);
        assert!(!is_hidden(&state, fs));

        state.borrow_mut().doc.set_checked(trigger, false);
        let changes = on_change(&state, &trigger).unwrap();
        assert_eq!(changes.hidden, [fs]);
        assert!(is_hidden(&state, fs));
    }

    #[test]
    fn re_entrant_change_is_dropped() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_hidden_fieldset(&s, root, "extra");
        let trigger = doc.append_trigger(&s, root, &TriggerMarkup::new("extra"));
        let state = state_for(doc);
        state.borrow_mut().doc.set_checked(trigger, true);

        let held = state.borrow();
        assert!(on_change(&state, &trigger).is_none());
        drop(held);
        assert!(is_hidden(&state, fs));
    }

    #[test]
    fn misconfigured_trigger_is_ignored() {
        let s = Schema::default();
        let mut doc = MemoryDocument::new();
        let root = doc.root();
        let fs = doc.append_hidden_fieldset(&s, root, "present");
        let broken = doc.append_trigger(&s, root, &TriggerMarkup::new("missing").checked());
        let state = state_for(doc);

        assert!(on_change(&state, &broken).is_none());
        assert!(is_hidden(&state, fs));
    }
}

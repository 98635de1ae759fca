// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for fieldswitch.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`DomDocument`]: the [`Document`] adapter over `web_sys::Document`
//! - [`ChangeListeners`]: `change` event wiring for every trigger
//! - [`install`]: one-shot start-up, deferred until the document is parsed
//!
//! From JavaScript, call the exported `installConditionalFieldsets()` once;
//! it uses the default markup vocabulary.
//!
//! [`Document`]: fieldswitch_core::document::Document

#![no_std]

extern crate alloc;

mod dom;
mod listeners;

pub use dom::DomDocument;
pub use fieldswitch_core::controller::ControllerConfig;
pub use listeners::ChangeListeners;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// `document.readyState` while the parser is still running.
const LOADING: &str = "loading";

/// Starts conditional fieldsets on the current page.
///
/// If the document is still loading, start-up waits for `DOMContentLoaded`;
/// otherwise it happens immediately. The listeners stay attached for the
/// life of the page.
///
/// # Errors
///
/// Returns an error if there is no global `window` or `document`, or if a
/// listener cannot be registered.
pub fn install(config: ControllerConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no `document` on window"))?;

    if !is_loading(&document.ready_state()) {
        return attach_for_page(document, config);
    }

    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = attach_for_page(target, config) {
            tracing::warn!(?err, "conditional fieldsets failed to start");
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
}

/// Starts conditional fieldsets with the default markup vocabulary.
#[wasm_bindgen(js_name = installConditionalFieldsets)]
pub fn install_default() -> Result<(), JsValue> {
    install(ControllerConfig::default())
}

fn attach_for_page(document: web_sys::Document, config: ControllerConfig) -> Result<(), JsValue> {
    ChangeListeners::attach(document, config)?.keep_alive();
    Ok(())
}

/// Whether the parser is still running, i.e. `DOMContentLoaded` is pending.
fn is_loading(ready_state: &str) -> bool {
    ready_state == LOADING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_only_while_loading() {
        assert!(is_loading("loading"));
        assert!(!is_loading("interactive"));
        assert!(!is_loading("complete"));
    }

    #[test]
    fn default_config_reconciles() {
        assert!(ControllerConfig::default().reconcile_on_init);
    }
}

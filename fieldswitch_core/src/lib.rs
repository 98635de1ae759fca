// Copyright 2026 the Fieldswitch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger-driven conditional fieldsets.
//!
//! `fieldswitch_core` links the checked state of radio buttons and checkboxes
//! ("triggers") to the visibility of form sections ("fieldsets"), and keeps the
//! native `required` constraint of the fields inside those sections in step with
//! their visibility. It is `no_std` compatible (with `alloc`) and talks to the
//! host page only through the [`Document`](document::Document) trait.
//!
//! # Architecture
//!
//! ```text
//!   Backend (change event)
//!       │
//!       ▼
//!   Controller::on_trigger_changed()
//!       │
//!       ├──► resolve_fieldset()         trigger ──► its fieldset
//!       ├──► hide_group_members()       retract the other group members
//!       ├──► visibility::apply()        show / hide the fieldset
//!       └──► synchronize_all()          required ⇄ was-required
//!                   │
//!                   ▼
//!               ChangeSet ──► caller
//! ```
//!
//! **[`schema`]** — The markup vocabulary: marker attributes, identifiers and
//! the hidden class.
//!
//! **[`document`]** — The [`Document`](document::Document) adapter trait the
//! controller depends on. Backends implement it over a live DOM.
//!
//! **[`memory`]** — [`MemoryDocument`](memory::MemoryDocument), an array-backed
//! element tree implementing the adapter for tests and headless hosts.
//!
//! **[`resolve`]** — Trigger → fieldset lookup with explicit
//! [`ConfigurationError`](error::ConfigurationError)s.
//!
//! **[`visibility`]** — Idempotent show/hide of a fieldset.
//!
//! **[`group`]** — Group exclusivity: at most one visible fieldset per group.
//!
//! **[`validation`]** — Reconciles field constraints with fieldset visibility.
//!
//! **[`controller`]** — Trigger discovery, first synchronization pass, and the
//! per-trigger transition.
//!
//! **[`changes`]** — [`ChangeSet`](changes::ChangeSet), the deltas of one
//! operation.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod changes;
pub mod controller;
pub mod document;
pub mod error;
pub mod group;
pub mod memory;
pub mod resolve;
pub mod schema;
pub mod validation;
pub mod visibility;

#![doc(test(attr(deny(warnings))))]

//! Pantry Core derives nutrition, cost, and stock-depletion reports from a
//! snapshot of perishable-goods inventory records.
//!
//! The engine in [`core::services`] is pure: every report takes an
//! [`domain::InventorySnapshot`] (or slices of it) and returns structured
//! numbers. Loading records and rendering results live in [`storage`] and
//! [`cli`].

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pantry Core tracing initialized.");
    });
}

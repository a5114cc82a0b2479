#![doc(test(attr(deny(warnings))))]

//! Statement Core keeps a monthly income statement, balance sheet and cash flow
//! statement in sync inside a persisted, observable state store.

pub mod calc;
pub mod config;
pub mod errors;
pub mod forecast;
pub mod model;
pub mod storage;
pub mod store;
pub mod sync;
pub mod utils;

pub use errors::{Result, StateError};
pub use store::{InitOptions, PeriodPatch, StatePatch, StateStore, Subscription};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Statement Core tracing initialized.");
    });
}

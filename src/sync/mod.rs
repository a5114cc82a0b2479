//! Keeps P/L, B/S and C/F consistent across periods.

pub mod engine;
pub mod integration;

pub use engine::{sync_all_periods, sync_bs_to_cf, sync_pl_to_bs};
pub use integration::{cleanup_integration, initialize_integration, AutoSync, SyncTask};

//! Stateless statement calculators.
//!
//! All functions are total: they never panic, treat absent inputs as zero (the
//! records default every field), and apply no rounding. Division-based figures
//! return `None` when the denominator is zero.

pub mod bs;
pub mod cf;
pub mod pl;
pub mod ratios;

pub use bs::{bs_aggregates, BsAggregates, BALANCE_TOLERANCE};
pub use cf::{cf_aggregates, CfAggregates};
pub use pl::{pl_results, Margins, PlResults};
pub use ratios::{current_ratio, debt_to_equity, equity_ratio, return_on_assets, return_on_equity};

pub(crate) fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

pub(crate) fn percent_of(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator * 100.0 / denominator)
    }
}

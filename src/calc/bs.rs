use serde::Serialize;

use crate::model::{Assets, Equity, Liabilities};

/// Largest absolute gap between assets and liabilities plus equity that still
/// counts as balanced.
pub const BALANCE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BsAggregates {
    pub total_current_assets: f64,
    pub total_fixed_assets: f64,
    pub total_assets: f64,
    pub total_current_liabilities: f64,
    pub total_fixed_liabilities: f64,
    pub total_liabilities: f64,
    pub total_equity: f64,
    pub balanced: bool,
    /// `total_assets - (total_liabilities + total_equity)`.
    pub difference: f64,
}

pub fn bs_aggregates(assets: &Assets, liabilities: &Liabilities, equity: &Equity) -> BsAggregates {
    let total_current_assets =
        assets.current.cash + assets.current.receivables + assets.current.inventory;
    let total_fixed_assets = assets.fixed.tangible + assets.fixed.intangible;
    let total_assets = total_current_assets + total_fixed_assets;

    let total_current_liabilities =
        liabilities.current.payables + liabilities.current.short_term_debt;
    let total_fixed_liabilities = liabilities.fixed.long_term_debt;
    let total_liabilities = total_current_liabilities + total_fixed_liabilities;

    let total_equity = equity.capital + equity.retained_earnings;
    let difference = total_assets - (total_liabilities + total_equity);

    BsAggregates {
        total_current_assets,
        total_fixed_assets,
        total_assets,
        total_current_liabilities,
        total_fixed_liabilities,
        total_liabilities,
        total_equity,
        balanced: difference.abs() < BALANCE_TOLERANCE,
        difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BsRecord;

    fn sample_bs() -> BsRecord {
        let mut bs = BsRecord::default();
        bs.assets.current.cash = 1_000_000.0;
        bs.assets.current.receivables = 500_000.0;
        bs.assets.current.inventory = 300_000.0;
        bs.assets.fixed.tangible = 2_000_000.0;
        bs.assets.fixed.intangible = 500_000.0;
        bs.liabilities.current.payables = 300_000.0;
        bs.liabilities.current.short_term_debt = 200_000.0;
        bs.liabilities.fixed.long_term_debt = 1_000_000.0;
        bs.equity.capital = 2_000_000.0;
        bs.equity.retained_earnings = 800_000.0;
        bs
    }

    #[test]
    fn balanced_sheet_reports_zero_difference() {
        let bs = sample_bs();
        let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
        assert_eq!(totals.total_assets, 4_300_000.0);
        assert_eq!(totals.total_liabilities, 1_500_000.0);
        assert_eq!(totals.total_equity, 2_800_000.0);
        assert!(totals.balanced);
        assert_eq!(totals.difference, 0.0);
    }

    #[test]
    fn imbalance_beyond_tolerance_is_reported() {
        let mut bs = sample_bs();
        bs.assets.current.cash += 0.5;
        let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
        assert!(!totals.balanced);
        assert_eq!(totals.difference, 0.5);

        let mut bs = sample_bs();
        bs.assets.current.cash += 0.005;
        let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
        assert!(totals.balanced);
    }
}

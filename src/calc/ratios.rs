//! Balance sheet and return ratios. Every function yields `None` when the
//! denominator is zero.

use crate::model::BsRecord;

use super::{bs::bs_aggregates, percent_of, ratio};

/// Current assets over current liabilities.
pub fn current_ratio(bs: &BsRecord) -> Option<f64> {
    let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
    ratio(totals.total_current_assets, totals.total_current_liabilities)
}

/// Equity as a percentage of total assets.
pub fn equity_ratio(bs: &BsRecord) -> Option<f64> {
    let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
    percent_of(totals.total_equity, totals.total_assets)
}

/// Total liabilities over total equity.
pub fn debt_to_equity(bs: &BsRecord) -> Option<f64> {
    let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
    ratio(totals.total_liabilities, totals.total_equity)
}

/// Net profit as a percentage of period-end equity.
pub fn return_on_equity(net_profit: f64, bs: &BsRecord) -> Option<f64> {
    let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
    percent_of(net_profit, totals.total_equity)
}

/// Net profit as a percentage of period-end total assets.
pub fn return_on_assets(net_profit: f64, bs: &BsRecord) -> Option<f64> {
    let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
    percent_of(net_profit, totals.total_assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bs() -> BsRecord {
        let mut bs = BsRecord::default();
        bs.assets.current.cash = 300.0;
        bs.assets.current.receivables = 100.0;
        bs.assets.fixed.tangible = 600.0;
        bs.liabilities.current.payables = 200.0;
        bs.liabilities.fixed.long_term_debt = 300.0;
        bs.equity.capital = 400.0;
        bs.equity.retained_earnings = 100.0;
        bs
    }

    #[test]
    fn computes_structure_ratios() {
        let bs = sample_bs();
        assert_eq!(current_ratio(&bs), Some(2.0));
        assert_eq!(equity_ratio(&bs), Some(50.0));
        assert_eq!(debt_to_equity(&bs), Some(1.0));
        assert_eq!(return_on_equity(50.0, &bs), Some(10.0));
        assert_eq!(return_on_assets(50.0, &bs), Some(5.0));
    }

    #[test]
    fn zero_denominators_are_undefined() {
        let bs = BsRecord::default();
        assert_eq!(current_ratio(&bs), None);
        assert_eq!(equity_ratio(&bs), None);
        assert_eq!(debt_to_equity(&bs), None);
        assert_eq!(return_on_equity(10.0, &bs), None);
    }
}

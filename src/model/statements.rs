//! Statement records for a single period: income statement, balance sheet and
//! cash flow statement.
//!
//! Every numeric field defaults to `0.0` and missing fields in a persisted blob
//! deserialize as zero. Profit figures are never stored here; they are derived
//! through [`crate::calc`].

use serde::{Deserialize, Serialize};

/// Income statement (P/L) inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlRecord {
    pub revenue: f64,
    pub cogs: f64,
    pub sga_expenses: SgaExpenses,
    pub non_operating: NonOperating,
    pub tax: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SgaExpenses {
    pub personnel: f64,
    pub rent: f64,
    pub utilities: f64,
    pub marketing: f64,
    pub other: f64,
}

impl SgaExpenses {
    pub fn total(&self) -> f64 {
        self.personnel + self.rent + self.utilities + self.marketing + self.other
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonOperating {
    pub income: f64,
    pub expense: f64,
}

/// Balance sheet (B/S) snapshot at period end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BsRecord {
    pub assets: Assets,
    pub liabilities: Liabilities,
    pub equity: Equity,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Assets {
    pub current: CurrentAssets,
    pub fixed: FixedAssets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentAssets {
    pub cash: f64,
    pub receivables: f64,
    pub inventory: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixedAssets {
    pub tangible: f64,
    pub intangible: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Liabilities {
    pub current: CurrentLiabilities,
    pub fixed: FixedLiabilities,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentLiabilities {
    pub payables: f64,
    pub short_term_debt: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixedLiabilities {
    pub long_term_debt: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Equity {
    pub capital: f64,
    pub retained_earnings: f64,
}

/// Cash flow statement (C/F) for a period.
///
/// `receivables_change` and `inventory_change` are cash-flow signed: growth in
/// the underlying asset is recorded as a negative number. `payables_change` is
/// a plain delta where growth is positive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CfRecord {
    pub operating: OperatingActivities,
    pub investing: InvestingActivities,
    pub financing: FinancingActivities,
    pub beginning_cash: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OperatingActivities {
    pub profit_before_tax: f64,
    pub depreciation: f64,
    pub receivables_change: f64,
    pub inventory_change: f64,
    pub payables_change: f64,
}

/// Acquisitions are entered as positive outlays; disposals as positive proceeds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InvestingActivities {
    pub tangible_acquisition: f64,
    pub tangible_disposal: f64,
    pub intangible_acquisition: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinancingActivities {
    pub short_term_debt_change: f64,
    pub long_term_borrowing: f64,
    pub long_term_repayment: f64,
    pub dividend_paid: f64,
}

impl PlRecord {
    pub(crate) fn values(&self) -> [f64; 10] {
        [
            self.revenue,
            self.cogs,
            self.sga_expenses.personnel,
            self.sga_expenses.rent,
            self.sga_expenses.utilities,
            self.sga_expenses.marketing,
            self.sga_expenses.other,
            self.non_operating.income,
            self.non_operating.expense,
            self.tax,
        ]
    }
}

impl BsRecord {
    pub(crate) fn values(&self) -> [f64; 10] {
        [
            self.assets.current.cash,
            self.assets.current.receivables,
            self.assets.current.inventory,
            self.assets.fixed.tangible,
            self.assets.fixed.intangible,
            self.liabilities.current.payables,
            self.liabilities.current.short_term_debt,
            self.liabilities.fixed.long_term_debt,
            self.equity.capital,
            self.equity.retained_earnings,
        ]
    }
}

impl CfRecord {
    pub(crate) fn values(&self) -> [f64; 13] {
        [
            self.operating.profit_before_tax,
            self.operating.depreciation,
            self.operating.receivables_change,
            self.operating.inventory_change,
            self.operating.payables_change,
            self.investing.tangible_acquisition,
            self.investing.tangible_disposal,
            self.investing.intangible_acquisition,
            self.financing.short_term_debt_change,
            self.financing.long_term_borrowing,
            self.financing.long_term_repayment,
            self.financing.dividend_paid,
            self.beginning_cash,
        ]
    }
}

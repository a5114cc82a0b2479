use serde::Serialize;

use crate::model::PlRecord;

use super::percent_of;

/// Derived income statement figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlResults {
    pub gross_profit: f64,
    pub sga_total: f64,
    pub operating_profit: f64,
    pub ordinary_profit: f64,
    pub net_profit: f64,
    pub margins: Margins,
}

/// Profit tiers as a percentage of revenue; `None` when revenue is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    pub gross: Option<f64>,
    pub operating: Option<f64>,
    pub ordinary: Option<f64>,
    pub net: Option<f64>,
}

pub fn pl_results(pl: &PlRecord) -> PlResults {
    let gross_profit = pl.revenue - pl.cogs;
    let sga_total = pl.sga_expenses.total();
    let operating_profit = gross_profit - sga_total;
    let ordinary_profit =
        operating_profit + pl.non_operating.income - pl.non_operating.expense;
    let net_profit = ordinary_profit - pl.tax;

    PlResults {
        gross_profit,
        sga_total,
        operating_profit,
        ordinary_profit,
        net_profit,
        margins: Margins {
            gross: percent_of(gross_profit, pl.revenue),
            operating: percent_of(operating_profit, pl.revenue),
            ordinary: percent_of(ordinary_profit, pl.revenue),
            net: percent_of(net_profit, pl.revenue),
        },
    }
}

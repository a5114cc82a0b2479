use serde::Serialize;

use crate::model::CfRecord;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CfAggregates {
    pub operating_cf: f64,
    pub investing_cf: f64,
    pub financing_cf: f64,
    pub net_cash_flow: f64,
    pub ending_cash: f64,
    pub free_cash_flow: f64,
}

pub fn cf_aggregates(cf: &CfRecord) -> CfAggregates {
    let op = &cf.operating;
    let operating_cf = op.profit_before_tax
        + op.depreciation
        + op.receivables_change
        + op.inventory_change
        + op.payables_change;

    let inv = &cf.investing;
    let investing_cf = inv.tangible_disposal - inv.tangible_acquisition - inv.intangible_acquisition;

    let fin = &cf.financing;
    let financing_cf = fin.short_term_debt_change + fin.long_term_borrowing
        - fin.long_term_repayment
        - fin.dividend_paid;

    let net_cash_flow = operating_cf + investing_cf + financing_cf;

    CfAggregates {
        operating_cf,
        investing_cf,
        financing_cf,
        net_cash_flow,
        ending_cash: cf.beginning_cash + net_cash_flow,
        free_cash_flow: operating_cf + investing_cf,
    }
}

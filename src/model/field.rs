//! Typed accessors for individual statement inputs.
//!
//! Input layers address a single number inside a period through a
//! [`PeriodField`] instead of a dotted string path, so a misspelled field is a
//! compile error rather than a silent no-op.

use serde::{Deserialize, Serialize};

use super::{
    period::Period,
    statements::{BsRecord, CfRecord, PlRecord},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlField {
    Revenue,
    Cogs,
    Personnel,
    Rent,
    Utilities,
    Marketing,
    OtherSga,
    NonOperatingIncome,
    NonOperatingExpense,
    Tax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BsField {
    Cash,
    Receivables,
    Inventory,
    Tangible,
    Intangible,
    Payables,
    ShortTermDebt,
    LongTermDebt,
    Capital,
    RetainedEarnings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CfField {
    ProfitBeforeTax,
    Depreciation,
    ReceivablesChange,
    InventoryChange,
    PayablesChange,
    TangibleAcquisition,
    TangibleDisposal,
    IntangibleAcquisition,
    ShortTermDebtChange,
    LongTermBorrowing,
    LongTermRepayment,
    DividendPaid,
    BeginningCash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "statement", content = "field", rename_all = "lowercase")]
pub enum PeriodField {
    Pl(PlField),
    Bs(BsField),
    Cf(CfField),
}

impl PlRecord {
    pub fn field(&self, field: PlField) -> f64 {
        match field {
            PlField::Revenue => self.revenue,
            PlField::Cogs => self.cogs,
            PlField::Personnel => self.sga_expenses.personnel,
            PlField::Rent => self.sga_expenses.rent,
            PlField::Utilities => self.sga_expenses.utilities,
            PlField::Marketing => self.sga_expenses.marketing,
            PlField::OtherSga => self.sga_expenses.other,
            PlField::NonOperatingIncome => self.non_operating.income,
            PlField::NonOperatingExpense => self.non_operating.expense,
            PlField::Tax => self.tax,
        }
    }

    pub fn field_mut(&mut self, field: PlField) -> &mut f64 {
        match field {
            PlField::Revenue => &mut self.revenue,
            PlField::Cogs => &mut self.cogs,
            PlField::Personnel => &mut self.sga_expenses.personnel,
            PlField::Rent => &mut self.sga_expenses.rent,
            PlField::Utilities => &mut self.sga_expenses.utilities,
            PlField::Marketing => &mut self.sga_expenses.marketing,
            PlField::OtherSga => &mut self.sga_expenses.other,
            PlField::NonOperatingIncome => &mut self.non_operating.income,
            PlField::NonOperatingExpense => &mut self.non_operating.expense,
            PlField::Tax => &mut self.tax,
        }
    }
}

impl BsRecord {
    pub fn field(&self, field: BsField) -> f64 {
        match field {
            BsField::Cash => self.assets.current.cash,
            BsField::Receivables => self.assets.current.receivables,
            BsField::Inventory => self.assets.current.inventory,
            BsField::Tangible => self.assets.fixed.tangible,
            BsField::Intangible => self.assets.fixed.intangible,
            BsField::Payables => self.liabilities.current.payables,
            BsField::ShortTermDebt => self.liabilities.current.short_term_debt,
            BsField::LongTermDebt => self.liabilities.fixed.long_term_debt,
            BsField::Capital => self.equity.capital,
            BsField::RetainedEarnings => self.equity.retained_earnings,
        }
    }

    pub fn field_mut(&mut self, field: BsField) -> &mut f64 {
        match field {
            BsField::Cash => &mut self.assets.current.cash,
            BsField::Receivables => &mut self.assets.current.receivables,
            BsField::Inventory => &mut self.assets.current.inventory,
            BsField::Tangible => &mut self.assets.fixed.tangible,
            BsField::Intangible => &mut self.assets.fixed.intangible,
            BsField::Payables => &mut self.liabilities.current.payables,
            BsField::ShortTermDebt => &mut self.liabilities.current.short_term_debt,
            BsField::LongTermDebt => &mut self.liabilities.fixed.long_term_debt,
            BsField::Capital => &mut self.equity.capital,
            BsField::RetainedEarnings => &mut self.equity.retained_earnings,
        }
    }
}

impl CfRecord {
    pub fn field(&self, field: CfField) -> f64 {
        match field {
            CfField::ProfitBeforeTax => self.operating.profit_before_tax,
            CfField::Depreciation => self.operating.depreciation,
            CfField::ReceivablesChange => self.operating.receivables_change,
            CfField::InventoryChange => self.operating.inventory_change,
            CfField::PayablesChange => self.operating.payables_change,
            CfField::TangibleAcquisition => self.investing.tangible_acquisition,
            CfField::TangibleDisposal => self.investing.tangible_disposal,
            CfField::IntangibleAcquisition => self.investing.intangible_acquisition,
            CfField::ShortTermDebtChange => self.financing.short_term_debt_change,
            CfField::LongTermBorrowing => self.financing.long_term_borrowing,
            CfField::LongTermRepayment => self.financing.long_term_repayment,
            CfField::DividendPaid => self.financing.dividend_paid,
            CfField::BeginningCash => self.beginning_cash,
        }
    }

    pub fn field_mut(&mut self, field: CfField) -> &mut f64 {
        match field {
            CfField::ProfitBeforeTax => &mut self.operating.profit_before_tax,
            CfField::Depreciation => &mut self.operating.depreciation,
            CfField::ReceivablesChange => &mut self.operating.receivables_change,
            CfField::InventoryChange => &mut self.operating.inventory_change,
            CfField::PayablesChange => &mut self.operating.payables_change,
            CfField::TangibleAcquisition => &mut self.investing.tangible_acquisition,
            CfField::TangibleDisposal => &mut self.investing.tangible_disposal,
            CfField::IntangibleAcquisition => &mut self.investing.intangible_acquisition,
            CfField::ShortTermDebtChange => &mut self.financing.short_term_debt_change,
            CfField::LongTermBorrowing => &mut self.financing.long_term_borrowing,
            CfField::LongTermRepayment => &mut self.financing.long_term_repayment,
            CfField::DividendPaid => &mut self.financing.dividend_paid,
            CfField::BeginningCash => &mut self.beginning_cash,
        }
    }
}

impl Period {
    pub fn get(&self, field: PeriodField) -> f64 {
        match field {
            PeriodField::Pl(field) => self.pl.field(field),
            PeriodField::Bs(field) => self.bs.field(field),
            PeriodField::Cf(field) => self.cf.field(field),
        }
    }

    pub fn set(&mut self, field: PeriodField, value: f64) {
        *self.field_mut(field) = value;
    }

    pub fn field_mut(&mut self, field: PeriodField) -> &mut f64 {
        match field {
            PeriodField::Pl(field) => self.pl.field_mut(field),
            PeriodField::Bs(field) => self.bs.field_mut(field),
            PeriodField::Cf(field) => self.cf.field_mut(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_reach_nested_fields() {
        let mut period = Period::new(2025, 4).unwrap();
        period.set(PeriodField::Bs(BsField::ShortTermDebt), 250.0);
        period.set(PeriodField::Pl(PlField::Marketing), 40.0);
        period.set(PeriodField::Cf(CfField::DividendPaid), 12.0);

        assert_eq!(period.bs.liabilities.current.short_term_debt, 250.0);
        assert_eq!(period.pl.sga_expenses.marketing, 40.0);
        assert_eq!(period.get(PeriodField::Cf(CfField::DividendPaid)), 12.0);
    }

    #[test]
    fn readers_match_mutable_accessors() {
        let mut period = Period::new(2025, 4).unwrap();
        *period.field_mut(PeriodField::Pl(PlField::NonOperatingIncome)) = 7.5;
        *period.field_mut(PeriodField::Bs(BsField::Intangible)) = 90.0;
        *period.field_mut(PeriodField::Cf(CfField::BeginningCash)) = 33.0;

        let view = &period;
        assert_eq!(view.pl.field(PlField::NonOperatingIncome), 7.5);
        assert_eq!(view.bs.field(BsField::Intangible), 90.0);
        assert_eq!(view.cf.field(CfField::BeginningCash), 33.0);
        assert_eq!(view.get(PeriodField::Pl(PlField::Revenue)), 0.0);
    }

    #[test]
    fn field_serializes_as_tagged_pair() {
        let field = PeriodField::Bs(BsField::RetainedEarnings);
        let json = serde_json::to_value(field).unwrap();
        assert_eq!(json["statement"], "bs");
        assert_eq!(json["field"], "retainedEarnings");
    }
}

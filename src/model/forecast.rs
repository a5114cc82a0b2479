use serde::{Deserialize, Serialize};

pub const MAX_FORECAST_HORIZON: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastMethod {
    /// Compound monthly growth from a base period.
    #[default]
    Growth,
    /// Flat projection of the mean of all actual periods.
    Average,
}

/// Parameters for projecting periods beyond the last actual one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
    pub method: ForecastMethod,
    pub horizon_months: u32,
    /// Monthly revenue growth, in percent.
    pub revenue_growth_rate: f64,
    /// Monthly growth applied to cost lines, in percent.
    pub expense_growth_rate: f64,
    /// Period used as the growth base; the last actual period when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_period_index: Option<usize>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            method: ForecastMethod::Growth,
            horizon_months: 12,
            revenue_growth_rate: 0.0,
            expense_growth_rate: 0.0,
            base_period_index: None,
        }
    }
}

impl ForecastConfig {
    pub fn is_valid(&self) -> bool {
        (1..=MAX_FORECAST_HORIZON).contains(&self.horizon_months)
            && valid_rate(self.revenue_growth_rate)
            && valid_rate(self.expense_growth_rate)
    }
}

fn valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > -100.0
}

use serde::{Deserialize, Serialize};

use super::{company::CompanyRecord, forecast::ForecastConfig, period::Period};

/// Everything the store owns. `Default` is the reset state: no company, no
/// periods, not initialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationState {
    #[serde(default)]
    pub company: Option<CompanyRecord>,
    #[serde(default)]
    pub periods: Vec<Period>,
    #[serde(default)]
    pub forecast: Option<ForecastConfig>,
    #[serde(default)]
    pub current_period_index: usize,
    #[serde(default)]
    pub initialized: bool,
}

impl ApplicationState {
    pub fn current_period(&self) -> Option<&Period> {
        self.periods.get(self.current_period_index)
    }

    /// Pulls `current_period_index` back inside the period list. Returns
    /// `true` when the index had to move.
    pub fn clamp_current_index(&mut self) -> bool {
        let clamped = self
            .current_period_index
            .min(self.periods.len().saturating_sub(1));
        let moved = clamped != self.current_period_index;
        self.current_period_index = clamped;
        moved
    }

    pub fn is_valid(&self) -> bool {
        let index_ok = if self.periods.is_empty() {
            self.current_period_index == 0
        } else {
            self.current_period_index < self.periods.len()
        };
        index_ok
            && self.periods.iter().all(Period::is_valid)
            && self.company.as_ref().map_or(true, CompanyRecord::is_valid)
            && self.forecast.as_ref().map_or(true, ForecastConfig::is_valid)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_CURRENCY: &str = "JPY";
const DEFAULT_FISCAL_YEAR_END: u32 = 3;

/// Company profile attached to the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRecord {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default = "CompanyRecord::fiscal_year_end_default")]
    pub fiscal_year_end_month: u32,
    #[serde(default = "CompanyRecord::currency_default")]
    pub currency: String,
    #[serde(default)]
    pub employees: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompanyRecord {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            industry: String::new(),
            fiscal_year_end_month: DEFAULT_FISCAL_YEAR_END,
            currency: DEFAULT_CURRENCY.into(),
            employees: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && (1..=12).contains(&self.fiscal_year_end_month)
            && !self.currency.trim().is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn fiscal_year_end_default() -> u32 {
        DEFAULT_FISCAL_YEAR_END
    }

    pub fn currency_default() -> String {
        DEFAULT_CURRENCY.into()
    }
}

impl Default for CompanyRecord {
    fn default() -> Self {
        Self::new("New Company")
    }
}

//! Period, company, forecast and application-state records plus their
//! factories and structural validators.

pub mod company;
pub mod field;
pub mod forecast;
pub mod period;
pub mod state;
pub mod statements;

pub use company::CompanyRecord;
pub use field::{BsField, CfField, PeriodField, PlField};
pub use forecast::{ForecastConfig, ForecastMethod};
pub use period::{build_period_sequence, month_after, Period};
pub use state::ApplicationState;
pub use statements::{
    Assets, BsRecord, CfRecord, CurrentAssets, CurrentLiabilities, Equity, FinancingActivities,
    FixedAssets, FixedLiabilities, InvestingActivities, Liabilities, NonOperating,
    OperatingActivities, PlRecord, SgaExpenses,
};

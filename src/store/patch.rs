use crate::model::{
    ApplicationState, BsRecord, CfRecord, CompanyRecord, ForecastConfig, Period, PlRecord,
};

/// Top-level partial update for [`ApplicationState`].
///
/// Each `Some` field replaces the corresponding state field wholesale; nested
/// values are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatePatch {
    pub company: Option<Option<CompanyRecord>>,
    pub periods: Option<Vec<Period>>,
    pub forecast: Option<Option<ForecastConfig>>,
    pub current_period_index: Option<usize>,
    pub initialized: Option<bool>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company(mut self, company: Option<CompanyRecord>) -> Self {
        self.company = Some(company);
        self
    }

    pub fn periods(mut self, periods: Vec<Period>) -> Self {
        self.periods = Some(periods);
        self
    }

    pub fn forecast(mut self, forecast: Option<ForecastConfig>) -> Self {
        self.forecast = Some(forecast);
        self
    }

    pub fn current_period_index(mut self, index: usize) -> Self {
        self.current_period_index = Some(index);
        self
    }

    pub fn initialized(mut self, initialized: bool) -> Self {
        self.initialized = Some(initialized);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to(self, state: &mut ApplicationState) {
        if let Some(company) = self.company {
            state.company = company;
        }
        if let Some(periods) = self.periods {
            state.periods = periods;
        }
        if let Some(forecast) = self.forecast {
            state.forecast = forecast;
        }
        if let Some(index) = self.current_period_index {
            state.current_period_index = index;
        }
        if let Some(initialized) = self.initialized {
            state.initialized = initialized;
        }
    }
}

/// Partial update for one [`Period`]; a `Some` statement replaces the whole record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PeriodPatch {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub pl: Option<PlRecord>,
    pub bs: Option<BsRecord>,
    pub cf: Option<CfRecord>,
}

impl PeriodPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn pl(mut self, pl: PlRecord) -> Self {
        self.pl = Some(pl);
        self
    }

    pub fn bs(mut self, bs: BsRecord) -> Self {
        self.bs = Some(bs);
        self
    }

    pub fn cf(mut self, cf: CfRecord) -> Self {
        self.cf = Some(cf);
        self
    }

    pub(crate) fn apply_to(self, period: &mut Period) {
        if let Some(year) = self.year {
            period.year = year;
        }
        if let Some(month) = self.month {
            period.month = month;
        }
        if let Some(pl) = self.pl {
            period.pl = pl;
        }
        if let Some(bs) = self.bs {
            period.bs = bs;
        }
        if let Some(cf) = self.cf {
            period.cf = cf;
        }
    }
}

//! The single source of truth for the financial model.
//!
//! [`StateStore`] owns the [`ApplicationState`]. Readers always receive owned
//! copies, writers go through [`StateStore::set_state`] (or one of its period
//! helpers), and every write is persisted and broadcast to subscribers.

pub mod patch;
pub mod subscribers;

use std::{cell::RefCell, rc::Rc};

use chrono::{Datelike, Local};

use crate::{
    calc::bs_aggregates,
    config::Config,
    errors::{Result, StateError},
    forecast::{generate_forecast, ForecastPeriod},
    model::{
        build_period_sequence, ApplicationState, CompanyRecord, ForecastConfig, Period,
    },
    storage::{JsonFileStorage, Persistence},
};

pub use patch::{PeriodPatch, StatePatch};
pub use subscribers::Subscription;

use subscribers::SubscriberRegistry;

/// Options for [`StateStore::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub start_year: i32,
    pub start_month: u32,
    pub num_periods: usize,
    /// Skip restoring a persisted state and always build a fresh one.
    pub force_new: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        let today = Local::now().date_naive();
        Self {
            start_year: today.year(),
            start_month: today.month(),
            num_periods: crate::config::DEFAULT_NUM_PERIODS,
            force_new: false,
        }
    }
}

impl InitOptions {
    pub fn starting(start_year: i32, start_month: u32) -> Self {
        Self {
            start_year,
            start_month,
            ..Self::default()
        }
    }

    pub fn with_periods(mut self, num_periods: usize) -> Self {
        self.num_periods = num_periods;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.start_month) {
            return Err(StateError::InvalidArgument(format!(
                "start_month must be between 1 and 12, got {}",
                self.start_month
            )));
        }
        Ok(())
    }
}

/// A period whose balance sheet does not satisfy assets = liabilities + equity.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceIssue {
    pub index: usize,
    pub year: i32,
    pub month: u32,
    pub difference: f64,
}

/// Owns the application state, its persistence and the subscriber registry.
pub struct StateStore {
    state: ApplicationState,
    persistence: Persistence,
    subscribers: Rc<RefCell<SubscriberRegistry>>,
    default_num_periods: usize,
}

impl StateStore {
    pub fn new(persistence: Persistence) -> Self {
        Self {
            state: ApplicationState::default(),
            persistence,
            subscribers: Rc::new(RefCell::new(SubscriberRegistry::default())),
            default_num_periods: crate::config::DEFAULT_NUM_PERIODS,
        }
    }

    /// Store persisting to JSON files in the directory the config resolves to.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let backend = JsonFileStorage::new(config.resolve_state_dir())?;
        let mut store = Self::new(Persistence::new(Box::new(backend), config));
        store.default_num_periods = config.default_num_periods;
        Ok(store)
    }

    pub fn in_memory() -> Self {
        Self::new(Persistence::in_memory())
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }

    /// Default options honoring the configured period count.
    pub fn default_init_options(&self) -> InitOptions {
        InitOptions::default().with_periods(self.default_num_periods)
    }

    /// Restores the persisted state unless `force_new` is set, otherwise builds
    /// a fresh model of `num_periods` consecutive months.
    pub fn initialize(&mut self, options: InitOptions) -> Result<ApplicationState> {
        options.validate()?;

        if !options.force_new && self.load_state() {
            tracing::info!(
                periods = self.state.periods.len(),
                "restored persisted financial state"
            );
            return Ok(self.get_state());
        }

        let periods =
            build_period_sequence(options.start_year, options.start_month, options.num_periods)?;
        self.state = ApplicationState {
            company: Some(CompanyRecord::default()),
            periods,
            forecast: Some(ForecastConfig::default()),
            current_period_index: 0,
            initialized: true,
        };
        tracing::info!(
            start_year = options.start_year,
            start_month = options.start_month,
            periods = options.num_periods,
            "initialized new financial state"
        );
        self.persist();
        self.notify_subscribers();
        Ok(self.get_state())
    }

    /// Independent copy of the whole state.
    pub fn get_state(&self) -> ApplicationState {
        self.state.clone()
    }

    pub fn period(&self, index: usize) -> Option<Period> {
        self.state.periods.get(index).cloned()
    }

    pub fn current_period(&self) -> Option<Period> {
        self.state.current_period().cloned()
    }

    pub fn period_count(&self) -> usize {
        self.state.periods.len()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    /// Shallow-merges `patch`, persists when `auto_save` is set, and always notifies.
    pub fn set_state(&mut self, patch: StatePatch, auto_save: bool) -> ApplicationState {
        patch.apply_to(&mut self.state);
        if auto_save {
            self.persist();
        }
        self.notify_subscribers();
        self.get_state()
    }

    pub fn set_state_and_save(&mut self, patch: StatePatch) -> ApplicationState {
        self.set_state(patch, true)
    }

    /// Registers `callback` to receive a state copy after every change.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&ApplicationState) + 'static,
    {
        subscribers::register(&self.subscribers, Box::new(callback))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn update_period(&mut self, index: usize, patch: PeriodPatch) -> Result<ApplicationState> {
        self.ensure_index(index)?;
        let mut periods = self.state.periods.clone();
        patch.apply_to(&mut periods[index]);
        if !periods[index].is_valid() {
            return Err(StateError::InvalidArgument(format!(
                "update would leave period {} malformed",
                index
            )));
        }
        Ok(self.set_state_and_save(StatePatch::new().periods(periods)))
    }

    pub fn set_current_period(&mut self, index: usize) -> Result<ApplicationState> {
        self.ensure_index(index)?;
        Ok(self.set_state_and_save(StatePatch::new().current_period_index(index)))
    }

    pub fn add_period(&mut self, period: Period) -> Result<ApplicationState> {
        if !period.is_valid() {
            return Err(StateError::InvalidArgument(format!(
                "period {} is malformed",
                period.label()
            )));
        }
        let mut periods = self.state.periods.clone();
        periods.push(period);
        Ok(self.set_state_and_save(StatePatch::new().periods(periods)))
    }

    /// Appends an empty period for the month after the last one.
    pub fn append_next_period(&mut self) -> Result<ApplicationState> {
        let last = self.state.periods.last().ok_or_else(|| {
            StateError::InvalidArgument("no existing period to follow".into())
        })?;
        let next = last.following()?;
        self.add_period(next)
    }

    /// Removes a period; later periods shift down and the current index is clamped.
    pub fn remove_period(&mut self, index: usize) -> Result<ApplicationState> {
        self.ensure_index(index)?;
        let mut periods = self.state.periods.clone();
        periods.remove(index);
        let current = self
            .state
            .current_period_index
            .min(periods.len().saturating_sub(1));
        Ok(self.set_state_and_save(
            StatePatch::new()
                .periods(periods)
                .current_period_index(current),
        ))
    }

    pub fn save_state(&self) -> bool {
        self.persistence.save_state(&self.state)
    }

    /// Replaces the in-memory state with the persisted one. Returns `false` and
    /// leaves state untouched unless an initialized blob parses. A dangling
    /// current index is clamped into range.
    pub fn load_state(&mut self) -> bool {
        let Some(mut loaded) = self.persistence.load_state() else {
            return false;
        };
        if !loaded.initialized {
            tracing::debug!("persisted state was never initialized; ignoring it");
            return false;
        }
        let stored_index = loaded.current_period_index;
        if loaded.clamp_current_index() {
            tracing::warn!(
                stored_index,
                clamped = loaded.current_period_index,
                "persisted current period index was out of range"
            );
        }
        self.state = loaded;
        self.notify_subscribers();
        true
    }

    pub fn reset_state(&mut self) -> ApplicationState {
        self.state = ApplicationState::default();
        self.persist();
        self.notify_subscribers();
        self.get_state()
    }

    /// Projects the configured forecast from the current periods; empty when no
    /// forecast is configured.
    pub fn project_forecast(&self) -> Vec<ForecastPeriod> {
        self.state
            .forecast
            .as_ref()
            .map(|config| generate_forecast(&self.state.periods, config))
            .unwrap_or_default()
    }

    /// Periods violating the accounting identity beyond the balance tolerance.
    pub fn audit_balances(&self) -> Vec<BalanceIssue> {
        self.state
            .periods
            .iter()
            .enumerate()
            .filter_map(|(index, period)| {
                let bs = &period.bs;
                let totals = bs_aggregates(&bs.assets, &bs.liabilities, &bs.equity);
                (!totals.balanced).then(|| BalanceIssue {
                    index,
                    year: period.year,
                    month: period.month,
                    difference: totals.difference,
                })
            })
            .collect()
    }

    fn ensure_index(&self, index: usize) -> Result<()> {
        let len = self.state.periods.len();
        if index >= len {
            Err(StateError::out_of_range(index, len))
        } else {
            Ok(())
        }
    }

    fn persist(&self) {
        if !self.save_state() {
            tracing::warn!("state change kept in memory only; persistence failed");
        }
    }

    fn notify_subscribers(&self) {
        let snapshot = self.get_state();
        subscribers::broadcast(&self.subscribers, &snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::Cell;

    fn initialized_store(periods: usize) -> StateStore {
        let mut store = StateStore::in_memory();
        store
            .initialize(InitOptions::starting(2025, 1).with_periods(periods).force_new())
            .expect("initialize");
        store
    }

    #[test]
    fn initialize_builds_consecutive_periods() {
        let mut store = StateStore::in_memory();
        let state = store
            .initialize(InitOptions::starting(2025, 11).with_periods(3).force_new())
            .unwrap();
        let months: Vec<(i32, u32)> = state.periods.iter().map(|p| (p.year, p.month)).collect();
        assert_eq!(months, vec![(2025, 11), (2025, 12), (2026, 1)]);
        assert!(state.initialized);
        assert!(state.company.is_some());
        assert!(state.forecast.is_some());
        assert_eq!(state.current_period_index, 0);
    }

    #[test]
    fn initialize_rejects_bad_month() {
        let mut store = StateStore::in_memory();
        let err = store
            .initialize(InitOptions::starting(2025, 13).force_new())
            .expect_err("month 13");
        assert!(matches!(err, StateError::InvalidArgument(_)));
        assert!(!store.is_initialized());
    }

    #[test]
    fn get_state_returns_independent_copies() {
        let store = initialized_store(2);
        let mut first = store.get_state();
        let second = store.get_state();
        assert_eq!(first, second);

        first.periods[0].pl.revenue = 999.0;
        first.periods.clear();
        assert_eq!(store.get_state(), second);
        assert_eq!(store.period(0).unwrap().pl.revenue, 0.0);
    }

    #[test]
    fn set_state_without_autosave_skips_persistence() {
        let storage = MemoryStorage::new();
        let mut store = StateStore::new(Persistence::new(
            Box::new(storage.clone()),
            &Config::default(),
        ));
        let state = store.set_state(StatePatch::new().current_period_index(4), false);
        assert_eq!(state.current_period_index, 4);
        assert!(storage.is_empty());

        store.set_state(StatePatch::new().initialized(true), true);
        assert!(!storage.is_empty());
    }

    #[test]
    fn index_operations_reject_out_of_range() {
        let mut store = initialized_store(3);
        for result in [
            store.update_period(3, PeriodPatch::new().year(2030)),
            store.set_current_period(3),
            store.remove_period(7),
        ] {
            match result {
                Err(StateError::IndexOutOfRange { index, len }) => {
                    assert!(index >= 3);
                    assert_eq!(len, 3);
                }
                other => panic!("expected IndexOutOfRange, got {other:?}"),
            }
        }
    }

    #[test]
    fn update_period_rejects_invalid_month() {
        let mut store = initialized_store(1);
        let err = store
            .update_period(0, PeriodPatch::new().month(0))
            .expect_err("month 0");
        assert!(matches!(err, StateError::InvalidArgument(_)));
        assert_eq!(store.period(0).unwrap().month, 1);
    }

    #[test]
    fn remove_last_period_clamps_current_index() {
        let mut store = initialized_store(3);
        store.set_current_period(2).unwrap();
        let state = store.remove_period(2).unwrap();
        assert_eq!(state.periods.len(), 2);
        assert_eq!(state.current_period_index, 1);
    }

    #[test]
    fn remove_shifts_later_periods_down() {
        let mut store = initialized_store(3);
        let state = store.remove_period(0).unwrap();
        assert_eq!((state.periods[0].year, state.periods[0].month), (2025, 2));
        assert_eq!(state.current_period_index, 0);
    }

    #[test]
    fn append_next_period_follows_last_month() {
        let mut store = StateStore::in_memory();
        store
            .initialize(InitOptions::starting(2025, 12).with_periods(1).force_new())
            .unwrap();
        let state = store.append_next_period().unwrap();
        assert_eq!((state.periods[1].year, state.periods[1].month), (2026, 1));

        store.reset_state();
        assert!(store.append_next_period().is_err());
    }

    #[test]
    fn load_state_requires_initialized_blob() {
        let storage = MemoryStorage::new();
        let persistence = Persistence::new(Box::new(storage.clone()), &Config::default());
        persistence.save_state(&ApplicationState::default());

        let mut store = StateStore::new(Persistence::new(Box::new(storage), &Config::default()));
        store.set_state(StatePatch::new().current_period_index(9), false);
        assert!(!store.load_state());
        assert_eq!(store.get_state().current_period_index, 9);
    }

    #[test]
    fn subscribers_see_every_change() {
        let mut store = StateStore::in_memory();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let subscription = store.subscribe(move |_| seen.set(seen.get() + 1));
        assert_eq!(store.subscriber_count(), 1);

        store
            .initialize(InitOptions::starting(2025, 1).with_periods(2).force_new())
            .unwrap();
        store.set_current_period(1).unwrap();
        store.reset_state();
        assert_eq!(calls.get(), 3);

        assert!(subscription.unsubscribe());
        assert!(!subscription.unsubscribe());
        assert_eq!(store.subscriber_count(), 0);
        store.set_state(StatePatch::new().initialized(true), false);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn forecast_follows_configured_horizon() {
        let mut store = initialized_store(2);
        let forecast = ForecastConfig {
            horizon_months: 4,
            ..ForecastConfig::default()
        };
        store.set_state(StatePatch::new().forecast(Some(forecast)), false);
        let projected = store.project_forecast();
        assert_eq!(projected.len(), 4);
        assert_eq!((projected[0].year, projected[0].month), (2025, 3));

        store.set_state(StatePatch::new().forecast(None), false);
        assert!(store.project_forecast().is_empty());
    }

    #[test]
    fn audit_lists_unbalanced_periods() {
        let mut store = initialized_store(2);
        let mut period = store.period(1).unwrap();
        period.bs.assets.current.cash = 10.0;
        store
            .update_period(1, PeriodPatch::new().bs(period.bs))
            .unwrap();
        let issues = store.audit_balances();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, 1);
        assert_eq!(issues[0].difference, 10.0);
    }
}

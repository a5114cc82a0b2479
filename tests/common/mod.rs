#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use statement_core::{
    config::Config,
    model::{BsRecord, PlRecord, SgaExpenses},
    storage::{JsonFileStorage, Persistence},
    InitOptions, StateStore,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config whose data directory is a fresh temporary folder.
pub fn temp_config() -> Config {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    Config {
        data_dir: Some(base),
        ..Config::default()
    }
}

/// Store backed by JSON files in an isolated directory.
pub fn file_store(config: &Config) -> StateStore {
    let backend = JsonFileStorage::new(config.resolve_state_dir()).expect("create json storage");
    StateStore::new(Persistence::new(Box::new(backend), config))
}

pub fn initialized_store(start_year: i32, start_month: u32, periods: usize) -> StateStore {
    let mut store = StateStore::in_memory();
    store
        .initialize(
            InitOptions::starting(start_year, start_month)
                .with_periods(periods)
                .force_new(),
        )
        .expect("initialize store");
    store
}

pub fn profitable_pl(revenue: f64) -> PlRecord {
    PlRecord {
        revenue,
        cogs: revenue * 0.4,
        sga_expenses: SgaExpenses {
            personnel: revenue * 0.2,
            rent: revenue * 0.05,
            ..SgaExpenses::default()
        },
        tax: revenue * 0.05,
        ..PlRecord::default()
    }
}

pub fn reference_balance_sheet() -> BsRecord {
    let mut bs = BsRecord::default();
    bs.assets.current.cash = 1_000_000.0;
    bs.assets.current.receivables = 500_000.0;
    bs.assets.current.inventory = 300_000.0;
    bs.assets.fixed.tangible = 2_000_000.0;
    bs.assets.fixed.intangible = 500_000.0;
    bs.liabilities.current.payables = 300_000.0;
    bs.liabilities.current.short_term_debt = 200_000.0;
    bs.liabilities.fixed.long_term_debt = 1_000_000.0;
    bs.equity.capital = 2_000_000.0;
    bs.equity.retained_earnings = 800_000.0;
    bs
}

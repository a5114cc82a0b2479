use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use statement_core::{
    config::Config,
    model::{ForecastConfig, PlRecord, SgaExpenses},
    storage::{JsonFileStorage, Persistence},
    sync::sync_all_periods,
    InitOptions, PeriodPatch, StatePatch, StateStore,
};
use tempfile::tempdir;

fn build_sample_store(periods: usize) -> StateStore {
    let mut store = StateStore::in_memory();
    store
        .initialize(InitOptions::starting(2020, 1).with_periods(periods).force_new())
        .expect("initialize store");

    for index in 0..periods {
        let revenue = 1_000_000.0 + (index % 12) as f64 * 25_000.0;
        let pl = PlRecord {
            revenue,
            cogs: revenue * 0.45,
            sga_expenses: SgaExpenses {
                personnel: 200_000.0,
                rent: 50_000.0,
                marketing: (index % 5) as f64 * 10_000.0,
                ..SgaExpenses::default()
            },
            tax: revenue * 0.03,
            ..PlRecord::default()
        };
        let mut bs = store.period(index).expect("period").bs;
        bs.assets.current.receivables = 300_000.0 + (index % 7) as f64 * 5_000.0;
        bs.liabilities.current.payables = 150_000.0 + (index % 4) as f64 * 2_500.0;
        store
            .update_period(index, PeriodPatch::new().pl(pl).bs(bs))
            .expect("seed period");
    }
    store
}

fn bench_sync(c: &mut Criterion) {
    let store = build_sample_store(black_box(120));

    c.bench_function("sync_all_periods_120", |b| {
        b.iter_batched(
            || {
                let mut fresh = StateStore::in_memory();
                let patch = StatePatch::new()
                    .periods(store.get_state().periods)
                    .initialized(true);
                fresh.set_state(patch, false);
                fresh
            },
            |mut fresh| {
                black_box(sync_all_periods(&mut fresh));
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_state_io(c: &mut Criterion) {
    let mut store = build_sample_store(black_box(120));
    sync_all_periods(&mut store);
    let state = store.get_state();

    let dir = tempdir().expect("tempdir");
    let backend = JsonFileStorage::new(dir.path().to_path_buf()).expect("json storage");
    let persistence = Persistence::new(Box::new(backend), &Config::default());

    c.bench_function("state_save_120", |b| {
        b.iter(|| {
            assert!(persistence.save_state(&state));
        })
    });

    persistence.save_state(&state);

    c.bench_function("state_load_120", |b| {
        b.iter(|| {
            let loaded = persistence.load_state().expect("load state");
            black_box(loaded);
        })
    });
}

fn bench_forecast(c: &mut Criterion) {
    let store = build_sample_store(black_box(120));
    let periods = store.get_state().periods;
    let config = ForecastConfig {
        horizon_months: 60,
        revenue_growth_rate: 2.5,
        expense_growth_rate: 1.0,
        ..ForecastConfig::default()
    };

    c.bench_function("forecast_growth_60", |b| {
        b.iter(|| {
            let projected = statement_core::forecast::generate_forecast(&periods, &config);
            black_box(projected);
        })
    });
}

criterion_group!(benches, bench_sync, bench_state_io, bench_forecast);
criterion_main!(benches);

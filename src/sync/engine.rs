//! Cross-statement propagation rules.
//!
//! Each period depends only on its immediate predecessor, so chains must be
//! recomputed in ascending index order. Calls naming a period that does not
//! exist are no-ops returning `false`.

use crate::{
    calc::{cf_aggregates, pl_results},
    model::Period,
    store::{PeriodPatch, StateStore},
};

/// Sets retained earnings to the predecessor's retained earnings plus this
/// period's net profit.
pub fn sync_pl_to_bs(store: &mut StateStore, index: usize) -> bool {
    let Some(period) = store.period(index) else {
        tracing::debug!(index, "pl->bs sync skipped; no such period");
        return false;
    };
    let previous_retained = previous_period(store, index)
        .map(|previous| previous.bs.equity.retained_earnings)
        .unwrap_or(0.0);
    let net_profit = pl_results(&period.pl).net_profit;

    let mut bs = period.bs;
    bs.equity.retained_earnings = previous_retained + net_profit;
    write_back(store, index, PeriodPatch::new().bs(bs))
}

/// Derives working-capital deltas and beginning cash from the balance sheets,
/// then forces B/S cash to the resulting C/F ending cash.
///
/// `profit_before_tax` receives ordinary profit, and any cash value entered for
/// this period is overwritten.
pub fn sync_bs_to_cf(store: &mut StateStore, index: usize) -> bool {
    let Some(period) = store.period(index) else {
        tracing::debug!(index, "bs->cf sync skipped; no such period");
        return false;
    };
    let previous = previous_period(store, index);

    let Period { pl, mut bs, mut cf, .. } = period;
    let current_assets = &bs.assets.current;
    let current_liabilities = &bs.liabilities.current;

    match previous {
        Some(previous) => {
            let prior_assets = &previous.bs.assets.current;
            let prior_liabilities = &previous.bs.liabilities.current;
            cf.operating.receivables_change =
                -(current_assets.receivables - prior_assets.receivables);
            cf.operating.inventory_change = -(current_assets.inventory - prior_assets.inventory);
            cf.operating.payables_change = current_liabilities.payables - prior_liabilities.payables;
            cf.financing.short_term_debt_change =
                current_liabilities.short_term_debt - prior_liabilities.short_term_debt;
            cf.beginning_cash = prior_assets.cash;
        }
        None => {
            cf.operating.receivables_change = 0.0;
            cf.operating.inventory_change = 0.0;
            cf.operating.payables_change = 0.0;
            cf.financing.short_term_debt_change = 0.0;
            cf.beginning_cash = 0.0;
        }
    }

    cf.operating.profit_before_tax = pl_results(&pl).ordinary_profit;
    bs.assets.current.cash = cf_aggregates(&cf).ending_cash;

    write_back(store, index, PeriodPatch::new().bs(bs).cf(cf))
}

/// One ascending pass of [`sync_pl_to_bs`] then [`sync_bs_to_cf`] over every
/// period. Returns the number of periods processed.
pub fn sync_all_periods(store: &mut StateStore) -> usize {
    let count = store.period_count();
    for index in 0..count {
        sync_pl_to_bs(store, index);
        sync_bs_to_cf(store, index);
    }
    tracing::info!(periods = count, "synchronized all periods");
    count
}

fn previous_period(store: &StateStore, index: usize) -> Option<Period> {
    index.checked_sub(1).and_then(|previous| store.period(previous))
}

fn write_back(store: &mut StateStore, index: usize, patch: PeriodPatch) -> bool {
    match store.update_period(index, patch) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(index, error = %err, "sync result could not be written");
            false
        }
    }
}

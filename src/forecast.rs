//! Projection of future P/L figures from the actual periods.

use serde::Serialize;

use crate::{
    calc::{pl_results, PlResults},
    model::{
        month_after, ForecastConfig, ForecastMethod, NonOperating, Period, PlRecord, SgaExpenses,
    },
};

/// A projected month. Results are computed up front so consumers do not need
/// to run the calculators again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    pub year: i32,
    pub month: u32,
    pub pl: PlRecord,
    pub results: PlResults,
}

/// Projects `config.horizon_months` months after the last actual period.
///
/// With [`ForecastMethod::Growth`], revenue compounds by the revenue rate and
/// the cost lines (cogs, every SG&A line, non-operating expense and tax)
/// compound by the expense rate. Non-operating income is neither, so it stays
/// at the base period's value.
///
/// Returns an empty list when there are no actuals or the config is invalid.
pub fn generate_forecast(periods: &[Period], config: &ForecastConfig) -> Vec<ForecastPeriod> {
    let Some(last) = periods.last() else {
        return Vec::new();
    };
    if !config.is_valid() {
        tracing::warn!(?config, "forecast skipped; configuration is invalid");
        return Vec::new();
    }

    let base = match config.method {
        ForecastMethod::Growth => {
            let index = config
                .base_period_index
                .filter(|index| *index < periods.len())
                .unwrap_or(periods.len() - 1);
            periods[index].pl.clone()
        }
        ForecastMethod::Average => average_pl(periods),
    };

    let mut projected = Vec::with_capacity(config.horizon_months as usize);
    for step in 1..=config.horizon_months {
        let Ok((year, month)) = month_after(last.year, last.month, step) else {
            break;
        };
        let pl = match config.method {
            ForecastMethod::Growth => grow_pl(
                &base,
                growth_factor(config.revenue_growth_rate, step),
                growth_factor(config.expense_growth_rate, step),
            ),
            ForecastMethod::Average => base.clone(),
        };
        let results = pl_results(&pl);
        projected.push(ForecastPeriod {
            year,
            month,
            pl,
            results,
        });
    }
    projected
}

fn growth_factor(rate_percent: f64, steps: u32) -> f64 {
    (1.0 + rate_percent / 100.0).powi(steps as i32)
}

fn grow_pl(base: &PlRecord, revenue_factor: f64, expense_factor: f64) -> PlRecord {
    let sga = &base.sga_expenses;
    PlRecord {
        revenue: base.revenue * revenue_factor,
        cogs: base.cogs * expense_factor,
        sga_expenses: SgaExpenses {
            personnel: sga.personnel * expense_factor,
            rent: sga.rent * expense_factor,
            utilities: sga.utilities * expense_factor,
            marketing: sga.marketing * expense_factor,
            other: sga.other * expense_factor,
        },
        non_operating: NonOperating {
            income: base.non_operating.income,
            expense: base.non_operating.expense * expense_factor,
        },
        tax: base.tax * expense_factor,
    }
}

fn average_pl(periods: &[Period]) -> PlRecord {
    let count = periods.len() as f64;
    let mean = |pick: fn(&PlRecord) -> f64| periods.iter().map(|p| pick(&p.pl)).sum::<f64>() / count;
    PlRecord {
        revenue: mean(|pl| pl.revenue),
        cogs: mean(|pl| pl.cogs),
        sga_expenses: SgaExpenses {
            personnel: mean(|pl| pl.sga_expenses.personnel),
            rent: mean(|pl| pl.sga_expenses.rent),
            utilities: mean(|pl| pl.sga_expenses.utilities),
            marketing: mean(|pl| pl.sga_expenses.marketing),
            other: mean(|pl| pl.sga_expenses.other),
        },
        non_operating: NonOperating {
            income: mean(|pl| pl.non_operating.income),
            expense: mean(|pl| pl.non_operating.expense),
        },
        tax: mean(|pl| pl.tax),
    }
}

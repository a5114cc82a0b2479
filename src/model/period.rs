use serde::{Deserialize, Serialize};

use crate::errors::{Result, StateError};

use super::statements::{BsRecord, CfRecord, PlRecord};

/// One monthly reporting interval. Its identity is its position in the
/// store's period sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub pl: PlRecord,
    #[serde(default)]
    pub bs: BsRecord,
    #[serde(default)]
    pub cf: CfRecord,
}

impl Period {
    /// Creates a period with zeroed statements.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        ensure_month(month)?;
        Ok(Self {
            year,
            month,
            pl: PlRecord::default(),
            bs: BsRecord::default(),
            cf: CfRecord::default(),
        })
    }

    /// Builds the empty period for the month immediately after `self`.
    pub fn following(&self) -> Result<Self> {
        let (year, month) = month_after(self.year, self.month, 1)?;
        Self::new(year, month)
    }

    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    /// Structural check: month in range and every statement value finite.
    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.pl.values().iter().all(|value| value.is_finite())
            && self.bs.values().iter().all(|value| value.is_finite())
            && self.cf.values().iter().all(|value| value.is_finite())
    }
}

/// Steps `steps` months forward from (`year`, `month`), rolling the year over.
pub fn month_after(year: i32, month: u32, steps: u32) -> Result<(i32, u32)> {
    ensure_month(month)?;
    let zero_based = (month - 1) as i64 + steps as i64;
    let year = year as i64 + zero_based.div_euclid(12);
    let year = i32::try_from(year)
        .map_err(|_| StateError::InvalidArgument(format!("year {} out of range", year)))?;
    Ok((year, zero_based.rem_euclid(12) as u32 + 1))
}

/// Builds `count` consecutive monthly periods starting at (`start_year`, `start_month`).
pub fn build_period_sequence(start_year: i32, start_month: u32, count: usize) -> Result<Vec<Period>> {
    ensure_month(start_month)?;
    (0..count)
        .map(|offset| {
            let steps = u32::try_from(offset).map_err(|_| {
                StateError::InvalidArgument(format!("period count {} too large", count))
            })?;
            let (year, month) = month_after(start_year, start_month, steps)?;
            Period::new(year, month)
        })
        .collect()
}

fn ensure_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(StateError::InvalidArgument(format!(
            "month must be between 1 and 12, got {}",
            month
        )))
    }
}

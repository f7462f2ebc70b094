//! Chart builder: calendar date and hour to four pillars
//!
//! The day pillar is a linear day count from a fixed Jia-Zi epoch, not a
//! lunisolar computation. Month pillars likewise follow the civil month.
//! Both simplifications are part of the contract: every chart, score and
//! verdict depends on them, so they must not be "corrected" in place.

use crate::chart::pillar::{Chart, Pillar};
use crate::core::error::{BaziError, Result};
use crate::core::types::{ByPosition, Gender};
use crate::cycle::{Branch, Stem};
use chrono::{Datelike, NaiveDate};

/// Year whose pillar is Jia-Zi (stem 0, branch 0) under the year rule
pub const YEAR_EPOCH: i64 = 4;

/// `num_days_from_ce` of 1900-01-31, a Jia-Zi day
pub const DAY_EPOCH_DAYS_FROM_CE: i64 = 693_626;

/// Year pillar: `(year - 4) mod 10` / `(year - 4) mod 12`
pub fn year_pillar(year: i32) -> Pillar {
    let offset = i64::from(year) - YEAR_EPOCH;
    Pillar::new(Stem::from_cycle(offset), Branch::from_cycle(offset))
}

/// Month pillar for a civil month 1-12
///
/// Month 1 sits on Yin; the first month's stem is offset two places per
/// year stem.
pub fn month_pillar(year_stem: Stem, month: u32) -> Pillar {
    let month = i64::from(month);
    let stem = Stem::from_cycle(year_stem.index() as i64 * 2 + month - 1);
    let branch = Branch::from_cycle(month + 1);
    Pillar::new(stem, branch)
}

/// Days elapsed since the 1900-01-31 epoch (negative before it)
pub fn day_count(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - DAY_EPOCH_DAYS_FROM_CE
}

pub fn day_pillar(date: NaiveDate) -> Pillar {
    let count = day_count(date);
    Pillar::new(Stem::from_cycle(count), Branch::from_cycle(count))
}

/// Branch window index for an hour 0-23
///
/// Hour 23 opens the Zi window together with hours 0 and 1.
pub fn hour_window(hour: u32) -> Result<u32> {
    match hour {
        23 => Ok(0),
        0..=22 => Ok(hour / 2),
        _ => Err(BaziError::invalid(format!("hour must be 0-23, got {hour}"))),
    }
}

/// Hour pillar for an hour 0-23
///
/// The stem advances once per two-hour step through the whole day, so
/// hour 23 takes the step after hour 21 while its branch wraps to Zi.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Result<Pillar> {
    let window = i64::from(hour_window(hour)?);
    let stem = Stem::from_cycle(day_stem.index() as i64 * 2 + i64::from(hour / 2));
    Ok(Pillar::new(stem, Branch::from_cycle(window)))
}

/// Build the full four-pillar chart
pub fn build_chart(gender: Gender, birth_date: NaiveDate, birth_hour: u32) -> Result<Chart> {
    let year = year_pillar(birth_date.year());
    let month = month_pillar(year.stem, birth_date.month());
    let day = day_pillar(birth_date);
    let hour = hour_pillar(day.stem, birth_hour)?;

    tracing::debug!(
        "Chart for {} {:02}h: {}{} / {}{} / {}{} / {}{}",
        birth_date,
        birth_hour,
        year.stem,
        year.branch,
        month.stem,
        month.branch,
        day.stem,
        day.branch,
        hour.stem,
        hour.branch
    );

    Ok(Chart::new(
        gender,
        birth_date,
        birth_hour,
        ByPosition { year, month, day, hour },
    ))
}

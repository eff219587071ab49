use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const SECOND_MS: f64 = 1_000.0;
pub const MINUTE_MS: f64 = 60.0 * SECOND_MS;
pub const HOUR_MS: f64 = 60.0 * MINUTE_MS;
pub const DAY_MS: f64 = 24.0 * HOUR_MS;
pub const WEEK_MS: f64 = 7.0 * DAY_MS;
pub const MONTH_MS: f64 = 30.0 * DAY_MS;
pub const QUARTER_MS: f64 = 3.0 * MONTH_MS;

/// Calendar-aligned aggregation intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarInterval {
    /// Week starting on Sunday.
    Week,
    /// Week starting on Monday.
    WeekIso,
    Month,
    Quarter,
}

/// Aggregation interval: a fixed number of milliseconds or a calendar unit.
///
/// Serialized as a bare number (`60000`) or a calendar name (`"MONTH"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Interval {
    Millis(f64),
    Calendar(CalendarInterval),
}

impl Default for Interval {
    fn default() -> Self {
        Self::Millis(SECOND_MS)
    }
}

impl From<f64> for Interval {
    fn from(millis: f64) -> Self {
        Self::Millis(millis)
    }
}

impl From<CalendarInterval> for Interval {
    fn from(unit: CalendarInterval) -> Self {
        Self::Calendar(unit)
    }
}

impl Interval {
    /// Nominal duration in milliseconds.
    ///
    /// Calendar units use fixed lengths (30-day month, 90-day quarter); use
    /// [`Interval::bucket_bounds`] for the exact bucket around a timestamp.
    pub fn number_value(self) -> f64 {
        match self {
            Self::Millis(millis) => millis,
            Self::Calendar(CalendarInterval::Week | CalendarInterval::WeekIso) => WEEK_MS,
            Self::Calendar(CalendarInterval::Month) => MONTH_MS,
            Self::Calendar(CalendarInterval::Quarter) => QUARTER_MS,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Self::Millis(millis) = self {
            if !millis.is_finite() || millis <= 0.0 {
                return Err(ChartError::InvalidData(
                    "interval must be finite and > 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    /// Aggregation bucket `[start, end)` containing `ts`, clamped to `window`.
    ///
    /// Fixed intervals are aligned to the window start, calendar intervals to
    /// UTC calendar boundaries. Returns `None` for unusable input.
    pub fn bucket_bounds(self, ts: f64, window: TimeWindow) -> Option<(f64, f64)> {
        if !ts.is_finite() || !window.start.is_finite() || !window.end.is_finite() {
            return None;
        }
        let (start, end) = match self {
            Self::Millis(millis) => {
                if !millis.is_finite() || millis <= 0.0 {
                    return None;
                }
                let start = window.start + ((ts - window.start) / millis).floor() * millis;
                (start, start + millis)
            }
            Self::Calendar(unit) => calendar_bucket(unit, ts)?,
        };
        Some((start.max(window.start), end.min(window.end)))
    }
}

/// Time window the chart was queried with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub interval: Interval,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64, interval: Interval) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ChartError::InvalidData(
                "time window must be finite with start < end".to_owned(),
            ));
        }
        Ok(Self {
            start,
            end,
            interval: interval.validate()?,
        })
    }
}

fn calendar_bucket(unit: CalendarInterval, ts: f64) -> Option<(f64, f64)> {
    let date = DateTime::from_timestamp_millis(ts.floor() as i64)?.date_naive();
    let (start, end) = match unit {
        CalendarInterval::Week | CalendarInterval::WeekIso => {
            let back = if unit == CalendarInterval::Week {
                date.weekday().num_days_from_sunday()
            } else {
                date.weekday().num_days_from_monday()
            };
            let start = date.checked_sub_days(Days::new(u64::from(back)))?;
            (start, start.checked_add_days(Days::new(7))?)
        }
        CalendarInterval::Month => {
            let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)?;
            (start, add_months(start, 1)?)
        }
        CalendarInterval::Quarter => {
            let first_month = (date.month0() / 3) * 3 + 1;
            let start = NaiveDate::from_ymd_opt(date.year(), first_month, 1)?;
            (start, add_months(start, 3)?)
        }
    };
    Some((date_to_millis(start)?, date_to_millis(end)?))
}

fn add_months(first_of_month: NaiveDate, months: u32) -> Option<NaiveDate> {
    let month0 = first_of_month.month0() + months;
    NaiveDate::from_ymd_opt(
        first_of_month.year() + (month0 / 12) as i32,
        month0 % 12 + 1,
        1,
    )
}

fn date_to_millis(date: NaiveDate) -> Option<f64> {
    let midnight: NaiveDateTime = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp_millis() as f64)
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

pub fn datetime_to_unix_millis(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64
}

/// `true` for finite, non-zero numbers.
///
/// Interval bounds and widths are only usable when truthy; zero and NaN fall
/// through to the configured aggregation interval.
pub fn is_truthy(value: f64) -> bool {
    value.is_finite() && value != 0.0
}

pub fn is_truthy_opt(value: Option<f64>) -> bool {
    value.is_some_and(is_truthy)
}

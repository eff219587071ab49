use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64, is_truthy};
use crate::error::{ChartError, ChartResult};

/// Canvas size of the whole chart in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Axes area inside the canvas. Bars are clipped against it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ChartResult<Self> {
        if !x.is_finite() || !y.is_finite() || !width.is_finite() || !height.is_finite() {
            return Err(ChartError::InvalidData(
                "plot area must be finite".to_owned(),
            ));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot area width and height must be > 0".to_owned(),
            ));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Plot area covering the full viewport.
    pub fn from_viewport(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Self::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        )
    }

    pub fn right(self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}

/// One plotted sample.
///
/// `time`, `interval_start` and `interval_end` are epoch milliseconds. The
/// interval bounds are present when the sample stands for an aggregation
/// bucket. A non-finite `value` is treated as "no value".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    pub time: f64,
    pub value: f64,
    #[serde(default)]
    pub interval_start: Option<f64>,
    #[serde(default)]
    pub interval_end: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self {
            time,
            value,
            interval_start: None,
            interval_end: None,
        }
    }

    /// Sample backed by an aggregation bucket `[start, end)`.
    #[must_use]
    pub fn with_interval(time: f64, value: f64, start: f64, end: f64) -> Self {
        Self {
            time,
            value,
            interval_start: Some(start),
            interval_end: Some(end),
        }
    }

    pub fn from_decimal_time(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(
            datetime_to_unix_millis(time),
            decimal_to_f64(value, "value")?,
        ))
    }

    pub fn is_numeric(self) -> bool {
        self.value.is_finite()
    }

    /// Timestamp used to match this sample against stack siblings.
    ///
    /// Bucket start when the sample carries one, the sample time otherwise.
    pub fn stack_time(self) -> f64 {
        match self.interval_start {
            Some(start) if is_truthy(start) => start,
            _ => self.time,
        }
    }

    /// Name under which this sample is stored in a stack sibling series.
    pub fn stack_key(self) -> String {
        time_key(self.stack_time())
    }
}

/// Stringified timestamp used for shape ids and stack lookups.
pub fn time_key(time: f64) -> String {
    format!("{time}")
}

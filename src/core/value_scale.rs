use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Padding applied when a value axis is fitted to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    pub top_padding_ratio: f64,
    pub bottom_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            top_padding_ratio: 0.1,
            bottom_padding_ratio: 0.0,
            min_span_absolute: 0.000_001,
        }
    }
}

impl ValueScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.top_padding_ratio.is_finite()
            || !self.bottom_padding_ratio.is_finite()
            || self.top_padding_ratio < 0.0
            || self.bottom_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "value scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }
        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Linear value axis mapped onto an inverted Y pixel axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    min: f64,
    max: f64,
}

impl ValueScale {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min == max {
            return Err(ChartError::InvalidData(
                "value scale domain must be finite and non-zero".to_owned(),
            ));
        }
        Ok(Self {
            min: min.min(max),
            max: min.max(max),
        })
    }

    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        Self::from_series_tuned(&[points], ValueScaleTuning::default(), false)
    }

    /// Fits the axis to one or more series.
    ///
    /// With `stacked`, all given series form one stack: positive and negative
    /// values are summed per timestamp so the tallest stack fits.
    pub fn from_series_tuned(
        series: &[&[DataPoint]],
        tuning: ValueScaleTuning,
        stacked: bool,
    ) -> ChartResult<Self> {
        let (min, max) = Self::series_extent(series, stacked);
        Self::from_extent_tuned(min, max, tuning)
    }

    /// Value extent of `series`, always including the zero line bars grow from.
    pub fn series_extent(series: &[&[DataPoint]], stacked: bool) -> (f64, f64) {
        let mut min: f64 = 0.0;
        let mut max: f64 = 0.0;
        let points = series
            .iter()
            .flat_map(|points| points.iter())
            .filter(|point| point.is_numeric());

        if stacked {
            let mut sums: IndexMap<String, (f64, f64)> = IndexMap::new();
            for point in points {
                let entry = sums.entry(point.stack_key()).or_insert((0.0, 0.0));
                if point.value >= 0.0 {
                    entry.0 += point.value;
                } else {
                    entry.1 += point.value;
                }
            }
            for (positive, negative) in sums.values() {
                max = max.max(*positive);
                min = min.min(*negative);
            }
        } else {
            for point in points {
                max = max.max(point.value);
                min = min.min(point.value);
            }
        }
        (min, max)
    }

    /// Axis over `[min, max]` widened by `tuning`.
    pub fn from_extent_tuned(min: f64, max: f64, tuning: ValueScaleTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "value extent must be finite".to_owned(),
            ));
        }
        let (min, mut max) = (min.min(max), min.max(max));
        if max - min < tuning.min_span_absolute {
            max = min + tuning.min_span_absolute;
        }
        let span = max - min;
        Self::new(
            min - span * tuning.bottom_padding_ratio,
            max + span * tuning.top_padding_ratio,
        )
    }

    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Vertical pixel mapping across `plot`, larger values on top.
    pub fn linear(self, plot: PlotArea) -> ChartResult<LinearScale> {
        LinearScale::new(self.min, self.max, plot.bottom(), plot.y)
    }
}

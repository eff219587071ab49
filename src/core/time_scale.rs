use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};

/// Tuning controls for fitting the time window to data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScaleTuning {
    pub left_padding_ratio: f64,
    pub right_padding_ratio: f64,
    pub min_span_absolute: f64,
}

impl Default for TimeScaleTuning {
    fn default() -> Self {
        Self {
            left_padding_ratio: 0.0,
            right_padding_ratio: 0.0,
            min_span_absolute: 1.0,
        }
    }
}

impl TimeScaleTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.left_padding_ratio.is_finite()
            || !self.right_padding_ratio.is_finite()
            || self.left_padding_ratio < 0.0
            || self.right_padding_ratio < 0.0
        {
            return Err(ChartError::InvalidData(
                "time scale padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "time scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Time axis with a fixed full window and a zoomable visible window.
///
/// `full_*` is the configured (or fitted) time window.
/// `visible_*` follows data-zoom and pan and is what gets mapped to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    full_start: f64,
    full_end: f64,
    visible_start: f64,
    visible_end: f64,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let (start, end) = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            full_start: start,
            full_end: end,
            visible_start: start,
            visible_end: end,
        })
    }

    pub fn from_points(points: &[DataPoint]) -> ChartResult<Self> {
        Self::from_points_tuned(points, TimeScaleTuning::default())
    }

    /// Fits the window to sample times, widened by any bucket bounds.
    pub fn from_points_tuned(points: &[DataPoint], tuning: TimeScaleTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        if points.is_empty() {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(point.time);
            max = max.max(point.time);
            for bound in [point.interval_start, point.interval_end]
                .into_iter()
                .flatten()
                .filter(|bound| bound.is_finite())
            {
                min = min.min(bound);
                max = max.max(bound);
            }
        }

        let (full_start, full_end) = normalize_range(min, max, tuning.min_span_absolute)?;
        let span = full_end - full_start;
        let full_start = full_start - span * tuning.left_padding_ratio;
        let full_end = full_end + span * tuning.right_padding_ratio;

        Ok(Self {
            full_start,
            full_end,
            visible_start: full_start,
            visible_end: full_end,
        })
    }

    pub fn full_range(self) -> (f64, f64) {
        (self.full_start, self.full_end)
    }

    pub fn visible_range(self) -> (f64, f64) {
        (self.visible_start, self.visible_end)
    }

    pub fn visible_span(self) -> f64 {
        self.visible_end - self.visible_start
    }

    /// `true` while the visible window differs from the full window.
    pub fn is_zoomed(self) -> bool {
        self.visible_start != self.full_start || self.visible_end != self.full_end
    }

    pub fn set_visible_range(&mut self, start: f64, end: f64) -> ChartResult<()> {
        let (start, end) = normalize_range(start, end, 1e-9)?;
        self.visible_start = start;
        self.visible_end = end;
        Ok(())
    }

    pub fn reset_visible_range_to_full(&mut self) {
        self.visible_start = self.full_start;
        self.visible_end = self.full_end;
    }

    pub fn pan_visible_by_delta(&mut self, delta_time: f64) -> ChartResult<()> {
        if !delta_time.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        self.visible_start += delta_time;
        self.visible_end += delta_time;
        Ok(())
    }

    /// Zooms the visible window around `anchor_time`.
    ///
    /// `factor > 1.0` zooms in, `0.0 < factor < 1.0` zooms out. The span never
    /// shrinks below `min_span_absolute`.
    pub fn zoom_visible_by_factor(
        &mut self,
        factor: f64,
        anchor_time: f64,
        min_span_absolute: f64,
    ) -> ChartResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor_time.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom anchor must be finite".to_owned(),
            ));
        }
        if !min_span_absolute.is_finite() || min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom min span must be finite and > 0".to_owned(),
            ));
        }

        let current_span = self.visible_span();
        let target_span = (current_span / factor).max(min_span_absolute);
        let left_ratio = (anchor_time - self.visible_start) / current_span;

        let new_start = anchor_time - left_ratio * target_span;
        self.set_visible_range(new_start, new_start + target_span)
    }

    /// Horizontal pixel mapping of the visible window across `plot`.
    pub fn linear(self, plot: PlotArea) -> ChartResult<LinearScale> {
        LinearScale::new(
            self.visible_start,
            self.visible_end,
            plot.x,
            plot.right(),
        )
    }
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}

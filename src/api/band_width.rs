use crate::core::primitives::is_truthy;
use crate::core::{PlotArea, TimeScale, TimeWindow};

/// Time-axis state a band-width strategy may consult.
///
/// The band width is the pixel width a single category occupies, used by hosts
/// to size axis pointer shadows and tooltips on time axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeAxisBandInput {
    /// Bucket bounds of the data item under the axis pointer, if any.
    pub hovered_interval: Option<(Option<f64>, Option<f64>)>,
    /// Time value the axis pointer currently sits on.
    pub pointer_value: Option<f64>,
    pub time_window: Option<TimeWindow>,
    /// Pixel extent of the axis.
    pub axis_extent: (f64, f64),
    /// Time extent mapped onto `axis_extent`.
    pub data_extent: (f64, f64),
}

impl TimeAxisBandInput {
    /// Axis extent and data extent of a time scale laid over `plot`.
    pub fn from_scale(time_scale: TimeScale, plot: PlotArea) -> Self {
        Self {
            axis_extent: (plot.x, plot.right()),
            data_extent: time_scale.visible_range(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_hovered_interval(mut self, start: Option<f64>, end: Option<f64>) -> Self {
        self.hovered_interval = Some((start, end));
        self
    }

    #[must_use]
    pub fn with_pointer_value(mut self, pointer_value: f64) -> Self {
        self.pointer_value = Some(pointer_value);
        self
    }

    #[must_use]
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }
}

/// Computes the band width of a time axis.
///
/// `None` hands the decision back to the host's default band width.
pub trait BandWidthStrategy {
    fn band_width(&self, input: &TimeAxisBandInput) -> Option<f64>;
}

impl<F> BandWidthStrategy for F
where
    F: Fn(&TimeAxisBandInput) -> Option<f64>,
{
    fn band_width(&self, input: &TimeAxisBandInput) -> Option<f64> {
        self(input)
    }
}

/// Band width equal to one aggregation bucket.
///
/// The bucket comes from, in order: the hovered item's own bounds, the bucket
/// of the time window containing the pointer, the window's nominal interval.
/// Buckets are at least one millisecond wide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalBandWidth;

impl IntervalBandWidth {
    pub fn interval(input: &TimeAxisBandInput) -> Option<f64> {
        if let Some((Some(start), Some(end))) = input.hovered_interval {
            if start.is_finite() && end.is_finite() {
                return Some((end - start).max(1.0));
            }
        }

        let window = input.time_window?;
        match input.pointer_value.filter(|value| is_truthy(*value)) {
            Some(pointer) => window
                .interval
                .bucket_bounds(pointer, window)
                .map(|(start, end)| (end - start).max(1.0)),
            None => Some(window.interval.number_value()),
        }
    }
}

impl BandWidthStrategy for IntervalBandWidth {
    fn band_width(&self, input: &TimeAxisBandInput) -> Option<f64> {
        let interval = Self::interval(input).filter(|interval| is_truthy(*interval))?;
        let size = (input.axis_extent.1 - input.axis_extent.0).abs();
        let span = input.data_extent.1 - input.data_extent.0;
        if !is_truthy(span) {
            return None;
        }
        Some(interval * (size / span))
    }
}

/// Band width from `strategy`, or `fallback` when it declines.
pub fn resolve_band_width<S: BandWidthStrategy + ?Sized>(
    strategy: &S,
    input: &TimeAxisBandInput,
    fallback: impl FnOnce() -> f64,
) -> f64 {
    strategy.band_width(input).unwrap_or_else(fallback)
}

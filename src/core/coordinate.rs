use crate::core::rect::{Rect, clip_rect_by_rect};
use crate::core::PlotArea;

/// Data-to-pixel transform owned by the hosting chart.
///
/// Implementations must be pure for the duration of a render pass: the same
/// input always maps to the same output.
pub trait CoordinateSystem {
    /// Maps `(time, value)` to a pixel point.
    fn coord(&self, time: f64, value: f64) -> [f64; 2];

    /// Absolute pixel size of a `(time_delta, value_delta)` extent.
    fn size(&self, time_delta: f64, value_delta: f64) -> [f64; 2];

    /// Width of the whole chart canvas in pixels.
    fn canvas_width(&self) -> f64;

    /// Axes area bars are clipped to.
    fn plot_area(&self) -> PlotArea;

    /// Time span covered by the full canvas width at the current zoom.
    fn canvas_time_span(&self) -> f64 {
        self.canvas_width() / self.size(1.0, 0.0)[0]
    }

    fn clip(&self, rect: Rect) -> Option<Rect> {
        clip_rect_by_rect(rect, self.plot_area().into())
    }
}

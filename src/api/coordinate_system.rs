use crate::core::{CoordinateSystem, LinearScale, PlotArea, TimeScale, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Cartesian time/value coordinate system over a plot area.
///
/// A snapshot: it captures the time scale's visible window at construction,
/// so zooming means building a new one for the next pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianCoordinateSystem {
    viewport: Viewport,
    plot: PlotArea,
    time: LinearScale,
    value: LinearScale,
}

impl CartesianCoordinateSystem {
    pub fn new(
        time_scale: TimeScale,
        value_scale: ValueScale,
        viewport: Viewport,
        plot: PlotArea,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            viewport,
            plot,
            time: time_scale.linear(plot)?,
            value: value_scale.linear(plot)?,
        })
    }

    /// Plot area spanning the whole viewport.
    pub fn full_viewport(
        time_scale: TimeScale,
        value_scale: ValueScale,
        viewport: Viewport,
    ) -> ChartResult<Self> {
        Self::new(
            time_scale,
            value_scale,
            viewport,
            PlotArea::from_viewport(viewport)?,
        )
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn time_linear(&self) -> LinearScale {
        self.time
    }

    pub fn value_linear(&self) -> LinearScale {
        self.value
    }
}

impl CoordinateSystem for CartesianCoordinateSystem {
    fn coord(&self, time: f64, value: f64) -> [f64; 2] {
        [
            self.time.domain_to_pixel(time),
            self.value.domain_to_pixel(value),
        ]
    }

    fn size(&self, time_delta: f64, value_delta: f64) -> [f64; 2] {
        [
            self.time.span_to_pixels(0.0, time_delta),
            self.value.span_to_pixels(0.0, value_delta),
        ]
    }

    fn canvas_width(&self) -> f64 {
        f64::from(self.viewport.width)
    }

    fn plot_area(&self) -> PlotArea {
        self.plot
    }
}

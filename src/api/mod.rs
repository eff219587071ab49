//! Render orchestration on top of the pure layout primitives in [`crate::core`].

mod band_width;
mod bar_chart;
mod bar_renderer;
mod config;
mod coordinate_system;
mod label_formatter;

pub use band_width::{BandWidthStrategy, IntervalBandWidth, TimeAxisBandInput, resolve_band_width};
pub use bar_chart::{BarChartLayout, BarSeries};
pub use bar_renderer::{
    BarRenderContext, BarStackPosition, render_bar_series, render_time_series_bar,
};
pub use config::{
    BarChartSettings, BarLabelSettings, BarSettings, NoAggregationBarWidthSettings,
    NoAggregationWidthSettings,
};
pub use coordinate_system::CartesianCoordinateSystem;
pub use label_formatter::{
    LABEL_FIT_MARGIN_PX, ValueLabelFormatter, estimate_label_text_width_px, format_value,
    label_fits_bar, strip_rich_markup,
};

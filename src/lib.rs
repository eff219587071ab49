//! tsbar-rs: deterministic layout of time-series bar charts.
//!
//! For every sample of a bar series the crate resolves the time span its bar
//! covers, places the bar inside its group, stacks it on lower layers, maps it
//! to pixels through a host-provided [`core::CoordinateSystem`], clips it to
//! the plot and decorates it with paint, label and corner radii. Painting is
//! left to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChartLayout, BarChartSettings, BarRenderContext, render_time_series_bar};
pub use error::{ChartError, ChartResult};

mod bar_style;
mod frame;
mod json_renderer;
mod null_renderer;
mod primitives;
mod shape;

pub use bar_style::{
    BarLabelFormatter, BarLabelOption, BarLabelStyle, BarStyle, BarVisualSettings,
    LABEL_TEXT_DISTANCE, LabelPosition, RichStyles, RichTextStyle, decorate_bar,
};
pub use frame::BarFrame;
pub use json_renderer::JsonRenderer;
pub use null_renderer::NullRenderer;
pub use primitives::{BarFill, Color, GradientStop, LinearGradient};
pub use shape::{BarShape, EnterFrom, FocusHint, RectShape, ShapeKind, TransitionHint};

use crate::error::ChartResult;

/// Contract implemented by anything that consumes laid-out bars.
///
/// Backends receive a fully materialized `BarFrame`; painting stays outside
/// the layout code.
pub trait Renderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()>;
}

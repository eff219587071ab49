use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{BarFill, Color};

/// Distance in pixels between a bar and its label.
pub const LABEL_TEXT_DISTANCE: f64 = 5.0;

/// Turns a bar value into label text (may contain rich markup).
pub type BarLabelFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Paint settings of one bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarVisualSettings {
    pub color: BarFill,
    pub border_color: Color,
    pub border_width: f64,
    pub border_radius: f64,
}

impl BarVisualSettings {
    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()?;
        self.border_color.validate()?;
        if !self.border_width.is_finite() || self.border_width < 0.0 {
            return Err(ChartError::InvalidData(
                "border width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.border_radius.is_finite() || self.border_radius < 0.0 {
            return Err(ChartError::InvalidData(
                "border radius must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Label placement relative to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Inside,
    InsideTop,
    InsideBottom,
    InsideLeft,
    InsideRight,
}

impl LabelPosition {
    /// Position to use for a bar of `value`.
    ///
    /// Negative bars grow downwards, so `Top` and `Bottom` swap. Every other
    /// position is kept.
    pub fn for_value(self, value: f64) -> Self {
        if value < 0.0 {
            match self {
                Self::Top => Self::Bottom,
                Self::Bottom => Self::Top,
                other => other,
            }
        } else {
            self
        }
    }
}

/// Style of one rich-text segment, e.g. `{value|...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
}

pub type RichStyles = IndexMap<String, RichTextStyle>;

/// Label configuration of one bar series.
#[derive(Clone, Default)]
pub struct BarLabelOption {
    pub show: bool,
    pub position: LabelPosition,
    pub formatter: Option<BarLabelFormatter>,
    pub rich: RichStyles,
    /// Font size used to estimate label width. When set, labels wider than
    /// their bar (less than two pixels to spare) are dropped.
    pub fit_font_size: Option<f64>,
}

impl BarLabelOption {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn shown(position: LabelPosition, formatter: BarLabelFormatter) -> Self {
        Self {
            show: true,
            position,
            formatter: Some(formatter),
            rich: RichStyles::new(),
            fit_font_size: None,
        }
    }

    #[must_use]
    pub fn with_rich(mut self, rich: RichStyles) -> Self {
        self.rich = rich;
        self
    }

    /// Hides labels that do not fit their bar at `font_size` pixels.
    #[must_use]
    pub fn with_fit_to_bar(mut self, font_size: f64) -> Self {
        self.fit_font_size = Some(font_size);
        self
    }
}

impl fmt::Debug for BarLabelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarLabelOption")
            .field("show", &self.show)
            .field("position", &self.position)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .field("rich", &self.rich)
            .field("fit_font_size", &self.fit_font_size)
            .finish()
    }
}

/// Resolved label of one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarLabelStyle {
    pub text: String,
    pub text_distance: f64,
    pub text_position: LabelPosition,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub rich: RichStyles,
}

/// Resolved paint of one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarStyle {
    pub fill: BarFill,
    pub stroke: Color,
    pub line_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<BarLabelStyle>,
}

/// Builds the paint and label of a bar of `value`.
///
/// Inputs are only read. Without a formatter the value is printed as is.
pub fn decorate_bar(
    visual: &BarVisualSettings,
    label_option: &BarLabelOption,
    value: f64,
) -> BarStyle {
    let label = label_option.show.then(|| {
        let text = match &label_option.formatter {
            Some(formatter) => formatter(value),
            None => value.to_string(),
        };
        BarLabelStyle {
            text,
            text_distance: LABEL_TEXT_DISTANCE,
            text_position: label_option.position.for_value(value),
            rich: label_option.rich.clone(),
        }
    });

    BarStyle {
        fill: visual.color.clone(),
        stroke: visual.border_color,
        line_width: visual.border_width,
        label,
    }
}

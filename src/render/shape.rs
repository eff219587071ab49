use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::render::BarStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    #[default]
    Rect,
}

/// Which elements are emphasized while the bar is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FocusHint {
    #[default]
    Series,
}

/// Which shape properties the host animates between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionHint {
    #[default]
    All,
}

/// Clipped bar rectangle with corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// `[top_left, top_right, bottom_right, bottom_left]`.
    pub radius: [f64; 4],
}

impl RectShape {
    pub fn from_rect(rect: Rect, radius: [f64; 4]) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            radius,
        }
    }

    pub fn rect(self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Starting state a new bar animates in from: invisible and collapsed onto
/// its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnterFrom {
    pub opacity: f64,
    pub height: f64,
    pub y: f64,
}

/// Renderable descriptor of one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarShape {
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    pub id: String,
    pub shape: RectShape,
    pub style: BarStyle,
    pub focus: FocusHint,
    pub transition: TransitionHint,
    pub enter_from: EnterFrom,
}

impl BarShape {
    pub fn validate(&self) -> ChartResult<()> {
        let RectShape {
            x,
            y,
            width,
            height,
            radius,
        } = self.shape;
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "bar `{}` geometry must be finite",
                self.id
            )));
        }
        if width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "bar `{}` size must be >= 0",
                self.id
            )));
        }
        if radius.iter().any(|r| !r.is_finite() || *r < 0.0) {
            return Err(ChartError::InvalidData(format!(
                "bar `{}` radii must be finite and >= 0",
                self.id
            )));
        }
        self.style.fill.validate()?;
        self.style.stroke.validate()
    }
}

use serde::{Deserialize, Serialize};

use crate::core::PlotArea;

/// Axis-aligned rectangle in pixel space, `y` growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<PlotArea> for Rect {
    fn from(plot: PlotArea) -> Self {
        Self::new(plot.x, plot.y, plot.width, plot.height)
    }
}

/// Intersection of `target` with `bounds`.
///
/// Returns `None` when they are disjoint, including the border: a rectangle
/// fully outside the bounds must not be painted at all. Touching edges yield a
/// degenerate rectangle. Non-finite input yields `None`.
pub fn clip_rect_by_rect(target: Rect, bounds: Rect) -> Option<Rect> {
    if !target.is_finite() || !bounds.is_finite() {
        return None;
    }
    let x = target.x.max(bounds.x);
    let x2 = (target.x + target.width).min(bounds.x + bounds.width);
    let y = target.y.max(bounds.y);
    let y2 = (target.y + target.height).min(bounds.y + bounds.height);

    if x2 >= x && y2 >= y {
        Some(Rect::new(x, y, x2 - x, y2 - y))
    } else {
        None
    }
}

use serde::{Deserialize, Serialize};

use crate::core::bar_interval::ResolvedInterval;
use crate::core::coordinate::CoordinateSystem;
use crate::core::rect::Rect;

/// Fraction of one bar width reserved as gap.
pub const BAR_GAP_RATIO: f64 = 0.3;

/// Width of one bar when `bars_count` bars share `interval`.
///
/// Leaves one gap between neighbours and a double gap at both group edges.
pub fn grouped_bar_width(interval: f64, bars_count: usize) -> f64 {
    let count = bars_count as f64;
    interval / (count + BAR_GAP_RATIO * (count + 3.0))
}

/// Horizontal placement of one bar in the time domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSlot {
    pub start_time: f64,
    pub width: f64,
    pub interval_gap: f64,
    pub bar_gap: f64,
}

/// Places bar `bar_index` of a group inside its resolved interval.
///
/// Separate bars take the whole interval. Grouped bars start one outer gap in
/// and each following bar is shifted by its width plus one inner gap.
pub fn bar_slot(
    interval: ResolvedInterval,
    bars_count: usize,
    bar_index: usize,
    separate: bool,
) -> BarSlot {
    let width = if separate {
        interval.width
    } else {
        grouped_bar_width(interval.width, bars_count)
    };
    let interval_gap = width * BAR_GAP_RATIO * 2.0;
    let bar_gap = width * BAR_GAP_RATIO;
    let start_time = if separate {
        interval.start
    } else {
        interval.start + interval_gap + (width + bar_gap) * bar_index as f64
    };

    BarSlot {
        start_time,
        width,
        interval_gap,
        bar_gap,
    }
}

/// Projects a bar slot into pixel space and clips it to the plot area.
///
/// `reference_value` is the value at the bar's top edge (see
/// [`crate::core::bar_stack::reference_value`]); `value` gives its height.
/// `None` means the bar lies entirely outside the plot, including bars that
/// only touch its edge. Zero-size bars inside the plot are kept.
pub fn project_bar_rect<C: CoordinateSystem + ?Sized>(
    slot: BarSlot,
    reference_value: f64,
    value: f64,
    coords: &C,
) -> Option<Rect> {
    let [x, y] = coords.coord(slot.start_time, reference_value);
    let [width, height] = coords.size(slot.width, value);
    let clipped = coords.clip(Rect::new(x, y, width, height))?;
    let collapsed =
        (clipped.width == 0.0 && width != 0.0) || (clipped.height == 0.0 && height != 0.0);
    (!collapsed).then_some(clipped)
}

/// Corner radii `[top_left, top_right, bottom_right, bottom_left]`.
///
/// Positive bars round their top corners, negative bars their bottom ones.
pub fn border_radius(value: f64, radius: f64) -> [f64; 4] {
    if value < 0.0 {
        [0.0, 0.0, radius, radius]
    } else {
        [radius, radius, 0.0, 0.0]
    }
}

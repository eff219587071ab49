pub mod bar_geometry;
pub mod bar_interval;
pub mod bar_stack;
pub mod coordinate;
pub mod interval;
pub mod primitives;
pub mod rect;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;

pub use bar_geometry::{
    BAR_GAP_RATIO, BarSlot, bar_slot, border_radius, grouped_bar_width, project_bar_rect,
};
pub use bar_interval::{
    BarRenderSharedContext, NoAggregationBarWidthStrategy, ResolvedInterval, resolve_bar_interval,
};
pub use bar_stack::{StackSeries, reference_value, stack_offset};
pub use coordinate::CoordinateSystem;
pub use interval::{CalendarInterval, Interval, TimeWindow};
pub use rect::{Rect, clip_rect_by_rect};
pub use scale::LinearScale;
pub use time_scale::{TimeScale, TimeScaleTuning};
pub use types::{DataPoint, PlotArea, Viewport, time_key};
pub use value_scale::{ValueScale, ValueScaleTuning};

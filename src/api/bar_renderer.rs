use std::sync::Arc;

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::api::{estimate_label_text_width_px, label_fits_bar};
use crate::core::{
    BarRenderSharedContext, CoordinateSystem, DataPoint, StackSeries, bar_slot, border_radius,
    project_bar_rect, reference_value, resolve_bar_interval, stack_offset, time_key,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    BarFrame, BarLabelOption, BarShape, BarVisualSettings, EnterFrom, FocusHint, RectShape,
    ShapeKind, TransitionHint, decorate_bar,
};

/// Position of a series inside a bar stack.
#[derive(Debug, Clone)]
pub struct BarStackPosition {
    stack_index: usize,
    siblings: Arc<[StackSeries]>,
}

impl BarStackPosition {
    /// `siblings` lists every series of the stack in declaration order;
    /// `stack_index` is this series' layer, 0 being the base.
    pub fn new(stack_index: usize, siblings: Arc<[StackSeries]>) -> ChartResult<Self> {
        if stack_index >= siblings.len() {
            return Err(ChartError::InvalidData(format!(
                "stack index {stack_index} out of range for {} stacked series",
                siblings.len()
            )));
        }
        Ok(Self {
            stack_index,
            siblings,
        })
    }

    pub fn stack_index(&self) -> usize {
        self.stack_index
    }

    pub fn offset_at(&self, key: &str) -> f64 {
        stack_offset(&self.siblings, self.stack_index, key)
    }
}

/// Everything a bar series needs for one render pass.
///
/// Built once per chart configuration and only read while rendering.
#[derive(Debug, Clone)]
pub struct BarRenderContext {
    pub shared: BarRenderSharedContext,
    bars_count: usize,
    bar_index: usize,
    pub no_aggregation: bool,
    pub visual_settings: BarVisualSettings,
    pub label_option: BarLabelOption,
    stack: Option<BarStackPosition>,
}

impl BarRenderContext {
    pub fn new(
        shared: BarRenderSharedContext,
        bars_count: usize,
        bar_index: usize,
        visual_settings: BarVisualSettings,
    ) -> ChartResult<Self> {
        if bar_index >= bars_count {
            return Err(ChartError::BarIndexOutOfRange {
                bar_index,
                bars_count,
            });
        }
        Ok(Self {
            shared,
            bars_count,
            bar_index,
            no_aggregation: false,
            visual_settings,
            label_option: BarLabelOption::hidden(),
            stack: None,
        })
    }

    #[must_use]
    pub fn with_no_aggregation(mut self, no_aggregation: bool) -> Self {
        self.no_aggregation = no_aggregation;
        self
    }

    #[must_use]
    pub fn with_label_option(mut self, label_option: BarLabelOption) -> Self {
        self.label_option = label_option;
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: BarStackPosition) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn bars_count(&self) -> usize {
        self.bars_count
    }

    pub fn bar_index(&self) -> usize {
        self.bar_index
    }

    pub fn stack(&self) -> Option<&BarStackPosition> {
        self.stack.as_ref()
    }

    fn stack_offset(&self, point: DataPoint) -> f64 {
        self.stack
            .as_ref()
            .map_or(0.0, |stack| stack.offset_at(&point.stack_key()))
    }
}

/// Lays out the bar of one sample.
///
/// Returns `None` when there is nothing to draw: the value is not numeric or
/// the bar lies entirely outside the plot area.
pub fn render_time_series_bar<C: CoordinateSystem + ?Sized>(
    point: DataPoint,
    ctx: &BarRenderContext,
    coords: &C,
) -> Option<BarShape> {
    if !point.is_numeric() {
        trace!(time = point.time, "skip bar without numeric value");
        return None;
    }

    let separate = ctx.shared.is_separate(ctx.no_aggregation);
    let interval = resolve_bar_interval(
        point,
        &ctx.shared,
        ctx.no_aggregation,
        coords.canvas_time_span(),
    );
    let slot = bar_slot(interval, ctx.bars_count, ctx.bar_index, separate);
    let offset = ctx.stack_offset(point);
    let top_value = reference_value(point.value, offset);

    let Some(rect) = project_bar_rect(slot, top_value, point.value, coords) else {
        trace!(time = point.time, start = slot.start_time, "bar clipped away");
        return None;
    };

    let mut style = decorate_bar(&ctx.visual_settings, &ctx.label_option, point.value);
    let label_overflows = match (ctx.label_option.fit_font_size, &style.label) {
        (Some(font_size), Some(label)) => {
            !label_fits_bar(rect.width, estimate_label_text_width_px(&label.text, font_size))
        }
        _ => false,
    };
    if label_overflows {
        trace!(time = point.time, width = rect.width, "label hidden, bar too narrow");
        style.label = None;
    }

    let baseline_y = coords.coord(0.0, offset)[1];
    Some(BarShape {
        kind: ShapeKind::Rect,
        id: time_key(point.time),
        shape: RectShape::from_rect(
            rect,
            border_radius(point.value, ctx.visual_settings.border_radius),
        ),
        style,
        focus: FocusHint::Series,
        transition: TransitionHint::All,
        enter_from: EnterFrom {
            opacity: 0.0,
            height: 0.0,
            y: baseline_y,
        },
    })
}

/// Lays out every sample of a series into one frame, keeping data order.
///
/// With the `parallel-projection` feature samples are laid out on the rayon
/// pool; the frame is identical to the sequential one.
pub fn render_bar_series<C: CoordinateSystem + Sync + ?Sized>(
    series_id: &str,
    points: &[DataPoint],
    ctx: &BarRenderContext,
    coords: &C,
) -> BarFrame {
    #[cfg(feature = "parallel-projection")]
    let shapes: Vec<Option<BarShape>> = points
        .par_iter()
        .map(|point| render_time_series_bar(*point, ctx, coords))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let shapes: Vec<Option<BarShape>> = points
        .iter()
        .map(|point| render_time_series_bar(*point, ctx, coords))
        .collect();

    let mut frame = BarFrame::new(series_id);
    frame.shapes.reserve(shapes.len());
    for shape in shapes {
        frame.push(shape);
    }

    debug!(
        series = series_id,
        bar_index = ctx.bar_index,
        bars_count = ctx.bars_count,
        shapes = frame.shapes.len(),
        skipped = frame.skipped,
        "bar series laid out"
    );
    frame
}

use std::sync::Arc;

use approx::assert_relative_eq;
use tsbar_rs::api::{
    BarRenderContext, BarStackPosition, CartesianCoordinateSystem, render_bar_series,
    render_time_series_bar,
};
use tsbar_rs::core::{
    BarRenderSharedContext, DataPoint, Interval, NoAggregationBarWidthStrategy, StackSeries,
    TimeScale, ValueScale, Viewport,
};
use tsbar_rs::render::{
    BarFill, BarLabelOption, BarVisualSettings, Color, FocusHint, LabelPosition, ShapeKind,
    TransitionHint,
};
use tsbar_rs::ChartError;

fn coords(value_min: f64, value_max: f64) -> CartesianCoordinateSystem {
    CartesianCoordinateSystem::full_viewport(
        TimeScale::new(0.0, 1_000.0).expect("time scale"),
        ValueScale::new(value_min, value_max).expect("value scale"),
        Viewport::new(1_000, 500),
    )
    .expect("coords")
}

fn shared(strategy: NoAggregationBarWidthStrategy) -> BarRenderSharedContext {
    BarRenderSharedContext {
        time_interval: Interval::Millis(100.0),
        no_aggregation_bar_width_strategy: strategy,
        no_aggregation_width_relative: true,
        no_aggregation_width: 2.0,
    }
}

fn visual() -> BarVisualSettings {
    BarVisualSettings {
        color: BarFill::Solid(Color::rgb(0.0, 0.5, 1.0)),
        border_color: Color::BLACK,
        border_width: 1.0,
        border_radius: 4.0,
    }
}

#[test]
fn context_rejects_bar_index_outside_group() {
    let err = BarRenderContext::new(
        shared(NoAggregationBarWidthStrategy::Group),
        2,
        2,
        visual(),
    )
    .expect_err("index must be < count");
    assert!(matches!(
        err,
        ChartError::BarIndexOutOfRange {
            bar_index: 2,
            bars_count: 2
        }
    ));
}

#[test]
fn stack_position_must_index_siblings() {
    let siblings: Arc<[StackSeries]> = Arc::from(vec![StackSeries::new()]);
    assert!(BarStackPosition::new(1, siblings.clone()).is_err());
    assert!(BarStackPosition::new(0, siblings).is_ok());
}

#[test]
fn aggregated_bar_maps_to_expected_rect() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx");
    let point = DataPoint::with_interval(500.0, 20.0, 400.0, 600.0);

    let bar = render_time_series_bar(point, &ctx, &coords(0.0, 100.0)).expect("shape");
    let width = 200.0 / 2.2;

    assert_eq!(bar.kind, ShapeKind::Rect);
    assert_eq!(bar.id, "500");
    assert_relative_eq!(bar.shape.x, 400.0 + width * 0.6, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.width, width, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.y, 400.0, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.height, 100.0, epsilon = 1e-9);
    assert_eq!(bar.shape.radius, [4.0, 4.0, 0.0, 0.0]);
    assert_eq!(bar.focus, FocusHint::Series);
    assert_eq!(bar.transition, TransitionHint::All);
    assert_eq!(bar.enter_from.opacity, 0.0);
    assert_eq!(bar.enter_from.height, 0.0);
    assert_relative_eq!(bar.enter_from.y, 500.0, epsilon = 1e-9);
}

#[test]
fn negative_bar_hangs_from_zero_line() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx");
    let point = DataPoint::with_interval(500.0, -10.0, 400.0, 600.0);

    let bar = render_time_series_bar(point, &ctx, &coords(-50.0, 50.0)).expect("shape");
    assert_relative_eq!(bar.shape.y, 250.0, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.height, 50.0, epsilon = 1e-9);
    assert_eq!(bar.shape.radius, [0.0, 0.0, 4.0, 4.0]);
}

#[test]
fn relative_raw_bar_width_follows_canvas_time_span() {
    let ctx = BarRenderContext::new(
        shared(NoAggregationBarWidthStrategy::Separate),
        3,
        1,
        visual(),
    )
    .expect("ctx")
    .with_no_aggregation(true);
    let point = DataPoint::new(500.0, 10.0);

    let bar = render_time_series_bar(point, &ctx, &coords(0.0, 100.0)).expect("shape");
    // 2 % of the 1000 ms across the canvas, one full-width bar per sample.
    assert_relative_eq!(bar.shape.x, 490.0, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.width, 20.0, epsilon = 1e-9);
}

#[test]
fn stacked_bar_sits_on_lower_layer() {
    let base = vec![DataPoint::new(500.0, 10.0)];
    let top = vec![DataPoint::new(500.0, 5.0)];
    let siblings: Arc<[StackSeries]> = Arc::from(vec![
        StackSeries::from_points(&base),
        StackSeries::from_points(&top),
    ]);
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx")
        .with_stack(BarStackPosition::new(1, siblings).expect("stack"));

    let bar = render_time_series_bar(top[0], &ctx, &coords(0.0, 100.0)).expect("shape");
    // Top edge at 15, bottom edge on the base layer at 10.
    assert_relative_eq!(bar.shape.y, 500.0 - 15.0 * 5.0, epsilon = 1e-9);
    assert_relative_eq!(bar.shape.height, 25.0, epsilon = 1e-9);
    assert_relative_eq!(bar.enter_from.y, 500.0 - 10.0 * 5.0, epsilon = 1e-9);
}

#[test]
fn non_numeric_value_renders_nothing() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx");
    let point = DataPoint::with_interval(500.0, f64::NAN, 400.0, 600.0);
    assert!(render_time_series_bar(point, &ctx, &coords(0.0, 100.0)).is_none());
}

#[test]
fn bar_outside_plot_renders_nothing() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx");
    let point = DataPoint::with_interval(5_000.0, 20.0, 4_900.0, 5_100.0);
    assert!(render_time_series_bar(point, &ctx, &coords(0.0, 100.0)).is_none());
}

#[test]
fn negative_bar_below_value_axis_renders_nothing() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx");
    let point = DataPoint::with_interval(500.0, -5.0, 450.0, 550.0);
    assert!(render_time_series_bar(point, &ctx, &coords(0.0, 10.0)).is_none());
}

#[test]
fn label_is_flipped_for_negative_values() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 1, 0, visual())
        .expect("ctx")
        .with_label_option(BarLabelOption::shown(
            LabelPosition::Top,
            Arc::new(|value| format!("{value}")),
        ));
    let point = DataPoint::with_interval(500.0, -5.0, 400.0, 600.0);

    let bar = render_time_series_bar(point, &ctx, &coords(-50.0, 50.0)).expect("shape");
    let label = bar.style.label.expect("label");
    assert_eq!(label.text, "-5");
    assert_eq!(label.text_position, LabelPosition::Bottom);
    assert_eq!(ctx.label_option.position, LabelPosition::Top);
}

#[test]
fn series_frame_keeps_order_and_counts_skipped() {
    let ctx = BarRenderContext::new(shared(NoAggregationBarWidthStrategy::Group), 2, 1, visual())
        .expect("ctx");
    let points = vec![
        DataPoint::with_interval(150.0, 10.0, 100.0, 200.0),
        DataPoint::with_interval(250.0, f64::NAN, 200.0, 300.0),
        DataPoint::with_interval(350.0, 30.0, 300.0, 400.0),
        DataPoint::with_interval(5_050.0, 30.0, 5_000.0, 5_100.0),
    ];
    let coords = coords(0.0, 100.0);

    let frame = render_bar_series("temperature", &points, &ctx, &coords);
    assert_eq!(frame.series_id, "temperature");
    assert_eq!(frame.shapes.len(), 2);
    assert_eq!(frame.skipped, 2);
    assert_eq!(frame.shapes[0].id, "150");
    assert_eq!(frame.shapes[1].id, "350");
    frame.validate().expect("valid frame");

    for (point, shape) in [points[0], points[2]].iter().zip(&frame.shapes) {
        let single = render_time_series_bar(*point, &ctx, &coords).expect("shape");
        assert_eq!(&single, shape);
    }
}

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tsbar_rs::core::{
    DataPoint, LinearScale, PlotArea, TimeScale, TimeScaleTuning, ValueScale, ValueScaleTuning,
    Viewport,
};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1_000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original);
    let recovered = scale.pixel_to_domain(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_rejects_empty_domain() {
    assert!(LinearScale::new(5.0, 5.0, 0.0, 100.0).is_err());
    assert!(LinearScale::new(0.0, f64::NAN, 0.0, 100.0).is_err());
}

#[test]
fn span_to_pixels_is_absolute_on_inverted_ranges() {
    let scale = LinearScale::new(0.0, 100.0, 500.0, 0.0).expect("valid scale");
    assert!((scale.span_to_pixels(0.0, 10.0) - 50.0).abs() <= 1e-9);
    assert!((scale.span_to_pixels(0.0, -10.0) - 50.0).abs() <= 1e-9);
}

#[test]
fn invalid_plot_area_is_rejected() {
    assert!(PlotArea::from_viewport(Viewport::new(0, 0)).is_err());
    assert!(PlotArea::new(0.0, 0.0, -1.0, 10.0).is_err());
}

#[test]
fn time_scale_visible_range_controls_mapping() {
    let plot = PlotArea::from_viewport(Viewport::new(1_000, 600)).expect("plot");
    let mut scale = TimeScale::new(0.0, 10.0).expect("valid scale");
    scale.set_visible_range(2.0, 6.0).expect("set visible range");

    let linear = scale.linear(plot).expect("linear");
    assert_eq!(linear.domain_to_pixel(2.0), 0.0);
    assert_eq!(linear.domain_to_pixel(6.0), 1_000.0);
    assert!(scale.is_zoomed());

    scale.reset_visible_range_to_full();
    assert!(!scale.is_zoomed());
}

#[test]
fn time_scale_zoom_keeps_anchor_in_place() {
    let mut scale = TimeScale::new(0.0, 100.0).expect("valid scale");
    scale
        .zoom_visible_by_factor(2.0, 25.0, 1.0)
        .expect("zoom");

    let (start, end) = scale.visible_range();
    assert!((start - 12.5).abs() <= 1e-9);
    assert!((end - 62.5).abs() <= 1e-9);
    assert_eq!(scale.full_range(), (0.0, 100.0));
}

#[test]
fn time_scale_zoom_respects_min_span() {
    let mut scale = TimeScale::new(0.0, 100.0).expect("valid scale");
    scale
        .zoom_visible_by_factor(1_000.0, 50.0, 10.0)
        .expect("zoom");
    assert!((scale.visible_span() - 10.0).abs() <= 1e-9);
}

#[test]
fn time_scale_pan_shifts_visible_window() {
    let mut scale = TimeScale::new(0.0, 100.0).expect("valid scale");
    scale.pan_visible_by_delta(15.0).expect("pan");
    assert_eq!(scale.visible_range(), (15.0, 115.0));
    assert!(scale.pan_visible_by_delta(f64::INFINITY).is_err());
}

#[test]
fn time_scale_from_points_includes_bucket_bounds() {
    let points = vec![
        DataPoint::with_interval(150.0, 1.0, 100.0, 200.0),
        DataPoint::new(400.0, 2.0),
    ];
    let scale = TimeScale::from_points(&points).expect("fit");
    assert_eq!(scale.full_range(), (100.0, 400.0));
}

#[test]
fn time_scale_from_points_tuned_applies_padding() {
    let points = vec![DataPoint::new(10.0, 1.0), DataPoint::new(20.0, 2.0)];
    let tuning = TimeScaleTuning {
        left_padding_ratio: 0.1,
        right_padding_ratio: 0.2,
        min_span_absolute: 1.0,
    };
    let scale = TimeScale::from_points_tuned(&points, tuning).expect("fit");
    let (start, end) = scale.full_range();
    assert!((start - 9.0).abs() <= 1e-9);
    assert!((end - 22.0).abs() <= 1e-9);
}

#[test]
fn time_scale_rejects_empty_data() {
    assert!(TimeScale::from_points(&[]).is_err());
}

#[test]
fn value_scale_always_includes_zero() {
    let points = vec![DataPoint::new(0.0, 10.0), DataPoint::new(1.0, 20.0)];
    let scale = ValueScale::from_points(&points).expect("fit");
    let (min, max) = scale.domain();
    assert_eq!(min, 0.0);
    assert!((max - 22.0).abs() <= 1e-9);
}

#[test]
fn value_scale_ignores_non_numeric_samples() {
    let points = vec![DataPoint::new(0.0, f64::NAN), DataPoint::new(1.0, -4.0)];
    let tuning = ValueScaleTuning {
        top_padding_ratio: 0.0,
        ..ValueScaleTuning::default()
    };
    let scale = ValueScale::from_series_tuned(&[points.as_slice()], tuning, false).expect("fit");
    assert_eq!(scale.domain(), (-4.0, 0.0));
}

#[test]
fn stacked_value_scale_sums_signs_separately() {
    let lower = vec![DataPoint::new(0.0, 3.0), DataPoint::new(1.0, -2.0)];
    let upper = vec![DataPoint::new(0.0, 4.0), DataPoint::new(1.0, -5.0)];
    let tuning = ValueScaleTuning {
        top_padding_ratio: 0.0,
        ..ValueScaleTuning::default()
    };
    let scale =
        ValueScale::from_series_tuned(&[lower.as_slice(), upper.as_slice()], tuning, true).expect("fit");
    assert_eq!(scale.domain(), (-7.0, 7.0));
}

#[test]
fn value_scale_maps_larger_values_upwards() {
    let plot = PlotArea::new(0.0, 10.0, 100.0, 200.0).expect("plot");
    let linear = ValueScale::new(0.0, 100.0)
        .expect("scale")
        .linear(plot)
        .expect("linear");
    assert_eq!(linear.domain_to_pixel(0.0), 210.0);
    assert_eq!(linear.domain_to_pixel(100.0), 10.0);
}

#[test]
fn data_point_from_decimal_time_converts_to_epoch_millis() {
    let time = Utc
        .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .expect("valid time");
    let point = DataPoint::from_decimal_time(time, Decimal::new(1250, 2)).expect("point");
    assert_eq!(point.time, 1_704_067_200_000.0);
    assert_eq!(point.value, 12.5);
}

#[test]
fn stack_key_prefers_bucket_start() {
    assert_eq!(DataPoint::with_interval(150.0, 1.0, 100.0, 200.0).stack_key(), "100");
    assert_eq!(DataPoint::with_interval(150.0, 1.0, 0.0, 200.0).stack_key(), "150");
    assert_eq!(DataPoint::new(1.5, 1.0).stack_key(), "1.5");
}

use approx::assert_relative_eq;
use tsbar_rs::api::{BarChartSettings, NoAggregationWidthSettings};
use tsbar_rs::core::{CalendarInterval, Interval, NoAggregationBarWidthStrategy};
use tsbar_rs::render::{BarFill, Color, LabelPosition};
use tsbar_rs::ChartError;

#[test]
fn defaults_use_relative_group_width() {
    let settings = BarChartSettings::default();
    let shared = settings.shared_context();

    assert_eq!(
        shared.no_aggregation_bar_width_strategy,
        NoAggregationBarWidthStrategy::Group
    );
    assert!(shared.no_aggregation_width_relative);
    assert_relative_eq!(shared.no_aggregation_width, 2.0);
    assert_eq!(shared.time_interval, Interval::Millis(1_000.0));
}

#[test]
fn defaults_round_trip_through_json() {
    let settings = BarChartSettings::default();
    let json = settings.to_json().expect("serialize");
    let parsed = BarChartSettings::from_json_str(&json).expect("parse");
    assert_eq!(parsed, settings);
}

#[test]
fn parses_partial_json_settings() {
    let json = r##"{
        "timeInterval": "MONTH",
        "noAggregationBarWidthSettings": {
            "strategy": "separate",
            "separateWidth": { "relative": false, "absoluteWidth": 500 }
        },
        "bar": {
            "color": "#ff0000",
            "showBorder": true,
            "borderRadius": 4
        },
        "labels": { "showValue": true, "position": "insideTop", "decimals": 1, "units": "kW" }
    }"##;
    let settings = BarChartSettings::from_json_str(json).expect("parse");

    assert_eq!(
        settings.time_interval,
        Interval::Calendar(CalendarInterval::Month)
    );
    let shared = settings.shared_context();
    assert!(shared.is_separate(true));
    assert!(!shared.no_aggregation_width_relative);
    assert_relative_eq!(shared.no_aggregation_width, 500.0);
    assert_eq!(
        settings.no_aggregation_bar_width_settings.group_width,
        NoAggregationWidthSettings::default()
    );

    let visual = settings.visual_settings(None);
    let red = Color::rgb(1.0, 0.0, 0.0);
    assert_eq!(visual.color, BarFill::Solid(red));
    assert_eq!(visual.border_color, red);
    assert_relative_eq!(visual.border_width, 2.0);
    assert_relative_eq!(visual.border_radius, 4.0);

    let label = settings.label_option("Power");
    assert!(label.show);
    assert_eq!(label.position, LabelPosition::InsideTop);
    let formatter = label.formatter.expect("formatter");
    assert_eq!(formatter(12.34), "{value|12.3 kW}");
    assert!(label.rich.contains_key("value"));
    assert!(label.rich.contains_key("label"));
}

#[test]
fn hidden_border_is_transparent() {
    let settings = BarChartSettings::default();
    let visual = settings.visual_settings(Some(&BarFill::Solid(Color::BLACK)));
    assert_eq!(visual.color, BarFill::Solid(Color::BLACK));
    assert_eq!(visual.border_color, Color::TRANSPARENT);
    assert_relative_eq!(visual.border_width, 0.0);
}

#[test]
fn labels_are_hidden_by_default() {
    let label = BarChartSettings::default().label_option("Power");
    assert!(!label.show);
    assert!(label.formatter.is_none());
}

#[test]
fn rejects_non_positive_interval() {
    let err = BarChartSettings::from_json_str(r#"{ "timeInterval": 0 }"#)
        .expect_err("zero interval");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rejects_non_positive_no_aggregation_width() {
    let json = r#"{ "noAggregationBarWidthSettings": { "groupWidth": { "relativeWidth": -1 } } }"#;
    let err = BarChartSettings::from_json_str(json).expect_err("negative width");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn rejects_unparseable_color() {
    let err = BarChartSettings::from_json_str(r#"{ "bar": { "color": "teal-ish" } }"#)
        .expect_err("bad color");
    assert!(matches!(err, ChartError::Json(_)));
}

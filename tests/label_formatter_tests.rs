use approx::assert_relative_eq;
use tsbar_rs::api::{
    ValueLabelFormatter, estimate_label_text_width_px, format_value, label_fits_bar,
    strip_rich_markup,
};

#[test]
fn format_value_rounds_half_away_from_zero() {
    assert_eq!(format_value(12.3456, Some(2), "°C"), "12.35 °C");
    assert_eq!(format_value(-2.5, Some(0), ""), "-3");
}

#[test]
fn format_value_drops_trailing_zero_decimals() {
    assert_eq!(format_value(12.3, Some(2), ""), "12.3");
    assert_eq!(format_value(5.0, Some(3), ""), "5");
}

#[test]
fn format_value_without_decimals_prints_shortest_form() {
    assert_eq!(format_value(5.0, None, "kW"), "5 kW");
    assert_eq!(format_value(0.125, None, ""), "0.125");
}

#[test]
fn value_label_formatter_emits_rich_segments() {
    let formatter = ValueLabelFormatter {
        show_value: true,
        show_label: true,
        decimals: Some(1),
        units: String::new(),
        series_name: "Temp".to_owned(),
    };
    assert_eq!(formatter.format(21.26), "{value|21.3} {label|Temp}");

    let name_only = ValueLabelFormatter {
        show_value: false,
        ..formatter
    };
    let callback = name_only.into_formatter();
    assert_eq!(callback(21.26), "{label|Temp}");
}

#[test]
fn strip_rich_markup_keeps_text_only() {
    assert_eq!(
        strip_rich_markup("{value|21.3 °C} {label|Temp}"),
        "21.3 °C Temp"
    );
    assert_eq!(strip_rich_markup("plain"), "plain");
}

#[test]
fn label_width_estimate_ignores_markup_and_has_a_floor() {
    let plain = estimate_label_text_width_px("12.5", 10.0);
    let rich = estimate_label_text_width_px("{value|12.5}", 10.0);
    assert_relative_eq!(plain, rich);
    assert_relative_eq!(plain, (0.62 * 3.0 + 0.34) * 10.0, epsilon = 1e-9);
    assert_relative_eq!(estimate_label_text_width_px("", 12.0), 12.0);
}

#[test]
fn labels_need_two_pixels_of_slack() {
    assert!(label_fits_bar(22.0, 20.0));
    assert!(!label_fits_bar(21.9, 20.0));
}

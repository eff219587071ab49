use std::sync::Arc;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::render::BarLabelFormatter;

/// Minimum free horizontal space a bar must keep around its label.
pub const LABEL_FIT_MARGIN_PX: f64 = 2.0;

/// Formats a value with optional fixed decimals and units.
///
/// Rounds half away from zero and drops trailing zero decimals, so `12.30`
/// with two decimals prints as `12.3`. Units follow after a space.
pub fn format_value(value: f64, decimals: Option<u32>, units: &str) -> String {
    let mut text = match (decimals, Decimal::from_f64(value)) {
        (Some(decimals), Some(decimal)) => decimal
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        (Some(decimals), None) => format!("{value:.prec$}", prec = decimals as usize),
        (None, _) => value.to_string(),
    };
    if !units.is_empty() {
        text.push(' ');
        text.push_str(units);
    }
    text
}

/// Rich-markup label with the value and/or the series name.
///
/// Produces `{value|12.3 °C} {label|Temperature}`; the segment names match
/// the rich styles configured on the label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLabelFormatter {
    pub show_value: bool,
    pub show_label: bool,
    #[serde(default)]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub series_name: String,
}

impl ValueLabelFormatter {
    pub fn format(&self, value: f64) -> String {
        let mut parts: SmallVec<[String; 2]> = SmallVec::new();
        if self.show_value {
            parts.push(format!(
                "{{value|{}}}",
                format_value(value, self.decimals, &self.units)
            ));
        }
        if self.show_label {
            parts.push(format!("{{label|{}}}", self.series_name));
        }
        parts.join(" ")
    }

    pub fn into_formatter(self) -> BarLabelFormatter {
        Arc::new(move |value| self.format(value))
    }
}

/// Strips `{style|text}` markup, keeping the text.
pub fn strip_rich_markup(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut in_style_name = false;
    for ch in text.chars() {
        match ch {
            '{' => in_style_name = true,
            '|' if in_style_name => in_style_name = false,
            '}' => {}
            _ if in_style_name => {}
            _ => plain.push(ch),
        }
    }
    plain
}

/// Backend-independent width estimate of a label in pixels.
pub fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = strip_rich_markup(text).chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

/// `false` when the label would leave less than two pixels of bar around it
/// and should be hidden.
pub fn label_fits_bar(bar_width_px: f64, label_width_px: f64) -> bool {
    bar_width_px - label_width_px >= LABEL_FIT_MARGIN_PX
}

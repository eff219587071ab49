use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::api::ValueLabelFormatter;
use crate::core::{BarRenderSharedContext, Interval, NoAggregationBarWidthStrategy};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    BarFill, BarLabelOption, BarVisualSettings, Color, LabelPosition, RichStyles, RichTextStyle,
};

const DEFAULT_LABEL_FONT_SIZE: f64 = 12.0;

/// Width of a raw-sample bar slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoAggregationWidthSettings {
    /// Use `relative_width` (percent of the visible time span) instead of
    /// `absolute_width` (milliseconds).
    pub relative: bool,
    pub relative_width: f64,
    pub absolute_width: f64,
}

impl Default for NoAggregationWidthSettings {
    fn default() -> Self {
        Self {
            relative: true,
            relative_width: 2.0,
            absolute_width: 1_000.0,
        }
    }
}

impl NoAggregationWidthSettings {
    pub fn width(self) -> f64 {
        if self.relative {
            self.relative_width
        } else {
            self.absolute_width
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NoAggregationBarWidthSettings {
    pub strategy: NoAggregationBarWidthStrategy,
    pub group_width: NoAggregationWidthSettings,
    pub separate_width: NoAggregationWidthSettings,
}

impl NoAggregationBarWidthSettings {
    /// Width settings of the active strategy.
    pub fn active_width(self) -> NoAggregationWidthSettings {
        match self.strategy {
            NoAggregationBarWidthStrategy::Group => self.group_width,
            NoAggregationBarWidthStrategy::Separate => self.separate_width,
        }
    }
}

/// Paint settings shared by bar series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarSettings {
    pub color: BarFill,
    pub show_border: bool,
    /// Border color; the fill color when unset.
    pub border_color: Option<Color>,
    pub border_width: f64,
    pub border_radius: f64,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            color: BarFill::Solid(Color::from_rgba8(0x30, 0x56, 0xa5, 1.0)),
            show_border: false,
            border_color: None,
            border_width: 2.0,
            border_radius: 0.0,
        }
    }
}

/// Bar label settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarLabelSettings {
    pub show_value: bool,
    /// Show the series name next to the value.
    pub show_label: bool,
    pub position: LabelPosition,
    pub decimals: Option<u32>,
    pub units: String,
    /// Drop labels wider than their bar.
    pub hide_overflowing: bool,
    pub value_style: RichTextStyle,
    pub label_style: RichTextStyle,
}

impl Default for BarLabelSettings {
    fn default() -> Self {
        Self {
            show_value: false,
            show_label: false,
            position: LabelPosition::Top,
            decimals: None,
            units: String::new(),
            hide_overflowing: false,
            value_style: RichTextStyle {
                font_family: Some("Roboto".to_owned()),
                font_size: Some(DEFAULT_LABEL_FONT_SIZE),
                font_weight: Some("700".to_owned()),
                font_style: Some("normal".to_owned()),
                fill: Some(Color::rgba(0.0, 0.0, 0.0, 0.76)),
            },
            label_style: RichTextStyle {
                font_family: Some("Roboto".to_owned()),
                font_size: Some(DEFAULT_LABEL_FONT_SIZE),
                font_weight: Some("400".to_owned()),
                font_style: Some("normal".to_owned()),
                fill: Some(Color::rgba(0.0, 0.0, 0.0, 0.54)),
            },
        }
    }
}

/// Serializable bar chart configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSettings {
    /// Aggregation interval of the queried time window.
    #[serde(default)]
    pub time_interval: Interval,
    #[serde(default)]
    pub no_aggregation_bar_width_settings: NoAggregationBarWidthSettings,
    #[serde(default)]
    pub bar: BarSettings,
    #[serde(default)]
    pub labels: BarLabelSettings,
}

impl BarChartSettings {
    pub fn from_json_str(json: &str) -> ChartResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Err(err) = self.time_interval.validate() {
            warn!(interval = ?self.time_interval, "rejecting bar chart settings");
            return Err(err);
        }
        let width = self.no_aggregation_bar_width_settings.active_width();
        if !width.width().is_finite() || width.width() <= 0.0 {
            warn!(width = width.width(), "rejecting bar chart settings");
            return Err(ChartError::InvalidData(
                "no-aggregation bar width must be finite and > 0".to_owned(),
            ));
        }
        self.visual_settings(None).validate()?;
        Ok(self)
    }

    pub fn shared_context(&self) -> BarRenderSharedContext {
        let widths = self.no_aggregation_bar_width_settings;
        let active = widths.active_width();
        BarRenderSharedContext {
            time_interval: self.time_interval,
            no_aggregation_bar_width_strategy: widths.strategy,
            no_aggregation_width_relative: active.relative,
            no_aggregation_width: active.width(),
        }
    }

    /// Visual settings of a series, optionally overriding the fill.
    pub fn visual_settings(&self, color: Option<&BarFill>) -> BarVisualSettings {
        let fill = color.unwrap_or(&self.bar.color).clone();
        let (border_color, border_width) = if self.bar.show_border {
            let fallback = match &fill {
                BarFill::Solid(color) => *color,
                BarFill::LinearGradient(gradient) => gradient
                    .stops
                    .first()
                    .map_or(Color::BLACK, |stop| stop.color),
            };
            (
                self.bar.border_color.unwrap_or(fallback),
                self.bar.border_width,
            )
        } else {
            (Color::TRANSPARENT, 0.0)
        };
        BarVisualSettings {
            color: fill,
            border_color,
            border_width,
            border_radius: self.bar.border_radius,
        }
    }

    /// Label option of the series named `series_name`.
    pub fn label_option(&self, series_name: &str) -> BarLabelOption {
        let labels = &self.labels;
        if !labels.show_value && !labels.show_label {
            return BarLabelOption::hidden();
        }
        let formatter = ValueLabelFormatter {
            show_value: labels.show_value,
            show_label: labels.show_label,
            decimals: labels.decimals,
            units: labels.units.clone(),
            series_name: series_name.to_owned(),
        };
        let mut rich = RichStyles::new();
        rich.insert("value".to_owned(), labels.value_style.clone());
        rich.insert("label".to_owned(), labels.label_style.clone());
        let option =
            BarLabelOption::shown(labels.position, formatter.into_formatter()).with_rich(rich);
        if labels.hide_overflowing {
            let font_size = labels
                .value_style
                .font_size
                .unwrap_or(DEFAULT_LABEL_FONT_SIZE);
            option.with_fit_to_bar(font_size)
        } else {
            option
        }
    }
}

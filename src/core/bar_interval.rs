use serde::{Deserialize, Serialize};

use crate::core::primitives::{is_truthy, is_truthy_opt};
use crate::core::{DataPoint, Interval};

/// How raw (non-aggregated) samples are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoAggregationBarWidthStrategy {
    /// Bars of all series share one synthetic slot and sit side by side.
    #[default]
    Group,
    /// Every sample is drawn as one full-width bar of its own.
    Separate,
}

/// Per-chart settings shared by every bar series during a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarRenderSharedContext {
    pub time_interval: Interval,
    #[serde(default)]
    pub no_aggregation_bar_width_strategy: NoAggregationBarWidthStrategy,
    /// `true`: `no_aggregation_width` is a percentage of the time span visible
    /// across the chart. `false`: it is an absolute width in milliseconds.
    pub no_aggregation_width_relative: bool,
    pub no_aggregation_width: f64,
}

impl BarRenderSharedContext {
    /// `true` when raw samples of this series are drawn as separate bars.
    pub fn is_separate(&self, no_aggregation: bool) -> bool {
        no_aggregation
            && self.no_aggregation_bar_width_strategy == NoAggregationBarWidthStrategy::Separate
    }
}

/// Temporal footprint of one bar slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedInterval {
    pub start: f64,
    pub end: f64,
    pub width: f64,
}

/// Resolves the time span a sample's bar slot covers.
///
/// `chart_time_span` is the amount of time that fits across the whole chart
/// canvas (canvas width divided by pixels per millisecond). It only matters
/// for relative no-aggregation widths.
///
/// Aggregated samples use their bucket bounds. Raw samples get a synthetic
/// width centred on their time. When the result is unusable (missing, zero or
/// NaN) the configured aggregation interval is used instead.
pub fn resolve_bar_interval(
    point: DataPoint,
    shared: &BarRenderSharedContext,
    no_aggregation: bool,
    chart_time_span: f64,
) -> ResolvedInterval {
    let time = point.time;
    let mut start = point.interval_start;
    let mut end = point.interval_end;
    let mut width = match (start, end) {
        (Some(start), Some(end)) => end - start,
        _ => f64::NAN,
    };

    if no_aggregation {
        width = if shared.no_aggregation_width_relative {
            chart_time_span * (shared.no_aggregation_width / 100.0)
        } else {
            shared.no_aggregation_width
        };
        start = Some(time - width / 2.0);
        end = Some(time + width / 2.0);
    }

    if !is_truthy_opt(start) || !is_truthy_opt(end) || !is_truthy(width) {
        let width = shared.time_interval.number_value();
        let start = time - width / 2.0;
        return ResolvedInterval {
            start,
            end: start + width,
            width,
        };
    }

    ResolvedInterval {
        start: start.unwrap_or(time),
        end: end.unwrap_or(time),
        width,
    }
}

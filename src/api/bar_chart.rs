use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{BarChartSettings, BarRenderContext, BarStackPosition, render_bar_series};
use crate::core::{CoordinateSystem, DataPoint, StackSeries, ValueScale, ValueScaleTuning};
use crate::error::{ChartError, ChartResult};
use crate::render::{BarFill, Renderer};

/// One bar series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub points: Vec<DataPoint>,
    /// Samples are raw values rather than aggregation buckets.
    #[serde(default)]
    pub no_aggregation: bool,
    /// Series sharing a stack name are stacked in declaration order.
    #[serde(default)]
    pub stack: Option<String>,
    #[serde(default)]
    pub color: Option<BarFill>,
}

impl BarSeries {
    pub fn new(id: impl Into<String>, points: Vec<DataPoint>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            points,
            no_aggregation: false,
            stack: None,
            color: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_no_aggregation(mut self, no_aggregation: bool) -> Self {
        self.no_aggregation = no_aggregation;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<BarFill>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Bar series of one chart and the settings they are drawn with.
///
/// Each unstacked series takes its own slot in a bar group; all series of a
/// stack share one slot.
#[derive(Debug, Clone, Default)]
pub struct BarChartLayout {
    settings: BarChartSettings,
    series: Vec<BarSeries>,
}

impl BarChartLayout {
    pub fn new(settings: BarChartSettings) -> ChartResult<Self> {
        Ok(Self {
            settings: settings.validate()?,
            series: Vec::new(),
        })
    }

    pub fn add_series(&mut self, series: BarSeries) -> ChartResult<()> {
        if self.series.iter().any(|existing| existing.id == series.id) {
            return Err(ChartError::InvalidData(format!(
                "duplicate bar series id `{}`",
                series.id
            )));
        }
        self.series.push(series);
        Ok(())
    }

    pub fn with_series(mut self, series: Vec<BarSeries>) -> ChartResult<Self> {
        for entry in series {
            self.add_series(entry)?;
        }
        Ok(self)
    }

    pub fn settings(&self) -> &BarChartSettings {
        &self.settings
    }

    pub fn series(&self) -> &[BarSeries] {
        &self.series
    }

    /// Number of bar slots per group.
    pub fn bars_count(&self) -> usize {
        self.slot_indices().1
    }

    fn slot_indices(&self) -> (Vec<usize>, usize) {
        let mut stack_slots: IndexMap<&str, usize> = IndexMap::new();
        let mut indices = Vec::with_capacity(self.series.len());
        let mut next = 0;
        for series in &self.series {
            let slot = match series.stack.as_deref() {
                Some(stack) if stack_slots.contains_key(stack) => stack_slots[stack],
                stack => {
                    if let Some(stack) = stack {
                        stack_slots.insert(stack, next);
                    }
                    next += 1;
                    next - 1
                }
            };
            indices.push(slot);
        }
        (indices, next)
    }

    /// Render contexts in series order.
    pub fn contexts(&self) -> ChartResult<Vec<BarRenderContext>> {
        let (slots, bars_count) = self.slot_indices();
        let shared = self.settings.shared_context();

        let mut stacks: IndexMap<&str, Vec<usize>> = IndexMap::new();
        for (position, series) in self.series.iter().enumerate() {
            if let Some(stack) = series.stack.as_deref() {
                stacks.entry(stack).or_default().push(position);
            }
        }
        let stack_data: IndexMap<&str, Arc<[StackSeries]>> = stacks
            .iter()
            .map(|(name, members)| {
                let siblings: Vec<StackSeries> = members
                    .iter()
                    .map(|&position| StackSeries::from_points(&self.series[position].points))
                    .collect();
                (*name, Arc::from(siblings))
            })
            .collect();

        self.series
            .iter()
            .enumerate()
            .map(|(position, series)| {
                let mut ctx = BarRenderContext::new(
                    shared,
                    bars_count,
                    slots[position],
                    self.settings.visual_settings(series.color.as_ref()),
                )?
                .with_no_aggregation(series.no_aggregation)
                .with_label_option(self.settings.label_option(&series.name));

                if let Some(stack) = series.stack.as_deref() {
                    if let (Some(members), Some(siblings)) =
                        (stacks.get(stack), stack_data.get(stack))
                    {
                        let stack_index = members
                            .iter()
                            .position(|&member| member == position)
                            .unwrap_or_default();
                        ctx = ctx.with_stack(BarStackPosition::new(
                            stack_index,
                            Arc::clone(siblings),
                        )?);
                    }
                }
                Ok(ctx)
            })
            .collect()
    }

    /// Value axis fitted to every series, stack totals included.
    pub fn fit_value_scale(&self, tuning: ValueScaleTuning) -> ChartResult<ValueScale> {
        let mut stacks: IndexMap<&str, Vec<&[DataPoint]>> = IndexMap::new();
        let mut min: f64 = 0.0;
        let mut max: f64 = 0.0;
        for series in &self.series {
            match series.stack.as_deref() {
                Some(stack) => stacks.entry(stack).or_default().push(series.points.as_slice()),
                None => {
                    let (lo, hi) = ValueScale::series_extent(&[series.points.as_slice()], false);
                    min = min.min(lo);
                    max = max.max(hi);
                }
            }
        }
        for members in stacks.values() {
            let (lo, hi) = ValueScale::series_extent(members, true);
            min = min.min(lo);
            max = max.max(hi);
        }
        ValueScale::from_extent_tuned(min, max, tuning)
    }

    /// Lays out every series and hands one frame per series to `renderer`.
    pub fn render<C, R>(&self, coords: &C, renderer: &mut R) -> ChartResult<()>
    where
        C: CoordinateSystem + Sync + ?Sized,
        R: Renderer,
    {
        let contexts = self.contexts()?;
        debug!(
            series = self.series.len(),
            bars_count = self.bars_count(),
            "bar chart render pass"
        );
        for (series, ctx) in self.series.iter().zip(&contexts) {
            let frame = render_bar_series(&series.id, &series.points, ctx, coords);
            renderer.render(&frame)?;
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::ChartResult;
use crate::render::BarShape;

/// Bars produced by one series draw pass, in data order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BarFrame {
    pub series_id: String,
    pub shapes: Vec<BarShape>,
    /// Samples that produced nothing to draw (clipped away or non-numeric).
    pub skipped: usize,
}

impl BarFrame {
    pub fn new(series_id: impl Into<String>) -> Self {
        Self {
            series_id: series_id.into(),
            shapes: Vec::new(),
            skipped: 0,
        }
    }

    /// Records one render result.
    pub fn push(&mut self, shape: Option<BarShape>) {
        match shape {
            Some(shape) => self.shapes.push(shape),
            None => self.skipped += 1,
        }
    }

    pub fn shape(&self, id: &str) -> Option<&BarShape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for shape in &self.shapes {
            shape.validate()?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

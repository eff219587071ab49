use crate::error::ChartResult;
use crate::render::{BarFrame, Renderer};

/// Collects validated frames so they can be written out as JSON.
#[derive(Debug, Default)]
pub struct JsonRenderer {
    frames: Vec<BarFrame>,
}

impl JsonRenderer {
    pub fn frames(&self) -> &[BarFrame] {
        &self.frames
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(&self.frames)?)
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames.push(frame.clone());
        Ok(())
    }
}

use crate::error::ChartResult;
use crate::render::{BarFrame, Renderer};

/// Headless renderer that only validates and counts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_shape_count: usize,
    pub last_skipped_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &BarFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_shape_count = frame.shapes.len();
        self.last_skipped_count = frame.skipped;
        Ok(())
    }
}

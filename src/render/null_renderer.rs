use crate::error::ChartResult;
use crate::render::{Renderer, Scene};

/// No-op renderer for tests and headless use.
///
/// It still validates the scene so invalid geometry surfaces without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_line_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_line_count = scene.lines.len();
        self.last_label_count = scene.labels.len();
        Ok(())
    }
}

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Headless backend that validates frames and records draw statistics.
///
/// Used by the test suite and by hosts that only need frame geometry.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullRenderer {
    render_calls: usize,
    last_line_count: usize,
    last_rect_count: usize,
    last_text_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn render_calls(&self) -> usize {
        self.render_calls
    }

    #[must_use]
    pub fn last_line_count(&self) -> usize {
        self.last_line_count
    }

    #[must_use]
    pub fn last_rect_count(&self) -> usize {
        self.last_rect_count
    }

    #[must_use]
    pub fn last_text_count(&self) -> usize {
        self.last_text_count
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        self.render_calls += 1;
        self.last_line_count = frame.line_count();
        self.last_rect_count = frame.rect_count();
        self.last_text_count = frame.text_count();
        Ok(())
    }
}

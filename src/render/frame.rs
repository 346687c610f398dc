use serde::Serialize;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::primitives::{Color, LinePrimitive, RectPrimitive, TextPrimitive};

/// Draw layers in back-to-front order.
///
/// Backends paint layers in this order and, within a layer, lines before
/// rects before texts. Overlays always end up above candle bodies and the
/// tracker always ends up above the grid regardless of build order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerKind {
    Grid,
    Axis,
    Series,
    PriceTracker,
    Overlay,
}

impl LayerKind {
    /// Canonical back-to-front ordering.
    #[must_use]
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Grid,
            Self::Axis,
            Self::Series,
            Self::PriceTracker,
            Self::Overlay,
        ]
    }
}

/// Primitives belonging to one draw layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameLayer {
    pub kind: LayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl FrameLayer {
    #[must_use]
    fn empty(kind: LayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}

/// Backend-agnostic description of everything one frame draws.
///
/// Building a frame is pure: the same inputs always produce an equal frame,
/// which makes frames directly comparable in tests and serializable for
/// snapshot inspection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub background: Color,
    layers: Vec<FrameLayer>,
}

impl RenderFrame {
    pub fn new(viewport: Viewport, background: Color) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        background.validate()?;

        Ok(Self {
            viewport,
            background,
            layers: LayerKind::ordered().map(FrameLayer::empty).to_vec(),
        })
    }

    pub fn push_line(&mut self, kind: LayerKind, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: LayerKind, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_text(&mut self, kind: LayerKind, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    /// Layers in back-to-front paint order.
    #[must_use]
    pub fn layers(&self) -> &[FrameLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &FrameLayer {
        self.layers
            .iter()
            .find(|layer| layer.kind == kind)
            .unwrap_or_else(|| unreachable!("frames are constructed with all layers present"))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.lines.len()).sum()
    }

    #[must_use]
    pub fn rect_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.rects.len()).sum()
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.texts.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(FrameLayer::is_empty)
    }

    pub fn validate(&self) -> ChartResult<()> {
        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }
        Ok(())
    }

    fn layer_mut(&mut self, kind: LayerKind) -> &mut FrameLayer {
        self.layers
            .iter_mut()
            .find(|layer| layer.kind == kind)
            .unwrap_or_else(|| unreachable!("frames are constructed with all layers present"))
    }
}

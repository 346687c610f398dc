mod frame_builder;
mod style;

pub use style::ChartStyle;

use tracing::debug;

use crate::core::{
    Candle, CoordinateMapper, DerivedBounds, IndicatorSeries, ViewTransform, Viewport,
    wheel_zoom_factor,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::Renderer;

type TimeLabelFormatter = Box<dyn Fn(f64) -> String + Send + Sync>;

/// Construction parameters for a `ChartEngine`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}

/// High-level chart facade owning data, view state and a render backend.
///
/// Hosts feed it candles, overlays and pointer events; it derives scales,
/// builds deterministic render frames and hands them to the backend.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    style: ChartStyle,
    transform: ViewTransform,
    interaction: InteractionState,
    candles: Vec<Candle>,
    overlays: Vec<IndicatorSeries>,
    time_label_formatter: Option<TimeLabelFormatter>,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        config.style.validate()?;
        ensure_viewport_fits(config.viewport, config.style)?;

        Ok(Self {
            renderer,
            viewport: config.viewport,
            style: config.style,
            transform: ViewTransform::default(),
            interaction: InteractionState::new(),
            candles: Vec::new(),
            overlays: Vec::new(),
            time_label_formatter: None,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn style(&self) -> ChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        ensure_viewport_fits(self.viewport, style)?;
        self.style = style;
        Ok(())
    }

    /// Replaces the dataset. The view transform is kept so streaming updates
    /// do not snap the user back to the default view.
    pub fn set_candles(&mut self, candles: Vec<Candle>) {
        debug!(count = candles.len(), "dataset replaced");
        self.candles = candles;
    }

    pub fn append_candle(&mut self, candle: Candle) {
        self.candles.push(candle);
    }

    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn set_overlays(&mut self, overlays: Vec<IndicatorSeries>) {
        debug!(count = overlays.len(), "overlays replaced");
        self.overlays = overlays;
    }

    #[must_use]
    pub fn overlays(&self) -> &[IndicatorSeries] {
        &self.overlays
    }

    pub fn resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        let viewport = Viewport::new(width, height);
        ensure_viewport_fits(viewport, self.style)?;
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    /// Restores the default view (no pan, unit zoom).
    pub fn reset_view(&mut self) {
        self.transform.reset();
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    pub fn pointer_press(&mut self) {
        self.interaction.on_pointer_press();
    }

    pub fn pointer_release(&mut self) {
        self.interaction.on_pointer_release();
    }

    /// Handles pointer movement with horizontal delta `movement_dx`.
    ///
    /// Returns `true` when the view panned, `false` when the pointer moved
    /// while no button was held.
    pub fn pointer_move(&mut self, movement_dx: f64) -> ChartResult<bool> {
        if !self.interaction.is_panning() {
            return Ok(false);
        }
        self.transform.pan_by_pixels(movement_dx)?;
        Ok(true)
    }

    /// Handles a wheel event at `pointer_x`, keeping the data value under
    /// the pointer fixed. Returns the factor that was applied.
    pub fn wheel_zoom(&mut self, delta_y: f64, pointer_x: f64) -> ChartResult<f64> {
        if !delta_y.is_finite() {
            return Err(ChartError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }
        let factor = wheel_zoom_factor(delta_y);
        self.transform.zoom_around_pixel(pointer_x, factor)?;
        Ok(factor)
    }

    /// Data envelope with the vertical padding applied, `None` when the
    /// dataset is empty.
    #[must_use]
    pub fn derived_bounds(&self) -> Option<DerivedBounds> {
        DerivedBounds::from_candles(&self.candles)
    }

    pub fn mapper(&self) -> ChartResult<CoordinateMapper> {
        let bounds = self.derived_bounds().ok_or_else(|| {
            ChartError::InvalidData("cannot map coordinates without candles".to_owned())
        })?;
        CoordinateMapper::new(bounds, self.transform, self.viewport, self.style.padding_px)
    }

    pub fn time_to_pixel(&self, time: f64) -> ChartResult<f64> {
        Ok(self.mapper()?.time_to_x(time))
    }

    pub fn pixel_to_time(&self, x: f64) -> ChartResult<f64> {
        Ok(self.mapper()?.x_to_time(x))
    }

    pub fn price_to_pixel(&self, price: f64) -> ChartResult<f64> {
        Ok(self.mapper()?.price_to_y(price))
    }

    pub fn pixel_to_price(&self, y: f64) -> ChartResult<f64> {
        Ok(self.mapper()?.y_to_price(y))
    }

    /// Overrides how time axis labels are rendered. The default formats the
    /// timestamp as UTC `HH:MM:SS`.
    pub fn set_time_label_formatter<F>(&mut self, formatter: F)
    where
        F: Fn(f64) -> String + Send + Sync + 'static,
    {
        self.time_label_formatter = Some(Box::new(formatter));
    }

    pub fn clear_time_label_formatter(&mut self) {
        self.time_label_formatter = None;
    }

    /// Builds the current frame and hands it to the backend.
    ///
    /// An empty dataset is not an error: the call is a no-op so hosts can
    /// wire draw callbacks before any data arrives.
    pub fn render(&mut self) -> ChartResult<()> {
        if self.candles.is_empty() {
            debug!("render skipped: no candles");
            return Ok(());
        }

        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Serializes the current frame as pretty JSON, for snapshot inspection
    /// and debugging.
    pub fn frame_snapshot_json_pretty(&self) -> ChartResult<String> {
        let frame = self.build_render_frame()?;
        serde_json::to_string_pretty(&frame)
            .map_err(|err| ChartError::InvalidData(format!("frame serialization failed: {err}")))
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(feature = "cairo-backend")]
impl<R> ChartEngine<R>
where
    R: Renderer + crate::render::CairoContextRenderer,
{
    /// Renders the current frame onto an external Cairo context, as provided
    /// by a GTK `DrawingArea` draw callback.
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()> {
        if self.candles.is_empty() {
            debug!("render skipped: no candles");
            return Ok(());
        }

        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }
}

fn ensure_viewport_fits(viewport: Viewport, style: ChartStyle) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    if style.padding_px * 2.0 >= f64::from(viewport.width)
        || style.padding_px * 2.0 >= f64::from(viewport.height)
    {
        return Err(ChartError::InvalidData(
            "viewport too small for the configured padding".to_owned(),
        ));
    }
    Ok(())
}

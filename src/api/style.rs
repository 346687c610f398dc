use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Visual configuration for one chart.
///
/// Defaults reproduce the dark trading theme: near-black background,
/// teal/red candles, faint grid and a gold last-price tracker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Inner margin between the viewport edge and the plot area, in pixels.
    pub padding_px: f64,
    pub background_color: Color,
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub grid_color: Color,
    pub text_color: Color,
    pub tracker_color: Color,
    pub axis_font_size_px: f64,
    /// Number of grid intervals per axis; both axes draw `grid_steps + 1`
    /// lines and labels.
    pub grid_steps: u32,
    pub candle_body_width_px: f64,
    pub candle_wick_width_px: f64,
    pub grid_line_width_px: f64,
    pub tracker_line_width_px: f64,
    pub tracker_label_width_px: f64,
    pub tracker_label_height_px: f64,
    pub default_overlay_color: Color,
    pub default_overlay_width_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding_px: 40.0,
            background_color: Color::from_rgb8(0x13, 0x17, 0x22),
            bullish_color: Color::from_rgb8(0x26, 0xa6, 0x9a),
            bearish_color: Color::from_rgb8(0xef, 0x53, 0x50),
            grid_color: Color::rgba(1.0, 1.0, 1.0, 0.1),
            text_color: Color::from_rgb8(0xd9, 0xd9, 0xd9),
            tracker_color: Color::from_rgb8(0xff, 0xd7, 0x00),
            axis_font_size_px: 12.0,
            grid_steps: 6,
            candle_body_width_px: 4.0,
            candle_wick_width_px: 1.5,
            grid_line_width_px: 0.5,
            tracker_line_width_px: 1.0,
            tracker_label_width_px: 50.0,
            tracker_label_height_px: 20.0,
            default_overlay_color: Color::rgb(1.0, 1.0, 1.0),
            default_overlay_width_px: 2.0,
        }
    }
}

impl ChartStyle {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.padding_px.is_finite() || self.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "style padding must be finite and >= 0".to_owned(),
            ));
        }
        if self.grid_steps == 0 {
            return Err(ChartError::InvalidData(
                "style grid steps must be >= 1".to_owned(),
            ));
        }

        for (name, value) in [
            ("axis font size", self.axis_font_size_px),
            ("candle body width", self.candle_body_width_px),
            ("candle wick width", self.candle_wick_width_px),
            ("grid line width", self.grid_line_width_px),
            ("tracker line width", self.tracker_line_width_px),
            ("tracker label width", self.tracker_label_width_px),
            ("tracker label height", self.tracker_label_height_px),
            ("default overlay width", self.default_overlay_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "style {name} must be finite and > 0"
                )));
            }
        }

        self.background_color.validate()?;
        self.bullish_color.validate()?;
        self.bearish_color.validate()?;
        self.grid_color.validate()?;
        self.text_color.validate()?;
        self.tracker_color.validate()?;
        self.default_overlay_color.validate()
    }
}

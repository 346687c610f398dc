use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One sample of an auxiliary line series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub time: f64,
    pub value: f64,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

/// Auxiliary line series (moving average, prediction, ...) drawn atop the
/// candle plot.
///
/// Points must be time-ordered for correct polyline drawing; ordering is the
/// caller's responsibility and is not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub label: String,
    pub color: Option<Color>,
    pub line_width: Option<f64>,
    pub dashed: bool,
    pub data: Vec<SeriesPoint>,
}

impl IndicatorSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.into(),
            color: None,
            line_width: None,
            dashed: false,
            data,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = Some(line_width);
        self
    }

    /// Marks the series for dashed stroking (used for predictions).
    #[must_use]
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

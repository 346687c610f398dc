use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Wheel factor applied when scrolling down (zoom out).
pub const WHEEL_ZOOM_OUT_FACTOR: f64 = 0.9;
/// Wheel factor applied when scrolling up (zoom in).
pub const WHEEL_ZOOM_IN_FACTOR: f64 = 1.1;

/// Pan offset and zoom scale applied to the time axis.
///
/// State is private and only mutated through the scoped methods below, so
/// interaction handlers cannot drift it behind the engine's back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    offset_x: f64,
    scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn offset_x(self) -> f64 {
        self.offset_x
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    /// Applies a drag movement delta: the offset grows by `movement_dx`
    /// divided by the current scale.
    pub fn pan_by_pixels(&mut self, movement_dx: f64) -> ChartResult<()> {
        if !movement_dx.is_finite() {
            return Err(ChartError::InvalidData(
                "pan movement delta must be finite".to_owned(),
            ));
        }

        self.offset_x += movement_dx / self.scale;
        Ok(())
    }

    /// Rescales around a pointer position so the data value under the
    /// pointer keeps its pixel coordinate.
    pub fn zoom_around_pixel(&mut self, pointer_x: f64, factor: f64) -> ChartResult<()> {
        if !pointer_x.is_finite() {
            return Err(ChartError::InvalidData(
                "zoom pointer position must be finite".to_owned(),
            ));
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }

        let next_scale = self.scale * factor;
        self.offset_x = pointer_x - (pointer_x - self.offset_x) * (next_scale / self.scale);
        self.scale = next_scale;
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Maps a wheel delta sign to the zoom factor: scrolling down zooms out,
/// anything else zooms in.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 {
        WHEEL_ZOOM_OUT_FACTOR
    } else {
        WHEEL_ZOOM_IN_FACTOR
    }
}

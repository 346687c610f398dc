use crate::core::{DerivedBounds, ViewTransform, Viewport};
use crate::error::{ChartError, ChartResult};

/// Maps domain values (time, price) to pixel coordinates for one frame.
///
/// Time maps into `[padding, width - padding]` and the whole interpolated
/// coordinate is then scaled and offset by the view transform. Price maps
/// into `[height - padding, padding]` (higher price, smaller y) and is not
/// affected by pan/zoom; only the time axis is interactive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: DerivedBounds,
    transform: ViewTransform,
    viewport: Viewport,
    padding: f64,
}

impl CoordinateMapper {
    pub fn new(
        bounds: DerivedBounds,
        transform: ViewTransform,
        viewport: Viewport,
        padding: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "mapper padding must be finite and >= 0".to_owned(),
            ));
        }
        if padding * 2.0 >= f64::from(viewport.width) || padding * 2.0 >= f64::from(viewport.height)
        {
            return Err(ChartError::InvalidData(
                "mapper padding must leave a non-empty plot area".to_owned(),
            ));
        }

        Ok(Self {
            bounds,
            transform,
            viewport,
            padding,
        })
    }

    #[must_use]
    pub fn time_to_x(&self, time: f64) -> f64 {
        let normalized = (time - self.bounds.min_time) / self.bounds.time_span();
        let base = self.padding + normalized * self.plot_width();
        base * self.transform.scale() + self.transform.offset_x()
    }

    #[must_use]
    pub fn x_to_time(&self, x: f64) -> f64 {
        let base = (x - self.transform.offset_x()) / self.transform.scale();
        let normalized = (base - self.padding) / self.plot_width();
        self.bounds.min_time + normalized * self.bounds.time_span()
    }

    #[must_use]
    pub fn price_to_y(&self, price: f64) -> f64 {
        let normalized = (price - self.bounds.min_price) / self.bounds.price_span();
        f64::from(self.viewport.height) - self.padding - normalized * self.plot_height()
    }

    #[must_use]
    pub fn y_to_price(&self, y: f64) -> f64 {
        let normalized = (f64::from(self.viewport.height) - self.padding - y) / self.plot_height();
        self.bounds.min_price + normalized * self.bounds.price_span()
    }

    #[must_use]
    pub fn bounds(&self) -> DerivedBounds {
        self.bounds
    }

    #[must_use]
    pub fn plot_left(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn plot_right(&self) -> f64 {
        f64::from(self.viewport.width) - self.padding
    }

    #[must_use]
    pub fn plot_top(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn plot_bottom(&self) -> f64 {
        f64::from(self.viewport.height) - self.padding
    }

    fn plot_width(&self) -> f64 {
        f64::from(self.viewport.width) - 2.0 * self.padding
    }

    fn plot_height(&self) -> f64 {
        f64::from(self.viewport.height) - 2.0 * self.padding
    }
}

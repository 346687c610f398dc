pub mod bounds;
pub mod candle;
pub mod mapper;
pub mod series;
pub mod transform;
pub mod types;

pub use bounds::{DerivedBounds, PRICE_PADDING_RATIO};
pub use candle::Candle;
pub use mapper::CoordinateMapper;
pub use series::{IndicatorSeries, SeriesPoint};
pub use transform::{
    ViewTransform, WHEEL_ZOOM_IN_FACTOR, WHEEL_ZOOM_OUT_FACTOR, wheel_zoom_factor,
};
pub use types::Viewport;

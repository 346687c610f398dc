use serde::{Deserialize, Serialize};

use crate::core::Candle;

/// Outward expansion applied to the raw price range on each side, leaving
/// visual headroom above and below the candles.
pub const PRICE_PADDING_RATIO: f64 = 0.05;

/// Fallback spans used when the fitted range is degenerate (single candle,
/// flat series), so coordinate mapping never divides by zero.
pub const DEFAULT_TIME_SPAN: f64 = 1.0;
pub const DEFAULT_PRICE_SPAN: f64 = 1.0;

/// Price/time envelope of the dataset plus the tracked last close.
///
/// Recomputed from the current dataset on every frame build; never cached
/// across renders.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedBounds {
    pub min_price: f64,
    pub max_price: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub last_price: f64,
}

impl DerivedBounds {
    /// Fits bounds from the candle dataset.
    ///
    /// `min_price`/`max_price` envelope every low/high and are expanded
    /// outward by [`PRICE_PADDING_RATIO`] of the raw range on each side.
    /// `last_price` is the close of the last candle in array order; callers
    /// must supply time-sorted data for it to be the latest close.
    ///
    /// Returns `None` for an empty dataset so rendering can skip silently.
    #[must_use]
    pub fn from_candles(candles: &[Candle]) -> Option<Self> {
        let first = candles.first()?;

        let mut min_price = first.low;
        let mut max_price = first.high;
        let mut min_time = first.time;
        let mut max_time = first.time;

        for candle in candles {
            min_price = min_price.min(candle.low);
            max_price = max_price.max(candle.high);
            min_time = min_time.min(candle.time);
            max_time = max_time.max(candle.time);
        }

        let price_range = max_price - min_price;
        min_price -= price_range * PRICE_PADDING_RATIO;
        max_price += price_range * PRICE_PADDING_RATIO;

        let (min_price, max_price) = normalize_span(min_price, max_price, DEFAULT_PRICE_SPAN);
        let (min_time, max_time) = normalize_span(min_time, max_time, DEFAULT_TIME_SPAN);

        Some(Self {
            min_price,
            max_price,
            min_time,
            max_time,
            last_price: candles[candles.len() - 1].close,
        })
    }

    #[must_use]
    pub fn price_span(self) -> f64 {
        self.max_price - self.min_price
    }

    #[must_use]
    pub fn time_span(self) -> f64 {
        self.max_time - self.min_time
    }
}

fn normalize_span(start: f64, end: f64, min_span: f64) -> (f64, f64) {
    if start == end {
        let half = min_span / 2.0;
        return (start - half, end + half);
    }
    (start, end)
}

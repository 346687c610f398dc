use nyx_chart::core::{Candle, DerivedBounds, PRICE_PADDING_RATIO};
use proptest::prelude::*;

fn candle(time: f64, open: f64, high: f64, low: f64, close: f64) -> Candle {
    Candle::new(time, open, high, low, close).expect("test candle should validate")
}

#[test]
fn empty_dataset_yields_no_bounds() {
    assert!(DerivedBounds::from_candles(&[]).is_none());
}

#[test]
fn bounds_envelope_is_padded_by_five_percent() {
    let candles = [
        candle(0.0, 100.0, 110.0, 95.0, 105.0),
        candle(60.0, 105.0, 120.0, 100.0, 115.0),
    ];
    let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");

    let raw_range = 120.0 - 95.0;
    assert!((bounds.min_price - (95.0 - raw_range * PRICE_PADDING_RATIO)).abs() <= 1e-9);
    assert!((bounds.max_price - (120.0 + raw_range * PRICE_PADDING_RATIO)).abs() <= 1e-9);
    assert!((bounds.min_time - 0.0).abs() <= 1e-9);
    assert!((bounds.max_time - 60.0).abs() <= 1e-9);
}

#[test]
fn last_price_follows_array_order_not_time_order() {
    let candles = [
        candle(60.0, 105.0, 120.0, 100.0, 115.0),
        candle(0.0, 100.0, 110.0, 95.0, 105.0),
    ];
    let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");

    assert!((bounds.last_price - 105.0).abs() <= 1e-9);
}

#[test]
fn single_candle_gets_non_degenerate_spans() {
    let candles = [candle(100.0, 50.0, 50.0, 50.0, 50.0)];
    let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");

    assert!(bounds.price_span() > 0.0);
    assert!(bounds.time_span() > 0.0);
    // Expansion is symmetric around the flat values.
    assert!((bounds.min_time + bounds.max_time - 200.0).abs() <= 1e-9);
    assert!((bounds.min_price + bounds.max_price - 100.0).abs() <= 1e-9);
}

#[test]
fn flat_price_series_still_maps() {
    let candles = [
        candle(0.0, 10.0, 10.0, 10.0, 10.0),
        candle(60.0, 10.0, 10.0, 10.0, 10.0),
    ];
    let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");

    assert!(bounds.price_span() > 0.0);
    assert!((bounds.time_span() - 60.0).abs() <= 1e-9);
}

proptest! {
    #[test]
    fn bounds_always_envelope_every_candle(
        raw in proptest::collection::vec((0.0_f64..1e6, 1.0_f64..1e4, 0.0_f64..100.0), 1..64)
    ) {
        let candles: Vec<Candle> = raw
            .iter()
            .map(|&(time, base, spread)| {
                candle(time, base, base + spread, base - spread, base + spread / 2.0)
            })
            .collect();

        let bounds = DerivedBounds::from_candles(&candles).expect("dataset is non-empty");

        for candle in &candles {
            prop_assert!(bounds.min_price <= candle.low);
            prop_assert!(bounds.max_price >= candle.high);
            prop_assert!(bounds.min_time <= candle.time);
            prop_assert!(bounds.max_time >= candle.time);
        }
        prop_assert!(bounds.price_span() > 0.0);
        prop_assert!(bounds.time_span() > 0.0);
    }
}

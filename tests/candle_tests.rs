use chrono::{TimeZone, Utc};
use nyx_chart::core::Candle;
use rust_decimal::Decimal;

#[test]
fn candle_new_accepts_well_formed_bar() {
    let candle = Candle::new(1_700_000_000.0, 101.0, 105.0, 99.5, 104.0)
        .expect("well-formed candle should validate");

    assert!(candle.is_bullish());
    assert!((candle.high - 105.0).abs() <= 1e-12);
}

#[test]
fn candle_new_rejects_low_above_high() {
    let result = Candle::new(0.0, 100.0, 99.0, 101.0, 100.0);
    assert!(result.is_err());
}

#[test]
fn candle_new_rejects_open_outside_range() {
    let result = Candle::new(0.0, 200.0, 105.0, 99.0, 100.0);
    assert!(result.is_err());
}

#[test]
fn candle_new_rejects_close_outside_range() {
    let result = Candle::new(0.0, 100.0, 105.0, 99.0, 10.0);
    assert!(result.is_err());
}

#[test]
fn candle_new_rejects_non_finite_values() {
    assert!(Candle::new(f64::NAN, 1.0, 2.0, 0.5, 1.5).is_err());
    assert!(Candle::new(0.0, 1.0, f64::INFINITY, 0.5, 1.5).is_err());
}

#[test]
fn flat_candle_is_bullish() {
    let candle = Candle::new(0.0, 100.0, 100.0, 100.0, 100.0).expect("doji should validate");
    assert!(candle.is_bullish());
}

#[test]
fn bearish_candle_detected() {
    let candle = Candle::new(0.0, 104.0, 105.0, 99.0, 100.0).expect("candle should validate");
    assert!(!candle.is_bullish());
}

#[test]
fn from_decimal_time_converts_fields() {
    let time = Utc
        .with_ymd_and_hms(2024, 3, 1, 12, 30, 15)
        .single()
        .expect("timestamp should be unambiguous");

    let candle = Candle::from_decimal_time(
        time,
        Decimal::new(10150, 2),
        Decimal::new(10325, 2),
        Decimal::new(10050, 2),
        Decimal::new(10275, 2),
    )
    .expect("decimal candle should validate");

    assert!((candle.time - time.timestamp() as f64).abs() <= 1e-9);
    assert!((candle.open - 101.50).abs() <= 1e-9);
    assert!((candle.high - 103.25).abs() <= 1e-9);
    assert!((candle.low - 100.50).abs() <= 1e-9);
    assert!((candle.close - 102.75).abs() <= 1e-9);
}

//! Builds a frame for a synthetic dataset without any graphics stack and
//! dumps draw statistics plus the JSON snapshot to stdout.
//!
//! Run with: `cargo run --example headless_frame_dump`

use nyx_chart::core::{Candle, IndicatorSeries, SeriesPoint, Viewport};
use nyx_chart::render::NullRenderer;
use nyx_chart::{ChartEngine, ChartEngineConfig, ChartResult};

fn main() -> ChartResult<()> {
    let _ = nyx_chart::telemetry::init_default_tracing();

    let config = ChartEngineConfig::new(Viewport::new(1024, 640));
    let mut engine = ChartEngine::new(NullRenderer::new(), config)?;

    let candles = synthetic_candles(240)?;
    let sma = moving_average(&candles, 20);
    engine.set_candles(candles);
    engine.set_overlays(vec![
        IndicatorSeries::new("sma-20", sma).with_line_width(1.5),
    ]);

    engine.render()?;

    let renderer = engine.renderer();
    println!(
        "rendered frame: {} lines, {} rects, {} texts",
        renderer.last_line_count(),
        renderer.last_rect_count(),
        renderer.last_text_count(),
    );
    println!("{}", engine.frame_snapshot_json_pretty()?);
    Ok(())
}

fn synthetic_candles(count: usize) -> ChartResult<Vec<Candle>> {
    let mut candles = Vec::with_capacity(count);
    let mut price = 120.0;

    for i in 0..count {
        let t = i as f64 * 60.0;
        let drift = ((i as f64) * 0.37).sin() * 2.0;
        let open = price;
        let close = price + drift;
        let high = open.max(close) + 0.8;
        let low = open.min(close) - 0.8;
        candles.push(Candle::new(t, open, high, low, close)?);
        price = close;
    }
    Ok(candles)
}

fn moving_average(candles: &[Candle], window: usize) -> Vec<SeriesPoint> {
    candles
        .windows(window)
        .map(|slice| {
            let mean = slice.iter().map(|c| c.close).sum::<f64>() / window as f64;
            SeriesPoint::new(slice[window - 1].time, mean)
        })
        .collect()
}

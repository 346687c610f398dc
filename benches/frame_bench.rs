use criterion::{Criterion, criterion_group, criterion_main};
use nyx_chart::core::{Candle, Viewport};
use nyx_chart::render::NullRenderer;
use nyx_chart::{ChartEngine, ChartEngineConfig};
use std::hint::black_box;

fn synthetic_candles(count: usize) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 60.0;
            let base = 100.0 + (i as f64) * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            Candle::new(t, open, high, low, close).expect("valid generated candle")
        })
        .collect()
}

fn bench_frame_build_10k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = ChartEngine::new(NullRenderer::new(), config).expect("engine init");
    engine.set_candles(synthetic_candles(10_000));

    c.bench_function("frame_build_10k", |b| {
        b.iter(|| {
            let frame = black_box(&engine)
                .build_render_frame()
                .expect("frame build should succeed");
            black_box(frame.line_count());
        })
    });
}

fn bench_mapper_round_trip(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = ChartEngine::new(NullRenderer::new(), config).expect("engine init");
    engine.set_candles(synthetic_candles(512));

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let x = engine
                .time_to_pixel(black_box(4_321.0))
                .expect("to pixel should succeed");
            let _ = engine.pixel_to_time(x).expect("from pixel should succeed");
        })
    });
}

fn bench_snapshot_json_2k(c: &mut Criterion) {
    let config = ChartEngineConfig::new(Viewport::new(1600, 900));
    let mut engine = ChartEngine::new(NullRenderer::new(), config).expect("engine init");
    engine.set_candles(synthetic_candles(2_000));

    c.bench_function("snapshot_json_2k", |b| {
        b.iter(|| {
            let _ = engine
                .frame_snapshot_json_pretty()
                .expect("snapshot json should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_frame_build_10k,
    bench_mapper_round_trip,
    bench_snapshot_json_2k
);
criterion_main!(benches);

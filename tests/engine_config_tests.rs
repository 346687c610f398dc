use nyx_chart::core::Viewport;
use nyx_chart::render::{Color, NullRenderer};
use nyx_chart::{ChartEngine, ChartEngineConfig, ChartStyle};

#[test]
fn engine_rejects_zero_sized_viewport() {
    let config = ChartEngineConfig::new(Viewport::new(0, 600));
    assert!(ChartEngine::new(NullRenderer::new(), config).is_err());
}

#[test]
fn engine_rejects_viewport_smaller_than_the_padding() {
    let config = ChartEngineConfig::new(Viewport::new(80, 600));
    assert!(ChartEngine::new(NullRenderer::new(), config).is_err());
}

#[test]
fn resize_validates_the_new_viewport() {
    let config = ChartEngineConfig::new(Viewport::new(800, 600));
    let mut engine =
        ChartEngine::new(NullRenderer::new(), config).expect("engine construction should succeed");

    engine.resize(1024, 768).expect("resize should succeed");
    assert_eq!(engine.viewport(), Viewport::new(1024, 768));

    assert!(engine.resize(0, 768).is_err());
    assert!(engine.resize(1024, 60).is_err());
    // A failed resize keeps the previous viewport.
    assert_eq!(engine.viewport(), Viewport::new(1024, 768));
}

#[test]
fn default_style_uses_the_dark_theme() {
    let style = ChartStyle::default();

    assert_eq!(style.padding_px, 40.0);
    assert_eq!(style.grid_steps, 6);
    assert_eq!(style.background_color, Color::from_rgb8(0x13, 0x17, 0x22));
    assert_eq!(style.bullish_color, Color::from_rgb8(0x26, 0xa6, 0x9a));
    assert_eq!(style.bearish_color, Color::from_rgb8(0xef, 0x53, 0x50));
    assert_eq!(style.tracker_color, Color::from_rgb8(0xff, 0xd7, 0x00));
}

#[test]
fn style_validation_rejects_bad_values() {
    let mut style = ChartStyle::default();
    style.grid_steps = 0;
    assert!(style.validate().is_err());

    let mut style = ChartStyle::default();
    style.padding_px = -1.0;
    assert!(style.validate().is_err());

    let mut style = ChartStyle::default();
    style.candle_body_width_px = 0.0;
    assert!(style.validate().is_err());

    let mut style = ChartStyle::default();
    style.grid_color = Color::rgba(1.0, 1.0, 1.0, 1.5);
    assert!(style.validate().is_err());
}

#[test]
fn set_style_rejects_padding_that_consumes_the_viewport() {
    let config = ChartEngineConfig::new(Viewport::new(800, 600));
    let mut engine =
        ChartEngine::new(NullRenderer::new(), config).expect("engine construction should succeed");

    let mut style = ChartStyle::default();
    style.padding_px = 300.0;
    assert!(engine.set_style(style).is_err());
    // The engine keeps its previous style on rejection.
    assert_eq!(engine.style().padding_px, 40.0);
}

#[test]
fn color_from_rgb8_normalizes_channels() {
    let color = Color::from_rgb8(255, 0, 51);
    assert!((color.red - 1.0).abs() <= 1e-12);
    assert!((color.green - 0.0).abs() <= 1e-12);
    assert!((color.blue - 0.2).abs() <= 1e-12);
    assert!((color.alpha - 1.0).abs() <= 1e-12);
}

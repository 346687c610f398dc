//! Interactive desktop demo: a candlestick chart with a moving-average
//! overlay inside a GTK4 window. Drag to pan, scroll to zoom, press the
//! button to reset the view.
//!
//! Run with: `cargo run --example gtk_candlestick_demo --features desktop`

use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use nyx_chart::core::{Candle, IndicatorSeries, SeriesPoint, Viewport};
use nyx_chart::platform_gtk::GtkChartAdapter;
use nyx_chart::render::CairoRenderer;
use nyx_chart::{ChartEngine, ChartEngineConfig};

fn main() {
    let _ = nyx_chart::telemetry::init_default_tracing();

    let app = gtk::Application::builder()
        .application_id("rs.nyx_chart.examples.gtk_candlestick_demo")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let engine = match build_engine() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("failed to initialize chart engine: {err}");
            return;
        }
    };

    let adapter = Rc::new(GtkChartAdapter::new(engine));

    let reset_button = gtk::Button::with_label("Reset View");
    {
        let adapter = Rc::clone(&adapter);
        reset_button.connect_clicked(move |_| {
            adapter.reset_view();
        });
    }

    let controls = gtk::Box::new(gtk::Orientation::Horizontal, 8);
    controls.append(&reset_button);

    let instructions = gtk::Label::new(Some("Mouse: drag=Pan | wheel=Zoom around pointer"));
    instructions.set_xalign(0.0);

    let root = gtk::Box::new(gtk::Orientation::Vertical, 6);
    root.set_margin_top(10);
    root.set_margin_bottom(10);
    root.set_margin_start(10);
    root.set_margin_end(10);
    root.append(&instructions);
    root.append(&controls);
    root.append(adapter.drawing_area());

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("nyx-chart GTK Demo")
        .default_width(1280)
        .default_height(800)
        .build();
    window.set_child(Some(&root));
    window.present();
}

fn build_engine() -> nyx_chart::ChartResult<ChartEngine<CairoRenderer>> {
    let renderer = CairoRenderer::new(1280, 800)?;
    let config = ChartEngineConfig::new(Viewport::new(1280, 800));
    let mut engine = ChartEngine::new(renderer, config)?;

    let candles = synthetic_candles(360)?;
    let sma = moving_average(&candles, 20);
    engine.set_candles(candles);
    engine.set_overlays(vec![
        IndicatorSeries::new("sma-20", sma).with_line_width(1.5),
    ]);
    Ok(engine)
}

fn synthetic_candles(count: usize) -> nyx_chart::ChartResult<Vec<Candle>> {
    let mut candles = Vec::with_capacity(count);
    let mut price = 120.0;

    for i in 0..count {
        let t = 1_700_000_000.0 + i as f64 * 60.0;
        let drift = ((i as f64) * 0.37).sin() * 2.0 + ((i as f64) * 0.05).cos();
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

//! nyx-chart: interactive candlestick chart engine.
//!
//! The crate keeps a strict split between chart domain state (candles,
//! derived bounds, view transform), deterministic frame building, and
//! pluggable renderer backends, so the same engine drives headless tests
//! and desktop embedding.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEngine, ChartEngineConfig, ChartStyle};
pub use error::{ChartError, ChartResult};

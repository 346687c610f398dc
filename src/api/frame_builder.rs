use chrono::{DateTime, Utc};

use crate::api::ChartEngine;
use crate::core::CoordinateMapper;
use crate::error::ChartResult;
use crate::render::{
    LayerKind, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

impl<R: Renderer> ChartEngine<R> {
    /// Builds the backend-agnostic frame for the current dataset, style and
    /// view transform.
    ///
    /// Fails when the dataset is empty; `render` guards that case and turns
    /// it into a no-op instead.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let mapper = self.mapper()?;
        let mut frame = RenderFrame::new(self.viewport, self.style.background_color)?;

        self.push_grid(&mut frame, &mapper);
        self.push_price_labels(&mut frame, &mapper);
        self.push_time_labels(&mut frame, &mapper);
        self.push_candles(&mut frame, &mapper);
        self.push_price_tracker(&mut frame, &mapper);
        self.push_overlays(&mut frame, &mapper);

        frame.validate()?;
        Ok(frame)
    }

    /// Static grid over the plot area: `grid_steps + 1` vertical and
    /// horizontal lines at even fractions. The grid does not pan or zoom.
    fn push_grid(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let steps = self.style.grid_steps;
        let left = mapper.plot_left();
        let right = mapper.plot_right();
        let top = mapper.plot_top();
        let bottom = mapper.plot_bottom();

        for i in 0..=steps {
            let fraction = f64::from(i) / f64::from(steps);

            let x = left + fraction * (right - left);
            frame.push_line(
                LayerKind::Grid,
                LinePrimitive::new(
                    x,
                    top,
                    x,
                    bottom,
                    self.style.grid_line_width_px,
                    self.style.grid_color,
                ),
            );

            let y = top + fraction * (bottom - top);
            frame.push_line(
                LayerKind::Grid,
                LinePrimitive::new(
                    left,
                    y,
                    right,
                    y,
                    self.style.grid_line_width_px,
                    self.style.grid_color,
                ),
            );
        }
    }

    /// Price labels on the left edge, one per horizontal grid line, right
    /// aligned just inside the padding.
    fn push_price_labels(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let steps = self.style.grid_steps;
        let bounds = mapper.bounds();

        for i in 0..=steps {
            let fraction = f64::from(i) / f64::from(steps);
            let price = bounds.min_price + fraction * bounds.price_span();
            let y = mapper.price_to_y(price);

            frame.push_text(
                LayerKind::Axis,
                TextPrimitive::new(
                    format!("{price:.2}"),
                    self.style.padding_px - 5.0,
                    y + 4.0,
                    self.style.axis_font_size_px,
                    self.style.text_color,
                    TextHAlign::Right,
                ),
            );
        }
    }

    /// Time labels under the plot, sampled evenly across the dataset by
    /// index. Label x follows the view transform, so labels pan and zoom
    /// with the candles.
    fn push_time_labels(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let steps = self.style.grid_steps;
        let last_index = self.candles.len() - 1;
        let y = f64::from(self.viewport.height) - self.style.padding_px + 15.0;

        for i in 0..=steps {
            let fraction = f64::from(i) / f64::from(steps);
            let index = (fraction * last_index as f64).floor() as usize;
            let time = self.candles[index].time;
            let x = mapper.time_to_x(time);

            let label = match &self.time_label_formatter {
                Some(formatter) => formatter(time),
                None => default_time_label(time),
            };
            frame.push_text(
                LayerKind::Axis,
                TextPrimitive::new(
                    label,
                    x,
                    y,
                    self.style.axis_font_size_px,
                    self.style.text_color,
                    TextHAlign::Center,
                ),
            );
        }
    }

    /// One wick line plus one body rect per candle, colored by direction.
    /// A doji (open == close) keeps its zero-height body rect.
    fn push_candles(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        for candle in &self.candles {
            let x = mapper.time_to_x(candle.time);
            let color = if candle.is_bullish() {
                self.style.bullish_color
            } else {
                self.style.bearish_color
            };

            frame.push_line(
                LayerKind::Series,
                LinePrimitive::new(
                    x,
                    mapper.price_to_y(candle.high),
                    x,
                    mapper.price_to_y(candle.low),
                    self.style.candle_wick_width_px,
                    color,
                ),
            );

            let y_open = mapper.price_to_y(candle.open);
            let y_close = mapper.price_to_y(candle.close);
            frame.push_rect(
                LayerKind::Series,
                RectPrimitive::new(
                    x - self.style.candle_body_width_px / 2.0,
                    y_open.min(y_close),
                    self.style.candle_body_width_px,
                    (y_open - y_close).abs(),
                    color,
                ),
            );
        }
    }

    /// Dashed horizontal line at the most recent close, with a label box on
    /// the right edge showing the price in the background color.
    fn push_price_tracker(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        let last_price = mapper.bounds().last_price;
        let y = mapper.price_to_y(last_price);
        let right = mapper.plot_right();

        frame.push_line(
            LayerKind::PriceTracker,
            LinePrimitive::new(
                mapper.plot_left(),
                y,
                right,
                y,
                self.style.tracker_line_width_px,
                self.style.tracker_color,
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );

        let box_x = right + 5.0;
        frame.push_rect(
            LayerKind::PriceTracker,
            RectPrimitive::new(
                box_x,
                y - self.style.tracker_label_height_px / 2.0,
                self.style.tracker_label_width_px,
                self.style.tracker_label_height_px,
                self.style.tracker_color,
            ),
        );
        frame.push_text(
            LayerKind::PriceTracker,
            TextPrimitive::new(
                format!("{last_price:.2}"),
                box_x + self.style.tracker_label_width_px / 2.0,
                y + 5.0,
                self.style.axis_font_size_px,
                self.style.background_color,
                TextHAlign::Center,
            ),
        );
    }

    /// Indicator polylines above the candles, one segment per consecutive
    /// point pair. Series with fewer than two points draw nothing.
    fn push_overlays(&self, frame: &mut RenderFrame, mapper: &CoordinateMapper) {
        for series in &self.overlays {
            let color = series.color.unwrap_or(self.style.default_overlay_color);
            let width = series
                .line_width
                .unwrap_or(self.style.default_overlay_width_px);
            let stroke_style = if series.dashed {
                LineStrokeStyle::Dashed
            } else {
                LineStrokeStyle::Solid
            };

            for pair in series.data.windows(2) {
                frame.push_line(
                    LayerKind::Overlay,
                    LinePrimitive::new(
                        mapper.time_to_x(pair[0].time),
                        mapper.price_to_y(pair[0].value),
                        mapper.time_to_x(pair[1].time),
                        mapper.price_to_y(pair[1].value),
                        width,
                        color,
                    )
                    .with_stroke_style(stroke_style),
                );
            }
        }
    }
}

/// Default time axis label: the timestamp rendered as UTC `HH:MM:SS`.
fn default_time_label(time: f64) -> String {
    let secs = time.floor() as i64;
    let nanos = ((time - secs as f64) * 1e9) as u32;
    DateTime::<Utc>::from_timestamp(secs, nanos)
        .map(|datetime| datetime.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| format!("{time:.0}"))
}

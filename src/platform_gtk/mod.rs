use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::core::{Candle, IndicatorSeries};
use crate::render::{CairoContextRenderer, Renderer};

/// Hosts a `ChartEngine` inside a GTK4 `DrawingArea`.
///
/// The adapter owns the event wiring: draw callbacks render through the
/// engine's Cairo path, click gestures drive pan mode, motion drives pan
/// deltas and scroll drives anchored zoom. The engine stays reachable via
/// `engine()` for hosts that add their own controls.
pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    engine: Rc<RefCell<ChartEngine<R>>>,
    drawing_area: gtk::DrawingArea,
    click_gesture: gtk::GestureClick,
    motion_controller: gtk::EventControllerMotion,
    scroll_controller: gtk::EventControllerScroll,
    detached: Cell<bool>,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        let engine = Rc::new(RefCell::new(engine));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);

        // Last observed pointer x, shared between motion (pan deltas) and
        // scroll (zoom anchor).
        let pointer_x = Rc::new(Cell::new(0.0_f64));

        {
            let engine = Rc::clone(&engine);
            drawing_area.set_draw_func(move |_, context, width, height| {
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                if width <= 0 || height <= 0 {
                    return;
                }
                if let Err(err) = chart.resize(width as u32, height as u32) {
                    warn!(error = %err, "draw skipped: resize rejected");
                    return;
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "draw failed");
                }
            });
        }

        let click_gesture = gtk::GestureClick::new();
        {
            let engine = Rc::clone(&engine);
            click_gesture.connect_pressed(move |_, _, _, _| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_press();
                }
            });
        }
        {
            let engine = Rc::clone(&engine);
            click_gesture.connect_released(move |_, _, _, _| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_release();
                }
            });
        }
        drawing_area.add_controller(click_gesture.clone());

        let motion_controller = gtk::EventControllerMotion::new();
        {
            let pointer_x = Rc::clone(&pointer_x);
            motion_controller.connect_enter(move |_, x, _| {
                pointer_x.set(x);
            });
        }
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            let pointer_x = Rc::clone(&pointer_x);
            motion_controller.connect_motion(move |_, x, _| {
                let movement_dx = x - pointer_x.replace(x);
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                match chart.pointer_move(movement_dx) {
                    Ok(true) => drawing_area.queue_draw(),
                    Ok(false) => {}
                    Err(err) => warn!(error = %err, "pointer move rejected"),
                }
            });
        }
        drawing_area.add_controller(motion_controller.clone());

        let scroll_controller =
            gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
        {
            let engine = Rc::clone(&engine);
            let drawing_area = drawing_area.clone();
            let pointer_x = Rc::clone(&pointer_x);
            scroll_controller.connect_scroll(move |_, _, delta_y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    match chart.wheel_zoom(delta_y, pointer_x.get()) {
                        Ok(_) => drawing_area.queue_draw(),
                        Err(err) => warn!(error = %err, "wheel zoom rejected"),
                    }
                }
                gtk::glib::Propagation::Stop
            });
        }
        drawing_area.add_controller(scroll_controller.clone());

        Self {
            engine,
            drawing_area,
            click_gesture,
            motion_controller,
            scroll_controller,
            detached: Cell::new(false),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ChartEngine<R>>> {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    pub fn set_candles(&self, candles: Vec<Candle>) {
        if let Ok(mut chart) = self.engine.try_borrow_mut() {
            chart.set_candles(candles);
        }
        self.drawing_area.queue_draw();
    }

    pub fn set_overlays(&self, overlays: Vec<IndicatorSeries>) {
        if let Ok(mut chart) = self.engine.try_borrow_mut() {
            chart.set_overlays(overlays);
        }
        self.drawing_area.queue_draw();
    }

    pub fn reset_view(&self) {
        if let Ok(mut chart) = self.engine.try_borrow_mut() {
            chart.reset_view();
        }
        self.drawing_area.queue_draw();
    }

    /// Removes the adapter's event controllers from the drawing area. Safe
    /// to call more than once.
    pub fn detach(&self) {
        if self.detached.replace(true) {
            return;
        }
        self.drawing_area
            .remove_controller(&self.click_gesture);
        self.drawing_area
            .remove_controller(&self.motion_controller);
        self.drawing_area
            .remove_controller(&self.scroll_controller);
    }
}

impl<R> Drop for GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    fn drop(&mut self) {
        self.detach();
    }
}

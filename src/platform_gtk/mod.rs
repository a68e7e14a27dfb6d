use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{LineChartEngine, ResizableContainer};
use crate::core::BoxSize;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedEngine<R> = Rc<RefCell<LineChartEngine<R>>>;

/// Hosts a chart in a `DrawingArea`.
///
/// The frame clock drives `advance_to`, widget resizes feed the debounced
/// rebuild, and every frame is drawn through the engine's cairo path.
pub struct GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    drawing_area: gtk::DrawingArea,
    engine: SharedEngine<R>,
}

impl<R> GtkChartAdapter<R>
where
    R: Renderer + CairoContextRenderer + 'static,
{
    /// `container` must be a clone of the handle the engine was built with.
    #[must_use]
    pub fn new(engine: LineChartEngine<R>, container: ResizableContainer) -> Self {
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        let engine = Rc::new(RefCell::new(engine));

        {
            let engine = Rc::clone(&engine);
            drawing_area.set_draw_func(move |_, context, _, _| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if let Err(err) = chart.render_on_cairo_context(context) {
                        warn!(error = %err, "chart draw failed");
                    }
                }
            });
        }

        {
            let engine = Rc::clone(&engine);
            drawing_area.connect_resize(move |_, width, height| {
                container.resize(BoxSize::new(f64::from(width), f64::from(height)));
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.notify_resize();
                }
            });
        }

        {
            let engine = Rc::clone(&engine);
            let origin_us = Rc::new(Cell::new(None::<i64>));
            drawing_area.add_tick_callback(move |area, clock| {
                let frame_us = clock.frame_time();
                let origin = origin_us.get().unwrap_or(frame_us);
                origin_us.set(Some(origin));
                let now_ms = (frame_us - origin) as f64 / 1000.0;

                if let Ok(mut chart) = engine.try_borrow_mut() {
                    if chart.is_shut_down() {
                        return gtk::glib::ControlFlow::Break;
                    }
                    if let Err(err) = chart.advance_to(now_ms) {
                        warn!(error = %err, now_ms, "chart clock advance failed");
                    }
                }
                area.queue_draw();
                gtk::glib::ControlFlow::Continue
            });
        }

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Shared handle for host code driving reveals, labels and rescales.
    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }
}

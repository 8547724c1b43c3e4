// web.rs - Browser bootstrap
//
// Grabs the canvas, seeds the noise from Math.random and drives the
// simulation from requestAnimationFrame, drawing straight onto the 2D
// context. The loop lives as long as the page.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::Config;
use crate::math::Point;
use crate::noise::seed_from_entropy;
use crate::render::{Color, Surface};
use crate::sim::{FrameClock, Simulation};

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn paint(&self, stroke: Option<Color>, fill: Option<Color>) {
        if let Some(c) = fill {
            self.ctx.set_fill_style_str(&c.css());
            self.ctx.fill();
        }
        if let Some(c) = stroke {
            self.ctx.set_stroke_style_str(&c.css());
            self.ctx.stroke();
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn line(&mut self, from: Point, to: Point, color: Color, width: f32, opacity: f32) {
        let c = &self.ctx;
        c.set_global_alpha(opacity as f64);
        c.set_line_width(width as f64);
        c.begin_path();
        c.move_to(from.x as f64, from.y as f64);
        c.line_to(to.x as f64, to.y as f64);
        self.paint(Some(color), None);
    }

    fn circle(&mut self, center: Point, radius: f32, stroke: Option<Color>, fill: Option<Color>, opacity: f32) {
        let c = &self.ctx;
        c.set_global_alpha(opacity as f64);
        c.set_line_width(1.0);
        c.begin_path();
        if c.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU).is_err() {
            return;
        }
        self.paint(stroke, fill);
    }

    fn polygon(&mut self, points: &[Point], stroke: Option<Color>, fill: Option<Color>, width: f32, opacity: f32) {
        let Some((first, rest)) = points.split_first() else { return };
        let c = &self.ctx;
        c.set_global_alpha(opacity as f64);
        c.set_line_width(width as f64);
        c.begin_path();
        c.move_to(first.x as f64, first.y as f64);
        for p in rest {
            c.line_to(p.x as f64, p.y as f64);
        }
        c.close_path();
        self.paint(stroke, fill);
    }
}

/// Start the animation on the canvas with id `canvas_id`
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    // Redirect panic messages to console.error
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{}", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let config = Config::default();
    let seed = seed_from_entropy(js_sys::Math::random());
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    log::info!("rain on #{} ({}x{}), seed {:#010x}", canvas_id, w, h, seed);

    let mut view = Simulation::initial_view(&config);
    let mut clock = FrameClock::new(config.fps);
    let mut sim = Simulation::new(config, w, h, seed);
    let mut surface = CanvasSurface { ctx };

    // The callback holds a handle to itself so it can queue the next frame
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();

    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Queue first so a slow tick never delays the next callback
        if let Some(cb) = next.borrow().as_ref() {
            request_frame(cb);
        }
        if !clock.advance(js_sys::Date::now()) {
            return;
        }
        sim.tick(&mut view, &mut surface);
    }) as Box<dyn FnMut()>));

    if let Some(cb) = frame.borrow().as_ref() {
        request_frame(cb);
    }
    Ok(())
}

fn request_frame(cb: &Closure<dyn FnMut()>) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

use crate::core::{Camera, Controls, Scene};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame callback needs. Pointer and control handlers
/// mutate the shared cells between frames; `frame` only reads them.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub camera: Rc<RefCell<Camera>>,
    pub controls: Rc<RefCell<Controls>>,
    pub scene: Scene,
}

impl FrameContext {
    pub fn frame(&mut self) {
        // Backing dimensions are re-read every frame so a live resize is
        // picked up without extra plumbing.
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        let controls = *self.controls.borrow();
        self.scene.advance(controls.ring_speed);

        let camera = *self.camera.borrow();
        if let Err(e) = render::draw_scene(&self.ctx, width, height, &self.scene, &camera, &controls)
        {
            log::error!("draw error: {:?}", e);
        }
    }
}

/// Drive `frame` from a self-rescheduling requestAnimationFrame closure.
/// The loop runs for the lifetime of the page; there is no cancellation
/// path.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

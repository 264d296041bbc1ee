#![cfg(target_arch = "wasm32")]
use crate::core::{Camera, Controls, GestureTracker, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod ui;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("singularity-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("2d context error: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the canvas backing store matched to the window from here on.
    wire_canvas_resize(&canvas);

    let camera = Rc::new(RefCell::new(Camera::default()));
    let controls = Rc::new(RefCell::new(Controls::default()));
    let gestures = Rc::new(RefCell::new(GestureTracker::new()));

    // The star population is generated once against startup dimensions and
    // kept for the whole session.
    let mut rng = StdRng::seed_from_u64(js_sys::Date::now() as u64);
    let scene = Scene::new(canvas.width() as f64, canvas.height() as f64, &mut rng);
    log::info!(
        "[scene] stars={} canvas={}x{}",
        scene.stars.len(),
        canvas.width(),
        canvas.height()
    );

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        gestures: gestures.clone(),
    });
    events::wire_help_toggle(&document);

    let ambient = audio::start_ambient();
    ui::wire_controls(&document, &controls, &ambient);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        camera,
        controls,
        scene,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

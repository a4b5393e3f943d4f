#![cfg(target_arch = "wasm32")]
use stadium_core::{generate_seats, OccupancyStats, StadiumConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod export;
mod input;
mod render;
mod stats_panel;

const CANVAS_ID: &str = "stadium-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stadium-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
        return Err(JsValue::from_str(&e.to_string()));
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let (w, h) = dom::sync_canvas_backing_size(&canvas);

    let config = StadiumConfig::default();
    let seats = generate_seats(&config, &mut rand::thread_rng())?;
    let stats = OccupancyStats::from_seats(&seats);
    log::info!(
        "[stats] total={} filled={} empty={} occupancy={} canvas={}x{}",
        stats.total,
        stats.filled,
        stats.empty,
        stats.rate_label(),
        w,
        h
    );
    stats_panel::update(&document, &stats);

    let view = Rc::new(RefCell::new(render::MapView::new(canvas, config, seats)?));
    view.borrow()
        .draw()
        .map_err(|e| anyhow::anyhow!("initial draw failed: {:?}", e))?;

    events::wire_input_handlers(view.clone());
    events::wire_resize(&window, view);
    Ok(())
}

/// A freshly generated seat sequence (default config) as a JSON array.
#[wasm_bindgen]
pub fn seat_data_json() -> Result<String, JsValue> {
    let seats = generate_seats(&StadiumConfig::default(), &mut rand::thread_rng())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    export::seats_to_json(&seats).map_err(|e| JsValue::from_str(&e.to_string()))
}

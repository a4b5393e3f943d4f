use std::cell::RefCell;
use std::rc::Rc;

use stadium_core::WheelDeltaMode;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom::sync_canvas_backing_size;
use crate::input::{pointer_canvas_px, DragState};
use crate::render::MapView;

fn redraw(view: &MapView) {
    if let Err(e) = view.draw() {
        log::error!("[render] draw failed: {:?}", e);
    }
}

/// Wheel zoom, drag pan and seat hover on the map canvas.
pub fn wire_input_handlers(view: Rc<RefCell<MapView>>) {
    let canvas = view.borrow().canvas().clone();
    let drag = Rc::new(RefCell::new(DragState::default()));

    // wheel
    {
        let view_w = view.clone();
        let canvas_w = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let pos = pointer_canvas_px(&ev, &canvas_w);
            let mut v = view_w.borrow_mut();
            v.transform
                .zoom_at(pos, ev.delta_y() as f32, WheelDeltaMode::from_dom(ev.delta_mode()));
            v.hover_at(Some(pos));
            redraw(&v);
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerdown
    {
        let drag_d = drag.clone();
        let canvas_d = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            let pos = pointer_canvas_px(&ev, &canvas_d);
            drag_d.borrow_mut().begin(ev.pointer_id(), pos);
            let _ = canvas_d.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let view_m = view.clone();
        let drag_m = drag.clone();
        let canvas_m = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_m);
            let mut v = view_m.borrow_mut();
            let changed = match drag_m.borrow_mut().advance(pos) {
                Some(delta) => {
                    v.transform.pan(delta.x, delta.y);
                    v.hover_at(Some(pos));
                    true
                }
                None => v.hover_at(Some(pos)),
            };
            if changed {
                redraw(&v);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointerup / pointercancel
    {
        let drag_u = drag.clone();
        let canvas_u = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag_u.borrow_mut();
            if d.active && d.pointer_id == ev.pointer_id() {
                d.end();
                let _ = canvas_u.release_pointer_capture(ev.pointer_id());
            }
        }) as Box<dyn FnMut(_)>);
        for name in ["pointerup", "pointercancel"] {
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerleave
    {
        let view_l = view.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            let mut v = view_l.borrow_mut();
            if v.hover_at(None) {
                redraw(&v);
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the backing store in step with the CSS size and refit on resize.
pub fn wire_resize(window: &web::Window, view: Rc<RefCell<MapView>>) {
    let closure = Closure::wrap(Box::new(move || {
        let mut v = view.borrow_mut();
        let (w, h) = sync_canvas_backing_size(v.canvas());
        log::debug!("[resize] canvas {}x{}", w, h);
        v.refit();
        v.hovered = None;
        redraw(&v);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

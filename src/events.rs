//! Pointer drag wiring for repositioning the mic and speakers.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::Scene;
use crate::core::Target;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub target: Option<Target>,
    pub grab_offset: Vec2,
}

#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub redraw: Rc<dyn Fn()>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    // pointerdown: grab the entity under the cursor, keeping the offset so
    // the icon does not jump to the pointer.
    {
        let canvas_down = w.canvas.clone();
        let scene_down = w.scene.clone();
        let drag_down = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = pointer_canvas_px(&ev, &canvas_down);
            let hit = scene_down.borrow().hit_test(pos);
            if let Some(target) = hit {
                let origin = scene_down.borrow().target_position(target).unwrap_or(pos);
                {
                    let mut ds = drag_down.borrow_mut();
                    ds.target = Some(target);
                    ds.grab_offset = pos - origin;
                }
                let _ = canvas_down.set_pointer_capture(ev.pointer_id());
                log::info!("[pointer] begin drag on {:?}", target);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: reposition the grabbed entity and repaint.
    {
        let canvas_move = w.canvas.clone();
        let scene_move = w.scene.clone();
        let drag_move = drag.clone();
        let redraw_move = w.redraw.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let ds = *drag_move.borrow();
            let Some(target) = ds.target else { return };
            let pos = pointer_canvas_px(&ev, &canvas_move) - ds.grab_offset;
            scene_move.borrow_mut().set_target_position(target, pos);
            redraw_move();
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup: release.
    {
        let drag_up = drag.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag_up.borrow_mut().target = None;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

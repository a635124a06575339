#![cfg(target_arch = "wasm32")]
//! Browser entry point: looks up the venue canvas and the placement
//! controls, wires every control to the scene model and repaints the canvas
//! after each mutation. All simulation logic lives in [`core`], which stays
//! platform-free and is tested host-side.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod core;
mod dom;
mod events;

use crate::core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::core::{judge, render, Assets, PatternKind, Scene};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("soundcheck starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn make_redraw(
    ctx: web::CanvasRenderingContext2d,
    scene: Rc<RefCell<Scene>>,
    icons: Rc<Assets>,
) -> Rc<dyn Fn()> {
    Rc::new(move || {
        let Some(pm) = render::render(&scene.borrow(), &icons) else {
            log::error!("[render] pixmap allocation failed");
            return;
        };
        let data = render::demultiplied_rgba(&pm);
        match web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(data.as_slice()),
            pm.width(),
            pm.height(),
        ) {
            Ok(img) => {
                let _ = ctx.put_image_data(&img, 0.0, 0.0);
            }
            Err(e) => log::error!("[render] ImageData: {:?}", e),
        }
    })
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("venue-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #venue-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Icons are awaited before the first paint, so the initial scene is
    // already complete. A failed fetch degrades to icon-less rendering.
    let loaded = assets::load(&window).await;
    let icons = Rc::new(loaded.icons);
    let alert = loaded.alert;

    let scene = Rc::new(RefCell::new(Scene::new()));
    let redraw = make_redraw(ctx, scene.clone(), icons);

    // Mic pickup pattern select
    {
        let scene_c = scene.clone();
        let redraw_c = redraw.clone();
        dom::add_select_listener(&document, "mic-type-select", move |value| {
            if let Some(kind) = PatternKind::from_name(&value) {
                scene_c.borrow_mut().set_mic_pattern(kind);
                redraw_c();
            }
        });
    }

    // Mic rotation slider
    {
        let scene_c = scene.clone();
        let redraw_c = redraw.clone();
        dom::add_slider_listener(&document, "mic-angle", move |deg| {
            scene_c.borrow_mut().set_mic_orientation(deg as f32);
            redraw_c();
        });
    }

    // Shared volume slider
    {
        let scene_c = scene.clone();
        let redraw_c = redraw.clone();
        dom::add_slider_listener(&document, "speaker-volume", move |volume| {
            scene_c.borrow_mut().set_volume(volume as i32);
            redraw_c();
        });
    }

    // Add / remove speakers, with their dynamically created rotation sliders
    {
        let scene_c = scene.clone();
        let redraw_c = redraw.clone();
        let doc_c = document.clone();
        dom::add_click_listener(&document, "add-speaker-btn", move || {
            let added = scene_c.borrow_mut().add_speaker();
            if let Some(id) = added {
                let number = scene_c.borrow().speakers().len();
                wire_speaker_control(&doc_c, id, number, &scene_c, &redraw_c);
                redraw_c();
            }
        });
    }
    {
        let scene_c = scene.clone();
        let redraw_c = redraw.clone();
        let doc_c = document.clone();
        dom::add_click_listener(&document, "remove-speaker-btn", move || {
            if let Some(id) = scene_c.borrow_mut().remove_speaker() {
                dom::remove_speaker_control(&doc_c, id);
                redraw_c();
            }
        });
    }

    // Explicit feedback check
    {
        let scene_c = scene.clone();
        let doc_c = document.clone();
        dom::add_click_listener(&document, "placement-submit", move || {
            let verdict = judge::evaluate_with_alert(&scene_c.borrow(), || {
                if let Some(a) = alert.as_ref() {
                    assets::play_alert(a);
                }
            });
            log::info!("[judge] overlap={}", verdict.overlap_detected);
            dom::set_feedback(&doc_c, &verdict);
        });
    }

    // Controls for the initially seeded speakers
    let initial: Vec<(u32, usize)> = scene
        .borrow()
        .speakers()
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i + 1))
        .collect();
    for (id, number) in initial {
        wire_speaker_control(&document, id, number, &scene, &redraw);
    }

    events::wire_pointer_handlers(events::PointerWiring {
        canvas,
        scene: scene.clone(),
        redraw: redraw.clone(),
    });

    redraw();
    Ok(())
}

fn wire_speaker_control(
    document: &web::Document,
    id: u32,
    display_number: usize,
    scene: &Rc<RefCell<Scene>>,
    redraw: &Rc<dyn Fn()>,
) {
    let scene_ctrl = scene.clone();
    let redraw_ctrl = redraw.clone();
    dom::add_speaker_control(document, id, display_number, move |deg| {
        scene_ctrl
            .borrow_mut()
            .set_speaker_orientation(id, deg as f32);
        redraw_ctrl();
    });
}

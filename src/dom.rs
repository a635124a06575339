//! Small DOM helpers: element lookup, listener attachment and the dynamic
//! per-speaker rotation controls.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::{Severity, Verdict};

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` event on a range slider, passing the current numeric
/// value to the handler.
pub fn add_slider_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(f64) + 'static,
) {
    let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let reader = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(reader.value_as_number());
    }) as Box<dyn FnMut()>);
    let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Wire a `change` event on a `<select>`, passing the selected option value.
pub fn add_select_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    let Some(select) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok())
    else {
        return;
    };
    let reader = select.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handler(reader.value());
    }) as Box<dyn FnMut()>);
    let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Show the verdict text in the feedback element, red for a warning and
/// green for a pass.
pub fn set_feedback(document: &web::Document, verdict: &Verdict) {
    let Some(el) = document
        .get_element_by_id("placement-feedback")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    el.set_text_content(Some(verdict.message));
    let color = match verdict.severity {
        Severity::Warning => "red",
        Severity::Ok => "green",
    };
    let _ = el.style().set_property("color", color);
}

/// Create a labelled 0..360 rotation slider for a speaker and append it to
/// the controls container. Removed again by [`remove_speaker_control`].
pub fn add_speaker_control(
    document: &web::Document,
    speaker_id: u32,
    display_number: usize,
    mut on_input: impl FnMut(f64) + 'static,
) {
    let Some(container) = document.get_element_by_id("speaker-controls-container") else {
        return;
    };
    let Ok(control) = document.create_element("div") else {
        return;
    };
    control.set_class_name("speaker-control");
    control.set_id(&format!("speaker-control-{speaker_id}"));

    if let Ok(label) = document.create_element("label") {
        label.set_text_content(Some(&format!("Speaker {display_number} Rotation:")));
        let _ = control.append_child(&label);
    }

    let Ok(slider) = document
        .create_element("input")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().map_err(Into::into))
    else {
        return;
    };
    slider.set_type("range");
    slider.set_min("0");
    slider.set_max("360");
    slider.set_value("0");
    let reader = slider.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        on_input(reader.value_as_number());
    }) as Box<dyn FnMut()>);
    let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();

    let _ = control.append_child(&slider);
    let _ = container.append_child(&control);
}

pub fn remove_speaker_control(document: &web::Document, speaker_id: u32) {
    if let Some(el) = document.get_element_by_id(&format!("speaker-control-{speaker_id}")) {
        el.remove();
    }
}

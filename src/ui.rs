use crate::audio::{self, AmbientHandle};
use crate::constants::RING_SPEED_SLIDER_DIVISOR;
use crate::core::Controls;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wire the control panel into the shared [`Controls`] state. Sliders and
/// checkboxes only write fields; the render loop picks the values up on
/// its next frame.
pub fn wire_controls(
    document: &web::Document,
    controls: &Rc<RefCell<Controls>>,
    ambient: &AmbientHandle,
) {
    {
        let c = controls.clone();
        dom::add_input_listener(document, "gravity-slider", move |value| {
            c.borrow_mut().gravity_intensity = value;
        });
    }
    {
        let c = controls.clone();
        dom::add_input_listener(document, "ring-speed", move |value| {
            c.borrow_mut().ring_speed = value / RING_SPEED_SLIDER_DIVISOR;
        });
    }
    {
        let c = controls.clone();
        dom::add_toggle_listener(document, "toggle-helix", move |on| {
            c.borrow_mut().show_helix = on;
        });
    }
    {
        let c = controls.clone();
        dom::add_toggle_listener(document, "toggle-stars", move |on| {
            c.borrow_mut().show_stars = on;
        });
    }
    {
        let c = controls.clone();
        dom::add_toggle_listener(document, "toggle-labels", move |on| {
            c.borrow_mut().show_labels = on;
        });
    }
    wire_mute_button(document, controls, ambient);
    wire_help_buttons(document);
}

fn wire_mute_button(
    document: &web::Document,
    controls: &Rc<RefCell<Controls>>,
    ambient: &AmbientHandle,
) {
    let c = controls.clone();
    let a = ambient.clone();
    let doc = document.clone();
    dom::add_click_listener(document, "mute-button", move || {
        let muted = {
            let mut ctl = c.borrow_mut();
            ctl.muted = !ctl.muted;
            ctl.muted
        };
        audio::set_muted(&a, muted);
        if let Some(el) = doc.get_element_by_id("mute-button") {
            el.set_text_content(Some(if muted { "Unmute" } else { "Mute" }));
        }
    });
}

fn wire_help_buttons(document: &web::Document) {
    {
        let doc = document.clone();
        dom::add_click_listener(document, "help-button", move || overlay::show(&doc));
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, "help-close", move || overlay::hide(&doc));
    }
}

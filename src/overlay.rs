use web_sys as web;

const HELP_PANEL_ID: &str = "help-panel";

#[inline]
pub fn set_visible(document: &web::Document, visible: bool) {
    if let Some(el) = document.get_element_by_id(HELP_PANEL_ID) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1("hidden");
        } else {
            _ = cl.add_1("hidden");
        }
    }
}

#[inline]
pub fn show(document: &web::Document) {
    set_visible(document, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    set_visible(document, false);
}

pub fn toggle(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HELP_PANEL_ID) {
        let hidden = el.class_list().contains("hidden");
        set_visible(document, hidden);
    }
}

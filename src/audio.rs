use crate::constants::{AMBIENT_AUDIO_SRC, AMBIENT_VOLUME};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Handle to whichever ambient element ended up playing. The autoplay
/// retry may swap in a fresh element, so the mute toggle goes through this
/// cell rather than holding an element directly.
pub type AmbientHandle = Rc<RefCell<Option<web::HtmlAudioElement>>>;

fn create_element() -> Option<web::HtmlAudioElement> {
    match web::HtmlAudioElement::new_with_src(AMBIENT_AUDIO_SRC) {
        Ok(el) => {
            el.set_loop(true);
            el.set_volume(AMBIENT_VOLUME);
            Some(el)
        }
        Err(e) => {
            log::error!("[audio] ambient element error: {:?}", e);
            None
        }
    }
}

/// Start the looping ambient track. Autoplay rejection gets exactly one
/// retry with a freshly constructed element; a second failure is logged
/// and dropped.
pub fn start_ambient() -> AmbientHandle {
    let handle: AmbientHandle = Rc::new(RefCell::new(None));
    if let Some(el) = create_element() {
        *handle.borrow_mut() = Some(el.clone());
        let handle_for_retry = handle.clone();
        match el.play() {
            Err(e) => log::error!("[audio] play error: {:?}", e),
            Ok(promise) => spawn_local(async move {
                if JsFuture::from(promise).await.is_ok() {
                    return;
                }
                log::info!("[audio] autoplay blocked, retrying with a fresh element");
                let Some(fresh) = create_element() else {
                    return;
                };
                *handle_for_retry.borrow_mut() = Some(fresh.clone());
                match fresh.play() {
                    Ok(p2) => {
                        if JsFuture::from(p2).await.is_err() {
                            log::error!("[audio] ambient playback unavailable");
                        }
                    }
                    Err(e) => log::error!("[audio] retry play error: {:?}", e),
                }
            }),
        }
    }
    handle
}

/// Pause or resume the current ambient element.
pub fn set_muted(handle: &AmbientHandle, muted: bool) {
    let el = match handle.borrow().as_ref() {
        Some(el) => el.clone(),
        None => return,
    };
    if muted {
        _ = el.pause();
    } else if let Ok(promise) = el.play() {
        spawn_local(async move {
            _ = JsFuture::from(promise).await;
        });
    }
}

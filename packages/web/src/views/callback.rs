//! Popup landing view for federated sign-in.
//!
//! The identity provider redirects the popup here once it is done. All this
//! view does is hand its own URL, query string and all, back to the window
//! that opened it and close; the opener finishes the token exchange.

use dioxus::prelude::*;

/// Target of the platform's `continueUri` redirect.
#[component]
pub fn AuthCallback() -> Element {
    use_effect(|| notify_opener());

    rsx! {
        div {
            class: "callback",
            p { "Completing sign-in..." }
            p { class: "callback-hint", "You can close this window." }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn notify_opener() {
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(origin) = window.location().origin() else {
        return;
    };
    let opener = window
        .opener()
        .ok()
        .and_then(|value| value.dyn_into::<web_sys::Window>().ok());
    let Some(opener) = opener else {
        tracing::debug!("auth callback loaded outside a sign-in popup");
        return;
    };
    if opener
        .post_message(&JsValue::from_str(&href), &origin)
        .is_ok()
    {
        let _ = window.close();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn notify_opener() {}

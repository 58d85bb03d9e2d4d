//! Federated sign-in buttons and the popup flow behind them.
//!
//! Clicking a provider button asks the platform to build that provider's
//! authorization page, opens it in a popup, and waits. When the provider is
//! done it redirects the popup to our own callback route, which posts the
//! redirect URL back to this window and closes itself; that URL is then
//! exchanged for platform tokens. The page underneath never navigates.

use auth::{AuthClient, FederatedProvider, SessionUser};
use dioxus::prelude::*;

use crate::session::{use_auth, use_auth_client};

/// One sign-in button per enabled provider.
#[component]
pub fn FederatedButtons() -> Element {
    let pending = use_signal(|| Option::<FederatedProvider>::None);

    rsx! {
        div {
            class: "federated",
            for provider in FederatedProvider::ALL {
                ProviderButton { key: "{provider.provider_id()}", provider, pending }
            }
        }
    }
}

#[component]
fn ProviderButton(
    provider: FederatedProvider,
    mut pending: Signal<Option<FederatedProvider>>,
) -> Element {
    let client = use_auth_client();
    let mut state = use_auth();
    let label = provider.label();
    let slug = label.to_lowercase();

    let onclick = move |_| {
        let client = client.clone();
        pending.set(Some(provider));
        spawn(async move {
            match popup_sign_in(client, provider).await {
                Ok(user) => {
                    let mut st = state();
                    st.apply_user(user);
                    state.set(st);
                }
                Err(msg) => {
                    tracing::error!("{} sign-in failed: {}", provider, msg);
                    let mut st = state();
                    st.apply_error(msg);
                    state.set(st);
                }
            }
            pending.set(None);
        });
    };

    rsx! {
        button {
            class: "provider-btn provider-btn-{slug}",
            disabled: pending().is_some(),
            onclick: onclick,
            if pending() == Some(provider) {
                "Waiting for {label}..."
            } else {
                "{label} Sign In"
            }
        }
    }
}

/// Run the whole popup dance for one provider.
async fn popup_sign_in(
    client: AuthClient,
    provider: FederatedProvider,
) -> Result<SessionUser, String> {
    let started = client
        .create_auth_uri(provider)
        .await
        .map_err(|e| e.to_string())?;
    let request_uri = wait_for_redirect(&started.auth_uri).await?;
    client
        .sign_in_with_idp(&request_uri, &started.session_id)
        .await
        .map_err(|e| e.to_string())
}

/// Open `auth_uri` in a popup and wait for the callback route to post the
/// provider's redirect URL back to this window.
///
/// Resolves when the message arrives; fails when the popup is blocked or
/// closed without finishing. Messages from other origins are ignored.
#[cfg(target_arch = "wasm32")]
async fn wait_for_redirect(auth_uri: &str) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use wasm_bindgen::closure::Closure;

    let window = web_sys::window().ok_or("No window available")?;
    let origin = window
        .location()
        .origin()
        .map_err(|_| "Could not read the page origin")?;

    let delivered: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let slot = delivered.clone();
    let on_message = Closure::wrap(Box::new(move |evt: web_sys::MessageEvent| {
        if evt.origin() != origin {
            return;
        }
        if let Some(href) = evt.data().as_string() {
            *slot.borrow_mut() = Some(href);
        }
    }) as Box<dyn FnMut(web_sys::MessageEvent)>);
    let _listener = MessageListener::attach(&window, on_message)?;

    let popup = window
        .open_with_url_and_target_and_features(auth_uri, "signin", "popup,width=500,height=650")
        .ok()
        .flatten()
        .ok_or("The sign-in popup was blocked")?;

    loop {
        gloo_timers::future::sleep(Duration::from_millis(200)).await;
        if let Some(href) = delivered.borrow_mut().take() {
            return Ok(href);
        }
        if popup.closed() {
            // One extra beat; the result message can arrive after close.
            gloo_timers::future::sleep(Duration::from_millis(200)).await;
            return match delivered.borrow_mut().take() {
                Some(href) => Ok(href),
                None => Err("The sign-in window was closed".to_string()),
            };
        }
    }
}

/// A window "message" subscription that detaches itself when dropped. The
/// waiting future can be cancelled at any await point, e.g. when the button
/// that spawned it unmounts; the listener and its closure must not outlive
/// the wait.
#[cfg(target_arch = "wasm32")]
struct MessageListener {
    window: web_sys::Window,
    handler: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl MessageListener {
    fn attach(
        window: &web_sys::Window,
        handler: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MessageEvent)>,
    ) -> Result<Self, String> {
        use wasm_bindgen::JsCast;

        window
            .add_event_listener_with_callback("message", handler.as_ref().unchecked_ref())
            .map_err(|_| "Could not listen for the sign-in result")?;
        Ok(Self {
            window: window.clone(),
            handler,
        })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for MessageListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("message", self.handler.as_ref().unchecked_ref());
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait_for_redirect(_auth_uri: &str) -> Result<String, String> {
    Err("Federated sign-in is only available in the browser".to_string())
}

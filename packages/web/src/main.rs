use dioxus::prelude::*;

use auth::AuthConfig;
use ui::AuthProvider;
use views::{AuthCallback, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/callback")]
    AuthCallback {},
}

/// Browser API key of the identity platform project, baked in at build
/// time. The fallback keeps local builds working against an emulator.
const API_KEY: &str = match option_env!("AUTH_API_KEY") {
    Some(key) => key,
    None => "demo-api-key",
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            config: auth_config(),
            Router::<Route> {}
        }
    }
}

/// Build the one [`AuthConfig`] the whole app runs on. The popup callback
/// follows the page's own origin, so dev and deployed builds both land on
/// their own `/auth/callback`.
fn auth_config() -> AuthConfig {
    let continue_uri = url::Url::parse(&callback_url()).expect("Invalid callback URL");
    AuthConfig::new(API_KEY, continue_uri)
}

#[cfg(target_arch = "wasm32")]
fn callback_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .map(|origin| format!("{origin}/auth/callback"))
        .unwrap_or_else(|| auth::config::DEFAULT_CONTINUE_URI.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn callback_url() -> String {
    auth::config::DEFAULT_CONTINUE_URI.to_string()
}

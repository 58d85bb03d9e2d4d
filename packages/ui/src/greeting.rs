//! Signed-in presentation: the greeting block and the sign-out button.

use dioxus::prelude::*;

use crate::session::{use_auth, use_auth_client};

/// Greets the signed-in user with whatever profile the provider shared.
/// Renders nothing while no one is signed in.
#[component]
pub fn Greeting() -> Element {
    let auth = use_auth();
    let state = auth();

    if !state.signed_in() {
        return rsx! {};
    }
    let Some(user) = state.user else {
        return rsx! {};
    };
    let email = user.email.unwrap_or_default();

    rsx! {
        div {
            class: "greeting",
            h1 { "hello {email}" }
            if let Some(name) = user.name {
                h3 { "your name: {name}" }
            }
            if let Some(photo) = user.photo {
                img { class: "greeting-photo", src: "{photo}", alt: "Profile photo" }
            }
        }
    }
}

/// Button that signs the current user out.
#[component]
pub fn SignOutButton() -> Element {
    let client = use_auth_client();
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let client = client.clone();
        async move {
            match client.sign_out().await {
                Ok(()) => {
                    let mut state = auth_state();
                    state.clear_user();
                    auth_state.set(state);
                }
                Err(e) => {
                    tracing::error!("Sign-out failed: {}", e);
                    let mut state = auth_state();
                    state.apply_error(e.to_string());
                    auth_state.set(state);
                }
            }
        }
    };

    rsx! {
        button {
            class: "signout-btn",
            onclick: onclick,
            "Sign Out"
        }
    }
}

use dioxus::prelude::*;

use crate::session::use_auth;

#[component]
pub fn Navbar() -> Element {
    let auth = use_auth();
    let status = match auth().user.as_ref().and_then(|u| u.email.clone()) {
        Some(email) => email,
        None => "Not signed in".to_string(),
    };

    rsx! {
        nav {
            class: "navbar",
            span { class: "navbar-brand", "Gatehouse" }
            span { class: "navbar-status", "{status}" }
        }
    }
}

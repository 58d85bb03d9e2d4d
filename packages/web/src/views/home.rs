//! The single page: navbar, greeting, credential form, federated sign-in.

use dioxus::prelude::*;
use ui::{use_auth, AuthForm, FederatedButtons, Greeting, Navbar, SignOutButton};

/// Landing page component.
///
/// The form stays on screen whether or not someone is signed in; only the
/// block underneath swaps between the federated buttons and sign-out.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let signed_in = auth().signed_in();

    rsx! {
        div {
            class: "page",
            Navbar {}
            Greeting {}
            AuthForm {}
            div {
                class: "page-actions",
                if signed_in {
                    SignOutButton {}
                } else {
                    FederatedButtons {}
                }
            }
        }
    }
}

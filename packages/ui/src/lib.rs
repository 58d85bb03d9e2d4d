//! This crate contains all shared UI for the workspace.

pub mod components;

mod session;
pub use session::{use_auth, use_auth_client, AuthProvider, AuthState};

mod auth_form;
pub use auth_form::{AuthForm, AuthMode, ResetStatus};

mod federated;
pub use federated::FederatedButtons;

mod greeting;
pub use greeting::{Greeting, SignOutButton};

mod navbar;
pub use navbar::Navbar;

pub mod validate;
pub use validate::validate_password;

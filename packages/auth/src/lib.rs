//! # Auth crate — identity platform client for Gatehouse
//!
//! Gatehouse keeps no account database and no credential-handling code of its
//! own. Every sign-up, sign-in, and account email is a direct REST call to the
//! hosted Identity Toolkit API, and this crate is the whole of that client.
//! The frontend crates only ever talk to [`AuthClient`]; nothing above this
//! layer sees a token endpoint or an API key.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`AuthClient`], the handle wrapping the HTTP pool, project config, and the in-memory session |
//! | [`config`] | [`AuthConfig`], built once at startup and handed to the client |
//! | [`error`] | [`AuthError`] and the decoding of platform error payloads |
//! | [`model`] | Wire-format request/response types and the normalized [`SessionUser`] |
//! | [`provider`] | The federated identity providers the platform brokers for us |
//!
//! ## Operations exposed here
//!
//! - **Email/password**: `sign_up`, `sign_in_with_password`
//! - **Federated**: `create_auth_uri` (start), `sign_in_with_idp` (finish)
//! - **Account email**: `send_email_verification`, `send_password_reset_email`
//! - **Session**: `sign_out`

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use client::{AuthClient, FederatedSignIn};
pub use config::AuthConfig;
pub use error::AuthError;
pub use model::SessionUser;
pub use provider::FederatedProvider;

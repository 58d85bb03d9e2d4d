//! # Identity Toolkit client
//!
//! [`AuthClient`] is the one handle the frontends hold. It wraps the shared
//! HTTP pool, the project config, and the in-memory session left behind by
//! the most recent sign-in. Clones are cheap and all see the same session,
//! so a component tree can pass the client around freely.
//!
//! Every operation is a single `POST` to an `accounts:*` endpoint keyed by
//! the project's browser API key. Failures come back as
//! [`AuthError::Provider`] carrying the platform's own message; the UI shows
//! that text verbatim rather than inventing friendlier wording.
//!
//! Federated sign-in is split across two calls so the popup dance can happen
//! in between: [`AuthClient::create_auth_uri`] returns the provider page to
//! open, and once the popup lands back on the app's callback route,
//! [`AuthClient::sign_in_with_idp`] exchanges that redirect URL for tokens.
//!
//! Tokens never leave this module. The session lives in memory only, which
//! is why [`AuthClient::sign_out`] is just "forget it"; the platform holds
//! no client-side session of its own.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::model::{
    CreateAuthUriRequest, CreateAuthUriResponse, IdpAuthResponse, PasswordAuthRequest,
    PasswordAuthResponse, SendOobCodeRequest, SendOobCodeResponse, SessionUser,
    SignInWithIdpRequest,
};
use crate::provider::FederatedProvider;

/// Tokens of the most recent successful sign-in. Never serialized, never
/// exposed; dropped on sign-out or page unload.
#[derive(Clone, Debug)]
#[allow(dead_code)]
struct AuthSession {
    id_token: String,
    refresh_token: Option<String>,
    local_id: String,
    email: Option<String>,
}

impl From<&PasswordAuthResponse> for AuthSession {
    fn from(resp: &PasswordAuthResponse) -> Self {
        Self {
            id_token: resp.id_token.clone(),
            refresh_token: resp.refresh_token.clone(),
            local_id: resp.local_id.clone(),
            email: resp.email.clone(),
        }
    }
}

impl From<&IdpAuthResponse> for AuthSession {
    fn from(resp: &IdpAuthResponse) -> Self {
        Self {
            id_token: resp.id_token.clone(),
            refresh_token: resp.refresh_token.clone(),
            local_id: resp.local_id.clone(),
            email: resp.email.clone(),
        }
    }
}

/// A federated sign-in started with [`AuthClient::create_auth_uri`].
#[derive(Clone, Debug)]
pub struct FederatedSignIn {
    /// Provider authorization page to open in the popup
    pub auth_uri: String,
    /// Platform session to quote back in [`AuthClient::sign_in_with_idp`]
    pub session_id: String,
}

/// Handle to the hosted identity platform.
#[derive(Clone)]
pub struct AuthClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    config: AuthConfig,
    session: Mutex<Option<AuthSession>>,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                http: reqwest::Client::new(),
                config,
                session: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.inner.config
    }

    /// Create a new email/password account and sign it in.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let resp: PasswordAuthResponse = self
            .post(
                "signUp",
                &PasswordAuthRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        self.remember(AuthSession::from(&resp));
        Ok(SessionUser::from(&resp))
    }

    /// Sign in to an existing account with email and password.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, AuthError> {
        let resp: PasswordAuthResponse = self
            .post(
                "signInWithPassword",
                &PasswordAuthRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;
        self.remember(AuthSession::from(&resp));
        Ok(SessionUser::from(&resp))
    }

    /// Ask the platform to email a verification link to the signed-in user.
    pub async fn send_email_verification(&self) -> Result<(), AuthError> {
        let id_token = self
            .lock_session()
            .as_ref()
            .map(|s| s.id_token.clone())
            .ok_or(AuthError::NoCurrentUser)?;
        let _: SendOobCodeResponse = self
            .post("sendOobCode", &SendOobCodeRequest::verify_email(&id_token))
            .await?;
        Ok(())
    }

    /// Ask the platform to email a password reset link to `email`.
    ///
    /// Needs no session; this is how users who cannot sign in recover.
    pub async fn send_password_reset_email(&self, email: &str) -> Result<(), AuthError> {
        let _: SendOobCodeResponse = self
            .post("sendOobCode", &SendOobCodeRequest::password_reset(email))
            .await?;
        Ok(())
    }

    /// Start a federated sign-in: the platform builds the provider's
    /// authorization URL and a session id binding it to the later exchange.
    pub async fn create_auth_uri(
        &self,
        provider: FederatedProvider,
    ) -> Result<FederatedSignIn, AuthError> {
        let resp: CreateAuthUriResponse = self
            .post(
                "createAuthUri",
                &CreateAuthUriRequest {
                    provider_id: provider.provider_id(),
                    continue_uri: self.inner.config.continue_uri.as_str(),
                },
            )
            .await?;
        Ok(FederatedSignIn {
            auth_uri: resp.auth_uri,
            session_id: resp.session_id,
        })
    }

    /// Finish a federated sign-in with the URL the provider redirected the
    /// popup back to.
    pub async fn sign_in_with_idp(
        &self,
        request_uri: &str,
        session_id: &str,
    ) -> Result<SessionUser, AuthError> {
        let resp: IdpAuthResponse = self
            .post(
                "signInWithIdp",
                &SignInWithIdpRequest {
                    request_uri,
                    session_id,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;
        self.remember(AuthSession::from(&resp));
        Ok(SessionUser::from(&resp))
    }

    /// Drop the in-memory session. The platform keeps no client session of
    /// its own, so forgetting the tokens is the whole of sign-out.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.lock_session().take();
        Ok(())
    }

    fn remember(&self, session: AuthSession) {
        *self.lock_session() = Some(session);
    }

    fn lock_session(&self) -> MutexGuard<'_, Option<AuthSession>> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// `{endpoint}/v1/accounts:{op}?key={api_key}`
    fn op_url(&self, op: &str) -> Url {
        let mut url = self.inner.config.endpoint.clone();
        url.set_path(&format!("/v1/accounts:{op}"));
        url.query_pairs_mut()
            .append_pair("key", &self.inner.config.api_key);
        url
    }

    async fn post<B, T>(&self, op: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!("POST accounts:{}", op);
        let response = self.inner.http.post(self.op_url(op)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(AuthError::from_error_body(status, &text));
        }
        serde_json::from_str(&text).map_err(|e| AuthError::Response(e.to_string()))
    }
}

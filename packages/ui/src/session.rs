//! Authentication context and hooks for the UI.

use auth::{AuthClient, AuthConfig, SessionUser};
use dioxus::prelude::*;

/// Authentication state for the page.
///
/// `user` is whoever is currently signed in. `error` is the most recent
/// failure message, shown verbatim in the form banner; it survives until a
/// successful sign-in replaces it or a later failure overwrites it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub error: Option<String>,
}

impl AuthState {
    /// Record a successful sign-in. Clears any stale error.
    pub fn apply_user(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.error = None;
    }

    /// Record a failed operation. Whoever was signed in stays signed in.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Record a sign-out.
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// Whether someone is signed in, for presentation purposes. A user
    /// without an email address does not count.
    pub fn signed_in(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::has_email)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared identity platform client.
pub fn use_auth_client() -> AuthClient {
    use_context::<AuthClient>()
}

/// Provider component that owns the auth state and the platform client.
/// Wrap the app with this component; the client is built exactly once from
/// the config given here and shared with every descendant through context.
#[component]
pub fn AuthProvider(config: AuthConfig, children: Element) -> Element {
    use_context_provider(move || AuthClient::new(config));

    let auth_state = use_signal(AuthState::default);
    use_context_provider(move || auth_state);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> SessionUser {
        SessionUser {
            name: Some("Jane".to_string()),
            email: Some("j@x.com".to_string()),
            photo: None,
        }
    }

    #[test]
    fn test_successful_sign_in_clears_stale_error() {
        let mut state = AuthState::default();
        state.apply_error("INVALID_LOGIN_CREDENTIALS");

        state.apply_user(jane());

        assert_eq!(state.user, Some(jane()));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_keeps_current_user() {
        let mut state = AuthState::default();
        state.apply_user(jane());

        state.apply_error("EMAIL_EXISTS");

        assert_eq!(state.user, Some(jane()));
        assert_eq!(state.error.as_deref(), Some("EMAIL_EXISTS"));
    }

    #[test]
    fn test_sign_out_only_touches_the_user() {
        let mut state = AuthState::default();
        state.apply_user(jane());
        state.apply_error("ERROR_AFTER_SIGN_IN");

        state.clear_user();

        assert_eq!(state.user, None);
        assert_eq!(state.error.as_deref(), Some("ERROR_AFTER_SIGN_IN"));
    }

    #[test]
    fn test_signed_in_requires_an_email() {
        let mut state = AuthState::default();
        assert!(!state.signed_in());

        state.apply_user(SessionUser::default());
        assert!(!state.signed_in());

        state.apply_user(jane());
        assert!(state.signed_in());
    }
}

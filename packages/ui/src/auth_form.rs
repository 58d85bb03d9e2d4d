//! The login / registration form.
//!
//! One form serves both modes. [`AuthMode`] decides which platform
//! operation the submit button dispatches to; a plain button flips the mode
//! in place without navigating. Registration also fires off a verification
//! email in the background once the account exists, and a separate reset
//! button emails a password reset link to whatever address is in the email
//! field, reporting its outcome on its own line rather than in the error
//! banner.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::session::{use_auth, use_auth_client};
use crate::validate::validate_password;

/// Which credential operation the submit button dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Register,
    Login,
}

impl AuthMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Register => Self::Login,
            Self::Login => Self::Register,
        }
    }

    /// Heading and submit label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
        }
    }

    /// Prompt shown next to the mode switch button.
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Register => "Already registered?",
            Self::Login => "Need an account?",
        }
    }

    /// Label of the mode switch button.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Register => "Switch to login",
            Self::Login => "Switch to register",
        }
    }

    /// Whether a successful submission in this mode is followed by a
    /// verification email.
    pub fn sends_verification_email(self) -> bool {
        matches!(self, Self::Register)
    }
}

/// Outcome of the most recent password reset request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResetStatus {
    #[default]
    Idle,
    /// The platform accepted the request for this address.
    Sent(String),
    /// The platform refused, with its own message.
    Failed(String),
}

/// The combined login / registration form.
#[component]
pub fn AuthForm() -> Element {
    let client = use_auth_client();
    let reset_client = client.clone();
    let mut state = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut mode = use_signal(|| AuthMode::Register);
    let mut loading = use_signal(|| false);
    let mut reset = use_signal(ResetStatus::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            let e = email().trim().to_string();
            let p = password();

            if let Err(msg) = validate_password(&p) {
                let mut st = state();
                st.apply_error(msg);
                state.set(st);
                return;
            }

            loading.set(true);
            // The mode switch stays usable while the call is in flight, so
            // everything after the await follows the submitted mode.
            let submitted = mode();
            let result = match submitted {
                AuthMode::Register => client.sign_up(&e, &p).await,
                AuthMode::Login => client.sign_in_with_password(&e, &p).await,
            };
            match result {
                Ok(user) => {
                    let mut st = state();
                    st.apply_user(user);
                    state.set(st);
                    loading.set(false);

                    if submitted.sends_verification_email() {
                        let client = client.clone();
                        spawn(async move {
                            if let Err(e) = client.send_email_verification().await {
                                tracing::error!("Failed to send verification email: {}", e);
                            }
                        });
                    }
                }
                Err(e) => {
                    loading.set(false);
                    let mut st = state();
                    st.apply_error(e.to_string());
                    state.set(st);
                }
            }
        });
    };

    let handle_reset = move |_: MouseEvent| {
        let client = reset_client.clone();
        spawn(async move {
            let e = email().trim().to_string();
            match client.send_password_reset_email(&e).await {
                Ok(()) => reset.set(ResetStatus::Sent(e)),
                Err(err) => reset.set(ResetStatus::Failed(err.to_string())),
            }
        });
    };

    let reset_note = match reset() {
        ResetStatus::Idle => None,
        ResetStatus::Sent(addr) => Some(rsx! {
            p { class: "reset-note", "Password reset email sent to {addr}" }
        }),
        ResetStatus::Failed(msg) => Some(rsx! {
            p { class: "reset-note reset-note-error", "Could not send reset email: {msg}" }
        }),
    };

    rsx! {
        div {
            class: "auth-form",

            h2 { "Please {mode().title()}" }

            form {
                onsubmit: handle_submit,

                if let Some(err) = state().error {
                    div {
                        class: "form-error",
                        "{err}"
                    }
                }

                label {
                    class: "field",
                    span { class: "field-label", "Email" }
                    Input {
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: email(),
                        onchange: move |evt: FormEvent| email.set(evt.value()),
                    }
                }

                label {
                    class: "field",
                    span { class: "field-label", "Password" }
                    Input {
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        onchange: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Please wait..." } else { "{mode().title()}" }
                }
            }

            div {
                class: "mode-switch",
                span { "{mode().switch_prompt()} " }
                Button {
                    variant: ButtonVariant::Plain,
                    onclick: move |_| mode.set(mode().toggled()),
                    "{mode().switch_label()}"
                }
            }

            div {
                class: "reset-row",
                Button {
                    variant: ButtonVariant::Plain,
                    disabled: loading(),
                    onclick: handle_reset,
                    "Forgot password? Send reset email"
                }
                {reset_note}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_flips_between_the_two_modes() {
        assert_eq!(AuthMode::Register.toggled(), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
        assert_eq!(AuthMode::Login.toggled().toggled(), AuthMode::Login);
    }

    #[test]
    fn test_labels_follow_the_mode() {
        assert_eq!(AuthMode::Register.title(), "Register");
        assert_eq!(AuthMode::Login.title(), "Login");
        assert_eq!(AuthMode::Register.switch_label(), "Switch to login");
        assert_eq!(AuthMode::Login.switch_prompt(), "Need an account?");
    }

    #[test]
    fn test_verification_follows_the_submitted_mode() {
        // A registration can finish after the user has already flipped the
        // switch; the decision belongs to the mode that was submitted.
        let submitted = AuthMode::Register;
        let current = submitted.toggled();

        assert!(submitted.sends_verification_email());
        assert!(!current.sends_verification_email());
    }

    #[test]
    fn test_reset_status_starts_idle() {
        assert_eq!(ResetStatus::default(), ResetStatus::Idle);
    }
}

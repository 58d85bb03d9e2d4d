//! # Wire models for the Identity Toolkit API
//!
//! Request and response bodies for the `accounts:*` operations, plus
//! [`SessionUser`], the one normalized shape the UI layer sees. Responses are
//! decoded with `camelCase` renames straight off the wire; requests borrow
//! their fields so callers never clone just to serialize.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`SessionUser`] | The signed-in principal as the page tracks it: optional display name, email, and photo URL. Identical regardless of whether the user arrived via password or a federated provider. |
//! | [`PasswordAuthRequest`] / [`PasswordAuthResponse`] | Body shared by `accounts:signUp` and `accounts:signInWithPassword`. |
//! | [`SendOobCodeRequest`] / [`SendOobCodeResponse`] | `accounts:sendOobCode`, which emails the user either a verification link or a password reset link depending on `requestType`. |
//! | [`CreateAuthUriRequest`] / [`CreateAuthUriResponse`] | `accounts:createAuthUri`, the first half of a federated sign-in. |
//! | [`SignInWithIdpRequest`] / [`IdpAuthResponse`] | `accounts:signInWithIdp`, the second half, exchanging the provider redirect for platform tokens. |
//!
//! Token lifetimes (`expiresIn`) stay the decimal strings the wire carries;
//! nothing here schedules refreshes, so there is no point parsing them.

use serde::{Deserialize, Serialize};

/// The signed-in user as the page tracks it.
///
/// Every way of signing in produces this same shape, so the greeting and
/// navbar never care which provider the account came from. Fields the
/// provider did not supply are `None`; empty strings from the wire are
/// normalized to `None` as well.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Display name: Some("Jane") when the provider knows one
    pub name: Option<String>,
    /// Account email address
    pub email: Option<String>,
    /// Profile photo URL
    pub photo: Option<String>,
}

impl SessionUser {
    /// Whether this user counts as signed in for presentation purposes.
    pub fn has_email(&self) -> bool {
        self.email.as_deref().is_some_and(|e| !e.is_empty())
    }
}

/// Drop empty strings so the UI can rely on `Option` alone.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Body of `accounts:signUp` and `accounts:signInWithPassword`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub return_secure_token: bool,
}

/// Successful response of `accounts:signUp` / `accounts:signInWithPassword`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordAuthResponse {
    /// Short-lived bearer token for authenticated platform calls
    pub id_token: String,
    /// Opaque token for minting fresh id tokens
    pub refresh_token: Option<String>,
    /// Id token lifetime in seconds, as a decimal string: "3600"
    pub expires_in: Option<String>,
    /// Stable platform-side account id
    pub local_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub profile_picture: Option<String>,
    /// Present on sign-in: whether the account already existed
    pub registered: Option<bool>,
}

impl From<&PasswordAuthResponse> for SessionUser {
    fn from(resp: &PasswordAuthResponse) -> Self {
        Self {
            name: non_empty(resp.display_name.clone()),
            email: non_empty(resp.email.clone()),
            photo: non_empty(resp.profile_picture.clone()),
        }
    }
}

/// Body of `accounts:sendOobCode`.
///
/// One endpoint, two shapes: verification links are requested with the
/// current user's id token, reset links with a bare email address.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeRequest<'a> {
    pub request_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> SendOobCodeRequest<'a> {
    /// Email a verification link to the signed-in user.
    pub fn verify_email(id_token: &'a str) -> Self {
        Self {
            request_type: "VERIFY_EMAIL",
            id_token: Some(id_token),
            email: None,
        }
    }

    /// Email a password reset link to `email`.
    pub fn password_reset(email: &'a str) -> Self {
        Self {
            request_type: "PASSWORD_RESET",
            id_token: None,
            email: Some(email),
        }
    }
}

/// Response of `accounts:sendOobCode`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOobCodeResponse {
    /// Address the platform sent the link to
    pub email: Option<String>,
}

/// Body of `accounts:createAuthUri`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriRequest<'a> {
    /// Provider in wire format: "google.com"
    pub provider_id: &'a str,
    /// Where the provider sends the popup once it is done
    pub continue_uri: &'a str,
}

/// Response of `accounts:createAuthUri`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuthUriResponse {
    /// Fully-built provider authorization URL to open in the popup
    pub auth_uri: String,
    /// Platform session binding this start to the later `signInWithIdp`
    pub session_id: String,
    pub provider_id: Option<String>,
}

/// Body of `accounts:signInWithIdp`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInWithIdpRequest<'a> {
    /// Full URL the provider redirected the popup back to
    pub request_uri: &'a str,
    pub session_id: &'a str,
    pub return_secure_token: bool,
    pub return_idp_credential: bool,
}

/// Successful response of `accounts:signInWithIdp`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdpAuthResponse {
    pub id_token: String,
    pub refresh_token: Option<String>,
    /// Id token lifetime in seconds, as a decimal string: "3600"
    pub expires_in: Option<String>,
    /// Stable platform-side account id
    pub local_id: String,
    /// Provider-scoped identity: "https://accounts.google.com/1234"
    pub federated_id: Option<String>,
    pub provider_id: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl From<&IdpAuthResponse> for SessionUser {
    fn from(resp: &IdpAuthResponse) -> Self {
        Self {
            name: non_empty(resp.display_name.clone()),
            email: non_empty(resp.email.clone()),
            photo: non_empty(resp.photo_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_request_wire_shape() {
        let req = PasswordAuthRequest {
            email: "a@b.com",
            password: "Secret1!",
            return_secure_token: true,
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "email": "a@b.com",
                "password": "Secret1!",
                "returnSecureToken": true,
            })
        );
    }

    #[test]
    fn test_password_response_decodes_sign_up_shape() {
        // signUp omits the profile fields signInWithPassword carries.
        let resp: PasswordAuthResponse = serde_json::from_str(
            r#"{
                "kind": "identitytoolkit#SignupNewUserResponse",
                "idToken": "tok-1",
                "email": "a@b.com",
                "refreshToken": "refresh-1",
                "expiresIn": "3600",
                "localId": "uid-1"
            }"#,
        )
        .unwrap();

        assert_eq!(resp.id_token, "tok-1");
        assert_eq!(resp.local_id, "uid-1");
        assert_eq!(resp.expires_in.as_deref(), Some("3600"));
        assert_eq!(resp.registered, None);

        let user = SessionUser::from(&resp);
        assert_eq!(user.email.as_deref(), Some("a@b.com"));
        assert_eq!(user.name, None);
        assert_eq!(user.photo, None);
    }

    #[test]
    fn test_oob_request_variants_omit_unused_field() {
        assert_eq!(
            serde_json::to_value(SendOobCodeRequest::verify_email("tok-1")).unwrap(),
            json!({"requestType": "VERIFY_EMAIL", "idToken": "tok-1"})
        );
        assert_eq!(
            serde_json::to_value(SendOobCodeRequest::password_reset("a@b.com")).unwrap(),
            json!({"requestType": "PASSWORD_RESET", "email": "a@b.com"})
        );
    }

    #[test]
    fn test_create_auth_uri_request_wire_shape() {
        let req = CreateAuthUriRequest {
            provider_id: "github.com",
            continue_uri: "http://localhost:8080/auth/callback",
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "providerId": "github.com",
                "continueUri": "http://localhost:8080/auth/callback",
            })
        );
    }

    #[test]
    fn test_idp_request_asks_for_tokens_and_credential() {
        let req = SignInWithIdpRequest {
            request_uri: "http://localhost:8080/auth/callback?code=abc&state=xyz",
            session_id: "sess-1",
            return_secure_token: true,
            return_idp_credential: true,
        };

        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "requestUri": "http://localhost:8080/auth/callback?code=abc&state=xyz",
                "sessionId": "sess-1",
                "returnSecureToken": true,
                "returnIdpCredential": true,
            })
        );
    }

    #[test]
    fn test_idp_response_normalizes_to_session_user() {
        let resp: IdpAuthResponse = serde_json::from_str(
            r#"{
                "idToken": "tok-2",
                "refreshToken": "refresh-2",
                "expiresIn": "3600",
                "localId": "uid-2",
                "federatedId": "https://accounts.google.com/1234",
                "providerId": "google.com",
                "email": "j@x.com",
                "emailVerified": true,
                "displayName": "Jane",
                "photoUrl": "http://photos.example.com/jane.png"
            }"#,
        )
        .unwrap();

        let user = SessionUser::from(&resp);
        assert_eq!(
            user,
            SessionUser {
                name: Some("Jane".to_string()),
                email: Some("j@x.com".to_string()),
                photo: Some("http://photos.example.com/jane.png".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_strings_normalize_to_none() {
        let resp: IdpAuthResponse = serde_json::from_str(
            r#"{
                "idToken": "tok-3",
                "localId": "uid-3",
                "providerId": "github.com",
                "email": "dev@example.com",
                "displayName": "",
                "photoUrl": ""
            }"#,
        )
        .unwrap();

        let user = SessionUser::from(&resp);
        assert_eq!(user.name, None);
        assert_eq!(user.photo, None);
        assert!(user.has_email());
    }

    #[test]
    fn test_has_email_rejects_missing_and_empty() {
        assert!(!SessionUser::default().has_email());
        assert!(!SessionUser {
            email: Some(String::new()),
            ..Default::default()
        }
        .has_email());
    }
}

//! Local password checks, run before any credential leaves the page.
//!
//! Only the password is checked locally. Email addresses go to the platform
//! as typed and come back as `INVALID_EMAIL` when they are nonsense; the
//! platform also re-checks password strength on its side, so these rules are
//! a first line, not the authority.

/// Symbols the password policy accepts.
pub const PASSWORD_SYMBOLS: &str = "!@#$&*";

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check a candidate password against the sign-up policy.
///
/// A password passes when it is at least [`MIN_PASSWORD_LEN`] characters and
/// mixes upper case, lower case, a digit, and one of [`PASSWORD_SYMBOLS`].
/// The `Err` carries the message to show in the form banner.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err(format!(
            "Password must mix upper and lower case letters, a digit, and one of {PASSWORD_SYMBOLS}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected_before_anything_else() {
        let err = validate_password("abc").unwrap_err();
        assert_eq!(err, "Password must be at least 6 characters long");

        // Length is reported first even when the mix is also wrong.
        let err = validate_password("ab1").unwrap_err();
        assert!(err.contains("at least 6"));
    }

    #[test]
    fn test_long_password_still_needs_the_mix() {
        for candidate in ["abcdef", "ABCDEF", "123456", "abcde1", "Abcdef1"] {
            let err = validate_password(candidate).unwrap_err();
            assert!(
                err.contains("mix upper and lower case"),
                "{candidate:?} should fail the mix rule"
            );
        }
    }

    #[test]
    fn test_mixed_password_passes() {
        assert_eq!(validate_password("Abc1!x"), Ok(()));
        assert_eq!(validate_password("Sup3r*secret"), Ok(()));
    }

    #[test]
    fn test_every_listed_symbol_counts() {
        for symbol in PASSWORD_SYMBOLS.chars() {
            let candidate = format!("Abcde1{symbol}");
            assert_eq!(validate_password(&candidate), Ok(()), "{symbol}");
        }
    }
}

//! Federated identity providers the platform can broker sign-in for.

use std::fmt;

/// A federated identity provider, in the fixed set the project has enabled.
///
/// The platform addresses providers by a domain-style id (`google.com`,
/// `github.com`, `facebook.com`); everything else about the OAuth dance is
/// hosted on the platform side, so this enum is all the app needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FederatedProvider {
    Google,
    GitHub,
    Facebook,
}

impl FederatedProvider {
    /// Every enabled provider, in the order the page renders them.
    pub const ALL: [FederatedProvider; 3] = [Self::Google, Self::GitHub, Self::Facebook];

    /// Provider id in the platform's wire format.
    pub fn provider_id(self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::GitHub => "github.com",
            Self::Facebook => "facebook.com",
        }
    }

    /// Human-readable name for button labels and log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::GitHub => "GitHub",
            Self::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for FederatedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_ids_match_platform_format() {
        assert_eq!(FederatedProvider::Google.provider_id(), "google.com");
        assert_eq!(FederatedProvider::GitHub.provider_id(), "github.com");
        assert_eq!(FederatedProvider::Facebook.provider_id(), "facebook.com");
    }

    #[test]
    fn test_all_lists_every_provider_once() {
        assert_eq!(FederatedProvider::ALL.len(), 3);
        for provider in FederatedProvider::ALL {
            assert_eq!(
                FederatedProvider::ALL
                    .iter()
                    .filter(|p| **p == provider)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(FederatedProvider::GitHub.to_string(), "GitHub");
    }
}

//! The domain gate: decides whether a provider profile may become a
//! principal.
//!
//! Ordering matters and is load-bearing: a missing email is a distinct
//! failure from a disallowed domain and must produce its own message.

use thiserror::Error;

use boardhub_core::types::Principal;

use crate::oauth::UserProfile;

/// Why a provider profile was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthRejection {
    /// The provider released no email address for this account.
    #[error("your account has no email address visible to this application")]
    NoEmail,
    /// The email's domain is not on the allow-list.
    #[error("domain '{domain}' is not allowed; allowed domains: {}", allowed.join(", "))]
    DomainNotAllowed {
        /// The rejected domain.
        domain: String,
        /// The configured allow-list, surfaced to the user.
        allowed: Vec<String>,
    },
}

impl AuthRejection {
    /// Stable error code carried on the failure-view query string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoEmail => "no_email",
            Self::DomainNotAllowed { .. } => "domain_not_allowed",
        }
    }
}

/// Validate a provider profile against the domain allow-list.
///
/// Membership is exact and case-sensitive: `a@sub.example.com` is not
/// admitted by an allow-list containing `example.com`.
pub fn validate_profile(
    profile: &UserProfile,
    allowed_domains: &[String],
) -> Result<Principal, AuthRejection> {
    let email = match profile.email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => email,
        None => return Err(AuthRejection::NoEmail),
    };

    let domain = email.rsplit('@').next().unwrap_or("");
    if !allowed_domains.iter().any(|d| d == domain) {
        return Err(AuthRejection::DomainNotAllowed {
            domain: domain.to_string(),
            allowed: allowed_domains.to_vec(),
        });
    }

    Ok(Principal {
        external_id: profile.provider_id.clone(),
        email: email.to_string(),
        display_name: profile.display_name.clone(),
    })
}

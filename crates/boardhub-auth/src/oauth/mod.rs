//! Identity provider boundary.
//!
//! The gate consumes an OAuth2 authorization-code exchange that ends in
//! a user profile; everything protocol-specific sits behind
//! [`IdentityProvider`] so the callback handler and tests never talk to
//! Google directly.

pub mod google;

use async_trait::async_trait;

use boardhub_core::result::AppResult;

pub use google::GoogleProvider;

/// Profile returned by a completed authorization-code exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    /// Provider-assigned stable id.
    pub provider_id: String,
    /// Primary email, if the provider released one. Absence is a valid,
    /// rejectable state — not an error.
    pub email: Option<String>,
    /// Display name.
    pub display_name: String,
}

/// An OAuth2 identity provider: produces the authorization redirect URL
/// and turns a callback code into a profile.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL the browser is redirected to in order to begin authorization.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchange the callback code for tokens and fetch the profile.
    async fn exchange_code(&self, code: &str) -> AppResult<UserProfile>;
}

/// Generate a random state nonce for the authorization redirect.
pub fn new_state_nonce() -> String {
    use rand::RngExt;
    use rand::distr::Alphanumeric;

    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

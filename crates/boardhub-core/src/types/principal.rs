//! Authenticated principal.

use serde::{Deserialize, Serialize};

/// An authenticated human identity derived from the identity provider's
/// profile.
///
/// A principal is only ever persisted into a session after passing the
/// domain allow-list check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Stable identifier assigned by the identity provider.
    pub external_id: String,
    /// Verified email address the allow-list check admitted.
    pub email: String,
    /// Display name from the provider profile.
    pub display_name: String,
}

impl Principal {
    /// The domain suffix of the principal's email (substring after the
    /// last `@`).
    pub fn email_domain(&self) -> &str {
        self.email.rsplit('@').next().unwrap_or("")
    }
}

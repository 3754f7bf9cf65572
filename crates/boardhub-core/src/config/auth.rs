//! Identity provider configuration and the domain allow-list.

use crate::error::AppError;

use super::EnvLookup;

/// Google OAuth2 settings plus the email-domain allow-list.
///
/// Client id and secret are the only required configuration in the whole
/// system — a broken auth gate is worse than a refused startup.
#[derive(Debug, Clone)]
pub struct GoogleAuthConfig {
    /// OAuth2 client id.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// Redirect URL registered with the provider.
    pub callback_url: String,
    /// Email domains permitted to authenticate (exact, case-sensitive).
    pub allowed_domains: Vec<String>,
}

impl GoogleAuthConfig {
    /// Load provider settings, failing fast when credentials are absent.
    ///
    /// `port` is the configured server port; the default callback URL
    /// points at it so an explicit `GOOGLE_CALLBACK_URL` is only needed
    /// when the process sits behind a proxy.
    pub fn from_lookup(env: &dyn EnvLookup, port: u16) -> Result<Self, AppError> {
        let client_id = env
            .get("GOOGLE_CLIENT_ID")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::configuration("GOOGLE_CLIENT_ID is not set"))?;
        let client_secret = env
            .get("GOOGLE_CLIENT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::configuration("GOOGLE_CLIENT_SECRET is not set"))?;

        let callback_url = env
            .get("GOOGLE_CALLBACK_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}/auth/google/callback"));

        let allowed_domains = match env.get("ALLOWED_DOMAINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from)
                .collect(),
            None => vec![default_allowed_domain()],
        };

        Ok(Self {
            client_id,
            client_secret,
            callback_url,
            allowed_domains,
        })
    }
}

fn default_allowed_domain() -> String {
    "example.com".to_string()
}

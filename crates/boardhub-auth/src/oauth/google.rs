//! Google OAuth2 provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use boardhub_core::config::auth::GoogleAuthConfig;
use boardhub_core::error::{AppError, ErrorKind};
use boardhub_core::result::AppResult;

use super::{IdentityProvider, UserProfile};

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Userinfo endpoint response.
#[derive(Debug, Deserialize)]
struct UserInfo {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Google authorization-code client.
pub struct GoogleProvider {
    http: reqwest::Client,
    config: GoogleAuthConfig,
}

impl GoogleProvider {
    /// Create a provider from auth configuration.
    pub fn new(config: GoogleAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl IdentityProvider for GoogleProvider {
    fn authorize_url(&self, state: &str) -> String {
        // parse_with_params cannot fail on a constant base URL.
        let url = reqwest::Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.config.client_id.as_str()),
                ("redirect_uri", self.config.callback_url.as_str()),
                ("response_type", "code"),
                ("scope", "openid profile email"),
                ("state", state),
            ],
        )
        .unwrap_or_else(|_| reqwest::Url::parse(AUTHORIZE_ENDPOINT).unwrap());
        url.into()
    }

    async fn exchange_code(&self, code: &str) -> AppResult<UserProfile> {
        let token: TokenResponse = self
            .http
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("redirect_uri", self.config.callback_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Token exchange failed", e)
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Token endpoint rejected code", e)
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Malformed token response", e)
            })?;

        let info: UserInfo = self
            .http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Profile fetch failed", e)
            })?
            .error_for_status()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Profile fetch rejected", e)
            })?
            .json()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Malformed profile response", e)
            })?;

        debug!(provider_id = %info.id, "Fetched provider profile");

        Ok(UserProfile {
            provider_id: info.id,
            email: info.email,
            display_name: info.name.unwrap_or_default(),
        })
    }
}

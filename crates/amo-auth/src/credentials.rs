//! Credentials trait and implementation.
//!
//! Credential types implement a custom Debug that redacts tokens.

use chrono::{DateTime, Duration, Utc};

use amocrm_client::{AmoClient, ClientConfig};

use crate::error::{Error, ErrorKind, Result};
use crate::oauth::TokenResponse;

/// Seconds before the real expiry at which a token counts as expired.
const EXPIRY_LEEWAY_SECS: i64 = 60;

/// Trait for amoCRM credentials.
pub trait Credentials: Send + Sync {
    /// Account base URL, e.g. `https://example.amocrm.ru`.
    fn base_url(&self) -> &str;

    /// Get the access token.
    fn access_token(&self) -> &str;

    /// Returns true if the credentials appear to be valid (non-empty).
    fn is_valid(&self) -> bool {
        !self.base_url().is_empty() && !self.access_token().is_empty()
    }
}

/// Standard amoCRM credentials.
#[derive(Clone)]
pub struct AmoCredentials {
    base_url: String,
    access_token: String,
    refresh_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for AmoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmoCredentials")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

impl AmoCredentials {
    /// Create credentials from a base URL and an access token.
    ///
    /// Long-lived tokens issued in the account settings need nothing else.
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            refresh_token: None,
            expires_at: None,
        }
    }

    /// Load credentials from environment variables.
    ///
    /// - `AMOCRM_BASE_URL` (required)
    /// - `AMOCRM_ACCESS_TOKEN` (required)
    /// - `AMOCRM_REFRESH_TOKEN` (optional)
    pub fn from_env() -> Result<Self> {
        let base_url = required_env("AMOCRM_BASE_URL")?;
        let access_token = required_env("AMOCRM_ACCESS_TOKEN")?;

        let mut creds = Self::new(base_url, access_token);
        if let Ok(refresh) = std::env::var("AMOCRM_REFRESH_TOKEN") {
            if !refresh.is_empty() {
                creds = creds.with_refresh_token(refresh);
            }
        }

        url::Url::parse(&creds.base_url).map_err(|e| {
            Error::with_source(
                ErrorKind::InvalidCredentials("AMOCRM_BASE_URL is not a valid URL".to_string()),
                e,
            )
        })?;

        Ok(creds)
    }

    /// Create credentials with a refresh token.
    pub fn with_refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = Some(refresh_token.into());
        self
    }

    /// Set an explicit expiry time.
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Get the refresh token if available.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// When the access token expires, if known.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Returns true if the access token is expired or about to expire.
    ///
    /// Tokens with no known expiry never count as expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|at| Utc::now() + Duration::seconds(EXPIRY_LEEWAY_SECS) >= at)
            .unwrap_or(false)
    }

    /// Replace tokens and expiry with a fresh token response.
    pub fn apply_token(&mut self, token: &TokenResponse) {
        self.access_token = token.access_token.clone();
        self.refresh_token = Some(token.refresh_token.clone());
        self.expires_at = Some(Utc::now() + Duration::seconds(token.expires_in));
    }

    /// Build an authenticated API client for these credentials.
    pub fn client(&self) -> Result<AmoClient> {
        self.client_with_config(ClientConfig::default())
    }

    /// Build an authenticated API client with custom HTTP configuration.
    pub fn client_with_config(&self, config: ClientConfig) -> Result<AmoClient> {
        if self.is_expired() {
            return Err(Error::new(ErrorKind::TokenExpired));
        }
        AmoClient::with_config(&self.base_url, &self.access_token, config).map_err(Into::into)
    }
}

impl Credentials for AmoCredentials {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn access_token(&self) -> &str {
        &self.access_token
    }
}

fn required_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) => Err(Error::new(ErrorKind::EnvVar(format!("{} is empty", name)))),
        Err(e) => Err(Error::with_source(ErrorKind::EnvVar(name.to_string()), e)),
    }
}

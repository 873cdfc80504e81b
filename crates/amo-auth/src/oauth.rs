//! OAuth 2.0 authentication flows.
//!
//! amoCRM integrations use the authorization code grant:
//! - the user approves the integration on the consent page
//!   ([`OAuthClient::authorization_url`]);
//! - the code delivered to the redirect URI is exchanged for a token pair
//!   ([`OAuthClient::exchange_code`]);
//! - the pair is renewed with the refresh token before it expires
//!   ([`OAuthClient::refresh_token`]).
//!
//! Token requests go to the account's own domain
//! (`https://<subdomain>.amocrm.ru/oauth2/access_token`) with a JSON body.

use amocrm_client::security::encode_param;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::credentials::{AmoCredentials, Credentials};
use crate::error::{Error, ErrorKind, Result};
use crate::{AUTHORIZATION_HOST, TOKEN_PATH};

/// OAuth 2.0 configuration for an amoCRM integration.
///
/// `client_secret` is redacted in Debug output.
#[derive(Clone)]
pub struct OAuthConfig {
    /// Integration ID (client_id).
    pub client_id: String,
    client_secret: String,
    /// Redirect URI registered for the integration.
    pub redirect_uri: String,
}

impl std::fmt::Debug for OAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl OAuthConfig {
    /// Create a new OAuth config.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
        }
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

/// OAuth client for authenticating with amoCRM.
#[derive(Clone)]
pub struct OAuthClient {
    config: OAuthConfig,
    authorization_host: String,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClient")
            .field("config", &self.config)
            .field("authorization_host", &self.authorization_host)
            .finish_non_exhaustive()
    }
}

/// Body of a token request.
#[derive(Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    grant_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    redirect_uri: &'a str,
}

impl OAuthClient {
    /// Create a new OAuth client.
    pub fn new(config: OAuthConfig) -> Self {
        Self {
            config,
            authorization_host: AUTHORIZATION_HOST.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Use a different consent host (e.g. `https://www.kommo.com`).
    pub fn with_authorization_host(mut self, host: impl Into<String>) -> Self {
        self.authorization_host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the OAuth config.
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// URL of the consent page the user must visit to approve the integration.
    pub fn authorization_url(&self, state: &str) -> String {
        format!(
            "{}/oauth?client_id={}&state={}&mode=post_message",
            self.authorization_host,
            encode_param(&self.config.client_id),
            encode_param(state),
        )
    }

    /// Exchange an authorization code for tokens.
    ///
    /// The code is not logged.
    #[instrument(skip(self, code))]
    pub async fn exchange_code(&self, code: &str, base_url: &str) -> Result<TokenResponse> {
        let body = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: self.config.client_secret(),
            grant_type: "authorization_code",
            code: Some(code),
            refresh_token: None,
            redirect_uri: &self.config.redirect_uri,
        };
        self.request_token(base_url, &body).await
    }

    /// Refresh an access token using a refresh token.
    ///
    /// The refresh token is not logged.
    #[instrument(skip(self, refresh_token))]
    pub async fn refresh_token(&self, refresh_token: &str, base_url: &str) -> Result<TokenResponse> {
        let body = TokenRequest {
            client_id: &self.config.client_id,
            client_secret: self.config.client_secret(),
            grant_type: "refresh_token",
            code: None,
            refresh_token: Some(refresh_token),
            redirect_uri: &self.config.redirect_uri,
        };
        self.request_token(base_url, &body).await
    }

    /// Refresh `credentials` in place.
    pub async fn refresh_credentials(&self, credentials: &mut AmoCredentials) -> Result<()> {
        let refresh_token = credentials
            .refresh_token()
            .ok_or_else(|| Error::new(ErrorKind::TokenExpired))?
            .to_string();
        let token = self
            .refresh_token(&refresh_token, credentials.base_url())
            .await?;
        credentials.apply_token(&token);
        Ok(())
    }

    async fn request_token(&self, base_url: &str, body: &TokenRequest<'_>) -> Result<TokenResponse> {
        let url = url::Url::parse(base_url)?.join(TOKEN_PATH)?;

        let response = self.http_client.post(url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let error = serde_json::from_str::<OAuthErrorResponse>(&text).unwrap_or_default();
            return Err(Error::new(ErrorKind::OAuth {
                title: error.title.unwrap_or_else(|| format!("HTTP {}", status)),
                detail: error
                    .hint
                    .or(error.detail)
                    .unwrap_or_else(|| "token request rejected".to_string()),
            }));
        }

        let token: TokenResponse = response.json().await?;
        Ok(token)
    }
}

/// Token response from the amoCRM token endpoint.
///
/// `access_token` and `refresh_token` are redacted in Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Token type (always "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Lifetime of the access token, in seconds.
    pub expires_in: i64,
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenResponse")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

impl TokenResponse {
    /// Convert to credentials for the account at `base_url`.
    ///
    /// The expiry is computed from `expires_in` relative to now.
    pub fn to_credentials(&self, base_url: &str) -> AmoCredentials {
        let mut creds = AmoCredentials::new(base_url, &self.access_token);
        creds.apply_token(self);
        creds
    }
}

/// OAuth error response (problem+json).
#[derive(Debug, Default, Deserialize)]
struct OAuthErrorResponse {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

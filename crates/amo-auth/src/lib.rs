//! # amocrm-auth
//!
//! amoCRM authentication library built around the OAuth 2.0 authorization
//! code grant used by amoCRM integrations.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Supported Flows
//!
//! - **Authorization code exchange** - trade the code from the integration
//!   redirect for an access/refresh token pair
//! - **Refresh token** - obtain a fresh pair before the access token expires
//! - **Long-lived token** - use a token issued in the account settings via
//!   [`AmoCredentials::new`] or [`AmoCredentials::from_env`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use amocrm_auth::{AmoCredentials, OAuthClient, OAuthConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), amocrm_auth::Error> {
//!     let oauth = OAuthClient::new(
//!         OAuthConfig::new("client-id", "client-secret", "https://example.com/callback"),
//!     );
//!
//!     let token = oauth
//!         .exchange_code("authorization-code", "https://example.amocrm.ru")
//!         .await?;
//!     let creds = token.to_credentials("https://example.amocrm.ru");
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod oauth;
mod storage;

pub use credentials::{AmoCredentials, Credentials};
pub use error::{Error, ErrorKind, Result};
pub use oauth::{OAuthClient, OAuthConfig, TokenResponse};
pub use storage::{FileTokenStorage, StoredToken, TokenStorage};

/// Host that renders the integration consent page.
pub const AUTHORIZATION_HOST: &str = "https://www.amocrm.ru";

/// Token endpoint path, relative to the account base URL.
pub const TOKEN_PATH: &str = "/oauth2/access_token";

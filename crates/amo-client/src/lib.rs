//! # amocrm-client
//!
//! Core HTTP client infrastructure for the amoCRM REST API (v4).
//!
//! This crate provides the transport every endpoint crate builds on:
//! - Request building with bearer authentication
//! - Compression support (gzip, deflate)
//! - amoCRM problem+json error decoding
//! - `_embedded` envelope decoding for collection responses
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (amocrm-rest: leads, contacts, tasks, ...)                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       AmoClient                             │
//! │  - Holds account base URL + access token                    │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     AmoHttpClient                           │
//! │  - Raw HTTP with compression and error mapping              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use amocrm_client::{AmoClient, EmbeddedPage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), amocrm_client::Error> {
//!     let client = AmoClient::new("https://example.amocrm.ru", "access_token")?;
//!
//!     let page: EmbeddedPage<serde_json::Value> = client
//!         .get_page(&client.api_url("leads"), "leads", &[("limit".into(), "10".into())])
//!         .await?;
//!
//!     for lead in page.items() {
//!         println!("{}", lead["name"]);
//!     }
//!     Ok(())
//! }
//! ```

mod amo_client;
mod client;
mod config;
mod envelope;
mod error;
mod request;
mod response;
pub mod security;

pub use amo_client::AmoClient;
pub use client::AmoHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use envelope::{EmbeddedPage, Link, Links};
pub use error::{Error, ErrorKind, Result, ValidationError};
pub use request::{RequestBody, RequestBuilder, RequestMethod};
pub use response::{Response, ResponseExt};

/// amoCRM REST API version used in `/api/v{N}/` paths.
pub const DEFAULT_API_VERSION: u32 = 4;

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("amocrm-api/", env!("CARGO_PKG_VERSION"));

//! # amocrm-api
//!
//! An amoCRM API client library for Rust.
//!
//! The core of the library turns a list URL copied from the amoCRM web UI
//! (`https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2`) into
//! the entity type, pagination and filter parameters of an API list call.
//!
//! ## Security
//!
//! - Sensitive data (tokens, secrets) are redacted in Debug output
//! - Tracing/logging skips credential parameters
//! - Error messages sanitize any credential data
//!
//! ## Crates
//!
//! - **amocrm-filters** - List URL parsing and entity-specific filter validation
//! - **amocrm-client** - Core HTTP client: bearer auth, compression, problem+json errors
//! - **amocrm-auth** - OAuth 2.0 code exchange and refresh, credentials, token storage
//! - **amocrm-rest** - REST API v4: leads, contacts, companies, tasks, notes, ...
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use amocrm_api::{AmoCredentials, AmoRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // AMOCRM_BASE_URL / AMOCRM_ACCESS_TOKEN
//!     let creds = AmoCredentials::from_env()?;
//!     let client = AmoRestClient::from_credentials(&creds)?;
//!
//!     let leads = client
//!         .list_leads_from_url("https://example.amocrm.ru/leads/list/?filter[name]=Test")
//!         .await?;
//!
//!     for lead in leads.items() {
//!         println!("{:?}", lead.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Parsing alone needs no network:
//!
//! ```
//! let descriptor = amocrm_api::filters::parse(
//!     "https://example.amocrm.ru/contacts/list/?filter[name]=Test&limit=10",
//! )
//! .unwrap();
//!
//! assert_eq!(descriptor.entity_type(), "contacts");
//! assert_eq!(descriptor.limit(), "10");
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use amocrm_auth as auth;
#[cfg(feature = "client")]
pub use amocrm_client as client;
pub use amocrm_filters as filters;
#[cfg(feature = "rest")]
pub use amocrm_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use amocrm_auth::{AmoCredentials, Credentials};
#[cfg(feature = "client")]
pub use amocrm_client::{AmoClient, ClientConfig};
pub use amocrm_filters::{Entity, EntityFilter, FilterDescriptor, FilterError};
#[cfg(feature = "rest")]
pub use amocrm_rest::{AmoRestClient, ListOptions};

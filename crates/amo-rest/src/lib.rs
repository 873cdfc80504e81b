//! # amocrm-rest
//!
//! amoCRM REST API v4 client for the CRM entities.
//!
//! ## Features
//!
//! - **Leads, contacts, companies, customers** - list, get and batch create/update
//! - **List URLs** - run a list request straight from a web UI list URL
//!   (`/leads/list/?filter[...]`), see [`AmoRestClient::list_leads_from_url`]
//! - **Tasks, notes, tags, calls** - the activity around entities
//! - **Catalogs, pipelines, users, events, webhooks** - account structure and feeds
//!
//! ## Example
//!
//! ```rust,ignore
//! use amocrm_rest::{AmoRestClient, ListOptions, SortDirection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), amocrm_rest::Error> {
//!     let client = AmoRestClient::new("https://example.amocrm.ru", "access_token_here")?;
//!
//!     let leads = client
//!         .list_leads(
//!             &ListOptions::new()
//!                 .with_limit(50)
//!                 .with_order("created_at", SortDirection::Desc),
//!         )
//!         .await?;
//!
//!     for lead in leads.items() {
//!         println!("{:?} {:?}", lead.id, lead.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod options;
mod types;

// Main client
pub use client::AmoRestClient;

// Error types
pub use error::{Error, ErrorKind, Result};

// List options
pub use options::{ListOptions, SortDirection, MAX_LIMIT};

// Entity models
pub use types::*;

// Re-export types that users might need
pub use amocrm_client::{ClientConfig, ClientConfigBuilder, EmbeddedPage};
pub use amocrm_filters::{Entity, EntityFilter};

//! # amocrm-filters
//!
//! Translates amoCRM web UI list-page URLs into the filter parameters the
//! REST API expects.
//!
//! A user filtering deals in the browser ends up on a URL such as
//! `https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2`. This
//! crate turns that URL into:
//!
//! - a [`FilterDescriptor`]: entity type, page, limit and the `filter…`
//!   query parameters, entity-agnostic and string-typed;
//! - an [`EntityFilter`]: the same descriptor pinned to one expected
//!   [`Entity`], with page and limit converted to integers.
//!
//! Parsing is pure and synchronous. Nothing here performs I/O.
//!
//! ## Example
//!
//! ```rust
//! use amocrm_filters::{EntityFilter, Entity};
//!
//! let filter = EntityFilter::for_entity(
//!     "https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2&limit=25",
//!     Entity::Leads,
//! )?;
//!
//! assert_eq!(filter.page(), 2);
//! assert_eq!(filter.limit(), 25);
//! assert_eq!(filter.as_filter_map().get("filter[name]").map(String::as_str), Some("Test"));
//! # Ok::<(), amocrm_filters::FilterError>(())
//! ```

mod adapter;
mod entity;
mod error;
mod parser;

pub use adapter::EntityFilter;
pub use entity::{canonical_entity, Entity};
pub use error::{FilterError, PaginationField, Result};
pub use parser::{parse, FilterDescriptor, DEFAULT_LIMIT, DEFAULT_PAGE, FILTER_PREFIX};

//! `_embedded` collection envelope.
//!
//! amoCRM wraps every collection like this:
//!
//! ```json
//! {
//!   "_page": 2,
//!   "_links": {"self": {"href": "..."}, "next": {"href": "..."}},
//!   "_embedded": {"leads": [ ... ]}
//! }
//! ```
//!
//! and answers `204 No Content` when the collection is empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};

/// A hypermedia link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    pub href: String,
}

/// Links attached to a collection page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub current: Option<Link>,
    #[serde(default)]
    pub next: Option<Link>,
    #[serde(default)]
    pub prev: Option<Link>,
}

/// One page of an `_embedded` collection.
#[derive(Debug, Clone)]
pub struct EmbeddedPage<T> {
    page: Option<u32>,
    links: Links,
    items: Vec<T>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(rename = "_page", default)]
    page: Option<u32>,
    #[serde(rename = "_links", default)]
    links: Links,
    #[serde(rename = "_embedded", default)]
    embedded: serde_json::Map<String, serde_json::Value>,
}

impl<T> EmbeddedPage<T> {
    /// An empty page (what a 204 response decodes to).
    pub fn empty() -> Self {
        Self {
            page: None,
            links: Links::default(),
            items: Vec::new(),
        }
    }

    /// Page number echoed by the server.
    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn links(&self) -> &Links {
        &self.links
    }

    /// The `_links.next.href` value, if another page exists.
    pub fn next_href(&self) -> Option<&str> {
        self.links.next.as_ref().map(|l| l.href.as_str())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: DeserializeOwned> EmbeddedPage<T> {
    /// Decode an envelope, taking the items stored under `_embedded.<key>`.
    ///
    /// A missing key yields an empty page rather than an error.
    pub fn from_value(value: serde_json::Value, key: &str) -> Result<Self> {
        let mut raw: RawEnvelope = serde_json::from_value(value)?;

        let items = match raw.embedded.remove(key) {
            Some(serde_json::Value::Array(values)) => values
                .into_iter()
                .map(serde_json::from_value)
                .collect::<std::result::Result<Vec<T>, _>>()?,
            Some(serde_json::Value::Null) | None => Vec::new(),
            Some(_) => {
                return Err(Error::new(ErrorKind::Json(format!(
                    "_embedded.{} is not an array",
                    key
                ))))
            }
        };

        Ok(Self {
            page: raw.page,
            links: raw.links,
            items,
        })
    }
}

impl<T> Default for EmbeddedPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> IntoIterator for EmbeddedPage<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

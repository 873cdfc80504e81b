//! Generic list URL parser.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::entity::canonical_entity;
use crate::error::{FilterError, Result};

/// Page used when the URL has no `page` parameter.
pub const DEFAULT_PAGE: &str = "1";

/// Limit used when the URL has no `limit` parameter.
pub const DEFAULT_LIMIT: &str = "50";

/// Query keys starting with this prefix are treated as filters.
pub const FILTER_PREFIX: &str = "filter";

/// Base that relative inputs (bare paths) are resolved against.
const PLACEHOLDER_BASE: &str = "http://localhost/";

/// `/<name>/list/` where `<name>` is lowercase letters and underscores.
/// A list route at the very end of the path (`/leads/list`) also matches.
static LIST_ROUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/([a-z_]+)/list(?:/|$)").expect("list route pattern is valid")
});

/// Entity-agnostic result of parsing a web UI list URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    entity_type: String,
    page: String,
    limit: String,
    filters: BTreeMap<String, String>,
    raw_query: String,
}

impl FilterDescriptor {
    /// Canonical entity type, e.g. `"leads"`.
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Page as it appeared in the URL, or [`DEFAULT_PAGE`].
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Limit as it appeared in the URL, or [`DEFAULT_LIMIT`].
    pub fn limit(&self) -> &str {
        &self.limit
    }

    /// `filter…` query parameters, percent-decoded.
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// The query string exactly as it appeared in the input.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// Consume the descriptor, returning the filter map.
    pub fn into_filters(self) -> BTreeMap<String, String> {
        self.filters
    }
}

/// Parse a web UI list URL into a [`FilterDescriptor`].
///
/// Absolute URLs are parsed as-is. Relative inputs (`/leads/list/?page=2`)
/// are resolved against a placeholder host, so a string such as
/// `"invalid-url"` becomes the path `/invalid-url` and fails with
/// [`FilterError::UnknownEntity`]. Anything the URL parser rejects outright
/// fails with [`FilterError::InvalidUrl`].
///
/// When a `filter…` key repeats, only its first value is kept.
///
/// # Example
///
/// ```rust
/// let descriptor = amocrm_filters::parse(
///     "https://example.amocrm.ru/contacts/list/?filter[name]=Иван",
/// )?;
///
/// assert_eq!(descriptor.entity_type(), "contacts");
/// assert_eq!(descriptor.page(), "1");
/// assert_eq!(descriptor.limit(), "50");
/// assert_eq!(descriptor.filters()["filter[name]"], "Иван");
/// # Ok::<(), amocrm_filters::FilterError>(())
/// ```
pub fn parse(raw_url: &str) -> Result<FilterDescriptor> {
    let url = parse_url(raw_url)?;

    let path = url.path();
    let name = list_route_name(path).ok_or_else(|| FilterError::UnknownEntity {
        path: path.to_string(),
    })?;
    let entity_type = canonical_entity(name).to_string();

    let mut page = None;
    let mut limit = None;
    let mut filters = BTreeMap::new();

    for (key, value) in url.query_pairs() {
        if key == "page" {
            page.get_or_insert_with(|| value.into_owned());
        } else if key == "limit" {
            limit.get_or_insert_with(|| value.into_owned());
        } else if key.starts_with(FILTER_PREFIX) {
            filters
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }

    let descriptor = FilterDescriptor {
        entity_type,
        page: page.unwrap_or_else(|| DEFAULT_PAGE.to_string()),
        limit: limit.unwrap_or_else(|| DEFAULT_LIMIT.to_string()),
        filters,
        raw_query: raw_query(raw_url).to_string(),
    };

    debug!(
        entity_type = %descriptor.entity_type,
        page = %descriptor.page,
        limit = %descriptor.limit,
        filters = descriptor.filters.len(),
        "Parsed list URL"
    );

    Ok(descriptor)
}

fn parse_url(raw_url: &str) -> Result<Url> {
    let invalid = |source| FilterError::InvalidUrl {
        url: raw_url.to_string(),
        source,
    };

    match Url::parse(raw_url) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(PLACEHOLDER_BASE)
            .and_then(|base| base.join(raw_url))
            .map_err(invalid),
        Err(err) => Err(invalid(err)),
    }
}

/// Name captured by the first list route in `path`.
pub(crate) fn list_route_name(path: &str) -> Option<&str> {
    LIST_ROUTE
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The path [`parse`] matches list routes against.
///
/// When the input does not parse as a URL, falls back to the raw text with
/// scheme, authority, query and fragment removed.
pub(crate) fn route_path(raw_url: &str) -> String {
    if let Ok(url) = parse_url(raw_url) {
        return url.path().to_string();
    }

    let head = raw_url.split(['?', '#']).next().unwrap_or(raw_url);
    let path = match head.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |start| &rest[start..]),
        None => head,
    };

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Text between the first `?` and the fragment, if any.
fn raw_query(raw_url: &str) -> &str {
    let without_fragment = raw_url.split_once('#').map_or(raw_url, |(head, _)| head);
    without_fragment
        .split_once('?')
        .map_or("", |(_, query)| query)
}

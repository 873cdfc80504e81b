//! List request options.
//!
//! amoCRM list endpoints share one set of query parameters:
//! `page`, `limit`, `with`, `query`, `order[<field>]` and `filter[...]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use amocrm_rest::{ListOptions, SortDirection};
//!
//! let options = ListOptions::new()
//!     .with_limit(50)
//!     .with_filter("filter[statuses][0][pipeline_id]", "3166183")
//!     .with_relation("contacts")
//!     .with_order("created_at", SortDirection::Desc);
//! ```

use std::collections::BTreeMap;

use amocrm_filters::EntityFilter;

/// Maximum page size accepted by amoCRM list endpoints.
pub const MAX_LIMIT: u32 = 250;

/// Sort direction for `order[<field>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Options for list endpoints.
///
/// Every field is optional; unset fields are left out of the query string
/// and the server defaults apply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Filter parameters with their full keys (`filter[name]`, ...).
    pub filters: BTreeMap<String, String>,
    /// Related data to embed (`contacts`, `loss_reason`, ...).
    pub with: Vec<String>,
    /// Full-text search.
    pub query: Option<String>,
    pub order: Option<(String, SortDirection)>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the page, limit and filters of a parsed list URL.
    ///
    /// The limit is capped at [`MAX_LIMIT`] like [`with_limit`](Self::with_limit).
    pub fn from_entity_filter(filter: &EntityFilter) -> Self {
        Self {
            page: Some(filter.page()),
            filters: filter.as_filter_map().clone(),
            ..Self::default()
        }
        .with_limit(filter.limit())
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size, capped at [`MAX_LIMIT`].
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit.min(MAX_LIMIT));
        self
    }

    /// Add a filter parameter. The key is used as-is.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.with.push(relation.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_order(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some((field.into(), direction));
        self
    }

    /// Render the options as query parameters.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();

        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if !self.with.is_empty() {
            pairs.push(("with".to_string(), self.with.join(",")));
        }
        if let Some(query) = &self.query {
            pairs.push(("query".to_string(), query.clone()));
        }
        if let Some((field, direction)) = &self.order {
            pairs.push((format!("order[{}]", field), direction.as_str().to_string()));
        }
        for (key, value) in &self.filters {
            pairs.push((key.clone(), value.clone()));
        }

        pairs
    }
}

impl From<&EntityFilter> for ListOptions {
    fn from(filter: &EntityFilter) -> Self {
        Self::from_entity_filter(filter)
    }
}

//! Error types for amocrm-filters.

use std::num::ParseIntError;

/// Result type alias for filter parsing.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Which pagination parameter failed to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationField {
    Page,
    Limit,
}

impl std::fmt::Display for PaginationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationField::Page => f.write_str("page"),
            PaginationField::Limit => f.write_str("limit"),
        }
    }
}

/// Error raised while translating a list URL.
///
/// Every variant is terminal: parsing either fully succeeds or fails with
/// one of these.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The input is not a parseable URL.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The path does not look like `/<name>/list/`.
    #[error("Unknown entity: path '{path}' is not an entity list route")]
    UnknownEntity { path: String },

    /// The path is not the list route of the expected entity.
    #[error("Wrong entity: expected a '{expected}' list route, got '{path}'")]
    WrongEntity { expected: String, path: String },

    /// The parser and the adapter disagree on the entity type.
    ///
    /// Indicates a bug in the entity table, not bad input.
    #[error("Internal mismatch: expected entity '{expected}', parser produced '{actual}'")]
    InternalMismatch { expected: String, actual: String },

    /// `page` or `limit` is not a positive integer.
    #[error("Invalid pagination: {field} '{value}' is not a positive integer: {source}")]
    InvalidPagination {
        field: PaginationField,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FilterError {
    /// Returns true if the error points at a programming error rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, FilterError::InternalMismatch { .. })
    }
}

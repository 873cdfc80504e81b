//! Entity-specialized view over a parsed list URL.

use std::collections::BTreeMap;
use std::num::NonZeroU32;

use tracing::warn;

use crate::entity::Entity;
use crate::error::{FilterError, PaginationField, Result};
use crate::parser::{list_route_name, parse, route_path, FilterDescriptor};

/// A list URL validated against one expected entity.
///
/// Page and limit are converted to integers; the filter map is handed to a
/// list endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityFilter {
    entity: Entity,
    descriptor: FilterDescriptor,
    page: u32,
    limit: u32,
}

impl EntityFilter {
    /// Parse `raw_url`, requiring it to be the list route of `expected`.
    ///
    /// The first `/<name>/list` route of the URL path must name `expected`;
    /// otherwise the call fails with [`FilterError::WrongEntity`]. Scheme,
    /// host, query and fragment never count. The check also runs on input
    /// the URL parser would reject, so a foreign route is reported as
    /// `WrongEntity` rather than [`FilterError::InvalidUrl`].
    pub fn for_entity(raw_url: &str, expected: Entity) -> Result<Self> {
        let path = route_path(raw_url);
        if list_route_name(&path) != Some(expected.path_segment()) {
            return Err(FilterError::WrongEntity {
                expected: expected.as_str().to_string(),
                path,
            });
        }

        let descriptor = parse(raw_url)?;

        if descriptor.entity_type() != expected.as_str() {
            warn!(
                expected = %expected,
                actual = descriptor.entity_type(),
                "Entity table disagrees with list route check"
            );
            return Err(FilterError::InternalMismatch {
                expected: expected.as_str().to_string(),
                actual: descriptor.entity_type().to_string(),
            });
        }

        let page = to_int(PaginationField::Page, descriptor.page())?;
        let limit = to_int(PaginationField::Limit, descriptor.limit())?;

        Ok(Self {
            entity: expected,
            descriptor,
            page,
            limit,
        })
    }

    /// Parse a leads list URL.
    pub fn leads(raw_url: &str) -> Result<Self> {
        Self::for_entity(raw_url, Entity::Leads)
    }

    /// Parse a contacts list URL.
    pub fn contacts(raw_url: &str) -> Result<Self> {
        Self::for_entity(raw_url, Entity::Contacts)
    }

    /// Parse a companies list URL.
    pub fn companies(raw_url: &str) -> Result<Self> {
        Self::for_entity(raw_url, Entity::Companies)
    }

    /// Parse a customers list URL.
    pub fn customers(raw_url: &str) -> Result<Self> {
        Self::for_entity(raw_url, Entity::Customers)
    }

    /// Parse a tasks list URL.
    pub fn tasks(raw_url: &str) -> Result<Self> {
        Self::for_entity(raw_url, Entity::Tasks)
    }

    pub fn entity(&self) -> Entity {
        self.entity
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The underlying string-typed descriptor.
    pub fn descriptor(&self) -> &FilterDescriptor {
        &self.descriptor
    }

    /// Filter parameters for a list call, verbatim.
    pub fn as_filter_map(&self) -> &BTreeMap<String, String> {
        self.descriptor.filters()
    }
}

/// Positive integer; `0` is rejected for both fields.
fn to_int(field: PaginationField, value: &str) -> Result<u32> {
    value
        .parse::<NonZeroU32>()
        .map(NonZeroU32::get)
        .map_err(|source| FilterError::InvalidPagination {
            field,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_filter_scenario() {
        let filter = EntityFilter::for_entity(
            "https://example.amocrm.ru/leads/list/?filter[name]=Test&page=2&limit=25",
            Entity::Leads,
        )
        .unwrap();

        assert_eq!(filter.entity(), Entity::Leads);
        assert_eq!(filter.page(), 2);
        assert_eq!(filter.limit(), 25);

        let expected: BTreeMap<String, String> =
            [("filter[name]".to_string(), "Test".to_string())].into();
        assert_eq!(filter.as_filter_map(), &expected);
    }

    #[test]
    fn test_defaults_convert_to_integers() {
        let filter = EntityFilter::leads("https://example.amocrm.ru/leads/list/").unwrap();
        assert_eq!(filter.page(), 1);
        assert_eq!(filter.limit(), 50);
        assert!(filter.as_filter_map().is_empty());
    }

    #[test]
    fn test_other_entity_route_is_wrong_entity() {
        let url = "https://example.amocrm.ru/contacts/list/?filter[name]=Test";

        // The generic parser accepts it...
        assert!(parse(url).is_ok());

        // ...but the leads adapter rejects it.
        let err = EntityFilter::leads(url).unwrap_err();
        match err {
            FilterError::WrongEntity { expected, path } => {
                assert_eq!(expected, "leads");
                assert_eq!(path, "/contacts/list/");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_route_check_ignores_query_string() {
        let err = EntityFilter::leads("https://example.amocrm.ru/contacts/list/?back=/leads/list/")
            .unwrap_err();
        assert!(matches!(err, FilterError::WrongEntity { .. }));
    }

    #[test]
    fn test_route_lookalikes_are_wrong_entity() {
        for url in [
            "https://example.amocrm.ru/leads/lists/contacts/list/",
            "https://example.amocrm.ru/leads/list_archive/list/",
            "https://leads/list/contacts/list/",
            "https://example.amocrm.ru/contacts/list/leads/list/",
            "https://example.amocrm.ru/leads/list/../../contacts/list/",
            "https://example.amocrm.ru/leads/listing",
        ] {
            let err = EntityFilter::leads(url).unwrap_err();
            assert!(matches!(err, FilterError::WrongEntity { .. }), "{url}: {err:?}");
            assert!(!err.is_internal(), "{url}");
        }
    }

    #[test]
    fn test_earliest_list_route_decides() {
        let filter =
            EntityFilter::leads("https://example.amocrm.ru/leads/list/contacts/list/?page=2")
                .unwrap();
        assert_eq!(filter.entity(), Entity::Leads);
        assert_eq!(filter.page(), 2);
    }

    #[test]
    fn test_relative_list_path_is_accepted() {
        let filter = EntityFilter::leads("leads/list/?limit=10").unwrap();
        assert_eq!(filter.limit(), 10);

        assert!(EntityFilter::tasks("/tasks/list").is_ok());
    }

    #[test]
    fn test_wrong_entity_precedes_url_validation() {
        let err = EntityFilter::leads("invalid-url").unwrap_err();
        assert!(matches!(err, FilterError::WrongEntity { .. }));

        let err = EntityFilter::leads("http://exa mple.com/contacts/list/").unwrap_err();
        assert!(matches!(err, FilterError::WrongEntity { .. }));
    }

    #[test]
    fn test_malformed_url_with_matching_route_is_invalid_url() {
        let err = EntityFilter::leads("http://exa mple.com/leads/list/").unwrap_err();
        assert!(matches!(err, FilterError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_numeric_page_is_invalid_pagination() {
        let url = "https://example.amocrm.ru/leads/list/?page=abc";
        assert_eq!(parse(url).unwrap().page(), "abc");

        let err = EntityFilter::leads(url).unwrap_err();
        match err {
            FilterError::InvalidPagination { field, value, .. } => {
                assert_eq!(field, PaginationField::Page);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_limit_is_invalid_pagination() {
        let err = EntityFilter::leads("https://example.amocrm.ru/leads/list/?limit=-5").unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidPagination {
                field: PaginationField::Limit,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_page_or_limit_is_invalid_pagination() {
        let err = EntityFilter::leads("https://example.amocrm.ru/leads/list/?page=0").unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidPagination {
                field: PaginationField::Page,
                ..
            }
        ));

        let err = EntityFilter::leads("https://example.amocrm.ru/leads/list/?limit=0").unwrap_err();
        match err {
            FilterError::InvalidPagination { field, value, .. } => {
                assert_eq!(field, PaginationField::Limit);
                assert_eq!(value, "0");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_typed_constructors() {
        let filter = EntityFilter::contacts("https://x.amocrm.ru/contacts/list/?limit=10").unwrap();
        assert_eq!(filter.entity(), Entity::Contacts);
        assert_eq!(filter.limit(), 10);

        assert!(EntityFilter::companies("https://x.amocrm.ru/companies/list/").is_ok());
        assert!(EntityFilter::customers("https://x.amocrm.ru/customers/list/").is_ok());
        assert!(EntityFilter::tasks("https://x.amocrm.ru/tasks/list/").is_ok());
        assert!(EntityFilter::for_entity("https://x.amocrm.ru/catalogs/list/", Entity::Catalogs).is_ok());
    }

    #[test]
    fn test_descriptor_is_exposed() {
        let filter =
            EntityFilter::leads("https://example.amocrm.ru/leads/list/?filter[name]=Test").unwrap();
        assert_eq!(filter.descriptor().raw_query(), "filter[name]=Test");
        assert_eq!(filter.descriptor().entity_type(), "leads");
    }
}

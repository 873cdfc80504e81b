use amocrm_api::filters::{parse, PaginationField};
use amocrm_api::{Entity, EntityFilter, FilterError};

#[test]
fn test_filters_bare_list_url_uses_defaults() {
    let descriptor = parse("https://example.amocrm.ru/leads/list/").unwrap();

    assert_eq!(descriptor.entity_type(), "leads");
    assert_eq!(descriptor.page(), "1");
    assert_eq!(descriptor.limit(), "50");
    assert!(descriptor.filters().is_empty());
}

#[test]
fn test_filters_every_entity_route() {
    for entity in Entity::ALL {
        let url = format!("https://example.amocrm.ru/{}/list/?page=3", entity);
        let descriptor = parse(&url).unwrap();
        assert_eq!(descriptor.entity_type(), entity.as_str());

        let filter = EntityFilter::for_entity(&url, entity).unwrap();
        assert_eq!(filter.entity(), entity);
        assert_eq!(filter.page(), 3);
    }
}

#[test]
fn test_filters_descriptor_vs_adapter_on_bad_page() {
    let url = "https://example.amocrm.ru/leads/list/?page=abc";

    assert_eq!(parse(url).unwrap().page(), "abc");

    match EntityFilter::leads(url).unwrap_err() {
        FilterError::InvalidPagination { field, value, .. } => {
            assert_eq!(field, PaginationField::Page);
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_filters_wrong_entity() {
    let err = EntityFilter::leads("https://example.amocrm.ru/contacts/list/?filter[name]=x").unwrap_err();
    assert!(matches!(err, FilterError::WrongEntity { ref expected, .. } if expected == "leads"));
}

#[test]
fn test_filters_error_inputs() {
    assert!(matches!(
        parse("invalid-url").unwrap_err(),
        FilterError::UnknownEntity { .. }
    ));
    assert!(matches!(
        parse("http://exa mple.com/leads/list/").unwrap_err(),
        FilterError::InvalidUrl { .. }
    ));
    assert!(matches!(
        parse("https://example.amocrm.ru/dashboard/").unwrap_err(),
        FilterError::UnknownEntity { .. }
    ));
}

#[test]
fn test_filters_complex_filter_keys_survive() {
    let url = "https://example.amocrm.ru/leads/list/?filter%5Bstatuses%5D%5B0%5D%5Bpipeline_id%5D=3166183&filter%5Bstatuses%5D%5B0%5D%5Bstatus_id%5D=142&useFilter=y";
    let filter = EntityFilter::leads(url).unwrap();
    let filters = filter.as_filter_map();

    assert_eq!(filters.len(), 2);
    assert_eq!(filters["filter[statuses][0][pipeline_id]"], "3166183");
    assert_eq!(filters["filter[statuses][0][status_id]"], "142");
}

#[test]
fn test_filters_lookalike_routes_never_report_internal_mismatch() {
    for url in [
        "https://example.amocrm.ru/leads/lists/contacts/list/",
        "https://example.amocrm.ru/leads/list_archive/list/",
        "https://leads/list/contacts/list/",
    ] {
        let err = EntityFilter::leads(url).unwrap_err();
        assert!(matches!(err, FilterError::WrongEntity { .. }), "{url}: {err}");
    }
}

//! End-to-end composition tests against a merged configuration.
//!
//! Comparisons run on whitespace-stripped text via `clean`, mirroring how
//! the composed queries are consumed.

use strata_config::KitConfigBuilder;
use strata_core::{Capability, Entity, KitConfig, Language, Module};
use strata_query::{
    clean, content_type_query, entity_query, is_valid_projection, settings_query, slug_filter,
    static_slugs_query, taxonomy_query, QueryError,
};

fn default_config() -> KitConfig {
    KitConfigBuilder::new().build().unwrap()
}

#[test]
fn test_page_by_single_slug() {
    let query = content_type_query(&default_config(), "page", &["about"], None, None).unwrap();
    assert!(query.starts_with("*[_type == \"page\" && slug.current == \"about\"][0]"));
    assert!(is_valid_projection(query.split("[0]").nth(1).unwrap()));
}

#[test]
fn test_page_by_nested_slug_chain() {
    // Segments arrive root to leaf and are reversed into the filter.
    let query =
        content_type_query(&default_config(), "page", &["about", "team"], None, None).unwrap();
    assert!(query
        .contains("slug.current == \"team\" && parent->slug.current == \"about\""));
}

#[test]
fn test_page_full_query_literal() {
    let config = KitConfigBuilder::new().max_parent_depth(2).build().unwrap();
    let query = content_type_query(&config, "page", &["about"], None, None).unwrap();

    assert_eq!(
        clean(&query),
        "*[_type==\"page\"&&slug.current==\"about\"][0]\
         {_id,_type,\"title\":title,\"slug\":slug,\"seo\":seo,\
         \"modules\":modules[]{...,_type==\"kit.preset\"=>@->{\"data\":modules[]{...}}},\
         \"parent\":parent->{_type,_id,title,slug,\"parent\":parent->{_type,_id,title,slug}}}"
    );
}

#[test]
fn test_translated_entity_projection() {
    // A translatable entity supporting only title and seo projects exactly
    // those two, rewritten to the active language.
    let config = KitConfigBuilder::new()
        .entity(
            Entity::new("home", "Home")
                .with_supports([Capability::Title, Capability::Seo])
                .translatable(),
        )
        .language(Language::new("en", "English"))
        .build()
        .unwrap();

    let query = entity_query(&config, "home", Some("en"), None).unwrap();
    let cleaned = clean(&query);

    assert!(cleaned.contains("\"title\":title.en"));
    assert!(cleaned.contains("\"seo\":seo.en"));
    assert!(!cleaned.contains("slug"));
    assert!(!cleaned.contains("body"));
    assert!(!cleaned.contains("modules"));
}

#[test]
fn test_unknown_settings_group_is_fatal() {
    let error = settings_query(&default_config(), Some("doesNotExist"), None).unwrap_err();
    assert!(error.to_string().contains("doesNotExist"));
    assert!(matches!(error, QueryError::UnknownSettingsGroup(_)));
}

#[test]
fn test_malformed_module_query_is_fatal() {
    let config = KitConfigBuilder::new()
        .module(Module::new("module.broken", "Broken").with_query(|_| "title".to_string()))
        .build()
        .unwrap();

    // `page` supports modules, so the malformed hook surfaces through the
    // content type assembler.
    let error = content_type_query(&config, "page", &["about"], None, None).unwrap_err();
    assert!(matches!(error, QueryError::InvalidModuleQuery { module } if module == "module.broken"));
}

#[test]
fn test_language_round_trip_when_translation_disabled() {
    // No languages configured: a requested language must not leak anywhere.
    let config = default_config();

    for slugs in [vec!["about"], vec!["about", "team"]] {
        let plain = content_type_query(&config, "page", &slugs, None, None).unwrap();
        let requested = content_type_query(&config, "page", &slugs, Some("en"), None).unwrap();
        assert_eq!(plain, requested);
    }

    let plain = taxonomy_query(&config, "category", &["news"], None, None).unwrap();
    let requested = taxonomy_query(&config, "category", &["news"], Some("en"), None).unwrap();
    assert_eq!(plain, requested);
}

#[test]
fn test_slug_filter_clause_depths() {
    let filter = slug_filter(&["c", "b", "a"], None);

    // Leaf clause carries no dereference; ancestor k is addressed through
    // exactly k repetitions of `parent->`.
    assert_eq!(
        filter,
        "&& slug.current == \"c\" \
         && parent->slug.current == \"b\" \
         && parent->parent->slug.current == \"a\""
    );
}

#[test]
fn test_taxonomy_by_slug_with_default_config() {
    let query = taxonomy_query(&default_config(), "category", &["news"], None, None).unwrap();
    assert!(query.starts_with("*[_type == \"category\" && slug.current == \"news\"][0]"));
}

#[test]
fn test_static_slugs_listing_query() {
    let query = static_slugs_query(&default_config(), "page", None).unwrap();
    assert!(query.starts_with("*[_type == \"page\" && defined(slug.current)] {"));
}

#[test]
fn test_settings_bundle_covers_all_default_groups() {
    let query = settings_query(&default_config(), None, None).unwrap();
    let cleaned = clean(&query);

    for group in ["generalSettings", "socialMediaSettings", "seoSettings"] {
        assert!(cleaned.contains(&format!("\"{group}\":*[_type==\"{group}\"][0]{{")));
    }
}

#[test]
fn test_custom_projection_keeps_query_well_formed() {
    let query = content_type_query(
        &default_config(),
        "post",
        &["hello"],
        None,
        Some("{ publishedAt, \"author\": author->name }"),
    )
    .unwrap();

    let projection = query.split("[0]").nth(1).unwrap();
    assert!(is_valid_projection(projection));
    assert!(clean(projection).starts_with("{publishedAt,\"author\":author->name,_id,_type,"));
}

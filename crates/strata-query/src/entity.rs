//! Entity (singleton) query assembly.
//!
//! Entities are addressed by identifier equality; no slug chain applies.

use crate::document::BASE_FIELDS;
use crate::error::{QueryError, Result};
use crate::projection::{append_field, is_valid_projection, Projection};
use crate::supports::supports_fields;
use strata_core::KitConfig;
use tracing::debug;

/// Composes the query fetching a singleton entity by its name.
pub fn entity_query(
    config: &KitConfig,
    name: &str,
    language: Option<&str>,
    projection: Option<&str>,
) -> Result<String> {
    let entity = config
        .entity(name)
        .ok_or_else(|| QueryError::UnknownEntity(name.to_string()))?;
    let language = config.effective_language(entity.translate, language);

    debug!(name, ?language, "composing entity query");

    let mut query = format!("*[_id == \"{name}\"][0]");

    let supports = supports_fields(config, name, language)?;

    match projection {
        Some(projection) => {
            if !is_valid_projection(projection) {
                return Err(QueryError::InvalidProjection {
                    context: "entity query",
                });
            }

            let mut text = append_field(projection, BASE_FIELDS)?;
            if !supports.is_empty() {
                text = append_field(&text, &supports)?;
            }
            query.push_str(&text);
        }
        None => {
            let mut default = Projection::new();
            default.push(BASE_FIELDS);
            default.push(supports);
            query.push_str(&default.render());
        }
    }

    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::clean;
    use strata_core::{Capability, Entity, Language};

    fn config() -> KitConfig {
        KitConfig {
            entities: vec![Entity::new("home", "Home")
                .with_supports([Capability::Title, Capability::Seo])
                .translatable()],
            languages: vec![Language::new("en", "English")],
            ..KitConfig::default()
        }
    }

    #[test]
    fn test_filters_by_identifier() {
        let query = entity_query(&config(), "home", None, None).unwrap();
        assert!(query.starts_with("*[_id == \"home\"][0]"));
    }

    #[test]
    fn test_translated_supports_projection() {
        // `home` supports title and seo only; the active language rewrites
        // both paths and nothing else appears.
        let query = entity_query(&config(), "home", Some("en"), None).unwrap();
        let cleaned = clean(&query);

        assert!(cleaned.contains("\"title\":title.en"));
        assert!(cleaned.contains("\"seo\":seo.en"));
        assert!(!cleaned.contains("slug"));
        assert!(!cleaned.contains("body"));
        assert!(!cleaned.contains("modules"));
    }

    #[test]
    fn test_language_requires_translation_gate() {
        let mut config = config();
        config.languages.clear();

        let with_language = entity_query(&config, "home", Some("en"), None).unwrap();
        let without_language = entity_query(&config, "home", None, None).unwrap();
        assert_eq!(with_language, without_language);
    }

    #[test]
    fn test_custom_projection_is_spliced() {
        let query = entity_query(&config(), "home", None, Some("{ _updatedAt }")).unwrap();
        assert!(clean(&query).contains("{_updatedAt,_id,_type,"));
    }

    #[test]
    fn test_malformed_projection_is_rejected() {
        let error = entity_query(&config(), "home", None, Some("_updatedAt")).unwrap_err();
        assert!(matches!(error, QueryError::InvalidProjection { .. }));
    }

    #[test]
    fn test_unknown_entity_is_fatal() {
        let error = entity_query(&config(), "missing", None, None).unwrap_err();
        assert!(matches!(error, QueryError::UnknownEntity(name) if name == "missing"));
    }
}

//! The translation-mirror composer.
//!
//! Translatable content types project a `_translation` sub-query carrying
//! the identity and ancestry of the mirrored document, so the rendering
//! layer can offer language switching without a second fetch.

use crate::hierarchy::parent_field;
use strata_core::KitConfig;

/// Composes the `_translation` mirror field for a content type.
///
/// Empty when no languages are configured or the content type does not
/// opt into translation.
pub fn translation_field(config: &KitConfig, schema_name: &str) -> String {
    if config.languages.is_empty() {
        return String::new();
    }

    let translatable = config
        .content_type(schema_name)
        .map(|ct| ct.translate)
        .unwrap_or(false);
    if !translatable {
        return String::new();
    }

    format!(
        "\"_translation\": *[_type == \"{schema_name}\" && _id == ^._id][0] {{ _type, _id, title, slug, {} }}",
        parent_field(config, None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::clean;
    use strata_core::{ContentType, Language};

    fn config() -> KitConfig {
        KitConfig {
            content_types: vec![
                ContentType::new("page", "Page", "Pages").translatable(),
                ContentType::new("post", "Post", "Posts"),
            ],
            languages: vec![Language::new("en", "English")],
            max_parent_depth: 2,
            ..KitConfig::default()
        }
    }

    #[test]
    fn test_translation_field_for_translatable_type() {
        let field = translation_field(&config(), "page");
        assert!(clean(&field)
            .starts_with("\"_translation\":*[_type==\"page\"&&_id==^._id][0]{_type,_id,title,slug,"));
    }

    #[test]
    fn test_untranslatable_type_is_empty() {
        assert_eq!(translation_field(&config(), "post"), "");
    }

    #[test]
    fn test_no_languages_is_empty() {
        let mut config = config();
        config.languages.clear();
        assert_eq!(translation_field(&config, "page"), "");
    }

    #[test]
    fn test_unknown_name_is_empty() {
        assert_eq!(translation_field(&config(), "missing"), "");
    }
}

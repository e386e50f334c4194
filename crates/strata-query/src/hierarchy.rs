//! Hierarchy composition: the parent-chain field and the slug-chain filter.
//!
//! The recursion here is purely textual. The composed query carries a
//! fixed-depth nested `parent` projection and the store performs the actual
//! graph traversal when the query executes.

use strata_core::KitConfig;

/// Identity fields projected at every level of the parent chain.
fn identity_fields(language: Option<&str>) -> String {
    match language {
        Some(language) => {
            format!("_type, _id, \"title\": title.{language}, \"slug\": slug.{language}")
        }
        None => "_type, _id, title, slug".to_string(),
    }
}

/// Composes the fixed-depth nested `parent` field.
///
/// Nesting depth equals `config.max_parent_depth` exactly; ancestry beyond
/// the bound is not represented in the output.
pub fn parent_field(config: &KitConfig, language: Option<&str>) -> String {
    let depth = config.max_parent_depth;
    let level = format!("\"parent\": parent->{{ {}", identity_fields(language));

    let mut field = level.clone();
    for _ in 1..depth {
        field.push_str(", ");
        field.push_str(&level);
    }
    field.push_str(&"}".repeat(depth));

    field
}

/// Identity fields plus the parent chain, as projected by list queries that
/// need to reconstruct full slug paths.
///
/// A configured hierarchy override hook replaces the computed fragment.
pub fn hierarchy_fields(config: &KitConfig, language: Option<&str>, schema_name: &str) -> String {
    let computed = format!(
        "{}, {}",
        identity_fields(language),
        parent_field(config, language)
    );

    match &config.resolve.hierarchy_fields {
        Some(hook) => hook(&computed, language, schema_name),
        None => computed,
    }
}

/// Composes the conjunctive slug-chain filter from leaf-first segments.
///
/// The leaf contributes its own slug equality; each ancestor level `i`
/// contributes an equality dereferenced through `i` repetitions of
/// `parent->`. A single-segment chain yields no ancestor clauses.
pub fn slug_filter(segments: &[&str], language: Option<&str>) -> String {
    let Some((leaf, ancestors)) = segments.split_first() else {
        return String::new();
    };

    let slug_path = match language {
        Some(language) => format!("slug.{language}.current"),
        None => "slug.current".to_string(),
    };

    let mut clauses = vec![format!("{slug_path} == \"{leaf}\"")];
    for (level, segment) in ancestors.iter().enumerate() {
        let deref = "parent->".repeat(level + 1);
        clauses.push(format!("{deref}{slug_path} == \"{segment}\""));
    }

    format!("&& {}", clauses.join(" && "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_slug_filter_single_segment() {
        assert_eq!(slug_filter(&["a"], None), "&& slug.current == \"a\"");
    }

    #[test]
    fn test_slug_filter_multiple_segments() {
        assert_eq!(
            slug_filter(&["a", "b", "c"], None),
            "&& slug.current == \"a\" && parent->slug.current == \"b\" && parent->parent->slug.current == \"c\""
        );
    }

    #[test]
    fn test_slug_filter_single_segment_with_language() {
        assert_eq!(slug_filter(&["a"], Some("en")), "&& slug.en.current == \"a\"");
    }

    #[test]
    fn test_slug_filter_multiple_segments_with_language() {
        assert_eq!(
            slug_filter(&["a", "b", "c"], Some("en")),
            "&& slug.en.current == \"a\" && parent->slug.en.current == \"b\" && parent->parent->slug.en.current == \"c\""
        );
    }

    #[test]
    fn test_slug_filter_empty_chain() {
        assert_eq!(slug_filter(&[], None), "");
    }

    #[test_case(1; "one segment")]
    #[test_case(4; "four segments")]
    #[test_case(7; "seven segments")]
    fn test_slug_filter_clause_count(count: usize) {
        let segments: Vec<String> = (0..count).map(|i| format!("s{i}")).collect();
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        let filter = slug_filter(&refs, None);

        assert_eq!(filter.matches("==").count(), count);
        assert_eq!(filter.matches("parent->").count(), count * (count - 1) / 2);
    }

    #[test]
    fn test_parent_field_depth_matches_bound() {
        let config = KitConfig {
            max_parent_depth: 4,
            ..KitConfig::default()
        };

        let field = parent_field(&config, None);
        assert_eq!(field.matches("\"parent\": parent->").count(), 4);
        assert_eq!(field.matches('}').count(), 4);
        assert_eq!(field.matches('{').count(), 4);
    }

    #[test]
    fn test_parent_field_default_depth() {
        let config = KitConfig::default();
        let field = parent_field(&config, None);
        assert_eq!(field.matches('}').count(), strata_core::DEFAULT_PARENT_DEPTH);
    }

    #[test]
    fn test_parent_field_language_rewrites_identity() {
        let config = KitConfig {
            max_parent_depth: 2,
            ..KitConfig::default()
        };

        let field = parent_field(&config, Some("en"));
        assert_eq!(
            field,
            "\"parent\": parent->{ _type, _id, \"title\": title.en, \"slug\": slug.en, \
             \"parent\": parent->{ _type, _id, \"title\": title.en, \"slug\": slug.en}}"
        );
    }

    #[test]
    fn test_hierarchy_fields_contains_identity_and_parent() {
        let config = KitConfig {
            max_parent_depth: 2,
            ..KitConfig::default()
        };

        let fields = hierarchy_fields(&config, None, "page");
        assert!(fields.starts_with("_type, _id, title, slug"));
        assert!(fields.contains("\"parent\": parent->"));
    }

    #[test]
    fn test_hierarchy_fields_hook_replaces() {
        let mut config = KitConfig {
            max_parent_depth: 2,
            ..KitConfig::default()
        };
        config.resolve.hierarchy_fields = Some(std::sync::Arc::new(|_, _, schema_name| {
            format!("_id /* {schema_name} */")
        }));

        let fields = hierarchy_fields(&config, None, "page");
        assert_eq!(fields, "_id /* page */");
    }
}

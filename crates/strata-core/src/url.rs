//! Route resolution from `rewrite` templates.
//!
//! Rewrite templates map documents to public routes by substituting
//! `:placeholder` segments. Hierarchical content types substitute their full
//! slug chain joined with `/`.

use crate::config::KitConfig;
use crate::payload::{hierarchy_path, HierarchyPayload};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

static PARAM_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("valid param pattern"));

static SEGMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(/?[a-zA-Z0-9-]+/?)*$").expect("valid segment pattern"));

static DOMAIN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z0-9_-]{1,63}\.)+[a-zA-Z]{2,6}$").expect("valid domain pattern"));

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{path}/")
    }
}

/// Whether `segment` is a valid URL path segment chain.
pub fn is_valid_url_segment(segment: &str) -> bool {
    !segment.is_empty() && SEGMENT_PATTERN.is_match(segment)
}

/// Whether `domain` is a bare valid domain name (no scheme).
pub fn is_valid_domain(domain: &str) -> bool {
    !domain.starts_with("://") && DOMAIN_PATTERN.is_match(domain)
}

/// Combines a configured domain and a path into an absolute URL.
pub fn real_url(domain: &str, path: &str) -> String {
    format!("https://{domain}{}", with_leading_slash(path))
}

/// Substitutes `:placeholder` segments with values from `params`; unknown
/// placeholders collapse to the empty string.
fn transform_rewrite(template: &str, params: &HashMap<String, String>) -> String {
    PARAM_PATTERN
        .replace_all(template, |captures: &regex::Captures<'_>| {
            params.get(&captures[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Resolves the public route for a document type from its rewrite template.
///
/// Returns `None` when the type is unregistered or carries no rewrite (it is
/// not independently addressable).
pub fn resolve_href(
    config: &KitConfig,
    document_type: &str,
    params: &HashMap<String, String>,
) -> Option<String> {
    let rewrite = config
        .content_type(document_type)
        .and_then(|ct| ct.rewrite.as_deref())
        .or_else(|| config.entity(document_type).and_then(|e| e.rewrite.as_deref()))?;

    Some(with_trailing_slash(&transform_rewrite(rewrite, params)))
}

/// Resolves the public route for a fetched document.
///
/// Hierarchical content types substitute `:slug` with the full parent-chain
/// path; flat ones use the leaf slug; entities resolve their template as-is.
pub fn resolve_document_href(config: &KitConfig, document: &HierarchyPayload) -> Option<String> {
    let document_type = document.document_type.as_str();

    if let Some(content_type) = config.content_type(document_type) {
        content_type.rewrite.as_ref()?;

        let slug = if content_type.hierarchical {
            hierarchy_path(document).join("/")
        } else {
            document.slug.as_ref()?.current.clone()
        };

        let params = HashMap::from([("slug".to_string(), slug)]);
        return resolve_href(config, document_type, &params);
    }

    if config.entity(document_type).is_some() {
        return resolve_href(config, document_type, &HashMap::new());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::schema::{ContentType, Entity};
    use test_case::test_case;

    fn config() -> KitConfig {
        KitConfig {
            content_types: vec![
                ContentType::new("page", "Page", "Pages")
                    .with_supports([Capability::Title, Capability::Slug])
                    .hierarchical()
                    .with_rewrite("/:slug"),
                ContentType::new("post", "Post", "Posts")
                    .with_supports([Capability::Title, Capability::Slug])
                    .with_rewrite("/post/:slug"),
            ],
            entities: vec![Entity::new("home", "Home").with_rewrite("/")],
            ..KitConfig::default()
        }
    }

    #[test_case("about", true; "plain segment")]
    #[test_case("about/team", true; "nested segments")]
    #[test_case("/about/", true; "surrounding slashes")]
    #[test_case("about us", false; "whitespace")]
    #[test_case("", false; "empty")]
    fn test_is_valid_url_segment(segment: &str, expected: bool) {
        assert_eq!(is_valid_url_segment(segment), expected);
    }

    #[test_case("example.com", true; "bare domain")]
    #[test_case("sub.example.co", true; "subdomain")]
    #[test_case("https://example.com", false; "scheme included")]
    #[test_case("example", false; "no tld")]
    fn test_is_valid_domain(domain: &str, expected: bool) {
        assert_eq!(is_valid_domain(domain), expected);
    }

    #[test]
    fn test_real_url_joins_domain_and_path() {
        assert_eq!(real_url("example.com", "about"), "https://example.com/about");
        assert_eq!(real_url("example.com", "/about"), "https://example.com/about");
    }

    #[test]
    fn test_resolve_href_substitutes_slug() {
        let config = config();
        let params = HashMap::from([("slug".to_string(), "hello".to_string())]);
        assert_eq!(
            resolve_href(&config, "post", &params),
            Some("/post/hello/".to_string())
        );
    }

    #[test]
    fn test_resolve_href_unknown_type_is_none() {
        let config = config();
        assert_eq!(resolve_href(&config, "missing", &HashMap::new()), None);
    }

    #[test]
    fn test_resolve_document_href_joins_hierarchical_chain() {
        let config = config();
        let doc = HierarchyPayload::new("2", "page")
            .with_slug("team")
            .with_parent(HierarchyPayload::new("1", "page").with_slug("about"));

        assert_eq!(
            resolve_document_href(&config, &doc),
            Some("/about/team/".to_string())
        );
    }

    #[test]
    fn test_resolve_document_href_flat_type_uses_leaf_slug() {
        let config = config();
        let doc = HierarchyPayload::new("1", "post").with_slug("hello");
        assert_eq!(
            resolve_document_href(&config, &doc),
            Some("/post/hello/".to_string())
        );
    }

    #[test]
    fn test_resolve_document_href_entity() {
        let config = config();
        let doc = HierarchyPayload::new("1", "home");
        assert_eq!(resolve_document_href(&config, &doc), Some("/".to_string()));
    }
}

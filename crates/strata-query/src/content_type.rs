//! Content-type query assembly.
//!
//! Combines the slug-chain filter with the composed projection: base
//! identity fields, capability fields, and, for hierarchical types, the
//! parent-chain field.

use crate::document::BASE_FIELDS;
use crate::error::{QueryError, Result};
use crate::hierarchy::{hierarchy_fields, parent_field, slug_filter};
use crate::projection::{append_field, is_valid_projection, Projection};
use crate::supports::supports_fields;
use strata_core::KitConfig;
use tracing::debug;

/// Composes the query fetching one content-type document by its slug chain.
///
/// `slugs` is ordered root to leaf; the composer reverses it for the
/// filter. A caller-supplied projection must be brace-delimited and gets
/// the base and capability fields spliced in.
pub fn content_type_query(
    config: &KitConfig,
    name: &str,
    slugs: &[&str],
    language: Option<&str>,
    projection: Option<&str>,
) -> Result<String> {
    let content_type = config
        .content_type(name)
        .ok_or_else(|| QueryError::UnknownContentType(name.to_string()))?;
    let language = config.effective_language(content_type.translate, language);

    debug!(name, ?language, slugs = slugs.len(), "composing content type query");

    let mut reversed: Vec<&str> = slugs.to_vec();
    reversed.reverse();
    let filter = slug_filter(&reversed, language);

    let mut query = if filter.is_empty() {
        format!("*[_type == \"{name}\"][0]")
    } else {
        format!("*[_type == \"{name}\" {filter}][0]")
    };

    let supports = supports_fields(config, name, language)?;

    match projection {
        Some(projection) => {
            if !is_valid_projection(projection) {
                return Err(QueryError::InvalidProjection {
                    context: "content type query",
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

    if content_type.hierarchical {
        query = append_field(&query, &parent_field(config, language))?;
    }

    Ok(query)
}

/// Composes the listing query enumerating every document of a content type
/// with a defined slug, projecting enough ancestry to rebuild full paths.
///
/// Used to pre-generate static routes.
pub fn static_slugs_query(
    config: &KitConfig,
    name: &str,
    language: Option<&str>,
) -> Result<String> {
    let content_type = config
        .content_type(name)
        .ok_or_else(|| QueryError::UnknownContentType(name.to_string()))?;
    let language = config.effective_language(content_type.translate, language);

    debug!(name, ?language, "composing static slugs query");

    let slug_path = match language {
        Some(language) => format!("slug.{language}"),
        None => "slug.current".to_string(),
    };

    Ok(format!(
        "*[_type == \"{name}\" && defined({slug_path})] {{ {} }}",
        hierarchy_fields(config, language, name)
    ))
}

//! Taxonomy query assembly.
//!
//! Taxonomies are flat, so only the leaf slug participates in the filter
//! and no parent-chain field is projected.

use crate::document::BASE_FIELDS;
use crate::error::{QueryError, Result};
use crate::hierarchy::slug_filter;
use crate::projection::{append_field, is_valid_projection, Projection};
use crate::supports::supports_fields;
use strata_core::KitConfig;
use tracing::debug;

/// Composes the query fetching one taxonomy document by slug.
pub fn taxonomy_query(
    config: &KitConfig,
    name: &str,
    slugs: &[&str],
    language: Option<&str>,
    projection: Option<&str>,
) -> Result<String> {
    let taxonomy = config
        .taxonomy(name)
        .ok_or_else(|| QueryError::UnknownTaxonomy(name.to_string()))?;
    let language = config.effective_language(taxonomy.translate, language);

    debug!(name, ?language, "composing taxonomy query");

    let filter = match slugs.last().copied() {
        Some(leaf) => slug_filter(&[leaf], language),
        None => String::new(),
    };

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
                    context: "taxonomy query",
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

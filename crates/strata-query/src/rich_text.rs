//! Rich-text sub-projections.
//!
//! Rich-text content is an array of blocks: image blocks delegate to the
//! image projection, text blocks recurse into their inline mark definitions
//! and type-guard link marks into the link projection.

use crate::image::IMAGE_FIELDS;
use crate::link::link_fields;
use strata_core::KitConfig;

fn image_branch() -> String {
    format!("_type == \"image\" => {{ {IMAGE_FIELDS} }}")
}

fn block_branch(config: &KitConfig, language: Option<&str>) -> String {
    format!(
        "_type == \"block\" => {{ ..., markDefs[] {{ ..., _type == \"link\" => {{ {} }} }} }}",
        link_fields(config, language)
    )
}

/// Fields projected for a rich-text array.
///
/// A configured rich-text override hook replaces the computed fragment.
pub fn rich_text_fields(config: &KitConfig, language: Option<&str>) -> String {
    let computed = format!(
        "..., {}, {}",
        image_branch(),
        block_branch(config, language)
    );

    match &config.resolve.rich_text_fields {
        Some(hook) => hook(&computed, language),
        None => computed,
    }
}

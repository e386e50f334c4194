//! # strata-query
//!
//! The query-projection composition engine of the strata kit.
//!
//! Given a merged [`KitConfig`](strata_core::KitConfig), the composers here
//! synthesize the textual document queries that fetch content together with
//! its relations, parent chain, localized field variants, and nested
//! rich-text/link/image sub-structures. Composition is pure and
//! synchronous: no I/O, no shared mutable state, safe to call concurrently.
//!
//! The layering is leaf-first: the projection splicer underpins the
//! per-capability composers, and the query assemblers combine a filter
//! clause with a composed projection.

mod content_type;
mod document;
mod entity;
mod error;
mod hierarchy;
mod image;
mod link;
mod modules;
mod projection;
mod rich_text;
mod settings;
mod supports;
mod taxonomy;
mod translation;

pub use content_type::{content_type_query, static_slugs_query};
pub use document::BASE_FIELDS;
pub use entity::entity_query;
pub use error::{QueryError, Result};
pub use hierarchy::{hierarchy_fields, parent_field, slug_filter};
pub use image::IMAGE_FIELDS;
pub use link::{internal_link_fields, link_fields};
pub use modules::{modules_field, PRESET_TYPE};
pub use projection::{append_field, clean, is_valid_projection};
pub use rich_text::rich_text_fields;
pub use settings::{setting_fields, settings_query};
pub use supports::supports_fields;
pub use taxonomy::taxonomy_query;
pub use translation::translation_field;

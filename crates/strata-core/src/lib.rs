//! # strata-core
//!
//! Content-model types for the strata kit: the capability vocabulary,
//! schema objects, the merged configuration consulted by every composer,
//! and pure utilities over fetched payloads (hierarchy paths, route
//! resolution, cache tags).
//!
//! Everything here is plain data plus synchronous functions; the crate does
//! no I/O.

mod capability;
mod config;
mod fields;
mod payload;
mod schema;
mod tags;
mod url;

pub use capability::Capability;
pub use config::{
    FragmentHook, HierarchyHook, KitConfig, ResolveHooks, DEFAULT_PARENT_DEPTH,
};
pub use fields::{
    core_field, inject_taxonomy_fields, support_fields, taxonomy_fields, FieldDefinition,
    FieldType,
};
pub use payload::{hierarchy_path, HierarchyPayload, SlugValue};
pub use schema::{
    ContentType, Entity, Language, Module, ModuleQueryFn, SchemaObject, Setting, Taxonomy,
    TaxonomyBinding,
};
pub use tags::{document_tag, settings_tags};
pub use url::{
    is_valid_domain, is_valid_url_segment, real_url, resolve_document_href, resolve_href,
};

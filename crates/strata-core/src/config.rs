//! The merged, immutable kit configuration.
//!
//! Built once (see `strata-config`) and then only read. Composers receive it
//! by reference, so multiple configurations can coexist in one process and
//! query composition stays safe to call from any thread.

use crate::schema::{ContentType, Entity, Language, Module, SchemaObject, Setting, Taxonomy};
use std::fmt;
use std::sync::Arc;

/// Default bound on parent-chain nesting in composed queries.
///
/// Ancestry deeper than the bound is not represented in query output; the
/// deepest resolved ancestor simply has no `parent` field.
pub const DEFAULT_PARENT_DEPTH: usize = 10;

/// Override hook for a computed projection fragment:
/// `(default_fragment, language) -> replacement`.
pub type FragmentHook = Arc<dyn Fn(&str, Option<&str>) -> String + Send + Sync>;

/// Override hook for hierarchy fragments, additionally given the schema name:
/// `(default_fragment, language, schema_name) -> replacement`.
pub type HierarchyHook = Arc<dyn Fn(&str, Option<&str>, &str) -> String + Send + Sync>;

/// Configuration-supplied resolver overrides.
///
/// A present hook replaces the computed fragment entirely; the hook takes
/// full responsibility for emitting a well-formed fragment.
#[derive(Clone, Default)]
pub struct ResolveHooks {
    pub rich_text_fields: Option<FragmentHook>,
    pub internal_link_fields: Option<FragmentHook>,
    pub hierarchy_fields: Option<HierarchyHook>,
}

impl fmt::Debug for ResolveHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveHooks")
            .field("rich_text_fields", &self.rich_text_fields.as_ref().map(|_| "<fn>"))
            .field(
                "internal_link_fields",
                &self.internal_link_fields.as_ref().map(|_| "<fn>"),
            )
            .field("hierarchy_fields", &self.hierarchy_fields.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The fully-merged content model.
#[derive(Debug, Clone)]
pub struct KitConfig {
    pub content_types: Vec<ContentType>,
    pub taxonomies: Vec<Taxonomy>,
    pub entities: Vec<Entity>,
    pub settings: Vec<Setting>,
    pub modules: Vec<Module>,
    pub languages: Vec<Language>,
    pub resolve: ResolveHooks,
    /// Bound on parent-chain nesting; see [`DEFAULT_PARENT_DEPTH`].
    pub max_parent_depth: usize,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            content_types: Vec::new(),
            taxonomies: Vec::new(),
            entities: Vec::new(),
            settings: Vec::new(),
            modules: Vec::new(),
            languages: Vec::new(),
            resolve: ResolveHooks::default(),
            max_parent_depth: DEFAULT_PARENT_DEPTH,
        }
    }
}

impl KitConfig {
    /// Looks up a content type by name.
    pub fn content_type(&self, name: &str) -> Option<&ContentType> {
        self.content_types.iter().find(|ct| ct.name == name)
    }

    /// Looks up a taxonomy by name.
    pub fn taxonomy(&self, name: &str) -> Option<&Taxonomy> {
        self.taxonomies.iter().find(|t| t.name == name)
    }

    /// Looks up an entity by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Looks up a settings group by name.
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.settings.iter().find(|s| s.name == name)
    }

    /// Whether `name` names a registered content type.
    pub fn is_content_type(&self, name: &str) -> bool {
        self.content_type(name).is_some()
    }

    /// Resolves a name across content types, entities, and taxonomies.
    pub fn schema_object(&self, name: &str) -> Option<&dyn SchemaObject> {
        if let Some(ct) = self.content_type(name) {
            return Some(ct);
        }
        if let Some(entity) = self.entity(name) {
            return Some(entity);
        }
        if let Some(taxonomy) = self.taxonomy(name) {
            return Some(taxonomy);
        }
        None
    }

    /// The default language: the entry flagged `is_default`, else the first.
    pub fn default_language(&self) -> Option<&Language> {
        self.languages
            .iter()
            .find(|language| language.is_default)
            .or_else(|| self.languages.first())
    }

    /// The translation gate: an object translates only when it opts in AND
    /// languages are configured.
    pub fn can_translate(&self, translate: bool) -> bool {
        translate && !self.languages.is_empty()
    }

    /// Narrows a requested language to the effective one for an object with
    /// the given translate flag. A language never leaks into composed output
    /// when the gate is closed.
    pub fn effective_language<'a>(
        &self,
        translate: bool,
        language: Option<&'a str>,
    ) -> Option<&'a str> {
        language.filter(|_| self.can_translate(translate))
    }
}

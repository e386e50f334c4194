//! One-time merge of a user-declared configuration over the built-in
//! defaults, producing the immutable [`KitConfig`].
//!
//! Merge order per schema list: surviving defaults first, then user
//! declarations. A user declaration with the same name as a default
//! replaces it in place. Validation runs over the merged result, so an
//! invalid schema can never reach the query composers.

use crate::defaults::{
    default_content_types, default_entities, default_settings, default_taxonomies,
};
use crate::error::{ConfigError, Result};
use strata_core::{
    ContentType, Entity, KitConfig, Language, Module, ResolveHooks, Setting, Taxonomy,
    DEFAULT_PARENT_DEPTH,
};
use tracing::debug;

/// Builder assembling a [`KitConfig`] from defaults plus user declarations.
#[derive(Default)]
pub struct KitConfigBuilder {
    content_types: Vec<ContentType>,
    taxonomies: Vec<Taxonomy>,
    entities: Vec<Entity>,
    settings: Vec<Setting>,
    modules: Vec<Module>,
    languages: Vec<Language>,
    resolve: ResolveHooks,
    max_parent_depth: Option<usize>,
    disabled_content_types: Vec<String>,
    disabled_taxonomies: Vec<String>,
}

impl KitConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_types.push(content_type);
        self
    }

    pub fn taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomies.push(taxonomy);
        self
    }

    pub fn entity(mut self, entity: Entity) -> Self {
        self.entities.push(entity);
        self
    }

    pub fn setting(mut self, setting: Setting) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn module(mut self, module: Module) -> Self {
        self.modules.push(module);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.languages.push(language);
        self
    }

    pub fn resolve_hooks(mut self, hooks: ResolveHooks) -> Self {
        self.resolve = hooks;
        self
    }

    /// Overrides the parent-chain depth bound (default
    /// [`DEFAULT_PARENT_DEPTH`]).
    pub fn max_parent_depth(mut self, depth: usize) -> Self {
        self.max_parent_depth = Some(depth);
        self
    }

    /// Drops a built-in content type from the merged configuration.
    pub fn disable_default_content_type(mut self, name: impl Into<String>) -> Self {
        self.disabled_content_types.push(name.into());
        self
    }

    /// Drops a built-in taxonomy from the merged configuration.
    pub fn disable_default_taxonomy(mut self, name: impl Into<String>) -> Self {
        self.disabled_taxonomies.push(name.into());
        self
    }

    /// Merges defaults with the user declarations and validates the result.
    pub fn build(self) -> Result<KitConfig> {
        let content_types = merge_by_name(
            default_content_types()
                .into_iter()
                .filter(|ct| !self.disabled_content_types.contains(&ct.name))
                .collect(),
            self.content_types,
            |ct| ct.name.clone(),
        );
        let taxonomies = merge_by_name(
            default_taxonomies()
                .into_iter()
                .filter(|t| !self.disabled_taxonomies.contains(&t.name))
                .collect(),
            self.taxonomies,
            |t| t.name.clone(),
        );
        let entities = merge_by_name(default_entities(), self.entities, |e| e.name.clone());
        let settings = merge_by_name(default_settings(), self.settings, |s| s.name.clone());

        for module in &self.modules {
            if !module.name.starts_with("module.") {
                return Err(ConfigError::InvalidModuleName {
                    name: module.name.clone(),
                });
            }
        }

        for content_type in &content_types {
            if let Some(rewrite) = &content_type.rewrite {
                if !rewrite.contains(":slug") {
                    return Err(ConfigError::InvalidRewrite {
                        name: content_type.name.clone(),
                        path: rewrite.clone(),
                    });
                }
            }
        }

        let config = KitConfig {
            content_types,
            taxonomies,
            entities,
            settings,
            modules: self.modules,
            languages: self.languages,
            resolve: self.resolve,
            max_parent_depth: self.max_parent_depth.unwrap_or(DEFAULT_PARENT_DEPTH),
        };

        debug!(
            content_types = config.content_types.len(),
            taxonomies = config.taxonomies.len(),
            entities = config.entities.len(),
            settings = config.settings.len(),
            modules = config.modules.len(),
            languages = config.languages.len(),
            "merged kit configuration"
        );

        Ok(config)
    }
}

/// Appends `declared` to `base`, replacing any base entry sharing a name
/// with a declared one.
fn merge_by_name<T>(base: Vec<T>, declared: Vec<T>, name: impl Fn(&T) -> String) -> Vec<T> {
    let mut merged = base;

    for item in declared {
        let item_name = name(&item);
        match merged.iter().position(|existing| name(existing) == item_name) {
            Some(index) => merged[index] = item,
            None => merged.push(item),
        }
    }

    merged
}

//! Declared schema objects: content types, taxonomies, entities, settings
//! groups, and modules.
//!
//! Schema objects are plain data built once at configuration time and read
//! by every composer afterwards. Construction is chainable so declarations
//! read like the registry they describe.

use crate::capability::Capability;
use crate::fields::FieldDefinition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Query hook a module may register: `(language) -> projection fragment`.
///
/// The returned text must be a well-formed brace-delimited projection; the
/// modules composer rejects anything else, naming the module.
pub type ModuleQueryFn = Arc<dyn Fn(Option<&str>) -> String + Send + Sync>;

/// A configured language. The process-wide list lives on the config; an
/// empty list means the whole system runs untranslated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language identifier used in field sub-paths (`title.<id>`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Marks the default language; otherwise the first entry wins.
    #[serde(default)]
    pub is_default: bool,
}

impl Language {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            is_default: false,
        }
    }

    /// Flag this language as the default.
    pub fn default_language(mut self) -> Self {
        self.is_default = true;
        self
    }
}

/// Binds a content type to a taxonomy by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyBinding {
    /// Name of the referenced taxonomy.
    pub name: String,
    /// Multi-valued relation (array of references) instead of a single one.
    #[serde(default)]
    pub multiple: bool,
    /// Marks the relation as required in the derived field definition.
    #[serde(default)]
    pub required: bool,
}

impl TaxonomyBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            multiple: false,
            required: false,
        }
    }

    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Common surface of capability-bearing schema objects.
///
/// The query composers only ever need the name, the supports list, and the
/// translate flag; this trait lets them resolve a name across content types,
/// entities, and taxonomies without caring which variant matched.
pub trait SchemaObject {
    /// Unique name, used as the document type discriminator.
    fn name(&self) -> &str;

    /// Declared capability list; empty means "supports nothing".
    fn supports(&self) -> &[Capability];

    /// Whether capability fields are stored per language.
    fn translate(&self) -> bool;

    /// Whether `capability` is enabled on this object.
    fn supports_capability(&self, capability: Capability) -> bool {
        self.supports().contains(&capability)
    }
}

/// A repeatable, hierarchical-capable document collection.
#[derive(Debug, Clone, Default)]
pub struct ContentType {
    pub name: String,
    pub title: String,
    pub plural_title: String,
    pub supports: Vec<Capability>,
    /// Extra fields beyond the capability-derived ones.
    pub fields: Vec<FieldDefinition>,
    pub taxonomies: Vec<TaxonomyBinding>,
    /// Addressable by a slash-delimited chain of slugs via `parent`.
    pub hierarchical: bool,
    pub translate: bool,
    /// URL path template containing `:slug`; absence means the type is not
    /// independently addressable.
    pub rewrite: Option<String>,
}

impl ContentType {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        plural_title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            plural_title: plural_title.into(),
            ..Self::default()
        }
    }

    pub fn with_supports(mut self, supports: impl IntoIterator<Item = Capability>) -> Self {
        self.supports = supports.into_iter().collect();
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn with_taxonomies(mut self, taxonomies: impl IntoIterator<Item = TaxonomyBinding>) -> Self {
        self.taxonomies = taxonomies.into_iter().collect();
        self
    }

    pub fn hierarchical(mut self) -> Self {
        self.hierarchical = true;
        self
    }

    pub fn translatable(mut self) -> Self {
        self.translate = true;
        self
    }

    pub fn with_rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }
}

impl SchemaObject for ContentType {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self) -> &[Capability] {
        &self.supports
    }

    fn translate(&self) -> bool {
        self.translate
    }
}

/// A flat classification collection referenced by content types.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    pub name: String,
    pub title: String,
    pub plural_title: String,
    pub supports: Vec<Capability>,
    pub fields: Vec<FieldDefinition>,
    pub translate: bool,
}

impl Taxonomy {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        plural_title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            plural_title: plural_title.into(),
            ..Self::default()
        }
    }

    pub fn with_supports(mut self, supports: impl IntoIterator<Item = Capability>) -> Self {
        self.supports = supports.into_iter().collect();
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn translatable(mut self) -> Self {
        self.translate = true;
        self
    }
}

impl SchemaObject for Taxonomy {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self) -> &[Capability] {
        &self.supports
    }

    fn translate(&self) -> bool {
        self.translate
    }
}

/// A singleton document addressed by its name rather than a slug.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub name: String,
    pub title: String,
    pub supports: Vec<Capability>,
    pub fields: Vec<FieldDefinition>,
    pub translate: bool,
    /// URL path template; entities resolve without a slug placeholder.
    pub rewrite: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_supports(mut self, supports: impl IntoIterator<Item = Capability>) -> Self {
        self.supports = supports.into_iter().collect();
        self
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn translatable(mut self) -> Self {
        self.translate = true;
        self
    }

    pub fn with_rewrite(mut self, rewrite: impl Into<String>) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }
}

impl SchemaObject for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports(&self) -> &[Capability] {
        &self.supports
    }

    fn translate(&self) -> bool {
        self.translate
    }
}

/// A singleton settings group queried as part of the settings bundle.
#[derive(Debug, Clone, Default)]
pub struct Setting {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    pub translate: bool,
}

impl Setting {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn translatable(mut self) -> Self {
        self.translate = true;
        self
    }
}

/// A polymorphic content block usable inside a modules array.
///
/// Module names must carry the `module.` prefix; the config builder rejects
/// anything else at load time.
#[derive(Clone, Default)]
pub struct Module {
    pub name: String,
    pub title: String,
    pub fields: Vec<FieldDefinition>,
    /// Optional per-module query fragment hook.
    pub query: Option<ModuleQueryFn>,
}

impl Module {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDefinition>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn with_query(
        mut self,
        query: impl Fn(Option<&str>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.query = Some(Arc::new(query));
        self
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("fields", &self.fields)
            .field("query", &self.query.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

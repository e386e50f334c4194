//! Field definitions and the capability-to-field mapping.
//!
//! These drive the admin-UI side of the capability system: each capability
//! maps to one canonical field definition, and taxonomy bindings expand to
//! relational reference fields injected near the identity fields.

use crate::capability::Capability;
use crate::config::KitConfig;
use crate::schema::TaxonomyBinding;
use serde::{Deserialize, Serialize};

/// Concrete storage type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    String,
    Slug,
    Text,
    Date,
    Boolean,
    Url,
    Image,
    /// Rich-text editor blocks.
    Editor,
    Seo,
    Modules,
    Link,
    /// Single reference to another document type.
    Reference { to: String },
    /// Array of references to another document type.
    ReferenceList { to: String },
}

/// A single declared field on a schema object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub title: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, title: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            field_type,
            description: None,
            required: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The canonical field definition for a capability.
pub fn core_field(capability: Capability) -> FieldDefinition {
    match capability {
        Capability::Title => FieldDefinition::new("title", "Title", FieldType::String),
        Capability::Slug => FieldDefinition::new("slug", "Slug", FieldType::Slug).with_description(
            "The unique identifying part of a web address at the end of the URL. \
             Only lowercase letters and hyphens are allowed.",
        ),
        Capability::PublishedAt => {
            FieldDefinition::new("publishedAt", "Date", FieldType::Date).required()
        }
        Capability::FeaturedImage => {
            FieldDefinition::new("featuredImage", "Image", FieldType::Image)
        }
        Capability::Excerpt => FieldDefinition::new("excerpt", "Excerpt", FieldType::Text)
            .with_description("A short description of the content."),
        Capability::Body => FieldDefinition::new("body", "Body", FieldType::Editor),
        Capability::Seo => FieldDefinition::new("seo", "SEO & Schema", FieldType::Seo),
        Capability::Modules => FieldDefinition::new("modules", "Modules", FieldType::Modules),
    }
}

/// Expands a supports list into field definitions, in capability order.
pub fn support_fields(supports: &[Capability]) -> Vec<FieldDefinition> {
    Capability::ALL
        .iter()
        .filter(|capability| supports.contains(capability))
        .map(|capability| core_field(*capability))
        .collect()
}

/// Expands taxonomy bindings into relational reference fields.
///
/// Bindings naming an unregistered taxonomy are skipped; a dangling
/// reference degrades gracefully rather than failing the whole schema.
pub fn taxonomy_fields(config: &KitConfig, bindings: &[TaxonomyBinding]) -> Vec<FieldDefinition> {
    bindings
        .iter()
        .filter_map(|binding| {
            let taxonomy = config.taxonomy(&binding.name)?;
            let title = if taxonomy.plural_title.is_empty() {
                taxonomy.title.clone()
            } else {
                taxonomy.plural_title.clone()
            };

            let field_type = if binding.multiple {
                FieldType::ReferenceList {
                    to: taxonomy.name.clone(),
                }
            } else {
                FieldType::Reference {
                    to: taxonomy.name.clone(),
                }
            };

            let mut field = FieldDefinition::new(taxonomy.name.clone(), title, field_type);
            if binding.required {
                field = field.required();
            }
            Some(field)
        })
        .collect()
}

/// Injects relational fields into a field list.
///
/// With no relational fields the list is returned unchanged. Otherwise the
/// relational fields land immediately after the first field named `slug`,
/// else `title`; with neither anchor they are prepended.
pub fn inject_taxonomy_fields(
    fields: Vec<FieldDefinition>,
    relational: Vec<FieldDefinition>,
) -> Vec<FieldDefinition> {
    if relational.is_empty() {
        return fields;
    }

    let anchor = ["slug", "title"]
        .iter()
        .find_map(|name| fields.iter().position(|field| field.name == *name));

    match anchor {
        Some(index) => {
            let mut result = fields;
            result.splice(index + 1..index + 1, relational);
            result
        }
        None => {
            let mut result = relational;
            result.extend(fields);
            result
        }
    }
}

//! Built-in schemas every kit configuration starts from.
//!
//! Applications extend these with their own declarations; individual
//! defaults can be disabled by name through the builder.

use strata_core::{
    Capability, ContentType, Entity, FieldDefinition, FieldType, Setting, Taxonomy,
    TaxonomyBinding,
};

/// Default content types: a hierarchical `page` and a categorized `post`.
pub fn default_content_types() -> Vec<ContentType> {
    vec![
        ContentType::new("page", "Page", "Pages")
            .with_supports([
                Capability::Title,
                Capability::Slug,
                Capability::Seo,
                Capability::Modules,
            ])
            .hierarchical()
            .with_rewrite("/:slug"),
        ContentType::new("post", "Post", "Posts")
            .with_supports([
                Capability::Title,
                Capability::Slug,
                Capability::Excerpt,
                Capability::Body,
                Capability::Seo,
            ])
            .with_taxonomies([TaxonomyBinding::new("category").multiple().required()])
            .with_rewrite("/post/:slug"),
    ]
}

/// Default taxonomies: a single `category` classification.
pub fn default_taxonomies() -> Vec<Taxonomy> {
    vec![Taxonomy::new("category", "Category", "Categories")
        .with_supports([Capability::Title, Capability::Slug])]
}

/// Default entities: the home document and the not-found document.
pub fn default_entities() -> Vec<Entity> {
    vec![
        Entity::new("home", "Home")
            .with_supports([Capability::Title, Capability::Seo, Capability::Modules])
            .translatable()
            .with_rewrite("/"),
        Entity::new("page.404", "404")
            .with_supports([Capability::Title, Capability::Seo, Capability::Modules])
            .translatable()
            .with_rewrite("/404"),
    ]
}

/// Default settings groups: general, social media, and SEO.
pub fn default_settings() -> Vec<Setting> {
    vec![
        Setting::new("generalSettings", "General").with_fields([
            FieldDefinition::new("siteTitle", "Site Title", FieldType::String).required(),
            FieldDefinition::new("domain", "Domain", FieldType::String),
            FieldDefinition::new(
                "searchEngineVisibility",
                "Search Engine Visibility",
                FieldType::Boolean,
            )
            .with_description("Discourage search engines from indexing this site."),
        ]),
        Setting::new("socialMediaSettings", "Social Media").with_fields([
            FieldDefinition::new("facebook", "Facebook", FieldType::Url),
            FieldDefinition::new("twitter", "Twitter", FieldType::Url),
            FieldDefinition::new("instagram", "Instagram", FieldType::Url),
            FieldDefinition::new("linkedin", "LinkedIn", FieldType::Url),
            FieldDefinition::new("youtube", "YouTube", FieldType::Url),
        ]),
        Setting::new("seoSettings", "SEO").with_fields([
            FieldDefinition::new("metaTitle", "Meta Title", FieldType::String),
            FieldDefinition::new("metaDescription", "Meta Description", FieldType::Text),
            FieldDefinition::new("shareImage", "Share Image", FieldType::Image),
        ]),
    ]
}

//! The closed capability vocabulary.
//!
//! A capability ("supports" token) is a named optional field group a schema
//! object may opt into. Composers iterate [`Capability::ALL`] so that query
//! output is deterministic regardless of declaration order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field group a schema object can opt into via its `supports` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Display title of the document.
    Title,
    /// URL slug; hierarchical documents chain these through `parent`.
    Slug,
    /// Publication date.
    PublishedAt,
    /// Primary image of the document.
    FeaturedImage,
    /// Short description used in listings.
    Excerpt,
    /// Rich-text body.
    Body,
    /// SEO and structured-data group.
    Seo,
    /// Polymorphic module blocks.
    Modules,
}

impl Capability {
    /// The fixed iteration order used by every composer.
    pub const ALL: [Capability; 8] = [
        Capability::Title,
        Capability::Slug,
        Capability::PublishedAt,
        Capability::FeaturedImage,
        Capability::Excerpt,
        Capability::Body,
        Capability::Seo,
        Capability::Modules,
    ];

    /// The wire token used in document fields and query paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Title => "title",
            Capability::Slug => "slug",
            Capability::PublishedAt => "publishedAt",
            Capability::FeaturedImage => "featuredImage",
            Capability::Excerpt => "excerpt",
            Capability::Body => "body",
            Capability::Seo => "seo",
            Capability::Modules => "modules",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

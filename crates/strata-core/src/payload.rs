//! Typed views over fetched documents.
//!
//! The fetch itself is an external concern; these types deserialize the
//! identity-and-hierarchy portion every composed query projects, and the
//! helpers walk the nested parent chain back into a slug path.

use serde::{Deserialize, Serialize};

/// A stored slug value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugValue {
    pub current: String,
}

impl SlugValue {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// Identity fields plus the recursively-nested parent chain, as projected by
/// the hierarchy composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyPayload {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub document_type: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<SlugValue>,
    #[serde(default)]
    pub parent: Option<Box<HierarchyPayload>>,
}

impl HierarchyPayload {
    pub fn new(id: impl Into<String>, document_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            document_type: document_type.into(),
            title: None,
            slug: None,
            parent: None,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(SlugValue::new(slug));
        self
    }

    pub fn with_parent(mut self, parent: HierarchyPayload) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

/// Walks the parent chain of a document into its slug path, root first.
///
/// Levels without a slug are skipped; the chain ends at the first missing
/// `parent` (the composed query bounds the depth, so the chain is finite).
pub fn hierarchy_path(document: &HierarchyPayload) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(document);

    while let Some(doc) = current {
        if let Some(slug) = &doc.slug {
            path.push(slug.current.clone());
        }
        current = doc.parent.as_deref();
    }

    path.reverse();
    path
}

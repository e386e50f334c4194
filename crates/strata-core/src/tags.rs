//! Cache/invalidation tag derivation.
//!
//! The fetch layer attaches these tags to requests so published changes can
//! invalidate exactly the affected documents.

use crate::config::KitConfig;

/// Tag for a single document: `<type name>:<leaf slug>`.
pub fn document_tag(name: &str, leaf_slug: &str) -> String {
    format!("{name}:{leaf_slug}")
}

/// Tags for a settings fetch: the requested group, or every registered group.
pub fn settings_tags(config: &KitConfig, name: Option<&str>) -> Vec<String> {
    match name {
        Some(name) => vec![name.to_string()],
        None => config
            .settings
            .iter()
            .map(|setting| setting.name.clone())
            .collect(),
    }
}

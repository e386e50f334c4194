//! Link sub-projections: stored link fields plus the dereferenced internal
//! target with enough identity and ancestry to resolve its route.

use crate::hierarchy::parent_field;
use strata_core::KitConfig;

/// Fields projected from a dereferenced internal link target.
///
/// Always projects untranslated identity plus the parent chain; for every
/// rewrite-bearing, translatable schema a type-guarded branch additionally
/// rewrites `title` and `slug` to the active language. A configured
/// internal-link override hook replaces the computed fragment.
pub fn internal_link_fields(config: &KitConfig, language: Option<&str>) -> String {
    let mut fields = format!("_id, _type, title, slug, {}", parent_field(config, None));

    if let Some(language) = language {
        let linkable: Vec<(&str, bool)> = config
            .content_types
            .iter()
            .filter(|ct| ct.rewrite.is_some())
            .map(|ct| (ct.name.as_str(), ct.translate))
            .chain(
                config
                    .entities
                    .iter()
                    .filter(|entity| entity.rewrite.is_some())
                    .map(|entity| (entity.name.as_str(), entity.translate)),
            )
            .collect();

        for (name, translate) in linkable {
            if !config.can_translate(translate) {
                continue;
            }

            fields.push_str(&format!(
                ", _type == \"{name}\" => {{ \"title\": title.{language}, \"slug\": slug.{language}, {} }}",
                parent_field(config, Some(language))
            ));
        }
    }

    match &config.resolve.internal_link_fields {
        Some(hook) => hook(&fields, language),
        None => fields,
    }
}

/// Fields projected for a stored link: everything as stored, plus the
/// dereferenced internal target.
pub fn link_fields(config: &KitConfig, language: Option<&str>) -> String {
    format!(
        "..., internal->{{ {} }}",
        internal_link_fields(config, language)
    )
}

//! Settings-bundle query assembly.
//!
//! Without a group name the composer nests every registered settings group
//! into a single query keyed by group name, so one fetch hydrates the whole
//! bundle.

use crate::error::{QueryError, Result};
use strata_core::KitConfig;
use tracing::debug;

/// Composes the fields projected for one settings group: everything as
/// stored, plus per-field language rewrites for translatable groups.
pub fn setting_fields(config: &KitConfig, name: &str, language: Option<&str>) -> String {
    let mut entries = vec!["...".to_string()];

    if let (Some(setting), Some(language)) = (config.setting(name), language) {
        if config.can_translate(setting.translate) {
            for field in &setting.fields {
                entries.push(format!("\"{0}\": {0}.{language}", field.name));
            }
        }
    }

    entries.join(", ")
}

/// Composes the settings query.
///
/// With a group name, validates the group exists and returns its single
/// query; without one, nests every registered group keyed by its name.
pub fn settings_query(
    config: &KitConfig,
    name: Option<&str>,
    language: Option<&str>,
) -> Result<String> {
    debug!(?name, ?language, "composing settings query");

    match name {
        Some(name) => {
            if config.setting(name).is_none() {
                return Err(QueryError::UnknownSettingsGroup(name.to_string()));
            }

            Ok(format!(
                "*[_type == \"{name}\"][0]{{ {} }}",
                setting_fields(config, name, language)
            ))
        }
        None => {
            let groups: Vec<String> = config
                .settings
                .iter()
                .map(|setting| {
                    format!(
                        "\"{0}\": *[_type == \"{0}\"][0]{{ {1} }}",
                        setting.name,
                        setting_fields(config, &setting.name, language)
                    )
                })
                .collect();

            Ok(format!("*[][0]{{ {} }}", groups.join(", ")))
        }
    }
}

//! The modules (polymorphic block) composer.
//!
//! Each registered module may contribute its own projection through its
//! query hook; unrecognized module types fall through the leading spread.
//! The `kit.preset` pseudo-module dereferences a stored preset document and
//! projects its modules as `data`, so reusable bundles stay queryable.

use crate::error::{QueryError, Result};
use crate::projection::is_valid_projection;
use strata_core::KitConfig;

/// Document type of the preset pseudo-module.
pub const PRESET_TYPE: &str = "kit.preset";

/// Composes the `modules` field with one type-guarded branch per module
/// that registered a query hook.
///
/// Fails when a hook returns a fragment that is not brace-delimited, naming
/// the offending module.
pub fn modules_field(config: &KitConfig, language: Option<&str>) -> Result<String> {
    let mut conditionals = Vec::new();

    for module in &config.modules {
        let Some(query) = &module.query else {
            continue;
        };

        let fragment = query(language);
        if !is_valid_projection(&fragment) {
            return Err(QueryError::InvalidModuleQuery {
                module: module.name.clone(),
            });
        }

        conditionals.push(format!(
            "_type == \"{}\" => {}",
            module.name,
            fragment.trim()
        ));
    }

    let mut nested = vec!["...".to_string()];
    nested.extend(conditionals.iter().cloned());
    let preset = format!(
        "_type == \"{PRESET_TYPE}\" => @->{{ \"data\": modules[] {{ {} }} }}",
        nested.join(", ")
    );

    let mut entries = vec!["...".to_string()];
    entries.extend(conditionals);
    entries.push(preset);

    let array = match language {
        Some(language) => format!("modules.{language}[]"),
        None => "modules[]".to_string(),
    };

    Ok(format!("\"modules\": {array} {{ {} }}", entries.join(", ")))
}

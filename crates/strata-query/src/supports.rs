//! The capability field composer.
//!
//! Walks the fixed capability vocabulary in declared order and emits one
//! field per capability the schema object opts into; `modules` delegates to
//! the modules composer. Capabilities absent from `supports` are omitted
//! entirely.

use crate::error::{QueryError, Result};
use crate::modules::modules_field;
use strata_core::{Capability, KitConfig};

/// Composes the capability fields for the named schema object.
///
/// The name is resolved across content types, entities, and taxonomies;
/// an unregistered name is a fatal configuration error.
pub fn supports_fields(config: &KitConfig, name: &str, language: Option<&str>) -> Result<String> {
    let schema_object = config
        .schema_object(name)
        .ok_or_else(|| QueryError::UnknownSchemaObject(name.to_string()))?;

    let mut fields = Vec::new();

    for capability in Capability::ALL {
        if !schema_object.supports_capability(capability) {
            continue;
        }

        if capability == Capability::Modules {
            fields.push(modules_field(config, language)?);
        } else {
            let token = capability.as_str();
            match language {
                Some(language) => fields.push(format!("\"{token}\": {token}.{language}")),
                None => fields.push(format!("\"{token}\": {token}")),
            }
        }
    }

    Ok(fields.join(", "))
}

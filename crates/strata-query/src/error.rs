//! Error types for query composition.
//!
//! Composition is deterministic and side-effect-free, so every failure here
//! is fatal and non-retryable: a retry would reproduce the identical error.

use thiserror::Error;

/// Result type alias for query composition.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors that can occur while composing query text.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Caller-supplied projection is not a brace-delimited object literal.
    #[error("Invalid projection for {context}: must start and end with a curly brace")]
    InvalidProjection {
        /// The assembler that rejected the projection.
        context: &'static str,
    },

    /// A module's query hook returned a malformed fragment.
    #[error("Invalid query fragment for module \"{module}\": must start and end with a curly brace")]
    InvalidModuleQuery {
        /// Name of the offending module.
        module: String,
    },

    /// Content type name not found in the registry.
    #[error("Content type \"{0}\" is not registered")]
    UnknownContentType(String),

    /// Taxonomy name not found in the registry.
    #[error("Taxonomy \"{0}\" is not registered")]
    UnknownTaxonomy(String),

    /// Entity name not found in the registry.
    #[error("Entity \"{0}\" is not registered")]
    UnknownEntity(String),

    /// Settings group name not found in the registry.
    #[error("Settings group \"{0}\" does not exist")]
    UnknownSettingsGroup(String),

    /// Name not found among content types, entities, or taxonomies.
    #[error("Schema object \"{0}\" is not registered")]
    UnknownSchemaObject(String),

    /// Splicer invoked on text with no closing brace. Internal producers
    /// always emit well-formed fragments, so this indicates a composer bug
    /// rather than bad input.
    #[error("Projection has no closing brace to splice into")]
    MissingClosingBrace,
}

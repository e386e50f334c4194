//! Error types for configuration loading.
//!
//! All of these fire at configuration-merge time, before any query is ever
//! composed; an invalid schema can never reach the composers.

use thiserror::Error;

/// Result type alias for configuration building.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while merging and validating a kit configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A module was registered without the mandatory `module.` prefix.
    #[error("Module name \"{name}\" does not start with \"module.\"")]
    InvalidModuleName {
        /// The offending module name.
        name: String,
    },

    /// A content type declared a rewrite template without the `:slug`
    /// placeholder, making its documents unroutable.
    #[error("Rewrite path \"{path}\" for content type \"{name}\" does not include \":slug\"")]
    InvalidRewrite {
        /// The content type carrying the template.
        name: String,
        /// The offending template.
        path: String,
    },
}

//! # strata-config
//!
//! Built-in default schemas and the one-time configuration merge for the
//! strata kit. The output is an immutable
//! [`KitConfig`](strata_core::KitConfig) consulted synchronously by every
//! query composer; nothing here mutates after [`KitConfigBuilder::build`].

mod builder;
mod defaults;
mod error;

pub use builder::KitConfigBuilder;
pub use defaults::{
    default_content_types, default_entities, default_settings, default_taxonomies,
};
pub use error::{ConfigError, Result};

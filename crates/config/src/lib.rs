//! Configuration store for envbind schemas
//!
//! This crate layers JSON or YAML configuration sources under the
//! environment variables bound from a schema, using figment as the
//! resolution engine.

pub mod error;
pub mod format;
pub mod loader;
pub mod store;

#[cfg(test)]
mod test_support;

pub use error::{ConfigError, Result};
pub use format::ConfigFormat;
pub use loader::ConfigLoader;
pub use store::{ConfigStore, EnvBinding};

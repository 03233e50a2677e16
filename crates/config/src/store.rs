//! Figment-backed configuration store
//!
//! Layers, lowest precedence first: serialized defaults, configuration
//! sources in the order they were merged, then every bound environment
//! variable in registration order.

use crate::error::{ConfigError, Result};
use crate::format::ConfigFormat;
use envbind::EnvStore;
use figment::{
    providers::{Format, Json, Serialized, Yaml},
    value::Value,
    Figment,
};
use serde::{de::DeserializeOwned, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// A registered environment variable binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvBinding {
    /// Dotted configuration key
    pub key: String,
    /// Environment variable consulted for the key
    pub env_var: String,
}

#[derive(Debug, Clone)]
enum Source {
    Defaults(Value),
    Content { format: ConfigFormat, content: String },
    File { format: ConfigFormat, path: PathBuf },
}

/// Configuration store resolving values from defaults, files and bound
/// environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    env_prefix: String,
    bindings: Vec<EnvBinding>,
    sources: Vec<Source>,
}

impl ConfigStore {
    /// Create an empty store without an environment variable prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with an environment variable prefix
    pub fn with_env_prefix(prefix: impl Into<String>) -> Self {
        Self {
            env_prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Set the prefix used for environment variable names bound from now on
    pub fn set_env_prefix(&mut self, prefix: impl Into<String>) {
        self.env_prefix = prefix.into();
    }

    /// Registered bindings in registration order
    pub fn bindings(&self) -> &[EnvBinding] {
        &self.bindings
    }

    /// Use the serialized form of `value` as the lowest precedence layer
    pub fn set_defaults<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let value = Value::serialize(value).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        // Later defaults override earlier ones but stay below every other source.
        let at = self
            .sources
            .iter()
            .take_while(|source| matches!(source, Source::Defaults(_)))
            .count();
        self.sources.insert(at, Source::Defaults(value));
        Ok(())
    }

    /// Layer configuration from an in-memory document
    pub fn merge_str(&mut self, format: ConfigFormat, content: impl Into<String>) {
        debug!(%format, "Merging configuration from string");
        self.sources.push(Source::Content {
            format,
            content: content.into(),
        });
    }

    /// Layer configuration from a file, inferring its format from the extension
    pub fn merge_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        debug!(path = %path.display(), %format, "Merging configuration file");
        self.sources.push(Source::File {
            format,
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// The layered figment for every source and binding registered so far
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new();

        for source in &self.sources {
            figment = match source {
                Source::Defaults(value) => figment.merge(Serialized::defaults(value.clone())),
                Source::Content { format: ConfigFormat::Json, content } => {
                    figment.merge(Json::string(content))
                }
                Source::Content { format: ConfigFormat::Yaml, content } => {
                    figment.merge(Yaml::string(content))
                }
                Source::File { format: ConfigFormat::Json, path } => figment.merge(Json::file(path)),
                Source::File { format: ConfigFormat::Yaml, path } => figment.merge(Yaml::file(path)),
            };
        }

        // Env values stay raw strings under the exact bound key; the target
        // type decides how to read them at extraction.
        for binding in &self.bindings {
            match env::var(&binding.env_var) {
                Ok(raw) => {
                    trace!(key = %binding.key, env_var = %binding.env_var, "Layering bound environment variable");
                    figment = figment.merge(Serialized::default(&binding.key, raw));
                }
                Err(env::VarError::NotUnicode(_)) => {
                    warn!(env_var = %binding.env_var, "Ignoring non-unicode environment variable");
                }
                Err(env::VarError::NotPresent) => {}
            }
        }

        figment
    }

    /// Deserialize the layered configuration
    ///
    /// String values are read leniently, so `"8080"` extracts into a `u16`
    /// while `"12345"` still extracts into a `String`.
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(self.figment().extract_lossy()?)
    }
}

impl EnvStore for ConfigStore {
    fn bind_env(&mut self, key: &str, env_var: &str) {
        self.bindings.push(EnvBinding {
            key: key.to_string(),
            env_var: env_var.to_string(),
        });
    }

    fn env_prefix(&self) -> &str {
        &self.env_prefix
    }
}

//! Configuration loader implementation

use crate::error::{ConfigError, Result};
use crate::format::ConfigFormat;
use crate::store::ConfigStore;
use envbind::Describe;
use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Configuration loader that binds a schema's environment variables and
/// layers them over a JSON or YAML source
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    env_prefix: String,
}

impl ConfigLoader {
    /// Loader without an environment variable prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every bound environment variable with `prefix`
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// A store with every environment variable of `T` already bound
    pub fn store<T: Describe + ?Sized>(&self) -> ConfigStore {
        let mut store = ConfigStore::with_env_prefix(self.env_prefix.clone());
        envbind::bind_type::<T, _>(&mut store);
        debug!(bindings = store.bindings().len(), "Bound configuration schema");
        store
    }

    /// Load configuration from file and environment variables
    pub fn load<T, P>(&self, config_path: P) -> Result<T>
    where
        T: Describe + DeserializeOwned,
        P: AsRef<Path>,
    {
        let config_path = config_path.as_ref();

        let mut store = self.store::<T>();
        store.merge_file(config_path)?;
        let config = store.extract()?;

        info!(path = %config_path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from string and environment variables
    pub fn load_from_str<T>(&self, format: ConfigFormat, content: &str) -> Result<T>
    where
        T: Describe + DeserializeOwned,
    {
        let mut store = self.store::<T>();
        store.merge_str(format, content);
        store.extract()
    }

    /// Create example configuration file from `T::default()`
    pub fn create_example<T, P>(path: P) -> Result<()>
    where
        T: Serialize + Default,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let config = T::default();
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(&config)?,
            ConfigFormat::Yaml => serde_yaml::to_string(&config)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use envbind::Schema;
    use serde::Deserialize;
    use serial_test::serial;
    use tempfile::Builder;

    #[derive(Debug, Default, Serialize, Deserialize, Schema)]
    struct Config {
        #[envbind(key = "server")]
        server: Server,
        #[envbind(key = "auth")]
        auth: Auth,
    }

    #[derive(Debug, Default, Serialize, Deserialize, Schema)]
    struct Server {
        #[envbind(key = "http")]
        http: Http,
    }

    #[derive(Debug, Default, Serialize, Deserialize, Schema)]
    struct Http {
        #[envbind(key = "port")]
        port: u16,
    }

    #[derive(Debug, Default, Serialize, Deserialize, Schema)]
    struct Auth {
        #[envbind(key = "token")]
        token: String,
    }

    #[test]
    #[serial]
    fn test_load_from_string() {
        let _env = EnvGuard::set(&[("LOADER_AUTH_TOKEN", "ABCDEFG")]);

        let yaml_content = r#"
server:
  http:
    port: 80
auth:
  token: "from_yaml"
"#;

        let config: Config = ConfigLoader::new()
            .env_prefix("loader")
            .load_from_str(ConfigFormat::Yaml, yaml_content)
            .unwrap();
        assert_eq!(config.server.http.port, 80);
        assert_eq!(config.auth.token, "ABCDEFG");
    }

    #[test]
    #[serial]
    fn test_env_fills_missing_values() {
        let _env = EnvGuard::set(&[("AUTH_TOKEN", "ABCDEFG")]);

        let config: Config = ConfigLoader::new()
            .load_from_str(ConfigFormat::Json, r#"{"server":{"http":{"port":80}}}"#)
            .unwrap();
        assert_eq!(config.server.http.port, 80);
        assert_eq!(config.auth.token, "ABCDEFG");
    }

    #[test]
    #[serial]
    fn test_missing_value_fails_extraction() {
        let result: Result<Config> = ConfigLoader::new()
            .env_prefix("missing")
            .load_from_str(ConfigFormat::Json, r#"{"server":{"http":{"port":80}}}"#);
        assert!(matches!(result, Err(ConfigError::Extract(_))));
    }

    #[test]
    fn test_store_binds_schema() {
        let store = ConfigLoader::new().env_prefix("app").store::<Config>();
        let env_vars: Vec<_> = store.bindings().iter().map(|b| b.env_var.as_str()).collect();
        assert_eq!(env_vars, ["APP_SERVER_HTTP_PORT", "APP_AUTH_TOKEN"]);
    }

    #[test]
    #[serial]
    fn test_create_example_and_load() {
        let _env = EnvGuard::set(&[("EXAMPLE_SERVER_HTTP_PORT", "8080")]);

        let file = Builder::new().suffix(".yaml").tempfile().unwrap();
        ConfigLoader::create_example::<Config, _>(file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("server:"));
        assert!(content.contains("token:"));

        let config: Config = ConfigLoader::new()
            .env_prefix("example")
            .load(file.path())
            .unwrap();
        assert_eq!(config.server.http.port, 8080);
        assert_eq!(config.auth.token, "");
    }

    #[test]
    fn test_load_missing_file() {
        let result: Result<Config> = ConfigLoader::new().load("/nonexistent/config.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }
}

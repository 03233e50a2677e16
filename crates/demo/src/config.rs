//! Demo configuration schema

use envbind::Schema;
use serde::{Deserialize, Serialize};

/// Configuration document used when no file is given
pub const DEFAULT_CONFIG: &str = r#"{"server":{"http":{"port":80}}}"#;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema)]
#[serde(default)]
pub struct Config {
    #[envbind(key = "server")]
    pub server: Server,
    #[envbind(key = "auth")]
    pub auth: Auth,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema)]
#[serde(default)]
pub struct Server {
    #[envbind(key = "http")]
    pub http: Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema)]
#[serde(default)]
pub struct Http {
    #[envbind(key = "port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Schema)]
#[serde(default)]
pub struct Auth {
    #[envbind(key = "token")]
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use envbind_config::{ConfigFormat, ConfigLoader};

    #[test]
    fn test_demo_bindings() {
        let store = ConfigLoader::new().store::<Config>();
        let bindings: Vec<_> = store
            .bindings()
            .iter()
            .map(|b| (b.key.as_str(), b.env_var.as_str()))
            .collect();
        assert_eq!(
            bindings,
            [("server.http.port", "SERVER_HTTP_PORT"), ("auth.token", "AUTH_TOKEN")]
        );
    }

    #[test]
    fn test_full_document_without_env() {
        let config: Config = ConfigLoader::new()
            .env_prefix("envbind_demo_test")
            .load_from_str(
                ConfigFormat::Json,
                r#"{"server":{"http":{"port":8080}},"auth":{"token":"abc"}}"#,
            )
            .unwrap();
        assert_eq!(config.server.http.port, 8080);
        assert_eq!(config.auth.token, "abc");
    }
}

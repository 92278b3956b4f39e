use anyhow::ensure;
use serde::Deserialize;

/// Process-wide settings, deserialized once at start-up from the environment
/// and passed by reference into the router and handlers.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_flapper_version")]
    pub flapper_version: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_version_prefix")]
    pub version_prefix: String,

    #[serde(default = "default_env_var_prefix")]
    pub env_var_prefix: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default)]
    pub cors_permissive: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            flapper_version: default_flapper_version(),
            version_file: default_version_file(),
            version_prefix: default_version_prefix(),
            env_var_prefix: default_env_var_prefix(),
            server_port: default_server_port(),
            cors_permissive: false,
        }
    }
}

impl AppConfig {
    /// Startup-time validation. The two serving prefixes share one router, so
    /// they must differ, and axum requires route paths to begin with `/`.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.env_var_prefix != self.version_prefix,
            "ENV_VAR_PREFIX and VERSION_PREFIX cannot be the same"
        );
        for prefix in [&self.env_var_prefix, &self.version_prefix] {
            ensure!(
                prefix.starts_with('/'),
                "serving prefix {prefix:?} must begin with '/'"
            );
        }

        Ok(())
    }
}

fn default_flapper_version() -> String {
    "0.0.0-dev (not set)".to_string()
}

fn default_version_file() -> String {
    "example.json".to_string()
}

fn default_version_prefix() -> String {
    "/version".to_string()
}

fn default_env_var_prefix() -> String {
    "/env".to_string()
}

fn default_server_port() -> u16 {
    8080
}

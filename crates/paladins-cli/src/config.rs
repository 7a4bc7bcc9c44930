/*
[INPUT]:  YAML configuration file and PALADINS_* environment variables
[OUTPUT]: Client options ready for merging with library defaults
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;

use anyhow::Context;
use paladins_api::{ClientConfig, ClientOptions};
use serde::{Deserialize, Serialize};

pub const DEV_ID_ENV: &str = "PALADINS_DEV_ID";
pub const AUTH_KEY_ENV: &str = "PALADINS_AUTH_KEY";

/// Top-level configuration for the CLI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Client options; anything left out falls back to library defaults
    #[serde(default)]
    pub api: ClientOptions,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        Ok(config)
    }

    /// Fill missing credentials from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    pub fn with_env_from(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env = ClientOptions {
            dev_id: lookup(DEV_ID_ENV),
            auth_key: lookup(AUTH_KEY_ENV),
            ..ClientOptions::default()
        };
        Self {
            api: self.api.or(env),
        }
    }

    pub fn client_config(self) -> anyhow::Result<ClientConfig> {
        self.api.merge_defaults().context("resolve client options")
    }
}

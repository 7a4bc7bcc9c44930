/*
[INPUT]:  Partially specified client options (YAML, code, environment)
[OUTPUT]: Fully resolved client configuration
[POS]:    Configuration layer - defaults and validation
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::http::{PaladinsError, Result};
use crate::types::Language;

pub const DEFAULT_BASE_URL: &str = "http://api.paladins.com/paladinsapi.svc";
pub const DEFAULT_SESSION_PATH: &str = ".paladins-config/session.json";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Resolved configuration for [`crate::PaladinsClient`]
#[derive(Clone)]
pub struct ClientConfig {
    pub dev_id: String,
    pub auth_key: String,
    /// Language sent to localized endpoints
    pub language: Language,
    pub base_url: String,
    /// Where the session record is persisted
    pub session_path: PathBuf,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the credentials
    pub fn new(dev_id: impl Into<String>, auth_key: impl Into<String>) -> Self {
        Self {
            dev_id: dev_id.into(),
            auth_key: auth_key.into(),
            language: Language::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("dev_id", &self.dev_id)
            .field("auth_key", &"<redacted>")
            .field("language", &self.language)
            .field("base_url", &self.base_url)
            .field("session_path", &self.session_path)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// User-facing options; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClientOptions {
    #[serde(default, deserialize_with = "string_or_number")]
    pub dev_id: Option<String>,
    #[serde(default)]
    pub auth_key: Option<String>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub session_path: Option<PathBuf>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl ClientOptions {
    /// Fill unset fields from `fallback`
    pub fn or(self, fallback: ClientOptions) -> ClientOptions {
        ClientOptions {
            dev_id: non_empty(self.dev_id).or(fallback.dev_id),
            auth_key: non_empty(self.auth_key).or(fallback.auth_key),
            language: self.language.or(fallback.language),
            base_url: non_empty(self.base_url).or(fallback.base_url),
            session_path: self.session_path.or(fallback.session_path),
            timeout_secs: self.timeout_secs.or(fallback.timeout_secs),
            connect_timeout_secs: self.connect_timeout_secs.or(fallback.connect_timeout_secs),
        }
    }

    /// Apply defaults. Credentials have none and must be present.
    pub fn merge_defaults(self) -> Result<ClientConfig> {
        let dev_id = non_empty(self.dev_id)
            .ok_or_else(|| PaladinsError::Config("dev_id is required".to_string()))?;
        let auth_key = non_empty(self.auth_key)
            .ok_or_else(|| PaladinsError::Config("auth_key is required".to_string()))?;

        let mut config = ClientConfig::new(dev_id, auth_key);
        if let Some(language) = self.language {
            config.language = language;
        }
        if let Some(base_url) = non_empty(self.base_url) {
            config.base_url = base_url;
        }
        if let Some(session_path) = self.session_path {
            config.session_path = session_path;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Developer ids are numeric but may be written either way
fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Number(n) => n.to_string(),
        Raw::Text(s) => s,
    }))
}

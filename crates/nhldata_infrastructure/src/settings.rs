use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::env;
use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";
pub const DEFAULT_BUCKET: &str = "output";

// Environment variables that take precedence over the config file.
const ENV_OVERRIDES: [(&str, &str); 6] = [
    ("api.base_url", "NHL_API_BASE_URL"),
    ("api.timeout_secs", "NHL_API_TIMEOUT_SECS"),
    ("storage.bucket", "DEST_BUCKET"),
    ("storage.endpoint_url", "S3_ENDPOINT_URL"),
    ("storage.backend", "STORAGE_BACKEND"),
    ("logger.level", "LOG_LEVEL"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    pub base_url: String,
    // Applies to the whole request, connection through body.
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    S3,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    pub bucket: String,
    // S3 compatible endpoint (localstack, minio). Uses AWS when unset.
    pub endpoint_url: Option<String>,
    pub backend: StorageBackend,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api: Api,
    pub storage: Storage,
    pub logger: Logger,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        };

        Self::load(&format!("config/{config}"), |name| env::var(name).ok())
    }

    pub fn load<F>(config_file: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder()
            .set_default("api.base_url", DEFAULT_API_BASE_URL)?
            .set_default("api.timeout_secs", 30_i64)?
            .set_default("storage.bucket", DEFAULT_BUCKET)?
            .set_default("storage.backend", "s3")?
            .set_default("logger.level", "info")?
            .add_source(File::with_name(config_file).required(false));

        for (key, variable) in ENV_OVERRIDES {
            builder = builder.set_override_option(key, lookup(variable))?;
        }

        builder
            .build()?
            // Deserialize (and thus freeze) the entire configuration.
            .try_deserialize()
    }
}

impl fmt::Display for Storage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.endpoint_url {
            Some(endpoint) => write!(f, "{}/{}", endpoint.trim_end_matches('/'), &self.bucket),
            None => write!(f, "s3://{}", &self.bucket),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const NO_FILE: &str = "config/does-not-exist";
    const DEBUG_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/debug");

    fn load_with(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::load(NO_FILE, |name| vars.get(name).cloned()).unwrap()
    }

    #[test]
    fn defaults_apply_without_file_or_environment() {
        let settings = load_with(&[]);

        assert_eq!(settings.api.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(settings.api.timeout_secs, 30);
        assert_eq!(settings.storage.bucket, "output");
        assert_eq!(settings.storage.endpoint_url, None);
        assert_eq!(settings.storage.backend, StorageBackend::S3);
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        let settings = load_with(&[
            ("DEST_BUCKET", "nhl-stats"),
            ("S3_ENDPOINT_URL", "http://localhost:4566"),
            ("NHL_API_TIMEOUT_SECS", "5"),
            ("STORAGE_BACKEND", "memory"),
        ]);

        assert_eq!(settings.storage.bucket, "nhl-stats");
        assert_eq!(
            settings.storage.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(settings.api.timeout_secs, 5);
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = Settings::load(NO_FILE, |name| {
            (name == "STORAGE_BACKEND").then(|| "ftp".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn storage_display_shows_destination() {
        let mut settings = load_with(&[]);
        assert_eq!(settings.storage.to_string(), "s3://output");

        settings.storage.endpoint_url = Some("http://localhost:4566/".to_string());
        assert_eq!(settings.storage.to_string(), "http://localhost:4566/output");
    }

    #[test]
    fn debug_config_targets_aws_unless_endpoint_is_set() {
        let settings = Settings::load(DEBUG_FILE, |_| None).unwrap();
        assert_eq!(settings.logger.level, "debug");
        assert_eq!(settings.storage.endpoint_url, None);

        let settings = Settings::load(DEBUG_FILE, |name| {
            (name == "S3_ENDPOINT_URL").then(|| "http://localhost:4566".to_string())
        })
        .unwrap();
        assert_eq!(
            settings.storage.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
    }
}

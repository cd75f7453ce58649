use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const ENV_BASE_URL: &str = "GYM_DETECTOR_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "GYM_DETECTOR_TIMEOUT_SECS";
pub const ENV_MAX_UPLOAD_BYTES: &str = "GYM_DETECTOR_MAX_UPLOAD_BYTES";
pub const ENV_KNOWLEDGE_BASE: &str = "GYM_DETECTOR_KNOWLEDGE_BASE";
pub const ENV_FAKE_PREDICTOR: &str = "GYM_DETECTOR_FAKE_PREDICTOR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base url must use http or https, got {0:?}")]
    UnsupportedScheme(String),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub prediction_base_url: String,
    pub request_timeout: Duration,
    pub max_upload_bytes: u64,
    pub knowledge_base_path: Option<PathBuf>,
    pub use_fake_predictor: bool,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prediction_base_url: "http://192.168.29.95:8000".to_string(),
            request_timeout: Duration::from_secs(30),
            max_upload_bytes: 20 * 1024 * 1024,
            knowledge_base_path: None,
            use_fake_predictor: false,
            logger_timezone: mountain_standard_time(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Applies overrides on top of the defaults using `lookup` to read each
    /// variable, then validates the result.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BASE_URL) {
            config.prediction_base_url = value.trim().to_string();
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: ENV_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup(ENV_MAX_UPLOAD_BYTES) {
            config.max_upload_bytes =
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidValue {
                        name: ENV_MAX_UPLOAD_BYTES,
                        value: value.clone(),
                    })?;
        }

        if let Some(value) = lookup(ENV_KNOWLEDGE_BASE) {
            if !value.trim().is_empty() {
                config.knowledge_base_path = Some(PathBuf::from(value.trim()));
            }
        }

        if let Some(value) = lookup(ENV_FAKE_PREDICTOR) {
            config.use_fake_predictor = match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" | "" => false,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: ENV_FAKE_PREDICTOR,
                        value,
                    })
                }
            };
        }

        config.predict_url()?;

        Ok(config)
    }

    /// The fixed `{base}/predict/` endpoint.
    pub fn predict_url(&self) -> Result<Url, ConfigError> {
        let mut base = self.prediction_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }

        let parsed = Url::parse(&base).map_err(|source| ConfigError::InvalidBaseUrl {
            value: self.prediction_base_url.clone(),
            source,
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(parsed.scheme().to_string()));
        }

        parsed
            .join("predict/")
            .map_err(|source| ConfigError::InvalidBaseUrl {
                value: self.prediction_base_url.clone(),
                source,
            })
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}

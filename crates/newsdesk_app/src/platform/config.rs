use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use news_logging::{news_info, news_warn};
use newsdesk_core::Timings;
use newsdesk_engine::ApiSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILENAME: &str = "newsdesk.ron";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub timings: TimingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub fetch_news_path: String,
    pub process_news_path: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
}

/// Presentation delays in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub search_transition_ms: u64,
    pub reset_transition_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let settings = ApiSettings::default();
        Self {
            base_url: settings.base_url,
            fetch_news_path: settings.fetch_news_path,
            process_news_path: settings.process_news_path,
            connect_timeout_secs: settings.connect_timeout.as_secs(),
            request_timeout_secs: settings.request_timeout.as_secs(),
            max_body_bytes: settings.max_bytes,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timings = Timings::default();
        Self {
            search_transition_ms: timings.search_transition.as_millis() as u64,
            reset_transition_ms: timings.reset_transition.as_millis() as u64,
        }
    }
}

impl AppConfig {
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            base_url: self.api.base_url.clone(),
            fetch_news_path: self.api.fetch_news_path.clone(),
            process_news_path: self.api.process_news_path.clone(),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.api.request_timeout_secs),
            max_bytes: self.api.max_body_bytes,
        }
    }

    pub fn timings(&self) -> Timings {
        Timings {
            search_transition: Duration::from_millis(self.timings.search_transition_ms),
            reset_transition: Duration::from_millis(self.timings.reset_transition_ms),
        }
    }
}

/// Loads the config.
///
/// An explicit path must exist and parse. Without one, `./newsdesk.ron` is
/// used when present and defaults otherwise.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILENAME);
            if path.exists() {
                read_config(path)
            } else {
                news_info!("No {} found, using default config", DEFAULT_CONFIG_FILENAME);
                Ok(AppConfig::default())
            }
        }
    }
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: AppConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    if config.api.request_timeout_secs == 0 {
        news_warn!("request_timeout_secs is 0; every request will time out immediately");
    }
    news_info!("Loaded config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let file = write_temp(
            r#"(
                api: (base_url: "https://news.example.com", fetch_news_path: "/api/fetch"),
                timings: (search_transition_ms: 250),
            )"#,
        );

        let config = load(Some(file.path())).unwrap();

        assert_eq!(config.api.base_url, "https://news.example.com");
        assert_eq!(config.api.fetch_news_path, "/api/fetch");
        assert_eq!(config.api.process_news_path, ApiConfig::default().process_news_path);
        assert_eq!(
            config.timings(),
            Timings {
                search_transition: Duration::from_millis(250),
                reset_transition: Duration::from_millis(500),
            }
        );
    }

    #[test]
    fn defaults_mirror_engine_and_core_defaults() {
        let config = AppConfig::default();
        let settings = config.api_settings();
        let engine = ApiSettings::default();

        assert_eq!(settings.base_url, engine.base_url);
        assert_eq!(settings.request_timeout, engine.request_timeout);
        assert_eq!(settings.max_bytes, engine.max_bytes);
        assert_eq!(config.timings(), Timings::default());
    }

    #[test]
    fn round_trips_through_ron() {
        let config = AppConfig::default();
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let file = write_temp(&text);

        assert_eq!(load(Some(file.path())).unwrap(), config);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.ron");

        let err = load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_temp("(api: (base_url: 42))");

        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));
    }
}

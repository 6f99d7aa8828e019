//! Application configuration. TMDB credentials, paths, fixture latency.

use serde::Deserialize;

/// TMDB v3 REST root.
pub const DEFAULT_TMDB_API_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// TMDB API key (v3) or read access token (v4). Read from MOVIE_FEED_TMDB_API_KEY or TMDB_API_KEY.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API root. Read from MOVIE_FEED_TMDB_API_URL.
    #[serde(default)]
    pub tmdb_api_url: Option<String>,

    /// Response language, e.g. "en-US" or "id-ID". Read from MOVIE_FEED_LANGUAGE.
    #[serde(default)]
    pub language: Option<String>,

    /// Directory for favorites.json. Read from MOVIE_FEED_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// HTTP request timeout in seconds (default 15). Read from MOVIE_FEED_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Simulated latency of the offline fixture catalog (default 150). Read from MOVIE_FEED_FIXTURE_DELAY_MS.
    #[serde(default)]
    pub fixture_delay_ms: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MOVIE_FEED"));
        if let Ok(path) = std::env::var("MOVIE_FEED_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Numeric env values arrive as strings; parse them explicitly so a bad value falls back to the default
        if let Ok(s) = std::env::var("MOVIE_FEED_REQUEST_TIMEOUT_SECS") {
            cfg.request_timeout_secs = s.parse::<u64>().ok();
        }
        if let Ok(s) = std::env::var("MOVIE_FEED_FIXTURE_DELAY_MS") {
            cfg.fixture_delay_ms = s.parse::<u64>().ok();
        }
        Ok(cfg)
    }

    /// Returns the TMDB key from config, or the conventional TMDB_API_KEY env var.
    pub fn tmdb_api_key(&self) -> Option<String> {
        self.tmdb_api_key
            .clone()
            .or_else(|| std::env::var("TMDB_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn tmdb_api_url_or_default(&self) -> String {
        self.tmdb_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_TMDB_API_URL.to_string())
    }

    pub fn language_or_default(&self) -> String {
        self.language.clone().unwrap_or_else(|| "en-US".to_string())
    }

    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(15)
    }

    pub fn fixture_delay_ms_or_default(&self) -> u64 {
        self.fixture_delay_ms.unwrap_or(150)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.tmdb_api_url_or_default(), DEFAULT_TMDB_API_URL);
        assert_eq!(cfg.language_or_default(), "en-US");
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.request_timeout_secs_or_default(), 15);
        assert_eq!(cfg.fixture_delay_ms_or_default(), 150);
    }

    #[test]
    fn configured_values_win() {
        let cfg = AppConfig {
            tmdb_api_key: Some("k".into()),
            language: Some("id-ID".into()),
            fixture_delay_ms: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.tmdb_api_key(), Some("k".to_string()));
        assert_eq!(cfg.language_or_default(), "id-ID");
        assert_eq!(cfg.fixture_delay_ms_or_default(), 0);
    }

    #[test]
    fn blank_key_is_not_configured() {
        let cfg = AppConfig {
            tmdb_api_key: Some("  ".into()),
            ..AppConfig::default()
        };
        assert_eq!(cfg.tmdb_api_key(), None);
    }
}

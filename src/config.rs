use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Password for the admin panel; empty disables login entirely
    #[serde(default)]
    pub admin_password: String,
    /// Ticker rotation period in seconds
    #[serde(default = "default_ticker_rotate_seconds")]
    pub ticker_rotate_seconds: u64,
    /// Simulated RSS retrieval latency in milliseconds
    #[serde(default = "default_rss_fetch_delay_ms")]
    pub rss_fetch_delay_ms: u64,
    #[serde(default)]
    pub weather: WeatherConfig,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_ticker_rotate_seconds() -> u64 {
    15
}

fn default_rss_fetch_delay_ms() -> u64 {
    1500
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Upstream API key; absent means the canned snapshot is served
    pub api_key: Option<String>,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Refresh interval in minutes
    #[serde(default = "default_weather_refresh_minutes")]
    pub refresh_minutes: u64,
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_weather_refresh_minutes() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_base_url(),
            refresh_minutes: default_weather_refresh_minutes(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        assert_eq!(default_bind_addr(), "0.0.0.0:3000");
        assert_eq!(default_ticker_rotate_seconds(), 15);
        assert_eq!(default_rss_fetch_delay_ms(), 1500);
        assert_eq!(default_weather_refresh_minutes(), 30);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            bind_addr = "127.0.0.1:8080"
            admin_password = "hunter2"
            ticker_rotate_seconds = 5

            [weather]
            api_key = "abc123"
            refresh_minutes = 10
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.admin_password, "hunter2");
        assert_eq!(config.ticker_rotate_seconds, 5);
        assert_eq!(config.rss_fetch_delay_ms, 1500); // Default value
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.weather.refresh_minutes, 10);
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = Config::from_str("").unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(config.admin_password.is_empty());
        assert_eq!(config.ticker_rotate_seconds, 15);
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.refresh_minutes, 30);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_weather_section_optional() {
        let config = Config::from_str(r#"admin_password = "x""#).unwrap();
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.weather.base_url, "https://api.weatherapi.com/v1");
    }
}

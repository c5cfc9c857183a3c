//! Weather snapshot for the sidebar widget.
//!
//! One upstream REST call (WeatherAPI `forecast.json`) mapped into the
//! portal's own shape. Every failure path — no key configured, network
//! error, non-success status, unparsable payload — degrades to a fixed
//! canned Tunis snapshot instead of surfacing an error.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::config::WeatherConfig;
use crate::models::{ForecastDay, WeatherData};

/// Reference coordinate used when the caller provides none.
pub const TUNIS_LAT: f64 = 36.8065;
pub const TUNIS_LON: f64 = 10.1815;

/// Provider condition code to display glyph. Codes outside the table render
/// as sunny; a lossy simplification, not a data error.
pub fn icon_for_code(code: i64) -> &'static str {
    match code {
        1003 => "⛅",
        1006 | 1009 => "☁️",
        1030 | 1135 | 1147 => "🌫️",
        1063 | 1150 | 1153 | 1180 | 1183 | 1186 | 1189 | 1192 | 1195 | 1240 | 1243 | 1246 => "🌧️",
        1066 | 1114 | 1117 | 1210 | 1213 | 1216 | 1219 | 1222 | 1225 | 1255 | 1258 => "🌨️",
        1087 | 1273 | 1276 | 1279 | 1282 => "⛈️",
        _ => "☀️",
    }
}

/// Canned snapshot served whenever the live path is unavailable.
pub fn fallback_snapshot() -> WeatherData {
    fn day(day: &str, high: i32, low: i32, description: &str, icon: &str) -> ForecastDay {
        ForecastDay {
            day: day.to_string(),
            high,
            low,
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    WeatherData {
        location: "Tunis, Tunisia".to_string(),
        temperature: 22,
        description: "Partly Cloudy".to_string(),
        humidity: 65,
        wind_speed: 12,
        icon: "⛅".to_string(),
        forecast: vec![
            day("Today", 24, 18, "Partly Cloudy", "⛅"),
            day("Tomorrow", 26, 20, "Sunny", "☀️"),
            day("Wednesday", 23, 17, "Cloudy", "☁️"),
            day("Thursday", 25, 19, "Sunny", "☀️"),
            day("Friday", 21, 16, "Rainy", "🌧️"),
            day("Saturday", 22, 18, "Partly Cloudy", "⛅"),
            day("Sunday", 24, 19, "Sunny", "☀️"),
        ],
    }
}

// Subset of the provider response the portal consumes.

#[derive(Debug, Deserialize)]
struct ApiResponse {
    location: ApiLocation,
    current: ApiCurrent,
    forecast: ApiForecast,
}

#[derive(Debug, Deserialize)]
struct ApiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct ApiCurrent {
    temp_c: f64,
    humidity: i64,
    wind_kph: f64,
    condition: ApiCondition,
}

#[derive(Debug, Deserialize)]
struct ApiCondition {
    text: String,
    code: i64,
}

#[derive(Debug, Deserialize)]
struct ApiForecast {
    forecastday: Vec<ApiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ApiForecastDay {
    date: String,
    day: ApiDay,
}

#[derive(Debug, Deserialize)]
struct ApiDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    condition: ApiCondition,
}

pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherClient {
    pub fn new(config: &WeatherConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("TunisToday/1.0 (Weather Widget)")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch a snapshot for the given coordinate. Never fails: any upstream
    /// problem is logged and the canned snapshot is returned instead.
    pub async fn fetch(&self, lat: f64, lon: f64) -> WeatherData {
        match self.try_fetch(lat, lon).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Weather fetch failed, serving canned snapshot: {}", e);
                fallback_snapshot()
            }
        }
    }

    async fn try_fetch(&self, lat: f64, lon: f64) -> anyhow::Result<WeatherData> {
        let Some(key) = self.api_key.as_deref() else {
            bail!("no weather API key configured");
        };

        let url = format!("{}/forecast.json", self.base_url);
        let coordinate = format!("{},{}", lat, lon);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", key),
                ("q", coordinate.as_str()),
                ("days", "7"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            bail!("weather API returned {}", response.status());
        }

        let body: ApiResponse = response
            .json()
            .await
            .context("failed to decode weather payload")?;
        Ok(into_snapshot(body))
    }
}

fn into_snapshot(api: ApiResponse) -> WeatherData {
    let forecast = api
        .forecast
        .forecastday
        .iter()
        .enumerate()
        .map(|(index, day)| ForecastDay {
            day: day_label(&day.date, index),
            high: day.day.maxtemp_c.round() as i32,
            low: day.day.mintemp_c.round() as i32,
            description: day.day.condition.text.clone(),
            icon: icon_for_code(day.day.condition.code).to_string(),
        })
        .collect();

    WeatherData {
        location: format!("{}, {}", api.location.name, api.location.country),
        temperature: api.current.temp_c.round() as i32,
        description: api.current.condition.text.clone(),
        humidity: api.current.humidity as i32,
        wind_speed: api.current.wind_kph.round() as i32,
        icon: icon_for_code(api.current.condition.code).to_string(),
        forecast,
    }
}

fn day_label(date: &str, index: usize) -> String {
    match index {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map(|d| d.format("%A").to_string())
            .unwrap_or_else(|_| date.to_string()),
    }
}

/// Cached snapshot refreshed in the background while the portal runs.
pub struct WeatherService {
    client: WeatherClient,
    cached: RwLock<WeatherData>,
}

impl WeatherService {
    pub fn new(client: WeatherClient) -> Self {
        Self {
            client,
            cached: RwLock::new(fallback_snapshot()),
        }
    }

    pub async fn current(&self) -> WeatherData {
        self.cached.read().await.clone()
    }

    /// Fetch for the given coordinate and update the cache.
    pub async fn refresh(&self, lat: f64, lon: f64) -> WeatherData {
        let snapshot = self.client.fetch(lat, lon).await;
        *self.cached.write().await = snapshot.clone();
        snapshot
    }
}

pub async fn start_weather_refresh(service: Arc<WeatherService>, interval_minutes: u64) {
    let interval = Duration::from_secs(interval_minutes * 60);

    info!("Starting initial weather fetch");
    service.refresh(TUNIS_LAT, TUNIS_LON).await;

    loop {
        tokio::time::sleep(interval).await;
        info!("Starting scheduled weather refresh");
        service.refresh(TUNIS_LAT, TUNIS_LON).await;
    }
}

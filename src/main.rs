mod config;
mod content;
mod fetcher;
mod models;
mod routes;
mod store;
mod ticker;
mod weather;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::fetcher::FeedFetcher;
use crate::routes::AppState;
use crate::store::ArticleStore;
use crate::ticker::{start_ticker_rotation, Ticker};
use crate::weather::{start_weather_refresh, WeatherClient, WeatherService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunis_today=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config_path =
        std::env::var("PORTAL_CONFIG").unwrap_or_else(|_| "portal.toml".to_string());
    let config = Config::load(&config_path)?;
    info!("Loaded configuration from {}", config_path);

    // Seed the in-memory store from the static content tables
    let store = Arc::new(ArticleStore::new(
        content::seed_articles(),
        content::rss_sources(),
    ));

    let fetcher = Arc::new(FeedFetcher::new(Duration::from_millis(
        config.rss_fetch_delay_ms,
    )));

    // Weather cache plus its periodic refresh
    let weather = Arc::new(WeatherService::new(WeatherClient::new(&config.weather)));
    let bg_weather = weather.clone();
    let weather_interval = config.weather.refresh_minutes;
    tokio::spawn(async move {
        start_weather_refresh(bg_weather, weather_interval).await;
    });

    // Ticker rotation
    let ticker = Arc::new(Ticker::new(content::TICKER_LINES.clone()));
    let bg_ticker = ticker.clone();
    let ticker_period = config.ticker_rotate_seconds;
    tokio::spawn(async move {
        start_ticker_rotation(bg_ticker, ticker_period).await;
    });

    let bind_addr = config.bind_addr.clone();
    let state = Arc::new(AppState {
        config,
        store,
        fetcher,
        weather,
        ticker,
    });

    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Server starting on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

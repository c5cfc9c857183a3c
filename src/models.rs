use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display language of the portal. Arabic is the default and renders
/// right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    Fr,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::Fr => "fr",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::Ar => "rtl",
            Lang::Fr => "ltr",
        }
    }

    pub fn toggled(&self) -> Lang {
        match self {
            Lang::Ar => Lang::Fr,
            Lang::Fr => Lang::Ar,
        }
    }
}

/// A string carried in both portal languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Localized {
    pub ar: String,
    pub fr: String,
}

impl Localized {
    pub fn new(ar: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            ar: ar.into(),
            fr: fr.into(),
        }
    }

    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::Ar => &self.ar,
            Lang::Fr => &self.fr,
        }
    }

    /// True when either side is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.ar.trim().is_empty() || self.fr.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: String,
    pub title: Localized,
    pub summary: Localized,
    pub content: Localized,
    pub category: String,
    pub source: String,
    pub source_url: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub is_exclusive: bool,
}

/// Entry in the RSS source registry. `is_active` gates whether a fetch may be
/// triggered; flipping it is an in-memory state change only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RssSource {
    pub id: String,
    pub name: Localized,
    pub url: String,
    pub is_active: bool,
    pub category: String,
}

/// Immutable radio reference data.
#[derive(Debug, Clone, Serialize)]
pub struct RadioStation {
    pub id: String,
    pub name: String,
    pub frequency: String,
    pub country: String,
    pub stream_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub description: String,
    pub icon: String,
}

/// Weather snapshot shown in the sidebar. Transient: refreshed on a timer,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub location: String,
    pub temperature: i32,
    pub description: String,
    pub humidity: i32,
    pub wind_speed: i32,
    pub icon: String,
    pub forecast: Vec<ForecastDay>,
}

//! In-memory working set of articles and RSS sources.
//!
//! Nothing here survives a restart: the article list is seeded from the
//! static content tables and only ever grows by prepending. All mutation goes
//! through the store's methods; handlers never touch the collections
//! directly.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::content;
use crate::models::{Article, Lang, Localized, RssSource};

pub struct ArticleStore {
    articles: RwLock<Vec<Article>>,
    sources: RwLock<Vec<RssSource>>,
}

impl ArticleStore {
    pub fn new(seed: Vec<Article>, sources: Vec<RssSource>) -> Self {
        info!(
            "Seeding store with {} articles and {} RSS sources",
            seed.len(),
            sources.len()
        );
        Self {
            articles: RwLock::new(seed),
            sources: RwLock::new(sources),
        }
    }

    /// Prepend an article. No de-duplication by id; callers own uniqueness.
    pub async fn add(&self, article: Article) {
        self.articles.write().await.insert(0, article);
    }

    pub async fn add_all(&self, articles: Vec<Article>) {
        let mut guard = self.articles.write().await;
        for article in articles {
            guard.insert(0, article);
        }
    }

    pub async fn len(&self) -> usize {
        self.articles.read().await.len()
    }

    /// Display-ready ordered sequence for a category selection. Always a
    /// fresh copy; the backing list is never reordered.
    pub async fn view(&self, category: &str) -> Vec<Article> {
        ordered_view(category, &self.articles.read().await)
    }

    pub async fn sources(&self) -> Vec<RssSource> {
        self.sources.read().await.clone()
    }

    pub async fn source(&self, id: &str) -> Option<RssSource> {
        self.sources.read().await.iter().find(|s| s.id == id).cloned()
    }

    /// Flip a source's active flag, returning the new state, or `None` for an
    /// unknown id.
    pub async fn toggle_source(&self, id: &str) -> Option<bool> {
        let mut guard = self.sources.write().await;
        let source = guard.iter_mut().find(|s| s.id == id)?;
        source.is_active = !source.is_active;
        Some(source.is_active)
    }
}

/// Ordering rule for the article feed.
///
/// For `"all"`: exclusive articles strictly before non-exclusive, descending
/// `published_at` within equal exclusivity. The comparator does not order
/// equal-exclusivity, equal-timestamp items, so the sort must stay stable to
/// keep insertion order for those. Any other selection filters to that
/// category and orders by descending `published_at` alone.
pub fn ordered_view(category: &str, articles: &[Article]) -> Vec<Article> {
    if category == content::ALL_CATEGORIES {
        let mut all = articles.to_vec();
        all.sort_by(|a, b| {
            b.is_exclusive
                .cmp(&a.is_exclusive)
                .then_with(|| b.published_at.cmp(&a.published_at))
        });
        all
    } else {
        let mut filtered: Vec<Article> = articles
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        filtered
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("required bilingual fields are missing")]
    MissingRequiredFields,
}

/// User-entered article fields, pre-validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: Localized,
    pub summary: Localized,
    pub content: Localized,
    pub category: String,
    pub image_url: String,
    pub is_exclusive: bool,
}

impl ArticleDraft {
    /// Validate and construct the article. Both title sides and both content
    /// sides must be non-blank; everything else has defaults.
    pub fn build(self, lang: Lang, now: DateTime<Utc>) -> Result<Article, SubmitError> {
        if self.title.is_blank() || self.content.is_blank() {
            return Err(SubmitError::MissingRequiredFields);
        }

        let category = if self.category.trim().is_empty() {
            content::DEFAULT_CATEGORY.to_string()
        } else {
            self.category
        };

        let image_url = {
            let trimmed = self.image_url.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(Article {
            id: format!("manual-{}", now.timestamp_millis()),
            title: self.title,
            summary: self.summary,
            content: self.content,
            category,
            source: content::manual_source_label(lang).to_string(),
            source_url: "#".to_string(),
            published_at: now,
            image_url,
            is_exclusive: self.is_exclusive,
        })
    }
}

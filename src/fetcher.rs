//! Simulated RSS retrieval.
//!
//! No network I/O happens here: each fetch sleeps a fixed configured delay
//! and synthesizes articles from a canned item table keyed by registry URL.
//! Registered sources without canned items yield one placeholder article, so
//! a known source always produces something. Invocations are independent;
//! overlapping fetches for the same source both complete and may produce
//! duplicate articles.

use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::{info, warn};

use crate::models::{Article, Localized, RssSource};

/// Fixed Arabic-to-French term table used to fill the French side of
/// synthesized articles. Compound phrases come before their substrings so
/// they get a chance to match; anything absent from the table stays verbatim
/// in the output. Not a translation service.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("المنتخب التونسي", "équipe nationale tunisienne"),
    ("مجلس الوزراء", "Conseil des ministres"),
    ("كرة القدم", "football"),
    ("الميزانية", "budget"),
    ("صادرات", "exportations"),
    ("الفوسفات", "phosphate"),
    ("اجتماع", "réunion"),
    ("تونس", "Tunisie"),
];

pub fn translate_to_french(text: &str) -> String {
    let mut translated = text.to_string();
    for (ar, fr) in TRANSLATIONS {
        translated = translated.replace(ar, fr);
    }
    translated
}

struct CannedItem {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    image: &'static str,
    age_hours: i64,
}

/// Canned payloads for the registry URLs that have richer fixtures. The
/// remaining sources fall back to a single generic item.
fn canned_items(url: &str) -> Vec<CannedItem> {
    match url {
        "https://www.tap.info.tn/rss" => vec![
            CannedItem {
                title: "تونس: اجتماع مجلس الوزراء لمناقشة الميزانية العامة للدولة",
                description: "عقد مجلس الوزراء اجتماعاً استثنائياً لمناقشة مشروع الميزانية العامة للدولة للسنة المالية القادمة",
                category: "politics",
                image: "https://images.unsplash.com/photo-1586339949916-3e9457bef6d3?w=800&h=400&fit=crop",
                age_hours: 0,
            },
            CannedItem {
                title: "إطلاق برنامج جديد لدعم المؤسسات الصغرى والمتوسطة",
                description: "أعلنت وزارة الصناعة عن إطلاق برنامج جديد لدعم المؤسسات الصغرى والمتوسطة بقيمة 100 مليون دينار",
                category: "business",
                image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?w=800&h=400&fit=crop",
                age_hours: 1,
            },
        ],
        "https://www.assabah.com.tn/rss" => vec![CannedItem {
            title: "المنتخب التونسي يستعد لمواجهة مصر في تصفيات كأس العالم",
            description: "يخوض المنتخب التونسي لكرة القدم مباراة حاسمة أمام نظيره المصري في إطار تصفيات كأس العالم",
            category: "sports",
            image: "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800&h=400&fit=crop",
            age_hours: 2,
        }],
        "https://www.businessnews.com.tn/rss" => vec![CannedItem {
            title: "ارتفاع صادرات الفوسفات التونسي بنسبة 15% خلال الربع الأول",
            description: "سجلت صادرات الفوسفات التونسي ارتفاعاً ملحوظاً خلال الأشهر الثلاثة الأولى من السنة الجارية",
            category: "business",
            image: "https://images.unsplash.com/photo-1611273426858-450d8e3c9fce?w=800&h=400&fit=crop",
            age_hours: 3,
        }],
        _ => vec![],
    }
}

pub struct FeedFetcher {
    delay: Duration,
}

impl FeedFetcher {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Simulate retrieval from the source with the given id. Resolves after
    /// the configured delay; an id missing from the registry yields an empty
    /// result rather than an error.
    pub async fn fetch(&self, sources: &[RssSource], source_id: &str) -> Vec<Article> {
        tokio::time::sleep(self.delay).await;

        let Some(source) = sources.iter().find(|s| s.id == source_id) else {
            warn!("RSS fetch requested for unknown source id {}", source_id);
            return Vec::new();
        };

        let now = Utc::now();
        let items = canned_items(&source.url);
        let articles = if items.is_empty() {
            vec![placeholder_article(source, now)]
        } else {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| synthesize_article(source, item, index, now))
                .collect()
        };

        info!(
            "Simulated fetch from '{}' produced {} articles",
            source.name.fr,
            articles.len()
        );
        articles
    }
}

fn synthesize_article(
    source: &RssSource,
    item: &CannedItem,
    index: usize,
    now: DateTime<Utc>,
) -> Article {
    let published_at = now - ChronoDuration::hours(item.age_hours);
    Article {
        id: format!("rss-{}-{}", now.timestamp_millis(), index),
        title: Localized::new(item.title, translate_to_french(item.title)),
        summary: Localized::new(item.description, translate_to_french(item.description)),
        content: Localized::new(
            format!(
                "{} - محتوى مفصل للخبر سيتم استخراجه من المصدر الأصلي.",
                item.description
            ),
            format!(
                "{} - Contenu détaillé à extraire de la source originale.",
                translate_to_french(item.description)
            ),
        ),
        category: item.category.to_string(),
        source: source.name.ar.clone(),
        source_url: source.url.clone(),
        published_at,
        image_url: Some(item.image.to_string()),
        is_exclusive: false,
    }
}

fn placeholder_article(source: &RssSource, now: DateTime<Utc>) -> Article {
    Article {
        id: format!("rss-{}-{}", source.id, now.timestamp_millis()),
        title: Localized::new(
            format!("خبر جديد من المصدر {}", source.name.ar),
            format!("Nouvelle actualité de la source {}", source.name.fr),
        ),
        summary: Localized::new(
            "ملخص الخبر المستخرج تلقائياً من موجز RSS",
            "Résumé de l'actualité extraite automatiquement du flux RSS",
        ),
        content: Localized::new(
            "محتوى الخبر الكامل المستخرج من موجز RSS. هذا مثال على كيفية عمل النظام التلقائي لاستخراج الأخبار.",
            "Contenu complet de l'actualité extraite du flux RSS. Ceci est un exemple de fonctionnement du système automatique d'extraction d'actualités.",
        ),
        category: source.category.clone(),
        source: source.name.ar.clone(),
        source_url: source.url.clone(),
        published_at: now,
        image_url: None,
        is_exclusive: false,
    }
}

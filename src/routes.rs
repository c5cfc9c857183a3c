use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::content::{self, UiText};
use crate::fetcher::FeedFetcher;
use crate::models::{Article, Lang, Localized, RadioStation, WeatherData};
use crate::store::{ArticleDraft, ArticleStore};
use crate::ticker::Ticker;
use crate::weather::WeatherService;

/// Exclusive strip on the "all" view shows at most this many articles.
const EXCLUSIVE_STRIP_LEN: usize = 2;

pub struct AppState {
    pub config: Config,
    pub store: Arc<ArticleStore>,
    pub fetcher: Arc<FeedFetcher>,
    pub weather: Arc<WeatherService>,
    pub ticker: Arc<Ticker>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/ticker", get(ticker_fragment))
        .route("/weather", get(weather_fragment))
        .route("/admin", get(admin_page))
        .route("/admin/login", post(admin_login))
        .route("/admin/articles", post(admin_submit_article))
        .route("/admin/sources/:id/toggle", post(admin_toggle_source))
        .route("/admin/rss/:id/fetch", post(admin_fetch_rss))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// View projections: language resolved once here, templates never branch on it

pub struct ArticleView {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub category_label: String,
    pub source: String,
    pub source_url: String,
    pub published_at: String,
    pub image_url: Option<String>,
    pub is_exclusive: bool,
}

impl ArticleView {
    fn project(article: &Article, lang: Lang) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.get(lang).to_string(),
            summary: article.summary.get(lang).to_string(),
            content: article.content.get(lang).to_string(),
            category_label: content::category_label(&article.category, lang),
            source: article.source.clone(),
            source_url: article.source_url.clone(),
            published_at: article.published_at.format("%d/%m/%Y %H:%M").to_string(),
            image_url: article.image_url.clone(),
            is_exclusive: article.is_exclusive,
        }
    }
}

pub struct CategoryView {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

fn category_views(lang: Lang, selected: &str, include_all: bool) -> Vec<CategoryView> {
    content::CATEGORIES
        .iter()
        .filter(|(key, _)| include_all || *key != content::ALL_CATEGORIES)
        .map(|(key, label)| CategoryView {
            key: (*key).to_string(),
            label: label.get(lang).to_string(),
            selected: *key == selected,
        })
        .collect()
}

pub struct SourceView {
    pub id: String,
    pub name: String,
    pub url: String,
    pub category_label: String,
    pub is_active: bool,
}

/// Form echo for the admin article editor.
#[derive(Default)]
pub struct DraftView {
    pub title_ar: String,
    pub title_fr: String,
    pub summary_ar: String,
    pub summary_fr: String,
    pub content_ar: String,
    pub content_fr: String,
    pub category: String,
    pub image_url: String,
    pub is_exclusive: bool,
}

// Template structs

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub lang: Lang,
    pub text: UiText,
    pub selected_category: String,
    pub categories: Vec<CategoryView>,
    pub exclusive: Vec<ArticleView>,
    pub articles: Vec<ArticleView>,
    pub ticker_line: String,
    pub ticker_seconds: u64,
    pub weather_seconds: u64,
    pub weather: WeatherData,
    pub stations: Vec<RadioStation>,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub lang: Lang,
    pub text: UiText,
    pub authenticated: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub draft: DraftView,
    pub categories: Vec<CategoryView>,
    pub sources: Vec<SourceView>,
}

#[derive(Template)]
#[template(path = "ticker.html")]
pub struct TickerTemplate {
    pub ticker_line: String,
}

#[derive(Template)]
#[template(path = "weather.html")]
pub struct WeatherTemplate {
    pub text: UiText,
    pub weather: WeatherData,
}

// Wrapper for HTML responses
struct HtmlTemplate<T>(T);

impl<T: Template> IntoResponse for HtmlTemplate<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to render template: {}", err),
            )
                .into_response(),
        }
    }
}

// Custom error type
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error: {}", self.0),
        )
            .into_response()
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

// Route handlers

#[derive(Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub category: Option<String>,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<impl IntoResponse, AppError> {
    let lang = query.lang;
    let selected = query
        .category
        .unwrap_or_else(|| content::ALL_CATEGORIES.to_string());

    let ordered = state.store.view(&selected).await;
    let articles: Vec<ArticleView> = ordered
        .iter()
        .map(|a| ArticleView::project(a, lang))
        .collect();

    // Exclusive strip only exists on the unfiltered view
    let exclusive = if selected == content::ALL_CATEGORIES {
        ordered
            .iter()
            .filter(|a| a.is_exclusive)
            .take(EXCLUSIVE_STRIP_LEN)
            .map(|a| ArticleView::project(a, lang))
            .collect()
    } else {
        Vec::new()
    };

    Ok(HtmlTemplate(IndexTemplate {
        lang,
        text: UiText::for_lang(lang),
        categories: category_views(lang, &selected, true),
        selected_category: selected,
        exclusive,
        articles,
        ticker_line: state.ticker.current(lang),
        ticker_seconds: state.config.ticker_rotate_seconds,
        weather_seconds: state.config.weather.refresh_minutes * 60,
        weather: state.weather.current().await,
        stations: content::RADIO_STATIONS.clone(),
    }))
}

#[derive(Deserialize)]
pub struct LangQuery {
    #[serde(default)]
    pub lang: Lang,
}

pub async fn ticker_fragment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    HtmlTemplate(TickerTemplate {
        ticker_line: state.ticker.current(query.lang),
    })
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    #[serde(default)]
    pub lang: Lang,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

pub async fn weather_fragment(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> impl IntoResponse {
    // Device coordinates refresh the snapshot; without them the cached
    // Tunis snapshot is served as-is (silent fallback, not an error).
    let weather = match (query.lat, query.lon) {
        (Some(lat), Some(lon)) => state.weather.refresh(lat, lon).await,
        _ => state.weather.current().await,
    };

    HtmlTemplate(WeatherTemplate {
        text: UiText::for_lang(query.lang),
        weather,
    })
}

async fn render_admin(
    state: &AppState,
    lang: Lang,
    authenticated: bool,
    error: Option<String>,
    notice: Option<String>,
    draft: DraftView,
) -> AdminTemplate {
    let sources = state
        .store
        .sources()
        .await
        .iter()
        .map(|s| SourceView {
            id: s.id.clone(),
            name: s.name.get(lang).to_string(),
            url: s.url.clone(),
            category_label: content::category_label(&s.category, lang),
            is_active: s.is_active,
        })
        .collect();

    let selected = if draft.category.trim().is_empty() {
        content::DEFAULT_CATEGORY.to_string()
    } else {
        draft.category.clone()
    };

    AdminTemplate {
        lang,
        text: UiText::for_lang(lang),
        authenticated,
        error,
        notice,
        categories: category_views(lang, &selected, false),
        draft,
        sources,
    }
}

pub async fn admin_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LangQuery>,
) -> impl IntoResponse {
    HtmlTemplate(render_admin(&state, query.lang, false, None, None, DraftView::default()).await)
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub password: String,
}

pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<LoginForm>,
) -> impl IntoResponse {
    // A blank configured password never matches, so login stays disabled
    // until one is set. Action routes carry no further authorization.
    let ok = !state.config.admin_password.is_empty() && form.password == state.config.admin_password;
    let text = UiText::for_lang(form.lang);

    let template = if ok {
        render_admin(&state, form.lang, true, None, None, DraftView::default()).await
    } else {
        render_admin(
            &state,
            form.lang,
            false,
            Some(text.wrong_password.to_string()),
            None,
            DraftView::default(),
        )
        .await
    };

    HtmlTemplate(template)
}

#[derive(Deserialize)]
pub struct ArticleForm {
    #[serde(default)]
    pub lang: Lang,
    #[serde(default)]
    pub title_ar: String,
    #[serde(default)]
    pub title_fr: String,
    #[serde(default)]
    pub summary_ar: String,
    #[serde(default)]
    pub summary_fr: String,
    #[serde(default)]
    pub content_ar: String,
    #[serde(default)]
    pub content_fr: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_exclusive: Option<String>,
}

pub async fn admin_submit_article(
    State(state): State<Arc<AppState>>,
    axum::Form(form): axum::Form<ArticleForm>,
) -> impl IntoResponse {
    let lang = form.lang;
    let text = UiText::for_lang(lang);

    let draft = ArticleDraft {
        title: Localized::new(form.title_ar.clone(), form.title_fr.clone()),
        summary: Localized::new(form.summary_ar.clone(), form.summary_fr.clone()),
        content: Localized::new(form.content_ar.clone(), form.content_fr.clone()),
        category: form.category.clone(),
        image_url: form.image_url.clone(),
        is_exclusive: form.is_exclusive.is_some(),
    };

    let template = match draft.build(lang, Utc::now()) {
        Ok(article) => {
            state.store.add(article).await;
            // Form clears on success
            render_admin(
                &state,
                lang,
                true,
                None,
                Some(text.article_published.to_string()),
                DraftView::default(),
            )
            .await
        }
        Err(_) => {
            // Entered values are kept so the user can fix the gap
            let echo = DraftView {
                title_ar: form.title_ar,
                title_fr: form.title_fr,
                summary_ar: form.summary_ar,
                summary_fr: form.summary_fr,
                content_ar: form.content_ar,
                content_fr: form.content_fr,
                category: form.category,
                image_url: form.image_url,
                is_exclusive: form.is_exclusive.is_some(),
            };
            render_admin(
                &state,
                lang,
                true,
                Some(text.fill_required_fields.to_string()),
                None,
                echo,
            )
            .await
        }
    };

    HtmlTemplate(template)
}

#[derive(Deserialize)]
pub struct LangForm {
    #[serde(default)]
    pub lang: Lang,
}

pub async fn admin_toggle_source(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    axum::Form(form): axum::Form<LangForm>,
) -> impl IntoResponse {
    state.store.toggle_source(&source_id).await;
    HtmlTemplate(render_admin(&state, form.lang, true, None, None, DraftView::default()).await)
}

pub async fn admin_fetch_rss(
    State(state): State<Arc<AppState>>,
    Path(source_id): Path<String>,
    axum::Form(form): axum::Form<LangForm>,
) -> impl IntoResponse {
    let lang = form.lang;
    let text = UiText::for_lang(lang);

    // The active flag gates the trigger, matching the disabled button in the
    // panel; the fetcher itself accepts any id.
    if let Some(source) = state.store.source(&source_id).await {
        if !source.is_active {
            let template = render_admin(
                &state,
                lang,
                true,
                Some(text.source_inactive_refusal.to_string()),
                None,
                DraftView::default(),
            )
            .await;
            return HtmlTemplate(template);
        }
    }

    let sources = state.store.sources().await;
    let articles = state.fetcher.fetch(&sources, &source_id).await;
    let count = articles.len();
    state.store.add_all(articles).await;

    let template = render_admin(
        &state,
        lang,
        true,
        None,
        Some(UiText::articles_extracted(lang, count)),
        DraftView::default(),
    )
    .await;
    HtmlTemplate(template)
}

pub async fn health() -> impl IntoResponse {
    Html("OK")
}

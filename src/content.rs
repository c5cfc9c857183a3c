//! Static bilingual reference data: category table, ticker headlines, radio
//! stations, the RSS source registry, the seed articles and the UI string
//! table. Pure data, no behavior beyond lookups.

use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;

use crate::models::{Article, Lang, Localized, RadioStation, RssSource};

/// Category sentinel used when a submission leaves the field empty.
pub const DEFAULT_CATEGORY: &str = "general";

/// Category sentinel meaning "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// Category keys with their display labels, in sidebar order.
pub static CATEGORIES: Lazy<Vec<(&'static str, Localized)>> = Lazy::new(|| {
    vec![
        ("all", Localized::new("جميع الأخبار", "Toutes les nouvelles")),
        ("politics", Localized::new("سياسة", "Politique")),
        ("sports", Localized::new("رياضة", "Sport")),
        ("culture", Localized::new("ثقافة", "Culture")),
        ("technology", Localized::new("تكنولوجيا", "Technologie")),
        ("business", Localized::new("اقتصاد", "Économie")),
        ("general", Localized::new("عام", "Général")),
    ]
});

/// Display label for a category key; unknown keys fall back to the key itself.
pub fn category_label(key: &str, lang: Lang) -> String {
    CATEGORIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| label.get(lang).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Headlines cycled by the live ticker.
pub static TICKER_LINES: Lazy<Vec<Localized>> = Lazy::new(|| {
    vec![
        Localized::new(
            "عاجل: اجتماع طارئ للحكومة التونسية لمناقشة الأوضاع الاقتصادية",
            "URGENT: Réunion d'urgence du gouvernement tunisien pour discuter de la situation économique",
        ),
        Localized::new(
            "المنتخب التونسي يتأهل للدور النهائي في البطولة الأفريقية",
            "L'équipe nationale tunisienne se qualifie pour la finale du championnat africain",
        ),
        Localized::new(
            "إطلاق مشروع جديد لتطوير الطاقة المتجددة في تونس",
            "Lancement d'un nouveau projet de développement des énergies renouvelables en Tunisie",
        ),
        Localized::new(
            "افتتاح معرض تونس الدولي للتكنولوجيا والابتكار",
            "Ouverture du Salon International de Technologie et d'Innovation de Tunisie",
        ),
    ]
});

/// Tunisian FM stations offered by the sidebar player.
pub static RADIO_STATIONS: Lazy<Vec<RadioStation>> = Lazy::new(|| {
    fn station(id: &str, name: &str, frequency: &str, stream_url: &str) -> RadioStation {
        RadioStation {
            id: id.to_string(),
            name: name.to_string(),
            frequency: frequency.to_string(),
            country: "Tunisia".to_string(),
            stream_url: stream_url.to_string(),
        }
    }

    vec![
        station("1", "Mosaique FM", "94.9 FM", "https://radio.mosaiquefm.net/mosalive"),
        station("2", "Express FM", "88.8 FM", "https://expressfm.ice.infomaniak.ch/expressfm-64.mp3"),
        station("3", "Jawhara FM", "102.5 FM", "https://streaming2.toutech.net/jawharafm"),
        station("4", "Knooz FM", "106.0 FM", "http://streaming.knoozfm.net:8000/knoozfm"),
        station("5", "Diwan FM", "104.1 FM", "https://streaming.diwanfm.net/stream"),
        station("6", "Radio Tunis Chaîne Internationale", "98.2 FM", "https://radio.rtci.tn/rtci"),
        station("7", "Shems FM", "88.8 FM", "https://shemsfm.net/radio/8000/shems"),
        station("8", "IFM", "100.6 FM", "https://ifm.ice.infomaniak.ch/ifm-64.mp3"),
        station("9", "Sabra FM", "100.2 FM", "https://sabrafm.ice.infomaniak.ch/sabrafm-64.mp3"),
        station("10", "Radio Zitouna", "103.0 FM", "https://zitouna.net/live"),
        station("11", "Oxygène FM", "95.5 FM", "https://oxygene.ice.infomaniak.ch/oxygene-64.mp3"),
        station("12", "Cap FM", "104.8 FM", "https://capfm.ice.infomaniak.ch/capfm-64.mp3"),
    ]
});

/// Fresh copy of the RSS source registry. The store owns a mutable working
/// set seeded from this; the table itself never changes.
pub fn rss_sources() -> Vec<RssSource> {
    fn source(id: &str, ar: &str, fr: &str, url: &str, category: &str) -> RssSource {
        RssSource {
            id: id.to_string(),
            name: Localized::new(ar, fr),
            url: url.to_string(),
            is_active: true,
            category: category.to_string(),
        }
    }

    vec![
        source(
            "1",
            "وكالة تونس أفريقيا للأنباء",
            "Agence Tunis Afrique Presse",
            "https://www.tap.info.tn/rss",
            "general",
        ),
        source("2", "الصباح", "Assabah", "https://www.assabah.com.tn/rss", "general"),
        source("3", "الشروق", "Alchourouk", "https://www.alchourouk.com/rss", "general"),
        source(
            "4",
            "بيزنس نيوز",
            "Business News",
            "https://www.businessnews.com.tn/rss",
            "business",
        ),
        source(
            "5",
            "لابريس دو تونيزي",
            "La Presse de Tunisie",
            "https://lapresse.tn/rss",
            "general",
        ),
        source("6", "كابيتاليس", "Kapitalis", "https://kapitalis.com/rss", "politics"),
        source(
            "7",
            "تونيزيا لايف",
            "Tunisia Live",
            "https://www.tunisie-live.net/rss",
            "general",
        ),
        source(
            "8",
            "تونس نيوميريك",
            "Tunisie Numerique",
            "https://www.tunisienumerique.com/rss",
            "technology",
        ),
    ]
}

/// Articles the portal starts with.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".to_string(),
            title: Localized::new(
                "أخبار عاجلة من تونس: تطورات سياسية مهمة",
                "Nouvelles urgentes de Tunisie : développements politiques importants",
            ),
            summary: Localized::new(
                "تطورات سياسية مهمة في العاصمة التونسية اليوم",
                "Développements politiques importants dans la capitale tunisienne aujourd'hui",
            ),
            content: Localized::new(
                "شهدت العاصمة التونسية اليوم تطورات سياسية مهمة حيث اجتمع المسؤولون لمناقشة القضايا الراهنة. وقد أكد المتحدثون على أهمية الحوار الوطني والعمل المشترك لتحقيق التقدم والازدهار للبلاد.",
                "La capitale tunisienne a connu aujourd'hui d'importants développements politiques alors que les responsables se sont réunis pour discuter des questions actuelles. Les intervenants ont souligné l'importance du dialogue national et du travail commun pour réaliser le progrès et la prospérité du pays.",
            ),
            category: "politics".to_string(),
            source: "وكالة تونس أفريقيا للأنباء".to_string(),
            source_url: "https://www.tap.info.tn".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 27, 10, 30, 0).unwrap(),
            image_url: Some(
                "https://images.unsplash.com/photo-1586339949916-3e9457bef6d3?w=800&h=400&fit=crop"
                    .to_string(),
            ),
            is_exclusive: true,
        },
        Article {
            id: "2".to_string(),
            title: Localized::new(
                "الفريق التونسي يحقق فوزاً مهماً في البطولة الأفريقية",
                "L'équipe tunisienne remporte une victoire importante au championnat africain",
            ),
            summary: Localized::new(
                "انتصار باهر للمنتخب التونسي في المباراة الأخيرة",
                "Victoire éclatante de l'équipe nationale tunisienne lors du dernier match",
            ),
            content: Localized::new(
                "حقق المنتخب التونسي لكرة القدم انتصاراً مهماً في البطولة الأفريقية، مما يعزز من فرصه في التأهل للمراحل النهائية. اللاعبون أظهروا مستوى متميزاً وروحاً قتالية عالية.",
                "L'équipe nationale tunisienne de football a remporté une victoire importante au championnat africain, renforçant ses chances de qualification pour les phases finales. Les joueurs ont montré un niveau exceptionnel et un esprit combatif élevé.",
            ),
            category: "sports".to_string(),
            source: "الرياضة التونسية".to_string(),
            source_url: "https://www.sport.tn".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 27, 8, 15, 0).unwrap(),
            image_url: Some(
                "https://images.unsplash.com/photo-1574629810360-7efbbe195018?w=800&h=400&fit=crop"
                    .to_string(),
            ),
            is_exclusive: false,
        },
        Article {
            id: "3".to_string(),
            title: Localized::new(
                "مهرجان قرطاج الدولي يستقبل نجوماً عالميين",
                "Le Festival International de Carthage accueille des stars mondiales",
            ),
            summary: Localized::new(
                "فعاليات ثقافية متنوعة في مهرجان قرطاج الدولي",
                "Événements culturels variés au Festival International de Carthage",
            ),
            content: Localized::new(
                "يشهد مهرجان قرطاج الدولي هذا العام حضور نجوم عالميين من مختلف أنحاء العالم، حيث تتنوع العروض بين المسرح والموسيقى والسينما، مما يجعله حدثاً ثقافياً مميزاً.",
                "Le Festival International de Carthage accueille cette année des stars mondiales de différentes parties du monde, avec des spectacles variés entre théâtre, musique et cinéma, en faisant un événement culturel exceptionnel.",
            ),
            category: "culture".to_string(),
            source: "الثقافة التونسية".to_string(),
            source_url: "https://www.culture.tn".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 27, 6, 45, 0).unwrap(),
            image_url: Some(
                "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800&h=400&fit=crop"
                    .to_string(),
            ),
            is_exclusive: false,
        },
        Article {
            id: "4".to_string(),
            title: Localized::new(
                "تونس تطلق مشروعاً تكنولوجياً جديداً للذكاء الاصطناعي",
                "La Tunisie lance un nouveau projet technologique d'intelligence artificielle",
            ),
            summary: Localized::new(
                "مبادرة تكنولوجية جديدة لتطوير الذكاء الاصطناعي في تونس",
                "Nouvelle initiative technologique pour développer l'IA en Tunisie",
            ),
            content: Localized::new(
                "أعلنت الحكومة التونسية عن إطلاق مشروع طموح في مجال الذكاء الاصطناعي، بهدف تطوير القطاع التكنولوجي وجذب الاستثمارات الأجنبية في هذا المجال الحيوي.",
                "Le gouvernement tunisien a annoncé le lancement d'un projet ambitieux dans le domaine de l'intelligence artificielle, visant à développer le secteur technologique et attirer les investissements étrangers dans ce domaine vital.",
            ),
            category: "technology".to_string(),
            source: "تكنولوجيا تونس".to_string(),
            source_url: "https://www.tech.tn".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 1, 27, 5, 20, 0).unwrap(),
            image_url: Some(
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&h=400&fit=crop"
                    .to_string(),
            ),
            is_exclusive: true,
        },
    ]
}

/// Source label stamped on manually published articles.
pub fn manual_source_label(lang: Lang) -> &'static str {
    match lang {
        Lang::Ar => "التوانسة اليوم - حصري",
        Lang::Fr => "Tunisiens Aujourd'hui - Exclusif",
    }
}

/// Per-language UI strings, resolved once per render and handed to the
/// templates so markup never branches on language.
#[derive(Debug, Clone, Copy)]
pub struct UiText {
    pub site_title: &'static str,
    pub site_tagline: &'static str,
    pub live_badge: &'static str,
    pub breaking_badge: &'static str,
    pub breaking_banner: &'static str,
    pub exclusive_heading: &'static str,
    pub exclusive_badge: &'static str,
    pub all_news_heading: &'static str,
    pub weather_title: &'static str,
    pub forecast_heading: &'static str,
    pub radio_title: &'static str,
    pub radio_choose: &'static str,
    pub admin_link: &'static str,
    pub language_toggle: &'static str,
    pub footer_about: &'static str,
    pub footer_rights: &'static str,
    pub admin_title: &'static str,
    pub login_title: &'static str,
    pub login_button: &'static str,
    pub password_placeholder: &'static str,
    pub wrong_password: &'static str,
    pub write_tab: &'static str,
    pub rss_tab: &'static str,
    pub settings_tab: &'static str,
    pub create_article_heading: &'static str,
    pub title_ar_label: &'static str,
    pub title_fr_label: &'static str,
    pub summary_ar_label: &'static str,
    pub summary_fr_label: &'static str,
    pub content_ar_label: &'static str,
    pub content_fr_label: &'static str,
    pub category_field_label: &'static str,
    pub image_url_label: &'static str,
    pub exclusive_field_label: &'static str,
    pub publish_button: &'static str,
    pub rss_sources_heading: &'static str,
    pub extract_button: &'static str,
    pub source_active: &'static str,
    pub source_inactive: &'static str,
    pub toggle_button: &'static str,
    pub settings_heading: &'static str,
    pub settings_placeholder: &'static str,
    pub fill_required_fields: &'static str,
    pub article_published: &'static str,
    pub source_inactive_refusal: &'static str,
}

const AR_TEXT: UiText = UiText {
    site_title: "التوانسة اليوم",
    site_tagline: "أخبار تونس والعالم",
    live_badge: "مباشر",
    breaking_badge: "عاجل",
    breaking_banner: "تابعوا آخر الأخبار العاجلة من تونس والعالم",
    exclusive_heading: "أخبار حصرية",
    exclusive_badge: "حصري",
    all_news_heading: "جميع الأخبار",
    weather_title: "الطقس",
    forecast_heading: "توقعات الأسبوع",
    radio_title: "الراديو التونسي",
    radio_choose: "اختر محطة راديو",
    admin_link: "الإدارة",
    language_toggle: "Français",
    footer_about: "منصة إخبارية شاملة تقدم آخر الأخبار من تونس والعالم",
    footer_rights: "جميع الحقوق محفوظة.",
    admin_title: "لوحة الإدارة",
    login_title: "تسجيل دخول الإدارة",
    login_button: "دخول",
    password_placeholder: "أدخل كلمة المرور",
    wrong_password: "كلمة مرور خاطئة",
    write_tab: "كتابة مقال",
    rss_tab: "مصادر RSS",
    settings_tab: "الإعدادات",
    create_article_heading: "إنشاء مقال جديد",
    title_ar_label: "العنوان (عربي)",
    title_fr_label: "العنوان (فرنسي)",
    summary_ar_label: "الملخص (عربي)",
    summary_fr_label: "الملخص (فرنسي)",
    content_ar_label: "المحتوى (عربي)",
    content_fr_label: "المحتوى (فرنسي)",
    category_field_label: "التصنيف",
    image_url_label: "رابط الصورة",
    exclusive_field_label: "خبر حصري",
    publish_button: "نشر المقال",
    rss_sources_heading: "مصادر الأخبار التلقائية",
    extract_button: "استخراج",
    source_active: "مفعل",
    source_inactive: "معطل",
    toggle_button: "تبديل",
    settings_heading: "إعدادات النظام",
    settings_placeholder: "إعدادات إضافية ستكون متاحة في الإصدارات القادمة",
    fill_required_fields: "يرجى ملء جميع الحقول المطلوبة",
    article_published: "تم نشر المقال بنجاح",
    source_inactive_refusal: "هذا المصدر معطل حالياً",
};

const FR_TEXT: UiText = UiText {
    site_title: "Tunisiens Aujourd'hui",
    site_tagline: "Actualités de Tunisie et du monde",
    live_badge: "LIVE",
    breaking_badge: "URGENT",
    breaking_banner: "Suivez les dernières nouvelles urgentes de Tunisie et du monde",
    exclusive_heading: "Nouvelles Exclusives",
    exclusive_badge: "Exclusif",
    all_news_heading: "Toutes les Nouvelles",
    weather_title: "Météo",
    forecast_heading: "Prévisions hebdomadaires",
    radio_title: "Radio Tunisienne",
    radio_choose: "Choisir une station",
    admin_link: "Admin",
    language_toggle: "العربية",
    footer_about: "Plateforme d'actualités complète offrant les dernières nouvelles de Tunisie et du monde",
    footer_rights: "Tous droits réservés.",
    admin_title: "Panneau d'Administration",
    login_title: "Connexion Admin",
    login_button: "Connexion",
    password_placeholder: "Entrez le mot de passe",
    wrong_password: "Mot de passe incorrect",
    write_tab: "Écrire un article",
    rss_tab: "Sources RSS",
    settings_tab: "Paramètres",
    create_article_heading: "Créer un nouvel article",
    title_ar_label: "Titre (Arabe)",
    title_fr_label: "Titre (Français)",
    summary_ar_label: "Résumé (Arabe)",
    summary_fr_label: "Résumé (Français)",
    content_ar_label: "Contenu (Arabe)",
    content_fr_label: "Contenu (Français)",
    category_field_label: "Catégorie",
    image_url_label: "URL de l'image",
    exclusive_field_label: "Exclusif",
    publish_button: "Publier l'article",
    rss_sources_heading: "Sources d'actualités automatiques",
    extract_button: "Extraire",
    source_active: "Active",
    source_inactive: "Inactive",
    toggle_button: "Basculer",
    settings_heading: "Paramètres système",
    settings_placeholder: "Paramètres supplémentaires seront disponibles dans les prochaines versions",
    fill_required_fields: "Veuillez remplir tous les champs requis",
    article_published: "Article publié avec succès",
    source_inactive_refusal: "Cette source est actuellement désactivée",
};

impl UiText {
    pub fn for_lang(lang: Lang) -> UiText {
        match lang {
            Lang::Ar => AR_TEXT,
            Lang::Fr => FR_TEXT,
        }
    }

    /// "N articles extracted" notice for the RSS tab.
    pub fn articles_extracted(lang: Lang, count: usize) -> String {
        match lang {
            Lang::Ar => format!("تم استخراج {} مقال", count),
            Lang::Fr => format!("{} articles extraits", count),
        }
    }
}

use serde::Deserialize;

/// Main configuration structure for Course-Harvest
///
/// Every section is optional; a missing section or key falls back to the
/// defaults for the Great Courses Plus catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub selectors: SelectorConfig,
    pub reviews: ReviewConfig,
    pub output: OutputConfig,
}

/// Catalog site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Base URL every relative href is resolved against
    pub base_url: String,

    /// Path of the catalog index page the category crawl starts from
    pub start_path: String,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.thegreatcoursesplus.com".to_string(),
            start_path: "/allsubjects".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlerConfig {
    /// Per-request timeout (seconds)
    pub request_timeout_secs: u64,

    /// Minimum time between consecutive page requests (milliseconds)
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            request_delay_ms: 1000,
        }
    }
}

/// CSS selectors used to pick data out of catalog pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SelectorConfig {
    /// "View all" anchors on category pages
    pub view_all: String,

    /// Course item anchors on category pages
    pub course_link: String,

    /// Course title heading
    pub title: String,

    /// Per-segment runtime labels ("30 min")
    pub runtime: String,

    /// Review widget container carrying the product id
    pub product: String,

    /// Professor name anchor
    pub professor: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            view_all: "a.tray__view-all".to_string(),
            course_link: "a.item__link".to_string(),
            title: r#"h1[itemprop="name"]"#.to_string(),
            runtime: "span.total-len.small".to_string(),
            product: r#"div[data-bv-product-id][data-bv-show="reviews"]"#.to_string(),
            professor: r#"a[class="professor-name h2 m-0 n-link"]"#.to_string(),
        }
    }
}

/// Review summary API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ReviewConfig {
    /// Whether course records are enriched with review data at all
    pub enabled: bool,

    /// Review summary endpoint
    pub endpoint: String,

    /// API key sent as the `PassKey` query parameter
    pub pass_key: String,

    /// Value of the `contentlocale` query parameter
    pub content_locale: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://api.bazaarvoice.com/data/display/0.2alpha/product/summary"
                .to_string(),
            pass_key: "e62nfrixo047lx9pgj2w7w6ox".to_string(),
            content_locale: "en_US,en_CA".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct OutputConfig {
    /// Path of the CSV file written at the end of the run
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "great_courses_metadata.csv".to_string(),
        }
    }
}

//! Harvest coordinator - main orchestration logic
//!
//! The `Harvester` owns everything a run needs (HTTP client, throttle,
//! compiled selectors, review client, run summary) and drives the phases
//! strictly in sequence:
//! 1. Category crawl (`categories.rs`)
//! 2. Course link extraction (`courses.rs`)
//! 3. Course metadata scraping (`metadata.rs`)
//!
//! `run_harvest` adds the final CSV export.

use crate::config::{validate, Config};
use crate::crawler::fetcher::{build_http_client, PageFetcher};
use crate::crawler::parser::PageSelectors;
use crate::crawler::throttle::Throttle;
use crate::model::{CourseRecord, RunSummary};
use crate::output::export_csv;
use crate::reviews::ReviewClient;
use crate::HarvestError;
use std::path::Path;
use url::Url;

/// Main harvest orchestrator
pub struct Harvester {
    pub(super) config: Config,
    pub(super) base_url: Url,
    pub(super) selectors: PageSelectors,
    pub(super) fetcher: PageFetcher,
    pub(super) reviews: Option<ReviewClient>,
    pub(super) summary: RunSummary,
}

/// Everything a finished harvest produced, in discovery order
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Category page URLs found by the depth-first crawl
    pub categories: Vec<String>,

    /// Course page URLs extracted from the category pages
    pub courses: Vec<String>,

    /// One record per successfully scraped course page
    pub records: Vec<CourseRecord>,

    /// Counters and failures for the run
    pub summary: RunSummary,
}

impl Harvester {
    /// Creates a new harvester
    ///
    /// # Returns
    ///
    /// * `Ok(Harvester)` - Ready to run
    /// * `Err(HarvestError)` - Invalid base URL, selector, or HTTP client setup failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let base_url = Url::parse(&config.site.base_url)?;
        let selectors = PageSelectors::from_config(&config.selectors)?;
        let client = build_http_client(&config.site, &config.crawler)?;

        let reviews = if config.reviews.enabled {
            Some(ReviewClient::new(client.clone(), &config.reviews))
        } else {
            tracing::info!("Review enrichment disabled");
            None
        };

        let fetcher = PageFetcher::new(
            client,
            Throttle::from_millis(config.crawler.request_delay_ms),
        );

        Ok(Self {
            config,
            base_url,
            selectors,
            fetcher,
            reviews,
            summary: RunSummary::new(),
        })
    }

    /// Counters and failures recorded so far
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Runs the three scraping phases and returns the collected data
    pub async fn run(mut self) -> Result<HarvestReport, HarvestError> {
        tracing::info!(
            "Starting harvest of {} from {}",
            self.base_url,
            self.config.site.start_path
        );

        let categories = self.crawl_categories().await?;
        tracing::info!(
            "Category crawl complete: {} category pages",
            categories.len()
        );

        let courses = self.collect_course_links(&categories).await;
        tracing::info!("Course extraction complete: {} course pages", courses.len());

        let records = self.scrape_courses(&courses).await;
        tracing::info!(
            "Metadata scraping complete: {} of {} courses scraped",
            records.len(),
            courses.len()
        );

        self.summary.finish();

        Ok(HarvestReport {
            categories: categories.into_vec(),
            courses: courses.into_vec(),
            records,
            summary: self.summary,
        })
    }
}

/// Runs a complete harvest and writes the CSV
///
/// This is the main entry point. It will:
/// 1. Validate the configuration and build the harvester from it
/// 2. Crawl categories, extract course links, scrape course pages
/// 3. Export the records to `config.output.csv_path`
pub async fn run_harvest(config: Config) -> Result<HarvestReport, HarvestError> {
    validate(&config)?;

    let csv_path = config.output.csv_path.clone();
    let report = Harvester::new(config)?.run().await?;

    export_csv(&report.records, Path::new(&csv_path))?;
    tracing::info!("Wrote {} records to {}", report.records.len(), csv_path);

    Ok(report)
}

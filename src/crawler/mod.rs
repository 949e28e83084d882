//! Crawler module for catalog fetching and scraping
//!
//! This module contains the harvest logic, including:
//! - HTTP fetching with fixed-interval pacing
//! - HTML parsing of category and course pages
//! - The depth-first category crawl, course link extraction and
//!   metadata scraping phases
//! - Overall harvest coordination

mod categories;
mod coordinator;
mod courses;
mod fetcher;
mod metadata;
mod parser;
mod throttle;

pub use coordinator::{run_harvest, HarvestReport, Harvester};
pub use fetcher::{build_http_client, fetch_url, FetchResult, PageFetcher};
pub use parser::{parse_course_page, select_hrefs, CoursePage, PageSelectors};
pub use throttle::Throttle;

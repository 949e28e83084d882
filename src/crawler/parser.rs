//! HTML parser for catalog pages
//!
//! This module handles parsing HTML content to extract:
//! - Raw hrefs of anchors matching a selector (category and course links)
//! - Course metadata: title, runtime segments, review product id, professor

use crate::config::SelectorConfig;
use crate::model::{CourseRecord, ReviewInfo, NOT_AVAILABLE};
use crate::HarvestError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Pattern for a runtime label such as "30 min" or "45min"
const RUNTIME_PATTERN: &str = r"(\d+)\s*min";

/// Attribute on the review widget container holding the product id
const PRODUCT_ID_ATTR: &str = "data-bv-product-id";

/// Compiled selectors for every page type the harvest reads
#[derive(Debug, Clone)]
pub struct PageSelectors {
    pub view_all: Selector,
    pub course_link: Selector,
    pub title: Selector,
    pub runtime: Selector,
    pub product: Selector,
    pub professor: Selector,
    runtime_pattern: Regex,
}

impl PageSelectors {
    /// Compiles the configured selectors
    ///
    /// # Returns
    ///
    /// * `Ok(PageSelectors)` - All selectors compiled
    /// * `Err(HarvestError::Selector)` - A selector is not valid CSS
    pub fn from_config(config: &SelectorConfig) -> Result<Self, HarvestError> {
        Ok(Self {
            view_all: compile(&config.view_all)?,
            course_link: compile(&config.course_link)?,
            title: compile(&config.title)?,
            runtime: compile(&config.runtime)?,
            product: compile(&config.product)?,
            professor: compile(&config.professor)?,
            runtime_pattern: Regex::new(RUNTIME_PATTERN)?,
        })
    }

    /// Parses the minute count out of one runtime label
    ///
    /// Returns None if the label has no "<N> min" part.
    pub fn parse_runtime_minutes(&self, text: &str) -> Option<u64> {
        self.runtime_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}

fn compile(selector: &str) -> Result<Selector, HarvestError> {
    Selector::parse(selector).map_err(|e| HarvestError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Fields extracted from a course detail page
#[derive(Debug, Clone, PartialEq)]
pub struct CoursePage {
    /// Course title (None if the heading is missing or empty)
    pub title: Option<String>,

    /// Sum of all runtime segments, in minutes
    pub total_runtime_minutes: u64,

    /// Review-system product identifier
    pub product_id: Option<String>,

    /// Professor name (None if the anchor is missing or empty)
    pub professor: Option<String>,
}

impl CoursePage {
    /// Builds the exported record for this page
    ///
    /// Missing text fields become `N/A`; missing review data stays empty.
    pub fn into_record(self, url: &str, review: Option<ReviewInfo>) -> CourseRecord {
        CourseRecord {
            title: self.title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            url: url.to_string(),
            rating: review.and_then(|r| r.rating),
            total_runtime_minutes: self.total_runtime_minutes,
            num_reviews: review.map(|r| r.num_reviews),
            professor: self.professor.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            product_id: self.product_id,
        }
    }
}

/// Returns the href of every element matching `selector`, in document order
///
/// Elements without an href are skipped; hrefs are returned unresolved.
///
/// # Example
///
/// ```
/// use course_harvest::crawler::select_hrefs;
/// use scraper::Selector;
///
/// let html = r#"<a class="item__link" href="/courses/a">A</a><a href="/other">B</a>"#;
/// let selector = Selector::parse("a.item__link").unwrap();
/// assert_eq!(select_hrefs(html, &selector), vec!["/courses/a".to_string()]);
/// ```
pub fn select_hrefs(html: &str, selector: &Selector) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .filter_map(|element| element.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Parses a course detail page
pub fn parse_course_page(html: &str, selectors: &PageSelectors) -> CoursePage {
    let document = Html::parse_document(html);

    let title = first_text(&document, &selectors.title);

    let total_runtime_minutes = document
        .select(&selectors.runtime)
        .filter_map(|element| selectors.parse_runtime_minutes(&element_text(element)))
        .fold(0u64, u64::saturating_add);

    let product_id = document
        .select(&selectors.product)
        .next()
        .and_then(|element| element.value().attr(PRODUCT_ID_ATTR))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    let professor = first_text(&document, &selectors.professor);

    CoursePage {
        title,
        total_runtime_minutes,
        product_id,
        professor,
    }
}

/// Text of the first element matching `selector`, if non-empty
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|s| !s.is_empty())
}

/// Element text with runs of whitespace collapsed to single spaces
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

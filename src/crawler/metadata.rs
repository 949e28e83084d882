//! Course page metadata scraping and review enrichment

use crate::crawler::coordinator::Harvester;
use crate::crawler::parser::parse_course_page;
use crate::model::{CourseRecord, Phase, ReviewInfo};
use crate::url::LinkList;

impl Harvester {
    /// Scrapes every course page in order, dropping the ones that fail
    pub async fn scrape_courses(&mut self, courses: &LinkList) -> Vec<CourseRecord> {
        let total = courses.len();
        let mut records = Vec::with_capacity(total);

        for (index, course_url) in courses.iter().enumerate() {
            match self.scrape_course(course_url).await {
                Ok(record) => {
                    self.summary.record_fetched(Phase::Metadata);
                    tracing::debug!("Scraped {:?}", record);
                    records.push(record);
                }
                Err(reason) => {
                    tracing::warn!("Failed to scrape metadata from {}: {}", course_url, reason);
                    self.summary
                        .record_failure(Phase::Metadata, course_url, reason);
                }
            }

            if (index + 1) % 10 == 0 {
                tracing::info!("Progress: {} of {} course pages", index + 1, total);
            }
        }

        records
    }

    /// Fetches one course page and builds its record
    ///
    /// A course without a product id gets no review data; a failed review
    /// lookup leaves the review fields empty without dropping the course.
    ///
    /// # Returns
    ///
    /// * `Ok(CourseRecord)` - The page was fetched
    /// * `Err(String)` - Reason the page could not be fetched
    pub async fn scrape_course(&mut self, course_url: &str) -> Result<CourseRecord, String> {
        tracing::info!("[{}] Scraping: {}", Phase::Metadata, course_url);

        let body = self.fetcher.get(course_url).await.into_body()?;
        let page = parse_course_page(&body, &self.selectors);

        let review = match page.product_id.as_deref() {
            Some(product_id) => self.fetch_reviews(product_id).await,
            None => {
                tracing::debug!("No product id on {}, skipping reviews", course_url);
                None
            }
        };

        Ok(page.into_record(course_url, review))
    }

    /// Looks up review counts for a product, logging and absorbing failures
    async fn fetch_reviews(&mut self, product_id: &str) -> Option<ReviewInfo> {
        let Some(client) = &self.reviews else {
            self.summary.record_skipped(Phase::Reviews);
            return None;
        };

        match client.fetch_review_info(product_id).await {
            Ok(Some(info)) => {
                self.summary.record_fetched(Phase::Reviews);
                Some(info)
            }
            Ok(None) => {
                tracing::debug!("No review summary for product {}", product_id);
                self.summary.record_skipped(Phase::Reviews);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to fetch review info for product {}: {}", product_id, e);
                self.summary.record_failure(
                    Phase::Reviews,
                    &format!("product {}", product_id),
                    e.to_string(),
                );
                None
            }
        }
    }
}

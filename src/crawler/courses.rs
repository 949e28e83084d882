//! Course link extraction from category pages

use crate::crawler::coordinator::Harvester;
use crate::crawler::parser::select_hrefs;
use crate::model::Phase;
use crate::url::{resolve_href, LinkList};

impl Harvester {
    /// Extracts course links from every category page, in category order
    pub async fn collect_course_links(&mut self, categories: &LinkList) -> LinkList {
        let mut courses = LinkList::new();
        for category_url in categories.iter() {
            self.extract_course_links(category_url, &mut courses).await;
        }
        courses
    }

    /// Fetches one category page and appends its novel course links
    ///
    /// Failures are logged and recorded in the run summary; `courses` is
    /// left untouched in that case.
    pub async fn extract_course_links(&mut self, category_url: &str, courses: &mut LinkList) {
        tracing::info!("[{}] Extracting from: {}", Phase::CourseLinks, category_url);

        let body = match self.fetcher.get(category_url).await.into_body() {
            Ok(body) => body,
            Err(reason) => {
                tracing::warn!(
                    "Failed to extract courses from {}: {}",
                    category_url,
                    reason
                );
                self.summary
                    .record_failure(Phase::CourseLinks, category_url, reason);
                return;
            }
        };

        self.summary.record_fetched(Phase::CourseLinks);

        let mut added = 0;
        for href in select_hrefs(&body, &self.selectors.course_link) {
            match resolve_href(&self.base_url, &href) {
                Some(url) => {
                    if courses.insert(&url) {
                        added += 1;
                    }
                }
                None => self.summary.record_skipped(Phase::CourseLinks),
            }
        }

        tracing::debug!("Added {} new course links from {}", added, category_url);
    }
}

//! Category crawl
//!
//! Depth-first discovery of category pages through "view all" links. The
//! traversal uses an explicit stack of per-page href iterators, so a child
//! page's subtree is exhausted before the parent's next link is considered
//! and deep site graphs cannot overflow the call stack.

use crate::crawler::coordinator::Harvester;
use crate::crawler::parser::select_hrefs;
use crate::model::Phase;
use crate::url::{resolve_href, LinkList};
use crate::HarvestError;
use std::collections::HashSet;

impl Harvester {
    /// Crawls category pages starting from the configured start path
    ///
    /// # Returns
    ///
    /// The category URLs in discovery order. The start page is only
    /// included if another page links back to it.
    pub async fn crawl_categories(&mut self) -> Result<LinkList, HarvestError> {
        let start_url = self.base_url.join(&self.config.site.start_path)?;

        let mut visited: HashSet<String> = HashSet::new();
        let mut categories = LinkList::new();
        let mut stack: Vec<std::vec::IntoIter<String>> = Vec::new();

        if let Some(hrefs) = self.visit_category(start_url.as_str(), &mut visited).await {
            stack.push(hrefs.into_iter());
        }

        loop {
            let next = match stack.last_mut() {
                Some(frame) => frame.next(),
                None => break,
            };

            let Some(href) = next else {
                stack.pop();
                continue;
            };

            let Some(url) = resolve_href(&self.base_url, &href) else {
                tracing::debug!("Ignoring view-all href '{}'", href);
                self.summary.record_skipped(Phase::Categories);
                continue;
            };

            if !categories.insert(&url) {
                tracing::debug!("Category already listed: {}", url);
                continue;
            }

            if let Some(hrefs) = self.visit_category(url.as_str(), &mut visited).await {
                stack.push(hrefs.into_iter());
            }
        }

        Ok(categories)
    }

    /// Fetches one category page and returns its view-all hrefs
    ///
    /// Returns None if the page was already visited or could not be fetched.
    async fn visit_category(
        &mut self,
        url: &str,
        visited: &mut HashSet<String>,
    ) -> Option<Vec<String>> {
        if !visited.insert(url.to_string()) {
            tracing::debug!("Already visited: {}", url);
            self.summary.record_skipped(Phase::Categories);
            return None;
        }

        tracing::info!("[{}] Visiting: {}", Phase::Categories, url);

        let body = match self.fetcher.get(url).await.into_body() {
            Ok(body) => body,
            Err(reason) => {
                tracing::warn!("Failed to process {}: {}", url, reason);
                self.summary
                    .record_failure(Phase::Categories, url, reason);
                return None;
            }
        };

        self.summary.record_fetched(Phase::Categories);

        let hrefs = select_hrefs(&body, &self.selectors.view_all);
        tracing::debug!("Found {} view-all links on {}", hrefs.len(), url);
        Some(hrefs)
    }
}

#[cfg(test)]
mod tests {
    use crate::crawler::test_support::{html_page, test_config};
    use crate::crawler::Harvester;
    use crate::model::Phase;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn view_all(hrefs: &[&str]) -> String {
        hrefs
            .iter()
            .map(|h| format!(r#"<a class="tray__view-all" href="{}">View all</a>"#, h))
            .collect()
    }

    async fn mount_page(server: &MockServer, page: &str, body: String) {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html_page(&body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_depth_first_order_and_cycles() {
        let server = MockServer::start().await;

        mount_page(&server, "/allsubjects", view_all(&["/cat/a", "/cat/b"])).await;
        mount_page(
            &server,
            "/cat/a",
            view_all(&["/cat/a1", "/cat/b", "/allsubjects"]),
        )
        .await;
        mount_page(&server, "/cat/a1", view_all(&["/cat/a"])).await;
        mount_page(&server, "/cat/b", String::new()).await;

        let mut harvester = Harvester::new(test_config(&server.uri())).unwrap();
        let categories = harvester.crawl_categories().await.unwrap();

        let base = server.uri();
        let expected: Vec<String> = ["/cat/a", "/cat/a1", "/cat/b", "/allsubjects"]
            .iter()
            .map(|p| format!("{}{}", base, p))
            .collect();
        // /cat/b is reached through /cat/a before the start page's own link to it;
        // the link back to the start page is listed but never fetched twice
        assert_eq!(categories.as_slice(), expected.as_slice());

        let stats = harvester.summary().stats(Phase::Categories);
        assert_eq!(stats.fetched, 4);
        assert_eq!(stats.failed, 0);
    }

    #[tokio::test]
    async fn test_failed_category_is_listed_but_not_expanded() {
        let server = MockServer::start().await;

        mount_page(&server, "/allsubjects", view_all(&["/cat/broken", "/cat/ok"])).await;
        Mock::given(method("GET"))
            .and(path("/cat/broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_page(&server, "/cat/ok", String::new()).await;

        let mut harvester = Harvester::new(test_config(&server.uri())).unwrap();
        let categories = harvester.crawl_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        let summary = harvester.summary();
        assert_eq!(summary.stats(Phase::Categories).failed, 1);
        let failure = summary.failures_in(Phase::Categories).next().unwrap();
        assert_eq!(failure.url, format!("{}/cat/broken", server.uri()));
        assert_eq!(failure.reason, "HTTP 500");
    }

    #[tokio::test]
    async fn test_unreachable_start_page_yields_no_categories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let mut harvester = Harvester::new(test_config(&server.uri())).unwrap();
        let categories = harvester.crawl_categories().await.unwrap();

        assert!(categories.is_empty());
        assert_eq!(harvester.summary().stats(Phase::Categories).failed, 1);
    }
}

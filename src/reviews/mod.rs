//! Review summary API client
//!
//! Course pages embed a review widget keyed by a product id. The review
//! counts themselves come from a third-party summary endpoint, queried once
//! per product with no caching and no retries.

use crate::config::ReviewConfig;
use crate::model::ReviewInfo;
use crate::HarvestError;
use reqwest::Client;
use serde::Deserialize;

/// `contentType` query parameter value
const CONTENT_TYPE: &str = "reviews,questions";

/// `reviewDistribution` query parameter value
const REVIEW_DISTRIBUTION: &str = "primaryRating,recommended";

/// Top-level summary payload; everything except `reviewSummary` is ignored
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SummaryPayload {
    review_summary: Option<ReviewSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReviewSummary {
    num_reviews: Option<u64>,
    primary_rating: Option<PrimaryRating>,
}

#[derive(Debug, Deserialize)]
struct PrimaryRating {
    average: Option<f64>,
}

/// Client for the review summary endpoint
#[derive(Debug, Clone)]
pub struct ReviewClient {
    client: Client,
    endpoint: String,
    pass_key: String,
    content_locale: String,
}

impl ReviewClient {
    pub fn new(client: Client, config: &ReviewConfig) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            pass_key: config.pass_key.clone(),
            content_locale: config.content_locale.clone(),
        }
    }

    /// Fetches the review summary for one product
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ReviewInfo))` - The payload carried a review summary
    /// * `Ok(None)` - The product has no review summary
    /// * `Err(HarvestError)` - Network error, non-2xx status or malformed JSON
    pub async fn fetch_review_info(&self, product_id: &str) -> Result<Option<ReviewInfo>, HarvestError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("PassKey", self.pass_key.as_str()),
                ("productid", product_id),
                ("contentType", CONTENT_TYPE),
                ("reviewDistribution", REVIEW_DISTRIBUTION),
                ("rev", "0"),
                ("contentlocale", self.content_locale.as_str()),
            ])
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| HarvestError::Http {
            url: self.endpoint.clone(),
            source,
        })?;

        parse_review_summary(&body)
    }
}

/// Extracts review counts from a summary payload
///
/// A payload without `reviewSummary`, or whose summary lacks `numReviews`,
/// yields `None`. A missing or null rating average is kept as `None`.
///
/// # Example
///
/// ```
/// use course_harvest::reviews::parse_review_summary;
///
/// let body = r#"{"reviewSummary": {"numReviews": 12, "primaryRating": {"average": 4.5}}}"#;
/// let info = parse_review_summary(body).unwrap().unwrap();
/// assert_eq!(info.num_reviews, 12);
/// assert_eq!(info.rating, Some(4.5));
/// ```
pub fn parse_review_summary(body: &str) -> Result<Option<ReviewInfo>, HarvestError> {
    let payload: SummaryPayload = serde_json::from_str(body)?;

    Ok(payload.review_summary.and_then(|summary| {
        let num_reviews = summary.num_reviews?;
        Some(ReviewInfo {
            num_reviews,
            rating: summary.primary_rating.and_then(|r| r.average),
        })
    }))
}

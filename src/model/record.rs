use serde::Serialize;

/// Sentinel written for text fields missing from a course page
pub const NOT_AVAILABLE: &str = "N/A";

/// Column order of the exported CSV; matches the field order of `CourseRecord`
pub const CSV_HEADER: [&str; 7] = [
    "title",
    "url",
    "rating",
    "total_runtime_minutes",
    "num_reviews",
    "professor",
    "product_id",
];

/// Metadata scraped from a single course page
///
/// Field order is the CSV column order. `None` values serialize as empty cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseRecord {
    /// Course title, or `N/A`
    pub title: String,

    /// Absolute URL of the course page
    pub url: String,

    /// Average rating from the review API
    pub rating: Option<f64>,

    /// Sum of the per-lecture runtimes, in minutes
    pub total_runtime_minutes: u64,

    /// Number of reviews from the review API
    pub num_reviews: Option<u64>,

    /// Professor name, or `N/A`
    pub professor: String,

    /// Review-system product identifier
    pub product_id: Option<String>,
}

/// Review counts for one product
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewInfo {
    pub num_reviews: u64,

    /// Primary rating average; the API reports none for unreviewed products
    pub rating: Option<f64>,
}

use chrono::{DateTime, Utc};
use std::fmt;

/// Stage of the harvest a counter or failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Depth-first discovery of category pages
    Categories,

    /// Course link extraction from category pages
    CourseLinks,

    /// Course page metadata scraping
    Metadata,

    /// Review summary API enrichment
    Reviews,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Categories => "Category",
            Phase::CourseLinks => "Courses",
            Phase::Metadata => "Metadata",
            Phase::Reviews => "Reviews",
        };
        write!(f, "{}", name)
    }
}

/// Counters for one phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseStats {
    /// Requests that returned usable content
    pub fetched: u64,

    /// Items dropped without a request (already visited, empty href, no data)
    pub skipped: u64,

    /// Requests that failed with a network, HTTP or parse error
    pub failed: u64,
}

/// One URL the run gave up on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub phase: Phase,
    pub url: String,
    pub reason: String,
}

/// Aggregated outcome of a harvest run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub categories: PhaseStats,
    pub course_links: PhaseStats,
    pub metadata: PhaseStats,
    pub reviews: PhaseStats,
    pub failures: Vec<FailedItem>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            categories: PhaseStats::default(),
            course_links: PhaseStats::default(),
            metadata: PhaseStats::default(),
            reviews: PhaseStats::default(),
            failures: Vec::new(),
        }
    }

    /// Returns the counters for a phase
    pub fn stats(&self, phase: Phase) -> &PhaseStats {
        match phase {
            Phase::Categories => &self.categories,
            Phase::CourseLinks => &self.course_links,
            Phase::Metadata => &self.metadata,
            Phase::Reviews => &self.reviews,
        }
    }

    fn stats_mut(&mut self, phase: Phase) -> &mut PhaseStats {
        match phase {
            Phase::Categories => &mut self.categories,
            Phase::CourseLinks => &mut self.course_links,
            Phase::Metadata => &mut self.metadata,
            Phase::Reviews => &mut self.reviews,
        }
    }

    pub fn record_fetched(&mut self, phase: Phase) {
        self.stats_mut(phase).fetched += 1;
    }

    pub fn record_skipped(&mut self, phase: Phase) {
        self.stats_mut(phase).skipped += 1;
    }

    /// Counts a failure and remembers the URL and reason
    pub fn record_failure(&mut self, phase: Phase, url: &str, reason: impl Into<String>) {
        self.stats_mut(phase).failed += 1;
        self.failures.push(FailedItem {
            phase,
            url: url.to_string(),
            reason: reason.into(),
        });
    }

    /// Marks the run as finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the run, if finished
    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Failures belonging to one phase, in the order they happened
    pub fn failures_in(&self, phase: Phase) -> impl Iterator<Item = &FailedItem> {
        self.failures.iter().filter(move |f| f.phase == phase)
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

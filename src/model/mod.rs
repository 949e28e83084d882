//! Data model for a harvest run
//!
//! - `CourseRecord`: one scraped course, the unit written to CSV
//! - `ReviewInfo`: review counts returned by the review summary API
//! - `RunSummary`: per-phase counters and failures for the whole run

mod record;
mod summary;

pub use record::{CourseRecord, ReviewInfo, CSV_HEADER, NOT_AVAILABLE};
pub use summary::{FailedItem, Phase, PhaseStats, RunSummary};

//! Configuration module for Course-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Running without a file is supported: `Config::default()` targets the
//! Great Courses Plus catalog.
//!
//! # Example
//!
//! ```no_run
//! use course_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Starting from: {}{}", config.site.base_url, config.site.start_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, OutputConfig, ReviewConfig, SelectorConfig, SiteConfig,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::validate;

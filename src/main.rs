//! Course-Harvest main entry point
//!
//! This is the command-line interface for the Course-Harvest catalog scraper.

use anyhow::Context;
use clap::Parser;
use course_harvest::config::{load_config, validate, Config};
use course_harvest::crawler::run_harvest;
use course_harvest::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Course-Harvest: a course-catalog metadata scraper
///
/// Course-Harvest walks a catalog's category pages, collects the courses
/// they list, scrapes title, runtime, professor and review data for each
/// course, and writes the result as CSV.
#[derive(Parser, Debug)]
#[command(name = "course-harvest")]
#[command(version)]
#[command(about = "A course-catalog metadata scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults are used without one)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Write the CSV here instead of the configured path
    #[arg(short, long, value_name = "CSV")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Skip the review summary API
    #[arg(long)]
    no_reviews: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
    }
    if cli.no_reviews {
        config.reviews.enabled = false;
    }
    validate(&config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    let csv_path = config.output.csv_path.clone();
    match run_harvest(config).await {
        Ok(report) => {
            tracing::info!("Harvest completed successfully");
            print_summary(&report, &csv_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("course_harvest=info,warn"),
            1 => EnvFilter::new("course_harvest=debug,info"),
            2 => EnvFilter::new("course_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Course-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Start path: {}", config.site.start_path);
    println!("  User agent: {}", config.site.user_agent);

    println!("\nCrawler:");
    println!("  Request timeout: {}s", config.crawler.request_timeout_secs);
    println!("  Request delay: {}ms", config.crawler.request_delay_ms);

    println!("\nSelectors:");
    println!("  View all: {}", config.selectors.view_all);
    println!("  Course link: {}", config.selectors.course_link);
    println!("  Title: {}", config.selectors.title);
    println!("  Runtime: {}", config.selectors.runtime);
    println!("  Product: {}", config.selectors.product);
    println!("  Professor: {}", config.selectors.professor);

    println!("\nReviews:");
    if config.reviews.enabled {
        println!("  Endpoint: {}", config.reviews.endpoint);
        println!("  Locale: {}", config.reviews.content_locale);
    } else {
        println!("  Disabled");
    }

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}

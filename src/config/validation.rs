use crate::config::types::{
    Config, CrawlerConfig, OutputConfig, ReviewConfig, SelectorConfig, SiteConfig,
};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_selector_config(&config.selectors)?;
    validate_review_config(&config.reviews)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    validate_http_url("base-url", &config.base_url)?;

    if config.start_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "start-path cannot be empty".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 || config.request_timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be between 1 and 300, got {}",
            config.request_timeout_secs
        )));
    }

    if config.request_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "request-delay-ms must be <= 60000ms, got {}ms",
            config.request_delay_ms
        )));
    }

    Ok(())
}

/// Validates that every configured selector compiles
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for (name, selector) in [
        ("view-all", &config.view_all),
        ("course-link", &config.course_link),
        ("title", &config.title),
        ("runtime", &config.runtime),
        ("product", &config.product),
        ("professor", &config.professor),
    ] {
        Selector::parse(selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} selector '{}': {}", name, selector, e))
        })?;
    }
    Ok(())
}

/// Validates review API configuration
fn validate_review_config(config: &ReviewConfig) -> Result<(), ConfigError> {
    if !config.enabled {
        return Ok(());
    }

    validate_http_url("reviews endpoint", &config.endpoint)?;

    if config.pass_key.is_empty() {
        return Err(ConfigError::Validation(
            "reviews pass-key cannot be empty when reviews are enabled".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_http_url(name: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", name, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use http or https",
            name, value
        )));
    }

    Ok(())
}

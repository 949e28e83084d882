//! Integration tests for the harvest pipeline
//!
//! These tests use wiremock to serve a small fixture catalog and run the
//! full crawl, scrape and export cycle end-to-end.

use course_harvest::config::Config;
use course_harvest::crawler::{run_harvest, Harvester};
use course_harvest::model::Phase;
use course_harvest::{ConfigError, HarvestError};
use std::path::Path;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HEADER: &str = "title,url,rating,total_runtime_minutes,num_reviews,professor,product_id";

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, csv_path: &Path) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.user_agent = "TestBot/1.0".to_string();
    config.crawler.request_delay_ms = 0; // No pacing in tests
    config.reviews.endpoint = format!("{}/reviews/summary", base_url);
    config.output.csv_path = csv_path.display().to_string();
    config
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_html(server: &MockServer, page: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(html(body))
        .mount(server)
        .await;
}

fn course_page(title: &str, minutes: &[u32], product_id: Option<&str>, professor: &str) -> String {
    let runtime: String = minutes
        .iter()
        .map(|m| format!(r#"<span class="total-len small">{} min</span>"#, m))
        .collect();
    let product = product_id
        .map(|id| format!(r#"<div data-bv-product-id="{}" data-bv-show="reviews"></div>"#, id))
        .unwrap_or_default();
    format!(
        r#"<h1 itemprop="name">{}</h1>{}{}<a class="professor-name h2 m-0 n-link" href="/p">{}</a>"#,
        title, runtime, product, professor
    )
}

/// Mounts a catalog with 2 categories and 3 courses
async fn mount_fixture_site(server: &MockServer) {
    mount_html(
        server,
        "/allsubjects",
        r#"<a class="tray__view-all" href="/cat/history">View all</a>
           <a class="tray__view-all" href="/cat/science">View all</a>"#,
    )
    .await;

    mount_html(
        server,
        "/cat/history",
        r#"<a class="item__link" href="/courses/rome">Rome</a>
           <a class="item__link" href="/courses/greece">Greece</a>"#,
    )
    .await;

    mount_html(
        server,
        "/cat/science",
        r#"<a class="item__link" href="/courses/physics">Physics</a>
           <a class="item__link" href="/courses/rome">Rome</a>"#,
    )
    .await;

    mount_html(
        server,
        "/courses/rome",
        &course_page("The Fall of Rome", &[30, 45, 0], Some("1001"), "Kenneth Harl"),
    )
    .await;
    mount_html(
        server,
        "/courses/greece",
        &course_page("Ancient Greece", &[20], None, "Elizabeth Vandiver"),
    )
    .await;
    mount_html(
        server,
        "/courses/physics",
        &course_page("Physics, Explained", &[25, 25], Some("1002"), "Richard Wolfson"),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/reviews/summary"))
        .and(query_param("productid", "1001"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"reviewSummary": {"numReviews": 12, "primaryRating": {"average": 4.5}}}"#,
        ))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/reviews/summary"))
        .and(query_param("productid", "1002"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"Includes": {}}"#))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_harvest_writes_csv_in_discovery_order() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;
    let base = server.uri();

    let dir = tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("courses.csv");
    let config = create_test_config(&base, &csv_path);

    let report = run_harvest(config).await.expect("Harvest failed");

    assert_eq!(
        report.categories,
        vec![format!("{}/cat/history", base), format!("{}/cat/science", base)]
    );
    assert_eq!(report.courses.len(), 3);
    assert_eq!(report.records.len(), 3);

    let csv = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4, "header plus 3 data rows");
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        format!(
            "The Fall of Rome,{}/courses/rome,4.5,75,12,Kenneth Harl,1001",
            base
        )
    );
    assert_eq!(
        lines[2],
        format!("Ancient Greece,{}/courses/greece,,20,,Elizabeth Vandiver,", base)
    );
    assert_eq!(
        lines[3],
        format!(
            "\"Physics, Explained\",{}/courses/physics,,50,,Richard Wolfson,1002",
            base
        )
    );

    let summary = &report.summary;
    assert_eq!(summary.stats(Phase::Categories).fetched, 3);
    assert_eq!(summary.stats(Phase::CourseLinks).fetched, 2);
    assert_eq!(summary.stats(Phase::Metadata).fetched, 3);
    assert_eq!(summary.stats(Phase::Reviews).fetched, 1);
    assert_eq!(summary.stats(Phase::Reviews).skipped, 1);
    assert!(summary.failures.is_empty());
}

#[tokio::test]
async fn test_rerun_produces_identical_csv() {
    let server = MockServer::start().await;
    mount_fixture_site(&server).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let first_path = dir.path().join("first.csv");
    let second_path = dir.path().join("second.csv");

    run_harvest(create_test_config(&server.uri(), &first_path))
        .await
        .expect("First harvest failed");
    run_harvest(create_test_config(&server.uri(), &second_path))
        .await
        .expect("Second harvest failed");

    let first = std::fs::read(&first_path).expect("Failed to read first CSV");
    let second = std::fs::read(&second_path).expect("Failed to read second CSV");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_failed_course_is_omitted_and_reported() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/allsubjects",
        r#"<a class="tray__view-all" href="/cat/all">View all</a>"#,
    )
    .await;
    mount_html(
        &server,
        "/cat/all",
        r#"<a class="item__link" href="/courses/gone">Gone</a>
           <a class="item__link" href="/courses/ok">Ok</a>"#,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/courses/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    mount_html(&server, "/courses/ok", &course_page("Ok", &[10], None, "Someone")).await;

    let dir = tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("courses.csv");
    let report = run_harvest(create_test_config(&base, &csv_path))
        .await
        .expect("Harvest failed");

    let csv = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("/courses/ok"));
    assert!(!csv.contains("/courses/gone"));

    let failures: Vec<_> = report.summary.failures_in(Phase::Metadata).collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].url, format!("{}/courses/gone", base));
    assert_eq!(failures[0].reason, "HTTP 404");
}

#[tokio::test]
async fn test_cyclic_view_all_links_terminate() {
    let server = MockServer::start().await;

    // Every category links to every other one, and back to the index
    let ring = r#"<a class="tray__view-all" href="/cat/one">1</a>
                  <a class="tray__view-all" href="/cat/two">2</a>
                  <a class="tray__view-all" href="/allsubjects">Index</a>"#;
    for page in ["/allsubjects", "/cat/one", "/cat/two"] {
        Mock::given(method("GET"))
            .and(path(page))
            .respond_with(html(ring))
            .expect(1)
            .mount(&server)
            .await;
    }

    let dir = tempdir().expect("Failed to create temp dir");
    let config = create_test_config(&server.uri(), &dir.path().join("courses.csv"));
    let mut harvester = Harvester::new(config).expect("Failed to create harvester");
    let categories = harvester
        .crawl_categories()
        .await
        .expect("Category crawl failed");

    assert_eq!(categories.len(), 3);
    let unique: std::collections::HashSet<_> = categories.iter().collect();
    assert_eq!(unique.len(), categories.len());
}

#[tokio::test]
async fn test_empty_catalog_still_writes_header() {
    let server = MockServer::start().await;
    mount_html(&server, "/allsubjects", "<p>No subjects today</p>").await;

    let dir = tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("courses.csv");
    let report = run_harvest(create_test_config(&server.uri(), &csv_path))
        .await
        .expect("Harvest failed");

    assert!(report.records.is_empty());
    let csv = std::fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert_eq!(csv, format!("{}\r\n", HEADER));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html(""))
        .expect(0)
        .mount(&server)
        .await;

    let dir = tempdir().expect("Failed to create temp dir");
    let csv_path = dir.path().join("courses.csv");
    let mut config = create_test_config(&server.uri(), &csv_path);
    config.crawler.request_timeout_secs = 0;

    let err = run_harvest(config).await.unwrap_err();
    assert!(matches!(
        err,
        HarvestError::Config(ConfigError::Validation(_))
    ));
    assert!(!csv_path.exists());
}

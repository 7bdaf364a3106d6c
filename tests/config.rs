use std::io::Write;

use scrapers::{Config, ScrapeError};

#[test]
fn missing_path_uses_defaults() {
    let config = Config::load(None).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.jobs.page_size, 100);
    assert_eq!(config.jobs.click_timeout_ms, 3000);
    assert_eq!(config.images.exclusions, ["plus", "profile", "premium"]);
}

#[test]
fn loads_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[log]
level = "scrapers=debug"
ansi = false

[jobs]
listing_selector = "ul.jobs li"
webdriver_url = "http://127.0.0.1:4444"

[[jobs.fields.job_name]]
css = "h3.title"

[[jobs.fields.job_link]]
css = "h3.title a"
attr = "href"

[images]
search_url = "https://photos.example/search?q={{term}}"
output_dir = "/data/photos"
"#
    )
    .unwrap();

    let config = Config::load(Some(file.path())).unwrap();
    assert_eq!(config.log.level, "scrapers=debug");
    assert!(!config.log.ansi);
    assert_eq!(config.jobs.listing_selector, "ul.jobs li");
    assert_eq!(config.jobs.webdriver_url, "http://127.0.0.1:4444");
    assert_eq!(config.jobs.fields.job_name[0].css, "h3.title");
    assert_eq!(config.jobs.fields.job_link[0].attr.as_deref(), Some("href"));
    // untouched chains keep their defaults
    assert_eq!(config.jobs.fields.salary.len(), 2);
    assert_eq!(
        config.images.search_url_for("owls"),
        "https://photos.example/search?q=owls"
    );
    assert_eq!(config.images.output_dir, "/data/photos");
}

#[test]
fn search_url_needs_placeholder() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[images]\nsearch_url = \"https://photos.example/\"").unwrap();
    assert!(matches!(
        Config::load(Some(file.path())),
        Err(ScrapeError::Config(_))
    ));
}

#[test]
fn malformed_toml_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[jobs\npage_size = ").unwrap();
    assert!(matches!(
        Config::load(Some(file.path())),
        Err(ScrapeError::Config(_))
    ));
}

#[test]
fn unreadable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(matches!(Config::load(Some(missing.as_path())), Err(ScrapeError::Io(_))));
}

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

fn config_dir() -> &'static Path {
    static CONFIG_DIR: OnceLock<TempDir> = OnceLock::new();
    CONFIG_DIR
        .get_or_init(|| {
            let dir = tempfile::tempdir().expect("failed to create config dir for tests");
            std::fs::write(dir.path().join("config.toml"), "")
                .expect("failed to write empty config");
            dir
        })
        .path()
}

/// Create a configured `sitemap-csv` command suitable for integration tests.
///
/// Points the config lookup at an empty file so a developer's own
/// configuration never leaks into test runs.
pub fn sitemap_csv_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("sitemap-csv"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("SITEMAP_CSV_CONFIG", config_dir().join("config.toml"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Build a `<urlset>` body from locations.
#[allow(dead_code)]
pub fn urlset(locs: &[&str]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<url><loc>{loc}</loc></url>"))
        .collect();
    format!(r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{entries}</urlset>"#)
}

/// Build a `<sitemapindex>` body from locations.
#[allow(dead_code)]
pub fn sitemap_index(locs: &[&str]) -> String {
    let entries: String = locs
        .iter()
        .map(|loc| format!("<sitemap><loc>{loc}</loc></sitemap>"))
        .collect();
    format!(r#"<?xml version="1.0" encoding="UTF-8"?>
<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">{entries}</sitemapindex>"#)
}

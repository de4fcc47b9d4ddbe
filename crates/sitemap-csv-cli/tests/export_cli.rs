#![allow(missing_docs)]

mod common;

use common::{sitemap_csv_cmd, sitemap_index, urlset};
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("Content-Type", "application/xml"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn export_writes_sorted_unique_urls() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let base = server.uri();

    serve(
        &server,
        "/sitemap.xml",
        sitemap_index(&[
            &format!("{base}/pages.xml"),
            &format!("{base}/posts.xml"),
            &format!("{base}/sitemap.xml"),
        ]),
    )
    .await;
    serve(
        &server,
        "/pages.xml",
        urlset(&["https://example.com/b", "https://example.com/a"]),
    )
    .await;
    serve(
        &server,
        "/posts.xml",
        urlset(&["https://example.com/a", "https://example.com/post,1"]),
    )
    .await;

    let tmp = tempdir()?;
    let output = tmp.path().join("links.csv");

    sitemap_csv_cmd()
        .arg(format!("{base}/sitemap.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrote 3 unique URLs to {}",
            output.display()
        )));

    assert_eq!(
        std::fs::read_to_string(&output)?,
        "url\nhttps://example.com/a\nhttps://example.com/b\n\"https://example.com/post,1\"\n"
    );
    Ok(())
}

#[tokio::test]
async fn export_defaults_to_sitemap_urls_csv() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    serve(&server, "/sitemap.xml", urlset(&["https://example.com/only"])).await;

    let tmp = tempdir()?;

    sitemap_csv_cmd()
        .current_dir(tmp.path())
        .arg(format!("{}/sitemap.xml", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrote 1 unique URLs to sitemap_urls.csv",
        ));

    assert_eq!(
        std::fs::read_to_string(tmp.path().join("sitemap_urls.csv"))?,
        "url\nhttps://example.com/only\n"
    );
    Ok(())
}

#[tokio::test]
async fn export_strip_domain_flag() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    serve(
        &server,
        "/sitemap.xml",
        urlset(&["https://example.com/docs#intro", "https://example.com/"]),
    )
    .await;

    let tmp = tempdir()?;
    let output = tmp.path().join("paths.csv");

    sitemap_csv_cmd()
        .arg(format!("{}/sitemap.xml", server.uri()))
        .args(["--strip-domain", "--output"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output)?, "url\n/\n/docs#intro\n");
    Ok(())
}

#[tokio::test]
async fn verbose_run_logs_sitemap_count() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let base = server.uri();
    serve(
        &server,
        "/sitemap.xml",
        sitemap_index(&[&format!("{base}/a.xml"), &format!("{base}/b.xml")]),
    )
    .await;
    serve(&server, "/a.xml", urlset(&["https://example.com/a"])).await;
    serve(&server, "/b.xml", urlset(&["https://example.com/b"])).await;

    let tmp = tempdir()?;

    sitemap_csv_cmd()
        .current_dir(tmp.path())
        .arg(format!("{base}/sitemap.xml"))
        .arg("-v")
        .assert()
        .success()
        .stderr(predicate::str::contains("sitemaps=3"))
        .stdout(predicate::str::contains("Wrote 2 unique URLs"));
    Ok(())
}

#[tokio::test]
async fn root_404_fails_without_writing() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tmp = tempdir()?;
    let output = tmp.path().join("never.csv");

    sitemap_csv_cmd()
        .arg(format!("{}/sitemap.xml", server.uri()))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Failed to parse sitemap: "));

    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn unreachable_child_fails_whole_export() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    let base = server.uri();
    serve(
        &server,
        "/sitemap.xml",
        sitemap_index(&[&format!("{base}/ok.xml"), &format!("{base}/gone.xml")]),
    )
    .await;
    serve(&server, "/ok.xml", urlset(&["https://example.com/a"])).await;

    let tmp = tempdir()?;
    let output = tmp.path().join("never.csv");

    sitemap_csv_cmd()
        .arg(format!("{base}/sitemap.xml"))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gone.xml"));

    assert!(!output.exists());
    Ok(())
}

#[tokio::test]
async fn unsupported_root_reports_tag() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    serve(
        &server,
        "/feed.xml",
        r#"<?xml version="1.0"?><rss version="2.0"><channel/></rss>"#.to_string(),
    )
    .await;

    let tmp = tempdir()?;

    sitemap_csv_cmd()
        .current_dir(tmp.path())
        .arg(format!("{}/feed.xml", server.uri()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to parse sitemap: Unsupported sitemap root tag: rss",
        ));
    Ok(())
}

#[tokio::test]
async fn unwritable_output_reports_write_failure() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    serve(&server, "/sitemap.xml", urlset(&["https://example.com/a"])).await;

    let tmp = tempdir()?;
    let output = tmp.path().join("missing-dir").join("out.csv");

    sitemap_csv_cmd()
        .arg(format!("{}/sitemap.xml", server.uri()))
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Failed to write CSV: "));
    Ok(())
}

#[test]
fn blank_sitemap_is_usage_error() {
    sitemap_csv_cmd()
        .arg("   ")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("must not be blank"));
}

#[test]
fn missing_sitemap_argument_fails() {
    sitemap_csv_cmd().assert().failure();
}

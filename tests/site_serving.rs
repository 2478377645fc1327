//! End-to-end tests for static site serving.

mod common;

use std::sync::Arc;

use common::{spawn_app_with, spawn_upstream, test_config, Upstream};

#[tokio::test]
async fn site_assets_are_served_with_etags_and_conditional_304() {
    let upstream = Upstream::new(true, 200, "{}");
    let upstream_addr = spawn_upstream(Arc::clone(&upstream)).await;

    let site = tempfile::TempDir::new().expect("temp site dir");
    std::fs::write(site.path().join("index.html"), "<html>Chain &amp; Chisel</html>")
        .expect("write index");
    std::fs::write(site.path().join("style.css"), "body { color: #222; }").expect("write css");

    let mut cfg = test_config(upstream_addr, true);
    cfg.site.root = site.path().to_str().expect("utf-8 path").to_string();
    let app = spawn_app_with(cfg).await;

    let client = reqwest::Client::new();

    // Index fallback for the root path
    let response = client
        .get(format!("http://{app}/"))
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );
    let etag = response.headers()["ETag"]
        .to_str()
        .expect("etag")
        .to_string();
    let text = response.text().await.expect("body");
    assert!(text.contains("Chain &amp; Chisel"));

    // Conditional revalidation
    let response = client
        .get(format!("http://{app}/"))
        .header("If-None-Match", etag)
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 304);

    // Plain asset with its own MIME type
    let response = client
        .get(format!("http://{app}/style.css"))
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["Content-Type"], "text/css");

    // Unknown paths are 404
    let response = client
        .get(format!("http://{app}/gallery/missing.jpg"))
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 404);

    // Site paths only accept GET/HEAD/OPTIONS
    let response = client
        .delete(format!("http://{app}/style.css"))
        .send()
        .await
        .expect("request succeeds");
    assert_eq!(response.status(), 405);
}

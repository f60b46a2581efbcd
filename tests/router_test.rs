//! End-to-end tests of the HTTP surface on an ephemeral port

mod utils;

use mockito::{Matcher, Server};
use mosaic_lib::commands::router;
use mosaic_lib::modules::media::MediaService;
use mosaic_lib::modules::provider::{
    domain::{BudgetPolicy, FetchBudgeter, ImageSource, ProviderConfig},
    infrastructure::{
        adapters::WallpaperFlareAdapter, http_client::RateLimitClient, AggregationEngine,
        HealthChecker,
    },
    ImageProvider, ImageService,
};
use mosaic_lib::shared::{config::EnabledProviders, infrastructure::AppState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use utils::{spawn_stalling_upstream, FakeProvider};

async fn spawn_app(wallpaper_base: &str) -> String {
    spawn_app_with(wallpaper_base, Duration::from_secs(5)).await
}

/// Serves the router with fake aggregation providers; wallpapers come from `wallpaper_base`
async fn spawn_app_with(wallpaper_base: &str, download_timeout: Duration) -> String {
    let providers: Vec<Arc<dyn ImageProvider>> = vec![
        Arc::new(FakeProvider::new(ImageSource::Curated, 30).with_total_pages(9)),
        Arc::new(FakeProvider::new(ImageSource::Stock, 30).failing()),
        Arc::new(FakeProvider::new(ImageSource::Artwork, 30)),
    ];
    let engine = Arc::new(AggregationEngine::new(
        providers.clone(),
        FetchBudgeter::new(
            BudgetPolicy::default(),
            EnabledProviders::new([ImageSource::Curated, ImageSource::Stock, ImageSource::Artwork]),
        ),
        Duration::from_secs(5),
    ));
    let wallpapers = Arc::new(WallpaperFlareAdapter::with_config(
        ProviderConfig::new(ImageSource::Wallpaper).with_base_url(wallpaper_base),
    ));
    let health = Arc::new(HealthChecker::new(providers, Duration::from_secs(5)));

    let state = AppState::new(
        Arc::new(ImageService::new(engine, wallpapers, health)),
        Arc::new(MediaService::new(Arc::new(RateLimitClient::for_downloads(
            download_timeout,
        )))),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_images_endpoint_returns_page_with_debug() {
    let base = spawn_app("http://127.0.0.1:9").await;

    let (status, body) = get_json(&format!("{}/images?query=sea&page=2&per_page=8", base)).await;

    assert_eq!(status, 200);
    assert!(body["images"].as_array().unwrap().len() <= 8);
    assert_eq!(body["current_page"], 2);
    assert_eq!(body["total_pages"], 9);
    assert_eq!(body["has_next"], true);
    assert_eq!(body["has_prev"], true);
    assert_eq!(body["debug"]["curated"]["success"], true);
    assert_eq!(body["debug"]["stock"]["success"], false);
    assert!(body["debug"]["stock"]["error"].is_string());
    assert!(body["debug"]["anime"]["error"].is_null());

    let image = &body["images"][0];
    for field in ["url", "thumbnail", "source", "alt", "author", "likes"] {
        assert!(!image[field].is_null(), "missing {}", field);
    }
}

#[tokio::test]
async fn test_images_rejects_bad_paging() {
    let base = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("{}/images?per_page=0", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = reqwest::get(format!("{}/images?page=abc", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_related_images_endpoint() {
    let base = spawn_app("http://127.0.0.1:9").await;

    let (status, body) =
        get_json(&format!("{}/related_images?source=artic&query=bridges", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["source"], "artwork");
    assert_eq!(body["query"], "bridges");
    assert!(body["images"]
        .as_array()
        .unwrap()
        .iter()
        .all(|image| image["source"] == "artwork"));

    let response = reqwest::get(format!("{}/related_images?source=flickr", base))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_wallpaper_search_without_query() {
    let base = spawn_app("http://127.0.0.1:9").await;

    let (status, body) = get_json(&format!("{}/wallpaper/search", base)).await;

    assert_eq!(status, 200);
    assert_eq!(body["images"], serde_json::json!([]));
    assert_eq!(body["error"], "No query provided");
}

#[tokio::test]
async fn test_wallpaper_search_and_random() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"<figure><img data-src="https://c4.wallpaperflare.com/w.jpg"></figure>"#)
        .expect_at_least(2)
        .create_async()
        .await;
    let base = spawn_app(&server.url()).await;

    let (status, body) = get_json(&format!("{}/wallpaper/search?query=space&page=2", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["images"][0], "https://c4.wallpaperflare.com/w.jpg");
    assert_eq!(body["query"], "space");
    assert_eq!(body["page"], 2);
    assert_eq!(body["is_random"], false);

    let (status, body) = get_json(&format!("{}/wallpaper/random", base)).await;
    assert_eq!(status, 200);
    assert_eq!(body["page"], 1);
    assert_eq!(body["is_random"], true);
    assert!(body["query"].as_str().is_some_and(|q| !q.is_empty()));
}

#[tokio::test]
async fn test_like_image() {
    let base = spawn_app("http://127.0.0.1:9").await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/like_image", base))
        .json(&serde_json::json!({"image_url": "https://images.unsplash.com/photo-1"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    let count = body["new_likes_count"].as_u64().unwrap();
    assert!((101..=10001).contains(&count));

    let response = client
        .post(format!("{}/like_image", base))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "No image URL provided");
}

#[tokio::test]
async fn test_download_proxies_image_as_attachment() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/cat.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(vec![0x89, b'P', b'N', b'G'])
        .create_async()
        .await;
    let base = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::Client::new()
        .get(format!("{}/download_image", base))
        .query(&[
            ("url", format!("{}/cat.png", server.url())),
            ("filename", "kitty.png".to_string()),
        ])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.headers()["content-type"], "image/png");
    assert_eq!(
        response.headers()["content-disposition"],
        "attachment; filename=\"kitty.png\""
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), &[0x89, b'P', b'N', b'G']);
}

#[tokio::test]
async fn test_download_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gone.jpg")
        .with_status(404)
        .create_async()
        .await;
    let base = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("{}/download_image", base)).await.unwrap();
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(response.text().await.unwrap(), "No image URL provided");

    let response = reqwest::Client::new()
        .get(format!("{}/download_image", base))
        .query(&[("url", format!("{}/gone.jpg", server.url()))])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Error downloading image:"));
}

#[tokio::test]
async fn test_download_stalled_upstream_is_server_error() {
    let upstream = spawn_stalling_upstream(1000, 100, Duration::from_secs(3)).await;
    let base = spawn_app_with("http://127.0.0.1:9", Duration::from_secs(1)).await;

    let response = reqwest::Client::new()
        .get(format!("{}/download_image", base))
        .query(&[("url", format!("{}/big.jpg", upstream))])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    assert!(response.headers().get("content-disposition").is_none());
    assert!(response
        .text()
        .await
        .unwrap()
        .starts_with("Error downloading image:"));
}

#[tokio::test]
async fn test_health_endpoint_reports_timestamp() {
    let base = spawn_app("http://127.0.0.1:9").await;

    let (status, body) = get_json(&format!("{}/test", base)).await;

    assert_eq!(status, 200);
    assert!(body["checked_at"].is_string());
    // Fakes expose no probe, so nothing is listed
    assert_eq!(body["providers"], serde_json::json!({}));
}

use std::sync::Arc;

use og_card::core::document::DocumentRenderer;
use og_card::core::emoji::EmojiRenderer;
use og_card::core::fonts::{FontAssets, FontFace, HEADING_FAMILY};
use og_card::core::renderer::RenderingEngine;
use og_card::settings::Config;
use og_card::{AppState, init_openapi_route};
use poem::test::TestClient;
use serde_json::Value;

fn config() -> Config {
    Config {
        env: "server".to_string(),
        host: "127.0.0.1".to_string(),
        port: 8000,
        prefix: None,
        fonts_dir: None,
        emoji_base_url: None,
        html_debug: Some(true),
    }
}

fn app_state() -> Arc<AppState> {
    let fonts = FontAssets::new(vec![FontFace::from_bytes(HEADING_FAMILY, 700, b"font")]);
    Arc::new(AppState {
        engine: Arc::new(RenderingEngine::new().expect("Failed to build rendering engine")),
        document: DocumentRenderer::new(Arc::new(fonts), EmojiRenderer::default()),
        html_debug: true,
    })
}

#[tokio::test]
async fn test_card_route_returns_document_in_debug_mode() {
    let config = config();
    let cli = TestClient::new(init_openapi_route(app_state(), &config));

    let resp = cli
        .get("/Hello.png?theme=red&fontSize=120px&images=a.svg&images=b.svg&widths=300")
        .send()
        .await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("background: red;"));
    assert!(body.contains("font-size: 120px;"));
    assert!(body.contains(r#"src="a.svg""#));
    assert!(body.contains(r#"src="b.svg""#));
    assert!(body.contains(r#"width="300""#));
    assert_eq!(body.matches(r#"<div class="plus">+</div>"#).count(), 1);
    assert!(body.contains("Hello"));
}

#[tokio::test]
async fn test_card_route_renders_markdown() {
    let config = config();
    let cli = TestClient::new(init_openapi_route(app_state(), &config));

    let resp = cli.get("/**Bold**.jpeg?md=1").send().await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    assert!(body.contains("<strong>Bold</strong>"));
}

#[tokio::test]
async fn test_health_reports_idle_browser() {
    let config = config();
    let cli = TestClient::new(init_openapi_route(app_state(), &config));

    let resp = cli.get("/health").send().await;
    resp.assert_status_is_ok();

    let body = resp.0.into_body().into_string().await.unwrap();
    let health: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"].as_str().unwrap(), "healthy");
    assert_eq!(health["browser_running"].as_bool(), Some(false));
}

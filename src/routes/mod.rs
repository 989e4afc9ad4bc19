//! HTTP route handlers.
//!
//! Routes are grouped by caching behavior: the page is private and revalidated,
//! the relay is never cached, static assets are long-lived. Request tracing is
//! enabled via middleware that generates a unique request ID for each request.

pub mod api;
pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::config::{
    BACKEND_HELLO_PATH, CACHE_CONTROL_HOME, CACHE_CONTROL_RELAY, CACHE_CONTROL_STATIC, STATIC_DIR,
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Relay - every probe must reach the backend
    let relay_routes = Router::new()
        .route(BACKEND_HELLO_PATH, get(api::hello))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_RELAY),
        ));

    // Static files - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    let mut router = Router::new()
        .merge(page_routes)
        .merge(health_routes)
        .merge(static_routes);

    // A static export has no server routes, so the relay only exists when served
    if state.config.deploy.source.serves_relay() {
        router = router.merge(relay_routes);
    } else {
        tracing::info!("Static export mode, relay route disabled");
    }

    router
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DEFAULT_SERVER_FAILURE_MESSAGE};
    use crate::relay::{Relay, RELAY_ERROR_MESSAGE};
    use crate::templates::init_templates;
    use crate::testing::{spawn_backend, unreachable_base_url};
    use axum::{
        body::{self, Body},
        http::{Request, StatusCode},
        response::Response,
        Json,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_state(base_url: &str, source: &str) -> AppState {
        let config = AppConfig::parse(&format!(
            r#"
[http]
host = "127.0.0.1"
port = 3000

[backend]
base_url = "{base_url}"
timeout_seconds = 5

[deploy]
source = "{source}"
"#
        ))
        .unwrap();
        let relay = Relay::new(&config.backend).unwrap();
        AppState::new(config, init_templates().unwrap(), relay)
    }

    async fn get(state: AppState, uri: &str) -> Response {
        create_router(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn live_backend() -> String {
        spawn_backend(Router::new().route(
            "/api/hello",
            axum::routing::get(|| async {
                Json(json!({
                    "message": "Hello from Backend!",
                    "ip": "10.0.2.20",
                    "status": "success"
                }))
            }),
        ))
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn test_page_renders_idle() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_HOME);

        let html = body_text(response).await;
        assert!(html.contains(r#"data-probe-state="idle""#));
        assert!(html.contains(r#"class="explanation-placeholder""#));
        assert!(!html.contains("is-focused"));
        assert!(!html.contains(r#"id="lightbox""#));
        for id in ["provider", "vpc", "subnets", "frontend_instance"] {
            assert!(html.contains(&format!(r#"id="snippet-{}""#, id)), "{}", id);
        }
    }

    #[tokio::test]
    async fn test_page_snippets_in_order() {
        let state = test_state(&unreachable_base_url().await, "server");
        let html = body_text(get(state, "/").await).await;
        let provider = html.find(r#"id="snippet-provider""#).unwrap();
        let vpc = html.find(r#"id="snippet-vpc""#).unwrap();
        let frontend = html.find(r#"id="snippet-frontend_instance""#).unwrap();
        assert!(provider < vpc && vpc < frontend);
    }

    #[tokio::test]
    async fn test_page_focus() {
        let state = test_state(&unreachable_base_url().await, "server");
        let html = body_text(get(state, "/?focus=vpc").await).await;
        assert!(html.contains(r#"class="snippet is-focused" id="snippet-vpc""#));
        assert!(html.contains(r#"class="explanation-title">VPC Resource<"#));
        assert!(!html.contains(r#"class="explanation-placeholder""#));
        assert_eq!(html.matches("is-focused").count(), 1);
    }

    #[tokio::test]
    async fn test_page_unknown_focus_is_not_found() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/?focus=nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("Request ID:"));
    }

    #[tokio::test]
    async fn test_page_lightbox() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(
            state,
            "/?tab=aws&image=%2Fstatic%2Fscreenshots%2Faws-vpc.svg",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"id="lightbox""#));
        assert!(html.contains(r#"data-active-tab="aws""#));
    }

    #[tokio::test]
    async fn test_page_lightbox_backdrop_and_button_close() {
        for close in ["backdrop", "button"] {
            let state = test_state(&unreachable_base_url().await, "server");
            let uri = format!(
                "/?tab=aws&image=%2Fstatic%2Fscreenshots%2Faws-vpc.svg&close={}",
                close
            );
            let response = get(state, &uri).await;
            assert_eq!(response.status(), StatusCode::OK);
            let html = body_text(response).await;
            assert!(!html.contains(r#"id="lightbox""#), "{}", close);
            assert!(html.contains(r#"data-active-tab="aws""#));
        }
    }

    #[tokio::test]
    async fn test_page_lightbox_image_click_keeps_it_open() {
        let state = test_state(&unreachable_base_url().await, "server");
        let html = body_text(
            get(
                state,
                "/?tab=aws&image=%2Fstatic%2Fscreenshots%2Faws-vpc.svg&close=image",
            )
            .await,
        )
        .await;
        assert!(html.contains(r#"id="lightbox""#));
        assert!(html.contains("close=backdrop"));
    }

    #[tokio::test]
    async fn test_page_empty_focus_shows_placeholder() {
        let state = test_state(&unreachable_base_url().await, "server");
        let html = body_text(get(state, "/?focus=").await).await;
        assert!(html.contains(r#"class="explanation-placeholder""#));
        assert!(!html.contains("is-focused"));
    }

    #[tokio::test]
    async fn test_page_image_from_other_tab_is_not_found() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(
            state,
            "/?tab=aws&image=%2Fstatic%2Fscreenshots%2Fterraform-init.svg",
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_unknown_tab_is_not_found() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/?tab=nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_probe_success() {
        let state = test_state(&live_backend().await, "server");
        let html = body_text(get(state, "/?probe=true").await).await;
        assert!(html.contains(r#"data-probe-state="succeeded""#));
        assert!(html.contains("Hello from Backend!"));
    }

    #[tokio::test]
    async fn test_page_probe_failure() {
        let state = test_state(&unreachable_base_url().await, "server");
        let html = body_text(get(state, "/?probe=true").await).await;
        assert!(html.contains(r#"data-probe-state="failed""#));
        assert!(html.contains(DEFAULT_SERVER_FAILURE_MESSAGE));
    }

    #[tokio::test]
    async fn test_relay_success() {
        let state = test_state(&live_backend().await, "server");
        let response = get(state, "/api/hello").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_RELAY);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["ip"], "10.0.2.20");
    }

    #[tokio::test]
    async fn test_relay_dead_backend() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/api/hello").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_RELAY);

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, json!({ "error": RELAY_ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn test_static_export_has_no_relay() {
        let state = test_state(&live_backend().await, "github-pages");
        let response = get(state.clone(), "/api/hello").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let html = body_text(get(state, "/?probe=true").await).await;
        assert!(html.contains(r#"data-probe-state="failed""#));
        assert!(html.contains("static GitHub Pages export"));
    }

    #[tokio::test]
    async fn test_static_assets() {
        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/static/css/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_CONTROL], CACHE_CONTROL_STATIC);

        let state = test_state(&unreachable_base_url().await, "server");
        let response = get(state, "/static/screenshots/aws-vpc.svg").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use polaroid_service::config::PolaroidConfig;
use polaroid_service::services::DocumentStore;
use polaroid_service::startup::{build_router, AppState, Application};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_MONGODB_URL: &str = "mongodb://localhost:27017";
pub const SAMPLE_IMAGE: &str = "data:image/png;base64,AAA";
pub const SAMPLE_INSTAGRAM_URL: &str = "https://instagram.com/p/x";

/// Router wired to a disconnected store; needs no database.
pub fn offline_router() -> Router {
    build_router(AppState {
        config: PolaroidConfig::default(),
        store: DocumentStore::disconnected(),
    })
}

/// Router whose store is configured but points at a closed port, so every
/// store call fails after a one second server selection timeout.
pub async fn unreachable_router() -> Router {
    let mut config = PolaroidConfig::default();
    config.store.url = Some("mongodb://127.0.0.1:1".to_string());
    config.store.database = Some("polaroid_unreachable".to_string());
    config.store.server_selection_timeout_secs = 1;

    let store = DocumentStore::connect(&config.store).await;
    assert!(store.is_available(), "client should build without a server");

    build_router(AppState { config, store })
}

pub async fn send(app: Router, request: Request<Body>) -> (u16, serde_json::Value) {
    let response: Response = app.oneshot(request).await.expect("request failed");
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse JSON")
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// A running server backed by a throwaway database on the local MongoDB.
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: DocumentStore,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("polaroid_test_{}", Uuid::new_v4().simple());

        let mut config = PolaroidConfig::default();
        config.common.port = 0; // Random port for testing
        config.store.url = Some(TEST_MONGODB_URL.to_string());
        config.store.database = Some(db_name.clone());

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            store,
            db_name,
        }
    }

    pub async fn share(&self, image_data: &str, instagram_url: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/polaroid/share", self.address))
            .json(&serde_json::json!({
                "image_data": image_data,
                "instagram_url": instagram_url,
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn list(&self, limit: Option<i64>) -> serde_json::Value {
        let url = match limit {
            Some(limit) => format!("{}/api/polaroid/public?limit={}", self.address, limit),
            None => format!("{}/api/polaroid/public", self.address),
        };
        let response = reqwest::get(url).await.expect("Failed to execute request");
        assert!(response.status().is_success());
        response.json().await.expect("Failed to parse JSON")
    }

    /// Drop the test database.
    pub async fn cleanup(&self) {
        if let Some(db) = self.store.database() {
            let _ = db.drop(None).await;
        }
    }
}

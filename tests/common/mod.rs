#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use tasky::{
    AppState,
    config::{
        Config, DatabaseConfig, ObservabilityConfig, ServerConfig, SiteConfig, StoreConfig,
    },
};
use tasky_carousel::CarouselSettings;
use tasky_contact::MemoryStore;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        store: StoreConfig::default(),
        observability: ObservabilityConfig::default(),
        carousel: CarouselSettings::default(),
        site: SiteConfig::default(),
    }
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(test_config())
}

pub fn create_test_app_with(config: Config) -> TestApp {
    let store = Arc::new(MemoryStore::new());

    let state = AppState {
        config,
        store: store.clone(),
        pool: None,
    };

    TestApp {
        router: tasky::cli::app(state),
        store,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        let body = serde_urlencoded::to_string(fields).unwrap();

        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

//! Router setup and request helpers shared by the integration tests.

#![allow(dead_code)]

use adesao::config::{Config, ContactConfig, ObservabilityConfig, ServerConfig};
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        contact: ContactConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    adesao::app(test_config())
}

pub async fn get(router: &Router, uri: &str) -> anyhow::Result<TestResponse> {
    let request = Request::builder().uri(uri).body(Body::empty())?;

    send(router, request).await
}

pub async fn post_form(
    router: &Router,
    uri: &str,
    fields: &[(&str, &str)],
) -> anyhow::Result<TestResponse> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(serde_urlencoded::to_string(fields)?))?;

    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> anyhow::Result<TestResponse> {
    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

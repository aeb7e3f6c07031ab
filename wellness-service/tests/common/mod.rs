use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;
use wellness_service::services::providers::mock::MockTextProvider;
use wellness_service::services::SubstringCrisisPolicy;
use wellness_service::startup::{build_router, AppState};

pub struct TestApp {
    pub router: Router,
    pub provider: Arc<MockTextProvider>,
}

impl TestApp {
    pub fn with_provider(provider: MockTextProvider) -> Self {
        let provider = Arc::new(provider);
        let state = AppState::new(
            provider.clone(),
            Arc::new(SubstringCrisisPolicy::default()),
        );

        TestApp {
            router: build_router(state, &["*".to_string()]),
            provider,
        }
    }

    pub fn replying(reply: &str) -> Self {
        Self::with_provider(MockTextProvider::replying(reply))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_provider(MockTextProvider::failing(message))
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// POST `body` as-is, with no `Content-Type` header.
    pub async fn post_untyped(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }
}

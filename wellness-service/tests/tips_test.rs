mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;

fn default_tips() -> serde_json::Value {
    json!({
        "mindfulness": "Take a deep breath and pause.",
        "journaling": "Write one thing you are grateful for.",
        "exercise": "Stretch your arms overhead for 10 seconds.",
        "affirmation": "You are strong and capable."
    })
}

#[tokio::test]
async fn provider_failure_returns_exact_defaults() {
    let app = TestApp::failing("boom");

    let (status, response) = app.get_json("/api/tips").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response, default_tips());
    assert!(response.get("error").is_none());
}

#[tokio::test]
async fn unparseable_reply_returns_defaults() {
    let app = TestApp::replying("Here are some tips: breathe, write, stretch!");

    let (_, response) = app.get_json("/api/tips").await;

    assert_eq!(response, default_tips());
}

#[tokio::test]
async fn provider_json_is_used_and_gaps_are_filled() {
    let app = TestApp::replying(
        r#"{"mindfulness":"Notice five things you can see.","affirmation":"You are enough."}"#,
    );

    let (_, response) = app.get_json("/api/tips").await;

    assert_eq!(
        response,
        json!({
            "mindfulness": "Notice five things you can see.",
            "journaling": "Write one thing you are grateful for.",
            "exercise": "Stretch your arms overhead for 10 seconds.",
            "affirmation": "You are enough."
        })
    );
}

#[tokio::test]
async fn tips_request_asks_for_json() {
    let app = TestApp::replying("{}");

    app.get_json("/api/tips").await;

    let requests = app.provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].parts.len(), 2);
    assert!(requests[0].params.json_output);
}

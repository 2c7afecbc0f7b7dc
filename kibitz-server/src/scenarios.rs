#![cfg(test)]

use axum::http::{self, StatusCode};
use kibitz_api::Time;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{fuzz::*, *};

async fn send(app: &mut Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, body) = call(app, json_request(method, uri, body.as_ref())).await;
    let body = serde_json::from_slice(&body)
        .unwrap_or_else(|err| panic!("response body is not json ({err}): {body:?}"));
    (status, body)
}

fn new_app() -> Router {
    app(SharedStore::new())
}

#[tokio::test]
async fn post_comment_defaults() {
    let mut app = new_app();
    let (status, body) = send(&mut app, "POST", "/api/comments", Some(json!({ "text": "hello" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let timestamp = body["timestamp"].as_str().expect("timestamp is a string");
    assert!(timestamp.parse::<Time>().is_ok(), "bad timestamp {timestamp}");
    assert_eq!(
        body,
        json!({
            "id": 1,
            "text": "hello",
            "username": "Anonymous",
            "likes": 0,
            "likedBy": [],
            "replies": [],
            "timestamp": timestamp,
        })
    );

    let (status, body) = send(
        &mut app,
        "POST",
        "/api/comments",
        Some(json!({ "text": "again", "username": "ada" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 2);
    assert_eq!(body["username"], "ada");
}

#[tokio::test]
async fn blank_comment_is_rejected() {
    let mut app = new_app();
    let (status, body) = send(&mut app, "POST", "/api/comments", Some(json!({ "text": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Comment text is required" }));

    let (status, body) = send(&mut app, "POST", "/api/comments", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Comment text is required" }));

    let (_, list) = send(&mut app, "GET", "/api/comments", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let mut app = new_app();
    let req = json_request("POST", "/api/comments", None);
    let (parts, _) = req.into_parts();
    let req = http::Request::from_parts(parts, axum::body::Body::from("{ not json"));
    let (status, body) = call(&mut app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        serde_json::from_slice::<Value>(&body).unwrap(),
        json!({ "error": "Malformed request body" })
    );
}

#[tokio::test]
async fn like_toggles() {
    let mut app = new_app();
    send(&mut app, "POST", "/api/comments", Some(json!({ "text": "hello" }))).await;

    let like = Some(json!({ "visitorId": "v1" }));
    let (status, body) = send(&mut app, "POST", "/api/comments/1/like", like.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLiked"], true);
    assert_eq!(body["likes"], 1);
    assert_eq!(body["likedBy"], json!(["v1"]));
    assert_eq!(body["text"], "hello");

    let (status, body) = send(&mut app, "POST", "/api/comments/1/like", like).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLiked"], false);
    assert_eq!(body["likes"], 0);
    assert_eq!(body["likedBy"], json!([]));
}

#[tokio::test]
async fn like_needs_visitor() {
    let mut app = new_app();
    send(&mut app, "POST", "/api/comments", Some(json!({ "text": "hello" }))).await;

    let (status, body) = send(&mut app, "POST", "/api/comments/1/like", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Visitor ID is required" }));

    // validation comes before the lookup
    let (status, body) = send(&mut app, "POST", "/api/comments/999/like", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Visitor ID is required" }));

    let (status, body) = send(
        &mut app,
        "POST",
        "/api/comments/999/like",
        Some(json!({ "visitorId": "v1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Comment not found" }));
}

#[tokio::test]
async fn reply_to_unknown_comment() {
    let mut app = new_app();
    let (status, body) = send(&mut app, "POST", "/api/comments/999/reply", Some(json!({ "text": "hi" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Comment not found" }));

    let (status, body) = send(&mut app, "POST", "/api/comments/abc/reply", Some(json!({ "text": "hi" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Comment not found" }));
}

#[tokio::test]
async fn replies_and_mentions() {
    let mut app = new_app();
    send(&mut app, "POST", "/api/comments", Some(json!({ "text": "root", "username": "ada" }))).await;

    let (status, body) = send(&mut app, "POST", "/api/comments/1/reply", Some(json!({ "text": " " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Reply text is required" }));

    let (status, first) = send(
        &mut app,
        "POST",
        "/api/comments/1/reply",
        Some(json!({ "text": "hi", "username": "bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["id"], 1);
    assert_eq!(first["replyToUser"], Value::Null);
    assert_eq!(first["likes"], 0);

    let (_, second) = send(
        &mut app,
        "POST",
        "/api/comments/1/reply",
        Some(json!({ "text": "hey bob", "replyToUser": "bob" })),
    )
    .await;
    assert_eq!(second["id"], 2);
    assert_eq!(second["username"], "Anonymous");
    assert_eq!(second["replyToUser"], "bob");

    let (status, list) = send(&mut app, "GET", "/api/comments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["replies"], json!([first, second]));
}

#[tokio::test]
async fn reply_likes() {
    let mut app = new_app();
    send(&mut app, "POST", "/api/comments", Some(json!({ "text": "root" }))).await;
    send(&mut app, "POST", "/api/comments/1/reply", Some(json!({ "text": "hi" }))).await;
    let like = Some(json!({ "visitorId": "v1" }));

    let (status, body) = send(&mut app, "POST", "/api/comments/1/reply/1/like", like.clone()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isLiked"], true);
    assert_eq!(body["likes"], 1);
    assert_eq!(body["text"], "hi");

    let (status, body) = send(&mut app, "POST", "/api/comments/1/reply/2/like", like.clone()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Reply not found" }));

    let (status, body) = send(&mut app, "POST", "/api/comments/2/reply/1/like", like).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Comment not found" }));

    let (_, list) = send(&mut app, "GET", "/api/comments", None).await;
    assert_eq!(list[0]["likes"], 0);
    assert_eq!(list[0]["replies"][0]["likes"], 1);
}

#[tokio::test]
async fn root_and_fallback() {
    let mut app = new_app();
    let (status, body) = send(&mut app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Server is running", "endpoints": ["/api/comments"] })
    );

    let (status, body) = send(&mut app, "GET", "/api/nothing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = new_app();
    let req = http::Request::builder()
        .method("GET")
        .uri("/api/comments")
        .header(http::header::ORIGIN, "http://example.org")
        .body(axum::body::Body::empty())
        .expect("building request");
    let resp = app.oneshot(req).await.expect("running request");
    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn wrong_method_is_not_found() {
    let mut app = new_app();
    send(&mut app, "POST", "/api/comments", Some(json!({ "text": "hello" }))).await;
    send(&mut app, "POST", "/api/comments/1/reply", Some(json!({ "text": "hi" }))).await;

    for (method, uri) in [
        ("DELETE", "/api/comments"),
        ("PUT", "/"),
        ("GET", "/api/comments/1/like"),
        ("GET", "/api/comments/1/reply"),
        ("PATCH", "/api/comments/1/reply/1/like"),
    ] {
        let (status, body) = send(&mut app, method, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(body, json!({ "error": "Not found" }), "{method} {uri}");
    }

    // nothing was touched
    let (_, list) = send(&mut app, "GET", "/api/comments", None).await;
    assert_eq!(list[0]["likes"], 0);
    assert_eq!(list[0]["replies"][0]["likes"], 0);
}

#[tokio::test]
async fn trailing_slash_lists_comments() {
    let mut app = new_app();
    let (status, _) = send(&mut app, "POST", "/api/comments/", Some(json!({ "text": "hello" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, list) = send(&mut app, "GET", "/api/comments/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["text"], "hello");
}

#[tokio::test]
async fn array_body_has_no_fields() {
    let mut app = new_app();
    let (status, body) = send(&mut app, "POST", "/api/comments", Some(json!(["hello", "bob"]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Comment text is required" }));

    let (status, body) = send(&mut app, "POST", "/api/comments", Some(json!("hello"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Malformed request body" }));

    let (_, list) = send(&mut app, "GET", "/api/comments", None).await;
    assert_eq!(list, json!([]));
}

async fn explode() -> &'static str {
    panic!("exploding on purpose")
}

#[tokio::test]
async fn panics_become_internal_errors() {
    let app = with_layers(Router::new().route("/explode", axum::routing::get(explode)));
    let req = http::Request::builder()
        .method("GET")
        .uri("/explode")
        .header(http::header::ORIGIN, "http://example.org")
        .body(axum::body::Body::empty())
        .expect("building request");
    let resp = app.oneshot(req).await.expect("running request");
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        resp.headers()
            .get(http::header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body = hyper::body::to_bytes(resp.into_body())
        .await
        .expect("recovering resp bytes");
    let body: Value = serde_json::from_slice(&body).expect("error body is json");
    let msg = body["error"].as_str().expect("error message is a string");
    assert!(msg.starts_with("Internal server error"), "unexpected error {msg}");
    assert!(msg.contains("exploding on purpose"), "panic message lost: {msg}");
    assert_eq!(body.as_object().map(|o| o.len()), Some(1));
}

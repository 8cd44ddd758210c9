#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;
use trivia_api::server::app::build_app;

pub async fn send(pool: &SqlitePool, request: Request<Body>) -> Response<Body> {
    build_app(pool.clone())
        .oneshot(request)
        .await
        .expect("Router is infallible")
}

pub async fn get(pool: &SqlitePool, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(pool, request).await
}

pub async fn delete(pool: &SqlitePool, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(pool, request).await
}

pub async fn post_json(pool: &SqlitePool, uri: &str, json: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(pool, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub async fn question_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn scrooge_question() -> serde_json::Value {
    serde_json::json!({
        "question": "Who played the role of Scrooge in A Muppet's Christmas Carol?",
        "answer": "Michael Caine",
        "difficulty": 3,
        "category": 5,
    })
}

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use myworld_agent::{fallback_comments, GeminiClient, ValidationComment, ValidationGenerator};

#[derive(Clone)]
enum Reply {
    Comments(Value),
    RawText(String),
    Status(StatusCode),
    NoCandidates,
}

#[derive(Default)]
struct Seen {
    calls: Vec<(String, Option<String>, Value)>,
}

#[derive(Clone)]
struct FakeService {
    reply: Reply,
    seen: Arc<Mutex<Seen>>,
}

async fn generate_content(
    State(service): State<FakeService>,
    Path(call): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    service.seen.lock().unwrap().calls.push((call, key, body));

    let text = match service.reply {
        Reply::Comments(value) => value.to_string(),
        Reply::RawText(text) => text,
        Reply::Status(status) => return Err(status),
        Reply::NoCandidates => return Ok(Json(json!({ "candidates": [] }))),
    };
    Ok(Json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })))
}

struct TestServer {
    base_url: String,
    seen: Arc<Mutex<Seen>>,
    server: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn start(reply: Reply) -> Self {
        let seen = Arc::new(Mutex::new(Seen::default()));
        let app = Router::new()
            .route("/v1beta/models/:call", post(generate_content))
            .with_state(FakeService {
                reply,
                seen: seen.clone(),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
            server,
        }
    }

    fn generator(&self) -> ValidationGenerator {
        ValidationGenerator::new(Arc::new(GeminiClient::new(
            self.base_url.clone(),
            "test-key".into(),
            "gemini-test".into(),
        )))
    }

    fn shutdown(self) {
        self.server.abort();
    }
}

#[tokio::test]
async fn comments_come_back_in_service_order() {
    let server = TestServer::start(Reply::Comments(json!([
        { "authorName": "Sam", "content": "Lovely." },
        { "authorName": "Maya", "content": "Needed this today." },
        { "authorName": "Jo", "content": "Proud of you." }
    ])))
    .await;

    let comments = server
        .generator()
        .generate("Quiet morning, grateful for small things.")
        .await;

    assert_eq!(
        comments,
        vec![
            ValidationComment::new("Sam", "Lovely."),
            ValidationComment::new("Maya", "Needed this today."),
            ValidationComment::new("Jo", "Proud of you."),
        ]
    );
    server.shutdown();
}

#[tokio::test]
async fn request_carries_prompt_schema_and_credential() {
    let server = TestServer::start(Reply::Comments(json!([
        { "authorName": "Sam", "content": "Lovely." }
    ])))
    .await;

    server.generator().generate("Long walk by the river").await;

    let seen = server.seen.lock().unwrap();
    assert_eq!(seen.calls.len(), 1);
    let (call, key, body) = &seen.calls[0];
    assert_eq!(call, "gemini-test:generateContent");
    assert_eq!(key.as_deref(), Some("test-key"));

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().expect("prompt");
    assert!(prompt.contains("\"Long walk by the river\""));

    let config = &body["generationConfig"];
    assert_eq!(config["responseMimeType"], "application/json");
    assert_eq!(config["responseSchema"]["type"], "ARRAY");
    assert_eq!(
        config["responseSchema"]["items"]["required"],
        json!(["authorName", "content"])
    );
    drop(seen);
    server.shutdown();
}

#[tokio::test]
async fn server_error_falls_back() {
    let server = TestServer::start(Reply::Status(StatusCode::TOO_MANY_REQUESTS)).await;
    assert_eq!(server.generator().generate("hi").await, fallback_comments());
    server.shutdown();
}

#[tokio::test]
async fn unparsable_text_falls_back() {
    let server = TestServer::start(Reply::RawText("Sure! Here are some comments:".into())).await;
    assert_eq!(server.generator().generate("hi").await, fallback_comments());
    server.shutdown();
}

#[tokio::test]
async fn wrong_shape_falls_back() {
    let server = TestServer::start(Reply::Comments(json!([{ "name": "Sam", "text": "hi" }]))).await;
    assert_eq!(server.generator().generate("hi").await, fallback_comments());
    server.shutdown();
}

#[tokio::test]
async fn empty_candidates_fall_back() {
    let server = TestServer::start(Reply::NoCandidates).await;
    assert_eq!(server.generator().generate("hi").await, fallback_comments());
    server.shutdown();
}

#[tokio::test]
async fn unreachable_service_falls_back() {
    let server = TestServer::start(Reply::NoCandidates).await;
    let base_url = server.base_url.clone();
    server.shutdown();
    // Give the aborted listener a moment to close.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;

    let generator = ValidationGenerator::new(Arc::new(GeminiClient::new(
        base_url,
        "test-key".into(),
        "gemini-test".into(),
    )));
    assert_eq!(generator.generate("hi").await, fallback_comments());
}

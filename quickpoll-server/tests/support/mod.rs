#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use quickpoll_app::infrastructure::config::ServerConfig;
use quickpoll_app::AppContext;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body>quickpoll entry</body></html>";
pub const APP_JS: &str = "console.log('quickpoll');";

/// A UI bundle on disk with an entry document and one asset.
pub fn static_bundle() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::create_dir(dir.path().join("assets")).unwrap();
    std::fs::write(dir.path().join("assets").join("app.js"), APP_JS).unwrap();
    dir
}

pub fn context(bundle: &TempDir, backend: Option<SocketAddr>) -> AppContext {
    let config = ServerConfig::from_vars(None, backend.map(|addr| format!("http://{addr}")))
        .unwrap()
        .with_static_dir(bundle.path());
    AppContext::new(config).unwrap()
}

pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Backend that reports back what it received.
pub async fn spawn_echo_backend() -> SocketAddr {
    async fn echo(request: Request) -> impl IntoResponse {
        let (parts, body) = request.into_parts();
        let body: Bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let host = parts
            .headers
            .get("host")
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::CREATED,
            [("x-backend", "echo")],
            Json(json!({
                "method": parts.method.as_str(),
                "path": parts.uri.path(),
                "query": parts.uri.query(),
                "host": host,
                "body": String::from_utf8_lossy(&body),
                "body_len": body.len(),
            })),
        )
    }

    serve(Router::new().fallback(echo)).await
}

#[derive(Default)]
pub struct PollStore {
    pub polls: Vec<Value>,
    pub votes: Vec<(i64, String)>,
}

/// Minimal stand-in for the polls backend.
pub async fn spawn_polls_backend(store: Arc<Mutex<PollStore>>) -> SocketAddr {
    async fn list(State(store): State<Arc<Mutex<PollStore>>>) -> Json<Value> {
        Json(Value::Array(store.lock().unwrap().polls.clone()))
    }

    async fn create(
        State(store): State<Arc<Mutex<PollStore>>>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let mut store = store.lock().unwrap();
        let id = store.polls.len() as i64 + 1;
        store.polls.insert(
            0,
            json!({
                "id": id,
                "question_text": body["question"],
                "created_at": "2024-05-01T09:30:00",
                "options": body["options"],
            }),
        );
        Json(json!({ "id": id }))
    }

    async fn vote(
        State(store): State<Arc<Mutex<PollStore>>>,
        Path(id): Path<i64>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        let option = body["option"].as_str().unwrap_or_default().to_string();
        store.lock().unwrap().votes.push((id, option));
        Json(json!({ "message": "Vote cast" }))
    }

    async fn results(
        State(store): State<Arc<Mutex<PollStore>>>,
        Path(id): Path<i64>,
    ) -> Json<Value> {
        let store = store.lock().unwrap();
        let Some(poll) = store.polls.iter().find(|p| p["id"] == json!(id)) else {
            return Json(json!([]));
        };
        let results: Vec<Value> = poll["options"]
            .as_array()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|option| {
                let text = option.as_str().unwrap_or_default().to_string();
                let count = store
                    .votes
                    .iter()
                    .filter(|(poll_id, voted)| *poll_id == id && *voted == text)
                    .count();
                json!({ "option_text": text, "vote_count": count })
            })
            .collect();
        Json(Value::Array(results))
    }

    let app = Router::new()
        .route("/api/polls", get(list).post(create))
        .route("/api/polls/{id}/vote", post(vote))
        .route("/api/polls/{id}/results", get(results))
        .with_state(store);
    serve(app).await
}

//! Mock joke API for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Response, StatusCode};
use axum::routing::post;
use axum::Router;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

struct MockState {
    status: StatusCode,
    body: String,
    requests: Mutex<Vec<Value>>,
}

/// Serves one canned response on `POST /chatgpt` and records request bodies.
pub struct MockJokeServer {
    pub addr: SocketAddr,
    state: Arc<MockState>,
}

impl MockJokeServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status).expect("valid status"),
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/chatgpt", post(handle))
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, state }
    }

    /// JSON success body in the shape the real API returns.
    pub async fn joke(text: &str) -> Self {
        let body = serde_json::json!({ "response": text }).to_string();
        Self::start(200, &body).await
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/chatgpt", self.addr)
    }

    pub async fn requests(&self) -> Vec<Value> {
        self.state.requests.lock().await.clone()
    }
}

async fn handle(State(state): State<Arc<MockState>>, body: Bytes) -> Response<Body> {
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().await.push(json);

    Response::builder()
        .status(state.status)
        .header("content-type", "application/json")
        .body(Body::from(state.body.clone()))
        .expect("valid response")
}

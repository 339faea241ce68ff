//! Mock prayer-schedule host for testing
//!
//! Serves canned bodies by path and records every request path it sees.

#![allow(dead_code)]

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Canned reply for one path
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl MockReply {
    pub fn json(body: &Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.to_string(),
            delay: Duration::ZERO,
        }
    }

    pub fn status(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock server state
struct MockAdzanState {
    replies: HashMap<String, MockReply>,
    requests: Vec<String>,
}

/// Mock schedule host
pub struct MockAdzanServer {
    addr: SocketAddr,
    state: Arc<RwLock<MockAdzanState>>,
    handle: JoinHandle<()>,
}

impl MockAdzanServer {
    /// Start a mock server on a random port
    pub async fn start() -> Self {
        let state = Arc::new(RwLock::new(MockAdzanState {
            replies: HashMap::new(),
            requests: Vec::new(),
        }));

        let app = Router::new()
            .fallback(handle_request)
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            state,
            handle,
        }
    }

    /// Base URL to point the fetcher at
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Serve `reply` for `path`
    pub async fn set_reply(&self, path: &str, reply: MockReply) {
        let mut state = self.state.write().await;
        state.replies.insert(path.to_string(), reply);
    }

    /// Paths requested so far, in order
    pub async fn requests(&self) -> Vec<String> {
        self.state.read().await.requests.clone()
    }

    /// Stop the mock server
    pub async fn stop(self) {
        self.handle.abort();
    }
}

async fn handle_request(
    State(state): State<Arc<RwLock<MockAdzanState>>>,
    uri: Uri,
) -> impl IntoResponse {
    let path = uri.path().to_string();
    let reply = {
        let mut state = state.write().await;
        state.requests.push(path.clone());
        state.replies.get(&path).cloned()
    };

    match reply {
        Some(reply) => {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            (reply.status, reply.body).into_response()
        }
        None => (StatusCode::NOT_FOUND, "not found".to_string()).into_response(),
    }
}

/// A month of the newer schema with every time set to `stamp` and `isya` marked per day
pub fn month_body(year: i32, month: u32, days: u32, stamp: &str) -> Value {
    let entries: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "tanggal": format!("{year}-{month:02}-{day:02}"),
                "imsyak": stamp,
                "shubuh": stamp,
                "terbit": stamp,
                "dhuha": stamp,
                "dzuhur": stamp,
                "ashr": stamp,
                "magrib": stamp,
                "isya": format!("19:{day:02}"),
            })
        })
        .collect();
    Value::Array(entries)
}

/// A single-day body of the legacy schema
pub fn legacy_body(subuh: &str) -> Value {
    json!({
        "status": "ok",
        "data": {
            "id": "1606",
            "lokasi": "KAB. GRESIK",
            "jadwal": {
                "tanggal": "Sabtu, 02/03/2024",
                "imsak": "04:06",
                "subuh": subuh,
                "terbit": "05:27",
                "dhuha": "05:55",
                "dzuhur": "11:49",
                "ashar": "15:04",
                "maghrib": "17:57",
                "isya": "19:06",
            }
        }
    })
}

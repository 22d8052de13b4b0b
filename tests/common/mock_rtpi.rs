//! Mock RTPI server for testing the HTTP client.

#![allow(dead_code)]

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Clone)]
struct MockState {
    status: u16,
    body: String,
    queries: Arc<Mutex<Vec<String>>>,
}

/// Serves a fixed response on `/routeinformation`.
pub struct MockRtpi {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockRtpi {
    /// Start a server answering every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status,
            body: body.to_string(),
            queries: queries.clone(),
        };

        let app = Router::new()
            .route("/routeinformation", get(handle))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            queries,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw query strings of the requests received so far.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

impl Drop for MockRtpi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, [(&'static str, &'static str); 1], String) {
    state.queries.lock().await.push(query.unwrap_or_default());
    let status = StatusCode::from_u16(state.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [("content-type", "application/json")], state.body.clone())
}

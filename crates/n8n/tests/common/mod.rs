//! In-process stand-in for the n8n workflow endpoints.

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::routing::{get, put};
use axum::Router;

/// A request as seen by the mock server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub api_key: Option<String>,
    pub body: String,
}

/// Canned responses plus a log of received requests.
#[derive(Clone)]
pub struct MockN8n {
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    update_response: (StatusCode, String),
    list_response: (StatusCode, String),
}

type JsonReply = (StatusCode, [(axum::http::HeaderName, &'static str); 1], String);

impl MockN8n {
    pub fn new() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            update_response: (StatusCode::OK, "{}".to_string()),
            list_response: (StatusCode::OK, r#"{"data":[]}"#.to_string()),
        }
    }

    pub fn on_update(mut self, status: StatusCode, body: serde_json::Value) -> Self {
        self.update_response = (status, body.to_string());
        self
    }

    pub fn on_update_raw(mut self, status: StatusCode, body: &str) -> Self {
        self.update_response = (status, body.to_string());
        self
    }

    pub fn on_list(mut self, status: StatusCode, body: serde_json::Value) -> Self {
        self.list_response = (status, body.to_string());
        self
    }

    pub fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Bind to an ephemeral port and serve in the background.
    ///
    /// Returns the base URL, e.g. `http://127.0.0.1:49152`.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/api/v1/workflows", get(list_workflows))
            .route("/api/v1/workflows/{id}", put(update_workflow))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn record(&self, method: Method, path: String, headers: &HeaderMap, body: String) {
        let api_key = headers
            .get("x-n8n-api-key")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path,
            api_key,
            body,
        });
    }
}

fn reply((status, body): (StatusCode, String)) -> JsonReply {
    (status, [(CONTENT_TYPE, "application/json")], body)
}

async fn update_workflow(
    State(mock): State<MockN8n>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> JsonReply {
    mock.record(Method::PUT, format!("/api/v1/workflows/{id}"), &headers, body);
    reply(mock.update_response.clone())
}

async fn list_workflows(State(mock): State<MockN8n>, headers: HeaderMap) -> JsonReply {
    mock.record(
        Method::GET,
        "/api/v1/workflows".to_string(),
        &headers,
        String::new(),
    );
    reply(mock.list_response.clone())
}

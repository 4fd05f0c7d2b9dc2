//! In-process stand-in for the chat completions endpoint, used by tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::{json, Value};

use crate::config::LlmConfig;

/// What the mock answers to every request.
#[derive(Debug, Clone)]
pub struct MockReply {
    status: u16,
    body: String,
}

impl MockReply {
    /// A 200 envelope whose first choice carries `content` verbatim.
    pub fn content(content: &str) -> Self {
        let body = json!({
            "id": "chatcmpl-mock",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 480, "total_tokens": 600}
        });
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn json_content(value: &Value) -> Self {
        Self::content(&value.to_string())
    }

    /// A raw response with an arbitrary status and body.
    pub fn status(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

impl CapturedRequest {
    /// Content of the message with the given role.
    pub fn message(&self, role: &str) -> String {
        self.body["messages"]
            .as_array()
            .and_then(|messages| messages.iter().find(|m| m["role"] == role))
            .and_then(|m| m["content"].as_str())
            .unwrap_or_default()
            .to_string()
    }
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockUpstream {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub async fn start(reply: MockReply) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/v1/chat/completions", post(handle_completion))
            .with_state(MockState {
                reply,
                requests: requests.clone(),
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, requests }
    }

    /// Client settings pointing at this mock.
    pub fn config(&self, api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: api_key.map(String::from),
            base_url: format!("http://{}/v1", self.addr),
            timeout_secs: 5,
            ..LlmConfig::default()
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<CapturedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

async fn handle_completion(
    State(state): State<MockState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    state
        .requests
        .lock()
        .unwrap()
        .push(CapturedRequest {
            authorization,
            body,
        });

    let status = StatusCode::from_u16(state.reply.status).unwrap();
    (status, state.reply.body.clone()).into_response()
}

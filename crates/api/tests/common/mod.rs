#![allow(dead_code)]

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use roomcraft_core::data_url::InlineImage;
use roomcraft_core::error::CoreError;
use roomcraft_core::generation::{Candidate, CandidateReply, DesignGenerator, ReplyPart};
use roomcraft_core::types::DbId;
use roomcraft_db::models::api_usage::{CreateApiUsage, EndpointStats};
use roomcraft_db::models::design_history::{CreateDesignHistory, DesignSummary};
use roomcraft_db::models::feedback::CreateFeedback;
use roomcraft_db::Store;
use serde_json::Value;
use tower::ServiceExt;

use roomcraft_api::config::{
    CorsOrigins, GeminiSettings, ServerConfig, DEFAULT_BODY_LIMIT_BYTES,
};
use roomcraft_api::router::build_app_router;
use roomcraft_api::state::AppState;

// ---------------------------------------------------------------------------
// Config / app
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: CorsOrigins::List(vec!["http://localhost:5173".parse().unwrap()]),
        body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        serve_frontend: false,
        frontend_dir: PathBuf::from("../frontend/build"),
        database_url: String::new(),
        gemini: GeminiSettings {
            api_key: Some("test-key".into()),
            model: "test-model".into(),
            api_base: "http://127.0.0.1:9".into(),
        },
    }
}

/// Build the production router around the given collaborators.
pub fn build_test_app(
    generator: Option<Arc<FakeGenerator>>,
    store: Option<Arc<MemoryStore>>,
) -> Router {
    build_test_app_with_config(test_config(), generator, store)
}

pub fn build_test_app_with_config(
    config: ServerConfig,
    generator: Option<Arc<FakeGenerator>>,
    store: Option<Arc<MemoryStore>>,
) -> Router {
    let state = AppState {
        config: Arc::new(config),
        generator: generator.map(|g| g as Arc<dyn DesignGenerator>),
        store: store.map(|s| s as Arc<dyn Store>),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request and return the status with the body parsed as JSON
/// (`Value::Null` when the body is empty or not JSON). The body is fully
/// consumed, which completes the response.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, json_request(uri, body)).await
}

/// POST request with a JSON body, a user agent, and a peer address.
pub fn json_request(uri: &str, body: Value) -> Request<Body> {
    let mut request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", "roomcraft-tests/1.0")
        .body(Body::from(body.to_string()))
        .unwrap();
    request
        .extensions_mut()
        .insert(ConnectInfo(SocketAddr::from(([10, 0, 0, 7], 40000))));
    request
}

/// POST request with a raw body and an optional content type.
pub fn raw_request(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("user-agent", "roomcraft-tests/1.0");
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

// ---------------------------------------------------------------------------
// Fake generator
// ---------------------------------------------------------------------------

/// Generator double that counts calls and returns a canned outcome.
pub struct FakeGenerator {
    calls: AtomicUsize,
    last_instruction: Mutex<Option<String>>,
    outcome: Result<CandidateReply, String>,
}

impl FakeGenerator {
    pub fn replying(parts: Vec<ReplyPart>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_instruction: Mutex::new(None),
            outcome: Ok(CandidateReply {
                candidates: vec![Candidate { parts }],
            }),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_instruction: Mutex::new(None),
            outcome: Err(message.to_string()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_instruction(&self) -> Option<String> {
        self.last_instruction.lock().unwrap().clone()
    }
}

#[async_trait]
impl DesignGenerator for FakeGenerator {
    async fn generate(
        &self,
        instruction: &str,
        _image: &InlineImage,
    ) -> Result<CandidateReply, CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_instruction.lock().unwrap() = Some(instruction.to_string());
        self.outcome.clone().map_err(CoreError::Generation)
    }
}

pub fn text(s: &str) -> ReplyPart {
    ReplyPart::Text(s.to_string())
}

pub fn image(mime: &str, data: &str) -> ReplyPart {
    ReplyPart::Image {
        mime_type: mime.to_string(),
        data: data.to_string(),
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Store double keeping rows in memory. [`MemoryStore::failing`] simulates an
/// outage: every call returns a pool timeout.
#[derive(Default)]
pub struct MemoryStore {
    failing: AtomicBool,
    designs: Mutex<Vec<CreateDesignHistory>>,
    feedback: Mutex<Vec<CreateFeedback>>,
    usage: Mutex<Vec<CreateApiUsage>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    pub fn designs(&self) -> Vec<CreateDesignHistory> {
        self.designs.lock().unwrap().clone()
    }

    pub fn feedback(&self) -> Vec<CreateFeedback> {
        self.feedback.lock().unwrap().clone()
    }

    pub fn usage(&self) -> Vec<CreateApiUsage> {
        self.usage.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        if self.failing.load(Ordering::SeqCst) {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_design(&self, input: &CreateDesignHistory) -> Result<DbId, sqlx::Error> {
        self.check()?;
        let mut designs = self.designs.lock().unwrap();
        designs.push(input.clone());
        Ok(designs.len() as DbId)
    }

    async fn insert_feedback(&self, input: &CreateFeedback) -> Result<DbId, sqlx::Error> {
        self.check()?;
        let mut feedback = self.feedback.lock().unwrap();
        feedback.push(input.clone());
        Ok(feedback.len() as DbId)
    }

    async fn insert_usage(&self, input: &CreateApiUsage) -> Result<DbId, sqlx::Error> {
        self.check()?;
        let mut usage = self.usage.lock().unwrap();
        usage.push(input.clone());
        Ok(usage.len() as DbId)
    }

    async fn recent_designs(&self, limit: i64) -> Result<Vec<DesignSummary>, sqlx::Error> {
        self.check()?;
        let designs = self.designs.lock().unwrap();
        Ok(designs
            .iter()
            .enumerate()
            .rev()
            .take(limit as usize)
            .map(|(i, d)| DesignSummary {
                id: i as DbId + 1,
                prompt: d.prompt.clone(),
                room_type: d.room_type.clone(),
                style: d.style.clone(),
                color_scheme: d.color_scheme.clone(),
                user_agent: d.user_agent.clone(),
                ip_address: d.ip_address.clone(),
                created_at: chrono::Utc::now(),
            })
            .collect())
    }

    async fn usage_stats(&self) -> Result<Vec<EndpointStats>, sqlx::Error> {
        self.check()?;
        let mut grouped: BTreeMap<String, (i64, i64)> = BTreeMap::new();
        for row in self.usage.lock().unwrap().iter() {
            let entry = grouped.entry(row.endpoint.clone()).or_default();
            entry.0 += 1;
            entry.1 += row.response_time_ms;
        }
        Ok(grouped
            .into_iter()
            .map(|(endpoint, (count, total))| EndpointStats {
                endpoint,
                count,
                avg_response_time: total as f64 / count as f64,
            })
            .collect())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.check()
    }
}

// ---------------------------------------------------------------------------
// Waiting for detached writes
// ---------------------------------------------------------------------------

/// Poll `read` until it yields at least `n` rows or two seconds pass.
pub async fn wait_for<T>(n: usize, read: impl Fn() -> Vec<T>) -> Vec<T> {
    for _ in 0..200 {
        let rows = read();
        if rows.len() >= n {
            return rows;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    read()
}

/// Give detached tasks a moment to run, for asserting that nothing arrives.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

//! Per-request usage instrumentation.
//!
//! [`record_usage`] notes the start time and request metadata, lets the
//! request run, then wraps the response body in [`CompletionBody`]. The usage
//! row is written when that body is dropped: after hyper has flushed it to
//! the client, or when the client goes away mid-stream. Every request that
//! reaches the middleware is recorded regardless of status.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use http_body::{Frame, SizeHint};
use roomcraft_db::models::api_usage::CreateApiUsage;
use roomcraft_db::Store;

use crate::background::spawn_persist;
use crate::middleware::client::ClientMeta;
use crate::state::AppState;

/// Axum middleware recording one [`CreateApiUsage`] per request.
pub async fn record_usage(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let Some(store) = state.store.clone() else {
        return next.run(request).await;
    };

    let started = Instant::now();
    let endpoint = request.uri().path().to_string();
    let method = request.method().to_string();
    let client = ClientMeta::from_parts(request.headers(), request.extensions());

    let response = next.run(request).await;

    let guard = UsageGuard {
        store,
        started,
        endpoint,
        method,
        status_code: response.status().as_u16(),
        client,
    };

    response.map(|inner| {
        Body::new(CompletionBody {
            inner,
            _guard: guard,
        })
    })
}

/// Writes the usage record when dropped.
struct UsageGuard {
    store: Arc<dyn Store>,
    started: Instant,
    endpoint: String,
    method: String,
    status_code: u16,
    client: ClientMeta,
}

impl Drop for UsageGuard {
    fn drop(&mut self) {
        let record = CreateApiUsage {
            endpoint: std::mem::take(&mut self.endpoint),
            method: std::mem::take(&mut self.method),
            status_code: i32::from(self.status_code),
            response_time_ms: i64::try_from(self.started.elapsed().as_millis())
                .unwrap_or(i64::MAX),
            user_agent: std::mem::take(&mut self.client.user_agent),
            ip_address: std::mem::take(&mut self.client.ip_address),
        };

        let store = Arc::clone(&self.store);
        spawn_persist("api usage", async move { store.insert_usage(&record).await });
    }
}

/// Response body that carries a [`UsageGuard`] until it is dropped.
struct CompletionBody {
    inner: Body,
    _guard: UsageGuard,
}

impl http_body::Body for CompletionBody {
    type Data = Bytes;
    type Error = axum::Error;

    fn poll_frame(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        http_body::Body::poll_frame(Pin::new(&mut self.inner), cx)
    }

    fn is_end_stream(&self) -> bool {
        http_body::Body::is_end_stream(&self.inner)
    }

    fn size_hint(&self) -> SizeHint {
        http_body::Body::size_hint(&self.inner)
    }
}

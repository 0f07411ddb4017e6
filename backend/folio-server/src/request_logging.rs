//! Per-request access logging

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Request context for log correlation
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Sequence number within this server instance
    pub request_seq: u64,
    pub method: String,
    pub path: String,
    pub started_at: Instant,
}

impl RequestContext {
    pub fn new(request: &Request) -> Self {
        Self {
            request_seq: REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed),
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            started_at: Instant::now(),
        }
    }

    /// Get elapsed time since request started
    pub fn elapsed_ms(&self) -> u64 {
        self.started_at.elapsed().as_millis() as u64
    }

    pub fn log_prefix(&self) -> String {
        format!("[req={}]", self.request_seq)
    }
}

/// Logs method, path, status and latency of every request
pub async fn log_requests(request: Request, next: Next) -> Response {
    let ctx = RequestContext::new(&request);

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        warn!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            ctx.method,
            ctx.path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    } else {
        info!(
            "{} {} {} -> {} ({}ms)",
            ctx.log_prefix(),
            ctx.method,
            ctx.path,
            status.as_u16(),
            ctx.elapsed_ms()
        );
    }

    response
}

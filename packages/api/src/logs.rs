//! Best-effort shipping of client-side errors to `POST /logs`.
//!
//! Nothing here may fail or delay the caller. When the browser reports being
//! offline, or the request itself fails, the entry is written to the local
//! `tracing` output instead.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;

use crate::timeout::with_timeout;

const SEND_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

#[derive(Serialize)]
struct LogPayload<'a> {
    level: LogLevel,
    message: &'a str,
    meta: &'a serde_json::Value,
}

/// Sends log entries to the backend log sink.
#[derive(Debug, Clone)]
pub struct RemoteLogger {
    http: reqwest::Client,
    endpoint: String,
    enabled: bool,
}

impl RemoteLogger {
    pub fn new(http: reqwest::Client, endpoint: String, enabled: bool) -> Self {
        Self {
            http,
            endpoint,
            enabled,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn send(&self, level: LogLevel, message: &str, meta: serde_json::Value) {
        if !self.enabled {
            return;
        }
        if !is_online() {
            tracing::warn!("[offline {:?}] {} {}", level, message, meta);
            return;
        }

        let payload = LogPayload {
            level,
            message,
            meta: &meta,
        };
        let request = self.http.post(&self.endpoint).json(&payload).send();
        match with_timeout(SEND_TIMEOUT, request).await {
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::debug!("[log send failed] {} {}: {}", message, meta, e),
            Err(e) => tracing::debug!("[log send failed] {} {}: {}", message, meta, e),
        }
    }

    pub async fn error(&self, message: &str, meta: serde_json::Value) {
        self.send(LogLevel::Error, message, meta).await
    }

    /// Ship an error entry from a detached task and return immediately.
    pub fn spawn_error(&self, message: &str, meta: serde_json::Value) {
        if !self.enabled {
            return;
        }
        let logger = self.clone();
        let message = message.to_string();
        spawn_detached(async move { logger.error(&message, meta).await });
    }
}

#[cfg(target_arch = "wasm32")]
fn spawn_detached<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(task);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_detached<F>(task: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(task);
        }
        Err(_) => tracing::debug!("No async runtime, log entry dropped"),
    }
}

#[cfg(target_arch = "wasm32")]
fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

#[cfg(not(target_arch = "wasm32"))]
fn is_online() -> bool {
    true
}

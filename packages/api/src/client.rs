//! # HTTP client for the SiteManager backend
//!
//! [`ApiClient`] is the only place that talks HTTP. Every call goes through
//! [`ApiClient::execute`], which:
//!
//! 1. attaches `Authorization: Bearer <token>` when an access token is stored,
//! 2. bounds the whole exchange (headers and body) by the configured timeout,
//! 3. unwraps the `{ success, data, error, message }` [`Envelope`],
//! 4. on **401 for an authenticated request**, clears the stored tokens and
//!    publishes [`SessionEvent::Invalidated`], whether or not a token was sent,
//! 5. forwards failures to the backend log sink in a detached task.
//!
//! A burst of concurrent 401s publishes one event each; the session manager
//! turns them into a single sign-out.

use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use store::{SharedTokenStore, TokenStore};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::events::{SessionEvent, SessionEvents};
use crate::logs::RemoteLogger;
use crate::models::Envelope;
use crate::timeout::with_timeout;

/// Whether a request presents the stored bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Bearer,
    Anonymous,
}

/// Shared, cheaply clonable backend client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    tokens: SharedTokenStore,
    events: SessionEvents,
    logger: RemoteLogger,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client with its own event hub.
    pub fn new(config: ClientConfig, tokens: SharedTokenStore) -> Result<Self, ApiError> {
        Self::with_events(config, tokens, SessionEvents::new())
    }

    /// Create a client publishing to an existing event hub.
    pub fn with_events(
        config: ClientConfig,
        tokens: SharedTokenStore,
        events: SessionEvents,
    ) -> Result<Self, ApiError> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidConfig(format!("base_url {:?}: {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::InvalidConfig(e.to_string()))?;

        let logger = RemoteLogger::new(
            http.clone(),
            join_url(&config.base_url, "/logs"),
            config.remote_logging,
        );

        tracing::info!("Created API client for {}", config.base_url);

        Ok(Self {
            http,
            config: Arc::new(config),
            tokens,
            events,
            logger,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn tokens(&self) -> &SharedTokenStore {
        &self.tokens
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub fn logger(&self) -> &RemoteLogger {
        &self.logger
    }

    /// `GET` an authenticated endpoint and return its `data`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.execute::<T>(Method::GET, path, None, Auth::Bearer)
            .await?
            .into_data()
    }

    /// `POST` to an authenticated endpoint and return its `data`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute::<T>(Method::POST, path, Some(body), Auth::Bearer)
            .await?
            .into_data()
    }

    /// `PUT` to an authenticated endpoint and return its `data`.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute::<T>(Method::PUT, path, Some(body), Auth::Bearer)
            .await?
            .into_data()
    }

    /// `PUT` to an authenticated endpoint that answers without a payload.
    pub async fn put_ack<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = encode(body)?;
        self.execute::<IgnoredAny>(Method::PUT, path, Some(body), Auth::Bearer)
            .await?
            .into_ack()
    }

    /// `DELETE` an authenticated resource.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<IgnoredAny>(Method::DELETE, path, None, Auth::Bearer)
            .await?
            .into_ack()
    }

    /// `POST` without presenting the stored token (login, registration).
    pub(crate) async fn post_anonymous<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode(body)?;
        self.execute::<T>(Method::POST, path, Some(body), Auth::Anonymous)
            .await?
            .into_data()
    }

    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: Auth,
    ) -> Result<Envelope<T>, ApiError> {
        let url = join_url(&self.config.base_url, path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), &url);
        let bearer = match auth {
            Auth::Bearer => self.tokens.access_token(),
            Auth::Anonymous => None,
        };
        if let Some(token) = &bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let result = self.dispatch(request, auth).await;
        if let Err(e) = &result {
            tracing::error!("{} {} failed: {}", method, path, e);
            self.logger.spawn_error(
                "API error",
                serde_json::json!({
                    "url": path,
                    "method": method.as_str(),
                    "status": e.status(),
                    "message": e.to_string(),
                }),
            );
        }
        result
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        auth: Auth,
    ) -> Result<Envelope<T>, ApiError> {
        let timeout = self.config.request_timeout();
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };
        let (status, body) = with_timeout(timeout, exchange)
            .await
            .map_err(|_| ApiError::Timeout(timeout))??;

        if status == StatusCode::UNAUTHORIZED {
            if auth == Auth::Bearer {
                self.invalidate_session();
            }
            return Err(ApiError::Unauthorized {
                message: failure_reason(status, &body),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: failure_reason(status, &body),
            });
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn invalidate_session(&self) {
        if self.tokens.clear_session() {
            tracing::warn!("Stored session rejected by the backend, signing out");
        } else {
            tracing::warn!("Authenticated request rejected without a stored token");
        }
        self.events.notify(SessionEvent::Invalidated);
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Backend-supplied reason from an error body, or the canonical status text.
fn failure_reason(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<Envelope<IgnoredAny>>(body)
        .ok()
        .and_then(|env| env.reason().map(str::to_string))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        })
}

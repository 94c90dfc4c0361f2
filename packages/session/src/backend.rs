//! The seam between the session manager and the HTTP client.

use std::future::Future;

use api::{ApiClient, ApiError, AuthResponse, LoginCredentials, RegisterData, User};

/// The backend calls a session depends on.
pub trait AuthBackend {
    fn login(
        &self,
        credentials: &LoginCredentials,
    ) -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn register(&self, data: &RegisterData)
        -> impl Future<Output = Result<AuthResponse, ApiError>>;
    fn profile(&self) -> impl Future<Output = Result<User, ApiError>>;
}

impl AuthBackend for ApiClient {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        ApiClient::login(self, credentials).await
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        ApiClient::register(self, data).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        ApiClient::profile(self).await
    }
}

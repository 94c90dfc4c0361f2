//! `/auth` endpoints.
//!
//! These are thin wire calls. Persisting tokens and tracking who is signed in
//! belongs to the session manager; only the 401 handling shared by every
//! request lives in [`ApiClient`].

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, ChangePassword, LoginCredentials, RegisterData, User};

impl ApiClient {
    /// `POST /auth/login`. Sent without a bearer token, so bad credentials
    /// never look like an expired session.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.post_anonymous("/auth/login", credentials).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.post_anonymous("/auth/register", data).await
    }

    /// `GET /auth/profile` for the stored token.
    pub async fn profile(&self) -> Result<User, ApiError> {
        self.get("/auth/profile").await
    }

    /// `PUT /auth/change-password`.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = ChangePassword {
            old_password: old_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.put_ack("/auth/change-password", &body).await
    }
}

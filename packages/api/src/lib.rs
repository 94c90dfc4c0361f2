//! # API crate: HTTP contract of the SiteManager backend
//!
//! Everything the dashboard knows about the backend REST API lives here. The
//! crate compiles for both the browser (wasm32) and native targets, which is
//! what the tests run on.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: bearer auth, timeouts, envelope decoding, global 401 handling |
//! | [`auth`] | `/auth/login`, `/auth/register`, `/auth/profile`, `/auth/change-password` |
//! | [`config`] | [`ClientConfig`], loaded from TOML or baked in at build time |
//! | [`error`] | [`ApiError`] |
//! | [`events`] | [`SessionEvents`] broadcast hub carrying [`SessionEvent::Invalidated`] |
//! | [`logs`] | [`RemoteLogger`], best-effort `POST /logs` |
//! | [`models`] | Wire types: [`User`], [`UserRole`], [`AuthResponse`], [`Envelope`], ... |
//! | [`timeout`] | [`with_timeout`], a deadline that works with or without tokio |

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod logs;
pub mod models;
pub mod timeout;

pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use events::{SessionEvent, SessionEvents};
pub use logs::{LogLevel, RemoteLogger};
pub use models::{
    AuthResponse, ChangePassword, Envelope, LoginCredentials, RegisterData, User, UserRole,
};
pub use timeout::{with_timeout, Elapsed};

pub mod auth;
pub mod envelope;
pub mod user;

pub use auth::{AuthResponse, ChangePassword, LoginCredentials, RegisterData};
pub use envelope::Envelope;
pub use user::{User, UserRole};

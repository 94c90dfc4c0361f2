//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod tokens;
pub use tokens::{load_client_config, make_token_store};

mod auth;
pub use auth::{
    login_error_message, use_auth, use_session, AppSession, AuthProvider, LoginForm, LogoutButton,
};

mod sidebar;
pub use sidebar::AppSidebar;

pub mod views;
pub use views::{ChangePasswordForm, LoadingPlaceholder, ScreenPlaceholder, UnauthorizedView};

//! # Route guard
//!
//! One decision per navigation (and per [`AuthState`] change), evaluated in
//! order:
//!
//! 1. session check still running → [`GuardOutcome::Loading`]
//! 2. nobody signed in → [`GuardOutcome::RedirectToLogin`]
//! 3. screen declares roles and the user's role is not among them (a role-less
//!    user never is) → [`GuardOutcome::RedirectToUnauthorized`]
//! 4. otherwise → [`GuardOutcome::Render`]
//!
//! No other code checks roles.

use api::UserRole;

use crate::state::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Show a neutral placeholder. Do not redirect.
    Loading,
    RedirectToLogin,
    RedirectToUnauthorized,
    Render,
}

impl GuardOutcome {
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            GuardOutcome::RedirectToLogin => Some(LOGIN_PATH),
            GuardOutcome::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
            GuardOutcome::Loading | GuardOutcome::Render => None,
        }
    }
}

/// Decide whether a screen may render. `allowed_roles: None` admits any
/// signed-in user.
pub fn evaluate(state: &AuthState, allowed_roles: Option<&[UserRole]>) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Loading;
    }
    let Some(user) = &state.user else {
        return GuardOutcome::RedirectToLogin;
    };
    match (allowed_roles, user.role) {
        (None, _) => GuardOutcome::Render,
        (Some(allowed), Some(role)) if allowed.contains(&role) => GuardOutcome::Render,
        (Some(_), _) => GuardOutcome::RedirectToUnauthorized,
    }
}

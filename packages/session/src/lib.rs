//! # Session core
//!
//! Framework independent pieces of sign-in handling:
//!
//! - [`SessionManager`] owns the [`AuthState`] and performs startup restore,
//!   login, logout and forced sign-out,
//! - [`guard`] decides whether a screen may render,
//! - [`nav`] maps roles to sidebar entries,
//! - [`routes`] groups screens into protected areas.

pub mod backend;
pub mod guard;
pub mod manager;
pub mod nav;
pub mod routes;
pub mod state;

pub use backend::AuthBackend;
pub use guard::{evaluate, GuardOutcome, LOGIN_PATH, UNAUTHORIZED_PATH};
pub use manager::SessionManager;
pub use nav::{home_path, nav_items, NavIcon, NavItem};
pub use routes::{guard_path, Area};
pub use state::AuthState;

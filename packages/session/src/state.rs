use api::{User, UserRole};

/// Who is signed in, and whether that is known yet.
///
/// `loading` starts `true` and flips to `false` once, when the startup session
/// check finishes. It never goes back.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Role of the signed-in user; `None` when signed out or role-less.
    pub fn role(&self) -> Option<UserRole> {
        self.user.as_ref().and_then(|u| u.role)
    }
}

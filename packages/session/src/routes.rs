//! Protected areas of the dashboard and the roles each one admits.

use api::UserRole;

use crate::guard::{self, GuardOutcome};
use crate::state::AuthState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Area {
    SuperAdmin,
    Admin,
    Supervisor,
    SubAdmin,
    Client,
    /// Profile and password screens, open to every signed-in user.
    Account,
}

impl Area {
    pub const ALL: [Area; 6] = [
        Area::SuperAdmin,
        Area::Admin,
        Area::Supervisor,
        Area::SubAdmin,
        Area::Client,
        Area::Account,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            Area::SuperAdmin => "/super-admin",
            Area::Admin => "/admin",
            Area::Supervisor => "/supervisor",
            Area::SubAdmin => "/sub-admin",
            Area::Client => "/client",
            Area::Account => "/account",
        }
    }

    /// Declared role set; `None` admits any signed-in user.
    pub fn allowed_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Area::SuperAdmin => Some(&[UserRole::SuperAdmin]),
            Area::Admin => Some(&[UserRole::Admin, UserRole::SubAdmin]),
            Area::Supervisor => Some(&[UserRole::Supervisor]),
            Area::SubAdmin => Some(&[UserRole::SubAdmin]),
            Area::Client => Some(&[UserRole::Client]),
            Area::Account => None,
        }
    }

    /// Area owning `path`, matched on whole path segments.
    pub fn for_path(path: &str) -> Option<Area> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        Area::ALL.into_iter().find(|area| {
            path.strip_prefix(area.prefix())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

/// Guard decision for `path`. Paths outside every area are public.
pub fn guard_path(state: &AuthState, path: &str) -> GuardOutcome {
    match Area::for_path(path) {
        Some(area) => guard::evaluate(state, area.allowed_roles()),
        None => GuardOutcome::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::nav_items;
    use api::User;

    fn state_for(role: UserRole) -> AuthState {
        AuthState {
            user: Some(User {
                id: "u-7".into(),
                email: "crew@site.test".into(),
                name: "Crew".into(),
                phone: None,
                role: Some(role),
                organization_id: None,
                face_image_url: None,
                is_2fa_enabled: false,
                is_active: true,
                created_at: None,
                updated_at: None,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_for_path_matches_segments() {
        assert_eq!(Area::for_path("/admin"), Some(Area::Admin));
        assert_eq!(Area::for_path("/admin/sites"), Some(Area::Admin));
        assert_eq!(Area::for_path("/sub-admin/reports"), Some(Area::SubAdmin));
        assert_eq!(Area::for_path("/super-admin/users?page=2"), Some(Area::SuperAdmin));
        assert_eq!(Area::for_path("/administrator"), None);
        assert_eq!(Area::for_path("/login"), None);
        assert_eq!(Area::for_path("/"), None);
    }

    #[test]
    fn test_navigation_only_points_at_permitted_areas() {
        for role in UserRole::ALL {
            let state = state_for(role);
            for item in nav_items(Some(role)) {
                assert_eq!(
                    guard_path(&state, item.path),
                    GuardOutcome::Render,
                    "{role} cannot open {}",
                    item.path
                );
            }
        }
    }

    #[test]
    fn test_sub_admin_may_use_admin_area() {
        let state = state_for(UserRole::SubAdmin);
        assert_eq!(guard_path(&state, "/admin/sites"), GuardOutcome::Render);
        assert_eq!(
            guard_path(&state, "/super-admin"),
            GuardOutcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn test_supervisor_is_refused_admin_area() {
        let state = state_for(UserRole::Supervisor);
        let outcome = guard_path(&state, "/admin/users");
        assert_eq!(outcome.redirect_path(), Some("/unauthorized"));
    }

    #[test]
    fn test_account_open_to_every_role() {
        for role in UserRole::ALL {
            assert_eq!(guard_path(&state_for(role), "/account"), GuardOutcome::Render);
        }
    }

    #[test]
    fn test_public_paths_always_render() {
        let signed_out = AuthState {
            user: None,
            loading: false,
        };
        assert_eq!(guard_path(&signed_out, "/login"), GuardOutcome::Render);
        assert_eq!(guard_path(&signed_out, "/unauthorized"), GuardOutcome::Render);
        assert_eq!(
            guard_path(&signed_out, "/client/sites"),
            GuardOutcome::RedirectToLogin
        );
    }
}

//! # Role → navigation map
//!
//! A static table: each role gets an ordered list of sidebar entries, the
//! first being its dashboard. A user without a role gets no entries.

use api::UserRole;

/// Glyph shown next to a navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    ChartBar,
    Building,
    Users,
    MapMarked,
    HardHat,
    FileAlt,
    ClipboardList,
    Clock,
    Tasks,
    Cog,
    UserTie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    /// Active only on an exact path match (dashboards).
    pub end: bool,
}

const fn index(path: &'static str) -> NavItem {
    NavItem {
        path,
        label: "Dashboard",
        icon: NavIcon::ChartBar,
        end: true,
    }
}

const fn item(path: &'static str, label: &'static str, icon: NavIcon) -> NavItem {
    NavItem {
        path,
        label,
        icon,
        end: false,
    }
}

const SUPER_ADMIN: &[NavItem] = &[
    index("/super-admin"),
    item("/super-admin/organizations", "Organizations", NavIcon::Building),
    item("/super-admin/users", "Global Users", NavIcon::Users),
    item("/super-admin/settings", "Settings", NavIcon::Cog),
];

const ADMIN: &[NavItem] = &[
    index("/admin"),
    item("/admin/sites", "Sites", NavIcon::MapMarked),
    item("/admin/sub-admins", "Sub Admins", NavIcon::UserTie),
    item("/admin/supervisors", "Supervisors", NavIcon::HardHat),
    item("/admin/clients", "Clients", NavIcon::Users),
    item("/admin/reports", "Reports", NavIcon::FileAlt),
    item("/admin/users", "Users", NavIcon::Users),
];

const SUPERVISOR: &[NavItem] = &[
    index("/supervisor"),
    item("/supervisor/attendance", "Attendance", NavIcon::Clock),
    item("/supervisor/daily-reports", "Daily Reports", NavIcon::ClipboardList),
    item("/supervisor/resources", "Resources", NavIcon::Building),
    item("/supervisor/reports", "My Reports", NavIcon::FileAlt),
    item("/supervisor/tasks", "My Tasks", NavIcon::Tasks),
];

const SUB_ADMIN: &[NavItem] = &[
    index("/sub-admin"),
    item("/sub-admin/reports", "Reports", NavIcon::FileAlt),
];

const CLIENT: &[NavItem] = &[
    index("/client"),
    item("/client/sites", "My Projects", NavIcon::Building),
    item("/client/reports", "Reports", NavIcon::FileAlt),
];

/// Sidebar entries for a role. Empty for a role-less user.
pub fn nav_items(role: Option<UserRole>) -> &'static [NavItem] {
    match role {
        Some(UserRole::SuperAdmin) => SUPER_ADMIN,
        Some(UserRole::Admin) => ADMIN,
        Some(UserRole::SubAdmin) => SUB_ADMIN,
        Some(UserRole::Supervisor) => SUPERVISOR,
        Some(UserRole::Client) => CLIENT,
        None => &[],
    }
}

/// Landing page after sign-in: the role's dashboard.
pub fn home_path(role: Option<UserRole>) -> Option<&'static str> {
    nav_items(role).first().map(|item| item.path)
}

impl NavItem {
    /// Whether this entry should be highlighted for `current_path`.
    pub fn is_active(&self, current_path: &str) -> bool {
        let current = match current_path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        if current == self.path {
            return true;
        }
        !self.end
            && current
                .strip_prefix(self.path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

//! # User model as seen by the client
//!
//! [`User`] is a read-mostly cache of the backend's user record. It is only ever
//! replaced wholesale (after login or the startup profile check), never edited
//! in place.
//!
//! [`UserRole`] is the five-value role enum that drives navigation and route
//! guarding. The backend sends it as `SCREAMING_SNAKE_CASE`. A user whose role
//! is missing, `null` or not one of the five values still deserialises, with
//! `role: None`: such a user can sign in but sees no navigation and is refused
//! by every role-restricted screen.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Platform-wide user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Admin,
    SubAdmin,
    Supervisor,
    Client,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::SuperAdmin,
        UserRole::Admin,
        UserRole::SubAdmin,
        UserRole::Supervisor,
        UserRole::Client,
    ];

    /// Wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Admin => "ADMIN",
            UserRole::SubAdmin => "SUB_ADMIN",
            UserRole::Supervisor => "SUPERVISOR",
            UserRole::Client => "CLIENT",
        }
    }

    /// Label for display next to the user's name.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::Admin => "Admin",
            UserRole::SubAdmin => "Sub Admin",
            UserRole::Supervisor => "Supervisor",
            UserRole::Client => "Client",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the five role names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// User record returned by `/auth/login` and `/auth/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<UserRole>,
    pub organization_id: Option<String>,
    pub face_image_url: Option<String>,
    #[serde(default, rename = "is2FAEnabled")]
    pub is_2fa_enabled: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Option<UserRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse() {
        Ok(role) => Some(role),
        Err(e) => {
            tracing::warn!("Treating user as role-less: {}", e);
            None
        }
    }))
}

impl User {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Single uppercase letter for the avatar bubble, `U` when there is no name.
    pub fn initial(&self) -> char {
        self.name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> User {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_deserialize_backend_user() {
        let user = parse(
            r#"{
                "id": "u-1",
                "email": "ana@site.test",
                "name": "ana",
                "role": "SUB_ADMIN",
                "organizationId": "org-9",
                "is2FAEnabled": true,
                "isActive": false,
                "createdAt": "2024-03-01T08:30:00.000Z",
                "updatedAt": "2024-03-02T08:30:00.000Z"
            }"#,
        );

        assert_eq!(user.role, Some(UserRole::SubAdmin));
        assert_eq!(user.organization_id.as_deref(), Some("org-9"));
        assert!(user.is_2fa_enabled);
        assert!(!user.is_active);
        assert!(user.created_at.is_some());
        assert_eq!(user.initial(), 'A');
    }

    #[test]
    fn test_missing_or_unknown_role_is_none() {
        let missing = parse(r#"{"id":"1","email":"a@b.c","name":"A"}"#);
        assert_eq!(missing.role, None);
        assert!(missing.is_active);

        let null = parse(r#"{"id":"1","email":"a@b.c","name":"A","role":null}"#);
        assert_eq!(null.role, None);

        let unknown = parse(r#"{"id":"1","email":"a@b.c","name":"A","role":"FOREMAN"}"#);
        assert_eq!(unknown.role, None);
    }

    #[test]
    fn test_role_strings() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
            assert_eq!(
                serde_json::to_string(&role).unwrap(),
                format!("\"{}\"", role.as_str())
            );
        }
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_display_name_and_initial_fallbacks() {
        let user = parse(r#"{"id":"1","email":"site@corp.test","name":" "}"#);
        assert_eq!(user.display_name(), "site@corp.test");
        assert_eq!(user.initial(), 'U');
    }
}

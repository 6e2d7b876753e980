use serde::{Deserialize, Serialize};

/// Role assigned to a user account by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Employee,
}

/// User information returned by the current-user endpoint.
///
/// Ids are strings rather than UUIDs so the type works unchanged in WASM and
/// across the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub role: UserRole,
}

impl UserInfo {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }

    /// Whether this user administers the whole application.
    pub fn is_admin(&self) -> bool {
        self.is_superuser || self.role == UserRole::Admin
    }

    /// Whether this user manages a department.
    pub fn is_manager(&self) -> bool {
        self.role == UserRole::Manager
    }

    /// Admins and managers can hire, approve leave, and edit departments.
    pub fn can_manage(&self) -> bool {
        self.is_admin() || self.is_manager()
    }
}

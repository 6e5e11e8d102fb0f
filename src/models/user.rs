use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role of a user account.
/// Corresponds to the `user_role` SQL enum.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Regular account: owns and manages its own tasks.
    User,
    /// Administrator: may list all accounts with task statistics and
    /// activate/deactivate them.
    Admin,
}

/// A user account as returned by the API. The password hash is never part
/// of this struct; handlers that need it read it into a private row type.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the account.
    pub id: i32,
    /// Display name chosen at registration.
    pub name: String,
    /// Email address, unique across accounts.
    pub email: String,
    /// Role of the account.
    pub role: UserRole,
    /// Whether the account is active. Deactivation is presentational: it
    /// does not delete the user's tasks or revoke already-issued tokens.
    pub is_active: bool,
    /// Timestamp of when the account was created.
    pub created_at: DateTime<Utc>,
}

/// Projection of a user augmented with per-account task statistics,
/// as served by the admin dashboard listing.
#[derive(Debug, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserWithStats {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    /// Number of the user's tasks with `isCompleted = true`.
    pub completed_tasks: i64,
    /// Number of the user's tasks with `isCompleted = false`.
    pub pending_tasks: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_json_representation() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");

        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_user_serializes_camel_case_without_password() {
        let user = User {
            id: 1,
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: UserRole::User,
            is_active: true,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["isActive"], true);
        assert_eq!(value["createdAt"].is_string(), true);
        assert!(value.get("password").is_none());
        assert!(value.get("passwordHash").is_none());
    }

    #[test]
    fn test_stats_projection_field_names() {
        let stats = UserWithStats {
            id: 7,
            name: "bob".to_string(),
            email: "bob@example.com".to_string(),
            role: UserRole::User,
            is_active: false,
            completed_tasks: 3,
            pending_tasks: 2,
        };

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["completedTasks"], 3);
        assert_eq!(value["pendingTasks"], 2);
        assert_eq!(value["isActive"], false);
    }
}

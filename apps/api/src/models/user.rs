//! User identity as this service sees it. Authentication itself is handled
//! by the external identity provider; we only consume the session's user id
//! and keep a small profile record per user.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// The identity returned to callers of `GET /api/v1/me`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

/// Picks the display name: profile name first, then whatever the session
/// carries, then the email local part, then a generic default.
pub fn resolve_display_name(
    profile_name: Option<&str>,
    session_name: Option<&str>,
    email: Option<&str>,
) -> String {
    for candidate in [profile_name, session_name] {
        if let Some(name) = candidate {
            let name = name.trim();
            if !name.is_empty() {
                return name.to_string();
            }
        }
    }
    if let Some(email) = email {
        if let Some(local) = email.split('@').next() {
            if !local.trim().is_empty() {
                return local.trim().to_string();
            }
        }
    }
    "User".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_name_wins() {
        let name = resolve_display_name(Some("Jane Doe"), Some("session-jane"), Some("j@x.com"));
        assert_eq!(name, "Jane Doe");
    }

    #[test]
    fn test_session_name_beats_email() {
        let name = resolve_display_name(Some("  "), Some("Session Jane"), Some("j@x.com"));
        assert_eq!(name, "Session Jane");
    }

    #[test]
    fn test_email_local_part_fallback() {
        let name = resolve_display_name(None, None, Some("jane.doe@example.com"));
        assert_eq!(name, "jane.doe");
    }

    #[test]
    fn test_generic_default() {
        assert_eq!(resolve_display_name(None, None, None), "User");
        assert_eq!(resolve_display_name(Some(""), Some(""), Some("")), "User");
    }
}

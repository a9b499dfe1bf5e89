//! Identity resolution against the `profiles` table. The session itself is
//! issued elsewhere; we only trust the caller-supplied user id and optional
//! session metadata, and prefer our own profile record where one exists.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{resolve_display_name, CurrentUser, UserProfile};

pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<Option<UserProfile>, AppError> {
    Ok(
        sqlx::query_as::<_, UserProfile>("SELECT id, name, email FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?,
    )
}

/// Resolves the caller's identity: profile record first, then session
/// metadata, then generic defaults.
pub async fn get_current_user(
    pool: &PgPool,
    user_id: Uuid,
    session_name: Option<&str>,
    session_email: Option<&str>,
) -> Result<CurrentUser, AppError> {
    let profile = get_profile(pool, user_id).await?;

    let email = profile
        .as_ref()
        .map(|p| p.email.trim())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .or_else(|| {
            session_email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_default();

    let name = resolve_display_name(
        profile.as_ref().map(|p| p.name.as_str()),
        session_name,
        if email.is_empty() {
            None
        } else {
            Some(email.as_str())
        },
    );

    Ok(CurrentUser {
        id: user_id,
        name,
        email,
    })
}

//! Project permission checks

use crate::{ApiError, ApiResult, CurrentUser};

use cl_core::Permission;
use cl_db::ProjectMemberRepository;

use sqlx::SqlitePool;

/// Whether the user holds `permission` on the project.
///
/// Admins hold every permission. Anonymous users and non-members hold none.
pub async fn allowed_to(
    pool: &SqlitePool,
    user: &CurrentUser,
    project_id: i64,
    permission: Permission,
) -> ApiResult<bool> {
    let Some(ref account) = user.0 else {
        return Ok(false);
    };
    if account.admin {
        return Ok(true);
    }

    let member =
        ProjectMemberRepository::find_by_user_and_project(pool, account.id, project_id).await?;

    Ok(member.is_some_and(|m| m.has_permission(permission)))
}

/// Guard shared by the list, show, create, update and destroy actions.
///
/// Anonymous users are asked to log in (401); logged-in users are refused (403).
pub async fn authorize(
    pool: &SqlitePool,
    user: &CurrentUser,
    project_id: i64,
    permission: Permission,
) -> ApiResult<()> {
    if allowed_to(pool, user, project_id, permission).await? {
        return Ok(());
    }

    log::warn!(
        "Denied {} on project {} to {}",
        permission.as_str(),
        project_id,
        user.0.as_ref().map_or("anonymous", |u| u.login.as_str())
    );

    if user.is_anonymous() {
        Err(ApiError::unauthorized("Login required"))
    } else {
        Err(ApiError::forbidden(format!(
            "Insufficient permission. Required: {}",
            permission.as_str()
        )))
    }
}

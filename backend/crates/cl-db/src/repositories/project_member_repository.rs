use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use cl_core::{ProjectMember, Role};

use std::str::FromStr;

const TABLE: &str = "project_members";

#[derive(sqlx::FromRow)]
struct ProjectMemberRow {
    project_id: i64,
    user_id: i64,
    role: String,
    created_at: i64,
}

impl TryFrom<ProjectMemberRow> for ProjectMember {
    type Error = DbError;

    fn try_from(r: ProjectMemberRow) -> DbErrorResult<Self> {
        Ok(ProjectMember {
            project_id: r.project_id,
            user_id: r.user_id,
            role: Role::from_str(&r.role)
                .map_err(|e| DbError::invalid_row(TABLE, e.to_string()))?,
            created_at: timestamp(TABLE, r.created_at)?,
        })
    }
}

pub struct ProjectMemberRepository;

impl ProjectMemberRepository {
    pub async fn find_by_user_and_project<'e, E>(
        executor: E,
        user_id: i64,
        project_id: i64,
    ) -> DbErrorResult<Option<ProjectMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ProjectMemberRow>(
            r#"
                SELECT project_id, user_id, role, created_at
                FROM project_members
                WHERE user_id = ? AND project_id = ?
                "#,
        )
        .bind(user_id)
        .bind(project_id)
        .fetch_optional(executor)
        .await?;

        row.map(ProjectMember::try_from).transpose()
    }

    /// Add a member, replacing any existing role on the same project
    pub async fn upsert<'e, E>(executor: E, member: &ProjectMember) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created_at = member.created_at.timestamp();

        sqlx::query(
            r#"
              INSERT INTO project_members (project_id, user_id, role, created_at)
              VALUES (?, ?, ?, ?)
              ON CONFLICT (project_id, user_id) DO UPDATE SET role = excluded.role
              "#,
        )
        .bind(member.project_id)
        .bind(member.user_id)
        .bind(member.role.as_str())
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }
}

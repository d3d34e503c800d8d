use crate::Result as DbErrorResult;

pub struct ProjectRepository;

impl ProjectRepository {
    /// Insert a project and return its id
    pub async fn create<'e, E>(executor: E, identifier: &str, name: &str) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO projects (identifier, name) VALUES (?, ?) RETURNING id",
        )
        .bind(identifier)
        .bind(name)
        .fetch_one(executor)
        .await?;

        Ok(id)
    }
}

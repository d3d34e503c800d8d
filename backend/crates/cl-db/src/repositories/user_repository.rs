use crate::Result as DbErrorResult;

use cl_core::User;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    login: String,
    api_key: Option<String>,
    admin: bool,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            login: r.login,
            api_key: r.api_key,
            admin: r.admin,
        }
    }
}

pub struct UserRepository;

impl UserRepository {
    pub async fn create<'e, E>(
        executor: E,
        login: &str,
        api_key: Option<&str>,
        admin: bool,
    ) -> DbErrorResult<User>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              INSERT INTO users (login, api_key, admin)
              VALUES (?, ?, ?)
              RETURNING id, login, api_key, admin
              "#,
        )
        .bind(login)
        .bind(api_key)
        .bind(admin)
        .fetch_one(executor)
        .await?;

        Ok(row.into())
    }

    pub async fn find_by_api_key<'e, E>(executor: E, api_key: &str) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, login, api_key, admin
              FROM users
              WHERE api_key = ?
              "#,
        )
        .bind(api_key)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(User::from))
    }
}

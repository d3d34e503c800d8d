pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::checklist_repository::ChecklistRepository;
pub use repositories::issue_journal_repository::IssueJournalRepository;
pub use repositories::issue_repository::IssueRepository;
pub use repositories::project_member_repository::ProjectMemberRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::user_repository::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::SqlitePool;

/// Bring the schema up to date
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}

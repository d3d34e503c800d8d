pub mod checklist_repository;
pub mod issue_journal_repository;
pub mod issue_repository;
pub mod project_member_repository;
pub mod project_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use chrono::{DateTime, Utc};

pub(crate) fn timestamp(table: &'static str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::invalid_row(table, format!("invalid timestamp {value}")))
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub project_id: i64,
    pub subject: String,

    /// Percentage complete, 0..=100
    pub done_ratio: i32,

    pub updated_at: DateTime<Utc>,
}

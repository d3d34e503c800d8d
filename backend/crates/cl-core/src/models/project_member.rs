use crate::{Permission, Role};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    pub project_id: i64,
    pub user_id: i64,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl ProjectMember {
    pub fn new(project_id: i64, user_id: i64, role: Role) -> Self {
        Self {
            project_id,
            user_id,
            role,
            created_at: Utc::now(),
        }
    }

    pub fn has_permission(&self, required: Permission) -> bool {
        self.role.allows(required)
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Administrators hold every permission on every project
    pub admin: bool,
}

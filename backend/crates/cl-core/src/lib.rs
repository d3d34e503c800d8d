pub mod done_ratio;
pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use done_ratio::checklist_done_ratio;
pub use error::{CoreError, Result};
pub use models::checklist::{Checklist, NewChecklist};
pub use models::checklist_attributes::ChecklistAttributes;
pub use models::issue::Issue;
pub use models::issue_journal::IssueJournal;
pub use models::permission::Permission;
pub use models::project_member::ProjectMember;
pub use models::role::Role;
pub use models::user::User;
pub use validation::{FieldError, ValidationErrors};

/// Upper bound on a checklist item's subject, in characters
pub const MAX_SUBJECT_LENGTH: usize = 512;

/// Lowest position an item can hold; lists start at 1
pub const MIN_POSITION: i32 = 1;

/// Journal property name under which checklist changes are recorded
pub const CHECKLIST_JOURNAL_PROPERTY: &str = "checklist";

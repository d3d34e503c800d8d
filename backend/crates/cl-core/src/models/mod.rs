pub mod checklist;
pub mod checklist_attributes;
pub mod issue;
pub mod issue_journal;
pub mod permission;
pub mod project_member;
pub mod role;
pub mod user;

pub mod checklist_dto;
pub mod checklist_list_response;
pub mod checklist_request;
pub mod checklist_response;
#[allow(clippy::module_inception)]
pub mod checklists;
pub mod done_params;
pub mod done_ratio;
pub mod done_script;
pub mod issue_journal;
pub mod lookup;

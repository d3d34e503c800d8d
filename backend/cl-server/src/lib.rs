pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    authorization::{allowed_to, authorize},
    checklists::{
        checklist_dto::ChecklistDto,
        checklist_list_response::ChecklistListResponse,
        checklist_request::ChecklistRequest,
        checklist_response::ChecklistResponse,
        checklists::{
            create_checklist, destroy_checklist, done_checklist, list_checklists,
            show_checklist, update_checklist,
        },
        done_params::{DoneParams, parse_is_done},
        done_ratio::recalculate_issue_ratio,
        issue_journal::with_issue_journal,
        lookup::{find_checklist_item, find_issue_by_id},
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    response_format::ResponseFormat,
};
pub use app_state::AppState;
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;

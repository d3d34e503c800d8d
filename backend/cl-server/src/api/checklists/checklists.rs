//! Checklist REST handlers

use crate::api::checklists::done_script;
use crate::{
    ApiError, ApiResult, AppState, ChecklistDto, ChecklistListResponse, ChecklistRequest,
    ChecklistResponse, CurrentUser, DoneParams, ResponseFormat, allowed_to, authorize,
    find_checklist_item, find_issue_by_id, parse_is_done, recalculate_issue_ratio,
    with_issue_journal,
};

use cl_core::{NewChecklist, Permission};
use cl_db::ChecklistRepository;

use axum::{
    Form, Json,
    extract::{
        Path, Query, State,
        rejection::{FormRejection, JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;

/// GET /issues/{issue_id}/checklists
pub async fn list_checklists(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(issue_id): Path<String>,
) -> ApiResult<Json<ChecklistListResponse>> {
    let issue = find_issue_by_id(&state.pool, &issue_id).await?;
    authorize(&state.pool, &user, issue.project_id, Permission::ViewChecklists)
        .await
        .inspect_err(|_| state.metrics.denied("index"))?;

    let items = ChecklistRepository::find_by_issue(&state.pool, issue.id).await?;
    state.metrics.action("index");

    Ok(Json(ChecklistListResponse {
        total_count: items.len(),
        checklists: items.into_iter().map(ChecklistDto::from).collect(),
    }))
}

/// GET /checklists/{id}
pub async fn show_checklist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ChecklistResponse>> {
    let (item, issue) = find_checklist_item(&state.pool, &id).await?;
    authorize(&state.pool, &user, issue.project_id, Permission::ViewChecklists)
        .await
        .inspect_err(|_| state.metrics.denied("show"))?;

    state.metrics.action("show");

    Ok(Json(ChecklistResponse {
        checklist: item.into(),
    }))
}

/// POST /issues/{issue_id}/checklists
pub async fn create_checklist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(issue_id): Path<String>,
    body: Result<Json<ChecklistRequest>, JsonRejection>,
) -> ApiResult<Response> {
    // 1. Resolve and authorize before looking at the payload
    let issue = find_issue_by_id(&state.pool, &issue_id).await?;
    authorize(&state.pool, &user, issue.project_id, Permission::EditChecklists)
        .await
        .inspect_err(|_| state.metrics.denied("create"))?;

    let Json(req) = body?;

    // 2. The owning issue comes from the path, never from the payload
    let new_item = NewChecklist::from_attributes(issue.id, req.checklist);
    new_item
        .validate()
        .inspect_err(|_| state.metrics.invalid("create"))?;

    // 3. Save
    let item = ChecklistRepository::create(&state.pool, &new_item).await?;
    recalculate_issue_ratio(&state, issue.id).await?;
    state.metrics.action("create");

    log::info!("Created checklist {} on issue {}", item.id, issue.id);

    let location = format!("/checklists/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ChecklistResponse {
            checklist: item.into(),
        }),
    )
        .into_response())
}

/// PUT|PATCH /checklists/{id}
pub async fn update_checklist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    body: Result<Json<ChecklistRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let (before, issue) = find_checklist_item(&state.pool, &id).await?;
    authorize(&state.pool, &user, issue.project_id, Permission::EditChecklists)
        .await
        .inspect_err(|_| state.metrics.denied("update"))?;

    let Json(req) = body?;

    let mut item = before.clone();
    item.apply_attributes(req.checklist);
    item.updated_at = Utc::now();

    with_issue_journal(&state.pool, &before, &item, user.id())
        .await
        .inspect_err(|e| {
            if matches!(e, ApiError::Validation { .. }) {
                state.metrics.invalid("update");
            }
        })?;

    recalculate_issue_ratio(&state, issue.id).await?;
    state.metrics.action("update");

    log::info!("Updated checklist {} on issue {}", item.id, issue.id);

    Ok(StatusCode::OK)
}

/// DELETE /checklists/{id}
pub async fn destroy_checklist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let (item, issue) = find_checklist_item(&state.pool, &id).await?;
    authorize(&state.pool, &user, issue.project_id, Permission::EditChecklists)
        .await
        .inspect_err(|_| state.metrics.denied("destroy"))?;

    ChecklistRepository::delete(&state.pool, item.id).await?;
    state.metrics.action("destroy");

    log::info!("Deleted checklist {} from issue {}", item.id, issue.id);

    Ok(StatusCode::OK)
}

/// POST /checklists/{id}/done
///
/// Answers even when the item fails validation; the item is then left as it was.
pub async fn done_checklist(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    headers: HeaderMap,
    query: Result<Query<DoneParams>, QueryRejection>,
    form: Result<Form<DoneParams>, FormRejection>,
) -> ApiResult<Response> {
    let (before, issue) = find_checklist_item(&state.pool, &id).await?;

    if !allowed_to(&state.pool, &user, issue.project_id, Permission::DoneChecklists).await? {
        state.metrics.denied("done");
        log::warn!(
            "Denied {} on project {}",
            Permission::DoneChecklists.as_str(),
            issue.project_id
        );
        return Err(ApiError::forbidden(format!(
            "Insufficient permission. Required: {}",
            Permission::DoneChecklists.as_str()
        )));
    }

    // Form body wins over the query string
    let raw = form
        .ok()
        .and_then(|Form(p)| p.is_done)
        .or_else(|| query.ok().and_then(|Query(p)| p.is_done));

    let mut item = before.clone();
    item.is_done = parse_is_done(raw.as_deref());
    item.updated_at = Utc::now();

    let saved = with_issue_journal(&state.pool, &before, &item, user.id()).await;

    let mut done_ratio = None;
    match saved {
        Ok(()) => {
            done_ratio = recalculate_issue_ratio(&state, issue.id).await?;
            state.metrics.action("done");
            log::info!(
                "Marked checklist {} as {}",
                item.id,
                if item.is_done { "done" } else { "not done" }
            );
        }
        Err(ApiError::Validation { errors, .. }) => {
            state.metrics.invalid("done");
            log::warn!("Checklist {} not saved: {}", item.id, errors);
            item = before;
        }
        Err(e) => return Err(e),
    }

    let response = match ResponseFormat::negotiate(&headers) {
        ResponseFormat::Js => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
            done_script::render(&item, done_ratio),
        )
            .into_response(),
        ResponseFormat::Html => {
            let target = headers
                .get(header::REFERER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
                .unwrap_or_else(|| format!("/issues/{}", issue.id));
            (StatusCode::FOUND, [(header::LOCATION, target)]).into_response()
        }
    };

    Ok(response)
}

//! Axum extractor for API-key authentication

use crate::{ApiError, AppState};

use cl_core::User;
use cl_db::UserRepository;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Header carrying a user's API key
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// The user making the request, or None for anonymous requests.
///
/// A request without `X-Api-Key` is anonymous. A key that matches no user is
/// rejected with 401 rather than silently downgraded.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<User>);

impl CurrentUser {
    pub fn anonymous() -> Self {
        CurrentUser(None)
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }

    pub fn id(&self) -> Option<i64> {
        self.0.as_ref().map(|u| u.id)
    }

    pub fn is_admin(&self) -> bool {
        self.0.as_ref().is_some_and(|u| u.admin)
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(API_KEY_HEADER) else {
                return Ok(CurrentUser::anonymous());
            };

            let api_key = header_value
                .to_str()
                .map_err(|_| ApiError::unauthorized("Invalid API key"))?;

            match UserRepository::find_by_api_key(&state.pool, api_key).await? {
                Some(user) => {
                    log::debug!("Authenticated {} via {}", user.login, API_KEY_HEADER);
                    Ok(CurrentUser(Some(user)))
                }
                None => {
                    log::warn!("Rejected unknown API key");
                    Err(ApiError::unauthorized("Invalid API key"))
                }
            }
        }
    }
}

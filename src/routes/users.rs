//! Admin user listing.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{ListParams, PageResult};
use crate::models::user::AdminUserRow;
use crate::services::users as user_service;
use crate::AppState;

/// GET /api/admin/users
pub async fn admin_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<AdminUserRow>>>, AppError> {
    let result = user_service::list(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

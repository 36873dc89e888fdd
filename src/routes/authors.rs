//! Author routes.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::author::AuthorRow;
use crate::models::pagination::{ListParams, PageResult, SortOrder};
use crate::services::authors as author_service;
use crate::AppState;

/// GET /api/authors: public author index, ascending by first name by default.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<AuthorRow>>>, AppError> {
    let filter = params.to_filter_or(SortOrder::Asc);
    let result = author_service::list(&state.db, &filter).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/authors
pub async fn admin_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<AuthorRow>>>, AppError> {
    let result = author_service::list(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

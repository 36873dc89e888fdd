//! Publisher routes. Public and admin share one listing.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{ListParams, PageResult};
use crate::models::publisher::PublisherRow;
use crate::services::publishers as publisher_service;
use crate::AppState;

/// GET /api/publishers and GET /api/admin/publishers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<PublisherRow>>>, AppError> {
    let result = publisher_service::list(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

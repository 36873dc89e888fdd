//! Admin review moderation and book-request listings.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{ListParams, PageResult};
use crate::models::review::{RequestedBookRow, ReviewRow};
use crate::services::reviews as review_service;
use crate::AppState;

/// GET /api/admin/reviews
pub async fn admin_reviews(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<ReviewRow>>>, AppError> {
    let result = review_service::list_reviews(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/requested-books
pub async fn admin_requested_books(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<RequestedBookRow>>>, AppError> {
    let result = review_service::list_requested_books(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

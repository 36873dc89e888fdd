//! Reader activity: read/buy lists and author follows.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::book::BookRow;
use crate::models::pagination::{ListParams, PageResult};
use crate::models::relation::{BuyListRow, FollowerRow, ReadListRow};
use crate::services::{followers as follower_service, reading_lists as list_service};
use crate::AppState;

/// GET /api/readers/{user_id}/read-list
pub async fn read_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let result = list_service::reader_read_list(&state.db, user_id, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/readers/{user_id}/buy-list
pub async fn buy_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let user_id = parse_user_id(&user_id)?;
    let result = list_service::reader_buy_list(&state.db, user_id, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/read-lists
pub async fn admin_read_lists(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<ReadListRow>>>, AppError> {
    let result = list_service::list_read_lists(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/buy-lists
pub async fn admin_buy_lists(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BuyListRow>>>, AppError> {
    let result = list_service::list_buy_lists(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/followers
pub async fn admin_followers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<FollowerRow>>>, AppError> {
    let result = follower_service::list(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    match raw.trim().parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation(format!("Invalid user id '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_must_be_positive_integer() {
        assert_eq!(parse_user_id("42").unwrap(), 42);
        assert!(parse_user_id("0").is_err());
        assert!(parse_user_id("abc").is_err());
        assert!(parse_user_id("-3").is_err());
    }
}

//! Book routes: the public catalog, genre and language shelves, and the admin
//! listing.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::book::BookRow;
use crate::models::pagination::{ListParams, PageResult, SortOrder};
use crate::services::books as book_service;
use crate::AppState;

/// GET /api/books: public catalog, ascending by title unless told otherwise.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let filter = params.to_filter_or(SortOrder::Asc);
    let result = book_service::list(&state.db, &filter).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/genres/{genre}/books: books tagged with one genre.
pub async fn list_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let filter = params.to_filter_or(SortOrder::Asc);
    let result = book_service::list_by_genre(&state.db, &genre, &filter).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/languages/{language}/books: books available in one language.
pub async fn list_by_language(
    State(state): State<AppState>,
    Path(language): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let filter = params.to_filter_or(SortOrder::Asc);
    let result = book_service::list_by_language(&state.db, &language, &filter).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/books
pub async fn admin_list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookRow>>>, AppError> {
    let result = book_service::list(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

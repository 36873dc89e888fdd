//! Admin association listings and their overview pages.

use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::{ApiResponse, AppError};
use crate::models::pagination::{ListParams, PageResult};
use crate::models::relation::{BookAuthorRow, BookGenreRow, BookLanguageRow};
use crate::services::book_relations as relation_service;
use crate::services::catalog::{self, BookAuthorOverview, BookGenreOverview, BookLanguageOverview};
use crate::AppState;

/// GET /api/admin/book-authors
pub async fn book_authors(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookAuthorRow>>>, AppError> {
    let result = relation_service::list_book_authors(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/book-genres
pub async fn book_genres(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookGenreRow>>>, AppError> {
    let result = relation_service::list_book_genres(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/book-languages
pub async fn book_languages(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResult<BookLanguageRow>>>, AppError> {
    let result = relation_service::list_book_languages(&state.db, &params.to_filter()).await?;
    Ok(ApiResponse::success(result))
}

/// GET /api/admin/book-authors/overview: associations plus book and author lookups.
pub async fn book_author_overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BookAuthorOverview>>, AppError> {
    let overview = catalog::book_author_overview(&state.db).await?;
    Ok(ApiResponse::success(overview))
}

/// GET /api/admin/book-genres/overview
pub async fn book_genre_overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BookGenreOverview>>, AppError> {
    let overview = catalog::book_genre_overview(&state.db).await?;
    Ok(ApiResponse::success(overview))
}

/// GET /api/admin/book-languages/overview
pub async fn book_language_overview(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<BookLanguageOverview>>, AppError> {
    let overview = catalog::book_language_overview(&state.db).await?;
    Ok(ApiResponse::success(overview))
}

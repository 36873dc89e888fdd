//! Route definitions for the book review listing API.

pub mod authors;
pub mod books;
pub mod health;
pub mod publishers;
pub mod readers;
pub mod relations;
pub mod reviews;
pub mod users;

use axum::routing::get;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the full application router.
///
/// Admin routes are mounted under `/api/admin`; access control for them is
/// expected in front of this router.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/books", get(books::list))
        .route("/authors", get(authors::list))
        .route("/publishers", get(publishers::list))
        .route("/genres/{genre}/books", get(books::list_by_genre))
        .route("/languages/{language}/books", get(books::list_by_language))
        .route("/readers/{user_id}/read-list", get(readers::read_list))
        .route("/readers/{user_id}/buy-list", get(readers::buy_list));

    let admin_routes = Router::new()
        .route("/books", get(books::admin_list))
        .route("/authors", get(authors::admin_list))
        .route("/publishers", get(publishers::list))
        .route("/users", get(users::admin_list))
        .route("/followers", get(readers::admin_followers))
        .route("/buy-lists", get(readers::admin_buy_lists))
        .route("/read-lists", get(readers::admin_read_lists))
        .route("/book-authors", get(relations::book_authors))
        .route("/book-authors/overview", get(relations::book_author_overview))
        .route("/book-genres", get(relations::book_genres))
        .route("/book-genres/overview", get(relations::book_genre_overview))
        .route("/book-languages", get(relations::book_languages))
        .route("/book-languages/overview", get(relations::book_language_overview))
        .route("/reviews", get(reviews::admin_reviews))
        .route("/requested-books", get(reviews::admin_requested_books));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api", public_routes.nest("/admin", admin_routes))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

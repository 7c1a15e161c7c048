use axum::{extract::State, response::IntoResponse};

use crate::server::{
    error::Error,
    model::app::AppState,
    service::{blog_post::BlogPostService, book::BookService},
    view,
};

/// Number of entries of each kind shown on the home page
pub static HOME_PAGE_LIMIT: u64 = 5;

/// Home page with the latest blog posts and books
///
/// # Responses
/// - 200 (Success): Up to 5 newest blog posts and the 5 most recently added books
/// - 500 (Internal Server Error): A database error occurred
pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let posts = BlogPostService::new(&state.db)
        .list(Some(HOME_PAGE_LIMIT))
        .await?;
    let books = BookService::new(&state.db).list(Some(HOME_PAGE_LIMIT)).await?;

    Ok(view::home::home_page(posts, books))
}

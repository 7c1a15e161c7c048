use axum::{extract::State, response::IntoResponse};

use crate::server::{
    controller::util::get_user::AdminUser,
    error::Error,
    model::app::AppState,
    service::{blog_post::BlogPostService, book::BookService},
    view,
};

/// Admin dashboard listing all content with edit and delete controls
///
/// # Responses
/// - 200 (Success): Every blog post and book
/// - 303 (See Other): No user in session, redirect to `/login`
/// - 500 (Internal Server Error): A database error occurred
pub async fn dashboard(
    State(state): State<AppState>,
    AdminUser(user): AdminUser,
) -> Result<impl IntoResponse, Error> {
    let posts = BlogPostService::new(&state.db).list(None).await?;
    let books = BookService::new(&state.db).list(None).await?;

    Ok(view::admin::admin_page(&user, posts, books))
}

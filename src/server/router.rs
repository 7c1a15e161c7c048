//! HTTP routing.
//!
//! Public pages, the login flow and the admin content manager are all registered here.
//! Routes that change content sit behind the [`AdminUser`](crate::server::controller::util::get_user::AdminUser)
//! extractor inside their handlers, so the session layer must be attached by the caller.

use axum::{routing::get, Router};

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router.
///
/// # Registered Endpoints
/// - `GET /` - Latest blog posts and books
/// - `GET /blog` - All blog posts
/// - `GET /blog/{id}` - A single blog post
/// - `GET /books` - All books
/// - `GET, POST /login` - Login form and credential submission
/// - `GET /logout` - Clear the admin session
/// - `GET /admin` - Admin dashboard
/// - `GET, POST /blog/new`, `/blog/edit/{id}`, `/blog/delete/{id}` - Blog post management
/// - `GET, POST /book/new`, `/book/edit/{id}`, `/book/delete/{id}` - Book management
///
/// Unknown paths get the not found page.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(controller::home::index))
        .route("/blog", get(controller::blog::list_blog_posts))
        .route(
            "/blog/new",
            get(controller::blog::new_blog_post_form).post(controller::blog::create_blog_post),
        )
        .route("/blog/{id}", get(controller::blog::get_blog_post))
        .route(
            "/blog/edit/{id}",
            get(controller::blog::edit_blog_post_form).post(controller::blog::update_blog_post),
        )
        .route(
            "/blog/delete/{id}",
            get(controller::blog::delete_blog_post).post(controller::blog::delete_blog_post),
        )
        .route("/books", get(controller::book::list_books))
        .route(
            "/book/new",
            get(controller::book::new_book_form).post(controller::book::create_book),
        )
        .route(
            "/book/edit/{id}",
            get(controller::book::edit_book_form).post(controller::book::update_book),
        )
        .route(
            "/book/delete/{id}",
            get(controller::book::delete_book).post(controller::book::delete_book),
        )
        .route(
            "/login",
            get(controller::auth::login_form).post(controller::auth::login),
        )
        .route("/logout", get(controller::auth::logout))
        .route("/admin", get(controller::admin::dashboard))
        .fallback(controller::not_found)
}

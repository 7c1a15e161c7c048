use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};

use crate::{
    model::form::BlogPostForm,
    server::{
        controller::util::{content_id::ContentId, get_user::AdminUser},
        error::Error,
        model::app::AppState,
        service::blog_post::BlogPostService,
        view,
    },
};

/// All blog posts, newest first
///
/// # Responses
/// - 200 (Success): The blog index
/// - 500 (Internal Server Error): A database error occurred
pub async fn list_blog_posts(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let posts = BlogPostService::new(&state.db).list(None).await?;

    Ok(view::blog::blog_list_page(posts))
}

/// A single blog post
///
/// # Responses
/// - 200 (Success): The blog post
/// - 404 (Not Found): No blog post with this ID
/// - 500 (Internal Server Error): A database error occurred
pub async fn get_blog_post(
    State(state): State<AppState>,
    ContentId(blog_post_id): ContentId,
) -> Result<impl IntoResponse, Error> {
    let post = BlogPostService::new(&state.db).get(blog_post_id).await?;

    Ok(view::blog::blog_post_page(post))
}

/// Empty form for a new blog post
///
/// # Responses
/// - 200 (Success): The form
/// - 303 (See Other): No user in session, redirect to `/login`
pub async fn new_blog_post_form(_: AdminUser) -> Result<impl IntoResponse, Error> {
    Ok(view::blog::blog_post_form_page(
        None,
        BlogPostForm::default(),
        Vec::new(),
    ))
}

/// Creates a blog post
///
/// # Responses
/// - 303 (See Other): Created, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 422 (Unprocessable Entity): The form re-rendered with the submitted values and errors
/// - 500 (Internal Server Error): A database error occurred
pub async fn create_blog_post(
    State(state): State<AppState>,
    _: AdminUser,
    Form(form): Form<BlogPostForm>,
) -> Result<impl IntoResponse, Error> {
    BlogPostService::new(&state.db).create(form).await?;

    Ok(Redirect::to("/admin"))
}

/// Form pre-filled with an existing blog post
///
/// # Responses
/// - 200 (Success): The form
/// - 303 (See Other): No user in session, redirect to `/login`
/// - 404 (Not Found): No blog post with this ID
pub async fn edit_blog_post_form(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(blog_post_id): ContentId,
) -> Result<impl IntoResponse, Error> {
    let post = BlogPostService::new(&state.db).get(blog_post_id).await?;

    Ok(view::blog::blog_post_form_page(
        Some(post.id),
        BlogPostForm::from(&post),
        Vec::new(),
    ))
}

/// Overwrites an existing blog post
///
/// # Responses
/// - 303 (See Other): Updated, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 404 (Not Found): No blog post with this ID
/// - 422 (Unprocessable Entity): The form re-rendered with the submitted values and errors
/// - 500 (Internal Server Error): A database error occurred
pub async fn update_blog_post(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(blog_post_id): ContentId,
    Form(form): Form<BlogPostForm>,
) -> Result<impl IntoResponse, Error> {
    BlogPostService::new(&state.db)
        .update(blog_post_id, form)
        .await?;

    Ok(Redirect::to("/admin"))
}

/// Deletes a blog post
///
/// # Responses
/// - 303 (See Other): Deleted, redirect to the admin dashboard; or no user in session,
///   redirect to `/login`
/// - 404 (Not Found): No blog post with this ID
/// - 500 (Internal Server Error): A database error occurred
pub async fn delete_blog_post(
    State(state): State<AppState>,
    _: AdminUser,
    ContentId(blog_post_id): ContentId,
) -> Result<impl IntoResponse, Error> {
    BlogPostService::new(&state.db).delete(blog_post_id).await?;

    Ok(Redirect::to("/admin"))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    model::form::{BlogPostForm, BookForm},
    server::{model::content::FieldError, view},
};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Blog post ID {0} not found")]
    BlogPostNotFound(i32),
    #[error("Book ID {0} not found")]
    BookNotFound(i32),
    /// Path segment could not be read as a content ID.
    #[error("Malformed content ID: {0}")]
    MalformedId(String),
    /// Submitted blog post failed validation, `id` is `None` when creating.
    #[error("Invalid blog post submission: {errors:?}")]
    InvalidBlogPost {
        id: Option<i32>,
        form: BlogPostForm,
        errors: Vec<FieldError>,
    },
    /// Submitted book failed validation, `id` is `None` when creating.
    #[error("Invalid book submission: {errors:?}")]
    InvalidBook {
        id: Option<i32>,
        form: BookForm,
        errors: Vec<FieldError>,
    },
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        match self {
            Self::BlogPostNotFound(_) | Self::BookNotFound(_) | Self::MalformedId(_) => {
                tracing::debug!("{}", self);

                (StatusCode::NOT_FOUND, view::error::not_found_page()).into_response()
            }
            Self::InvalidBlogPost { id, form, errors } => {
                tracing::debug!(blog_post_id = ?id, "Rejected blog post submission: {:?}", errors);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    view::blog::blog_post_form_page(id, form, errors),
                )
                    .into_response()
            }
            Self::InvalidBook { id, form, errors } => {
                tracing::debug!(book_id = ?id, "Rejected book submission: {:?}", errors);

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    view::book::book_form_page(id, form, errors),
                )
                    .into_response()
            }
        }
    }
}

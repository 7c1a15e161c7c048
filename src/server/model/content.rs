//! Validated content input.
//!
//! Controllers hand raw [`BlogPostForm`](crate::model::form::BlogPostForm) and
//! [`BookForm`](crate::model::form::BookForm) values to the services, which validate them
//! into these types before anything reaches a repository.

use chrono::NaiveDateTime;

/// A problem with one submitted form field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Blog post fields ready to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPostInput {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    /// `None` assigns the current time on create and keeps the stored value on update.
    pub date_posted: Option<NaiveDateTime>,
}

/// Book fields ready to persist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub notes: Option<String>,
}

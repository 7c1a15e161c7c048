//! Form validation.
//!
//! Turns raw form payloads into [`BlogPostInput`] and [`BookInput`], collecting every field
//! problem instead of stopping at the first one.

use crate::{
    model::form::{BlogPostForm, BookForm},
    server::{
        model::content::{BlogPostInput, BookInput, FieldError},
        util::time::parse_datetime_local,
    },
};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_AUTHOR_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 500;

pub fn validate_blog_post(form: &BlogPostForm) -> Result<BlogPostInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = required(&mut errors, "title", "Title", &form.title, Some(MAX_TITLE_LEN));
    let content = required(&mut errors, "content", "Content", &form.content, None);
    let description = optional(
        &mut errors,
        "description",
        "Description",
        &form.description,
        Some(MAX_DESCRIPTION_LEN),
    );

    let date_posted = match form.date_posted.trim() {
        "" => None,
        value => {
            let parsed = parse_datetime_local(value);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "date_posted",
                    "Date posted must look like 2024-01-15T12:00",
                ));
            }
            parsed
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BlogPostInput {
        title,
        content,
        description,
        date_posted,
    })
}

pub fn validate_book(form: &BookForm) -> Result<BookInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = required(&mut errors, "title", "Title", &form.title, Some(MAX_TITLE_LEN));
    let author = required(&mut errors, "author", "Author", &form.author, Some(MAX_AUTHOR_LEN));
    let notes = optional(&mut errors, "notes", "Notes", &form.notes, None);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BookInput {
        title,
        author,
        notes,
    })
}

fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    max_len: Option<usize>,
) -> String {
    let value = value.trim();

    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{} is required", label)));
    } else {
        check_len(errors, field, label, value, max_len);
    }

    value.to_string()
}

/// Blank optional fields become `None`.
fn optional(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    max_len: Option<usize>,
) -> Option<String> {
    let value = value.trim();

    if value.is_empty() {
        return None;
    }

    check_len(errors, field, label, value, max_len);

    Some(value.to_string())
}

fn check_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    max_len: Option<usize>,
) {
    if let Some(max_len) = max_len {
        if value.chars().count() > max_len {
            errors.push(FieldError::new(
                field,
                format!("{} must be at most {} characters", label, max_len),
            ));
        }
    }
}

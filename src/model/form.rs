//! HTML form payloads.
//!
//! Every field defaults to the empty string when the browser omits it, so a missing field
//! and a blank field are validated the same way instead of failing deserialization.

use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Blog post fields submitted to `/blog/new` and `/blog/edit/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub description: String,
    /// HTML `datetime-local` value, blank means "now" on create and "unchanged" on edit.
    #[serde(default)]
    pub date_posted: String,
}

/// Book fields submitted to `/book/new` and `/book/edit/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub notes: String,
}

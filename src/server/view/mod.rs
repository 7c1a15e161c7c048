//! Server-side page rendering.
//!
//! Pages are dioxus components rendered to HTML strings with `dioxus-ssr`, so every piece
//! of user-supplied text is escaped by the renderer. Each submodule exposes plain functions
//! returning [`Html`] for the controllers and the error layer to send.

pub mod admin;
pub mod auth;
pub mod blog;
pub mod book;
pub mod components;
pub mod error;
pub mod home;

use axum::response::Html;
use dioxus::prelude::*;

/// Renders an element tree as a complete HTML document.
pub fn render(element: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(element)
    ))
}

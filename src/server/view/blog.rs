use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::form::BlogPostForm,
    server::{
        model::{content::FieldError, db::BlogPostModel},
        util::time::{format_datetime_local, format_display_date},
        view::{
            components::{FieldErrors, Layout},
            render,
        },
    },
};

/// One entry of a blog post listing: linked title, date and description.
#[component]
pub fn PostSummary(post: BlogPostModel) -> Element {
    let posted = format_display_date(&post.date_posted);

    rsx!(
        article {
            h3 {
                a { href: "/blog/{post.id}", "{post.title}" }
            }
            p { class: "date", "{posted}" }
            if let Some(description) = post.description.as_ref() {
                p { "{description}" }
            }
        }
    )
}

#[component]
fn BlogList(posts: Vec<BlogPostModel>) -> Element {
    rsx!(
        Layout { title: "Blog",
            h1 { "Blog" }
            if posts.is_empty() {
                p { "No posts yet." }
            }
            for post in posts.iter() {
                PostSummary { key: "{post.id}", post: post.clone() }
            }
        }
    )
}

#[component]
fn BlogPostDetail(post: BlogPostModel) -> Element {
    let posted = format_display_date(&post.date_posted);
    let paragraphs: Vec<String> = post
        .content
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(str::to_string)
        .collect();

    rsx!(
        Layout { title: post.title.clone(),
            article {
                h1 { "{post.title}" }
                p { class: "date", "{posted}" }
                if let Some(description) = post.description.as_ref() {
                    p { class: "description", "{description}" }
                }
                for (index, paragraph) in paragraphs.iter().enumerate() {
                    p { key: "{index}", "{paragraph}" }
                }
            }
            a { href: "/blog", "All posts" }
        }
    )
}

/// Create and edit form; `id` selects between the two.
#[component]
fn BlogPostFormView(id: Option<i32>, form: BlogPostForm, errors: Vec<FieldError>) -> Element {
    let (heading, action) = match id {
        Some(id) => ("Edit blog post", format!("/blog/edit/{}", id)),
        None => ("New blog post", "/blog/new".to_string()),
    };

    rsx!(
        Layout { title: heading,
            h1 { "{heading}" }
            FieldErrors { errors }
            form { method: "post", action: "{action}",
                div {
                    label { r#for: "title", "Title" }
                    input {
                        id: "title",
                        name: "title",
                        r#type: "text",
                        maxlength: "200",
                        value: "{form.title}"
                    }
                }
                div {
                    label { r#for: "description", "Description" }
                    input {
                        id: "description",
                        name: "description",
                        r#type: "text",
                        maxlength: "500",
                        value: "{form.description}"
                    }
                }
                div {
                    label { r#for: "date_posted", "Date posted (UTC, leave blank for now)" }
                    input {
                        id: "date_posted",
                        name: "date_posted",
                        r#type: "datetime-local",
                        step: "any",
                        value: "{form.date_posted}"
                    }
                }
                div {
                    label { r#for: "content", "Content" }
                    textarea { id: "content", name: "content", rows: "20", "{form.content}" }
                }
                button { r#type: "submit", "Save" }
            }
            a { href: "/admin", "Cancel" }
        }
    )
}

pub fn blog_list_page(posts: Vec<BlogPostModel>) -> Html<String> {
    render(rsx!(BlogList { posts }))
}

pub fn blog_post_page(post: BlogPostModel) -> Html<String> {
    render(rsx!(BlogPostDetail { post }))
}

/// The blog post form, pre-filled with `form` and listing `errors` if any.
pub fn blog_post_form_page(
    id: Option<i32>,
    form: BlogPostForm,
    errors: Vec<FieldError>,
) -> Html<String> {
    render(rsx!(BlogPostFormView { id, form, errors }))
}

impl From<&BlogPostModel> for BlogPostForm {
    fn from(post: &BlogPostModel) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            description: post.description.clone().unwrap_or_default(),
            date_posted: format_datetime_local(&post.date_posted),
        }
    }
}

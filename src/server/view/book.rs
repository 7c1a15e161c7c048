use axum::response::Html;
use dioxus::prelude::*;

use crate::{
    model::form::BookForm,
    server::{
        model::{content::FieldError, db::BookModel},
        util::time::format_display_date,
        view::{
            components::{FieldErrors, Layout},
            render,
        },
    },
};

/// One entry of the bookshelf: title, author, notes and when it was added.
#[component]
pub fn BookSummary(book: BookModel) -> Element {
    let added = format_display_date(&book.date_added);

    rsx!(
        article {
            h3 { "{book.title}" }
            p { class: "author", "by {book.author}" }
            if let Some(notes) = book.notes.as_ref() {
                p { "{notes}" }
            }
            p { class: "date", "Added {added}" }
        }
    )
}

#[component]
fn BookList(books: Vec<BookModel>) -> Element {
    rsx!(
        Layout { title: "Books",
            h1 { "Books" }
            if books.is_empty() {
                p { "The shelf is empty." }
            }
            for book in books.iter() {
                BookSummary { key: "{book.id}", book: book.clone() }
            }
        }
    )
}

#[component]
fn BookFormView(id: Option<i32>, form: BookForm, errors: Vec<FieldError>) -> Element {
    let (heading, action) = match id {
        Some(id) => ("Edit book", format!("/book/edit/{}", id)),
        None => ("New book", "/book/new".to_string()),
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
                    label { r#for: "author", "Author" }
                    input {
                        id: "author",
                        name: "author",
                        r#type: "text",
                        maxlength: "200",
                        value: "{form.author}"
                    }
                }
                div {
                    label { r#for: "notes", "Notes" }
                    textarea { id: "notes", name: "notes", rows: "10", "{form.notes}" }
                }
                button { r#type: "submit", "Save" }
            }
            a { href: "/admin", "Cancel" }
        }
    )
}

pub fn book_list_page(books: Vec<BookModel>) -> Html<String> {
    render(rsx!(BookList { books }))
}

/// The book form, pre-filled with `form` and listing `errors` if any.
pub fn book_form_page(id: Option<i32>, form: BookForm, errors: Vec<FieldError>) -> Html<String> {
    render(rsx!(BookFormView { id, form, errors }))
}

impl From<&BookModel> for BookForm {
    fn from(book: &BookModel) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            notes: book.notes.clone().unwrap_or_default(),
        }
    }
}

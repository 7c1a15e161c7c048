use axum::response::Html;
use dioxus::prelude::*;

use crate::server::{
    model::db::{BlogPostModel, BookModel, UserModel},
    util::time::format_display_date,
    view::{components::Layout, render},
};

/// Table row with edit and delete actions.
#[component]
fn AdminRow(
    label: String,
    detail: String,
    edit_href: String,
    delete_href: String,
) -> Element {
    rsx!(
        tr {
            td { "{label}" }
            td { "{detail}" }
            td {
                a { href: "{edit_href}", "Edit" }
            }
            td {
                form { method: "post", action: "{delete_href}",
                    button { r#type: "submit", "Delete" }
                }
            }
        }
    )
}

#[component]
fn Admin(username: String, posts: Vec<BlogPostModel>, books: Vec<BookModel>) -> Element {
    rsx!(
        Layout { title: "Admin",
            h1 { "Admin" }
            p {
                "Logged in as {username}. "
                a { href: "/logout", "Log out" }
            }
            section {
                h2 { "Blog posts" }
                a { href: "/blog/new", "New blog post" }
                table {
                    tbody {
                        for post in posts.iter() {
                            AdminRow {
                                key: "{post.id}",
                                label: post.title.clone(),
                                detail: format_display_date(&post.date_posted),
                                edit_href: format!("/blog/edit/{}", post.id),
                                delete_href: format!("/blog/delete/{}", post.id),
                            }
                        }
                    }
                }
            }
            section {
                h2 { "Books" }
                a { href: "/book/new", "New book" }
                table {
                    tbody {
                        for book in books.iter() {
                            AdminRow {
                                key: "{book.id}",
                                label: book.title.clone(),
                                detail: book.author.clone(),
                                edit_href: format!("/book/edit/{}", book.id),
                                delete_href: format!("/book/delete/{}", book.id),
                            }
                        }
                    }
                }
            }
        }
    )
}

pub fn admin_page(user: &UserModel, posts: Vec<BlogPostModel>, books: Vec<BookModel>) -> Html<String> {
    let username = user.username.clone();

    render(rsx!(Admin { username, posts, books }))
}

use axum::response::Html;
use dioxus::prelude::*;

use crate::server::{
    model::db::{BlogPostModel, BookModel},
    view::{blog::PostSummary, book::BookSummary, components::Layout, render},
};

#[component]
fn Home(posts: Vec<BlogPostModel>, books: Vec<BookModel>) -> Element {
    rsx!(
        Layout { title: "Home",
            h1 { "Inkwell" }
            section {
                h2 { "Latest posts" }
                if posts.is_empty() {
                    p { "No posts yet." }
                }
                for post in posts.iter() {
                    PostSummary { key: "{post.id}", post: post.clone() }
                }
                a { href: "/blog", "All posts" }
            }
            section {
                h2 { "Recently added books" }
                if books.is_empty() {
                    p { "The shelf is empty." }
                }
                for book in books.iter() {
                    BookSummary { key: "{book.id}", book: book.clone() }
                }
                a { href: "/books", "All books" }
            }
        }
    )
}

pub fn home_page(posts: Vec<BlogPostModel>, books: Vec<BookModel>) -> Html<String> {
    render(rsx!(Home { posts, books }))
}

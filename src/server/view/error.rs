use axum::response::Html;
use dioxus::prelude::*;

use crate::server::view::{components::Layout, render};

#[component]
fn NotFound() -> Element {
    rsx!(
        Layout { title: "Not found",
            h1 { "Not found" }
            p { "The page you were looking for does not exist." }
            a { href: "/", "Back to the home page" }
        }
    )
}

#[component]
fn InternalError() -> Element {
    rsx!(
        Layout { title: "Something went wrong",
            h1 { "Something went wrong" }
            p { "The request could not be completed. Please try again." }
            a { href: "/", "Back to the home page" }
        }
    )
}

pub fn not_found_page() -> Html<String> {
    render(rsx!(NotFound {}))
}

pub fn internal_error_page() -> Html<String> {
    render(rsx!(InternalError {}))
}

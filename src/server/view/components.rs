use dioxus::prelude::*;

use crate::server::model::content::FieldError;

/// Page head and body, [`render`](crate::server::view::render) supplies the `<html>` root.
#[component]
pub fn Layout(#[props(into)] title: String, children: Element) -> Element {
    rsx!(
        head {
            meta { charset: "utf-8" }
            meta {
                name: "viewport",
                content: "width=device-width, initial-scale=1"
            }
            title { "{title} | Inkwell" }
        }
        body {
            Navbar {}
            main {
                {children}
            }
        }
    )
}

#[component]
pub fn Navbar() -> Element {
    rsx!(
        nav {
            ul {
                li { a { href: "/", "Home" } }
                li { a { href: "/blog", "Blog" } }
                li { a { href: "/books", "Books" } }
                li { a { href: "/admin", "Admin" } }
            }
        }
    )
}

/// Lists the problems found in a submitted form, renders nothing when there are none.
#[component]
pub fn FieldErrors(errors: Vec<FieldError>) -> Element {
    if errors.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "errors", role: "alert",
            p { "Please fix the following problems:" }
            ul {
                for error in errors.iter() {
                    li { key: "{error.field}", "{error.message}" }
                }
            }
        }
    )
}

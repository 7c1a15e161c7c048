use axum::response::Html;
use dioxus::prelude::*;

use crate::server::view::{components::Layout, render};

#[component]
fn Login(error: Option<String>) -> Element {
    rsx!(
        Layout { title: "Log in",
            h1 { "Log in" }
            if let Some(error) = error.as_ref() {
                p { class: "errors", role: "alert", "{error}" }
            }
            form { method: "post", action: "/login",
                div {
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        name: "username",
                        r#type: "text",
                        autocomplete: "username"
                    }
                }
                div {
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        name: "password",
                        r#type: "password",
                        autocomplete: "current-password"
                    }
                }
                button { r#type: "submit", "Log in" }
            }
        }
    )
}

/// The login form, optionally with an error message above it.
pub fn login_page(error: Option<&str>) -> Html<String> {
    let error = error.map(str::to_string);

    render(rsx!(Login { error }))
}

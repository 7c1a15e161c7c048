use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use inkwell::{
    model::form::BookForm,
    server::{
        controller::book::{create_book, new_book_form},
        model::app::AppState,
        service::book::BookService,
    },
};
use inkwell_test_utils::prelude::*;

use crate::util::{location, TestContextExt};

#[tokio::test]
/// Expect the book stored and a redirect to the dashboard
async fn creates_book_and_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = create_book(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BookForm {
            title: " Dune ".to_string(),
            author: "Frank Herbert".to_string(),
            notes: "Spice".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin"));

    let books = BookService::new(&test.db).list(None).await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].title, "Dune");
    assert_eq!(books[0].author, "Frank Herbert");
    assert_eq!(books[0].notes.as_deref(), Some("Spice"));

    Ok(())
}

#[tokio::test]
/// Expect 422 and nothing written for a missing author
async fn rejects_missing_author() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = create_book(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BookForm {
            title: "Dune".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(test.content().count_books().await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect the empty form for a logged in admin
async fn shows_empty_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = new_book_form(admin).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

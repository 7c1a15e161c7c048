use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use inkwell::{
    model::form::BookForm,
    server::{
        controller::{
            book::{edit_book_form, update_book},
            util::content_id::ContentId,
        },
        model::app::AppState,
        service::book::BookService,
    },
};
use inkwell_test_utils::prelude::*;

use crate::util::{body_string, location, TestContextExt};

#[tokio::test]
/// Expect a blank notes field to overwrite the stored notes
async fn overwrites_notes_with_blank() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let book = test
        .content()
        .insert_book("Dune", "Frank Herbert", Some("Old notes"))
        .await?;

    let resp = update_book(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(book.id),
        Form(BookForm {
            title: "Dune".to_string(),
            author: "F. Herbert".to_string(),
            notes: String::new(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin"));

    let updated = BookService::new(&test.db).get(book.id).await.unwrap();
    assert_eq!(updated.author, "F. Herbert");
    assert!(updated.notes.is_none());
    assert_eq!(updated.date_added, book.date_added);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = update_book(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(42),
        Form(BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            notes: String::new(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the edit form pre-filled with the stored values
async fn shows_prefilled_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let book = test
        .content()
        .insert_book("Dune", "Frank Herbert", Some("Spice"))
        .await?;

    let resp = edit_book_form(State(test.to_app_state::<AppState>()), admin, ContentId(book.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Frank Herbert"));
    assert!(body.contains("Spice"));

    Ok(())
}

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Duration;
use inkwell::{
    model::form::BlogPostForm,
    server::{
        controller::{
            blog::{edit_blog_post_form, update_blog_post},
            util::content_id::ContentId,
        },
        model::app::AppState,
        service::blog_post::BlogPostService,
    },
};
use inkwell_test_utils::prelude::*;

use crate::util::{body_string, location, TestContextExt};

#[tokio::test]
/// Expect every field overwritten and a blank date to keep the stored one
async fn overwrites_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let post = test
        .content()
        .insert_blog_post_at("Old title", "Old content", Some("Old description"), factory::timestamp(0))
        .await?;

    let resp = update_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(post.id),
        Form(BlogPostForm {
            title: "New title".to_string(),
            content: "New content".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin"));

    let updated = BlogPostService::new(&test.db).get(post.id).await.unwrap();
    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New content");
    assert!(updated.description.is_none());
    assert_eq!(updated.date_posted, factory::timestamp(0));

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for an unknown ID, even with an invalid form
async fn returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = update_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(42),
        Form(BlogPostForm::default()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 422 and the stored post untouched for blank content
async fn rejects_blank_content() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let post = test
        .content()
        .insert_blog_post("Title", "Content", None)
        .await?;

    let resp = update_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(post.id),
        Form(BlogPostForm {
            title: "Changed".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let stored = BlogPostService::new(&test.db).get(post.id).await.unwrap();
    assert_eq!(stored.title, "Title");

    Ok(())
}

#[tokio::test]
/// Expect the edit form pre-filled with the stored values
async fn shows_prefilled_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let post = test
        .content()
        .insert_blog_post_at("Stored title", "Stored content", None, factory::timestamp(0))
        .await?;

    let resp = edit_blog_post_form(State(test.to_app_state::<AppState>()), admin, ContentId(post.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Stored title"));
    assert!(body.contains("2024-01-15T12:00:00"));

    Ok(())
}

#[tokio::test]
/// Expect 404 not found when editing an unknown ID
async fn form_returns_not_found_for_unknown_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = edit_blog_post_form(State(test.to_app_state::<AppState>()), admin, ContentId(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect resubmitting the prefilled form to keep a publication time with seconds
async fn untouched_date_keeps_exact_timestamp() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let later = factory::timestamp(0) + Duration::seconds(30) + Duration::milliseconds(250);
    let earlier = factory::timestamp(0) + Duration::seconds(10);
    let post = test
        .content()
        .insert_blog_post_at("A", "Content", None, later)
        .await?;
    test.content()
        .insert_blog_post_at("B", "Content", None, earlier)
        .await?;

    let resp = update_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        ContentId(post.id),
        Form(BlogPostForm {
            title: "A (typo fixed)".to_string(),
            ..BlogPostForm::from(&post)
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let posts = BlogPostService::new(&test.db).list(None).await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A (typo fixed)", "B"]);
    assert_eq!(posts[0].date_posted, later);

    Ok(())
}

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use inkwell::{
    model::form::BlogPostForm,
    server::{
        controller::blog::{create_blog_post, new_blog_post_form},
        model::app::AppState,
        service::blog_post::BlogPostService,
    },
};
use inkwell_test_utils::prelude::*;

use crate::util::{body_string, location, TestContextExt};

#[tokio::test]
/// Expect the stored post to read back exactly as submitted, timestamped now
async fn creates_post_and_redirects() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;
    let before = Utc::now().naive_utc();

    let resp = create_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BlogPostForm {
            title: "T".to_string(),
            content: "C".to_string(),
            description: "D".to_string(),
            date_posted: String::new(),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), Some("/admin"));

    let posts = BlogPostService::new(&test.db).list(None).await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].title, "T");
    assert_eq!(posts[0].content, "C");
    assert_eq!(posts[0].description.as_deref(), Some("D"));

    let drift = posts[0].date_posted - before;
    assert!(drift.num_seconds().abs() < 5);

    Ok(())
}

#[tokio::test]
/// Expect an explicit publication time to be stored as given
async fn keeps_explicit_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = create_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BlogPostForm {
            title: "Backdated".to_string(),
            content: "Content".to_string(),
            date_posted: "2024-01-15T13:00".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let posts = BlogPostService::new(&test.db).list(None).await.unwrap();
    assert_eq!(posts[0].date_posted, factory::timestamp(1));
    assert!(posts[0].description.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 422 with the submitted values re-rendered and nothing written for a blank title
async fn rejects_blank_title() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = create_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BlogPostForm {
            title: "   ".to_string(),
            content: "Draft body".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_string(resp).await;
    assert!(body.contains("Draft body"));

    assert_eq!(test.content().count_blog_posts().await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect 422 for an unparsable publication time
async fn rejects_malformed_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = create_blog_post(
        State(test.to_app_state::<AppState>()),
        admin,
        Form(BlogPostForm {
            title: "Title".to_string(),
            content: "Content".to_string(),
            date_posted: "yesterday".to_string(),
            ..Default::default()
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(test.content().count_blog_posts().await?, 0);

    Ok(())
}

#[tokio::test]
/// Expect the empty form for a logged in admin
async fn shows_empty_form() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let admin = test.admin_user().await?;

    let resp = new_blog_post_form(admin).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("New blog post"));

    Ok(())
}

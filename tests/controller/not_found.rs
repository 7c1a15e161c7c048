use axum::http::{Method, StatusCode};
use inkwell_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_string, request, session_cookie, TestContextExt};

#[tokio::test]
/// Expect the not found page for a path no route matches
async fn returns_not_found_page_for_unknown_path() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request(Method::GET, "/no/such/page", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_string(resp).await;
    assert!(body.contains("Not found"));

    Ok(())
}

#[tokio::test]
/// Expect the not found page for an unknown blog post
async fn returns_not_found_page_for_unknown_post() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;

    let resp = test
        .app()
        .oneshot(request(Method::GET, "/blog/999", None, None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect the not found page for blog post IDs that are not an i32
async fn returns_not_found_page_for_malformed_post_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let app = test.app();

    for uri in ["/blog/abc", "/blog/99999999999"] {
        let resp = app
            .clone()
            .oneshot(request(Method::GET, uri, None, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);
        let body = body_string(resp).await;
        assert!(body.contains("Not found"), "GET {}", uri);
    }

    Ok(())
}

#[tokio::test]
/// Expect the not found page for malformed IDs on admin routes once logged in
async fn returns_not_found_page_for_malformed_admin_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().with_admin().build().await?;
    let app = test.app();

    let body = format!(
        "username={}&password={}",
        TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD
    );
    let resp = app
        .clone()
        .oneshot(request(Method::POST, "/login", Some(&body), None))
        .await
        .unwrap();
    let cookie = session_cookie(&resp).unwrap();

    let requests = [
        (Method::GET, "/blog/edit/abc"),
        (Method::POST, "/blog/delete/99999999999"),
        (Method::GET, "/book/edit/abc"),
        (Method::POST, "/book/delete/abc"),
    ];

    for (method, uri) in requests {
        let resp = app
            .clone()
            .oneshot(request(method.clone(), uri, None, Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
    }

    Ok(())
}

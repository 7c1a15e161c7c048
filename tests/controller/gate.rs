//! Requests without a logged in session, sent through the full router.

use axum::http::{Method, StatusCode};
use inkwell_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{location, request, TestContextExt};

static POST_FORM: &str = "title=Changed&content=Changed";
static BOOK_FORM: &str = "title=Changed&author=Changed";

#[tokio::test]
/// Expect every admin route to redirect to login and leave the content untouched
async fn redirects_anonymous_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_content_tables()
        .with_admin()
        .with_blog_post("Title", "Content", None, factory::timestamp(0))
        .with_book("Dune", "Frank Herbert", None)
        .build()
        .await?;
    let app = test.app();

    let requests = [
        (Method::GET, "/admin", None),
        (Method::GET, "/logout", None),
        (Method::GET, "/blog/new", None),
        (Method::POST, "/blog/new", Some(POST_FORM)),
        (Method::GET, "/blog/edit/1", None),
        (Method::POST, "/blog/edit/1", Some(POST_FORM)),
        (Method::GET, "/blog/delete/1", None),
        (Method::POST, "/blog/delete/1", None),
        (Method::GET, "/book/new", None),
        (Method::POST, "/book/new", Some(BOOK_FORM)),
        (Method::GET, "/book/edit/1", None),
        (Method::POST, "/book/edit/1", Some(BOOK_FORM)),
        (Method::GET, "/book/delete/1", None),
        (Method::POST, "/book/delete/1", None),
    ];

    for (method, uri, body) in requests {
        let resp = app
            .clone()
            .oneshot(request(method.clone(), uri, body, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{} {}", method, uri);
        assert_eq!(location(&resp), Some("/login"), "{} {}", method, uri);
    }

    assert_eq!(test.content().count_blog_posts().await?, 1);
    assert_eq!(test.content().count_books().await?, 1);

    let resp = app
        .oneshot(request(Method::GET, "/blog/1", None, None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect public pages to be served without a session
async fn serves_public_pages() -> Result<(), TestError> {
    let test = TestBuilder::new().with_content_tables().build().await?;
    let app = test.app();

    for uri in ["/", "/blog", "/books", "/login"] {
        let resp = app
            .clone()
            .oneshot(request(Method::GET, uri, None, None))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK, "GET {}", uri);
    }

    Ok(())
}

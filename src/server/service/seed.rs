//! Opt-in sample content.
//!
//! Seeding never runs as part of normal startup unless enabled in the configuration, and it
//! only fills tables that are empty, so running it against a live site is harmless.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{blog_post::BlogPostRepository, book::BookRepository},
    error::Error,
    model::content::{BlogPostInput, BookInput},
};

/// Rows inserted by [`seed_sample_content`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub blog_posts: usize,
    pub books: usize,
}

fn sample_blog_posts() -> Vec<BlogPostInput> {
    vec![
        BlogPostInput {
            title: "AI in Economic Policy".to_string(),
            content: "Exploring how artificial intelligence is reshaping economic policy-making..."
                .to_string(),
            description: Some("An analysis of AI's impact on economic policy decisions".to_string()),
            date_posted: None,
        },
        BlogPostInput {
            title: "Machine Learning in Economics".to_string(),
            content: "How machine learning algorithms are transforming economic analysis..."
                .to_string(),
            description: Some("Overview of ML applications in economic research".to_string()),
            date_posted: None,
        },
    ]
}

fn sample_books() -> Vec<BookInput> {
    vec![
        BookInput {
            title: "Deep Learning".to_string(),
            author: "Ian Goodfellow, Yoshua Bengio, Aaron Courville".to_string(),
            notes: Some("Comprehensive overview of deep learning principles".to_string()),
        },
        BookInput {
            title: "Economics of AI".to_string(),
            author: "Various Authors".to_string(),
            notes: Some("Collection of papers on AI's economic implications".to_string()),
        },
    ]
}

/// Inserts the sample blog posts and books into whichever of the two tables is empty.
///
/// Runs in a single transaction.
pub async fn seed_sample_content(db: &DatabaseConnection) -> Result<SeedSummary, Error> {
    let txn = db.begin().await?;
    let mut summary = SeedSummary::default();

    let blog_post_repository = BlogPostRepository::new(&txn);
    if blog_post_repository.count().await? == 0 {
        for post in sample_blog_posts() {
            blog_post_repository.create(post).await?;
            summary.blog_posts += 1;
        }
    }

    let book_repository = BookRepository::new(&txn);
    if book_repository.count().await? == 0 {
        for book in sample_books() {
            book_repository.create(book).await?;
            summary.books += 1;
        }
    }

    txn.commit().await?;

    tracing::info!(
        blog_posts = summary.blog_posts,
        books = summary.books,
        "Seeded sample content"
    );

    Ok(summary)
}

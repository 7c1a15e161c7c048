pub use sea_orm_migration::prelude::*;

mod m20251017_000001_site_user;
mod m20251017_000002_blog_post;
mod m20251017_000003_book;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_site_user::Migration),
            Box::new(m20251017_000002_blog_post::Migration),
            Box::new(m20251017_000003_book::Migration),
        ]
    }
}

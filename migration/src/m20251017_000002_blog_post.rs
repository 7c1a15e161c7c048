use sea_orm_migration::{prelude::*, schema::*};

static IDX_BLOG_POST_DATE_POSTED: &str = "idx-blog_post-date_posted";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(string_len(BlogPost::Title, 200))
                    .col(text(BlogPost::Content))
                    .col(string_len_null(BlogPost::Description, 500))
                    .col(date_time(BlogPost::DatePosted))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_BLOG_POST_DATE_POSTED)
                    .table(BlogPost::Table)
                    .col(BlogPost::DatePosted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BLOG_POST_DATE_POSTED)
                    .table(BlogPost::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BlogPost {
    Table,
    Id,
    Title,
    Content,
    Description,
    DatePosted,
}

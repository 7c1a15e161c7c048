use sea_orm_migration::{prelude::*, schema::*};

static IDX_BOOK_DATE_ADDED: &str = "idx-book-date_added";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string_len(Book::Title, 200))
                    .col(string_len(Book::Author, 200))
                    .col(text_null(Book::Notes))
                    .col(date_time(Book::DateAdded))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_BOOK_DATE_ADDED)
                    .table(Book::Table)
                    .col(Book::DateAdded)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOK_DATE_ADDED)
                    .table(Book::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Notes,
    DateAdded,
}

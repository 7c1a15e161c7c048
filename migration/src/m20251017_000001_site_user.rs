use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteUser::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteUser::Id))
                    .col(string_len_uniq(SiteUser::Username, 80))
                    .col(string_len(SiteUser::PasswordHash, 255))
                    .col(timestamp(SiteUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SiteUser {
    Table,
    Id,
    Username,
    PasswordHash,
    CreatedAt,
}

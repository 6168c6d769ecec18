use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Title::Table)
                    .if_not_exists()
                    .col(pk_auto(Title::Id))
                    .col(string_len(Title::Name, 256))
                    .col(integer(Title::Year))
                    .col(text_null(Title::Description))
                    .col(integer_null(Title::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_category_id")
                            .from(Title::Table, Title::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_title_name")
                    .table(Title::Table)
                    .col(Title::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Title::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Title {
    Table,
    Id,
    Name,
    Year,
    Description,
    CategoryId,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_genre_table::Genre, m20260301_000004_create_title_table::Title,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TitleGenre::Table)
                    .if_not_exists()
                    .col(integer(TitleGenre::TitleId))
                    .col(integer(TitleGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(TitleGenre::TitleId)
                            .col(TitleGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_genre_title_id")
                            .from(TitleGenre::Table, TitleGenre::TitleId)
                            .to(Title::Table, Title::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_title_genre_genre_id")
                            .from(TitleGenre::Table, TitleGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TitleGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TitleGenre {
    Table,
    TitleId,
    GenreId,
}

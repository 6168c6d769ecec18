use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    genre::{CreateGenreParams, Genre, UpdateGenreParams},
    pagination::{LimitOffset, LimitOffsetPage},
};

pub struct GenreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGenreParams) -> Result<Genre, DbErr> {
        let entity = entity::genre::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Genre::from_entity(entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Genre::from_entity))
    }

    /// Gets every genre whose slug is in `slugs`. Unknown slugs are skipped.
    pub async fn find_by_slugs(&self, slugs: &[String]) -> Result<Vec<Genre>, DbErr> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Slug.is_in(slugs.iter().cloned()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    /// Gets genres ordered by name, optionally filtered by a substring of name or slug.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Genre>, DbErr> {
        let mut query = entity::prelude::Genre::find();
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::genre::Column::Name.contains(search))
                    .add(entity::genre::Column::Slug.contains(search)),
            );
        }

        let count = query.clone().count(self.db).await?;
        let entities = query
            .order_by_asc(entity::genre::Column::Name)
            .order_by_asc(entity::genre::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(LimitOffsetPage {
            items: entities.into_iter().map(Genre::from_entity).collect(),
            count,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn update(&self, id: i32, params: UpdateGenreParams) -> Result<Genre, DbErr> {
        let genre = entity::prelude::Genre::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Genre with id {} not found", id)))?;

        let mut active_model: entity::genre::ActiveModel = genre.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Genre::from_entity(entity))
    }

    /// Deletes a genre and detaches it from every title.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::TitleGenre::delete_many()
            .filter(entity::title_genre::Column::GenreId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Genre::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}

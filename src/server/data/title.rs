//! Title data repository for database operations.
//!
//! Titles are stored with a nullable category reference and a `title_genre`
//! association table. Reads load the category, the genres and the review scores
//! for a whole batch of titles at once and assemble `Title` domain models with
//! their computed rating.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    category::Category,
    genre::Genre,
    pagination::{LimitOffset, LimitOffsetPage},
    title::{self, Title, TitleRecord},
};

/// Title filter with genre and category slugs already resolved to ids.
#[derive(Debug, Clone, Default)]
pub struct ResolvedTitleFilter {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub genre_id: Option<i32>,
    pub category_id: Option<i32>,
}

pub struct TitleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a title and its genre associations in one transaction.
    ///
    /// # Returns
    /// - `Ok(Title)` - The created title with category and genres loaded
    /// - `Err(DbErr)` - Database error
    pub async fn create(&self, record: TitleRecord) -> Result<Title, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::title::ActiveModel {
            name: ActiveValue::Set(record.name),
            year: ActiveValue::Set(record.year),
            description: ActiveValue::Set(record.description),
            category_id: ActiveValue::Set(record.category_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_genres(&txn, entity.id, &record.genre_ids).await?;

        txn.commit().await?;

        self.find_by_id(entity.id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Title with id {} not found",
                entity.id
            )))
    }

    /// Overwrites every column of a title and replaces its genre set.
    pub async fn update(&self, id: i32, record: TitleRecord) -> Result<Title, DbErr> {
        let txn = self.db.begin().await?;

        let title = entity::prelude::Title::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Title with id {} not found", id)))?;

        let mut active_model: entity::title::ActiveModel = title.into();
        active_model.name = ActiveValue::Set(record.name);
        active_model.year = ActiveValue::Set(record.year);
        active_model.description = ActiveValue::Set(record.description);
        active_model.category_id = ActiveValue::Set(record.category_id);
        active_model.update(&txn).await?;

        entity::prelude::TitleGenre::delete_many()
            .filter(entity::title_genre::Column::TitleId.eq(id))
            .exec(&txn)
            .await?;
        insert_genres(&txn, id, &record.genre_ids).await?;

        txn.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Title with id {} not found", id)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Title>, DbErr> {
        let Some(entity) = entity::prelude::Title::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![entity]).await?.pop())
    }

    /// Checks whether a title with this id exists without loading its details.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Title::find_by_id(id).count(self.db).await?;

        Ok(count > 0)
    }

    /// Gets titles matching every supplied filter, ordered by name then id.
    pub async fn get_paginated(
        &self,
        filter: ResolvedTitleFilter,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Title>, DbErr> {
        let mut query = entity::prelude::Title::find();
        if let Some(name) = filter.name.as_deref() {
            query = query.filter(entity::title::Column::Name.contains(name));
        }
        if let Some(year) = filter.year {
            query = query.filter(entity::title::Column::Year.eq(year));
        }
        if let Some(category_id) = filter.category_id {
            query = query.filter(entity::title::Column::CategoryId.eq(category_id));
        }
        if let Some(genre_id) = filter.genre_id {
            let title_ids: Vec<i32> = entity::prelude::TitleGenre::find()
                .select_only()
                .column(entity::title_genre::Column::TitleId)
                .filter(entity::title_genre::Column::GenreId.eq(genre_id))
                .into_tuple()
                .all(self.db)
                .await?;
            query = query.filter(entity::title::Column::Id.is_in(title_ids));
        }

        let count = query.clone().count(self.db).await?;
        let entities = query
            .order_by_asc(entity::title::Column::Name)
            .order_by_asc(entity::title::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(LimitOffsetPage {
            items: self.load_details(entities).await?,
            count,
            limit: page.limit,
            offset: page.offset,
        })
    }

    /// Deletes a title together with its reviews, their comments and its genre links.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let review_ids: Vec<i32> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::Id)
            .filter(entity::review::Column::TitleId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !review_ids.is_empty() {
            entity::prelude::Comment::delete_many()
                .filter(entity::comment::Column::ReviewId.is_in(review_ids))
                .exec(&txn)
                .await?;
        }

        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::TitleId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::TitleGenre::delete_many()
            .filter(entity::title_genre::Column::TitleId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Title::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Loads category, genres and rating for a batch of titles, preserving order.
    async fn load_details(&self, entities: Vec<entity::title::Model>) -> Result<Vec<Title>, DbErr> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let title_ids: Vec<i32> = entities.iter().map(|title| title.id).collect();
        let category_ids: Vec<i32> = entities.iter().filter_map(|title| title.category_id).collect();

        let categories: HashMap<i32, Category> = if category_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Category::find()
                .filter(entity::category::Column::Id.is_in(category_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|category| (category.id, Category::from_entity(category)))
                .collect()
        };

        let links: Vec<(i32, i32)> = entity::prelude::TitleGenre::find()
            .select_only()
            .column(entity::title_genre::Column::TitleId)
            .column(entity::title_genre::Column::GenreId)
            .filter(entity::title_genre::Column::TitleId.is_in(title_ids.clone()))
            .into_tuple()
            .all(self.db)
            .await?;

        let genre_ids: Vec<i32> = links.iter().map(|(_, genre_id)| *genre_id).collect();
        let genres: HashMap<i32, Genre> = if genre_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Genre::find()
                .filter(entity::genre::Column::Id.is_in(genre_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|genre| (genre.id, Genre::from_entity(genre)))
                .collect()
        };

        let mut genres_by_title: HashMap<i32, Vec<Genre>> = HashMap::new();
        for (title_id, genre_id) in links {
            if let Some(genre) = genres.get(&genre_id) {
                genres_by_title
                    .entry(title_id)
                    .or_default()
                    .push(genre.clone());
            }
        }

        let scores: Vec<(i32, i32)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::TitleId)
            .column(entity::review::Column::Score)
            .filter(entity::review::Column::TitleId.is_in(title_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut scores_by_title: HashMap<i32, Vec<i32>> = HashMap::new();
        for (title_id, score) in scores {
            scores_by_title.entry(title_id).or_default().push(score);
        }

        let titles = entities
            .into_iter()
            .map(|entity| {
                let mut genres = genres_by_title.remove(&entity.id).unwrap_or_default();
                genres.sort_by(|a, b| a.name.cmp(&b.name));

                Title {
                    id: entity.id,
                    rating: title::rating(
                        scores_by_title
                            .get(&entity.id)
                            .map(Vec::as_slice)
                            .unwrap_or_default(),
                    ),
                    category: entity
                        .category_id
                        .and_then(|category_id| categories.get(&category_id).cloned()),
                    genres,
                    name: entity.name,
                    year: entity.year,
                    description: entity.description,
                }
            })
            .collect();

        Ok(titles)
    }
}

async fn insert_genres<C: ConnectionTrait>(
    db: &C,
    title_id: i32,
    genre_ids: &[i32],
) -> Result<(), DbErr> {
    for &genre_id in genre_ids {
        entity::prelude::TitleGenre::insert(entity::title_genre::ActiveModel {
            title_id: ActiveValue::Set(title_id),
            genre_id: ActiveValue::Set(genre_id),
        })
        .exec_without_returning(db)
        .await?;
    }

    Ok(())
}

//! Title service.
//!
//! Resolves category and genre slugs to rows, validates name and year, and reads
//! titles together with their computed rating.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository,
        genre::GenreRepository,
        title::{ResolvedTitleFilter, TitleRepository},
    },
    error::{validation::ValidationError, AppError},
    model::{
        pagination::{LimitOffset, LimitOffsetPage},
        title::{CreateTitleParams, Title, TitleFilter, TitleRecord, UpdateTitleParams},
    },
    util::validate,
};

pub struct TitleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets titles matching `filter`, ordered by name.
    ///
    /// A genre or category slug that matches nothing yields an empty page.
    pub async fn get_paginated(
        &self,
        filter: TitleFilter,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Title>, AppError> {
        let empty = LimitOffsetPage {
            items: Vec::new(),
            count: 0,
            limit: page.limit,
            offset: page.offset,
        };

        let genre_id = match filter.genre.as_deref() {
            Some(slug) => match GenreRepository::new(self.db).find_by_slug(slug).await? {
                Some(genre) => Some(genre.id),
                None => return Ok(empty),
            },
            None => None,
        };
        let category_id = match filter.category.as_deref() {
            Some(slug) => match CategoryRepository::new(self.db).find_by_slug(slug).await? {
                Some(category) => Some(category.id),
                None => return Ok(empty),
            },
            None => None,
        };

        let resolved = ResolvedTitleFilter {
            name: filter.name,
            year: filter.year,
            genre_id,
            category_id,
        };

        Ok(TitleRepository::new(self.db)
            .get_paginated(resolved, page)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Title, AppError> {
        TitleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a title.
    ///
    /// # Returns
    /// - `Ok(Title)` - The created title
    /// - `Err(AppError::ValidationErr)` - Blank or too long name, or a year in the future
    /// - `Err(AppError::NotFound)` - Unknown category or genre slug
    pub async fn create(&self, params: CreateTitleParams) -> Result<Title, AppError> {
        let mut errors = ValidationError::new();
        validate::collect(&mut errors, validate::name("name", &params.name));
        validate::collect(&mut errors, validate::year(params.year));
        errors.into_result()?;

        let category_id = match params.category.as_deref() {
            Some(slug) => Some(self.resolve_category(slug).await?),
            None => None,
        };
        let genre_ids = self.resolve_genres(&params.genres).await?;

        let title = TitleRepository::new(self.db)
            .create(TitleRecord {
                name: params.name,
                year: params.year,
                description: params.description,
                category_id,
                genre_ids,
            })
            .await?;
        tracing::info!("Created title '{}' ({})", title.name, title.id);

        Ok(title)
    }

    /// Applies a partial update; a supplied genre list replaces the current one.
    ///
    /// An explicit `null` category or description clears it, an absent one is kept.
    pub async fn update(&self, id: i32, params: UpdateTitleParams) -> Result<Title, AppError> {
        let repo = TitleRepository::new(self.db);
        let title = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let mut errors = ValidationError::new();
        if let Some(name) = &params.name {
            validate::collect(&mut errors, validate::name("name", name));
        }
        if let Some(year) = params.year {
            validate::collect(&mut errors, validate::year(year));
        }
        errors.into_result()?;

        let category_id = match params.category {
            Some(Some(slug)) => Some(self.resolve_category(&slug).await?),
            Some(None) => None,
            None => title.category.as_ref().map(|category| category.id),
        };
        let genre_ids = match &params.genres {
            Some(slugs) => self.resolve_genres(slugs).await?,
            None => title.genres.iter().map(|genre| genre.id).collect(),
        };

        let record = TitleRecord {
            name: params.name.unwrap_or(title.name),
            year: params.year.unwrap_or(title.year),
            description: params.description.unwrap_or(title.description),
            category_id,
            genre_ids,
        };

        Ok(repo.update(id, record).await?)
    }

    /// Deletes a title with its reviews and their comments.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TitleRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(not_found(id));
        }

        repo.delete(id).await?;
        tracing::info!("Deleted title {}", id);

        Ok(())
    }

    async fn resolve_category(&self, slug: &str) -> Result<i32, AppError> {
        CategoryRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .map(|category| category.id)
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", slug)))
    }

    /// Resolves genre slugs to ids, ignoring repeats.
    async fn resolve_genres(&self, slugs: &[String]) -> Result<Vec<i32>, AppError> {
        let mut unique: Vec<String> = Vec::with_capacity(slugs.len());
        for slug in slugs {
            if !unique.contains(slug) {
                unique.push(slug.clone());
            }
        }

        let genres = GenreRepository::new(self.db).find_by_slugs(&unique).await?;
        if let Some(missing) = unique
            .iter()
            .find(|slug| !genres.iter().any(|genre| &genre.slug == *slug))
        {
            return Err(AppError::NotFound(format!("Genre '{}' not found", missing)));
        }

        Ok(genres.into_iter().map(|genre| genre.id).collect())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Title {} not found", id))
}

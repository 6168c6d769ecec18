//! Genre service: catalog genres addressed by slug.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::genre::GenreRepository,
    error::{is_unique_violation, validation::ValidationError, AppError},
    model::{
        genre::{Genre, CreateGenreParams, UpdateGenreParams},
        pagination::{LimitOffset, LimitOffsetPage},
    },
    util::validate,
};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Genre>, AppError> {
        let repo = GenreRepository::new(self.db);

        Ok(repo.get_paginated(search, page).await?)
    }

    /// Gets a genre by slug.
    ///
    /// # Returns
    /// - `Ok(Genre)` - The genre
    /// - `Err(AppError::NotFound)` - No genre with this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Genre, AppError> {
        GenreRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Creates a genre after validating its name and slug.
    pub async fn create(&self, params: CreateGenreParams) -> Result<Genre, AppError> {
        let repo = GenreRepository::new(self.db);

        let mut errors = ValidationError::new();
        validate::collect(&mut errors, validate::name("name", &params.name));
        validate::collect(&mut errors, validate::slug(&params.slug));
        if !errors.has_field("slug") && repo.find_by_slug(&params.slug).await?.is_some() {
            errors.add("slug", "Genre with this slug already exists.");
        }
        errors.into_result()?;

        let genre = repo.create(params).await.map_err(slug_taken)?;
        tracing::info!("Created genre '{}'", genre.slug);

        Ok(genre)
    }

    /// Applies a partial update to the genre currently at `slug`.
    pub async fn update(
        &self,
        slug: &str,
        params: UpdateGenreParams,
    ) -> Result<Genre, AppError> {
        let repo = GenreRepository::new(self.db);
        let genre = repo.find_by_slug(slug).await?.ok_or_else(|| not_found(slug))?;

        let mut errors = ValidationError::new();
        if let Some(name) = &params.name {
            validate::collect(&mut errors, validate::name("name", name));
        }
        if let Some(new_slug) = &params.slug {
            validate::collect(&mut errors, validate::slug(new_slug));
            if !errors.has_field("slug")
                && new_slug != &genre.slug
                && repo.find_by_slug(new_slug).await?.is_some()
            {
                errors.add("slug", "Genre with this slug already exists.");
            }
        }
        errors.into_result()?;

        repo.update(genre.id, params).await.map_err(slug_taken)
    }

    /// Deletes the genre and detaches it from its titles.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let repo = GenreRepository::new(self.db);
        let genre = repo.find_by_slug(slug).await?.ok_or_else(|| not_found(slug))?;

        repo.delete(genre.id).await?;
        tracing::info!("Deleted genre '{}'", genre.slug);

        Ok(())
    }
}

fn not_found(slug: &str) -> AppError {
    AppError::NotFound(format!("Genre '{}' not found", slug))
}

fn slug_taken(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationError::field("slug", "Genre with this slug already exists.").into()
    } else {
        err.into()
    }
}

//! Category service: catalog categories addressed by slug.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository,
    error::{is_unique_violation, validation::ValidationError, AppError},
    model::{
        category::{Category, CreateCategoryParams, UpdateCategoryParams},
        pagination::{LimitOffset, LimitOffsetPage},
    },
    util::validate,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_paginated(search, page).await?)
    }

    /// Gets a category by slug.
    ///
    /// # Returns
    /// - `Ok(Category)` - The category
    /// - `Err(AppError::NotFound)` - No category with this slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, AppError> {
        CategoryRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    /// Creates a category after validating its name and slug.
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let mut errors = ValidationError::new();
        validate::collect(&mut errors, validate::name("name", &params.name));
        validate::collect(&mut errors, validate::slug(&params.slug));
        if !errors.has_field("slug") && repo.find_by_slug(&params.slug).await?.is_some() {
            errors.add("slug", "Category with this slug already exists.");
        }
        errors.into_result()?;

        let category = repo.create(params).await.map_err(slug_taken)?;
        tracing::info!("Created category '{}'", category.slug);

        Ok(category)
    }

    /// Applies a partial update to the category currently at `slug`.
    pub async fn update(
        &self,
        slug: &str,
        params: UpdateCategoryParams,
    ) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);
        let category = repo.find_by_slug(slug).await?.ok_or_else(|| not_found(slug))?;

        let mut errors = ValidationError::new();
        if let Some(name) = &params.name {
            validate::collect(&mut errors, validate::name("name", name));
        }
        if let Some(new_slug) = &params.slug {
            validate::collect(&mut errors, validate::slug(new_slug));
            if !errors.has_field("slug")
                && new_slug != &category.slug
                && repo.find_by_slug(new_slug).await?.is_some()
            {
                errors.add("slug", "Category with this slug already exists.");
            }
        }
        errors.into_result()?;

        repo.update(category.id, params).await.map_err(slug_taken)
    }

    /// Deletes the category; its titles remain without a category.
    pub async fn delete(&self, slug: &str) -> Result<(), AppError> {
        let repo = CategoryRepository::new(self.db);
        let category = repo.find_by_slug(slug).await?.ok_or_else(|| not_found(slug))?;

        repo.delete(category.id).await?;
        tracing::info!("Deleted category '{}'", category.slug);

        Ok(())
    }
}

fn not_found(slug: &str) -> AppError {
    AppError::NotFound(format!("Category '{}' not found", slug))
}

fn slug_taken(err: sea_orm::DbErr) -> AppError {
    if is_unique_violation(&err) {
        ValidationError::field("slug", "Category with this slug already exists.").into()
    } else {
        err.into()
    }
}

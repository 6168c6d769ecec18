use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::{
    category::{Category, CreateCategoryParams, UpdateCategoryParams},
    pagination::{LimitOffset, LimitOffsetPage},
};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, DbErr> {
        let entity = entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(params.slug),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Category::from_entity(entity))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, DbErr> {
        let entity = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await?;

        Ok(entity.map(Category::from_entity))
    }

    /// Gets categories ordered by name, optionally filtered by a substring of
    /// name or slug.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: LimitOffset,
    ) -> Result<LimitOffsetPage<Category>, DbErr> {
        let mut query = entity::prelude::Category::find();
        if let Some(search) = search {
            query = query.filter(
                Condition::any()
                    .add(entity::category::Column::Name.contains(search))
                    .add(entity::category::Column::Slug.contains(search)),
            );
        }

        let count = query.clone().count(self.db).await?;
        let entities = query
            .order_by_asc(entity::category::Column::Name)
            .order_by_asc(entity::category::Column::Id)
            .offset(page.offset)
            .limit(page.limit)
            .all(self.db)
            .await?;

        Ok(LimitOffsetPage {
            items: entities.into_iter().map(Category::from_entity).collect(),
            count,
            limit: page.limit,
            offset: page.offset,
        })
    }

    pub async fn update(&self, id: i32, params: UpdateCategoryParams) -> Result<Category, DbErr> {
        let category = entity::prelude::Category::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                id
            )))?;

        let mut active_model: entity::category::ActiveModel = category.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(slug) = params.slug {
            active_model.slug = ActiveValue::Set(slug);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Category::from_entity(entity))
    }

    /// Deletes a category; titles in it keep existing with no category.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Title::update_many()
            .col_expr(
                entity::title::Column::CategoryId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::title::Column::CategoryId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Category::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }
}

//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, profile updates, lookups used by the uniqueness rules, and
//! paginated listing, converting entity models to domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    pagination::{NumberedPage, PageNumber},
    user::{CreateUserParams, Role, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            role: ActiveValue::Set(params.role),
            bio: ActiveValue::Set(params.bio),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            is_staff: ActiveValue::Set(params.is_staff),
            is_superuser: ActiveValue::Set(params.is_superuser),
            date_joined: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds the user registered with exactly this username and email pair.
    ///
    /// Used by signup to make repeated requests with the same pair idempotent.
    pub async fn find_by_username_and_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any user with admin role or staff/superuser flag exists.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Role.eq(Role::Admin))
                    .add(entity::user::Column::IsStaff.eq(true))
                    .add(entity::user::Column::IsSuperuser.eq(true)),
            )
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets users ordered by username, optionally filtered by a username substring.
    ///
    /// # Arguments
    /// - `search` - Substring the username must contain
    /// - `page` - Requested page
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: PageNumber,
    ) -> Result<NumberedPage<User>, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(search) = search {
            query = query.filter(entity::user::Column::Username.contains(search));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, page.per_page.max(1));

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.index()).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok(NumberedPage::new(users, total, page))
    }

    /// Applies a partial update to a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No user with this id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, DbErr> {
        let user = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(bio) = params.bio {
            active_model.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(Some(first_name));
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(Some(last_name));
        }

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }
}

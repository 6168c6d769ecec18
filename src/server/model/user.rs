//! User domain models and parameters.
//!
//! Provides the user domain model with its role and derived permission tier, and
//! the parameter types for signup, admin creation and profile updates.

use chrono::{DateTime, Utc};

pub use entity::user::Role;

use crate::{
    model::user::{CreateUserDto, RoleDto, UpdateUserDto, UserDto},
    server::model::permission::Tier,
};

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Staff users are treated as admins regardless of role.
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_staff || self.is_superuser
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    /// Permission tier derived from role and flags.
    pub fn tier(&self) -> Tier {
        if self.is_admin() {
            Tier::Admin
        } else if self.is_moderator() {
            Tier::Moderator
        } else {
            Tier::User
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            bio: self.bio,
            role: self.role.into(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            role: entity.role,
            bio: entity.bio,
            first_name: entity.first_name,
            last_name: entity.last_name,
            is_staff: entity.is_staff,
            is_superuser: entity.is_superuser,
            date_joined: entity.date_joined,
        }
    }
}

impl From<Role> for RoleDto {
    fn from(role: Role) -> Self {
        match role {
            Role::User => RoleDto::User,
            Role::Moderator => RoleDto::Moderator,
            Role::Admin => RoleDto::Admin,
        }
    }
}

impl From<RoleDto> for Role {
    fn from(role: RoleDto) -> Self {
        match role {
            RoleDto::User => Role::User,
            RoleDto::Moderator => Role::Moderator,
            RoleDto::Admin => Role::Admin,
        }
    }
}

/// Parameters for inserting a user, by signup or by an admin.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub role: Role,
    pub bio: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_staff: bool,
    pub is_superuser: bool,
}

impl CreateUserParams {
    /// Parameters for a self-registered user with the default role.
    pub fn signup(username: String, email: String) -> Self {
        Self {
            username,
            email,
            role: Role::User,
            bio: None,
            first_name: None,
            last_name: None,
            is_staff: false,
            is_superuser: false,
        }
    }

    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_string(),
            role: dto.role.map(Role::from).unwrap_or(Role::User),
            bio: dto.bio,
            first_name: dto.first_name,
            last_name: dto.last_name,
            is_staff: false,
            is_superuser: false,
        }
    }
}

/// Partial update of a user; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub bio: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    /// Update requested by an admin; every field is honored.
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username.map(|username| username.trim().to_string()),
            email: dto.email.map(|email| email.trim().to_string()),
            role: dto.role.map(Role::from),
            bio: dto.bio,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }

    /// Update of the requester's own record; the role is dropped.
    pub fn from_self_dto(dto: UpdateUserDto) -> Self {
        Self {
            role: None,
            ..Self::from_dto(dto)
        }
    }
}

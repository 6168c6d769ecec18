//! Domain & parameter models for category operations

use crate::model::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            name: self.name,
            slug: self.slug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub slug: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            slug: dto.slug.trim().to_string(),
        }
    }
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(dto: UpdateCategoryDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            slug: dto.slug.map(|slug| slug.trim().to_string()),
        }
    }
}

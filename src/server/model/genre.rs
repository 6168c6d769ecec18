//! Domain & parameter models for genre operations

use crate::model::genre::{CreateGenreDto, GenreDto, UpdateGenreDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
    pub slug: String,
}

impl Genre {
    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
        }
    }

    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            name: self.name,
            slug: self.slug,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGenreParams {
    pub name: String,
    pub slug: String,
}

impl CreateGenreParams {
    pub fn from_dto(dto: CreateGenreDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            slug: dto.slug.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGenreParams {
    pub name: Option<String>,
    pub slug: Option<String>,
}

impl UpdateGenreParams {
    pub fn from_dto(dto: UpdateGenreDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            slug: dto.slug.map(|slug| slug.trim().to_string()),
        }
    }
}

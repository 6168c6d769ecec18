//! Domain & parameter models for title operations
//!
//! A title carries its resolved category and genres plus the rating computed
//! from its reviews.

use crate::{
    model::title::{CreateTitleDto, TitleDto, UpdateTitleDto},
    server::model::{category::Category, genre::Genre},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub id: i32,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    /// Average review score, `None` without reviews.
    pub rating: Option<f64>,
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
}

impl Title {
    pub fn into_dto(self) -> TitleDto {
        TitleDto {
            id: self.id,
            name: self.name,
            year: self.year,
            description: self.description,
            rating: self.rating,
            category: self.category.map(Category::into_dto),
            genre: self.genres.into_iter().map(Genre::into_dto).collect(),
        }
    }
}

/// Optional filters for listing titles. All supplied filters must match.
#[derive(Debug, Clone, Default)]
pub struct TitleFilter {
    /// Substring of the title name.
    pub name: Option<String>,
    pub year: Option<i32>,
    /// Slug of a genre the title must have.
    pub genre: Option<String>,
    /// Slug of the title's category.
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateTitleParams {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category: Option<String>,
    pub genres: Vec<String>,
}

impl CreateTitleParams {
    pub fn from_dto(dto: CreateTitleDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            year: dto.year,
            description: dto.description,
            category: dto.category,
            genres: dto.genre,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateTitleParams {
    pub name: Option<String>,
    pub year: Option<i32>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    /// `Some(None)` removes the title from its category.
    pub category: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
}

impl UpdateTitleParams {
    pub fn from_dto(dto: UpdateTitleDto) -> Self {
        Self {
            name: dto.name.map(|name| name.trim().to_string()),
            year: dto.year,
            description: dto.description,
            category: dto.category,
            genres: dto.genre,
        }
    }
}

/// Title columns as written by the repository, after slugs are resolved to ids.
#[derive(Debug, Clone)]
pub struct TitleRecord {
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub genre_ids: Vec<i32>,
}

/// Average of review scores, `None` for a title without reviews.
pub fn rating(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let total: i64 = scores.iter().map(|&score| i64::from(score)).sum();
    Some(total as f64 / scores.len() as f64)
}

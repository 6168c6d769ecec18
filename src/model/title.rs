use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::model::{category::CategoryDto, genre::GenreDto};

/// Title as returned by list and retrieve, with its computed rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TitleDto {
    pub id: i32,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    /// Average review score, `null` when the title has no reviews.
    pub rating: Option<f64>,
    pub category: Option<CategoryDto>,
    pub genre: Vec<GenreDto>,
}

/// Body for creating a title. `category` and `genre` reference slugs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTitleDto {
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub genre: Vec<String>,
}

/// Partial update of a title. A supplied `genre` list replaces the current one.
///
/// `description` and `category` distinguish an absent field (`None`, keep) from an
/// explicit `null` (`Some(None)`, clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTitleDto {
    pub name: Option<String>,
    pub year: Option<i32>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>)]
    pub category: Option<Option<String>>,
    pub genre: Option<Vec<String>>,
}

/// Wraps a field that is present in the body, `null` included, in `Some`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

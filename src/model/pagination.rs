use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page of results selected with `?limit=&offset=`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LimitOffsetPageDto<T> {
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
    pub results: Vec<T>,
}

/// Page of results selected with `?page=` (1-based).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NumberedPageDto<T> {
    pub count: u64,
    pub page: u64,
    pub total_pages: u64,
    pub results: Vec<T>,
}

//! Query string parameters shared by list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::model::pagination::{LimitOffset, PageNumber};

/// `?search=&limit=&offset=` for catalog lists.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogListQuery {
    /// Substring of the name or slug.
    pub search: Option<String>,
    /// Maximum number of results (default: `PAGE_SIZE`).
    pub limit: Option<u64>,
    /// Number of results to skip (default: 0).
    pub offset: Option<u64>,
}

impl CatalogListQuery {
    pub fn page(&self, page_size: u64) -> LimitOffset {
        limit_offset(self.limit, self.offset, page_size)
    }
}

/// `?page=` for page-numbered lists.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number (default: 1).
    pub page: Option<u64>,
}

impl PageQuery {
    pub fn page(&self, page_size: u64) -> PageNumber {
        PageNumber {
            page: self.page.unwrap_or(1).max(1),
            per_page: page_size,
        }
    }
}

/// `?search=&page=` for the admin user list.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserListQuery {
    /// Substring of the username.
    pub search: Option<String>,
    /// 1-based page number (default: 1).
    pub page: Option<u64>,
}

impl UserListQuery {
    pub fn page(&self, page_size: u64) -> PageNumber {
        PageNumber {
            page: self.page.unwrap_or(1).max(1),
            per_page: page_size,
        }
    }
}

pub fn limit_offset(limit: Option<u64>, offset: Option<u64>, page_size: u64) -> LimitOffset {
    LimitOffset {
        limit: limit.filter(|limit| *limit > 0).unwrap_or(page_size),
        offset: offset.unwrap_or(0),
    }
}

/// Treats an empty `search` parameter as absent.
pub fn search_term(search: &Option<String>) -> Option<&str> {
    search.as_deref().map(str::trim).filter(|term| !term.is_empty())
}

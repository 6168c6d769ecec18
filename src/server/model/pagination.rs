//! Pagination requests and pages returned by list operations.
//!
//! Catalog lists (categories, genres, titles) page with limit/offset; reviews,
//! comments and users page by 1-based page number.

use crate::model::pagination::{LimitOffsetPageDto, NumberedPageDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    pub limit: u64,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LimitOffsetPage<T> {
    pub items: Vec<T>,
    /// Total number of matching rows across all pages.
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
}

impl<T> LimitOffsetPage<T> {
    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> LimitOffsetPageDto<D> {
        LimitOffsetPageDto {
            count: self.count,
            limit: self.limit,
            offset: self.offset,
            results: self.items.into_iter().map(convert).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber {
    /// 1-based page number; values below 1 are treated as 1.
    pub page: u64,
    pub per_page: u64,
}

impl PageNumber {
    /// Zero-based page index as used by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page.max(1) - 1
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberedPage<T> {
    pub items: Vec<T>,
    pub count: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl<T> NumberedPage<T> {
    /// Builds a page from a paginator result, deriving the page count.
    pub fn new(items: Vec<T>, count: u64, request: PageNumber) -> Self {
        let per_page = request.per_page.max(1);

        Self {
            items,
            count,
            page: request.page.max(1),
            total_pages: count.div_ceil(per_page),
        }
    }

    pub fn map<U>(self, convert: impl FnMut(T) -> U) -> NumberedPage<U> {
        NumberedPage {
            items: self.items.into_iter().map(convert).collect(),
            count: self.count,
            page: self.page,
            total_pages: self.total_pages,
        }
    }

    pub fn into_dto<D>(self, convert: impl FnMut(T) -> D) -> NumberedPageDto<D> {
        NumberedPageDto {
            count: self.count,
            page: self.page,
            total_pages: self.total_pages,
            results: self.items.into_iter().map(convert).collect(),
        }
    }
}

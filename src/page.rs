//! Page requests, sort keys, and page results.

use sea_orm::Order;
use sea_orm::sea_query::{NullOrdering, SimpleExpr};
use sea_orm::IntoSimpleExpr;
use serde::Serialize;

use crate::error::QueryError;

/// One sort criterion: an expression, a direction, and an optional explicit
/// null placement. Keys are applied in declared order as a strict
/// lexicographic ordering.
#[derive(Debug, Clone)]
pub struct SortKey {
    pub(crate) expr: SimpleExpr,
    pub(crate) order: Order,
    pub(crate) nulls: Option<NullOrdering>,
}

impl SortKey {
    pub fn asc<C: IntoSimpleExpr>(col: C) -> Self {
        Self {
            expr: col.into_simple_expr(),
            order: Order::Asc,
            nulls: None,
        }
    }

    pub fn desc<C: IntoSimpleExpr>(col: C) -> Self {
        Self {
            expr: col.into_simple_expr(),
            order: Order::Desc,
            nulls: None,
        }
    }

    /// Place rows with a null sort value before all non-null values.
    #[must_use]
    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrdering::First);
        self
    }

    /// Place rows with a null sort value after all non-null values,
    /// regardless of direction.
    #[must_use]
    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrdering::Last);
        self
    }
}

/// A zero-based page index, a page size, and an ordered list of sort keys.
///
/// Construction validates the page size up front so an invalid request never
/// reaches the store.
#[derive(Debug, Clone)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
    pub sort: Vec<SortKey>,
}

impl PageRequest {
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPageSize`] when `per_page` is zero.
    pub fn new(page: u64, per_page: u64) -> Result<Self, QueryError> {
        if per_page == 0 {
            return Err(QueryError::InvalidPageSize(per_page));
        }
        Ok(Self {
            page,
            per_page,
            sort: Vec::new(),
        })
    }

    /// Appends a sort key; earlier keys take precedence.
    #[must_use]
    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort.push(key);
        self
    }

    #[must_use]
    pub fn page(&self) -> u64 {
        self.page
    }

    #[must_use]
    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Row offset of the first row on this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.page * self.per_page
    }
}

/// One page of content plus the total number of rows matching the predicate
/// across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageResult<T> {
    pub content: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl<T> PageResult<T> {
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            content: self.content.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}

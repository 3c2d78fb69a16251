//! The reusable base query and the three pagination strategies.
//!
//! A [`PagedQuery`] wraps a caller-built base select — projection, left join,
//! and composed condition already applied — and derives everything else from
//! it: the sorted full fetch, the page fetch, and the scalar count. Content
//! and count therefore always agree on predicate and join graph.

use sea_orm::sea_query::{Alias, Asterisk, Expr, SelectStatement, SimpleExpr};
use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, Iterable, PaginatorTrait, PrimaryKeyToColumn,
    QueryOrder, QuerySelect, QueryTrait, Select,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::QueryError;
use crate::page::{PageRequest, PageResult, SortKey};

/// How page content and total count are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationStrategy {
    /// One paginated fetch through the engine's paginator facility. The
    /// engine counts over the full selected projection, which is fine for
    /// simple queries and wasteful for wide joins.
    Combined,
    /// Content query plus a separately issued count query with a trivial
    /// primary-key projection.
    Split,
    /// Like [`Split`](Self::Split), but the count query is skipped when the
    /// fetched page proves the total on its own. See [`count_required`].
    #[default]
    SplitOptimized,
}

/// Whether a separate count query is needed for a fetched page.
///
/// The count is provably unnecessary only when the *first* page came back
/// short: the content then is the entire matching set and the total equals
/// the number of rows fetched. A full first page or any non-zero offset may
/// hide further rows, so the count must be issued.
#[must_use]
pub fn count_required(offset: u64, fetched: usize, per_page: u64) -> bool {
    offset > 0 || fetched as u64 >= per_page
}

/// A base select plus a pagination strategy.
#[derive(Debug, Clone)]
pub struct PagedQuery<E: EntityTrait> {
    base: Select<E>,
    strategy: PaginationStrategy,
}

impl<E: EntityTrait> PagedQuery<E> {
    /// Wraps a base select. The default strategy is
    /// [`PaginationStrategy::SplitOptimized`].
    pub fn new(base: Select<E>) -> Self {
        Self {
            base,
            strategy: PaginationStrategy::default(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: PaginationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Every matching row, sorted, without pagination.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`QueryError::Db`].
    pub async fn fetch_all<M, C>(&self, db: &C, sort: &[SortKey]) -> Result<Vec<M>, QueryError>
    where
        M: FromQueryResult + Send + Sync,
        C: ConnectionTrait,
    {
        let rows = apply_sort(self.base.clone(), sort)
            .into_model::<M>()
            .all(db)
            .await?;
        Ok(rows)
    }

    /// One page of rows plus the total matching count, per the configured
    /// strategy. All strategies return identical results for identical input.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`QueryError::Db`].
    pub async fn fetch_page<M, C>(
        &self,
        db: &C,
        page: &PageRequest,
    ) -> Result<PageResult<M>, QueryError>
    where
        M: FromQueryResult + Send + Sync,
        C: ConnectionTrait,
    {
        let (content, total) = match self.strategy {
            PaginationStrategy::Combined => {
                let paginator = apply_sort(self.base.clone(), &page.sort)
                    .into_model::<M>()
                    .paginate(db, page.per_page());
                let total = paginator.num_items().await?;
                let content = paginator.fetch_page(page.page()).await?;
                (content, total)
            }
            PaginationStrategy::Split => {
                let content = self.page_content(db, page).await?;
                let total = self.fetch_total(db).await?;
                (content, total)
            }
            PaginationStrategy::SplitOptimized => {
                let content: Vec<M> = self.page_content(db, page).await?;
                let total = if count_required(page.offset(), content.len(), page.per_page()) {
                    self.fetch_total(db).await?
                } else {
                    debug!(
                        fetched = content.len(),
                        per_page = page.per_page(),
                        "count query skipped, first page is exhaustive"
                    );
                    content.len() as u64
                };
                (content, total)
            }
        };
        Ok(PageResult {
            content,
            total,
            page: page.page(),
            per_page: page.per_page(),
        })
    }

    /// Issues the simplified count query: same predicate and joins as the
    /// base select, scalar `COUNT` projection, no ordering or paging.
    ///
    /// # Errors
    ///
    /// Propagates store failures as [`QueryError::Db`].
    pub async fn fetch_total<C: ConnectionTrait>(&self, db: &C) -> Result<u64, QueryError> {
        let stmt = self.count_statement();
        debug!("issuing count query");
        let row = db.query_one(db.get_database_backend().build(&stmt)).await?;
        let total = match row {
            Some(row) => u64::try_from(row.try_get::<i64>("", "num_rows")?).unwrap_or(0),
            None => 0,
        };
        Ok(total)
    }

    async fn page_content<M, C>(&self, db: &C, page: &PageRequest) -> Result<Vec<M>, QueryError>
    where
        M: FromQueryResult + Send + Sync,
        C: ConnectionTrait,
    {
        let rows = apply_sort(self.base.clone(), &page.sort)
            .offset(page.offset())
            .limit(page.per_page())
            .into_model::<M>()
            .all(db)
            .await?;
        Ok(rows)
    }

    fn count_statement(&self) -> SelectStatement {
        let mut stmt = self.base.clone().into_query();
        stmt.reset_limit();
        stmt.reset_offset();
        stmt.clear_order_by();
        stmt.clear_selects();
        stmt.expr_as(count_column::<E>(), Alias::new("num_rows"));
        stmt
    }
}

/// `COUNT` over the entity's primary key, falling back to `COUNT(*)` when no
/// primary key column is available.
fn count_column<E: EntityTrait>() -> SimpleExpr {
    match E::PrimaryKey::iter().next() {
        Some(pk) => Expr::col((E::default(), pk.into_column())).count(),
        None => Expr::col(Asterisk).count(),
    }
}

fn apply_sort<E: EntityTrait>(mut query: Select<E>, keys: &[SortKey]) -> Select<E> {
    for key in keys {
        query = match key.nulls {
            Some(nulls) => query.order_by_with_nulls(key.expr.clone(), key.order.clone(), nulls),
            None => query.order_by(key.expr.clone(), key.order.clone()),
        };
    }
    query
}

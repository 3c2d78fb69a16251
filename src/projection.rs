//! Explicitly aliased projections over joined selects.
//!
//! Columns selected across a join frequently collide on name (both sides of a
//! detail/parent join tend to carry `id` and `name`). A [`Projection`] makes
//! the aliasing explicit so the flat result record maps by alias, never by
//! position. Row decoding itself is Sea-ORM's `FromQueryResult` on the
//! caller's record type — one fixed mapping per type.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{EntityTrait, IntoSimpleExpr, QuerySelect, Select};

use crate::error::QueryError;

/// An ordered list of `(expression, alias)` pairs applied to a select as its
/// only selected columns.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    columns: Vec<(SimpleExpr, String)>,
}

impl Projection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `col` under `alias`. Joined columns from either entity are
    /// accepted; the join itself must already exist on the base select.
    #[must_use]
    pub fn column_as<C: IntoSimpleExpr>(mut self, col: C, alias: impl Into<String>) -> Self {
        self.columns.push((col.into_simple_expr(), alias.into()));
        self
    }

    /// Replaces the select list of `select` with this projection.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::DuplicateAlias`] when two columns were bound to
    /// the same alias.
    pub fn apply<E: EntityTrait>(&self, select: Select<E>) -> Result<Select<E>, QueryError> {
        for (i, (_, alias)) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|(_, seen)| seen == alias) {
                return Err(QueryError::DuplicateAlias(alias.clone()));
            }
        }
        let mut out = select.select_only();
        for (expr, alias) in &self.columns {
            out = out.column_as(expr.clone(), alias.as_str());
        }
        Ok(out)
    }
}

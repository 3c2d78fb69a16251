//! Optional filter terms and their AND-composition.
//!
//! Every helper here maps one *optional* search field to an optional predicate
//! term: `None` means the field carried no constraint and contributes nothing
//! to the final condition. Collect the terms and fold them with [`and_all`]:
//!
//! ```rust,ignore
//! let condition = and_all([
//!     text_eq(member::Column::Username, cond.username.as_deref()),
//!     text_eq(team::Column::Name, cond.team_name.as_deref()),
//!     goe(member::Column::Age, cond.age_goe),
//!     loe(member::Column::Age, cond.age_loe),
//! ]);
//! ```
//!
//! An empty (or all-`None`) term list composes to `Condition::all()`, which
//! renders no `WHERE` clause and matches every row.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, Condition, Value};

/// Equality term for a text field.
///
/// Blank input (empty or whitespace-only) counts as absent, so an unset form
/// field is never mistaken for a filter on the empty string.
pub fn text_eq<C: ColumnTrait>(col: C, value: Option<&str>) -> Option<SimpleExpr> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(col.eq(v)),
        _ => None,
    }
}

/// Equality term for a non-text field.
pub fn eq<C, V>(col: C, value: Option<V>) -> Option<SimpleExpr>
where
    C: ColumnTrait,
    V: Into<Value>,
{
    value.map(|v| col.eq(v))
}

/// Lower-bound term (`col >= value`).
pub fn goe<C, V>(col: C, value: Option<V>) -> Option<SimpleExpr>
where
    C: ColumnTrait,
    V: Into<Value>,
{
    value.map(|v| col.gte(v))
}

/// Upper-bound term (`col <= value`).
pub fn loe<C, V>(col: C, value: Option<V>) -> Option<SimpleExpr>
where
    C: ColumnTrait,
    V: Into<Value>,
{
    value.map(|v| col.lte(v))
}

/// Range term built from two independently optional bounds.
///
/// Each bound is null-checked on its own: one missing bound degrades to the
/// single remaining comparison, both missing yields no term at all.
pub fn between<C, V>(col: C, lower: Option<V>, upper: Option<V>) -> Option<SimpleExpr>
where
    C: ColumnTrait + Copy,
    V: Into<Value>,
{
    match (goe(col, lower), loe(col, upper)) {
        (Some(lo), Some(hi)) => Some(lo.and(hi)),
        (lo, None) => lo,
        (None, hi) => hi,
    }
}

/// Membership term (`col IN (..)`).
///
/// An absent or empty list means "no constraint", not "match nothing".
pub fn is_in<C, V>(col: C, values: Option<Vec<V>>) -> Option<SimpleExpr>
where
    C: ColumnTrait,
    V: Into<Value>,
{
    match values {
        Some(vs) if !vs.is_empty() => Some(col.is_in(vs)),
        _ => None,
    }
}

/// AND-combines the terms that actually apply.
///
/// `None` entries are dropped; the fold starts from `Condition::all()`, the
/// identity of AND, so zero applicable terms matches every row. Term order may
/// change the generated SQL text but never the matched row set.
#[must_use]
pub fn and_all<I>(terms: I) -> Condition
where
    I: IntoIterator<Item = Option<SimpleExpr>>,
{
    terms
        .into_iter()
        .flatten()
        .fold(Condition::all(), Condition::add)
}

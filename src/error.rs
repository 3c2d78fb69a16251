use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by query construction and execution.
///
/// Absent search fields are never errors; they are the defined "no constraint"
/// case. Store failures pass through as [`QueryError::Db`] untouched — this
/// layer performs no retries.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Page size of zero, rejected before any query is issued.
    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(u64),

    /// Two projected columns bound to the same result field. Ambiguity is a
    /// programmer fault reported at query-construction time, never resolved
    /// by guessing.
    #[error("duplicate projection alias `{0}`")]
    DuplicateAlias(String),

    /// Failure from the underlying store, propagated unchanged.
    #[error(transparent)]
    Db(#[from] DbErr),
}

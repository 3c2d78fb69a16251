//! Dynamic filter composition and count-optimised pagination for Sea-ORM.
//!
//! `seapage` turns a sparse set of optional search criteria into a single
//! conjunction of only the applicable filters, runs the filtered, left-joined
//! query one page at a time, and skips the expensive count query whenever the
//! fetched page already proves the total.
//!
//! - [`filter`] — optional predicate terms and their AND-composition
//! - [`page`] — page requests, sort keys with per-key null ordering, results
//! - [`projection`] — explicitly aliased flat projections over joins
//! - [`query`] — the reusable base query and the pagination strategies

pub mod error;
pub mod filter;
pub mod page;
pub mod projection;
pub mod query;

pub use error::QueryError;
pub use page::{PageRequest, PageResult, SortKey};
pub use projection::Projection;
pub use query::{PagedQuery, PaginationStrategy, count_required};

#[cfg(test)]
mod test_util;

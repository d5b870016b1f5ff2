//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per domain (users and roles, EVE records, applications
//! and comments, blacklist entries and GSF cache). They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository works on a pooled connection and
//! inside a transaction.

pub mod blacklist;
pub mod eve;
pub mod recruit;
pub mod user;

use sea_orm::{
    sea_query::{Expr, Func, IntoCondition},
    ColumnTrait,
};

/// Case-insensitive substring match on a text column.
pub(crate) fn contains_ignore_case<C: ColumnTrait>(column: C, search: &str) -> impl IntoCondition {
    use sea_orm::ExprTrait;
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", search.to_lowercase()))
}

/// Zero-based page index for a 1-based `page`, capped at `total_pages` so the offset stays
/// within the result set
pub(crate) fn page_index(page: u64, total_pages: u64) -> u64 {
    page.saturating_sub(1).min(total_pages)
}

//! Instrumented database call wrappers.
//!
//! Thin shims around the SQLite call primitives (execute, query, query
//! single row) for both a pool handle and an open transaction. Each wrapper
//! times the delegated call, emits one structured log record, and returns
//! the client's result untouched.

pub mod database;

pub use database::exec::{execute, query, query_row, tx_execute, tx_query, tx_query_row};
pub use database::params::SqlValue;
pub use database::row::SingleRow;

//! The six instrumented call wrappers.
//!
//! Two families, distinguished only by the handle they operate on: a pool
//! (the direct-connection analog) or an open transaction. Every wrapper
//! passes the statement and arguments through verbatim, times the delegated
//! call, logs once, and returns the client's outcome unmodified. No retries,
//! no added timeouts, no error wrapping.

use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;
use tracing::{error, info};

use super::params::{ParamList, SqlValue};
use super::row::SingleRow;

fn build<'q>(sql: &'q str, args: &[SqlValue]) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    let mut query = sqlx::query(sql);
    for value in args {
        query = value.bind(query);
    }
    query
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Execute a state-changing statement on the pool.
pub async fn execute(
    pool: &SqlitePool,
    sql: &str,
    args: &[SqlValue],
) -> Result<SqliteQueryResult, sqlx::Error> {
    let start = Instant::now();
    let result = build(sql, args).execute(pool).await;
    let dur_ms = elapsed_ms(start);
    match &result {
        Ok(_) => info!(query = sql, args = %ParamList(args), dur_ms, "db.execute"),
        Err(err) => {
            error!(query = sql, args = %ParamList(args), error = %err, dur_ms, "db.execute");
        }
    }
    result
}

/// Run a row-returning query on the pool.
pub async fn query(
    pool: &SqlitePool,
    sql: &str,
    args: &[SqlValue],
) -> Result<Vec<SqliteRow>, sqlx::Error> {
    let start = Instant::now();
    let result = build(sql, args).fetch_all(pool).await;
    let dur_ms = elapsed_ms(start);
    match &result {
        Ok(_) => info!(query = sql, args = %ParamList(args), dur_ms, "db.query"),
        Err(err) => {
            error!(query = sql, args = %ParamList(args), error = %err, dur_ms, "db.query");
        }
    }
    result
}

/// Run a single-row query on the pool.
///
/// Always logs at INFO: any client error (including "no rows") is carried
/// inside the returned [`SingleRow`] and is not observable here.
pub async fn query_row(pool: &SqlitePool, sql: &str, args: &[SqlValue]) -> SingleRow {
    let start = Instant::now();
    let outcome = build(sql, args).fetch_optional(pool).await;
    let dur_ms = elapsed_ms(start);
    info!(query = sql, args = %ParamList(args), dur_ms, "db.query_row");
    SingleRow::new(outcome)
}

/// Execute a state-changing statement inside an open transaction.
pub async fn tx_execute(
    tx: &mut Transaction<'_, Sqlite>,
    sql: &str,
    args: &[SqlValue],
) -> Result<SqliteQueryResult, sqlx::Error> {
    let start = Instant::now();
    let result = build(sql, args).execute(&mut **tx).await;
    let dur_ms = elapsed_ms(start);
    match &result {
        Ok(_) => info!(query = sql, args = %ParamList(args), dur_ms, "tx.execute"),
        Err(err) => {
            error!(query = sql, args = %ParamList(args), error = %err, dur_ms, "tx.execute");
        }
    }
    result
}

/// Run a row-returning query inside an open transaction.
pub async fn tx_query(
    tx: &mut Transaction<'_, Sqlite>,
    sql: &str,
    args: &[SqlValue],
) -> Result<Vec<SqliteRow>, sqlx::Error> {
    let start = Instant::now();
    let result = build(sql, args).fetch_all(&mut **tx).await;
    let dur_ms = elapsed_ms(start);
    match &result {
        Ok(_) => info!(query = sql, args = %ParamList(args), dur_ms, "tx.query"),
        Err(err) => {
            error!(query = sql, args = %ParamList(args), error = %err, dur_ms, "tx.query");
        }
    }
    result
}

/// Run a single-row query inside an open transaction.
///
/// Same deferred-error contract as [`query_row`].
pub async fn tx_query_row(
    tx: &mut Transaction<'_, Sqlite>,
    sql: &str,
    args: &[SqlValue],
) -> SingleRow {
    let start = Instant::now();
    let outcome = build(sql, args).fetch_optional(&mut **tx).await;
    let dur_ms = elapsed_ms(start);
    info!(query = sql, args = %ParamList(args), dur_ms, "tx.query_row");
    SingleRow::new(outcome)
}

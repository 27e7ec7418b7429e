use sqlx::sqlite::SqliteRow;
use sqlx::{Decode, Row, Sqlite, Type};

/// Handle to at most one result row.
///
/// The delegated fetch's outcome is stored inside the handle; a client error
/// or an empty result is not observable at the call site and surfaces only
/// when the row is accessed. Absence of a row reports as
/// [`sqlx::Error::RowNotFound`].
pub struct SingleRow {
    outcome: Result<Option<SqliteRow>, sqlx::Error>,
}

impl SingleRow {
    pub(crate) fn new(outcome: Result<Option<SqliteRow>, sqlx::Error>) -> Self {
        Self { outcome }
    }

    /// Consume the handle, yielding the row or the deferred error.
    pub fn row(self) -> Result<SqliteRow, sqlx::Error> {
        match self.outcome {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(sqlx::Error::RowNotFound),
            Err(err) => Err(err),
        }
    }

    /// Decode a single named column from the row.
    pub fn get<T>(self, column: &str) -> Result<T, sqlx::Error>
    where
        T: for<'r> Decode<'r, Sqlite> + Type<Sqlite>,
    {
        self.row()?.try_get(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_row_defers_not_found() {
        let row = SingleRow::new(Ok(None));
        assert!(matches!(row.row(), Err(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_client_error_is_forwarded() {
        let row = SingleRow::new(Err(sqlx::Error::PoolClosed));
        assert!(matches!(row.row(), Err(sqlx::Error::PoolClosed)));
    }
}

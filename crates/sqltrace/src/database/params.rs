use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::Sqlite;
use std::fmt;

/// A bind argument for an instrumented statement.
///
/// Arguments are heterogeneous and ordered; they are bound positionally and
/// logged by value. Rendering is defensive: every variant has an infallible
/// textual form, and blobs log as a length summary rather than raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Bind this value onto the next positional placeholder of `query`.
    pub fn bind<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
    ) -> Query<'q, Sqlite, SqliteArguments<'q>> {
        match self {
            SqlValue::Null => query.bind(None::<i64>),
            SqlValue::Bool(v) => query.bind(*v),
            SqlValue::Integer(v) => query.bind(*v),
            SqlValue::Real(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
            SqlValue::Blob(v) => query.bind(v.clone()),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(v) => write!(f, "{v}"),
            SqlValue::Integer(v) => write!(f, "{v}"),
            SqlValue::Real(v) => write!(f, "{v}"),
            SqlValue::Text(v) => write!(f, "{v:?}"),
            SqlValue::Blob(v) => write!(f, "<blob {} bytes>", v.len()),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Integer(i64::from(v))
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// Renders an ordered argument slice as `[a, b, c]` for log records.
pub(crate) struct ParamList<'a>(pub &'a [SqlValue]);

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(SqlValue::Null.to_string(), "NULL");
        assert_eq!(SqlValue::Bool(true).to_string(), "true");
        assert_eq!(SqlValue::Integer(7).to_string(), "7");
        assert_eq!(SqlValue::Real(1.5).to_string(), "1.5");
        assert_eq!(SqlValue::Text("a'b".to_string()).to_string(), "\"a'b\"");
        assert_eq!(SqlValue::Blob(vec![0, 1, 2]).to_string(), "<blob 3 bytes>");
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(SqlValue::from(7), SqlValue::Integer(7));
        assert_eq!(SqlValue::from(7i64), SqlValue::Integer(7));
        assert_eq!(SqlValue::from("x"), SqlValue::Text("x".to_string()));
        assert_eq!(SqlValue::from(None::<i64>), SqlValue::Null);
        assert_eq!(SqlValue::from(Some(2i64)), SqlValue::Integer(2));
    }

    #[test]
    fn test_param_list_rendering() {
        let args = vec![SqlValue::Integer(7), SqlValue::Text("x".to_string())];
        assert_eq!(ParamList(&args).to_string(), "[7, \"x\"]");
        assert_eq!(ParamList(&[]).to_string(), "[]");
    }
}

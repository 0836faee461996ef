use heapless::String as HeaplessString;
use sqlx::postgres::PgRow;
use sqlx::Row;
use std::error::Error;
use std::str::FromStr;

/// A trait for converting a database row into a model.
pub trait TryFromRow<R>: Sized {
    /// Performs the conversion.
    fn try_from_row(row: &R) -> Result<Self, Box<dyn Error + Send + Sync>>;
}

/// Read a required bounded string column.
pub fn get_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<HeaplessString<N>, Box<dyn Error + Send + Sync>> {
    let value: String = row.try_get(col_name)?;
    HeaplessString::from_str(&value)
        .map_err(|_| format!("Column '{col_name}' exceeds {N} chars").into())
}

/// Read a nullable bounded string column.
pub fn get_optional_heapless_string<const N: usize>(
    row: &PgRow,
    col_name: &str,
) -> Result<Option<HeaplessString<N>>, Box<dyn Error + Send + Sync>> {
    let value: Option<String> = row.try_get(col_name)?;
    value
        .map(|v| HeaplessString::from_str(&v))
        .transpose()
        .map_err(|_| format!("Column '{col_name}' exceeds {N} chars").into())
}

/// Whether a sqlx error is a unique-constraint violation on the named index.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505")
                && db_err
                    .constraint()
                    .map(|name| name == constraint)
                    .unwrap_or(true)
        }
        _ => false,
    }
}

use pgseed_core::Error;

/// Convert a driver error into the core error, keeping the server message verbatim.
pub fn db_error(err: sqlx::Error) -> Error {
    match err.as_database_error() {
        Some(db_err) => Error::Db(db_err.message().to_string()),
        None => Error::Db(err.to_string()),
    }
}

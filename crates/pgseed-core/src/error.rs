use thiserror::Error;

/// Core error type shared across pgseed crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A database operation was attempted before `connect`.
    #[error("Database not connected")]
    NotConnected,
    /// Opening the connection failed (bad credentials, unreachable host).
    #[error("{0}")]
    Connection(String),
    /// The database rejected a statement. Carries the server message verbatim.
    #[error("{0}")]
    Db(String),
    /// A table definition, identifier or connection setting is not usable.
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),
}

/// Convenience alias for results returned by pgseed crates.
pub type Result<T> = std::result::Result<T, Error>;

//! Core contracts and helpers for pgseed.
//!
//! This crate defines the connection, column and mapping types shared by the
//! inspector, the generators and the backend, plus identifier quoting and
//! credential redaction.

pub mod connection;
pub mod error;
pub mod ident;
pub mod mapping;
pub mod redaction;
pub mod schema;

pub use connection::ConnectionConfig;
pub use error::{Error, Result};
pub use ident::{quote_ident, validate_identifier, validate_type_clause};
pub use mapping::GeneratorMapping;
pub use redaction::{RedactedConnection, redact_connection_string};
pub use schema::{COLUMN_TYPE_PRESETS, ColumnDescriptor, ColumnTypePreset, TableDefinition};

/// Schema searched when the caller does not name one.
pub const DEFAULT_SCHEMA: &str = "public";

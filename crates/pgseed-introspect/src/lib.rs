//! Schema inspection adapters.

pub mod inspector;
pub mod options;
pub mod postgres;

pub use inspector::Inspector;
pub use options::InspectOptions;
pub use postgres::{PostgresInspector, db_error, list_columns, list_tables};

pub use pgseed_core::ColumnDescriptor;

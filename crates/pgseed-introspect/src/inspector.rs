use async_trait::async_trait;

use pgseed_core::{ColumnDescriptor, Result};

/// Trait implemented by database adapters that can list tables and columns.
#[async_trait]
pub trait Inspector {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Table names visible in the configured schema, ordered by name.
    async fn list_tables(&mut self) -> Result<Vec<String>>;

    /// Column name/type pairs of `table` in catalog order.
    async fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}

use async_trait::async_trait;
use sqlx::PgConnection;

use pgseed_core::{ColumnDescriptor, Result};

use crate::inspector::Inspector;
use crate::options::InspectOptions;

mod errors;
mod queries;

pub use errors::db_error;

/// Inspector bound to the session's live Postgres connection.
#[derive(Debug)]
pub struct PostgresInspector<'c> {
    conn: &'c mut PgConnection,
    opts: InspectOptions,
}

impl<'c> PostgresInspector<'c> {
    /// Inspect the default schema through `conn`.
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self::with_options(conn, InspectOptions::default())
    }

    pub fn with_options(conn: &'c mut PgConnection, opts: InspectOptions) -> Self {
        Self { conn, opts }
    }
}

#[async_trait]
impl Inspector for PostgresInspector<'_> {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn list_tables(&mut self) -> Result<Vec<String>> {
        list_tables(&mut *self.conn, &self.opts).await
    }

    async fn list_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        list_columns(&mut *self.conn, &self.opts, table).await
    }
}

/// List table names in `opts.schema`, ordered by name.
pub async fn list_tables(conn: &mut PgConnection, opts: &InspectOptions) -> Result<Vec<String>> {
    let tables = queries::list_tables(conn, &opts.schema, opts.include_views).await?;
    tracing::debug!(event = "tables_listed", schema = %opts.schema, count = tables.len());
    Ok(tables)
}

/// List the columns of `table` in catalog order.
///
/// An unknown table yields an empty list, as the catalog does.
pub async fn list_columns(
    conn: &mut PgConnection,
    opts: &InspectOptions,
    table: &str,
) -> Result<Vec<ColumnDescriptor>> {
    let columns = queries::list_columns(conn, &opts.schema, table)
        .await?
        .into_iter()
        .map(|raw| ColumnDescriptor::new(raw.name, raw.data_type))
        .collect::<Vec<_>>();
    tracing::debug!(
        event = "columns_listed",
        schema = %opts.schema,
        table = %table,
        count = columns.len()
    );
    Ok(columns)
}

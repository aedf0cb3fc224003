use sqlx::PgConnection;
use tracing::info;

use pgseed_core::{Result, TableDefinition};
use pgseed_introspect::db_error;

/// Issue one `CREATE TABLE` for `definition`.
///
/// The definition is validated before anything reaches the server; server
/// errors come back with their message untouched.
pub async fn create_table(conn: &mut PgConnection, definition: &TableDefinition) -> Result<()> {
    let sql = definition.create_table_sql()?;
    sqlx::query(&sql).execute(conn).await.map_err(db_error)?;
    info!(
        event = "table_created",
        table = %definition.table_name,
        columns = definition.columns.len()
    );
    Ok(())
}

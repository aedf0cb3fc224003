use sqlx::PgConnection;

use pgseed_core::Result;

use super::errors::db_error;

const BASE_TABLES: &[&str] = &["BASE TABLE"];
const TABLES_AND_VIEWS: &[&str] = &["BASE TABLE", "VIEW"];

pub async fn list_tables(
    conn: &mut PgConnection,
    schema: &str,
    include_views: bool,
) -> Result<Vec<String>> {
    let table_types = if include_views {
        TABLES_AND_VIEWS
    } else {
        BASE_TABLES
    };

    sqlx::query_scalar::<_, String>(
        r#"
        select table_name::text
        from information_schema.tables
        where table_schema = $1
          and table_type::text = any($2)
        order by table_name::text collate "C"
        "#,
    )
    .bind(schema)
    .bind(table_types)
    .fetch_all(conn)
    .await
    .map_err(db_error)
}

pub struct RawColumn {
    pub name: String,
    pub data_type: String,
}

pub async fn list_columns(
    conn: &mut PgConnection,
    schema: &str,
    table: &str,
) -> Result<Vec<RawColumn>> {
    let rows = sqlx::query_as::<_, (String, String)>(
        r#"
        select column_name::text, data_type::text
        from information_schema.columns
        where table_schema = $1
          and table_name = $2
        order by ordinal_position
        "#,
    )
    .bind(schema)
    .bind(table)
    .fetch_all(conn)
    .await
    .map_err(db_error)?;

    Ok(rows
        .into_iter()
        .map(|(name, data_type)| RawColumn { name, data_type })
        .collect())
}

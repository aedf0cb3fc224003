use std::collections::HashMap;

use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{Connection, PgConnection, Postgres};
use tracing::{debug, info, warn};

use pgseed_core::{Result, quote_ident, validate_identifier};
use pgseed_generate::{GeneratedValue, RowRecord};
use pgseed_introspect::db_error;

static NULL: GeneratedValue = GeneratedValue::Null;

/// Insert `rows` into `table` inside one transaction.
///
/// The first record's keys fix the column list; a later record missing one
/// of them inserts `NULL` there. Text values bound to non-string columns are
/// cast to the declared type, so a generated `"123"` lands in a `SMALLINT`
/// column and an address in an `INET` one. Any failing statement rolls the whole batch
/// back and its error is returned. Empty input returns `Ok(0)` without
/// opening a transaction.
pub async fn insert_rows(conn: &mut PgConnection, table: &str, rows: &[RowRecord]) -> Result<u64> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };

    validate_identifier("table", table)?;
    let columns: Vec<&str> = first.keys().collect();
    for column in &columns {
        validate_identifier("column", column)?;
    }

    let mut tx = conn.begin().await.map_err(db_error)?;
    let types = match column_types(&mut *tx, table).await {
        Ok(types) => types,
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                warn!(event = "rollback_failed", table = %table, error = %rollback_err);
            }
            return Err(err);
        }
    };
    let casts: Vec<Option<&str>> = columns
        .iter()
        .map(|column| types.get(*column).map(String::as_str))
        .collect();
    let mut inserted = 0_u64;

    for (index, row) in rows.iter().enumerate() {
        let values: Vec<&GeneratedValue> = columns
            .iter()
            .map(|column| row.get(column).unwrap_or(&NULL))
            .collect();
        let sql = insert_sql(table, &columns, &values, &casts);
        let query = values
            .iter()
            .fold(sqlx::query(&sql), |query, value| bind_value(query, value));

        match query.execute(&mut *tx).await {
            Ok(result) => inserted += result.rows_affected(),
            Err(err) => {
                let err = db_error(err);
                warn!(event = "insert_failed", table = %table, row = index, error = %err);
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(event = "rollback_failed", table = %table, error = %rollback_err);
                }
                return Err(err);
            }
        }
    }

    tx.commit().await.map_err(db_error)?;
    info!(event = "rows_inserted", table = %table, count = inserted);
    Ok(inserted)
}

/// Declared type of each non-string column of `table`. String columns take
/// text parameters by assignment, which keeps length checks strict; the rest
/// need an explicit cast. A table that does not resolve yields an empty map
/// and the `INSERT` reports the missing relation.
async fn column_types(conn: &mut PgConnection, table: &str) -> Result<HashMap<String, String>> {
    let rows = sqlx::query_as::<_, (String, String)>(
        r#"
        select a.attname::text, format_type(a.atttypid, a.atttypmod)
        from pg_attribute a
        join pg_type t on t.oid = a.atttypid
        where a.attrelid = to_regclass($1::text)
          and a.attnum > 0
          and not a.attisdropped
          and t.typcategory <> 'S'
        "#,
    )
    .bind(quote_ident(table))
    .fetch_all(conn)
    .await
    .map_err(db_error)?;
    Ok(rows.into_iter().collect())
}

/// Render one `INSERT`. `NULL` values are written inline; every other value
/// gets the next `$n` placeholder. Text placeholders carry a `::type` cast
/// when the column's type is known.
pub(crate) fn insert_sql(
    table: &str,
    columns: &[&str],
    values: &[&GeneratedValue],
    casts: &[Option<&str>],
) -> String {
    if columns.is_empty() {
        return format!("INSERT INTO {} DEFAULT VALUES", quote_ident(table));
    }

    let column_list = columns
        .iter()
        .map(|column| quote_ident(column))
        .collect::<Vec<_>>()
        .join(", ");

    let mut placeholder = 0;
    let value_list = values
        .iter()
        .enumerate()
        .map(|(idx, value)| match value {
            GeneratedValue::Null => "NULL".to_string(),
            GeneratedValue::Text(_) => {
                placeholder += 1;
                match casts.get(idx).copied().flatten() {
                    Some(cast) => format!("${placeholder}::{cast}"),
                    None => format!("${placeholder}"),
                }
            }
            _ => {
                placeholder += 1;
                format!("${placeholder}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let sql = format!(
        "INSERT INTO {} ({column_list}) VALUES ({value_list})",
        quote_ident(table)
    );
    debug!(event = "insert_sql", sql = %sql);
    sql
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q GeneratedValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        GeneratedValue::Null => query,
        GeneratedValue::Float(value) => query.bind(*value),
        GeneratedValue::Text(value) => query.bind(value.as_str()),
        GeneratedValue::Date(value) => query.bind(*value),
        GeneratedValue::Timestamp(value) => query.bind(*value),
    }
}

use anyhow::{Context, Result};
use sqlx::{Connection, PgConnection};
use std::env;

use pgseed_core::ColumnDescriptor;
use pgseed_introspect::{InspectOptions, Inspector, PostgresInspector};

fn database_url() -> Option<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .ok()
}

async fn connect() -> Result<Option<PgConnection>> {
    let Some(url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL or DATABASE_URL for integration tests");
        return Ok(None);
    };
    let conn = PgConnection::connect(&url)
        .await
        .context("connecting to Postgres")?;
    Ok(Some(conn))
}

fn unique_table(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

#[tokio::test]
async fn lists_tables_and_columns_in_catalog_order() -> Result<()> {
    let Some(mut conn) = connect().await? else {
        return Ok(());
    };
    let table = unique_table("inspect_users");

    sqlx::query(&format!(
        "create table \"{table}\" (id integer primary key, email varchar(120), created_at timestamptz)"
    ))
    .execute(&mut conn)
    .await
    .context("creating fixture table")?;

    let outcome = async {
        let mut inspector = PostgresInspector::new(&mut conn);
        assert_eq!(inspector.engine(), "postgres");

        let tables = inspector.list_tables().await?;
        assert!(tables.contains(&table), "fixture table should be listed");
        let mut sorted = tables.clone();
        sorted.sort();
        assert_eq!(tables, sorted, "tables come back ordered by name");

        let columns = inspector.list_columns(&table).await?;
        assert_eq!(
            columns,
            vec![
                ColumnDescriptor::new("id", "integer"),
                ColumnDescriptor::new("email", "character varying"),
                ColumnDescriptor::new("created_at", "timestamp with time zone"),
            ]
        );

        let missing = inspector.list_columns("no_such_table_here").await?;
        assert!(missing.is_empty());
        Ok::<_, anyhow::Error>(())
    }
    .await;

    sqlx::query(&format!("drop table if exists \"{table}\""))
        .execute(&mut conn)
        .await
        .context("dropping fixture table")?;

    outcome
}

#[tokio::test]
async fn views_can_be_excluded() -> Result<()> {
    let Some(mut conn) = connect().await? else {
        return Ok(());
    };
    let table = unique_table("inspect_base");
    let view = format!("{table}_view");

    sqlx::query(&format!("create table \"{table}\" (id integer)"))
        .execute(&mut conn)
        .await?;
    sqlx::query(&format!(
        "create view \"{view}\" as select id from \"{table}\""
    ))
    .execute(&mut conn)
    .await?;

    let with_views = pgseed_introspect::list_tables(&mut conn, &InspectOptions::default()).await?;
    let without_views = pgseed_introspect::list_tables(
        &mut conn,
        &InspectOptions {
            include_views: false,
            ..InspectOptions::default()
        },
    )
    .await?;

    sqlx::query(&format!("drop view if exists \"{view}\""))
        .execute(&mut conn)
        .await?;
    sqlx::query(&format!("drop table if exists \"{table}\""))
        .execute(&mut conn)
        .await?;

    assert!(with_views.contains(&view));
    assert!(!without_views.contains(&view));
    assert!(without_views.contains(&table));
    Ok(())
}

use anyhow::{Context, Result, bail};
use std::env;

use pgseed_backend::{Backend, GenerationJob, parse_connection_url};
use pgseed_core::{ColumnDescriptor, GeneratorMapping, TableDefinition};
use pgseed_generate::{GeneratedValue, GeneratorRegistry, RowRecord, RowSynthesizer};

fn database_url() -> Option<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .ok()
}

async fn connected_backend() -> Result<Option<Backend>> {
    let Some(url) = database_url() else {
        eprintln!("skipping: set TEST_DATABASE_URL or DATABASE_URL for integration tests");
        return Ok(None);
    };
    let options = parse_connection_url(&url).context("parsing database url")?;
    let mut backend = Backend::new();
    if let Err(err) = backend.connect_with(options).await.into_result() {
        bail!("connecting to Postgres: {err}");
    }
    Ok(Some(backend))
}

fn unique_table(prefix: &str) -> String {
    format!("{prefix}_{}", uuid::Uuid::new_v4().simple())
}

async fn drop_table(backend: &mut Backend, table: &str) {
    let Some(url) = database_url() else {
        return;
    };
    let Ok(mut conn) = <sqlx::PgConnection as sqlx::Connection>::connect(&url).await else {
        return;
    };
    let _ = sqlx::query(&format!("drop table if exists \"{table}\""))
        .execute(&mut conn)
        .await;
    let _ = backend.disconnect().await;
}

#[tokio::test]
async fn create_table_round_trips_through_list_columns() -> Result<()> {
    let Some(mut backend) = connected_backend().await? else {
        return Ok(());
    };
    let table = unique_table("seed_round_trip");
    let mut definition = TableDefinition::new(&table);
    definition.add_column("name");

    let created = backend.create_table(&definition).await;
    assert!(created.is_success(), "{:?}", created.error);

    let columns = backend.list_columns(&table).await.into_result();
    drop_table(&mut backend, &table).await;

    assert_eq!(
        columns.map(|payload| payload.columns),
        Ok(vec![
            ColumnDescriptor::new("id", "integer"),
            ColumnDescriptor::new("name", "character varying"),
        ])
    );
    Ok(())
}

#[tokio::test]
async fn users_scenario_inserts_three_rows() -> Result<()> {
    let Some(mut backend) = connected_backend().await? else {
        return Ok(());
    };
    let table = unique_table("seed_users");
    let definition = TableDefinition::with_columns(
        &table,
        vec![
            ColumnDescriptor::new("id", "SERIAL PRIMARY KEY"),
            ColumnDescriptor::new("email", "VARCHAR(255)"),
        ],
    );
    assert!(backend.create_table(&definition).await.is_success());

    let listed = backend.list_tables().await.into_result();
    let columns = backend.list_columns(&table).await.into_result();

    let registry = GeneratorRegistry::new();
    let mapping: GeneratorMapping = [("email", "internet.email")].into_iter().collect();
    let rows = RowSynthesizer::new(&registry).synthesize(&["id", "email"], &mapping, 3);
    let inserted = backend.generate_and_insert(&table, &rows).await;
    let json = serde_json::to_string(&inserted)?;

    drop_table(&mut backend, &table).await;

    assert!(listed.map(|payload| payload.tables.contains(&table)).unwrap_or(false));
    assert_eq!(
        columns.map(|payload| payload.columns),
        Ok(vec![
            ColumnDescriptor::new("id", "integer"),
            ColumnDescriptor::new("email", "character varying"),
        ])
    );
    assert_eq!(json, r#"{"success":true,"count":3}"#);
    Ok(())
}

#[tokio::test]
async fn constraint_violation_rolls_back_whole_batch() -> Result<()> {
    let Some(mut backend) = connected_backend().await? else {
        return Ok(());
    };
    let table = unique_table("seed_atomic");
    let definition = TableDefinition::with_columns(
        &table,
        vec![
            ColumnDescriptor::new("id", "SERIAL PRIMARY KEY"),
            ColumnDescriptor::new("code", "TEXT UNIQUE"),
        ],
    );
    assert!(backend.create_table(&definition).await.is_success());

    let rows: Vec<RowRecord> = ["a", "b", "a"]
        .into_iter()
        .map(|code| {
            [("code", GeneratedValue::Text(code.to_string()))]
                .into_iter()
                .collect()
        })
        .collect();
    let failed = backend.generate_and_insert(&table, &rows).await;

    let empty: Vec<RowRecord> = Vec::new();
    let zero = backend.generate_and_insert(&table, &empty).await.into_result();

    let unique_ok: Vec<RowRecord> = ["c"]
        .into_iter()
        .map(|code| {
            [("code", GeneratedValue::Text(code.to_string()))]
                .into_iter()
                .collect()
        })
        .collect();
    let after = backend.generate_and_insert(&table, &unique_ok).await.into_result();

    let mut check = <sqlx::PgConnection as sqlx::Connection>::connect(
        &database_url().context("database url")?,
    )
    .await?;
    let persisted: i64 = sqlx::query_scalar(&format!("select count(*) from \"{table}\""))
        .fetch_one(&mut check)
        .await?;

    drop_table(&mut backend, &table).await;

    assert!(!failed.is_success());
    let message = failed.error.unwrap_or_default();
    assert!(message.contains("duplicate key"), "{message}");
    assert_eq!(zero.map(|payload| payload.count), Ok(0));
    assert_eq!(after.map(|payload| payload.count), Ok(1));
    assert_eq!(persisted, 1, "only the later single-row batch is committed");
    Ok(())
}

#[tokio::test]
async fn run_job_logs_progress_and_nulls_missing_values() -> Result<()> {
    let Some(mut backend) = connected_backend().await? else {
        return Ok(());
    };
    let table = unique_table("seed_job");
    let mut definition = TableDefinition::new(&table);
    definition.add_column("blood").data_type = "CHAR(3)".to_string();
    definition.add_column("notes").data_type = "TEXT".to_string();
    assert!(backend.create_table(&definition).await.is_success());

    let mapping: GeneratorMapping = [("blood", "custom.bloodType"), ("notes", "no.suchThing")]
        .into_iter()
        .collect();
    let job = GenerationJob::new(&table, 4, mapping);
    let envelope = backend.run_job(&job).await;

    let url = database_url().context("database url")?;
    let mut check = <sqlx::PgConnection as sqlx::Connection>::connect(&url).await?;
    let null_notes: i64 = sqlx::query_scalar(&format!(
        "select count(*) from \"{table}\" where notes is null and blood is not null"
    ))
    .fetch_one(&mut check)
    .await?;
    let log = backend.log().to_vec();

    drop_table(&mut backend, &table).await;

    assert_eq!(envelope.into_result().map(|payload| payload.count), Ok(4));
    assert_eq!(null_notes, 4);
    assert_eq!(
        log,
        vec![
            format!("Starting generation for {table} (4 rows)..."),
            "Generated 4 records in memory. Sending to DB...".to_string(),
            format!("Successfully inserted 4 rows into {table}."),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn text_values_fill_numeric_and_network_columns() -> Result<()> {
    let Some(mut backend) = connected_backend().await? else {
        return Ok(());
    };
    let table = unique_table("seed_typed");
    let definition = TableDefinition::with_columns(
        &table,
        vec![
            ColumnDescriptor::new("cvv", "SMALLINT"),
            ColumnDescriptor::new("ip", "INET"),
            ColumnDescriptor::new("code", "CHAR(3)"),
        ],
    );
    assert!(backend.create_table(&definition).await.is_success());

    let mapping: GeneratorMapping = [
        ("cvv", "finance.creditCardCVV"),
        ("ip", "internet.ip"),
        ("code", "custom.bloodType"),
    ]
    .into_iter()
    .collect();
    let envelope = backend.run_job(&GenerationJob::new(&table, 5, mapping)).await;

    let url = database_url().context("database url")?;
    let mut check = <sqlx::PgConnection as sqlx::Connection>::connect(&url).await?;
    let filled: i64 = sqlx::query_scalar(&format!(
        "select count(*) from \"{table}\" where cvv between 0 and 999 and family(ip) = 4 and length(code) >= 2"
    ))
    .fetch_one(&mut check)
    .await?;

    drop_table(&mut backend, &table).await;

    assert_eq!(envelope.into_result().map(|payload| payload.count), Ok(5));
    assert_eq!(filled, 5);
    Ok(())
}

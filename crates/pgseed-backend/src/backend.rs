use sqlx::postgres::PgConnectOptions;
use tracing::{info, warn};

use pgseed_core::{ColumnDescriptor, ConnectionConfig, Result, TableDefinition};
use pgseed_generate::{GeneratorRegistry, RowRecord, RowSynthesizer};
use pgseed_introspect::{InspectOptions, Inspector, PostgresInspector};

use crate::ddl;
use crate::envelope::{Ack, Columns, Envelope, Inserted, Tables};
use crate::insert::insert_rows;
use crate::job::{GenerationJob, SessionLog};
use crate::session::Session;

/// Request/response surface over one session.
#[derive(Debug, Default)]
pub struct Backend {
    session: Session,
    registry: GeneratorRegistry,
    inspect: InspectOptions,
    log: SessionLog,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: GeneratorRegistry) -> Self {
        Self {
            registry,
            ..Self::default()
        }
    }

    pub fn with_inspect_options(mut self, inspect: InspectOptions) -> Self {
        self.inspect = inspect;
        self
    }

    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Session log lines, oldest first.
    pub fn log(&self) -> &[String] {
        self.log.lines()
    }

    /// Open a connection, replacing any live one.
    pub async fn connect(&mut self, config: ConnectionConfig) -> Envelope<Ack> {
        self.session.open(config).await.map(|()| Ack {}).into()
    }

    /// Same as [`Backend::connect`] for options parsed from a URL.
    pub async fn connect_with(&mut self, options: PgConnectOptions) -> Envelope<Ack> {
        self.session.open_with(options).await.map(|()| Ack {}).into()
    }

    pub async fn disconnect(&mut self) -> Envelope<Ack> {
        self.session.close().await;
        Envelope::ok(Ack {})
    }

    pub async fn list_tables(&mut self) -> Envelope<Tables> {
        self.fetch_tables().await.map(|tables| Tables { tables }).into()
    }

    pub async fn list_columns(&mut self, table: &str) -> Envelope<Columns> {
        self.fetch_columns(table)
            .await
            .map(|columns| Columns { columns })
            .into()
    }

    pub async fn create_table(&mut self, definition: &TableDefinition) -> Envelope<Ack> {
        let result = match self.session.connection() {
            Ok(conn) => ddl::create_table(conn, definition).await,
            Err(err) => Err(err),
        };
        result.map(|()| Ack {}).into()
    }

    /// Insert already-synthesized rows in one transaction.
    pub async fn generate_and_insert(
        &mut self,
        table: &str,
        rows: &[RowRecord],
    ) -> Envelope<Inserted> {
        self.insert(table, rows)
            .await
            .map(|count| Inserted { count })
            .into()
    }

    /// Look up the table's columns, synthesize the job's rows and insert
    /// them, recording progress in the session log.
    pub async fn run_job(&mut self, job: &GenerationJob) -> Envelope<Inserted> {
        info!(
            event = "job_started",
            job_id = %job.id,
            table = %job.table,
            rows = job.row_count
        );
        self.log.job_started(job);

        let outcome = self.execute_job(job).await;
        match &outcome {
            Ok(count) => {
                info!(event = "job_finished", job_id = %job.id, count = *count);
                self.log.rows_inserted(&job.table, *count);
            }
            Err(err) => {
                warn!(event = "job_failed", job_id = %job.id, error = %err);
                self.log.error(err);
            }
        }
        outcome.map(|count| Inserted { count }).into()
    }

    async fn execute_job(&mut self, job: &GenerationJob) -> Result<u64> {
        let columns = self.fetch_columns(&job.table).await?;
        let names: Vec<&str> = columns
            .iter()
            .map(|column| column.column_name.as_str())
            .collect();
        let rows =
            RowSynthesizer::new(&self.registry).synthesize(&names, &job.mapping, job.row_count);
        self.log.rows_generated(rows.len());
        self.insert(&job.table, &rows).await
    }

    async fn fetch_tables(&mut self) -> Result<Vec<String>> {
        let conn = self.session.connection()?;
        PostgresInspector::with_options(conn, self.inspect.clone())
            .list_tables()
            .await
    }

    async fn fetch_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let conn = self.session.connection()?;
        PostgresInspector::with_options(conn, self.inspect.clone())
            .list_columns(table)
            .await
    }

    async fn insert(&mut self, table: &str, rows: &[RowRecord]) -> Result<u64> {
        let conn = self.session.connection()?;
        insert_rows(conn, table, rows).await
    }
}

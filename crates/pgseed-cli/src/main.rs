mod config;
mod logging;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use pgseed_backend::{Backend, Envelope, GenerationJob};
use pgseed_core::{
    COLUMN_TYPE_PRESETS, ColumnDescriptor, DEFAULT_SCHEMA, Error as CoreError, GeneratorMapping,
    TableDefinition,
};
use pgseed_generate::{GeneratorRegistry, RowRecord, RowSynthesizer};
use pgseed_introspect::InspectOptions;
use serde::Serialize;
use thiserror::Error;

use config::{
    ConnectionArgs, DEFAULT_ROW_COUNT, FileConfig, parse_column_def, parse_mapping_pair,
    resolve_connection,
};
use logging::init_logging;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Failed(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "pgseed",
    version,
    about = "Fill Postgres tables with generated test data"
)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,
    /// TOML file with [connection] and [generate] sections.
    #[arg(long, env = "PGSEED_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Schema to inspect.
    #[arg(long, default_value = DEFAULT_SCHEMA, global = true)]
    schema: String,
    /// Leave views out of table listings.
    #[arg(long, default_value_t = false, global = true)]
    exclude_views: bool,
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Append JSON logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List tables in the schema.
    Tables,
    /// List a table's columns in catalog order.
    Columns { table: String },
    /// Create a table from column definitions.
    CreateTable(CreateTableArgs),
    /// Synthesize rows and insert them in one transaction.
    Generate(GenerateArgs),
    /// Print the generator catalog.
    Generators,
    /// Print the column type presets.
    Types,
}

#[derive(Args, Debug)]
struct CreateTableArgs {
    name: String,
    /// Column as name:TYPE; a bare name is VARCHAR(100).
    #[arg(long = "column", value_name = "NAME:TYPE", value_parser = parse_column_def)]
    columns: Vec<(String, Option<String>)>,
    /// Do not add the `id SERIAL PRIMARY KEY` column.
    #[arg(long, default_value_t = false)]
    no_id: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Target table; falls back to [generate].table. Not needed with --dry-run.
    table: Option<String>,
    /// Rows to generate; falls back to [generate].rows.
    #[arg(long)]
    rows: Option<usize>,
    /// Column mapping as column=generator.id, merged over [generate.mappings].
    #[arg(long = "map", value_name = "COLUMN=ID", value_parser = parse_mapping_pair)]
    mappings: Vec<(String, String)>,
    /// Print synthesized rows instead of inserting them. Columns come from
    /// the mapping keys; the table is not consulted and no connection opens.
    #[arg(long, default_value_t = false)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let file = FileConfig::load_optional(cli.config.as_deref())?;
    let inspect = InspectOptions {
        schema: cli.schema.clone(),
        include_views: !cli.exclude_views,
    };

    match cli.command {
        Command::Tables => {
            let mut backend = connect(&cli.connection, &file, inspect).await?;
            let envelope = backend.list_tables().await;
            emit(&envelope)
        }
        Command::Columns { table } => {
            let mut backend = connect(&cli.connection, &file, inspect).await?;
            let envelope = backend.list_columns(&table).await;
            emit(&envelope)
        }
        Command::CreateTable(args) => {
            let definition = table_definition(args);
            definition.validate()?;
            let mut backend = connect(&cli.connection, &file, inspect).await?;
            let envelope = backend.create_table(&definition).await;
            emit(&envelope)
        }
        Command::Generate(args) => run_generate(args, &cli.connection, &file, inspect).await,
        Command::Generators => print_json(&GeneratorRegistry::new().catalog()),
        Command::Types => print_json(&COLUMN_TYPE_PRESETS),
    }
}

async fn connect(
    args: &ConnectionArgs,
    file: &FileConfig,
    inspect: InspectOptions,
) -> Result<Backend, CliError> {
    let options = resolve_connection(args, &file.connection)?;
    tracing::info!(
        event = "connecting",
        host = %options.get_host(),
        port = options.get_port(),
        database = ?options.get_database()
    );

    let mut backend = Backend::new().with_inspect_options(inspect);
    let envelope = backend.connect_with(options).await;
    if !envelope.is_success() {
        emit(&envelope)?;
    }
    Ok(backend)
}

async fn run_generate(
    args: GenerateArgs,
    connection: &ConnectionArgs,
    file: &FileConfig,
    inspect: InspectOptions,
) -> Result<(), CliError> {
    let rows = args
        .rows
        .or(file.generate.rows)
        .unwrap_or(DEFAULT_ROW_COUNT);

    let mut mapping: GeneratorMapping = file.generate.mappings.clone();
    for (column, id) in args.mappings {
        mapping.assign(column, id);
    }

    if args.dry_run {
        return print_json(&dry_run_records(&mapping, rows));
    }

    let table = args
        .table
        .or_else(|| file.generate.table.clone())
        .ok_or_else(|| {
            CliError::InvalidConfig("no table given and [generate].table is unset".to_string())
        })?;
    if mapping.is_empty() {
        tracing::warn!(event = "empty_mapping", table = %table);
    }

    let mut backend = connect(connection, file, inspect).await?;
    let job = GenerationJob::new(table, rows, mapping);
    let envelope = backend.run_job(&job).await;
    for line in backend.log() {
        eprintln!("{line}");
    }
    emit(&envelope)
}

/// Rows for `--dry-run`: one column per mapping key, in key order.
fn dry_run_records(mapping: &GeneratorMapping, rows: usize) -> Vec<RowRecord> {
    let registry = GeneratorRegistry::new();
    let columns: Vec<&str> = mapping.iter().map(|(column, _)| column).collect();
    RowSynthesizer::new(&registry).synthesize(&columns, mapping, rows)
}

fn table_definition(args: CreateTableArgs) -> TableDefinition {
    let mut definition = if args.no_id {
        TableDefinition::with_columns(args.name, Vec::new())
    } else {
        TableDefinition::new(args.name)
    };
    for (name, data_type) in args.columns {
        let data_type =
            data_type.unwrap_or_else(|| TableDefinition::DEFAULT_COLUMN_TYPE.to_string());
        definition.columns.push(ColumnDescriptor::new(name, data_type));
    }
    definition
}

/// Print an envelope and turn a failure into a non-zero exit.
fn emit<T: Serialize>(envelope: &Envelope<T>) -> Result<(), CliError> {
    print_json(envelope)?;
    if envelope.is_success() {
        return Ok(());
    }
    Err(CliError::Failed(envelope.error.clone().unwrap_or_default()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

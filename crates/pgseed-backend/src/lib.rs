//! Database-facing half of pgseed.
//!
//! [`Backend`] owns the live [`Session`], the generator registry and the
//! session log, and exposes the request/response operations the CLI calls.
//! Every operation answers with an [`Envelope`]; errors never escape as
//! `Err`.

pub mod backend;
pub mod ddl;
pub mod envelope;
pub mod insert;
pub mod job;
pub mod session;

pub use backend::Backend;
pub use ddl::create_table;
pub use envelope::{Ack, Columns, Envelope, Inserted, Tables};
pub use insert::insert_rows;
pub use job::{GenerationJob, SessionLog};
pub use session::{Session, connect_options, parse_connection_url};
pub use sqlx::postgres::PgConnectOptions;

//! Fake-data generation for pgseed.
//!
//! A fixed catalog of named value producers (`person.email`,
//! `custom.vaccine`, ...) and the row synthesizer that turns a column list
//! plus a generator mapping into in-memory row records.

pub mod errors;
pub mod generators;
pub mod model;
pub mod synth;

pub use errors::GenerationError;
pub use generators::{Generator, GeneratorInfo, GeneratorRegistry, parse_generator_id};
pub use model::{GeneratedValue, RowRecord};
pub use synth::RowSynthesizer;

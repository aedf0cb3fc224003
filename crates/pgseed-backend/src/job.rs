use uuid::Uuid;

use pgseed_core::GeneratorMapping;

/// One request to fill `table` with `row_count` synthesized rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationJob {
    pub id: Uuid,
    pub table: String,
    pub row_count: usize,
    pub mapping: GeneratorMapping,
}

impl GenerationJob {
    pub fn new(table: impl Into<String>, row_count: usize, mapping: GeneratorMapping) -> Self {
        Self {
            id: Uuid::new_v4(),
            table: table.into(),
            row_count,
            mapping,
        }
    }
}

/// Append-only, human-readable record of what happened in this session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionLog {
    lines: Vec<String>,
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(event = "session_log", line = %line);
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn job_started(&mut self, job: &GenerationJob) {
        self.push(format!(
            "Starting generation for {} ({} rows)...",
            job.table, job.row_count
        ));
    }

    pub(crate) fn rows_generated(&mut self, count: usize) {
        self.push(format!(
            "Generated {count} records in memory. Sending to DB..."
        ));
    }

    pub(crate) fn rows_inserted(&mut self, table: &str, count: u64) {
        self.push(format!("Successfully inserted {count} rows into {table}."));
    }

    pub(crate) fn error(&mut self, message: impl std::fmt::Display) {
        self.push(format!("Error: {message}"));
    }
}

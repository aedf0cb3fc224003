use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ident::{quote_ident, validate_identifier, validate_type_clause};

/// Column name and free-form SQL type text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub column_name: String,
    pub data_type: String,
}

impl ColumnDescriptor {
    pub fn new(column_name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            data_type: data_type.into(),
        }
    }
}

/// User-authored input for `CREATE TABLE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    pub table_name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDefinition {
    pub const DEFAULT_KEY_TYPE: &'static str = "SERIAL PRIMARY KEY";
    pub const DEFAULT_COLUMN_TYPE: &'static str = "VARCHAR(100)";

    /// A fresh definition holding only an `id SERIAL PRIMARY KEY` column.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: vec![ColumnDescriptor::new("id", Self::DEFAULT_KEY_TYPE)],
        }
    }

    /// A definition with exactly the given columns.
    pub fn with_columns(table_name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            table_name: table_name.into(),
            columns,
        }
    }

    /// Append a column using the default `VARCHAR(100)` type.
    pub fn add_column(&mut self, column_name: impl Into<String>) -> &mut ColumnDescriptor {
        self.columns
            .push(ColumnDescriptor::new(column_name, Self::DEFAULT_COLUMN_TYPE));
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    pub fn remove_column(&mut self, index: usize) -> Option<ColumnDescriptor> {
        (index < self.columns.len()).then(|| self.columns.remove(index))
    }

    /// Replace the column at `index` in place.
    pub fn update_column(&mut self, index: usize, column: ColumnDescriptor) -> Result<()> {
        let slot = self.columns.get_mut(index).ok_or_else(|| {
            Error::InvalidDefinition(format!("no column at position {index}"))
        })?;
        *slot = column;
        Ok(())
    }

    /// Check names and type clauses without touching a database.
    pub fn validate(&self) -> Result<()> {
        validate_identifier("table", &self.table_name)?;
        if self.columns.is_empty() {
            return Err(Error::InvalidDefinition(format!(
                "table '{}' has no columns",
                self.table_name
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            validate_identifier("column", &column.column_name)?;
            validate_type_clause(&column.column_name, &column.data_type)?;
            if !seen.insert(column.column_name.as_str()) {
                return Err(Error::InvalidDefinition(format!(
                    "column '{}' is defined twice",
                    column.column_name
                )));
            }
        }
        Ok(())
    }

    /// Render the `CREATE TABLE` statement with quoted identifiers.
    pub fn create_table_sql(&self) -> Result<String> {
        self.validate()?;
        let columns = self
            .columns
            .iter()
            .map(|column| {
                format!(
                    "{} {}",
                    quote_ident(&column.column_name),
                    column.data_type.trim()
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!(
            "CREATE TABLE {} ({columns})",
            quote_ident(&self.table_name)
        ))
    }
}

/// A type clause offered by the table builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnTypePreset {
    pub clause: &'static str,
    pub description: &'static str,
}

const fn preset(clause: &'static str, description: &'static str) -> ColumnTypePreset {
    ColumnTypePreset {
        clause,
        description,
    }
}

pub const COLUMN_TYPE_PRESETS: &[ColumnTypePreset] = &[
    preset("SERIAL PRIMARY KEY", "Auto-increment ID"),
    preset("BIGSERIAL PRIMARY KEY", "Large Auto-increment ID"),
    preset("SMALLINT", "Small Integer (-32,768 to 32,767)"),
    preset("INTEGER", "Standard Integer"),
    preset("BIGINT", "Large Integer"),
    preset("DECIMAL(10,2)", "Exact Decimal (10 digits, 2 decimal)"),
    preset("NUMERIC(10,2)", "Exact Numeric (10 digits, 2 decimal)"),
    preset("REAL", "Float (4 bytes)"),
    preset("DOUBLE PRECISION", "Float (8 bytes)"),
    preset("VARCHAR(50)", "Variable Text (50 chars)"),
    preset("VARCHAR(100)", "Variable Text (100 chars)"),
    preset("VARCHAR(255)", "Variable Text (255 chars)"),
    preset("CHAR(10)", "Fixed Text (10 chars)"),
    preset("TEXT", "Unlimited Text"),
    preset("DATE", "Date Only"),
    preset("TIME", "Time Only"),
    preset("TIMESTAMP", "Date & Time"),
    preset("TIMESTAMPTZ", "Date & Time with Timezone"),
    preset("BOOLEAN", "True/False"),
    preset("UUID", "Unique Identifier"),
    preset("JSON", "JSON Data"),
    preset("JSONB", "Binary JSON (faster)"),
];

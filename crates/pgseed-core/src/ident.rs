//! Identifier quoting and DDL fragment validation.
//!
//! Only table and column names are ever spliced into SQL text. They go
//! through [`quote_ident`]; type clauses go through [`validate_type_clause`].

use crate::error::{Error, Result};

/// Quote a Postgres identifier, doubling embedded double quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Reject identifiers Postgres cannot store.
pub fn validate_identifier(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::InvalidDefinition(format!("{kind} name must not be empty")));
    }
    if name.contains('\0') {
        return Err(Error::InvalidDefinition(format!(
            "{kind} name '{}' contains a NUL byte",
            name.escape_debug()
        )));
    }
    // NAMEDATALEN - 1
    if name.len() > 63 {
        return Err(Error::InvalidDefinition(format!(
            "{kind} name '{name}' is longer than 63 bytes"
        )));
    }
    Ok(())
}

/// Accept type clauses such as `VARCHAR(100)`, `NUMERIC(10, 2)` or
/// `SERIAL PRIMARY KEY`, and nothing that could end or comment out the
/// statement.
pub fn validate_type_clause(column: &str, clause: &str) -> Result<()> {
    let trimmed = clause.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidDefinition(format!(
            "column '{column}' has an empty type"
        )));
    }
    if trimmed.contains("--") || trimmed.contains("/*") {
        return Err(Error::InvalidDefinition(format!(
            "type for column '{column}' contains a comment marker"
        )));
    }

    let mut depth = 0_i32;
    for ch in trimmed.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    break;
                }
            }
            c if c.is_ascii_alphanumeric() || c.is_whitespace() => {}
            '_' | '.' | '[' | ']' => {}
            // Only inside modifiers; at the top level it starts another column.
            ',' if depth > 0 => {}
            other => {
                return Err(Error::InvalidDefinition(format!(
                    "type for column '{column}' contains unsupported character '{other}'"
                )));
            }
        }
    }
    if depth != 0 {
        return Err(Error::InvalidDefinition(format!(
            "type for column '{column}' has unbalanced parentheses"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes_identifiers() {
        assert_eq!(quote_ident("users"), "\"users\"");
        assert_eq!(quote_ident("Mixed Case"), "\"Mixed Case\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[test]
    fn accepts_common_type_clauses() {
        for clause in [
            "SERIAL PRIMARY KEY",
            "VARCHAR(100)",
            "NUMERIC(10,2)",
            "DOUBLE PRECISION",
            "TIMESTAMPTZ",
            "INTEGER NOT NULL",
            "TEXT[]",
        ] {
            assert!(validate_type_clause("c", clause).is_ok(), "{clause}");
        }
    }

    #[test]
    fn rejects_statement_breakers() {
        for clause in [
            "",
            "INTEGER); DROP TABLE users",
            "TEXT -- trailing",
            "TEXT /* x */",
            "VARCHAR(10",
            "TEXT DEFAULT 'x'",
            "INTEGER, evil TEXT",
            "INTEGER, LIKE pg_authid INCLUDING ALL",
            "NUMERIC(10,2), x INT",
        ] {
            assert!(validate_type_clause("c", clause).is_err(), "{clause}");
        }
    }

    #[test]
    fn rejects_empty_and_long_identifiers() {
        assert!(validate_identifier("table", "  ").is_err());
        assert!(validate_identifier("table", &"x".repeat(64)).is_err());
        assert!(validate_identifier("table", "users").is_ok());
    }
}

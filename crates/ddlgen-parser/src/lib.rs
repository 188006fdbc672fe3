//! Parses a single `CREATE TABLE` statement into a [`Table`].
//!
//! The parser is deliberately shallow: it understands enough structure to
//! pull out the table name, the column clauses and the primary key, and
//! ignores everything else (engine options, defaults, comments). It is not a
//! SQL validator.

pub mod clause;
pub mod error;

use ddlgen_core::{Column, Table};
use log::{debug, warn};

pub use error::ParseError;

use crate::clause::{
    extract_parenthesized, extract_table_name, is_table_constraint, normalize_whitespace,
    parse_column_clause, split_top_level, strip_comments, table_primary_key_columns,
};

/// Parse DDL text into a table model.
///
/// Fails when the `CREATE TABLE <name>` header, the parenthesized column
/// block, or at least one column definition is missing. Columns keep their
/// source order; a column is a primary key when its clause says so inline or
/// when a table-level `PRIMARY KEY (...)` lists it.
pub fn parse(ddl: &str) -> Result<Table, ParseError> {
    let sql = normalize_whitespace(&strip_comments(ddl));

    let (source_name, rest) = extract_table_name(&sql).ok_or(ParseError::MissingTableName)?;
    let block = extract_parenthesized(rest).ok_or(ParseError::MissingColumnDefinitions)?;

    let mut columns: Vec<Column> = Vec::new();
    for clause in split_top_level(block) {
        if is_table_constraint(clause) {
            debug!("{source_name}: skipping table constraint `{clause}`");
            continue;
        }
        match parse_column_clause(clause) {
            Some(column) => columns.push(column),
            None => warn!("{source_name}: ignoring clause without name and type `{clause}`"),
        }
    }

    for key in table_primary_key_columns(block) {
        match columns
            .iter_mut()
            .find(|c| c.column_name().eq_ignore_ascii_case(&key))
        {
            Some(column) => column.mark_primary_key(),
            None => warn!("{source_name}: primary key references unknown column `{key}`"),
        }
    }

    let table = Table::new(source_name, columns).map_err(|_| ParseError::NoValidColumns)?;
    debug!(
        "parsed table {} ({} columns, {} primary key)",
        table.table_name(),
        table.columns().len(),
        table.primary_key_columns().len()
    );
    Ok(table)
}

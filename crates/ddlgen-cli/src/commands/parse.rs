use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use ddlgen_core::Table;

use crate::utils::read_table;

pub fn cmd_parse(file: &Path, json: bool) -> Result<()> {
    let table = read_table(file)?;

    if json {
        let out = serde_json::to_string_pretty(&table).context("serialize table")?;
        println!("{out}");
        return Ok(());
    }

    println!(
        "{} {} {}",
        "Table:".bright_cyan().bold(),
        table.table_name().bright_white().bold(),
        format!("({})", table.source_name()).bright_black()
    );
    for line in describe_columns(&table) {
        println!("  {line}");
    }
    Ok(())
}

/// One aligned line per column: name, SQL type, Java type, key marker.
fn describe_columns(table: &Table) -> Vec<String> {
    let name_width = table
        .columns()
        .iter()
        .map(|c| c.column_name().len())
        .max()
        .unwrap_or(0);
    let type_width = table
        .columns()
        .iter()
        .map(|c| c.sql_type().len())
        .max()
        .unwrap_or(0);

    table
        .columns()
        .iter()
        .map(|c| {
            let key = if c.is_primary_key() { " PK" } else { "" };
            format!(
                "{:<name_width$}  {:<type_width$}  {}{key}",
                c.column_name(),
                c.sql_type(),
                c.host_type()
            )
        })
        .collect()
}

use std::path::Path;

use anyhow::{Context, Result};
use ddlgen_core::Table;
use ddlgen_exporter::build_context;
use ddlgen_loader::load_config_or_default;

use crate::utils::{read_table, resolve_base_package};

pub fn cmd_context(file: &Path, package: Option<&str>) -> Result<()> {
    let config = load_config_or_default(None)?;
    let table = read_table(file)?;
    let json = context_json(&table, resolve_base_package(package, &config))?;
    println!("{json}");
    Ok(())
}

fn context_json(table: &Table, base_package: Option<&str>) -> Result<String> {
    let ctx = build_context(table, base_package);
    serde_json::to_string_pretty(&ctx).context("serialize render context")
}

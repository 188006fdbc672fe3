use std::path::Path;

use anyhow::{Context, Result};
use ddlgen_config::DdlgenConfig;
use ddlgen_core::Table;
use ddlgen_loader::load_ddl_file;

/// Initialise env_logger; `RUST_LOG` still wins over the flags.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = log_level(verbose, quiet);
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

pub fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Command line (or `DDLGEN_BASE_PACKAGE`) beats the config file.
pub fn resolve_base_package<'a>(
    cli_package: Option<&'a str>,
    config: &'a DdlgenConfig,
) -> Option<&'a str> {
    cli_package
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .or_else(|| config.base_package())
}

/// Read and parse one DDL file.
pub fn read_table(path: &Path) -> Result<Table> {
    let source = load_ddl_file(path)?;
    let table = ddlgen_loader::parse_sources(vec![source])?
        .pop()
        .map(|loaded| loaded.table)
        .with_context(|| format!("no table in {}", path.display()))?;
    Ok(table)
}

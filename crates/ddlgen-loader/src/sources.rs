use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ddlgen_config::DdlgenConfig;
use ddlgen_core::Table;

/// Raw text of one `.sql` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DdlSource {
    pub path: PathBuf,
    pub sql: String,
}

/// A DDL file together with the table parsed from it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub source: DdlSource,
    pub table: Table,
}

/// Read a single DDL file.
pub fn load_ddl_file(path: &Path) -> Result<DdlSource> {
    let sql =
        fs::read_to_string(path).with_context(|| format!("read DDL file: {}", path.display()))?;
    Ok(DdlSource {
        path: path.to_path_buf(),
        sql,
    })
}

/// Load every `.sql` file under `dir` (recursively), sorted by path.
///
/// A missing directory yields no sources.
pub fn load_ddl_sources(dir: &Path) -> Result<Vec<DdlSource>> {
    let mut paths = Vec::new();
    if dir.exists() {
        collect_sql_files(dir, &mut paths)?;
    }
    paths.sort();
    paths.iter().map(|p| load_ddl_file(p)).collect()
}

fn collect_sql_files(dir: &Path, acc: &mut Vec<PathBuf>) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("read DDL directory: {}", dir.display()))?;

    for entry in entries {
        let entry = entry.context("read directory entry")?;
        let path = entry.path();

        if path.is_dir() {
            collect_sql_files(&path, acc)?;
            continue;
        }

        let is_sql = path
            .extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"));
        if path.is_file() && is_sql {
            acc.push(path);
        }
    }
    Ok(())
}

/// Parse the given sources, rejecting two files that define the same table.
pub fn parse_sources(sources: Vec<DdlSource>) -> Result<Vec<LoadedTable>> {
    let mut seen: HashMap<String, PathBuf> = HashMap::new();
    let mut tables = Vec::with_capacity(sources.len());

    for source in sources {
        let table = ddlgen_parser::parse(&source.sql)
            .with_context(|| format!("parse DDL: {}", source.path.display()))?;

        if let Some(first) = seen.insert(table.table_name().to_string(), source.path.clone()) {
            anyhow::bail!(
                "duplicate table name '{}' in {} and {}",
                table.table_name(),
                first.display(),
                source.path.display()
            );
        }
        log::debug!("loaded {} from {}", table.table_name(), source.path.display());
        tables.push(LoadedTable { source, table });
    }

    Ok(tables)
}

/// Load and parse every DDL file in the configured directory.
pub fn load_tables(config: &DdlgenConfig) -> Result<Vec<LoadedTable>> {
    let sources = load_ddl_sources(config.ddl_dir())?;
    parse_sources(sources)
}

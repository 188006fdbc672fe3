use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use ddlgen_config::DdlgenConfig;
use ddlgen_loader::CONFIG_FILE;

pub fn cmd_init() -> Result<()> {
    let path = PathBuf::from(CONFIG_FILE);
    if path.exists() {
        bail!("{CONFIG_FILE} already exists");
    }

    let config = DdlgenConfig::default();
    let json = serde_json::to_string_pretty(&config).context("serialize default config")?;
    fs::write(&path, json).with_context(|| format!("write {CONFIG_FILE}"))?;
    println!("{} {}", "Created".bright_green(), path.display());
    Ok(())
}

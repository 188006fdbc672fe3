use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use ddlgen_config::{ArtifactKind, DdlgenConfig};
use ddlgen_exporter::{BuiltinRenderer, GeneratedArtifact, build_context, generate_from_context};
use ddlgen_loader::{DdlSource, load_config_or_default, load_ddl_file, load_ddl_sources, parse_sources};
use dialoguer::MultiSelect;
use futures::future::try_join_all;
use tokio::fs;

use crate::utils::resolve_base_package;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// DDL files to read; defaults to every `.sql` file under the configured ddlDir.
    pub files: Vec<PathBuf>,
    /// Base Java package for generated classes.
    #[arg(short, long, env = "DDLGEN_BASE_PACKAGE")]
    pub package: Option<String>,
    /// Root of the target project (overrides projectRoot in ddlgen.json).
    #[arg(long)]
    pub project_root: Option<PathBuf>,
    /// Only generate these artifacts.
    #[arg(long, value_enum, num_args = 1..)]
    pub only: Vec<ArtifactKind>,
    /// Print the destination of every file without writing anything.
    #[arg(long)]
    pub dry_run: bool,
    /// Skip the interactive artifact selection.
    #[arg(short, long)]
    pub yes: bool,
    /// Overwrite files that already exist.
    #[arg(long)]
    pub force: bool,
}

pub async fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let config = load_config_or_default(None)?;
    let sources = collect_sources(&args, &config)?;
    if sources.is_empty() {
        println!(
            "{} {}",
            "No DDL files found in".bright_yellow(),
            config.ddl_dir().display()
        );
        return Ok(());
    }
    let tables = parse_sources(sources)?;

    let mut kinds = selected_kinds(&args.only, &config);
    if !args.yes && !args.dry_run && std::io::stdin().is_terminal() {
        kinds = prompt_kinds(&kinds)?;
    }
    if kinds.is_empty() {
        println!("{}", "No artifacts selected.".bright_yellow());
        return Ok(());
    }

    let project_root = args
        .project_root
        .clone()
        .unwrap_or_else(|| config.project_root().to_path_buf());
    let base_package = resolve_base_package(args.package.as_deref(), &config);

    let mut artifacts: Vec<GeneratedArtifact> = Vec::new();
    for loaded in &tables {
        let ctx = build_context(&loaded.table, base_package);
        let rendered = generate_from_context(&ctx, &project_root, &BuiltinRenderer, &kinds)
            .with_context(|| format!("render {}", loaded.source.path.display()))?;
        artifacts.extend(rendered);
    }

    if args.dry_run {
        for artifact in &artifacts {
            println!(
                "{} {}",
                "Would write".bright_cyan(),
                artifact.path.path().display()
            );
        }
        return Ok(());
    }

    if !args.force {
        let existing: Vec<PathBuf> = artifacts
            .iter()
            .map(|a| a.path.path())
            .filter(|p| p.exists())
            .collect();
        if let Some(first) = existing.first() {
            bail!(
                "{} file(s) already exist (first: {}); rerun with --force to overwrite",
                existing.len(),
                first.display()
            );
        }
    }

    write_artifacts(&artifacts).await?;
    println!(
        "{} {} file(s) for {} table(s)",
        "Generated".bright_green().bold(),
        artifacts.len().to_string().bright_yellow(),
        tables.len().to_string().bright_yellow()
    );
    Ok(())
}

fn collect_sources(args: &GenerateArgs, config: &DdlgenConfig) -> Result<Vec<DdlSource>> {
    if args.files.is_empty() {
        load_ddl_sources(config.ddl_dir())
    } else {
        args.files.iter().map(|p| load_ddl_file(p)).collect()
    }
}

/// `--only` wins over the configured artifacts; both keep canonical order.
fn selected_kinds(only: &[ArtifactKind], config: &DdlgenConfig) -> Vec<ArtifactKind> {
    if only.is_empty() {
        config.artifacts()
    } else {
        ArtifactKind::ALL
            .into_iter()
            .filter(|k| only.contains(k))
            .collect()
    }
}

fn prompt_kinds(kinds: &[ArtifactKind]) -> Result<Vec<ArtifactKind>> {
    let labels: Vec<&str> = kinds.iter().map(|k| k.suffix()).collect();
    let picked = MultiSelect::new()
        .with_prompt("Artifacts to generate")
        .items(&labels)
        .defaults(&vec![true; labels.len()])
        .interact()
        .context("select artifacts")?;
    Ok(picked.into_iter().map(|i| kinds[i]).collect())
}

/// Write all files concurrently, creating parent directories as needed.
async fn write_artifacts(artifacts: &[GeneratedArtifact]) -> Result<()> {
    let writes: Vec<_> = artifacts
        .iter()
        .map(|artifact| async move {
            let out_path = artifact.path.path();
            fs::create_dir_all(&artifact.path.destination_directory)
                .await
                .with_context(|| {
                    format!(
                        "create directory {}",
                        artifact.path.destination_directory.display()
                    )
                })?;
            fs::write(&out_path, &artifact.content)
                .await
                .with_context(|| format!("write {}", out_path.display()))?;
            log::info!("wrote {}", out_path.display());
            Ok::<(), anyhow::Error>(())
        })
        .collect();

    try_join_all(writes).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddlgen_exporter::LAYOUT_MARKER;
    use ddlgen_loader::CONFIG_FILE;
    use serial_test::serial;
    use std::env;
    use std::fs as std_fs;
    use std::path::Path;
    use tempfile::tempdir;

    struct CwdGuard {
        original: PathBuf,
    }

    impl CwdGuard {
        fn new(dir: &PathBuf) -> Self {
            let original = env::current_dir().unwrap();
            env::set_current_dir(dir).unwrap();
            Self { original }
        }
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = env::set_current_dir(&self.original);
        }
    }

    fn write_ddl(path: &Path, sql: &str) {
        if let Some(parent) = path.parent() {
            std_fs::create_dir_all(parent).unwrap();
        }
        std_fs::write(path, sql).unwrap();
    }

    fn args() -> GenerateArgs {
        GenerateArgs {
            yes: true,
            ..Default::default()
        }
    }

    const USERS: &str = "CREATE TABLE users (\n  id INT PRIMARY KEY,\n  user_name VARCHAR(50)\n);";

    #[tokio::test]
    #[serial]
    async fn generates_into_flat_project() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_ddl(Path::new("ddl/users.sql"), USERS);

        cmd_generate(args()).await.unwrap();

        for kind in ArtifactKind::ALL {
            assert!(Path::new(&kind.file_name("Users")).exists(), "{kind:?}");
        }
        let xml = std_fs::read_to_string("UsersMapper.xml").unwrap();
        assert!(xml.contains("egovframework.example.sample.service.impl.UsersMapper"));
    }

    #[tokio::test]
    #[serial]
    async fn routes_into_standard_layout_with_config_package() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        std_fs::write(
            CONFIG_FILE,
            r#"{"basePackage": "com.acme.board", "projectRoot": "app"}"#,
        )
        .unwrap();
        std_fs::create_dir_all(Path::new("app").join(LAYOUT_MARKER)).unwrap();
        write_ddl(Path::new("ddl/users.sql"), USERS);

        cmd_generate(GenerateArgs {
            only: vec![ArtifactKind::Vo, ArtifactKind::MapperXml],
            ..args()
        })
        .await
        .unwrap();

        let vo = PathBuf::from("app/src/main/java/egovframework/users/service/UsersVO.java");
        let xml =
            PathBuf::from("app/src/main/resources/egovframework/mapper/users/UsersMapper.xml");
        assert!(vo.exists());
        assert!(xml.exists());
        assert!(!PathBuf::from("app/src/main/java/egovframework/users/web").exists());
        let vo_text = std_fs::read_to_string(vo).unwrap();
        assert!(vo_text.starts_with("package com.acme.board.service;"));
    }

    #[tokio::test]
    #[serial]
    async fn explicit_files_and_package_override_config() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_ddl(Path::new("schema/orders.sql"), "CREATE TABLE orders (id BIGINT)");

        cmd_generate(GenerateArgs {
            files: vec![PathBuf::from("schema/orders.sql")],
            package: Some("com.shop".into()),
            project_root: Some(PathBuf::from("out")),
            only: vec![ArtifactKind::Service],
            ..args()
        })
        .await
        .unwrap();

        let text = std_fs::read_to_string("out/OrdersService.java").unwrap();
        assert!(text.starts_with("package com.shop.service;"));
    }

    #[tokio::test]
    #[serial]
    async fn refuses_to_overwrite_without_force() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_ddl(Path::new("ddl/users.sql"), USERS);
        std_fs::write("UsersVO.java", "hand written").unwrap();

        let err = cmd_generate(args()).await.unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(std_fs::read_to_string("UsersVO.java").unwrap(), "hand written");
        assert!(!Path::new("UsersMapper.xml").exists());

        cmd_generate(GenerateArgs {
            force: true,
            ..args()
        })
        .await
        .unwrap();
        assert_ne!(std_fs::read_to_string("UsersVO.java").unwrap(), "hand written");
    }

    #[tokio::test]
    #[serial]
    async fn dry_run_writes_nothing() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_ddl(Path::new("ddl/users.sql"), USERS);

        cmd_generate(GenerateArgs {
            dry_run: true,
            ..args()
        })
        .await
        .unwrap();
        assert!(!Path::new("UsersVO.java").exists());
    }

    #[tokio::test]
    #[serial]
    async fn missing_ddl_dir_is_not_an_error() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        cmd_generate(args()).await.unwrap();
    }

    #[tokio::test]
    #[serial]
    async fn parse_failure_names_the_file() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(&tmp.path().to_path_buf());
        write_ddl(Path::new("ddl/broken.sql"), "CREATE TABLE broken");

        let err = cmd_generate(args()).await.unwrap_err();
        assert!(err.to_string().contains("broken.sql"));
    }

    #[test]
    fn only_overrides_config_in_canonical_order() {
        let config = DdlgenConfig {
            artifacts: vec![ArtifactKind::Vo],
            ..Default::default()
        };
        assert_eq!(selected_kinds(&[], &config), vec![ArtifactKind::Vo]);
        assert_eq!(
            selected_kinds(&[ArtifactKind::ListJsp, ArtifactKind::MapperXml], &config),
            vec![ArtifactKind::MapperXml, ArtifactKind::ListJsp]
        );
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ddlgen_config::DdlgenConfig;

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "ddlgen.json";

/// Read and parse a config file that must exist.
pub fn load_config_from_path(path: &Path) -> Result<DdlgenConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parse config: {}", path.display()))
}

/// `ddlgen.json` under `project_root` (or the current directory), or the
/// defaults when there is none.
pub fn load_config_or_default(project_root: Option<&Path>) -> Result<DdlgenConfig> {
    let path = project_root.map_or_else(|| PathBuf::from(CONFIG_FILE), |r| r.join(CONFIG_FILE));
    if !path.is_file() {
        log::debug!("{} not found, using defaults", path.display());
        return Ok(DdlgenConfig::default());
    }
    let config = load_config_from_path(&path)?;
    log::debug!("loaded {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::tempdir;

    struct CwdGuard {
        original: PathBuf,
    }

    impl CwdGuard {
        fn new(dir: &Path) -> Self {
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

    #[test]
    fn missing_file_errors_with_path() {
        let tmp = tempdir().unwrap();
        let err = load_config_from_path(&tmp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(err.to_string().contains("read config"));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn invalid_json_is_reported() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("parse config"));
    }

    #[test]
    fn falls_back_to_defaults() {
        let tmp = tempdir().unwrap();
        let cfg = load_config_or_default(Some(tmp.path())).unwrap();
        assert_eq!(cfg, DdlgenConfig::default());
    }

    #[test]
    fn reads_project_root() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), r#"{"ddlDir": "schema"}"#).unwrap();
        let cfg = load_config_or_default(Some(tmp.path())).unwrap();
        assert_eq!(cfg.ddl_dir(), Path::new("schema"));
    }

    #[test]
    fn broken_config_is_not_silently_replaced() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[]").unwrap();
        assert!(load_config_or_default(Some(tmp.path())).is_err());
    }

    #[test]
    #[serial]
    fn reads_current_dir_without_root() {
        let tmp = tempdir().unwrap();
        let _guard = CwdGuard::new(tmp.path());
        fs::write(CONFIG_FILE, r#"{"basePackage": "com.acme.shop"}"#).unwrap();

        let cfg = load_config_or_default(None).unwrap();
        assert_eq!(cfg.base_package(), Some("com.acme.shop"));
    }
}

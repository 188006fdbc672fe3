use std::path::{Path, PathBuf};

use ddlgen_naming::to_snake_case;

/// Directory whose presence marks a standard Maven-style project.
pub const LAYOUT_MARKER: &str = "src/main/java";

/// Placeholder replaced by the snake-cased table name in rule destinations.
const TABLE_PLACEHOLDER: &str = "{table}";

/// Where one generated file should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSpec {
    pub destination_directory: PathBuf,
    pub file_name: String,
}

impl PathSpec {
    /// Full path of the file.
    pub fn path(&self) -> PathBuf {
        self.destination_directory.join(&self.file_name)
    }
}

/// One routing rule: a file whose name ends with any of `suffixes` goes to
/// `destination` (relative to the project root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRule {
    pub suffixes: Vec<&'static str>,
    pub destination: &'static str,
}

impl RouteRule {
    pub fn new(suffixes: &[&'static str], destination: &'static str) -> Self {
        Self {
            suffixes: suffixes.to_vec(),
            destination,
        }
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.suffixes.iter().any(|s| file_name.ends_with(s))
    }

    fn directory(&self, project_root: &Path, table: &str) -> PathBuf {
        project_root.join(self.destination.replace(TABLE_PLACEHOLDER, table))
    }
}

/// Ordered rule table; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    rules: Vec<RouteRule>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            rules: vec![
                RouteRule::new(
                    &["Mapper.xml"],
                    "src/main/resources/egovframework/mapper/{table}",
                ),
                RouteRule::new(
                    &["List.jsp"],
                    "src/main/webapp/WEB-INF/jsp/egovframework/{table}",
                ),
                RouteRule::new(
                    &["Register.jsp"],
                    "src/main/webapp/WEB-INF/jsp/egovframework/{table}",
                ),
                RouteRule::new(
                    &["Controller.java"],
                    "src/main/java/egovframework/{table}/web",
                ),
                RouteRule::new(
                    &["ServiceImpl.java", "DAO.java", "Mapper.java"],
                    "src/main/java/egovframework/{table}/service/impl",
                ),
                RouteRule::new(
                    &["Service.java", "DefaultVO.java", "VO.java"],
                    "src/main/java/egovframework/{table}/service",
                ),
            ],
        }
    }
}

impl Router {
    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    /// Insert a rule ahead of the built-in ones.
    pub fn with_rule(mut self, rule: RouteRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Decide where `file_name` for `table_name` goes.
    ///
    /// Flat projects and unmatched file names land in `project_root`.
    pub fn resolve(
        &self,
        project_root: &Path,
        table_name: &str,
        file_name: &str,
        layout_detected: bool,
    ) -> PathSpec {
        let destination_directory = if layout_detected {
            match self.rules.iter().find(|r| r.matches(file_name)) {
                Some(rule) => rule.directory(project_root, &to_snake_case(table_name)),
                None => {
                    log::debug!("no route for {file_name}, writing to project root");
                    project_root.to_path_buf()
                }
            }
        } else {
            project_root.to_path_buf()
        };

        PathSpec {
            destination_directory,
            file_name: file_name.to_string(),
        }
    }
}

/// True when `project_root` contains the standard source layout.
pub fn detect_layout(project_root: &Path) -> bool {
    project_root.join(LAYOUT_MARKER).is_dir()
}

/// Detect the layout and route a single file with the default rules.
pub fn resolve_path(project_root: &Path, table_name: &str, file_name: &str) -> PathSpec {
    Router::default().resolve(
        project_root,
        table_name,
        file_name,
        detect_layout(project_root),
    )
}

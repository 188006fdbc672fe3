use std::path::Path;

use chrono::NaiveDate;
use ddlgen_core::Table;
use ddlgen_parser::ParseError;

use crate::artifact::{ArtifactKind, ArtifactRenderer, RenderError};
use crate::context::{RenderContext, build_context, build_context_on};
use crate::route::{PathSpec, Router, detect_layout};

/// One rendered file and where it belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathSpec,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Parse one DDL statement and render the requested artifacts for it.
pub fn generate(
    ddl: &str,
    base_package: Option<&str>,
    project_root: &Path,
    renderer: &dyn ArtifactRenderer,
    kinds: &[ArtifactKind],
) -> Result<Vec<GeneratedArtifact>, GenerateError> {
    let table = ddlgen_parser::parse(ddl)?;
    let ctx = build_context(&table, base_package);
    Ok(generate_from_context(&ctx, project_root, renderer, kinds)?)
}

/// Render artifacts for an already parsed table with a fixed generation date.
pub fn generate_table_on(
    table: &Table,
    base_package: Option<&str>,
    date: NaiveDate,
    project_root: &Path,
    renderer: &dyn ArtifactRenderer,
    kinds: &[ArtifactKind],
) -> Result<Vec<GeneratedArtifact>, RenderError> {
    let ctx = build_context_on(table, base_package, date);
    generate_from_context(&ctx, project_root, renderer, kinds)
}

/// Render and route each requested kind for a prepared context.
///
/// The layout is detected once per call.
pub fn generate_from_context(
    ctx: &RenderContext,
    project_root: &Path,
    renderer: &dyn ArtifactRenderer,
    kinds: &[ArtifactKind],
) -> Result<Vec<GeneratedArtifact>, RenderError> {
    let router = Router::default();
    let layout_detected = detect_layout(project_root);
    log::debug!(
        "rendering {} artifact(s) for {} (standard layout: {layout_detected})",
        kinds.len(),
        ctx.table_name
    );

    kinds
        .iter()
        .map(|&kind| {
            let file_name = kind.file_name(&ctx.table_name);
            let content = renderer.render(kind, ctx)?;
            let path = router.resolve(project_root, &ctx.table_name, &file_name, layout_detected);
            Ok(GeneratedArtifact {
                kind,
                path,
                content,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BuiltinRenderer;
    use crate::route::LAYOUT_MARKER;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const USERS: &str = "CREATE TABLE users (id INT PRIMARY KEY, name VARCHAR(50));";

    struct FailOn(ArtifactKind);

    impl ArtifactRenderer for FailOn {
        fn render(&self, kind: ArtifactKind, ctx: &RenderContext) -> Result<String, RenderError> {
            if kind == self.0 {
                return Err(RenderError::Failed {
                    kind,
                    table: ctx.table_name.clone(),
                    message: "template missing".into(),
                });
            }
            Ok(String::new())
        }
    }

    #[test]
    fn generates_every_kind_in_flat_project() {
        let tmp = tempdir().unwrap();
        let out = generate(
            USERS,
            Some("com.acme"),
            tmp.path(),
            &BuiltinRenderer,
            &ArtifactKind::ALL,
        )
        .unwrap();

        assert_eq!(out.len(), 9);
        let kinds: Vec<ArtifactKind> = out.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, ArtifactKind::ALL.to_vec());
        for artifact in &out {
            assert_eq!(artifact.path.destination_directory, tmp.path());
            assert!(artifact.path.file_name.starts_with("Users"));
            assert!(!artifact.content.is_empty());
        }
        assert!(out[0].content.contains("com.acme.service.impl.UsersMapper"));
    }

    #[test]
    fn routes_into_standard_layout() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join(LAYOUT_MARKER)).unwrap();

        let out = generate(
            USERS,
            None,
            tmp.path(),
            &BuiltinRenderer,
            &[ArtifactKind::MapperXml, ArtifactKind::Controller],
        )
        .unwrap();

        assert_eq!(
            out[0].path.path(),
            tmp.path()
                .join("src/main/resources/egovframework/mapper/users/UsersMapper.xml")
        );
        assert_eq!(
            out[1].path.path(),
            tmp.path()
                .join("src/main/java/egovframework/users/web/UsersController.java")
        );
    }

    #[test]
    fn parse_errors_propagate_unchanged() {
        let err = generate(
            "SELECT * FROM users",
            None,
            Path::new("."),
            &BuiltinRenderer,
            &ArtifactKind::ALL,
        )
        .unwrap_err();
        assert_eq!(err, GenerateError::Parse(ParseError::MissingTableName));
        assert_eq!(err.to_string(), "parse error: table name");
    }

    #[test]
    fn render_errors_stop_generation() {
        let err = generate(
            USERS,
            None,
            Path::new("."),
            &FailOn(ArtifactKind::Service),
            &ArtifactKind::ALL,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Render(RenderError::Failed {
                kind: ArtifactKind::Service,
                ..
            })
        ));
    }

    #[test]
    fn empty_selection_yields_nothing() {
        let out = generate(USERS, None, Path::new("."), &BuiltinRenderer, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn fixed_date_output_is_reproducible() {
        let table = ddlgen_parser::parse(USERS).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let root = PathBuf::from("/nonexistent-project");
        let a = generate_table_on(&table, None, date, &root, &BuiltinRenderer, &ArtifactKind::ALL)
            .unwrap();
        let b = generate_table_on(&table, None, date, &root, &BuiltinRenderer, &ArtifactKind::ALL)
            .unwrap();
        assert_eq!(a, b);
        assert!(a[1].content.contains("@since 2024-01-02"));
    }
}

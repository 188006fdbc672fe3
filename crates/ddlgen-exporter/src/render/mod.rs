//! Built-in text renderers for the fixed artifact set.

pub mod java;
pub mod jsp;
pub mod mapper_xml;

use std::collections::BTreeSet;

use ddlgen_core::Column;

use crate::artifact::{ArtifactKind, ArtifactRenderer, RenderError};
use crate::context::RenderContext;

/// Renders every artifact kind directly from the context, line by line.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRenderer;

impl ArtifactRenderer for BuiltinRenderer {
    fn render(&self, kind: ArtifactKind, ctx: &RenderContext) -> Result<String, RenderError> {
        let text = match kind {
            ArtifactKind::MapperXml => mapper_xml::render_mapper_xml(ctx),
            ArtifactKind::Vo => java::render_vo(ctx),
            ArtifactKind::DefaultVo => java::render_default_vo(ctx),
            ArtifactKind::Mapper => java::render_mapper(ctx),
            ArtifactKind::Service => java::render_service(ctx),
            ArtifactKind::ServiceImpl => java::render_service_impl(ctx),
            ArtifactKind::Controller => java::render_controller(ctx),
            ArtifactKind::ListJsp => jsp::render_list(ctx),
            ArtifactKind::RegisterJsp => jsp::render_register(ctx),
        };
        Ok(text)
    }
}

/// Fully qualified types that need an import, sorted and de-duplicated.
pub(crate) fn java_imports<'a>(columns: impl IntoIterator<Item = &'a Column>) -> BTreeSet<&'a str> {
    columns
        .into_iter()
        .map(Column::host_type)
        .filter(|t| t.contains('.') && !t.starts_with("java.lang."))
        .collect()
}

/// `a = #{a} AND b = #{b}` over the key columns.
pub(crate) fn key_predicate(ctx: &RenderContext) -> String {
    ctx.primary_key_columns
        .iter()
        .map(|c| format!("{} = {}", c.column_name(), bind(c)))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// MyBatis bind expression for a column property.
pub(crate) fn bind(column: &Column) -> String {
    format!("#{{{}}}", column.camel_name())
}

pub use ddlgen_config::ArtifactKind;

use crate::context::RenderContext;
use crate::render::BuiltinRenderer;

/// Errors raised while turning a context into file text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("renderer does not support {0:?}")]
    Unsupported(ArtifactKind),
    #[error("failed to render {kind:?} for {table}: {message}")]
    Failed {
        kind: ArtifactKind,
        table: String,
        message: String,
    },
}

/// Seam between context building and whatever produces file text.
///
/// Implement this to plug in an external template engine; the context is
/// serializable so it can be handed over as-is.
pub trait ArtifactRenderer {
    fn render(&self, kind: ArtifactKind, ctx: &RenderContext) -> Result<String, RenderError>;
}

/// Render one artifact with the built-in renderer.
pub fn render_artifact(kind: ArtifactKind, ctx: &RenderContext) -> Result<String, RenderError> {
    BuiltinRenderer.render(kind, ctx)
}

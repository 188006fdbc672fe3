//! Turns parsed tables into render contexts, renders the fixed artifact set
//! (MyBatis mapper XML, Java beans and services, controller, JSP pages) and
//! routes each file into the target project layout.

pub mod artifact;
pub mod context;
pub mod pipeline;
pub mod render;
pub mod route;

pub use artifact::{ArtifactKind, ArtifactRenderer, RenderError, render_artifact};
pub use context::{
    DEFAULT_BASE_PACKAGE, GENERATOR_VERSION, RenderContext, build_context, build_context_on,
    effective_base_package,
};
pub use pipeline::{
    GenerateError, GeneratedArtifact, generate, generate_from_context, generate_table_on,
};
pub use render::BuiltinRenderer;
pub use route::{LAYOUT_MARKER, PathSpec, RouteRule, Router, detect_layout, resolve_path};

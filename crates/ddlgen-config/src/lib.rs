pub mod artifact_kind;
pub mod config;

pub use artifact_kind::ArtifactKind;
pub use config::DdlgenConfig;

use serde::{Deserialize, Serialize};

/// The fixed set of artifacts generated for every table.
///
/// Declaration order is generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// MyBatis mapper XML (`{T}Mapper.xml`).
    MapperXml,
    /// Value object (`{T}VO.java`).
    Vo,
    /// Search/paging defaults (`{T}DefaultVO.java`).
    DefaultVo,
    /// Data-access mapper interface (`{T}Mapper.java`).
    Mapper,
    /// Service interface (`{T}Service.java`).
    Service,
    /// Service implementation (`{T}ServiceImpl.java`).
    ServiceImpl,
    /// Web controller (`{T}Controller.java`).
    Controller,
    /// List page (`{T}List.jsp`).
    ListJsp,
    /// Register/edit page (`{T}Register.jsp`).
    RegisterJsp,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 9] = [
        ArtifactKind::MapperXml,
        ArtifactKind::Vo,
        ArtifactKind::DefaultVo,
        ArtifactKind::Mapper,
        ArtifactKind::Service,
        ArtifactKind::ServiceImpl,
        ArtifactKind::Controller,
        ArtifactKind::ListJsp,
        ArtifactKind::RegisterJsp,
    ];

    /// File name suffix appended to the table name.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::MapperXml => "Mapper.xml",
            ArtifactKind::Vo => "VO.java",
            ArtifactKind::DefaultVo => "DefaultVO.java",
            ArtifactKind::Mapper => "Mapper.java",
            ArtifactKind::Service => "Service.java",
            ArtifactKind::ServiceImpl => "ServiceImpl.java",
            ArtifactKind::Controller => "Controller.java",
            ArtifactKind::ListJsp => "List.jsp",
            ArtifactKind::RegisterJsp => "Register.jsp",
        }
    }

    /// File name for a Pascal-cased table name, e.g. `UsersMapper.xml`.
    pub fn file_name(self, table_name: &str) -> String {
        format!("{table_name}{}", self.suffix())
    }
}

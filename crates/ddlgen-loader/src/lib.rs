pub mod config;
pub mod sources;

pub use config::{CONFIG_FILE, load_config_from_path, load_config_or_default};
pub use sources::{
    DdlSource, LoadedTable, load_ddl_file, load_ddl_sources, load_tables, parse_sources,
};

pub mod context;
pub mod generate;
pub mod init;
pub mod parse;

pub use context::cmd_context;
pub use generate::{GenerateArgs, cmd_generate};
pub use init::cmd_init;
pub use parse::cmd_parse;

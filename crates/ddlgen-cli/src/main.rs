use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;
use commands::{GenerateArgs, cmd_context, cmd_generate, cmd_init, cmd_parse};

/// ddlgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "ddlgen", author, version, about, arg_required_else_help = true)]
struct Cli {
    /// Show debug output.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize ddlgen.json with defaults.
    Init,
    /// Parse a DDL file and show the table it describes.
    Parse {
        file: PathBuf,
        /// Print the parsed table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the render context for a DDL file as JSON.
    Context {
        file: PathBuf,
        /// Base Java package for generated classes.
        #[arg(short, long, env = "DDLGEN_BASE_PACKAGE")]
        package: Option<String>,
    },
    /// Generate mapper, service, controller and view files from DDL.
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::init_logger(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::Parse { file, json } => cmd_parse(&file, json),
        Commands::Context { file, package } => cmd_context(&file, package.as_deref()),
        Commands::Generate(args) => cmd_generate(args).await,
    }
}

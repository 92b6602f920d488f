mod check;
mod name;
mod report;

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use varscope_api::ProgramModel;

#[derive(Parser)]
#[command(
    name = "varscope",
    version,
    about = "Infers readable local variable names for JVM bytecode",
    long_about = "Varscope reads a JSON program model (classes, instruction streams, local variable \
                  tables and closure links), names every parameter and local variable from how its \
                  value was produced, and writes the model back with the names filled in."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Name every local variable of a program model
    Name(NameArgs),
    /// Validate a program model without naming it
    #[command(
        long_about = "Hydrates the model and reports inconsistencies such as unknown labels, \
                      unparseable descriptors, dangling closure links and capture cycles."
    )]
    Check {
        /// Program model to validate
        #[arg(value_name = "MODEL_JSON")]
        model: PathBuf,
    },
}

#[derive(Args)]
pub struct NameArgs {
    /// Program model to name
    #[arg(value_name = "MODEL_JSON")]
    pub model: PathBuf,

    /// Where to write the named model. Defaults to stdout.
    #[arg(short, long, value_name = "OUT_JSON")]
    pub output: Option<PathBuf>,

    /// JSON naming configuration
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Worker threads (overrides the configuration)
    #[arg(long)]
    pub threads: Option<usize>,

    /// Infer every name, even where the model carries a declared mapping
    #[arg(long)]
    pub ignore_declared_names: bool,

    /// Mirror logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Name(args) if args.verbose);
    let _guard = varscope_runtime::init_logging("cli", verbose);

    match cli.command {
        Commands::Name(args) => name::run(args),
        Commands::Check { model } => check::run(&model),
    }
}

pub(crate) fn read_model(path: &Path) -> Result<ProgramModel, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    Ok(serde_json::from_str(&content)?)
}

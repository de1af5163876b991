use clap::{Parser, Subcommand};

use crate::cmd::*;

mod args;
pub use args::*;

mod io;
pub use io::*;

pub const HYPHEN: &str = "-";

/// The CLI interface for the verify application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: VerifyCommand,

    #[clap(flatten)]
    pub verbosity: Verbosity,
}

/// The top-level commands supported by verify.
#[derive(Debug, Subcommand)]
pub enum VerifyCommand {
    Inspect(inspect::Inspect),
    Fmt(fmt::Fmt),
    Get(get::Get),
}

impl Command for VerifyCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Inspect(inspect) => inspect.handle(),
            Self::Fmt(fmt) => fmt.handle(),
            Self::Get(get) => get.handle(),
        }
    }
}

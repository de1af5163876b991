use std::path::PathBuf;

use clap::Args;

use super::Command;
use crate::cli::{self, DecodeArgs, HYPHEN};

/// Subcommand for decoding a JSON document and encoding it again.
///
/// Member order is kept intact, while numbers are normalized to
/// their canonical representation.
#[derive(Debug, Args)]
pub struct Fmt {
    #[clap(flatten)]
    args: DecodeArgs,

    /// An optional output file for the encoded document.
    ///
    /// Defaults to "-" for printing output to stdout.
    #[clap(short, long, default_value = HYPHEN)]
    output: PathBuf,

    /// Pretty-prints the output even when it is not a terminal.
    #[clap(short, long, default_value_t = false)]
    pretty: bool,
}

impl Command for Fmt {
    fn handle(self) -> eyre::Result<()> {
        let value = self.args.decode()?;

        let out = (self.output.as_os_str() != HYPHEN).then_some(self.output.as_path());
        cli::write_json(out, &value, self.pretty)
    }
}

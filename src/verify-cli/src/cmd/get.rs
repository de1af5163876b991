use clap::Args;

use super::Command;
use crate::cli::{self, DecodeArgs};

/// Subcommand for extracting a nested value from a JSON document.
#[derive(Debug, Args)]
pub struct Get {
    #[clap(flatten)]
    args: DecodeArgs,

    /// A JSON Pointer (RFC 6901) to the value, i.e. `/attributes/0/ns`.
    ///
    /// The empty pointer selects the whole document.
    pointer: String,

    /// Prints the value in its human-readable form rather than as
    /// JSON. Strings are printed without quotes.
    #[clap(short, long, default_value_t = false)]
    raw: bool,
}

impl Command for Get {
    fn handle(self) -> eyre::Result<()> {
        let value = self.args.decode()?;
        let Some(target) = value.pointer(&self.pointer) else {
            eyre::bail!("no value at pointer '{}'", self.pointer);
        };

        log::debug!("Pointer '{}' selects {} value", self.pointer, target.type_name());

        if self.raw {
            println!("{target}");
            Ok(())
        } else {
            cli::write_json(None, target, false)
        }
    }
}

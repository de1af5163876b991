use clap::Parser;

mod cli;
use cli::Cli;

mod cmd;
use cmd::Command;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    cli.verbosity.setup()?;
    cli.command.handle()
}

use clap::{ArgAction, Args};
use verify_core::{serde::DEFAULT_RECURSION_LIMIT, Decoder, DynamicValue};

use super::InputSource;

pub const VERIFY_RECURSION_LIMIT: &str = "VERIFY_RECURSION_LIMIT";

/// Configures the verbosity of the builtin logger.
#[derive(Clone, Copy, Debug, Args)]
pub struct Verbosity {
    /// Configures the log verbosity of verify.
    ///
    /// `-v` is Debug, `-vv` is Trace.
    #[clap(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    /// Configures the global logger based on the settings.
    pub fn setup(self) -> eyre::Result<()> {
        let level = self.log_level();
        simple_logger::init_with_level(level)?;

        Ok(())
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

/// Common options for commands which decode a single JSON document.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// The JSON document to process.
    ///
    /// When the value is "-", then input will be read from stdin.
    /// Everything else will be recognized as a file path.
    pub input: String,

    /// The maximum nesting depth of arrays and objects to accept.
    ///
    /// Documents which nest deeper are rejected instead of being
    /// decoded.
    #[clap(long, env = VERIFY_RECURSION_LIMIT, default_value_t = DEFAULT_RECURSION_LIMIT)]
    pub recursion_limit: usize,
}

impl DecodeArgs {
    /// Reads and decodes the configured input.
    pub fn decode(&self) -> eyre::Result<DynamicValue> {
        let source = InputSource::parse(&self.input);
        let decoder = Decoder::with_recursion_limit(self.recursion_limit);

        log::debug!("Decoding {source} with recursion limit {}", self.recursion_limit);

        let value = match source {
            InputSource::Stdin => decoder.from_reader(super::stdin_reader()?)?,
            InputSource::File(ref path) => decoder.from_reader(super::file_reader(path)?)?,
        };

        Ok(value)
    }
}

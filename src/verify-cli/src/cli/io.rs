use std::{
    fmt, fs,
    io::{self, BufWriter, IsTerminal, Write},
    path::{Path, PathBuf},
};

use eyre::Context;
use verify_core::DynamicValue;

use super::HYPHEN;

/// Where a command reads its input document from.
#[derive(Clone, Debug)]
pub enum InputSource {
    /// The input will be read from stdin.
    Stdin,
    /// The input will be read from a single file.
    File(PathBuf),
}

impl InputSource {
    pub fn parse(input: &str) -> Self {
        if input == HYPHEN {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(input))
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("stdin"),
            Self::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// Obtains a buffered reader over the contents of stdin.
///
/// Fails when stdin is connected to a terminal, since no document
/// was piped in.
pub fn stdin_reader() -> eyre::Result<io::BufReader<io::StdinLock<'static>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eyre::bail!("no input was piped into stdin");
    }

    Ok(io::BufReader::new(stdin.lock()))
}

/// Opens a buffered reader over the file at `path`.
pub fn file_reader(path: &Path) -> eyre::Result<io::BufReader<fs::File>> {
    let file = fs::File::open(path)
        .wrap_err_with(|| format!("failed to open '{}'", path.display()))?;

    Ok(io::BufReader::new(file))
}

/// Encodes the given value to the respective output.
///
/// Output to a file or a pipe is minified unless `pretty` is set.
/// Output to a terminal always gets pretty-printed.
pub fn write_json(out: Option<&Path>, value: &DynamicValue, pretty: bool) -> eyre::Result<()> {
    if let Some(out) = out {
        let file = fs::File::create(out)
            .wrap_err_with(|| format!("failed to create '{}'", out.display()))?;
        let mut writer = BufWriter::new(file);
        encode_into(&mut writer, value, pretty)?;
        writer.flush()?;
    } else {
        let mut stdout = io::stdout().lock();
        let pretty = pretty || stdout.is_terminal();
        encode_into(&mut stdout, value, pretty)?;
        if pretty {
            writeln!(stdout)?;
        }
    }

    Ok(())
}

fn encode_into<W: Write>(writer: &mut W, value: &DynamicValue, pretty: bool) -> eyre::Result<()> {
    if pretty {
        writer.write_all(verify_core::to_string_pretty(value)?.as_bytes())?;
    } else {
        verify_core::to_writer(writer, value)?;
    }

    Ok(())
}

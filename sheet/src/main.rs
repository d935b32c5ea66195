mod commands;

use std::fs::File;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use commands::address::AddressArgs;
use commands::formula::FormulaArgs;
use commands::shift::ShiftArgs;
use eyre::{Report, Result, WrapErr};
use tracing::debug;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "sheet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file, one entry per line. Uses stdin if omitted
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect the tokens, syntax tree and references of formulas
    #[command(name = "formula")]
    Formula(FormulaArgs),

    /// Decode cell and range labels
    #[command(name = "address")]
    Address(AddressArgs),

    /// Move the references in formulas by a number of rows and columns
    #[command(name = "shift")]
    Shift(ShiftArgs),
}

type CliInput = Box<dyn Iterator<Item = Result<String>>>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_env("SHEET_LEVEL"))
        .with_writer(io::stderr)
        .init();

    color_eyre::install()?;

    let args = Cli::parse();

    let input = Input::open(args.input.as_deref())?;
    debug!(input = input.name(), "reading input");

    match args.command {
        Commands::Formula(args) => commands::formula::run(input, args),
        Commands::Address(args) => commands::address::run(input, args),
        Commands::Shift(args) => commands::shift::run(input, args),
    }?;

    Ok(())
}

/// Lines of text from the input file or stdin
pub struct Input {
    lines:       CliInput,
    name:        String,
    interactive: bool,
}

impl Input {
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();

            return Ok(Self::from_reader(stdin.lock(), "<stdin>", interactive));
        };

        let file = File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?;
        let name = path.to_string_lossy();

        Ok(Self::from_reader(io::BufReader::new(file), &name, false))
    }

    pub fn from_reader<R>(reader: R, name: &str, interactive: bool) -> Self
    where
        R: BufRead + 'static,
    {
        let lines = reader.lines().map(|res| res.map_err(Report::from));

        Self {
            lines: Box::new(lines),
            name: name.to_string(),
            interactive,
        }
    }

    /// Whether lines are being typed in by a user
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Iterator for Input {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn read_lines() {
        let input = Input::from_reader(Cursor::new("A1 + 2\n\nsum(B1:B2)\n"), "test", false);
        assert_eq!(input.name(), "test");
        assert!(!input.is_interactive());

        let lines = input.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(lines, vec!["A1 + 2", "", "sum(B1:B2)"]);
    }

    #[test]
    fn missing_file() {
        let Err(err) = Input::open(Some(Path::new("/nonexistent/formulas.txt"))) else {
            panic!("opened a missing file");
        };

        assert!(err.to_string().starts_with("cannot open /nonexistent/formulas.txt"));
    }
}

use clap::Args;
use eyre::Result;
use tracing::debug;

use crate::commands::{entries, report};
use crate::Input;

#[derive(Debug, Args)]
pub struct ShiftArgs {
    /// Rows to move down by, or up if negative
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    rows: isize,

    /// Columns to move right by, or left if negative
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    cols: isize,
}

pub fn run(input: Input, args: ShiftArgs) -> Result<()> {
    debug!(rows = args.rows, cols = args.cols, "shifting formulas");

    for line in entries(Box::new(input)) {
        let line = line?;
        match sheet_formula::shift(&line, args.rows, args.cols) {
            Ok(shifted) => println!("{}", shifted),
            Err(err) => report(&line, Some(err.span()), &err),
        }
    }

    Ok(())
}

use clap::Args;
use eyre::Result;
use itertools::Itertools;
use sheet_grid::{Index, Range};

use crate::commands::{entries, report};
use crate::Input;

#[derive(Debug, Args)]
pub struct AddressArgs {
    /// List every cell of a range, one row per line
    #[arg(short, long)]
    cells: bool,
}

pub fn run(input: Input, args: AddressArgs) -> Result<()> {
    for line in entries(Box::new(input)) {
        let line = line?;
        match describe(line.trim(), args.cells) {
            Ok(text) => println!("{}", text),
            Err(err) => report(&line, None, &err),
        }
    }

    Ok(())
}

fn describe(label: &str, cells: bool) -> sheet_grid::Result<String> {
    if !label.contains(':') {
        let index = Index::parse(label)?;
        return Ok(format!("{}\trow={} col={}", index, index.row, index.col));
    }

    let range = Range::parse(label)?;
    let (first, last) = (range.first(), range.last());
    let mut text = format!(
        "{}\trows={}..={} cols={}..={} width={} height={}",
        range,
        first.row,
        last.row,
        first.col,
        last.col,
        range.width(),
        range.height(),
    );

    if cells {
        for row in range.rows() {
            text.push('\n');
            text.push_str(&row.map(|index| index.label()).join(" "));
        }
    }

    Ok(text)
}

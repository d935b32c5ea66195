pub mod address;
pub mod formula;
pub mod shift;

use std::{fmt, iter};

use colored::control::ShouldColorize;
use colored::Colorize;
use sheet_pretty::ColorWhen;
use sheet_text::Span;

use crate::CliInput;

/// Drop blank lines from the input, passing read errors through
pub(crate) fn entries(input: CliInput) -> CliInput {
    let input = input.filter(|item| match item {
        Ok(line) => !line.trim().is_empty(),
        Err(_) => true,
    });

    Box::new(input)
}

pub(crate) fn color_when(no_color: bool, force_color: bool) -> ColorWhen {
    let color_supported = ShouldColorize::from_env().should_colorize();
    match (color_supported, no_color, force_color) {
        (_, _, true) => ColorWhen::Always,
        (true, false, false) => ColorWhen::Auto,
        _ => ColorWhen::Never,
    }
}

/// Print an error for one line of input without stopping
///
/// When the error points at part of the line, the line is printed with that
/// part marked underneath.
pub(crate) fn report(line: &str, span: Option<Span>, err: &impl fmt::Display) {
    println!("{} {}", "error:".red().bold(), err);
    if let Some(span) = span {
        println!("    {}", line);
        println!("    {}", marker(line, span).red());
    }
}

/// A line of carets under the characters of `line` in `span`
///
/// Tabs before the span are kept so the carets line up however wide the
/// terminal draws them.
pub(crate) fn marker(line: &str, span: Span) -> String {
    let padding = line
        .chars()
        .chain(iter::repeat(' '))
        .take(span.start)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect::<String>();

    format!("{}{}", padding, "^".repeat(span.len().max(1)))
}

use clap::Args;
use colored::Colorize;
use eyre::Result;
use itertools::Itertools;
use sheet_formula::{parse, Expr, Parser, Tokenizer};
use sheet_pretty::{PrettyPrintSettings, PrettyPrinter};

use crate::commands::{color_when, entries, report};
use crate::Input;

#[derive(Debug, Args)]
pub struct FormulaArgs {
    /// Print the token stream
    #[arg(short, long)]
    tokens: bool,

    /// Print the resulting abstract syntax tree
    #[arg(short, long)]
    ast: bool,

    /// Print the cells and ranges each formula refers to
    #[arg(short, long)]
    refs: bool,

    /// Display the span of each token or AST node
    #[arg(short, long)]
    spans: bool,

    /// Remove alignment spacing in the spans column
    #[arg(long)]
    no_align: bool,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,

    /// Force color output
    #[arg(long)]
    force_color: bool,
}

impl FormulaArgs {
    fn detailed(&self) -> bool {
        self.tokens || self.ast || self.refs
    }
}

pub fn run(input: Input, args: FormulaArgs) -> Result<()> {
    let printer_settings = PrettyPrintSettings::default()
        .indent("\u{254E}   ".bright_black().to_string().as_ref())
        .color_when(color_when(args.no_color, args.force_color))
        .align(!args.no_align)
        .include_spans(args.spans);

    if input.is_interactive() && !args.detailed() {
        eprintln!("Note: printing syntax trees as lists (try --ast, --tokens or --refs)");
    }

    for line in entries(Box::new(input)) {
        let line = line?;
        run_line(&line, &printer_settings, &args)?;
    }

    Ok(())
}

fn run_line(line: &str, printer_settings: &PrettyPrintSettings, args: &FormulaArgs) -> Result<()> {
    if !args.detailed() {
        match parse(line) {
            Ok(expr) => println!("{}", expr),
            Err(err) => report(line, Some(err.span), &err),
        }

        return Ok(());
    }

    println!("{}\n", line.bold());

    if args.tokens && !print_tokens(line, printer_settings.clone())? {
        return Ok(());
    }

    let expr = match Parser::new(Tokenizer::new(line)).parse() {
        Ok(expr) => expr,
        Err(err) => {
            report(line, Some(err.span), &err);
            println!();
            return Ok(());
        },
    };

    if args.ast {
        print_ast(&expr, printer_settings.clone())?;
    }

    if args.refs {
        println!("REFS:\n{}\n", references(&expr));
    }

    Ok(())
}

/// Print the tokens of a line, returning whether it tokenized cleanly
fn print_tokens(line: &str, printer_settings: PrettyPrintSettings) -> Result<bool> {
    let mut printer = PrettyPrinter::new(printer_settings);
    let mut error = None;

    for token in Tokenizer::new(line) {
        match token {
            Ok(tok) => {
                printer.print(&tok)?;
            },
            Err(err) => error = Some(err),
        }
    }

    println!("TOKENS:\n{}\n", printer.finish()?);
    let Some(err) = error else {
        return Ok(true);
    };

    report(line, Some(err.span), &err);
    println!();

    Ok(false)
}

fn print_ast(expr: &Expr, printer_settings: PrettyPrintSettings) -> Result<()> {
    let mut printer = PrettyPrinter::new(printer_settings);
    println!("AST:\n{}\n", printer.print(expr)?.finish()?);

    Ok(())
}

fn references(expr: &Expr) -> String {
    let refs = expr.references().map(|r| r.to_string()).unique().join(", ");
    if refs.is_empty() {
        "(none)".to_string()
    } else {
        refs
    }
}

mod ast_printer;
mod error;
mod token_printer;
mod writer;

use std::fmt::Write;

use colored::control::ShouldColorize;
use colored::Colorize;
use sheet_text::Span;

pub use ast_printer::AstPrinter;
pub use error::{Error, Result};
pub use token_printer::TokenPrinter;
pub use writer::Writer;

/// A structure which can be pretty-printed for debugging
pub trait Pretty {
    fn print(&self, w: &mut Writer<'_>) -> Result;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    fn use_color(&self) -> bool {
        match self {
            ColorWhen::Auto => ShouldColorize::from_env().should_colorize(),
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PrettyPrintSettings {
    indent:        String,
    color_when:    ColorWhen,
    align:         bool,
    include_spans: bool,
}

impl Default for PrettyPrintSettings {
    fn default() -> Self {
        Self {
            indent:        "  ".to_string(),
            color_when:    ColorWhen::Auto,
            align:         true,
            include_spans: false,
        }
    }
}

impl PrettyPrintSettings {
    pub fn indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn color_when(mut self, color_when: ColorWhen) -> Self {
        self.color_when = color_when;
        self
    }

    /// Pad the spans column so that the printed structures line up
    pub fn align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Print a column with the source span of each line
    pub fn include_spans(mut self, include_spans: bool) -> Self {
        self.include_spans = include_spans;
        self
    }
}

/// Collects pretty-printed structures, then lays them out with their spans
pub struct PrettyPrinter {
    settings: PrettyPrintSettings,
    buf:      String,
    spans:    Vec<Option<Span>>,
}

impl PrettyPrinter {
    pub fn new(settings: PrettyPrintSettings) -> Self {
        Self {
            settings,
            buf: String::new(),
            spans: Vec::new(),
        }
    }

    pub fn print(&mut self, item: &impl Pretty) -> std::result::Result<&mut Self, Error> {
        let use_color = self.settings.color_when.use_color();
        let mut writer = Writer::new(&mut self.buf, &mut self.spans)
            .with_indent(&self.settings.indent)
            .with_color(use_color);

        item.print(&mut writer)?;
        if !self.buf.ends_with('\n') {
            self.buf.push('\n');
        }

        Ok(self)
    }

    /// Render everything printed so far, leaving the printer empty
    pub fn finish(&mut self) -> std::result::Result<String, Error> {
        let buf = std::mem::take(&mut self.buf);
        let spans = std::mem::take(&mut self.spans);

        if !self.settings.include_spans {
            return Ok(buf.trim_end_matches('\n').to_string());
        }

        let span_text = spans
            .iter()
            .map(|span| span.map(|span| format!("{:?}", span)).unwrap_or_default())
            .collect::<Vec<_>>();
        let width = if self.settings.align {
            span_text.iter().map(|text| text.len()).max().unwrap_or(0)
        } else {
            0
        };

        let use_color = self.settings.color_when.use_color();
        let mut out = String::new();
        for (i, line) in buf.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }

            let span = span_text.get(i).map(String::as_str).unwrap_or("");
            let span = format!("{:<width$}", span, width = width);
            if use_color {
                write!(out, "{}\t{}", span.bright_black(), line)?;
            } else {
                write!(out, "{}\t{}", span, line)?;
            }
        }

        Ok(out)
    }
}

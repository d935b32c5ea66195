use std::fmt::{self, Write};

use colored::{Color, Colorize};
use sheet_text::Span;

use crate::{AstPrinter, Pretty, Result, TokenPrinter};

/// Output sink shared by everything printed through a [`PrettyPrinter`](crate::PrettyPrinter)
///
/// Text written to the writer is indented to the current nesting depth at the
/// start of every line. Each printed node or token also records the span it
/// came from, one entry per output line, for the optional spans column.
pub struct Writer<'a> {
    out:           &'a mut (dyn Write + 'a),
    spans:         &'a mut Vec<Option<Span>>,
    line_start:    bool,
    indent:        String,
    pub(crate) depth:     usize,
    pub(crate) use_color: bool,
}

impl<'a> Writer<'a> {
    pub fn new<T>(out: &'a mut T, spans: &'a mut Vec<Option<Span>>) -> Self
    where
        T: Write + 'a,
    {
        Self {
            out,
            spans,
            line_start: true,
            indent: "\t".to_string(),
            depth: 0,
            use_color: false,
        }
    }

    /// Text repeated once per nesting level at the start of each line
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Start printing a syntax tree node
    ///
    /// # Arguments
    ///
    /// * `name` - the kind of node
    /// * `span` - where the node came from in the input
    /// * `color` - the color to print the node's name in
    pub fn print_ast<'b>(
        &'b mut self,
        name: &str,
        span: Option<Span>,
        color: Option<Color>,
    ) -> AstPrinter<'b, 'a> {
        AstPrinter::new(self, name, span, color)
    }

    /// Start printing a token, which takes up a line of its own
    pub fn print_token<'b>(
        &'b mut self,
        name: &str,
        span: Option<Span>,
        color: Option<Color>,
    ) -> TokenPrinter<'b, 'a> {
        TokenPrinter::new(self, name, span, color)
    }

    pub fn print(&mut self, item: &impl Pretty) -> Result {
        item.print(self)
    }

    /// Record the span of the line being printed
    pub fn add_span(&mut self, span: Option<Span>) {
        self.spans.push(span);
    }

    /// Write ` name=value`, or ` value` when there is no name
    pub(crate) fn write_property(
        &mut self,
        name: Option<&str>,
        value: &dyn fmt::Debug,
        name_color: Color,
        value_color: Option<Color>,
    ) -> fmt::Result {
        let name = name.map(|name| format!("{}=", name)).unwrap_or_default();
        let value = format!("{:?}", value);

        match (self.use_color, value_color) {
            (true, Some(color)) => write!(self, " {}{}", name.color(name_color), value.color(color)),
            _ => write!(self, " {}{}", name, value),
        }
    }

    /// Write a node or token name, colored if color is enabled
    pub(crate) fn write_name(&mut self, open: char, name: &str, color: Option<Color>) -> fmt::Result {
        match (self.use_color, color) {
            (true, Some(color)) => write!(self, "{}{}", open, name.color(color)),
            _ => write!(self, "{}{}", open, name),
        }
    }
}

impl Write for Writer<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.line_start {
                self.out.write_str(&self.indent.repeat(self.depth))?;
            }

            self.line_start = line.ends_with('\n');
            self.out.write_str(line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_each_line() {
        let mut out = String::new();
        let mut spans = Vec::new();
        let mut w = Writer::new(&mut out, &mut spans).with_indent("..");

        w.depth = 2;
        write!(w, "a\nb").unwrap();
        w.depth = 1;
        write!(w, "c\nd\n").unwrap();

        assert_eq!(out, "....a\n....bc\n..d\n");
    }

    #[test]
    fn properties() {
        let mut out = String::new();
        let mut spans = Vec::new();
        let mut w = Writer::new(&mut out, &mut spans);

        w.write_name('(', "Node", Some(Color::Red)).unwrap();
        w.write_property(Some("x"), &1, Color::BrightBlack, Some(Color::Green)).unwrap();
        w.write_property(None, &"y", Color::BrightBlack, None).unwrap();

        assert_eq!(out, "(Node x=1 \"y\"");
    }
}

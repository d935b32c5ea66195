use std::fmt::{self, Write};

use colored::Color;
use sheet_text::Span;

use crate::{Error, Pretty, Result, Writer};

/// Prints one node of a syntax tree as `(Name prop=value ...)`, with each
/// child on its own line one level deeper
pub struct AstPrinter<'a, 'b: 'a> {
    writer: &'a mut Writer<'b>,
    result: Result,
}

impl<'a, 'b: 'a> AstPrinter<'a, 'b> {
    pub fn new(
        writer: &'a mut Writer<'b>,
        name: &str,
        span: Option<Span>,
        color: Option<Color>,
    ) -> Self {
        writer.add_span(span);
        let result = writer.write_name('(', name, color).map_err(Error::from);

        AstPrinter { writer, result }
    }

    pub fn property(
        &mut self,
        name: Option<&str>,
        value: &impl fmt::Debug,
        color: Option<Color>,
    ) -> &mut Self {
        if self.result.is_ok() {
            self.result = self
                .writer
                .write_property(name, value, Color::BrightBlack, color)
                .map_err(Error::from);
        }

        self
    }

    pub fn child(&mut self, label: Option<&str>, item: &impl Pretty) -> &mut Self {
        if self.result.is_err() {
            return self;
        }

        self.writer.depth += 1;
        self.result = write_child(self.writer, label, item);
        self.writer.depth -= 1;

        self
    }

    pub fn finish(&mut self) -> Result {
        self.result?;
        self.writer.write_char(')')?;

        Ok(())
    }
}

fn write_child(w: &mut Writer<'_>, label: Option<&str>, item: &impl Pretty) -> Result {
    w.write_char('\n')?;
    if let Some(label) = label {
        write!(w, "{}: ", label)?;
    }

    item.print(w)
}

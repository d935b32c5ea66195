use std::fmt::{self, Write};

use colored::Color;
use sheet_text::Span;

use crate::{Error, Result, Writer};

const DEFAULT_COLOR: Color = Color::White;
const PARAMETER_COLOR: Color = Color::TrueColor {
    r: 150,
    g: 150,
    b: 150,
};

/// Prints a token as `[Name prop=value ...]` on a line of its own
pub struct TokenPrinter<'a, 'b: 'a> {
    writer: &'a mut Writer<'b>,
    result: Result,
}

impl<'a, 'b: 'a> TokenPrinter<'a, 'b> {
    pub fn new(
        writer: &'a mut Writer<'b>,
        name: &str,
        span: Option<Span>,
        color: Option<Color>,
    ) -> Self {
        writer.add_span(span);
        let color = color.or(Some(DEFAULT_COLOR));
        let result = writer.write_name('[', name, color).map_err(Error::from);

        TokenPrinter { writer, result }
    }

    pub fn property(
        &mut self,
        name: Option<&str>,
        value: &impl fmt::Debug,
        color: Option<Color>,
    ) -> &mut Self {
        if self.result.is_ok() {
            let color = color.or(Some(DEFAULT_COLOR));
            self.result = self
                .writer
                .write_property(name, value, PARAMETER_COLOR, color)
                .map_err(Error::from);
        }

        self
    }

    /// Print the property only if there is a value for it
    pub fn maybe_property(
        &mut self,
        name: Option<&str>,
        value: Option<&impl fmt::Debug>,
        color: Option<Color>,
    ) -> &mut Self {
        match value {
            Some(value) => self.property(name, value, color),
            None => self,
        }
    }

    pub fn finish(&mut self) -> Result {
        self.result?;
        self.writer.write_str("]\n")?;

        Ok(())
    }
}

use std::convert::TryFrom;

use sheet_text::Span;
use tracing::trace;

use crate::parse::ast::*;
use crate::parse::error::*;
use crate::parse::input::Input;
use crate::tokenize::{self, Token, TokenKind};

/// Parse formulas from a [token stream](tokenize::Tokenizer)
///
/// Uses a recursive-descent approach, with the left-recursive binary operator
/// rules rewritten as loops. Both levels of binary operators are
/// left-associative, and `*` and `/` bind tighter than `+` and `-`.
///
/// # Grammar:
///
/// ```grammar
/// toplevel ->
///     | expr END_OF_INPUT
/// expr ->
///     | sum
/// sum ->
///     | summand (('+' | '-') summand)*
/// summand ->
///     | factor (('*' | '/') factor)*
/// factor ->
///     | VALUE ('(' arglist ')')?
///     | QUOTED
///     | '(' expr ')'
/// arglist ->
///     | expr (',' expr)*
/// ```
///
/// A `VALUE` followed by `(` is a function call, and its text must consist
/// only of ASCII letters.
pub struct Parser<'a> {
    input: Input<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser from a token iterator
    ///
    /// Since [`Tokenizer`](tokenize::Tokenizer) implements Iterator, a parser can be built
    /// from it directly
    pub fn new<T>(input: T) -> Self
    where
        T: Iterator<Item = tokenize::Result<Token>> + 'a,
    {
        Parser {
            input: Input::new(input),
        }
    }

    /// Parse the whole formula into a [syntax tree](Expr)
    pub fn parse(mut self) -> Result<Expr> {
        self.parse_toplevel()
    }

    /// Parse an expression which must make up the entire input
    pub fn parse_toplevel(&mut self) -> Result<Expr> {
        let expr = self.parse_expr()?;
        self.input.expect(TokenKind::EndOfInput)?;

        Ok(expr)
    }

    pub fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_sum()
    }

    /// Parse a sequence of summands joined by `+` or `-`
    ///
    /// # Grammar
    ///
    /// ```grammar
    /// sum ->
    ///     | summand (('+' | '-') summand)*
    /// ```
    pub fn parse_sum(&mut self) -> Result<Expr> {
        let mut expr = self.parse_summand()?;

        while let Some(op) = self.parse_operator(&[TokenKind::Plus, TokenKind::Minus])? {
            let rhs = self.parse_summand()?;
            expr = Expr::binary(op, expr, rhs);
        }

        Ok(expr)
    }

    /// Parse a sequence of factors joined by `*` or `/`
    ///
    /// # Grammar
    ///
    /// ```grammar
    /// summand ->
    ///     | factor (('*' | '/') factor)*
    /// ```
    pub fn parse_summand(&mut self) -> Result<Expr> {
        let mut expr = self.parse_factor()?;

        while let Some(op) = self.parse_operator(&[TokenKind::Times, TokenKind::Divided])? {
            let rhs = self.parse_factor()?;
            expr = Expr::binary(op, expr, rhs);
        }

        Ok(expr)
    }

    /// Parse a value, function call, quoted string, or parenthesized
    /// expression
    ///
    /// # Grammar
    ///
    /// ```grammar
    /// factor ->
    ///     | VALUE ('(' arglist ')')?
    ///     | QUOTED
    ///     | '(' expr ')'
    /// ```
    pub fn parse_factor(&mut self) -> Result<Expr> {
        if let Some(tok) = self.input.consume(TokenKind::Value)? {
            if self.input.consume(TokenKind::OpenParen)?.is_none() {
                return Ok(Expr::leaf(tok.text).with_span(tok.span));
            }

            if !is_function_name(&tok.text) {
                return Err(Error {
                    span: tok.span,
                    kind: ErrorKind::InvalidFunctionName(tok.text),
                });
            }

            trace!(name = %tok.text, "function call");
            let operands = self.parse_arglist()?;
            let close = self.input.expect(TokenKind::CloseParen)?;

            let span = Span::wrap(&tok.span, &close.span);

            return Ok(Expr::apply(tok.text, operands).with_span(span));
        }

        if let Some(tok) = self.input.consume(TokenKind::Quoted)? {
            let text = tok
                .text
                .strip_prefix('"')
                .and_then(|text| text.strip_suffix('"'))
                .unwrap_or(tok.text.as_str());

            return Ok(Expr::leaf(text).with_span(tok.span));
        }

        if self.input.consume(TokenKind::OpenParen)?.is_some() {
            let expr = self.parse_expr()?;
            self.input.expect(TokenKind::CloseParen)?;

            return Ok(expr);
        }

        Err(self.input.unexpected())
    }

    /// Parse the comma-separated arguments of a function call
    ///
    /// # Grammar
    ///
    /// ```grammar
    /// arglist ->
    ///     | expr (',' expr)*
    /// ```
    pub fn parse_arglist(&mut self) -> Result<Vec<Expr>> {
        let mut args = vec![self.parse_expr()?];

        while self.input.consume(TokenKind::Comma)?.is_some() {
            args.push(self.parse_expr()?);
        }

        Ok(args)
    }

    fn parse_operator(&mut self, kinds: &[TokenKind]) -> Result<Option<Operator>> {
        for &kind in kinds {
            if let Some(tok) = self.input.consume(kind)? {
                return Ok(Operator::try_from(tok.kind).ok());
            }
        }

        Ok(None)
    }
}

fn is_function_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

use tracing::trace;

use crate::error::Error;
use crate::references::Reference;
use crate::tokenize::{TokenKind, Tokenizer};

/// Move every cell and range reference in a formula by a number of rows and
/// columns
///
/// Only value tokens that are valid labels are rewritten, to their canonical
/// uppercase form. Everything else, including whitespace, quoted strings and
/// function names, is copied through unchanged. The formula only has to
/// tokenize; it is not parsed.
pub fn shift(formula: &str, rows: isize, cols: isize) -> Result<String, Error> {
    let mut out = String::with_capacity(formula.len());

    for tok in Tokenizer::new(formula) {
        let tok = tok?;

        let reference = match tok.kind {
            TokenKind::Value => Reference::parse(&tok.text),
            _ => None,
        };

        let Some(reference) = reference else {
            out.push_str(&tok.text);
            continue;
        };

        let shifted = reference.offset(rows, cols).ok_or_else(|| Error::OutOfBounds {
            reference: tok.text.clone(),
            span:      tok.span,
        })?;

        trace!(from = %tok.text, to = %shifted, "shift reference");
        out.push_str(&shifted.to_string());
    }

    Ok(out)
}

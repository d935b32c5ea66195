use sheet_text::{Cursor, Span};

use crate::tokenize::error::*;
use crate::tokenize::token::*;

/// Split formula text into [tokens](Token)
///
/// The tokenizer scans strictly left to right, and every character of the
/// input ends up in exactly one token. Whitespace is kept as tokens of its own
/// so that formulas can be rebuilt from their tokens; the parser skips them.
/// The final token is always [`TokenKind::EndOfInput`].
///
/// At each position the first matching rule wins:
///
/// ```grammar
/// OPEN_PAREN  -> '('
/// CLOSE_PAREN -> ')'
/// PLUS        -> '+'
/// MINUS       -> '-' (followed by whitespace)
/// VALUE       -> [a-zA-Z0-9:.-]+
/// QUOTED      -> '"' [^"]+ '"'
/// TIMES       -> '*'
/// DIVIDED     -> '/'
/// COMMA       -> ','
/// WHITESPACE  -> \s+
/// ```
///
/// Since a minus sign must be followed by whitespace, `2 - 1` is a
/// subtraction while `2 -1` is the value `2` followed by the value `-1`.
pub struct Tokenizer<'a> {
    input: Cursor<'a>,
    done:  bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            input: Cursor::new(input),
            done:  false,
        }
    }

    fn next_token(&mut self) -> Result<Token> {
        let kind = match self.input.first() {
            None => TokenKind::EndOfInput,
            Some('(') => self.single(TokenKind::OpenParen),
            Some(')') => self.single(TokenKind::CloseParen),
            Some('+') => self.single(TokenKind::Plus),
            Some('-') if matches!(self.input.second(), Some(c) if c.is_whitespace()) => {
                self.single(TokenKind::Minus)
            },
            Some(c) if is_value_char(c) => {
                self.input.eat_while(is_value_char);
                TokenKind::Value
            },
            Some('"') => self.quoted()?,
            Some('*') => self.single(TokenKind::Times),
            Some('/') => self.single(TokenKind::Divided),
            Some(',') => self.single(TokenKind::Comma),
            Some(c) if c.is_whitespace() => {
                self.input.eat_while(char::is_whitespace);
                TokenKind::Whitespace
            },
            Some(c) => return Err(self.error(ErrorKind::UnexpectedChar(c))),
        };

        Ok(self.input.map(|span, text| Token::new(kind, text, span)))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.input.bump();
        kind
    }

    fn quoted(&mut self) -> Result<TokenKind> {
        self.input.bump();
        let len = self.input.eat_while(|c| c != '"');

        if len == 0 || !self.input.matches('"') {
            return Err(self.error(ErrorKind::UnexpectedChar('"')));
        }

        Ok(TokenKind::Quoted)
    }

    /// Error pointing at the character where the failed token started
    fn error(&self, kind: ErrorKind) -> Error {
        let start = self.input.span().start;
        Error {
            span: Span::new(start, start + 1),
            kind,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let res = self.next_token();
        self.done = match &res {
            Ok(tok) => tok.kind == TokenKind::EndOfInput,
            Err(_) => true,
        };

        Some(res)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}

fn is_value_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::{assert_next_err, assert_next_none, assert_next_tok, assert_tokens};

    #[test]
    fn simple() {
        let tr = Tokenizer::new("()+*/,");
        assert_tokens(tr, vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Plus,
            TokenKind::Times,
            TokenKind::Divided,
            TokenKind::Comma,
            TokenKind::EndOfInput,
        ]);
    }

    #[test]
    fn values() {
        let tr = Tokenizer::new("A1 a1:B2 -1 6.02e23 2018-01-01 miscellaneousliteral");
        let texts = tr
            .filter_map(|res| res.ok())
            .filter(|tok| tok.kind == TokenKind::Value)
            .map(|tok| tok.text)
            .collect::<Vec<_>>();

        assert_eq!(texts, vec![
            "A1",
            "a1:B2",
            "-1",
            "6.02e23",
            "2018-01-01",
            "miscellaneousliteral"
        ]);
    }

    #[test]
    fn minus() {
        let tr = Tokenizer::new("2 - 1");
        assert_tokens(tr, vec![
            TokenKind::Value,
            TokenKind::Whitespace,
            TokenKind::Minus,
            TokenKind::Whitespace,
            TokenKind::Value,
            TokenKind::EndOfInput,
        ]);

        let tr = Tokenizer::new("2 -1");
        assert_tokens(tr, vec![
            TokenKind::Value,
            TokenKind::Whitespace,
            TokenKind::Value,
            TokenKind::EndOfInput,
        ]);

        // a dangling minus sign is read as a value
        let tr = Tokenizer::new("2 -");
        assert_tokens(tr, vec![
            TokenKind::Value,
            TokenKind::Whitespace,
            TokenKind::Value,
            TokenKind::EndOfInput,
        ]);
    }

    #[test]
    fn quoted() {
        let mut tr = Tokenizer::new("\"hello world\",\"x\"");
        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok, Token::new(TokenKind::Quoted, "\"hello world\"", Span::new(0, 13)));
        assert_next_tok!(tr, TokenKind::Comma);
        assert_next_tok!(tr, TokenKind::Quoted, "\"x\"");
        assert_next_tok!(tr, TokenKind::EndOfInput);
        assert_next_none!(tr);
    }

    #[test]
    fn whitespace_runs() {
        let mut tr = Tokenizer::new("a \t\n b");
        assert_next_tok!(tr, TokenKind::Value, "a");
        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok.kind, TokenKind::Whitespace);
        assert_eq!(tok.text, " \t\n ");
        assert_eq!(tok.span, Span::new(1, 5));
    }

    #[test]
    fn spans_cover_input() {
        let input = "sum(A1:A2, \"x y\") - -3";
        let tokens = Tokenizer::new(input)
            .collect::<Result<Vec<_>>>()
            .unwrap();

        let mut offset = 0;
        for tok in &tokens {
            assert_eq!(tok.span.start, offset);
            offset = tok.span.end;
        }
        assert_eq!(offset, input.chars().count());

        let rebuilt = tokens.iter().map(|tok| tok.text.as_str()).collect::<String>();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn empty() {
        let mut tr = Tokenizer::new("");
        let tok = tr.next().unwrap().unwrap();
        assert_eq!(tok, Token::end_of_input(0));
        assert_next_none!(tr);
        assert_next_none!(tr);
    }

    #[test]
    fn single_end_of_input() {
        let mut tr = Tokenizer::new("A1 ");
        assert_next_tok!(tr, TokenKind::Value, "A1");
        assert_next_tok!(tr, TokenKind::Whitespace);
        assert_next_tok!(tr, TokenKind::EndOfInput);
        assert_next_none!(tr);
        assert_next_none!(tr);

        let ends = Tokenizer::new("sum(1, 2)")
            .filter(|res| matches!(res, Ok(tok) if tok.kind == TokenKind::EndOfInput))
            .count();
        assert_eq!(ends, 1);
    }

    #[test]
    fn unexpected_char() {
        let mut tr = Tokenizer::new("A1 $ 2");
        assert_next_tok!(tr, TokenKind::Value);
        assert_next_tok!(tr, TokenKind::Whitespace);
        let Some(Err(err)) = tr.next() else {
            panic!("expected an error");
        };
        assert_eq!(err.kind, ErrorKind::UnexpectedChar('$'));
        assert_eq!(err.span, Span::new(3, 4));
        assert_eq!(err.to_string(), "unexpected `$` at offset 3");
        assert_next_none!(tr);
    }

    #[test]
    fn unterminated_quote() {
        let mut tr = Tokenizer::new("a \"bc");
        assert_next_tok!(tr, TokenKind::Value);
        assert_next_tok!(tr, TokenKind::Whitespace);
        assert_next_err!(tr, ErrorKind::UnexpectedChar('"'));

        let mut tr = Tokenizer::new("\"\"");
        assert_next_err!(tr, ErrorKind::UnexpectedChar('"'));
    }

    #[test]
    fn non_ascii() {
        let mut tr = Tokenizer::new("é");
        let Some(Err(err)) = tr.next() else {
            panic!("expected an error");
        };
        assert_eq!(err.kind, ErrorKind::UnexpectedChar('é'));
        assert_eq!(err.span.start, 0);
    }

    #[test]
    fn fresh_scan_per_tokenizer() {
        let first = Tokenizer::new("a + b").collect::<Result<Vec<_>>>().unwrap();
        let second = Tokenizer::new("a + b").collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(first, second);
    }
}

use colored::Color;
use sheet_pretty::{Pretty, Result, Writer};

use crate::tokenize::token::*;

const COLOR_PAREN: Option<Color> = Some(Color::BrightBlue);
const COLOR_OPERATOR: Option<Color> = Some(Color::Cyan);
const COLOR_VALUE: Option<Color> = Some(Color::Green);
const COLOR_QUOTED: Option<Color> = Some(Color::BrightYellow);
const COLOR_SEPARATOR: Option<Color> = Some(Color::BrightBlack);

impl Pretty for Token {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        let color = match self.kind {
            TokenKind::OpenParen | TokenKind::CloseParen => COLOR_PAREN,
            TokenKind::Plus | TokenKind::Minus | TokenKind::Times | TokenKind::Divided => {
                COLOR_OPERATOR
            },
            TokenKind::Value => COLOR_VALUE,
            TokenKind::Quoted => COLOR_QUOTED,
            TokenKind::Comma | TokenKind::Whitespace | TokenKind::EndOfInput => COLOR_SEPARATOR,
        };

        let text = match self.kind {
            TokenKind::EndOfInput => None,
            _ => Some(&self.text),
        };

        w.print_token(&format!("{:?}", self.kind), Some(self.span), color)
            .maybe_property(None, text, None)
            .finish()
    }
}

use std::convert::TryFrom;
use std::fmt;

use sheet_text::Span;

use crate::tokenize::TokenKind;

/// A parsed formula node
///
/// Nodes compare by structure only; two trees parsed from differently spaced
/// formulas are equal when they have the same shape and text.
#[derive(Clone, Debug)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// A literal or reference, or the contents of a quoted string with the
    /// quotes removed
    Leaf(String),

    /// An operator or named function applied to its operands, in source order
    Apply(Apply),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Apply {
    pub name:     String,
    pub operands: Vec<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Expr {
    pub fn leaf<T: Into<String>>(text: T) -> Self {
        Self {
            span: Span::default(),
            kind: ExprKind::Leaf(text.into()),
        }
    }

    pub fn apply<T: Into<String>>(name: T, operands: Vec<Expr>) -> Self {
        Self {
            span: Span::default(),
            kind: ExprKind::Apply(Apply {
                name: name.into(),
                operands,
            }),
        }
    }

    /// Apply a binary operator, spanning both operands
    pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
        Self {
            span: Span::wrap(&lhs.span, &rhs.span),
            kind: ExprKind::Apply(Apply {
                name:     op.symbol().to_string(),
                operands: vec![lhs, rhs],
            }),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn as_apply(&self) -> Option<&Apply> {
        match &self.kind {
            ExprKind::Leaf(_) => None,
            ExprKind::Apply(apply) => Some(apply),
        }
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Leaf(text) => write!(f, "{:?}", text),
            ExprKind::Apply(apply) => {
                write!(f, "[{:?}", apply.name)?;
                for operand in &apply.operands {
                    write!(f, ", {}", operand)?;
                }
                write!(f, "]")
            },
        }
    }
}

impl Apply {
    /// The arithmetic operator this node applies, if it isn't a function call
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_symbol(&self.name)
    }
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl TryFrom<TokenKind> for Operator {
    type Error = TokenKind;

    fn try_from(value: TokenKind) -> Result<Self, Self::Error> {
        match value {
            TokenKind::Plus => Ok(Operator::Add),
            TokenKind::Minus => Ok(Operator::Subtract),
            TokenKind::Times => Ok(Operator::Multiply),
            TokenKind::Divided => Ok(Operator::Divide),
            _ => Err(value),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_spans() {
        let a = Expr::leaf("A1").with_span(Span::new(0, 2));
        let b = Expr::leaf("A1").with_span(Span::new(5, 7));
        assert_eq!(a, b);
        assert_ne!(a, Expr::leaf("A2"));
    }

    #[test]
    fn display() {
        let expr = Expr::apply("+", vec![
            Expr::leaf("a"),
            Expr::apply("*", vec![Expr::leaf("b"), Expr::leaf("c")]),
        ]);
        assert_eq!(expr.to_string(), r#"["+", "a", ["*", "b", "c"]]"#);

        let expr = Expr::apply("concat", vec![Expr::leaf("say \"hi\"")]);
        assert_eq!(expr.to_string(), r#"["concat", "say \"hi\""]"#);
    }

    #[test]
    fn operators() {
        let add = Expr::binary(
            Operator::Add,
            Expr::leaf("1").with_span(Span::new(0, 1)),
            Expr::leaf("2").with_span(Span::new(4, 5)),
        );
        assert_eq!(add.span, Span::new(0, 5));

        let apply = add.as_apply().unwrap();
        assert_eq!(apply.operator(), Some(Operator::Add));
        assert_eq!(Expr::apply("sum", vec![]).as_apply().unwrap().operator(), None);

        assert_eq!(Operator::try_from(TokenKind::Divided), Ok(Operator::Divide));
        assert_eq!(Operator::try_from(TokenKind::Comma), Err(TokenKind::Comma));
    }
}

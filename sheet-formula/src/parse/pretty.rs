use colored::Color;
use sheet_pretty::{Pretty, Result, Writer};

use crate::parse::ast::*;

const COLOR_LEAF: Option<Color> = Some(Color::Green);
const COLOR_OPERATOR: Option<Color> = Some(Color::Cyan);
const COLOR_CALL: Option<Color> = Some(Color::BrightBlue);

impl Pretty for Expr {
    fn print(&self, w: &mut Writer<'_>) -> Result {
        match &self.kind {
            ExprKind::Leaf(text) => w
                .print_ast("Leaf", Some(self.span), None)
                .property(None, text, COLOR_LEAF)
                .finish(),
            ExprKind::Apply(apply) => {
                let mut printer = match apply.operator() {
                    Some(op) => {
                        let mut printer = w.print_ast("Op", Some(self.span), COLOR_OPERATOR);
                        printer.property(None, &op.symbol(), None);
                        printer
                    },
                    None => {
                        let mut printer = w.print_ast("Call", Some(self.span), COLOR_CALL);
                        printer.property(Some("name"), &apply.name, None);
                        printer
                    },
                };

                for operand in &apply.operands {
                    printer.child(None, operand);
                }
                printer.finish()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use sheet_pretty::{ColorWhen, PrettyPrintSettings, PrettyPrinter};

    use crate::parse::Parser;
    use crate::tokenize::Tokenizer;

    #[test]
    fn print_ast() {
        let expr = Parser::new(Tokenizer::new("sum(A1, \"x\") * 2")).parse().unwrap();

        let settings = PrettyPrintSettings::default()
            .color_when(ColorWhen::Never)
            .include_spans(true);
        let mut printer = PrettyPrinter::new(settings);
        printer.print(&expr).unwrap();

        let expected = concat!(
            "0-16 \t(Op \"*\"\n",
            "0-12 \t  (Call name=\"sum\"\n",
            "4-6  \t    (Leaf \"A1\")\n",
            "8-11 \t    (Leaf \"x\"))\n",
            "15-16\t  (Leaf \"2\"))",
        );
        assert_eq!(printer.finish().unwrap(), expected);
    }
}

//! Canonical, fully parenthesized rendering of an expression tree.
//!
//! `1 + 2 * 3` prints as `(+ 1 (* 2 3))`, `(1 + 2) * 3` as
//! `(* (group (+ 1 2)) 3)`.

use std::fmt::{self, Display, Formatter};

use crate::{Expr, LiteralValue};

pub fn print(expr: &Expr) -> String {
    expr.to_string()
}

fn parenthesize(f: &mut Formatter<'_>, name: impl Display, exprs: &[&Expr]) -> fmt::Result {
    write!(f, "({name}")?;
    for expr in exprs {
        write!(f, " {expr}")?;
    }
    write!(f, ")")
}

impl Display for Expr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary { left, operator, right } => {
                parenthesize(f, operator, &[left.as_ref(), right.as_ref()])
            }
            Expr::Grouping { expression } => parenthesize(f, "group", &[expression.as_ref()]),
            Expr::Unary { operator, right } => parenthesize(f, operator, &[right.as_ref()]),
            Expr::Literal { value } => write!(f, "{value}"),
        }
    }
}

impl Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Number(n) => write!(f, "{n}"),
            LiteralValue::Str(s) => write!(f, "{s}"),
            LiteralValue::Boolean(b) => write!(f, "{b}"),
            LiteralValue::Nil => write!(f, "nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use cursor::Line;
    use pretty_assertions::assert_eq;
    use scanner::{Token, TokenType};

    use super::*;

    fn op(kind: TokenType, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, Line(1))
    }

    #[test]
    fn literals() {
        assert_eq!(print(&Expr::literal(1.0)), "1");
        assert_eq!(print(&Expr::literal(2.5)), "2.5");
        assert_eq!(print(&Expr::literal("hi there")), "hi there");
        assert_eq!(print(&Expr::literal(true)), "true");
        assert_eq!(print(&Expr::literal(false)), "false");
        assert_eq!(print(&Expr::Literal { value: LiteralValue::Nil }), "nil");
    }

    #[test]
    fn nested() {
        // -123 * (45.67)
        let expr = Expr::binary(
            Expr::unary(op(TokenType::Minus, "-"), Expr::literal(123.0)),
            op(TokenType::Star, "*"),
            Expr::grouping(Expr::literal(45.67)),
        );

        assert_eq!(print(&expr), "(* (- 123) (group 45.67))");
    }

    #[test]
    fn operators_print_their_lexeme() {
        let expr = Expr::binary(
            Expr::literal(1.0),
            op(TokenType::BangEqual, "!="),
            Expr::unary(op(TokenType::Bang, "!"), Expr::literal(false)),
        );

        assert_eq!(expr.to_string(), "(!= 1 (! false))");
    }
}

use scanner::Token;

/// Expression tree. Every node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary { left: Box<Expr<'a>>, operator: Token<'a>, right: Box<Expr<'a>> },
    Grouping { expression: Box<Expr<'a>> },
    Unary { operator: Token<'a>, right: Box<Expr<'a>> },
    Literal { value: LiteralValue<'a> },
}

impl<'a> Expr<'a> {
    pub fn binary(left: Expr<'a>, operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
    }

    pub fn grouping(expression: Expr<'a>) -> Self {
        Expr::Grouping { expression: Box::new(expression) }
    }

    pub fn unary(operator: Token<'a>, right: Expr<'a>) -> Self {
        Expr::Unary { operator, right: Box::new(right) }
    }

    pub fn literal(value: impl Into<LiteralValue<'a>>) -> Self {
        Expr::Literal { value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue<'a> {
    Number(f64),
    Str(&'a str),
    Boolean(bool),
    Nil,
}

impl From<f64> for LiteralValue<'_> {
    fn from(n: f64) -> Self {
        LiteralValue::Number(n)
    }
}

impl<'a> From<&'a str> for LiteralValue<'a> {
    fn from(s: &'a str) -> Self {
        LiteralValue::Str(s)
    }
}

impl From<bool> for LiteralValue<'_> {
    fn from(b: bool) -> Self {
        LiteralValue::Boolean(b)
    }
}

impl<'a> From<scanner::Literal<'a>> for LiteralValue<'a> {
    fn from(literal: scanner::Literal<'a>) -> Self {
        match literal {
            scanner::Literal::Number(n) => LiteralValue::Number(n),
            scanner::Literal::Str(s) => LiteralValue::Str(s),
        }
    }
}

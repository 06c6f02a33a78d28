mod expr;
pub mod printer;

use cursor::Line;
use diagnostics::{Diagnostic, Diagnostics, Location};
pub use expr::{Expr, LiteralValue};
pub use printer::print;
use scanner::{Token, TokenType};

use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseErrorType {
    #[error("Expect ')' after expression.")]
    ExpectedRightParen,
    #[error("Expect expression.")]
    ExpectedExpression,
    #[error("Expression nested too deeply.")]
    TooDeeplyNested,
}

/// How deep an expression tree may get. Parsing, printing and dropping a tree
/// all recurse once per level.
pub const MAX_NESTING: usize = 256;

#[derive(Debug)]
pub struct ParseError<'a> {
    error: ParseErrorType,
    token: Token<'a>,
}

impl<'a> ParseError<'a> {
    fn new(error: ParseErrorType, token: Token<'a>) -> Self {
        Self { error, token }
    }
}

impl<'a> From<ParseError<'a>> for Diagnostic {
    fn from(e: ParseError<'a>) -> Self {
        let location = match e.token.kind {
            Eof => Location::End,
            _ => Location::Lexeme(e.token.lexeme().to_owned()),
        };
        Diagnostic::new(e.token.line(), location, e.error)
    }
}

type Result<'a, T> = std::result::Result<T, ParseError<'a>>;

/// Recursive descent parser for a single expression.
///
/// ```text
/// expression → equality
/// equality   → comparison ( ( "!=" | "==" ) comparison )*
/// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
/// term       → factor ( ( "-" | "+" ) factor )*
/// factor     → unary ( ( "/" | "*" ) unary )*
/// unary      → ( "!" | "-" ) unary | primary
/// primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
/// ```
#[derive(Debug)]
pub struct Parser<'a, 'd> {
    tokens: Vec<Token<'a>>,
    current: usize,
    depth: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Parser<'a, 'd> {
    /// Token streams from the scanner end with `Eof`; one is appended to any
    /// other stream that lacks it.
    pub fn new(mut tokens: Vec<Token<'a>>, diagnostics: &'d mut Diagnostics) -> Self {
        if tokens.last().map(|t| t.kind) != Some(Eof) {
            let line = tokens.last().map_or(Line(1), |t| t.line());
            log::debug!("Token stream without Eof, appending one on line {line}");
            tokens.push(Token::new(Eof, "", None, line));
        }
        Self { tokens, current: 0, depth: 0, diagnostics }
    }

    /// Parses one expression. On a syntax error the error is reported, the
    /// parser synchronizes and no tree is returned.
    pub fn parse(mut self) -> Option<Expr<'a>> {
        match self.expression() {
            Ok(expr) => {
                log::debug!("Parsed expression: {expr}");
                if !self.is_at_end() {
                    log::debug!("Ignoring trailing tokens starting at {:?}", self.peek());
                }
                Some(expr)
            }
            Err(e) => {
                log::trace!("Hit error: {:?}, syncing...", e);
                self.diagnostics.push(e.into());
                self.synchronize();
                None
            }
        }
    }

    fn expression(&mut self) -> Result<'a, Expr<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative(&[BangEqual, EqualEqual], Self::comparison)
    }

    fn comparison(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative(&[Greater, GreaterEqual, Less, LessEqual], Self::term)
    }

    fn term(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative(&[Minus, Plus], Self::factor)
    }

    fn factor(&mut self) -> Result<'a, Expr<'a>> {
        self.left_associative(&[Slash, Star], Self::unary)
    }

    /// One binary precedence level: `operand ( operator operand )*`, folded to the left.
    fn left_associative(
        &mut self,
        operators: &[TokenType],
        operand: fn(&mut Self) -> Result<'a, Expr<'a>>,
    ) -> Result<'a, Expr<'a>> {
        let outer_depth = self.depth;
        let mut expr = operand(self)?;

        while let Some(operator) = self.advance_if_any(operators) {
            // Each fold pushes the left operand one level further down
            self.descend()?;
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }

        self.depth = outer_depth;
        Ok(expr)
    }

    fn unary(&mut self) -> Result<'a, Expr<'a>> {
        if let Some(operator) = self.advance_if_any(&[Bang, Minus]) {
            self.descend()?;
            let right = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::unary(operator, right));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<'a, Expr<'a>> {
        let kind = self.peek().kind;
        let expr = match kind {
            False => Expr::literal(false),
            True => Expr::literal(true),
            Nil => Expr::literal(LiteralValue::Nil),
            Number | String => match self.peek().literal {
                Some(literal) => Expr::literal(literal),
                None => unreachable!("Scanner attaches a literal to every number and string"),
            },
            LeftParen => {
                self.advance();
                self.descend()?;
                let expression = self.expression()?;
                self.depth -= 1;
                self.consume_or_error(RightParen, ParseErrorType::ExpectedRightParen)?;
                return Ok(Expr::grouping(expression));
            }
            _ => {
                log::trace!("No primary expression starts with {:?}", self.peek());
                let token = self.peek().clone();
                return Err(ParseError::new(ParseErrorType::ExpectedExpression, token));
            }
        };

        self.advance();
        Ok(expr)
    }

    /// Discards tokens until the start of what is probably the next statement.
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == Semicolon {
                return;
            }

            match self.peek().kind {
                Class | Fun | Var | For | If | While | Print | Return => return,
                _ => {}
            }

            self.advance();
        }
    }
}

// Helpers
impl<'a, 'd> Parser<'a, 'd> {
    fn peek(&self) -> &Token<'a> {
        &self.tokens[self.current]
    }

    fn previous(&self) -> &Token<'a> {
        &self.tokens[self.current - 1]
    }

    fn is_at_end(&self) -> bool {
        self.peek().kind == Eof
    }

    /// Returns the current token and moves past it. `Eof` is never moved past.
    fn advance(&mut self) -> Token<'a> {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// Enters one more level of the tree, failing at the current token once
    /// [`MAX_NESTING`] is reached. The caller restores `depth` on success; after
    /// an error the parse is over anyway.
    fn descend(&mut self) -> Result<'a, ()> {
        if self.depth >= MAX_NESTING {
            let token = self.peek().clone();
            return Err(ParseError::new(ParseErrorType::TooDeeplyNested, token));
        }
        self.depth += 1;
        Ok(())
    }

    fn advance_if_any(&mut self, kinds: &[TokenType]) -> Option<Token<'a>> {
        kinds.contains(&self.peek().kind).then(|| self.advance())
    }

    fn consume_or_error(
        &mut self,
        kind: TokenType,
        error: ParseErrorType,
    ) -> Result<'a, Token<'a>> {
        match self.advance_if_any(&[kind]) {
            Some(token) => Ok(token),
            None => Err(ParseError::new(error, self.peek().clone())),
        }
    }
}

/// Scans and parses `source` in one go.
///
/// A tree may be returned even though the scanner reported errors, so check
/// `diagnostics` before trusting it.
pub fn parse_source<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Option<Expr<'a>> {
    let tokens = scanner::scan_tokens(source, diagnostics);
    Parser::new(tokens, diagnostics).parse()
}

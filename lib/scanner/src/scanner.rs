use cursor::{Cursor, Line};
use diagnostics::{Diagnostic, Diagnostics, Location};

pub mod token;
pub use token::{Literal, Token, TokenType};
use TokenType::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScanErrorType {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanError {
    pub error: ScanErrorType,
    pub line: Line,
}

impl From<ScanError> for Diagnostic {
    fn from(e: ScanError) -> Self {
        Diagnostic::new(e.line, Location::Nowhere, e.error)
    }
}

/// Splits a source string into tokens in a single pass.
///
/// Errors are reported to the diagnostics and scanning carries on, so one run
/// surfaces every lexical problem in the source. The returned tokens always end
/// with exactly one `Eof`.
pub struct Scanner<'a, 'd> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
    diagnostics: &'d mut Diagnostics,
}

impl<'a, 'd> Scanner<'a, 'd> {
    pub fn new(source: &'a str, diagnostics: &'d mut Diagnostics) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, tokens: Vec::new(), diagnostics }
    }

    pub fn scan_tokens(mut self) -> Vec<Token<'a>> {
        while !self.current.is_at_end() {
            self.start = self.current.clone();
            self.scan_token();
        }

        self.start = self.current.clone();
        self.add_token(Eof);

        log::debug!("Scanned {} tokens", self.tokens.len());
        self.tokens
    }

    fn scan_token(&mut self) {
        let Some(c) = self.current.next() else {
            return;
        };

        match c {
            '(' => self.add_token(LeftParen),
            ')' => self.add_token(RightParen),
            '{' => self.add_token(LeftBrace),
            '}' => self.add_token(RightBrace),
            ',' => self.add_token(Comma),
            '.' => self.add_token(Dot),
            '-' => self.add_token(Minus),
            '+' => self.add_token(Plus),
            ';' => self.add_token(Semicolon),
            '*' => self.add_token(Star),

            '!' => self.add_token_if_matches('=', BangEqual, Bang),
            '=' => self.add_token_if_matches('=', EqualEqual, Equal),
            '<' => self.add_token_if_matches('=', LessEqual, Less),
            '>' => self.add_token_if_matches('=', GreaterEqual, Greater),

            '/' => {
                if self.current.advance_if('/') {
                    // Comment
                    self.current.advance_while(|c| c != '\n');
                } else {
                    self.add_token(Slash)
                }
            }

            '"' => self.string(),

            d if d.is_ascii_digit() => self.number(),

            c if is_alpha(c) => self.identifier(),

            // The cursor keeps track of newlines itself
            ' ' | '\r' | '\t' | '\n' => (),

            c => self.error(ScanErrorType::UnexpectedCharacter(c)),
        }
    }

    fn add_token(&mut self, kind: TokenType) {
        self.add_literal_token(kind, None)
    }

    fn add_literal_token(&mut self, kind: TokenType, literal: Option<Literal<'a>>) {
        let token =
            Token::new(kind, self.start.slice_until(&self.current), literal, self.start.line());
        log::trace!("Scanned token: {:?}", token);
        self.tokens.push(token);
    }

    fn add_token_if_matches(&mut self, expected: char, matched: TokenType, otherwise: TokenType) {
        if self.current.advance_if(expected) {
            self.add_token(matched)
        } else {
            self.add_token(otherwise)
        }
    }

    fn error(&mut self, error: ScanErrorType) {
        log::trace!("Hit error: {:?}", error);
        self.diagnostics.push(ScanError { error, line: self.start.line() }.into());
    }

    fn string(&mut self) {
        self.current.advance_while(|c| c != '"');

        if self.current.is_at_end() {
            self.error(ScanErrorType::UnterminatedString);
            return;
        }

        let mut contents_start = self.start.clone();
        contents_start.next(); // opening '"'
        let value = contents_start.slice_until(&self.current);

        self.current.next(); // closing '"'
        self.add_literal_token(String, Some(Literal::Str(value)));
    }

    fn number(&mut self) {
        self.current.advance_while(|c| c.is_ascii_digit());

        // A trailing '.' is not part of the number
        if self.current.peek() == Some('.')
            && self.current.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.current.next();
            self.current.advance_while(|c| c.is_ascii_digit());
        }

        let value = self
            .start
            .slice_until(&self.current)
            .parse()
            .expect("a run of ascii digits with at most one inner '.' is a valid f64");
        self.add_literal_token(Number, Some(Literal::Number(value)));
    }

    fn identifier(&mut self) {
        self.current.advance_while(is_alphanumeric);

        let kind = TokenType::keyword(self.start.slice_until(&self.current)).unwrap_or(Identifier);
        self.add_token(kind);
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

/// Scans `source` in one go, see [`Scanner`].
pub fn scan_tokens<'a>(source: &'a str, diagnostics: &mut Diagnostics) -> Vec<Token<'a>> {
    Scanner::new(source, diagnostics).scan_tokens()
}

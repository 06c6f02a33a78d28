use std::fmt::Display;

use cursor::Line;

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenType,
    pub lexeme: &'a str,
    pub literal: Option<Literal<'a>>,
    pub line: Line,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenType, lexeme: &'a str, literal: Option<Literal<'a>>, line: Line) -> Self {
        Self { kind, lexeme, literal, line }
    }

    pub fn lexeme(&self) -> &'a str {
        self.lexeme
    }

    pub fn line(&self) -> Line {
        self.line
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

/// Scalar value carried by `NUMBER` and `STRING` tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Number(f64),
    Str(&'a str),
}

impl Display for Literal<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenType {
    pub fn keyword(ident: &str) -> Option<TokenType> {
        use TokenType::*;
        Some(match ident {
            "and" => And,
            "class" => Class,
            "else" => Else,
            "false" => False,
            "for" => For,
            "fun" => Fun,
            "if" => If,
            "nil" => Nil,
            "or" => Or,
            "print" => Print,
            "return" => Return,
            "super" => Super,
            "this" => This,
            "true" => True,
            "var" => Var,
            "while" => While,
            _ => return None,
        })
    }

    pub fn is_keyword(self) -> bool {
        use TokenType::*;
        matches!(
            self,
            And | Class
                | Else
                | False
                | Fun
                | For
                | If
                | Nil
                | Or
                | Print
                | Return
                | Super
                | This
                | True
                | Var
                | While
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn keyword_names_round_trip() {
        let keywords = TokenType::iter().filter(|t| t.is_keyword()).collect::<Vec<_>>();
        assert_eq!(keywords.len(), 16);

        for kind in keywords {
            assert_eq!(TokenType::keyword(&kind.to_string().to_lowercase()), Some(kind));
        }
    }

    #[test]
    fn non_keywords() {
        assert_eq!(TokenType::keyword("And"), None);
        assert_eq!(TokenType::keyword("orchid"), None);
        assert_eq!(TokenType::keyword(""), None);
    }

    #[test]
    fn display() {
        assert_eq!(TokenType::LeftParen.to_string(), "LEFT_PAREN");
        assert_eq!(TokenType::GreaterEqual.to_string(), "GREATER_EQUAL");
        assert_eq!(TokenType::Eof.to_string(), "EOF");

        let token = Token::new(TokenType::Number, "1.50", Some(Literal::Number(1.5)), Line(1));
        assert_eq!(token.to_string(), "1.50");
        assert_eq!(Literal::Number(1.5).to_string(), "1.5");
        assert_eq!(Literal::Str("hi").to_string(), "hi");
    }
}

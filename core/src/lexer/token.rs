use serde::Serialize;

use super::symbol::Symbol;

/// A single token with its interned symbol and source position.
///
/// Columns are 1-based and inclusive, and always describe the recognized
/// lexeme only (never the whitespace or delimiter around it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub start_column: usize,
    pub end_column: usize,
    pub line: usize,
    pub symbol: Symbol,
}

impl Token {
    pub fn new(start_column: usize, end_column: usize, line: usize, symbol: Symbol) -> Self {
        Self {
            start_column,
            end_column,
            line,
            symbol,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.symbol.kind()
    }

    pub fn text(&self) -> &str {
        self.symbol.text()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    Identifier,
    IntegerLiteral,
    TimeStampLiteral,
    Utf16StringLiteral,

    // Keywords
    Program,
    Int,
    Boolean,
    If,
    Then,
    Else,
    While,
    Function,
    Return,
    Switch,
    Case,
    Default,
    TimeStamp,
    Ustring,

    // Operators
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Plus,
    Minus,
    Or,
    And,
    Multiply,
    Divide,

    // Punctuation
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Comma,
    Colon,
    Semicolon,

    // Special
    Comment,
}

/// Every fixed spelling registered in a fresh symbol table.
pub(crate) const RESERVED_SPELLINGS: &[(&str, TokenKind)] = &[
    ("program", TokenKind::Program),
    ("int", TokenKind::Int),
    ("boolean", TokenKind::Boolean),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("while", TokenKind::While),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("timestamp", TokenKind::TimeStamp),
    ("ustring", TokenKind::Ustring),
    ("=", TokenKind::Assign),
    ("==", TokenKind::Equal),
    ("!=", TokenKind::NotEqual),
    ("<", TokenKind::Less),
    ("<=", TokenKind::LessEqual),
    (">", TokenKind::Greater),
    (">=", TokenKind::GreaterEqual),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("|", TokenKind::Or),
    ("&", TokenKind::And),
    ("*", TokenKind::Multiply),
    ("/", TokenKind::Divide),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    (",", TokenKind::Comma),
    (":", TokenKind::Colon),
    (";", TokenKind::Semicolon),
    ("//", TokenKind::Comment),
];

impl TokenKind {
    /// The fixed spelling of a reserved word, operator, or punctuation kind.
    pub fn spelling(self) -> Option<&'static str> {
        RESERVED_SPELLINGS
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(text, _)| *text)
    }
}

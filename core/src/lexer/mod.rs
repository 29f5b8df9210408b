pub mod cursor;
mod number_ident_scanner;
pub mod scanner;
mod string_scanner;
pub mod symbol;
pub mod token;

use crate::errors::LexError;
use scanner::Scanner;
use token::Token;

/// Tokenize source text into a list of tokens, stopping at the first
/// lexical error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    Scanner::from_source(source).collect()
}

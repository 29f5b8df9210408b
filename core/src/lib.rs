pub mod config;
pub mod errors;
pub mod lexer;

pub use config::ScannerConfig;
pub use errors::{LexError, LexErrorKind, TempoError};
pub use lexer::cursor::{CharSource, SourceReader};
pub use lexer::scanner::Scanner;
pub use lexer::symbol::{Symbol, SymbolTable};
pub use lexer::token::{Token, TokenKind};

use std::path::Path;

/// Convenience function to tokenize a source file end-to-end.
pub fn lex_file(path: impl AsRef<Path>) -> Result<Vec<Token>, TempoError> {
    let source = SourceReader::open(path)?;
    let tokens = Scanner::new(source).collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}

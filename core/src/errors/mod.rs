mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type wrapping all tempolex errors.
#[derive(Debug, Error, Diagnostic)]
pub enum TempoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error("could not read source: {0}")]
    #[diagnostic(code(tempolex::io))]
    Io(#[from] std::io::Error),
}

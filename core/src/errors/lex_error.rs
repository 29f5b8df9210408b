use miette::Diagnostic;
use thiserror::Error;

/// Prefix of the line written to stderr when scanning stops on an error.
const DIAGNOSTIC_PREFIX: &str = "******** ";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A character that cannot start a token, or that breaks a literal's shape.
    #[error("illegal character: {0}")]
    IllegalCharacter(String),
    /// A well-formed two-digit timestamp field whose value is out of bounds.
    #[error("illegal substring: {0}")]
    IllegalSubstring(String),
}

impl LexErrorKind {
    pub(crate) fn illegal_char(ch: Option<char>) -> Self {
        match ch {
            Some(c) => LexErrorKind::IllegalCharacter(c.escape_debug().to_string()),
            None => LexErrorKind::IllegalCharacter("end of input".to_owned()),
        }
    }
}

#[derive(Debug, Clone, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic(
    code(tempolex::lex),
    help("scanning stopped here; no further tokens are produced")
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
    pub column: usize,

    #[source_code]
    pub line_text: String,

    #[label("here")]
    pub span: miette::SourceSpan,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        line: usize,
        column: usize,
        width: usize,
        line_text: impl Into<String>,
    ) -> Self {
        let line_text = line_text.into();
        let span = column_span(&line_text, column, width);
        Self {
            kind,
            line,
            column,
            line_text,
            span,
        }
    }

    /// The line reported on stderr, e.g. `******** illegal substring: 13`.
    pub fn diagnostic_line(&self) -> String {
        format!("{DIAGNOSTIC_PREFIX}{}", self.kind)
    }
}

/// Convert a 1-based column range into a byte span of `line_text`.
fn column_span(line_text: &str, column: usize, width: usize) -> miette::SourceSpan {
    let byte_at = |col: usize| {
        line_text
            .char_indices()
            .nth(col.saturating_sub(1))
            .map(|(offset, _)| offset)
            .unwrap_or(line_text.len())
    };
    let start = byte_at(column);
    let end = byte_at(column + width.max(1)).max(start);
    (start, end - start).into()
}

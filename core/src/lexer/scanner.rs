use tracing::{debug, trace};

use super::cursor::{CharSource, SourceReader};
use super::symbol::{Symbol, SymbolTable};
use super::token::{Token, TokenKind};
use crate::config::ScannerConfig;
use crate::errors::{LexError, LexErrorKind};

/// What one pass of the recognizer produced.
pub(super) enum Scanned {
    Token(Token),
    /// A `//` comment was discarded; scan again.
    Skipped,
}

/// A fatal condition found while recognizing a token, before position
/// information is attached.
pub(super) struct Failure {
    pub kind: LexErrorKind,
    pub column: usize,
    pub width: usize,
}

impl Failure {
    pub fn new(kind: LexErrorKind, column: usize, width: usize) -> Self {
        Self {
            kind,
            column,
            width,
        }
    }
}

/// Pull-based scanner producing one token per [`Scanner::next_token`] call.
pub struct Scanner<S: CharSource> {
    source: Option<S>,
    symbols: SymbolTable,
    config: ScannerConfig,
    /// Next unconsumed character; `None` once input is exhausted.
    pub(super) ch: Option<char>,
    at_eof: bool,
    pub(super) start_column: usize,
    pub(super) end_column: usize,
    line_found: usize,
    last_line_read: usize,
    last_line: String,
}

impl<'a> Scanner<SourceReader<&'a [u8]>> {
    /// Scanner over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(SourceReader::from_str(source))
    }
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    pub fn with_config(mut source: S, config: ScannerConfig) -> Self {
        let ch = source.read();
        let last_line = source.line_text().to_owned();
        let last_line_read = source.line();
        Self {
            source: Some(source),
            symbols: SymbolTable::new(),
            config,
            ch,
            at_eof: false,
            start_column: 0,
            end_column: 0,
            line_found: last_line_read,
            last_line_read,
            last_line,
        }
    }

    /// Replace the scanner's symbol table, e.g. to share interned symbols
    /// between several compilation units.
    pub fn with_symbol_table(mut self, symbols: SymbolTable) -> Self {
        self.symbols = symbols;
        self
    }

    /// Return the next token, `Ok(None)` at end of stream, or the fatal error
    /// that ended scanning. After an error every call returns `Ok(None)`.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            if self.at_eof {
                self.release();
                return Ok(None);
            }

            self.skip_whitespace();
            let Some(ch) = self.ch else {
                self.at_eof = true;
                continue;
            };

            self.refresh_line();
            self.start_column = self.column();
            self.end_column = self.start_column.saturating_sub(1);

            let scanned = if is_ident_start(ch) {
                Ok(Scanned::Token(self.scan_identifier()))
            } else if ch.is_ascii_digit() {
                self.scan_number()
            } else if ch == '\\' {
                self.scan_utf16_string()
            } else {
                self.scan_operator(ch)
            };

            match scanned {
                Ok(Scanned::Token(token)) => {
                    trace!(
                        line = token.line,
                        start = token.start_column,
                        end = token.end_column,
                        kind = ?token.kind(),
                        text = token.text(),
                        "token"
                    );
                    return Ok(Some(token));
                }
                Ok(Scanned::Skipped) => continue,
                Err(failure) => return Err(self.fail(failure)),
            }
        }
    }

    /// Text of the most recent source line the scanner moved onto.
    pub fn last_line(&self) -> &str {
        &self.last_line
    }

    pub fn last_line_read(&self) -> usize {
        self.last_line_read
    }

    /// Line number of the token (or error) most recently produced.
    pub fn line_found(&self) -> usize {
        self.line_found
    }

    pub fn is_finished(&self) -> bool {
        self.at_eof
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Consume the lookahead and read the next character.
    pub(super) fn bump(&mut self) {
        self.ch = self.source.as_mut().and_then(|source| source.read());
    }

    /// Column of the lookahead character.
    pub(super) fn column(&self) -> usize {
        self.source.as_ref().map_or(0, |source| source.column())
    }

    pub(super) fn make_token(&mut self, text: &str, kind: TokenKind) -> Token {
        let symbol = self.symbols.intern(text, kind);
        self.token_for(symbol)
    }

    pub(super) fn token_for(&self, symbol: Symbol) -> Token {
        Token::new(self.start_column, self.end_column, self.line_found, symbol)
    }

    fn skip_whitespace(&mut self) {
        while self.ch.is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn refresh_line(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        self.line_found = source.line();
        if self.line_found > self.last_line_read {
            self.last_line = source.line_text().to_owned();
            self.last_line_read = self.line_found;
        }
    }

    fn scan_operator(&mut self, first: char) -> Result<Scanned, Failure> {
        self.end_column = self.start_column;
        self.bump();

        if let Some(second) = self.ch {
            let pair: String = [first, second].into_iter().collect();
            if let Some(symbol) = self.symbols.lookup(&pair) {
                if symbol.kind() == TokenKind::Comment {
                    self.skip_comment();
                    return Ok(Scanned::Skipped);
                }
                self.end_column += 1;
                self.bump();
                return Ok(Scanned::Token(self.token_for(symbol)));
            }
        }

        let single = first.to_string();
        match self.symbols.lookup(&single) {
            Some(symbol) => Ok(Scanned::Token(self.token_for(symbol))),
            None => Err(Failure::new(
                LexErrorKind::illegal_char(Some(first)),
                self.start_column,
                1,
            )),
        }
    }

    /// Discard everything up to the end of the current line.
    fn skip_comment(&mut self) {
        self.bump();
        while self.ch.is_some_and(|c| c != '\n') {
            self.bump();
        }
    }

    fn fail(&mut self, failure: Failure) -> LexError {
        self.refresh_line();
        let err = LexError::new(
            failure.kind,
            self.line_found,
            failure.column,
            failure.width,
            self.last_line.as_str(),
        );
        debug!(line = err.line, column = err.column, %err, "fatal lexical error");
        if self.config.echo_diagnostics() {
            eprintln!("{}", err.diagnostic_line());
        }
        self.at_eof = true;
        self.release();
        err
    }

    /// Close the character source; later calls are no-ops.
    fn release(&mut self) {
        if let Some(mut source) = self.source.take() {
            debug!(line = self.last_line_read, "releasing character source");
            source.close();
        }
        self.ch = None;
    }
}

impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

pub(super) fn is_ident_continue(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || c == '_'
}

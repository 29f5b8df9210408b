use super::cursor::CharSource;
use super::scanner::{Failure, Scanned, Scanner};
use super::token::TokenKind;

/// Number of `\uXXXX` escapes in one UTF-16 literal.
const ESCAPES: usize = 2;
const HEX_DIGITS: usize = 4;

impl<S: CharSource> Scanner<S> {
    /// Scan `\uXXXX\uXXXX` followed by whitespace. The whitespace stays as
    /// lookahead and is not part of the literal.
    pub(super) fn scan_utf16_string(&mut self) -> Result<Scanned, Failure> {
        let mut literal = String::with_capacity(ESCAPES * (2 + HEX_DIGITS));

        for _ in 0..ESCAPES {
            self.expect_char(&mut literal, |c| c == '\\')?;
            self.expect_char(&mut literal, |c| c == 'u')?;
            for _ in 0..HEX_DIGITS {
                self.expect_char(&mut literal, |c| c.is_ascii_hexdigit())?;
            }
        }

        if !self.ch.is_some_and(char::is_whitespace) {
            return Err(self.illegal_lookahead());
        }

        Ok(Scanned::Token(
            self.make_token(&literal, TokenKind::Utf16StringLiteral),
        ))
    }

    fn expect_char(
        &mut self,
        literal: &mut String,
        accept: impl Fn(char) -> bool,
    ) -> Result<(), Failure> {
        match self.ch {
            Some(c) if accept(c) => {
                literal.push(c);
                self.end_column += 1;
                self.bump();
                Ok(())
            }
            _ => Err(self.illegal_lookahead()),
        }
    }
}

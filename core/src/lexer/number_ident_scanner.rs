use super::cursor::CharSource;
use super::scanner::{Failure, Scanned, Scanner, is_ident_continue};
use super::token::{Token, TokenKind};
use crate::errors::LexErrorKind;

/// Inclusive bounds of one timestamp field.
#[derive(Debug, Clone, Copy)]
struct FieldBounds {
    min: u32,
    max: u32,
}

const YEAR: FieldBounds = FieldBounds { min: 0, max: 9999 };

/// A two-digit timestamp field and the delimiter that precedes it.
struct TimeStampField {
    delimiter: char,
    bounds: FieldBounds,
}

// Minutes start at 1: `..:00:..` is rejected by the literal grammar.
const TIMESTAMP_FIELDS: [TimeStampField; 5] = [
    // month
    TimeStampField {
        delimiter: '~',
        bounds: FieldBounds { min: 1, max: 12 },
    },
    // day
    TimeStampField {
        delimiter: '~',
        bounds: FieldBounds { min: 1, max: 31 },
    },
    // hour
    TimeStampField {
        delimiter: '~',
        bounds: FieldBounds { min: 0, max: 23 },
    },
    // minute
    TimeStampField {
        delimiter: ':',
        bounds: FieldBounds { min: 1, max: 59 },
    },
    // second
    TimeStampField {
        delimiter: ':',
        bounds: FieldBounds { min: 0, max: 59 },
    },
];

const YEAR_DIGITS: usize = 4;
const FIELD_DIGITS: usize = 2;

impl<S: CharSource> Scanner<S> {
    pub(super) fn scan_identifier(&mut self) -> Token {
        let mut id = String::new();
        while let Some(c) = self.ch {
            if !is_ident_continue(c) {
                break;
            }
            id.push(c);
            self.end_column += 1;
            self.bump();
        }
        self.make_token(&id, TokenKind::Identifier)
    }

    /// Integers keep their digit text; numeric conversion happens later so
    /// the host's integer limits never apply here.
    pub(super) fn scan_number(&mut self) -> Result<Scanned, Failure> {
        let mut number = String::new();
        while let Some(c) = self.ch {
            if !c.is_ascii_digit() {
                break;
            }
            number.push(c);
            self.end_column += 1;
            self.bump();
        }

        if self.ch == Some('~') && number.len() == YEAR_DIGITS && within(&number, YEAR) {
            return self.scan_timestamp(number).map(Scanned::Token);
        }

        Ok(Scanned::Token(
            self.make_token(&number, TokenKind::IntegerLiteral),
        ))
    }

    /// Continue after a four-digit year with `~` as lookahead. Every failure
    /// from here on is fatal.
    fn scan_timestamp(&mut self, year: String) -> Result<Token, Failure> {
        let mut literal = year;

        for field in &TIMESTAMP_FIELDS {
            if self.ch != Some(field.delimiter) {
                return Err(self.illegal_lookahead());
            }
            literal.push(field.delimiter);
            self.end_column += 1;
            self.bump();

            let digits = self.scan_field_digits()?;
            if !within(&digits, field.bounds) {
                return Err(Failure::new(
                    LexErrorKind::IllegalSubstring(digits),
                    self.end_column + 1 - FIELD_DIGITS,
                    FIELD_DIGITS,
                ));
            }
            literal.push_str(&digits);
        }

        // A line end counts as the trailing space: the source delivers the
        // end of every line as its own character.
        if !matches!(self.ch, Some(' ' | '\n')) {
            return Err(self.illegal_lookahead());
        }
        self.bump();

        Ok(self.make_token(&literal, TokenKind::TimeStampLiteral))
    }

    fn scan_field_digits(&mut self) -> Result<String, Failure> {
        let mut digits = String::with_capacity(FIELD_DIGITS);
        for _ in 0..FIELD_DIGITS {
            match self.ch {
                Some(c) if c.is_ascii_digit() => {
                    digits.push(c);
                    self.end_column += 1;
                    self.bump();
                }
                _ => return Err(self.illegal_lookahead()),
            }
        }
        Ok(digits)
    }

    /// The lookahead broke a literal's shape.
    pub(super) fn illegal_lookahead(&self) -> Failure {
        Failure::new(
            LexErrorKind::illegal_char(self.ch),
            self.end_column + 1,
            1,
        )
    }
}

fn within(digits: &str, bounds: FieldBounds) -> bool {
    digits
        .parse::<u32>()
        .is_ok_and(|value| (bounds.min..=bounds.max).contains(&value))
}

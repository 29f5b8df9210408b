use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::warn;

/// Character-at-a-time input with line and column tracking.
pub trait CharSource {
    /// Read the next character, or `None` once input is exhausted.
    fn read(&mut self) -> Option<char>;

    /// 1-based line of the last character read.
    fn line(&self) -> usize;

    /// 1-based column of the last character read.
    fn column(&self) -> usize;

    /// Text of the current line, without its terminator.
    fn line_text(&self) -> &str;

    /// Release the underlying input. Called at most once.
    fn close(&mut self) {}
}

/// Line-buffered reader over any `BufRead`.
///
/// Each line is delivered character by character and followed by a single
/// `'\n'`, including a final line that has no terminator in the input.
pub struct SourceReader<R> {
    reader: Option<R>,
    line: Vec<char>,
    text: String,
    line_no: usize,
    column: usize,
    needs_line: bool,
}

impl<R: BufRead> SourceReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            line: Vec::new(),
            text: String::new(),
            line_no: 0,
            column: 0,
            needs_line: true,
        }
    }

    fn fill_line(&mut self) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };

        let mut buf = String::new();
        match reader.read_line(&mut buf) {
            Ok(0) => {
                self.reader = None;
                false
            }
            Ok(_) => {
                if buf.ends_with('\n') {
                    buf.pop();
                    if buf.ends_with('\r') {
                        buf.pop();
                    }
                }
                self.line = buf.chars().collect();
                self.text = buf;
                self.line_no += 1;
                self.column = 0;
                self.needs_line = false;
                true
            }
            Err(err) => {
                warn!(line = self.line_no + 1, %err, "read failed; treating as end of input");
                self.reader = None;
                false
            }
        }
    }
}

impl<'a> SourceReader<&'a [u8]> {
    pub fn from_str(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl SourceReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CharSource for SourceReader<R> {
    fn read(&mut self) -> Option<char> {
        if self.needs_line && !self.fill_line() {
            return None;
        }

        self.column += 1;
        match self.line.get(self.column - 1) {
            Some(&ch) => Some(ch),
            None => {
                self.needs_line = true;
                Some('\n')
            }
        }
    }

    fn line(&self) -> usize {
        self.line_no
    }

    fn column(&self) -> usize {
        self.column
    }

    fn line_text(&self) -> &str {
        &self.text
    }

    fn close(&mut self) {
        self.reader = None;
        self.needs_line = true;
    }
}

/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/piot/yini
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

use tracing::trace;

use crate::document::Document;
use crate::error::{ErrorKind, ParseError};
use crate::timer::ScopeTimer;

enum LineEnd {
    Newline,
    Comment,
    Eof,
}

pub struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the input string.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Parser {
            input: input.as_bytes(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Parses the whole input. Stops at the first syntax error.
    pub fn parse(&mut self) -> Result<Document, ParseError> {
        let _timer = ScopeTimer::new("parse");
        let mut document = Document::new();
        let mut section = String::new();

        while let Some(b) = self.peek_byte() {
            match b {
                b'[' => {
                    self.next_byte();
                    section = self.parse_section_header()?;
                    document.add_section(&section);
                    trace!(section = %section, line = self.line, "entered section");
                }
                b'#' | b';' => self.skip_to_next_line(),
                b'\n' => {
                    self.next_byte();
                }
                b if is_blank(b) => {
                    self.next_byte();
                }
                _ => {
                    let (key, value) = self.parse_entry()?;
                    document.set(&section, &key, value);
                }
            }
        }

        Ok(document)
    }

    /// Current line and column, both 1-based.
    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn parse_section_header(&mut self) -> Result<String, ParseError> {
        self.skip_horizontal_ws();
        match self.peek_byte() {
            None => return Err(self.error(ErrorKind::UnterminatedSectionHeader)),
            Some(b'\n') => return Err(self.error(ErrorKind::NewlineInSectionHeader)),
            Some(b) if !is_name_start(b) => {
                return Err(self.error(ErrorKind::InvalidSectionStart(self.current_char())));
            }
            Some(_) => {}
        }

        let name = self.parse_name();
        self.skip_horizontal_ws();

        match self.peek_byte() {
            Some(b']') => {
                self.next_byte();
            }
            None => return Err(self.error(ErrorKind::UnterminatedSectionHeader)),
            Some(b'\n') => return Err(self.error(ErrorKind::NewlineInSectionHeader)),
            Some(_) => return Err(self.error(ErrorKind::InvalidSectionChar(self.current_char()))),
        }

        // only blanks or a comment may follow the closing bracket
        self.skip_horizontal_ws();
        match self.peek_byte() {
            None => {}
            Some(b'\n') => {
                self.next_byte();
            }
            Some(b'#' | b';') => self.skip_to_next_line(),
            Some(_) => {
                return Err(self.error(ErrorKind::TrailingAfterSectionHeader(self.current_char())));
            }
        }

        Ok(name)
    }

    fn parse_entry(&mut self) -> Result<(String, String), ParseError> {
        if !self.peek_byte().is_some_and(is_name_start) {
            return Err(self.error(ErrorKind::InvalidKeyStart(self.current_char())));
        }
        let key = self.parse_name();
        let key_end = self.pos;

        self.skip_horizontal_ws();
        match self.peek_byte() {
            None => return Ok((key, String::new())),
            Some(b'\n') => {
                // a key without assignment has the empty value
                self.next_byte();
                return Ok((key, String::new()));
            }
            Some(b @ (b'=' | b':')) => self.advance_byte(b),
            Some(_) if self.pos == key_end => {
                return Err(self.error(ErrorKind::InvalidKeyChar(self.current_char())));
            }
            Some(_) => return Err(self.error(ErrorKind::ExpectedAssignment(self.current_char()))),
        }

        let value = self.parse_value()?;
        Ok((key, value))
    }

    fn parse_value(&mut self) -> Result<String, ParseError> {
        self.skip_horizontal_ws();
        match self.peek_byte() {
            None => return Ok(String::new()),
            Some(b'\n') => {
                self.next_byte();
                let indented = self.peek_byte().is_some_and(is_blank);
                self.skip_horizontal_ws();
                match self.peek_byte() {
                    None => return Ok(String::new()),
                    Some(b'\n') => {
                        return Err(self.error(ErrorKind::RedundantNewlineBeforeValue));
                    }
                    Some(_) if !indented => {
                        return Err(self.error(ErrorKind::ExpectedIndentedValue));
                    }
                    Some(_) => {}
                }
            }
            Some(_) => {}
        }

        // `#` or `;` opening a value is part of it, later ones start a comment
        let mut lines = Vec::new();
        loop {
            let (text, end) = self.read_value_line(lines.is_empty());
            if text.is_empty() {
                break;
            }
            lines.push(text);

            // indented, non-empty lines continue the value
            match end {
                LineEnd::Newline if self.peek_byte().is_some_and(is_blank) => {}
                _ => break,
            }
        }

        Ok(lines.join("\n"))
    }

    /// Reads up to the end of the line or an inline comment, collapsing runs
    /// of blanks into a single space and dropping leading and trailing blanks.
    /// With `literal_start`, a comment character in first position is kept.
    fn read_value_line(&mut self, literal_start: bool) -> (String, LineEnd) {
        let mut raw = Vec::new();
        let mut pending_space = false;

        let end = loop {
            match self.peek_byte() {
                None => break LineEnd::Eof,
                Some(b'\n') => {
                    self.next_byte();
                    break LineEnd::Newline;
                }
                Some(b'#' | b';') if !(literal_start && raw.is_empty()) => {
                    self.skip_to_next_line();
                    break LineEnd::Comment;
                }
                Some(b) if is_blank(b) => {
                    self.advance_byte(b);
                    pending_space = !raw.is_empty();
                }
                Some(b) => {
                    if pending_space {
                        raw.push(b' ');
                        pending_space = false;
                    }
                    raw.push(b);
                    self.advance_byte(b);
                }
            }
        };

        (String::from_utf8_lossy(&raw).into_owned(), end)
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while let Some(&b) = self.input.get(self.pos) {
            if !is_name_char(b) {
                break;
            }
            self.advance_byte(b);
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn skip_to_next_line(&mut self) {
        while let Some(b) = self.next_byte() {
            if b == b'\n' {
                break;
            }
        }
    }

    fn skip_horizontal_ws(&mut self) {
        while let Some(&b) = self.input.get(self.pos) {
            if is_blank(b) {
                self.advance_byte(b);
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            column: self.column,
            kind,
        }
    }

    fn current_char(&self) -> char {
        let rest = &self.input[self.pos..];
        let len = rest.len().min(4);
        (1..=len)
            .find_map(|n| std::str::from_utf8(&rest[..n]).ok())
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let b = self.peek_byte();
        if let Some(bb) = b {
            self.advance_byte(bb);
        }
        b
    }

    const fn advance_byte(&mut self, b: u8) {
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r')
}

const fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

const fn is_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

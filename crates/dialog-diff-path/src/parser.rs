//! Path string parser.
//!
//! Grammar:
//!
//! ```text
//! path    := root? segment*
//! root    := '$'
//! segment := '.' key | '[' index ']' | '[' quoted ']'
//! ```
//!
//! A path may also start with a bare key (`foo.bar[1]`), in which case it is
//! read relative to the root.

use crate::types::{Path, PathStep};
use crate::PathError;

/// Path string parser.
pub struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a path string into steps.
    pub fn parse(input: &'a str) -> Result<Path, PathError> {
        let mut parser = Self { input, pos: 0 };
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<Path, PathError> {
        let mut steps = Vec::new();

        if self.peek() == Some('$') && matches!(self.peek_at(1), None | Some('.') | Some('[')) {
            self.advance();
        } else if !matches!(self.peek(), None | Some('.') | Some('[')) {
            // Bare leading key: `foo.bar`
            steps.push(PathStep::Key(self.parse_dot_key()?));
        }

        while let Some(c) = self.peek() {
            match c {
                '.' => {
                    self.advance();
                    steps.push(PathStep::Key(self.parse_dot_key()?));
                }
                '[' => {
                    self.advance();
                    steps.push(self.parse_bracket()?);
                }
                other => {
                    return Err(PathError::UnexpectedChar {
                        ch: other,
                        pos: self.pos,
                    })
                }
            }
        }

        Ok(steps)
    }

    fn parse_dot_key(&mut self) -> Result<String, PathError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '.' || c == '[' {
                break;
            }
            self.advance();
        }
        if self.pos == start {
            return match self.peek() {
                Some(c) => Err(PathError::UnexpectedChar { ch: c, pos: self.pos }),
                None => Err(PathError::UnexpectedEnd),
            };
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn parse_bracket(&mut self) -> Result<PathStep, PathError> {
        let step = match self.peek() {
            Some(q @ ('\'' | '"')) => {
                self.advance();
                PathStep::Key(self.parse_quoted(q)?)
            }
            Some(_) => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if c == ']' {
                        break;
                    }
                    self.advance();
                }
                let raw = &self.input[start..self.pos];
                if !crate::is_valid_index(raw) {
                    return Err(PathError::InvalidIndex(raw.to_string()));
                }
                let idx = raw
                    .parse()
                    .map_err(|_| PathError::InvalidIndex(raw.to_string()))?;
                PathStep::Index(idx)
            }
            None => return Err(PathError::UnexpectedEnd),
        };
        self.expect(']')?;
        Ok(step)
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, PathError> {
        let mut out = String::new();
        loop {
            match self.peek() {
                None => return Err(PathError::UnclosedKey),
                Some('\\') => {
                    self.advance();
                    match self.peek() {
                        Some(c @ ('\\' | '\'' | '"')) => {
                            out.push(c);
                            self.advance();
                        }
                        Some(_) => return Err(PathError::InvalidEscape),
                        None => return Err(PathError::UnclosedKey),
                    }
                }
                Some(c) if c == quote => {
                    self.advance();
                    return Ok(out);
                }
                Some(c) => {
                    out.push(c);
                    self.advance();
                }
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), PathError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance();
                Ok(())
            }
            Some(c) => Err(PathError::UnexpectedChar { ch: c, pos: self.pos }),
            None => Err(PathError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_at(&self, n: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

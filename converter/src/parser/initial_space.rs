//! Drop spaces at the start of unquoted-position fields.
//!
//! The `csv` crate only recognizes a quote as the first byte of a field and
//! trims after splitting, so `a, "b, c"` would split inside the quotes.
//! Removing the spaces before the parser sees them makes ` "b, c"` one field.

use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start of a field (after a delimiter, a line break, or at input start)
    FieldStart,
    Unquoted,
    Quoted,
    /// Just saw a quote inside a quoted field: closing quote or escape
    QuoteInQuoted,
}

/// `Read` adapter that skips spaces at the start of each field.
pub struct SkipInitialSpace<R> {
    inner: R,
    delimiter: u8,
    state: State,
}

impl<R: Read> SkipInitialSpace<R> {
    pub fn new(inner: R, delimiter: u8) -> Self {
        Self { inner, delimiter, state: State::FieldStart }
    }

    /// Advance the state machine; returns whether `b` is kept.
    fn keep(&mut self, b: u8) -> bool {
        let is_break = b == b'\n' || b == b'\r';
        self.state = match self.state {
            State::FieldStart if b == b' ' && b != self.delimiter => return false,
            State::FieldStart if b == b'"' => State::Quoted,
            State::FieldStart | State::Unquoted | State::QuoteInQuoted
                if b == self.delimiter || is_break =>
            {
                State::FieldStart
            }
            State::FieldStart | State::Unquoted => State::Unquoted,
            State::Quoted if b == b'"' => State::QuoteInQuoted,
            State::Quoted => State::Quoted,
            State::QuoteInQuoted if b == b'"' => State::Quoted,
            State::QuoteInQuoted => State::Unquoted,
        };
        true
    }
}

impl<R: Read> Read for SkipInitialSpace<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let n = self.inner.read(buf)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let b = buf[i];
                if self.keep(b) {
                    buf[kept] = b;
                    kept += 1;
                }
            }
            // A chunk made only of skipped spaces is not end of input
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}

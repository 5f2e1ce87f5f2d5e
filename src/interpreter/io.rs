//! Program input and output
//!
//! [`Input`] is a byte source with one byte of pushback, used by `,` and `?`.
//! Bytes pulled from the underlying reader are kept, so the read position can
//! be saved and restored when stepping through execution history.
//!
//! [`Output`] either streams straight to a writer or captures everything for
//! the time-travel UI and tests.

use num_bigint::BigInt;
use std::io::{self, ErrorKind, Read, Write};

const READ_CHUNK: usize = 4096;

/// Saved read position of an [`Input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputCursor {
    pub offset: usize,
    pub eof_pending: bool,
}

/// Byte-oriented program input with one byte of pushback
pub struct Input {
    reader: Option<Box<dyn Read>>,
    buffer: Vec<u8>,
    cursor: InputCursor,
}

impl Input {
    /// Input that is exhausted from the start
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// Input served from an in-memory buffer
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input {
            reader: None,
            buffer: bytes.into(),
            cursor: InputCursor::default(),
        }
    }

    /// Input pulled lazily from a reader (stdin, a file, ...)
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Input {
            reader: Some(Box::new(reader)),
            buffer: Vec::new(),
            cursor: InputCursor::default(),
        }
    }

    /// Read one byte; `None` once the input is exhausted
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if self.cursor.eof_pending {
            self.cursor.eof_pending = false;
            return Ok(None);
        }

        if self.cursor.offset >= self.buffer.len() && !self.fill()? {
            return Ok(None);
        }

        let byte = self.buffer[self.cursor.offset];
        self.cursor.offset += 1;
        Ok(Some(byte))
    }

    /// Push back the byte (or end of input) returned by the last read
    pub fn unread(&mut self, byte: Option<u8>) {
        match byte {
            Some(_) => self.cursor.offset = self.cursor.offset.saturating_sub(1),
            None => self.cursor.eof_pending = true,
        }
    }

    /// Pull more bytes from the reader; false when nothing more is available
    fn fill(&mut self) -> io::Result<bool> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };

        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match reader.read(&mut chunk) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    self.buffer.extend_from_slice(&chunk[..n]);
                    return Ok(true);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Parse a signed decimal integer, as done by `?`
    ///
    /// Bytes are skipped until a sign, a digit or the end of input. A sign is
    /// consumed; the digit or end of input is left for the digit loop. Digits
    /// are then accumulated and the first non-digit is pushed back. With no
    /// digits the result is zero.
    pub fn read_integer(&mut self) -> io::Result<BigInt> {
        let mut negative = false;

        loop {
            let byte = self.read_byte()?;
            match byte {
                Some(b'+') => break,
                Some(b'-') => {
                    negative = true;
                    break;
                }
                Some(b'0'..=b'9') | None => {
                    self.unread(byte);
                    break;
                }
                Some(_) => continue,
            }
        }

        let mut value = BigInt::from(0);
        loop {
            let byte = self.read_byte()?;
            match byte {
                Some(digit @ b'0'..=b'9') => value = value * 10u32 + u32::from(digit - b'0'),
                _ => {
                    self.unread(byte);
                    break;
                }
            }
        }

        Ok(if negative { -value } else { value })
    }

    pub fn cursor(&self) -> InputCursor {
        self.cursor
    }

    /// Return to a previously saved read position
    pub fn seek(&mut self, cursor: InputCursor) {
        self.cursor = cursor;
    }

    /// Bytes read from the source so far
    pub fn consumed(&self) -> &[u8] {
        &self.buffer[..self.cursor.offset.min(self.buffer.len())]
    }
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("buffered", &self.buffer.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

/// Program output
pub struct Output {
    sink: Option<Box<dyn Write>>,
    captured: Vec<u8>,
    /// Length of the captured output at the current point in history
    visible: usize,
}

impl Output {
    /// Output kept in memory
    pub fn captured() -> Self {
        Output {
            sink: None,
            captured: Vec::new(),
            visible: 0,
        }
    }

    /// Output written straight through to `sink`
    pub fn streaming(sink: impl Write + 'static) -> Self {
        Output {
            sink: Some(Box::new(sink)),
            captured: Vec::new(),
            visible: 0,
        }
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.write_bytes(&[byte])
    }

    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.write_bytes(text.as_bytes())
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.write_all(bytes)?,
            None => {
                self.captured.truncate(self.visible);
                self.captured.extend_from_slice(bytes);
            }
        }
        self.visible += bytes.len();
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    /// Captured output up to the current point in history (empty when streaming)
    pub fn bytes(&self) -> &[u8] {
        &self.captured[..self.visible.min(self.captured.len())]
    }

    /// Total number of bytes written so far
    pub fn len(&self) -> usize {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// Rewind to an earlier length; captured bytes past it stay available for replay
    pub fn rewind(&mut self, len: usize) {
        if self.sink.is_none() {
            self.visible = len.min(self.captured.len());
        }
    }

    /// Captured output split into display lines
    pub fn lines(&self) -> Vec<String> {
        let text = String::from_utf8_lossy(self.bytes());
        let mut lines: Vec<String> = text.split('\n').map(|s| s.to_string()).collect();
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}

impl std::fmt::Debug for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Output")
            .field("streaming", &self.sink.is_some())
            .field("len", &self.visible)
            .finish()
    }
}

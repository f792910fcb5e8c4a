//! One-shot forward cursor over a chain's bytes.

use crate::error::{Error, Result};

/// A single-pass, closable view over a slice of chain bytes.
///
/// The reader does not own the bytes; it borrows them from its chain, and
/// closing it only severs that view. Solvers drain a reader byte by byte:
///
/// ```
/// use bytechain::Chain;
///
/// let chain = Chain::from(&b"kat"[..]);
/// let mut reader = chain.reader();
/// while reader.also() {
///     let _ = reader.read();
/// }
/// ```
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    cursor: usize,
    end: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            cursor: 0,
            end: buf.len(),
        }
    }

    /// True while readable bytes remain.
    #[must_use]
    pub fn also(&self) -> bool {
        self.cursor < self.end
    }

    /// Returns the byte under the cursor and advances.
    ///
    /// # Panics
    /// Panics when no readable byte remains; guard with [`Reader::also`] or
    /// use [`Reader::next`] for a checked read.
    pub fn read(&mut self) -> u8 {
        let b = self.buf[self.cursor];
        self.cursor += 1;
        b
    }

    /// Returns the byte under the cursor and advances, failing at the end.
    ///
    /// # Errors
    /// [`Error::EndOfStream`] once the cursor has reached the end.
    pub fn next_byte(&mut self) -> Result<u8> {
        if self.cursor < self.end {
            let b = self.buf[self.cursor];
            self.cursor += 1;
            Ok(b)
        } else {
            Err(Error::EndOfStream {
                cursor: self.cursor,
                end: self.end,
            })
        }
    }

    /// Repositions the cursor. A position at or past the end simply leaves
    /// nothing to read.
    pub fn slip(&mut self, index: usize) {
        self.cursor = index;
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Severs the view; every later read sees an exhausted reader.
    pub fn close(&mut self) {
        self.buf = &[];
        self.end = 0;
    }
}

impl Iterator for Reader<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.also() {
            Some(self.read())
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

impl embedded_io::ErrorType for Reader<'_> {
    type Error = core::convert::Infallible;
}

impl embedded_io::Read for Reader<'_> {
    fn read(&mut self, out: &mut [u8]) -> core::result::Result<usize, Self::Error> {
        // the cursor may sit past the end after slip() or close(); an
        // exhausted reader reads as EOF, never as a range error
        let start = self.cursor.min(self.buf.len());
        let n = self.end.saturating_sub(self.cursor).min(out.len());
        out[..n].copy_from_slice(&self.buf[start..start + n]);
        self.cursor += n;
        Ok(n)
    }
}

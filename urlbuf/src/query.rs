use core::cell::Cell;
use core::fmt;
use core::ops::Deref;
use std::collections::HashMap;

use bytechain::binary::{hex_value, upper};
use bytechain::{Chain, Result, Value};

/// Where the key/value region begins.
#[derive(Debug, Clone, Copy)]
enum Offset {
    /// Not yet looked for.
    Unknown,
    /// Looked for and absent; the next [`Query::set`] writes the `?`.
    Missing,
    /// One past the `?`.
    At(usize),
}

/// A chain that assembles and decodes URL query strings.
///
/// Keys and values are percent-encoded on the way in: unreserved bytes
/// (`A-Z`, `a-z`, `0-9`, `.`, `_`, `-`, `*`) pass through, space becomes
/// `+`, everything else becomes `%HH` with uppercase hex. Pairs are laid
/// out as `?k=v&k=v`, and [`Query::to_map`] walks the region after the `?`
/// back into owned strings.
///
/// The query dereferences to its underlying [`Chain`] for the whole read
/// surface; writes go through the typed methods so the encoding and the
/// offset stay consistent.
#[derive(Debug)]
pub struct Query {
    chain: Chain,
    offset: Cell<Offset>,
}

impl Query {
    #[must_use]
    pub fn new() -> Self {
        Self {
            chain: Chain::with_capacity(16),
            offset: Cell::new(Offset::Unknown),
        }
    }

    /// Index one past the `?`, located lazily and cached.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self.offset.get() {
            Offset::At(o) => Some(o),
            Offset::Missing => None,
            Offset::Unknown => match self.chain.index_of(b'?') {
                Some(i) => {
                    self.offset.set(Offset::At(i + 1));
                    Some(i + 1)
                }
                None => {
                    self.offset.set(Offset::Missing);
                    None
                }
            },
        }
    }

    /// Begins a pair: writes `?` or `&`, the encoded key, then `=`.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn set(&mut self, key: &str) -> Result<&mut Self> {
        match self.offset() {
            Some(_) => self.chain.concat_byte(b'&')?,
            None => {
                self.chain.concat_byte(b'?')?;
                self.offset.set(Offset::At(self.chain.len()));
            }
        }
        self.add(key)?;
        self.chain.concat_byte(b'=')?;
        Ok(self)
    }

    /// Appends one raw byte as `%HH`.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn escape(&mut self, b: u8) -> Result<&mut Self> {
        self.chain
            .concat_bytes(&[b'%', upper(b >> 4), upper(b)])?;
        Ok(self)
    }

    /// Appends one byte under the wire rules.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn add_byte(&mut self, b: u8) -> Result<&mut Self> {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'_' | b'-' | b'*' => {
                self.chain.concat_byte(b)?;
            }
            b' ' => self.chain.concat_byte(b'+')?,
            _ => {
                self.escape(b)?;
            }
        }
        Ok(self)
    }

    /// Appends a byte run under the wire rules.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn add_bytes(&mut self, data: &[u8]) -> Result<&mut Self> {
        for &b in data {
            self.add_byte(b)?;
        }
        Ok(self)
    }

    /// Appends text, re-encoded to UTF-8 and routed byte by byte.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn add(&mut self, text: &str) -> Result<&mut Self> {
        for c in text.chars() {
            if (c as u32) < 0x80 {
                self.add_byte(c as u8)?;
            } else {
                let mut buf = [0u8; 4];
                for &b in c.encode_utf8(&mut buf).as_bytes() {
                    self.escape(b)?;
                }
            }
        }
        Ok(self)
    }

    /// Appends UTF-16 code units, pairing surrogates before encoding.
    ///
    /// A half with no valid partner collapses to an escaped `?`, consuming
    /// the unit that failed to pair with it.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn add_units(&mut self, units: &[u16]) -> Result<&mut Self> {
        let mut i = 0;
        while i < units.len() {
            let u = units[i];
            i += 1;
            if u < 0x80 {
                self.add_byte(u as u8)?;
            } else if u < 0x800 {
                self.escape((u >> 6) as u8 | 0xC0)?;
                self.escape((u & 0x3F) as u8 | 0x80)?;
            } else if (0xD800..=0xDFFF).contains(&u) {
                if !(0xD800..=0xDBFF).contains(&u) || i >= units.len() {
                    self.escape(b'?')?;
                    continue;
                }
                let next = units[i];
                i += 1;
                if !(0xDC00..=0xDFFF).contains(&next) {
                    self.escape(b'?')?;
                    continue;
                }
                let cp = (u32::from(u) << 10) + u32::from(next) - 0x35F_DC00;
                self.escape((cp >> 18) as u8 | 0xF0)?;
                self.escape(((cp >> 12) & 0x3F) as u8 | 0x80)?;
                self.escape(((cp >> 6) & 0x3F) as u8 | 0x80)?;
                self.escape((cp & 0x3F) as u8 | 0x80)?;
            } else {
                self.escape((u >> 12) as u8 | 0xE0)?;
                self.escape(((u >> 6) & 0x3F) as u8 | 0x80)?;
                self.escape((u & 0x3F) as u8 | 0x80)?;
            }
        }
        Ok(self)
    }

    /// Appends the decimal digits of an integer value, no escaping needed.
    ///
    /// # Errors
    /// [`bytechain::Error::Fixed`] on a sealed chain.
    pub fn add_int(&mut self, num: i64) -> Result<&mut Self> {
        self.chain.concat_long(num)?;
        Ok(self)
    }

    /// Decodes the key/value region into owned strings.
    ///
    /// Walks from one past the `?`, or from the start when the buffer never
    /// had one, splitting on `=` and `&` and undoing `+` and `%HH`. A
    /// malformed escape is kept literally; later duplicates of a key win.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        let bytes = self.chain.as_bytes();
        let mut scratch = Value::new();
        let mut i = self.offset().unwrap_or(0);

        while let Some(eq) = self.chain.index_of_from(b'=', i) {
            unescape_into(&mut scratch, &bytes[i..eq]);
            let key = scratch.to_string();

            let end = self
                .chain
                .index_of_from(b'&', eq + 1)
                .unwrap_or(bytes.len());
            unescape_into(&mut scratch, &bytes[eq + 1..end]);
            map.insert(key, scratch.to_string());

            i = end + 1;
        }
        map
    }

    /// The full rendered buffer, for the caller's IO layer.
    #[must_use]
    pub fn to_url(&self) -> String {
        self.chain.to_string()
    }

    /// A query over a copy of `[start, end)`.
    ///
    /// # Errors
    /// [`bytechain::Error::OutOfBounds`] for a backwards or overlong range.
    pub fn sub_query(&self, start: usize, end: usize) -> Result<Query> {
        let bytes = self.chain.to_bytes_range(start, end)?;
        Ok(Query::from(bytes.as_slice()))
    }

    /// Gives up the query, keeping the rendered chain.
    #[must_use]
    pub fn into_chain(self) -> Chain {
        self.chain
    }
}

/// Undoes the wire encoding of one segment into a reusable scratch token.
fn unescape_into(scratch: &mut Value, bytes: &[u8]) {
    // the scratch is never sealed, so these mutations cannot fail
    let _ = scratch.reset();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                let _ = scratch.concat_byte(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        let _ = scratch.concat_byte(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        let _ = scratch.concat_byte(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                let _ = scratch.concat_byte(b);
                i += 1;
            }
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for Query {
    type Target = Chain;

    fn deref(&self) -> &Chain {
        &self.chain
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chain.fmt(f)
    }
}

impl From<&str> for Query {
    fn from(url: &str) -> Self {
        Self {
            chain: Chain::from(url),
            offset: Cell::new(Offset::Unknown),
        }
    }
}

impl From<&[u8]> for Query {
    fn from(src: &[u8]) -> Self {
        Self {
            chain: Chain::from(src),
            offset: Cell::new(Offset::Unknown),
        }
    }
}

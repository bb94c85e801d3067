//! Byte buffer primitives
//!
//! Bounds-checked readers and writers for the big-endian fields shared by
//! every token request variant.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{Result, TokenError};

/// Size of a 16-bit length prefix
pub const LENGTH_PREFIX_SIZE: usize = 2;

// =============================================================================
// Reader
// =============================================================================

/// Cursor over a borrowed wire message
///
/// Every read names the field it is reading so a short read can report
/// exactly where the message ran out.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Bytes not yet consumed
    pub fn remaining(&self) -> usize {
        self.buf.remaining()
    }

    fn ensure(&self, field: &'static str, expected: usize) -> Result<()> {
        if self.buf.remaining() < expected {
            return Err(TokenError::TruncatedInput {
                field,
                expected,
                available: self.buf.remaining(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8> {
        self.ensure(field, 1)?;
        Ok(self.buf.get_u8())
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self, field: &'static str) -> Result<u16> {
        self.ensure(field, 2)?;
        Ok(self.buf.get_u16())
    }

    /// Read exactly `N` bytes
    pub fn read_array<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N]> {
        self.ensure(field, N)?;
        let mut out = [0u8; N];
        self.buf.copy_to_slice(&mut out);
        Ok(out)
    }

    /// Read a 16-bit length prefix followed by that many bytes
    pub fn read_u16_prefixed(&mut self, field: &'static str) -> Result<&'a [u8]> {
        let len = self.read_u16(field)? as usize;
        self.ensure(field, len)?;
        let (content, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(content)
    }

    /// Require that the whole message was consumed
    pub fn finish(self) -> Result<()> {
        match self.buf.remaining() {
            0 => Ok(()),
            remaining => Err(TokenError::TrailingBytes { remaining }),
        }
    }
}

// =============================================================================
// Writer
// =============================================================================

/// Growable output buffer for a single wire message
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: BytesMut,
}

impl WireWriter {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
        }
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Write a big-endian u16
    pub fn put_u16(&mut self, value: u16) {
        self.buf.put_u16(value);
    }

    pub fn put_slice(&mut self, data: &[u8]) {
        self.buf.put_slice(data);
    }

    /// Write a 16-bit length prefix followed by `data`
    ///
    /// Callers guarantee `data.len() <= u16::MAX` at construction time.
    pub fn put_u16_prefixed(&mut self, data: &[u8]) {
        debug_assert!(data.len() <= u16::MAX as usize);
        self.buf.put_u16(data.len() as u16);
        self.buf.put_slice(data);
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn freeze(self) -> Bytes {
        self.buf.freeze()
    }
}

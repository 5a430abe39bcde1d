//! Low-level bounds-checked byte reading over a slice.

use byteorder::{ByteOrder, LittleEndian};

use super::error::{BlkError, Result};
use super::varint::decode_varint;

/// A forward-only cursor over a byte slice. Every read is bounds-checked
/// and reports the field it was reading when the data ran out.
pub(crate) struct SliceReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> SliceReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Take the next `n` bytes, failing if fewer remain.
    pub fn take(&mut self, n: usize, context: &'static str) -> Result<&'a [u8]> {
        let remaining = self.buf.len() - self.pos;
        if n > remaining {
            return Err(BlkError::UnexpectedEnd {
                context,
                needed: n,
                remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn u32_le(&mut self, context: &'static str) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.take(4, context)?))
    }

    pub fn u64_le(&mut self, context: &'static str) -> Result<u64> {
        Ok(LittleEndian::read_u64(self.take(8, context)?))
    }

    /// Decode a varint at the cursor and advance past it.
    pub fn varint(&mut self) -> Result<u64> {
        let (value, consumed) = decode_varint(&self.buf[self.pos..])?;
        self.pos += consumed;
        Ok(value)
    }

    /// Decode a varint used as a length or count, failing early on values
    /// that cannot index this address space.
    pub fn varlen(&mut self, context: &'static str) -> Result<usize> {
        let value = self.varint()?;
        usize::try_from(value)
            .map_err(|_| BlkError::InvalidFormat(format!("{} too large: {}", context, value)))
    }
}

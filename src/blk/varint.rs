//! Bitcoin-wire variable-length integer encoding.

use byteorder::{ByteOrder, LittleEndian};

use super::error::{BlkError, Result};

/// Decode a variable-length integer from the start of `raw`.
///
/// A leading byte below `0xFD` is the value itself; the sentinels `0xFD`,
/// `0xFE` and `0xFF` announce a 2-, 4- or 8-byte little-endian follow-on
/// field. Returns the value and the total number of bytes consumed,
/// including the leading byte.
///
/// # Errors
/// Fails if the slice holds fewer bytes than the encoding announces. The
/// caller must treat this as malformed input, never as a truncated value.
pub fn decode_varint(raw: &[u8]) -> Result<(u64, usize)> {
    let tag = *raw.first().ok_or(BlkError::UnexpectedEnd {
        context: "varint tag",
        needed: 1,
        remaining: 0,
    })?;

    let width = match tag {
        0xFD => 2,
        0xFE => 4,
        0xFF => 8,
        value => return Ok((u64::from(value), 1)),
    };

    if raw.len() < 1 + width {
        return Err(BlkError::UnexpectedEnd {
            context: "varint value",
            needed: 1 + width,
            remaining: raw.len(),
        });
    }

    let value = LittleEndian::read_uint(&raw[1..1 + width], width);
    Ok((value, 1 + width))
}

/// Encode a value as the canonical smallest-width variable-length integer.
pub fn encode_varint(value: u64) -> Vec<u8> {
    if value < 0xFD {
        vec![value as u8]
    } else if value <= 0xFFFF {
        let mut out = vec![0xFD; 3];
        LittleEndian::write_u16(&mut out[1..], value as u16);
        out
    } else if value <= 0xFFFF_FFFF {
        let mut out = vec![0xFE; 5];
        LittleEndian::write_u32(&mut out[1..], value as u32);
        out
    } else {
        let mut out = vec![0xFF; 9];
        LittleEndian::write_u64(&mut out[1..], value);
        out
    }
}

//! Block decoding.

use super::error::{BlkError, Result};
use super::hash::{reversed_hex, HashAlgo};
use super::models::Block;
use super::script::{AddressResolver, NetworkParams};
use super::tx::parse_txs;
use super::utils::SliceReader;

/// Length of the fixed block header.
pub const HEADER_LEN: usize = 80;

/// Decode one full block record.
///
/// `raw` is the payload of a storage record: fixed header, transaction
/// sequence, and (for proof-of-stake blocks) a trailing signature. The
/// identity-hash algorithm is selected once from the version field.
///
/// # Errors
/// Fails when the header or any transaction field reads past the slice
/// boundary, or when the declared transaction count overruns the record.
/// No partial block is ever returned.
pub fn parse_block(
    raw: &[u8],
    params: &NetworkParams,
    resolver: &dyn AddressResolver,
) -> Result<Block> {
    if raw.len() < HEADER_LEN {
        return Err(BlkError::UnexpectedEnd {
            context: "block header",
            needed: HEADER_LEN,
            remaining: raw.len(),
        });
    }

    let mut r = SliceReader::new(raw);
    let version = r.u32_le("block version")?;

    let algo = HashAlgo::for_block_version(version);
    let hash = reversed_hex(&algo.digest(&raw[..HEADER_LEN])?);

    let parent_bytes = r.take(32, "parent hash")?;
    let parent = if parent_bytes.iter().all(|b| *b == 0) {
        None
    } else {
        Some(reversed_hex(parent_bytes))
    };

    let merkle_root = reversed_hex(r.take(32, "merkle root")?);
    let time = r.u32_le("block time")?;
    let bits = r.u32_le("difficulty bits")?;
    let nonce = r.u32_le("nonce")?;

    let (txs, txs_len) = parse_txs(&raw[HEADER_LEN..], params, resolver)?;

    let mut block = Block {
        hash,
        version,
        parent,
        merkle_root,
        time,
        bits,
        nonce,
        size: raw.len() as u32,
        txs,
        block_sig: None,
        pos: None,
    };

    if block.is_proof_of_stake() {
        let mut sig = SliceReader::new(&raw[HEADER_LEN + txs_len..]);
        let sig_len = sig.varlen("block signature length")?;
        block.block_sig = Some(hex::encode(sig.take(sig_len, "block signature")?));
    }

    Ok(block)
}

//! Transaction decoding.

use super::error::Result;
use super::hash::{reversed_hex, sha256d};
use super::models::{Tx, TxIn, TxOut};
use super::script::{AddressResolver, NetworkParams};
use super::utils::SliceReader;

/// Decode one transaction from the start of `raw`.
///
/// Returns the transaction and the exact number of bytes it occupied, so a
/// caller can advance through a separator-free transaction sequence. The
/// identity hash is computed over exactly the consumed byte range.
///
/// # Errors
/// Fails when any field declares more bytes than remain in the slice; the
/// decoder never reads out of bounds and never returns a partial
/// transaction.
pub fn parse_tx(
    raw: &[u8],
    params: &NetworkParams,
    resolver: &dyn AddressResolver,
) -> Result<(Tx, usize)> {
    let mut r = SliceReader::new(raw);

    let version = r.u32_le("transaction version")?;
    let time = r.u32_le("transaction time")?;

    let input_count = r.varlen("input count")?;
    let mut tx_ins = Vec::new();
    for _ in 0..input_count {
        let input_hash = reversed_hex(r.take(32, "input previous hash")?);
        let input_vout = r.u32_le("input previous index")?;
        let script_len = r.varlen("unlock script length")?;
        let script_sig = r.take(script_len, "unlock script")?.to_vec();
        let sequence = r.u32_le("input sequence")?;
        tx_ins.push(TxIn {
            input_hash,
            input_vout,
            script_sig,
            sequence,
        });
    }

    let output_count = r.varlen("output count")?;
    let mut tx_outs = Vec::new();
    for _ in 0..output_count {
        let value = r.u64_le("output value")?;
        let script_len = r.varlen("lock script length")?;
        let pk_script = r.take(script_len, "lock script")?.to_vec();
        // Resolution failure is non-fatal; the address just stays empty.
        let addr = resolver.resolve(&pk_script, params).unwrap_or_default();
        tx_outs.push(TxOut {
            addr,
            value,
            pk_script,
        });
    }

    let lock_time = r.u32_le("lock time")?;

    // The comment field is unconditional; a zero-length comment is valid.
    // Its bytes are opaque, so text rendering is best-effort.
    let comment_len = r.varlen("comment length")?;
    let comment = String::from_utf8_lossy(r.take(comment_len, "comment")?).into_owned();

    let size = r.pos();
    let hash = reversed_hex(&sha256d(&raw[..size]));

    Ok((
        Tx {
            hash,
            size: size as u32,
            version,
            time,
            tx_ins,
            tx_outs,
            lock_time,
            comment,
        },
        size,
    ))
}

/// Decode a varint-counted transaction sequence from the start of `raw`.
///
/// Returns the transactions and the total number of bytes consumed,
/// including the leading count.
pub fn parse_txs(
    raw: &[u8],
    params: &NetworkParams,
    resolver: &dyn AddressResolver,
) -> Result<(Vec<Tx>, usize)> {
    let mut r = SliceReader::new(raw);
    let tx_count = r.varlen("transaction count")?;
    let mut offset = r.pos();

    let mut txs = Vec::new();
    for _ in 0..tx_count {
        let (tx, consumed) = parse_tx(&raw[offset..], params, resolver)?;
        offset += consumed;
        txs.push(tx);
    }

    Ok((txs, offset))
}

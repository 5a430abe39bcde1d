//! Data structures for parsed blocks and transactions.

/// Reversed-hex form of an all-zero 32-byte hash, as it appears in the
/// coinbase-style null previous-output reference.
pub const NULL_HASH: &str = "0000000000000000000000000000000000000000000000000000000000000000";

/// The storage position of a block: segment file ordinal plus the byte
/// offset immediately following the block's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPos {
    pub file_id: u32,
    pub pos: u64,
}

/// A parsed block. Constructed atomically from one raw record; immutable
/// after construction.
#[derive(Debug, Clone)]
pub struct Block {
    /// Identity hash, reversed hex. sha256d of the 80-byte header for
    /// versions above the scrypt threshold, scrypt otherwise.
    pub hash: String,
    pub version: u32,
    /// Parent block hash, reversed hex. `None` for a genesis block
    /// (all-zero parent reference).
    pub parent: Option<String>,
    pub merkle_root: String,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
    /// Length of the raw block record in bytes.
    pub size: u32,
    pub txs: Vec<Tx>,
    /// Trailing block signature, hex. Present only on proof-of-stake
    /// blocks.
    pub block_sig: Option<String>,
    /// Where the cursor read this block from. `None` when the block was
    /// parsed from a standalone byte slice.
    pub pos: Option<BlockPos>,
}

impl Block {
    /// A block is proof-of-stake when its second transaction is a stake
    /// claim. Only the second transaction slot is inspected.
    pub fn is_proof_of_stake(&self) -> bool {
        self.txs.len() > 1 && self.txs[1].is_coin_stake()
    }
}

/// A parsed transaction.
#[derive(Debug, Clone)]
pub struct Tx {
    /// Identity hash: sha256d over exactly the encoded bytes this
    /// transaction occupied, reversed hex.
    pub hash: String,
    /// Encoded length in bytes.
    pub size: u32,
    pub version: u32,
    pub time: u32,
    pub tx_ins: Vec<TxIn>,
    pub tx_outs: Vec<TxOut>,
    pub lock_time: u32,
    /// Trailing free-text comment, rendered best-effort from raw bytes.
    pub comment: String,
}

impl Tx {
    /// A stake-claim transaction carries a coinbase-style marker in its
    /// first input: null previous hash and index 0xFFFFFFFF.
    pub fn is_coin_stake(&self) -> bool {
        match self.tx_ins.first() {
            Some(input) => input.input_hash == NULL_HASH && input.input_vout == u32::MAX,
            None => false,
        }
    }
}

/// A transaction input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Referenced previous-output hash, reversed hex.
    pub input_hash: String,
    /// Referenced output index within the previous transaction.
    pub input_vout: u32,
    /// Opaque unlock script; not interpreted by this crate.
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

/// A transaction output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Address resolved from the lock script, or empty when resolution
    /// yielded nothing.
    pub addr: String,
    /// Value in the smallest chain unit.
    pub value: u64,
    /// Opaque lock script; interpreted only by the address resolver.
    pub pk_script: Vec<u8>,
}

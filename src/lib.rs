//! # blk-reader
//!
//! A reader for segmented blockchain block-storage files (`blkNNNN.dat`).
//! Decodes the CLAM-family on-disk format: little-endian scalars, wire
//! varints, version-dependent proof-of-work hashing (sha256d above block
//! version 6, scrypt at or below), and the trailing signature carried by
//! proof-of-stake blocks.
//!
//! Lock-script interpretation is delegated to an [`AddressResolver`]
//! supplied by the caller; the crate itself never inspects script bytes.
pub mod blk;

// Re-export the main types for convenience
pub use blk::{
    error::{BlkError, Result},
    hash::HashAlgo,
    models::{Block, BlockPos, Tx, TxIn, TxOut},
    script::{AddressResolver, NetworkParams, NoAddressResolver, CLAM_MAGIC, CLAM_MAINNET},
    Blockchain,
};

//! Block and transaction identity hashes.

use scrypt::{scrypt, Params};
use sha2::{Digest, Sha256};

use super::error::{BlkError, Result};

/// Highest block version hashed with scrypt. Versions above this use
/// sha256d, encoding the chain family's historical proof-of-work
/// transition.
pub const SCRYPT_MAX_VERSION: u32 = 6;

/// Compute the double-SHA256 digest of a byte slice.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// Compute the self-keyed scrypt digest of a byte slice.
///
/// Fixed parameters N=1024, r=1, p=1, 32-byte output; the input serves as
/// both password and salt.
pub fn scrypt_hash(data: &[u8]) -> Result<[u8; 32]> {
    let params = Params::new(10, 1, 1, 32).map_err(|e| BlkError::Hash(e.to_string()))?;
    let mut out = [0u8; 32];
    scrypt(data, data, &params, &mut out).map_err(|e| BlkError::Hash(e.to_string()))?;
    Ok(out)
}

/// Render a digest as lowercase hex with byte order reversed (last byte
/// first), the chain's canonical display convention for hashes.
pub fn reversed_hex(digest: &[u8]) -> String {
    let mut bytes = digest.to_vec();
    bytes.reverse();
    hex::encode(bytes)
}

/// The identity-hash algorithm for a block, selected once at parse start
/// from the block version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgo {
    Sha256d,
    Scrypt,
}

impl HashAlgo {
    /// Select the algorithm for a block format version.
    pub fn for_block_version(version: u32) -> Self {
        if version > SCRYPT_MAX_VERSION {
            HashAlgo::Sha256d
        } else {
            HashAlgo::Scrypt
        }
    }

    /// Apply the algorithm to a byte slice.
    pub fn digest(&self, data: &[u8]) -> Result<[u8; 32]> {
        match self {
            HashAlgo::Sha256d => Ok(sha256d(data)),
            HashAlgo::Scrypt => scrypt_hash(data),
        }
    }
}

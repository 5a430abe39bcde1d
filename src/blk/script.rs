//! The script-to-address resolution seam.
//!
//! Lock scripts are opaque to this crate. Turning one into a displayable
//! address is delegated to an [`AddressResolver`] implementation supplied by
//! the caller; resolution failure is never fatal and simply leaves the
//! output's address empty.

/// Address-encoding parameters for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    pub name: &'static str,
    /// Version byte for pay-to-pubkey-hash addresses.
    pub pubkey_hash_id: u8,
    /// Version byte for pay-to-script-hash addresses.
    pub script_hash_id: u8,
}

/// CLAM mainnet address parameters.
pub const CLAM_MAINNET: NetworkParams = NetworkParams {
    name: "clam-mainnet",
    pubkey_hash_id: 0x89,
    script_hash_id: 0x0d,
};

/// CLAM mainnet record magic, in on-disk byte order.
pub const CLAM_MAGIC: [u8; 4] = [0x03, 0x22, 0x35, 0x15];

/// Resolves a raw lock script to at most one address string.
pub trait AddressResolver {
    /// Returns the address encoded by `lock_script` under `params`, or
    /// `None` when the script holds no recognizable address.
    fn resolve(&self, lock_script: &[u8], params: &NetworkParams) -> Option<String>;
}

/// A resolver that recognizes nothing. Every output keeps an empty address.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAddressResolver;

impl AddressResolver for NoAddressResolver {
    fn resolve(&self, _lock_script: &[u8], _params: &NetworkParams) -> Option<String> {
        None
    }
}

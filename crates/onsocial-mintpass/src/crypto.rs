//! Fixed-width byte extraction for pass material.

use crate::{NONCE_LEN, PassError};

/// Byte length of a raw ed25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Byte length of an ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Extract the 32 raw key bytes of an ed25519 signer key.
/// Accepts raw keys and 33-byte keys carrying a leading curve-type byte,
/// which is how NEAR serializes them.
pub fn signer_key_bytes(raw: &[u8]) -> Result<[u8; PUBLIC_KEY_LEN], PassError> {
    let key = match raw.len() {
        PUBLIC_KEY_LEN => raw,
        len if len == PUBLIC_KEY_LEN + 1 => &raw[1..],
        len => return Err(PassError::InvalidPublicKey(len)),
    };
    key.try_into().map_err(|_| PassError::InvalidPublicKey(raw.len()))
}

/// Extract exactly 64 signature bytes.
pub fn pass_signature_bytes(raw: &[u8]) -> Result<[u8; SIGNATURE_LEN], PassError> {
    raw.try_into().map_err(|_| PassError::InvalidSignature(raw.len()))
}

/// Extract exactly 32 nonce bytes.
pub fn pass_nonce_bytes(raw: &[u8]) -> Result<[u8; NONCE_LEN], PassError> {
    raw.try_into().map_err(|_| PassError::InvalidNonce(raw.len()))
}

//! Deterministic mint-pass message construction.
//!
//! A pass authorizes one mint of `quantity` tokens for one requester on one
//! contract. The signed message is a fixed binary layout, not JSON, so the
//! bytes are identical wherever they are built:
//!
//! ```text
//! payload = quantity as u64 big-endian (8 bytes)
//!        || requester account id (UTF-8)
//!        || 0x00
//!        || nonce (32 bytes)
//! message = "{domain_prefix}:{contract_id}" || 0x00 || payload
//! ```
//!
//! NEAR account ids cannot contain NUL, so both 0x00 separators are
//! unambiguous. Signers sign the sha256 digest of `message`, not the raw
//! bytes. Changing any part of this layout changes which signatures
//! validate.

/// Byte length of the pass nonce.
pub const NONCE_LEN: usize = 32;

/// Build the pass payload: quantity, requester, nonce, in that order.
pub fn mint_pass_payload(quantity: u64, requester_id: &str, nonce: &[u8; NONCE_LEN]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(8 + requester_id.len() + 1 + NONCE_LEN);
    payload.extend_from_slice(&quantity.to_be_bytes());
    payload.extend_from_slice(requester_id.as_bytes());
    payload.push(0);
    payload.extend_from_slice(nonce);
    payload
}

/// Build the full domain-tagged message to hash and sign.
/// The domain tag binds the pass to a single contract deployment.
pub fn mint_pass_message(
    domain_prefix: &str,
    contract_id: &str,
    quantity: u64,
    requester_id: &str,
    nonce: &[u8; NONCE_LEN],
) -> Vec<u8> {
    let payload = mint_pass_payload(quantity, requester_id, nonce);
    let domain = format!("{domain_prefix}:{contract_id}");
    let mut message = domain.into_bytes();
    message.reserve_exact(1 + payload.len());
    message.push(0);
    message.extend_from_slice(&payload);
    message
}

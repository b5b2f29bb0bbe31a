//! Mint-pass message encoding for the OnSocial drops contract.
//! Zero NEAR SDK dependency — the same bytes are built on-chain to verify
//! a pass and off-chain to sign one.

mod crypto;
mod error;
mod message;

pub use crypto::{
    PUBLIC_KEY_LEN, SIGNATURE_LEN, pass_nonce_bytes, pass_signature_bytes, signer_key_bytes,
};
pub use error::PassError;
pub use message::{NONCE_LEN, mint_pass_message, mint_pass_payload};

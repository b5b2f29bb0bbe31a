//! Mint-pass verification and replay protection.
//!
//! A pass is an ed25519 signature by the configured signer key over the
//! sha256 digest of the canonical message for (quantity, requester, nonce)
//! on this contract — see `onsocial_mintpass` for the exact byte layout.
//! Consumed signatures are persisted in `used_signatures`; that set only
//! grows. Per signature the state machine is `Unused -> Used`, terminal.

use near_sdk::json_types::Base64VecU8;
use near_sdk::CurveType;
use onsocial_mintpass as mintpass;

use crate::*;

impl Contract {
    /// Verify a pass and mark its signature consumed.
    /// Ordering invariant: the used-signature check and the used write both
    /// happen before any token is minted, inside the same atomic receipt.
    pub(crate) fn consume_mint_pass(
        &mut self,
        requester_id: &AccountId,
        quantity: u32,
        signature: &[u8],
        nonce: &[u8],
    ) -> Result<(), MintError> {
        let sig_bytes = mintpass::pass_signature_bytes(signature).map_err(MintError::bad_pass)?;
        let nonce_bytes = mintpass::pass_nonce_bytes(nonce).map_err(MintError::bad_pass)?;

        self.verify_mint_pass(requester_id, quantity, &sig_bytes, &nonce_bytes)?;

        if self.used_signatures.contains(sig_bytes.as_slice()) {
            return Err(MintError::SignatureAlreadyUsed);
        }
        self.used_signatures.insert(sig_bytes.to_vec());
        Ok(())
    }

    fn verify_mint_pass(
        &self,
        requester_id: &AccountId,
        quantity: u32,
        sig_bytes: &[u8; mintpass::SIGNATURE_LEN],
        nonce_bytes: &[u8; mintpass::NONCE_LEN],
    ) -> Result<(), MintError> {
        if self.signer_key.curve_type() != CurveType::ED25519 {
            return Err(MintError::InvalidSignature(
                "only ed25519 signer keys are supported".into(),
            ));
        }
        let pk_bytes =
            mintpass::signer_key_bytes(self.signer_key.as_bytes()).map_err(MintError::bad_pass)?;

        let contract_id = env::current_account_id();
        let message = mintpass::mint_pass_message(
            DOMAIN_PREFIX,
            contract_id.as_str(),
            quantity as u64,
            requester_id.as_str(),
            nonce_bytes,
        );
        let digest = env::sha256_array(&message);
        if !env::ed25519_verify(sig_bytes, digest, &pk_bytes) {
            return Err(MintError::InvalidSignature(
                "signer mismatch for this quantity, requester, and nonce".into(),
            ));
        }
        Ok(())
    }
}

#[near]
impl Contract {
    pub fn is_signature_used(&self, signature: Base64VecU8) -> bool {
        match mintpass::pass_signature_bytes(&signature.0) {
            Ok(sig_bytes) => self.used_signatures.contains(sig_bytes.as_slice()),
            Err(_) => false,
        }
    }
}

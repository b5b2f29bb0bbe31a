use near_sdk::json_types::Base64VecU8;
use near_sdk::AccountId;
use near_sdk::near;

pub type TokenId = String;

/// Persisted per-token state. Everything else a token view carries is
/// derived from contract-level metadata.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    pub minted_at_ms: u64,
}

/// Token view returned by the enumeration surface.
#[near(serializers = [json])]
#[derive(Clone)]
pub struct Token {
    pub token_id: TokenId,
    pub owner_id: AccountId,
    pub minted_at_ms: u64,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct DropContractMetadata {
    pub spec: String,
    pub name: String,
    pub symbol: String,
    pub icon: Option<String>,
    pub base_uri: Option<String>,
    pub reference: Option<String>,
    pub reference_hash: Option<Base64VecU8>,
}

impl Default for DropContractMetadata {
    fn default() -> Self {
        Self {
            spec: "nft-2.0.0".to_string(),
            name: "OnSocial Drops".to_string(),
            symbol: "DROPS".to_string(),
            icon: None,
            base_uri: None,
            reference: None,
            reference_hash: None,
        }
    }
}

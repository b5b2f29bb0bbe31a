use near_sdk::store::{IterableMap, IterableSet, LookupMap, LookupSet};
use near_sdk::{env, near, require, AccountId, NearToken, PanicOnDefault, PublicKey};

pub mod constants;
mod errors;
mod guards;

mod events;

mod admin;
mod authorizer;
mod config;
mod enumeration;
mod mint;
mod storage;
mod transfer;
mod types;


pub use config::{LimitMode, MintConfig, MintConfigUpdate};
pub use constants::*;
pub use errors::MintError;
pub use storage::StorageKey;
pub use types::{DropContractMetadata, Token, TokenId, TokenRecord};

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-drops",
        standard(standard = "nep171", version = "1.2.0"),
        standard(standard = "nep177", version = "2.0.0"),
        standard(standard = "nep181", version = "1.0.0"),
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    /// Signer whose passes `signed_mint` accepts.
    pub signer_key: PublicKey,
    pub mint_config: MintConfig,

    pub tokens_by_id: IterableMap<TokenId, TokenRecord>,
    pub(crate) tokens_per_owner: LookupMap<AccountId, IterableSet<TokenId>>,
    // Cap invariant: counts paid and signed mints only; set mints are gated
    // by current holdings and never recorded here.
    pub(crate) minted_per_wallet: LookupMap<AccountId, u32>,

    // Replay invariant: grows only, no removal path exists.
    pub(crate) used_signatures: LookupSet<Vec<u8>>,

    pub next_token_id: u64,
    /// Accumulated mint payments awaiting `withdraw`, in yoctoNEAR.
    pub proceeds: u128,

    pub contract_metadata: DropContractMetadata,
}

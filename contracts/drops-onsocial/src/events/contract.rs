use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::CONTRACT;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("old_owner", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_signer_key_rotated(owner_id: &AccountId, old_key: String, new_key: String) {
    EventBuilder::new(CONTRACT, "signer_key_rotated", owner_id)
        .field("old_key", old_key)
        .field("new_key", new_key)
        .emit();
}

pub fn emit_mint_config_updated(owner_id: &AccountId, config: &crate::MintConfig) {
    let limit_mode = match config.limit_mode {
        crate::LimitMode::PerCall => "per_call",
        crate::LimitMode::Lifetime => "lifetime",
    };
    EventBuilder::new(CONTRACT, "mint_config_updated", owner_id)
        .field("mint_price", config.mint_price)
        .field("set_price", config.set_price)
        .field("max_per_wallet", config.max_per_wallet)
        .field("limit_mode", limit_mode)
        .field("set_size", config.set_size)
        .emit();
}

pub fn emit_withdraw(owner_id: &AccountId, amount: U128) {
    EventBuilder::new(CONTRACT, "withdraw", owner_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_contract_metadata_updated(
    owner_id: &AccountId,
    name: &str,
    symbol: &str,
    icon: Option<&str>,
    base_uri: Option<&str>,
    reference: Option<&str>,
) {
    EventBuilder::new(CONTRACT, "contract_metadata_updated", owner_id)
        .field("name", name)
        .field("symbol", symbol)
        .field_opt("icon", icon)
        .field_opt("base_uri", base_uri)
        .field_opt("reference", reference)
        .emit();
}

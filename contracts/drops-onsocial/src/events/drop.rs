use near_sdk::json_types::U128;
use near_sdk::AccountId;

use super::builder::EventBuilder;
use super::DROP;

pub fn emit_signed_mint(
    receiver_id: &AccountId,
    token_ids: &[String],
    quantity: u32,
    nonce_hex: String,
) {
    EventBuilder::new(DROP, "signed_mint", receiver_id)
        .field("token_ids", token_ids)
        .field("quantity", quantity)
        .field("nonce", nonce_hex)
        .emit();
}

pub fn emit_public_mint(receiver_id: &AccountId, token_ids: &[String], quantity: u32, charged: U128) {
    EventBuilder::new(DROP, "mint", receiver_id)
        .field("token_ids", token_ids)
        .field("quantity", quantity)
        .field("charged", charged)
        .emit();
}

pub fn emit_set_mint(receiver_id: &AccountId, token_ids: &[String], charged: U128) {
    EventBuilder::new(DROP, "set_mint", receiver_id)
        .field("token_ids", token_ids)
        .field("charged", charged)
        .emit();
}

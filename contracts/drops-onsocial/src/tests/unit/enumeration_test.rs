use crate::constants::DEFAULT_MINT_PRICE;
use crate::tests::test_utils::*;
use crate::Contract;
use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::NearToken;

/// fan() holds "1" and "2", collector() holds "3", "4" and "5".
fn populated_contract() -> Contract {
    let mut contract = new_contract();
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_MINT_PRICE * 2),
    ));
    contract.mint(2).unwrap();
    set_context(context_with_deposit(
        collector(),
        NearToken::from_yoctonear(DEFAULT_MINT_PRICE * 3),
    ));
    contract.mint(3).unwrap();
    contract
}

fn token_ids(tokens: &[crate::Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.token_id.as_str()).collect()
}

#[test]
fn enumeration_reports_supplies() {
    let contract = populated_contract();

    assert_eq!(contract.nft_total_supply(), U128(5));
    assert_eq!(contract.nft_supply_for_owner(fan()), U128(2));
    assert_eq!(contract.nft_supply_for_owner(collector()), U128(3));
    assert_eq!(contract.nft_supply_for_owner(owner()), U128(0));
}

#[test]
fn nft_token_exposes_record_fields() {
    let contract = populated_contract();

    let token = contract.nft_token("1".to_string()).unwrap();
    assert_eq!(token.token_id, "1");
    assert_eq!(token.owner_id, fan());
    assert_eq!(token.minted_at_ms, 1_700_000_000_000);

    assert!(contract.nft_token("999".to_string()).is_none());
}

#[test]
fn nft_tokens_paginates() {
    let contract = populated_contract();

    let all = contract.nft_tokens(None, None);
    assert_eq!(token_ids(&all), ["1", "2", "3", "4", "5"]);

    let page = contract.nft_tokens(Some(U128(2)), Some(2));
    assert_eq!(token_ids(&page), ["3", "4"]);

    let tail = contract.nft_tokens(Some(U128(4)), Some(10));
    assert_eq!(token_ids(&tail), ["5"]);
}

#[test]
fn nft_tokens_for_owner_paginates() {
    let contract = populated_contract();

    let all = contract.nft_tokens_for_owner(collector(), None, None);
    assert_eq!(token_ids(&all), ["3", "4", "5"]);
    assert!(all.iter().all(|t| t.owner_id == collector()));

    let page = contract.nft_tokens_for_owner(collector(), Some(U128(1)), Some(1));
    assert_eq!(token_ids(&page), ["4"]);

    let none = contract.nft_tokens_for_owner(owner(), None, None);
    assert!(none.is_empty());
}

#[test]
fn is_signature_used_is_false_for_unseen_bytes() {
    let contract = new_contract();
    assert!(!contract.is_signature_used(Base64VecU8(vec![42u8; 64])));
}

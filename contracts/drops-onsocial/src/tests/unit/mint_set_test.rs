use crate::constants::{DEFAULT_MINT_PRICE, DEFAULT_SET_PRICE};
use crate::tests::test_utils::*;
use crate::{LimitMode, MintConfig, MintError};
use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;
use near_sdk::NearToken;

fn set_price() -> NearToken {
    NearToken::from_yoctonear(DEFAULT_SET_PRICE)
}

#[test]
fn mint_set_mints_full_set_for_fresh_wallet() {
    let mut contract = new_contract();
    set_context(context_with_deposit(fan(), set_price()));

    let token_ids = contract.mint_set().unwrap();

    assert_eq!(token_ids.len() as u32, contract.get_mint_config().set_size);
    assert_eq!(contract.nft_supply_for_owner(fan()), U128(6));
    assert_eq!(contract.get_proceeds(), U128(DEFAULT_SET_PRICE));
    // Set mints never count toward the per-wallet mint cap.
    assert_eq!(contract.get_minted_count(fan()), 0);
}

#[test]
fn mint_set_is_one_shot() {
    let mut contract = new_contract();
    set_context(context_with_deposit(fan(), set_price()));
    contract.mint_set().unwrap();

    set_context(context_with_deposit(fan(), set_price()));
    let err = contract.mint_set().unwrap_err();
    match err {
        MintError::SetMintLimitExceeded(reason) => assert!(reason.contains("already holds")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(contract.nft_supply_for_owner(fan()), U128(6));
}

#[test]
fn mint_set_rejects_wallets_that_already_hold_tokens() {
    let mut contract = new_contract();
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_MINT_PRICE),
    ));
    contract.mint(1).unwrap();

    set_context(context_with_deposit(fan(), set_price()));
    let err = contract.mint_set().unwrap_err();
    assert!(matches!(err, MintError::SetMintLimitExceeded(_)));
}

#[test]
fn mint_set_rejects_underpayment() {
    let mut contract = new_contract();
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_SET_PRICE - 1),
    ));

    let err = contract.mint_set().unwrap_err();
    assert!(matches!(err, MintError::InsufficientPayment(_)));
    assert_eq!(contract.nft_total_supply(), U128(0));
    assert_eq!(contract.get_proceeds(), U128(0));
}

#[test]
fn mint_set_keeps_only_the_set_price() {
    let mut contract = new_contract();
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_SET_PRICE * 2),
    ));

    contract.mint_set().unwrap();

    assert_eq!(contract.get_proceeds(), U128(DEFAULT_SET_PRICE));
}

#[test]
fn mint_set_leaves_lifetime_cap_untouched() {
    let mut contract = new_contract_with_config(MintConfig {
        limit_mode: LimitMode::Lifetime,
        ..Default::default()
    });
    set_context(context_with_deposit(fan(), set_price()));
    contract.mint_set().unwrap();

    // The full paid allowance is still available afterwards.
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_MINT_PRICE * 3),
    ));
    contract.mint(3).unwrap();
    assert_eq!(contract.nft_supply_for_owner(fan()), U128(9));
}

#[test]
fn mint_set_opens_up_once_holdings_reach_zero() {
    let mut contract = new_contract();
    set_context(context_with_deposit(
        fan(),
        NearToken::from_yoctonear(DEFAULT_MINT_PRICE),
    ));
    let token_ids = contract.mint(1).unwrap();

    set_context(context_with_deposit(fan(), NearToken::from_yoctonear(1)));
    contract.nft_transfer(collector(), token_ids[0].clone(), None);

    // The gate is current holdings, not mint history.
    set_context(context_with_deposit(fan(), set_price()));
    contract.mint_set().unwrap();
    assert_eq!(contract.nft_supply_for_owner(fan()), U128(6));
}

#[test]
fn mint_set_emits_set_mint_event() {
    let mut contract = new_contract();
    set_context(context_with_deposit(fan(), set_price()));

    contract.mint_set().unwrap();

    let logs = get_logs();
    assert!(logs.iter().any(|log| {
        log.contains("\"event\":\"DROP_UPDATE\"") && log.contains("\"operation\":\"set_mint\"")
    }));
    assert!(logs
        .iter()
        .any(|log| log.contains("\"event\":\"nft_mint\"")));
}

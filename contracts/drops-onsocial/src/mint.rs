use near_sdk::json_types::{Base64VecU8, U128};
use near_sdk::store::IterableSet;
use near_sdk::Promise;

use crate::*;

#[near]
impl Contract {
    /// Mint with an off-chain-signed pass. Not payable; the pass is the
    /// whole authorization. Returns the minted token ids.
    #[handle_result]
    pub fn signed_mint(
        &mut self,
        quantity: u32,
        signature: Base64VecU8,
        nonce: Base64VecU8,
    ) -> Result<Vec<TokenId>, MintError> {
        let requester_id = env::predecessor_account_id();
        self.check_wallet_cap(&requester_id, quantity)?;
        self.consume_mint_pass(&requester_id, quantity, &signature.0, &nonce.0)?;

        self.bump_wallet_count(&requester_id, quantity);
        let token_ids = self.mint_batch(&requester_id, quantity);

        events::nep171::emit_mint(requester_id.as_str(), &token_ids, None);
        events::emit_signed_mint(&requester_id, &token_ids, quantity, hex::encode(&nonce.0));
        Ok(token_ids)
    }

    /// Public mint path: per-wallet cap plus payment scaled to quantity.
    #[payable]
    #[handle_result]
    pub fn mint(&mut self, quantity: u32) -> Result<Vec<TokenId>, MintError> {
        let requester_id = env::predecessor_account_id();
        self.check_wallet_cap(&requester_id, quantity)?;

        let total_price = self
            .mint_config
            .mint_price
            .0
            .checked_mul(quantity as u128)
            .ok_or_else(|| {
                MintError::InvalidQuantity("quantity overflows the total price".into())
            })?;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < total_price {
            return Err(MintError::payment_short(total_price, deposit));
        }

        // State transition invariant: persist revenue and cap counters
        // before mint side effects.
        self.proceeds += total_price;
        self.bump_wallet_count(&requester_id, quantity);
        let token_ids = self.mint_batch(&requester_id, quantity);

        events::nep171::emit_mint(requester_id.as_str(), &token_ids, None);
        events::emit_public_mint(&requester_id, &token_ids, quantity, U128(total_price));

        self.refund_excess(&requester_id, deposit - total_price);
        Ok(token_ids)
    }

    /// One-time promotional set: a fixed bonus quantity for wallets that
    /// hold nothing yet.
    #[payable]
    #[handle_result]
    pub fn mint_set(&mut self) -> Result<Vec<TokenId>, MintError> {
        let requester_id = env::predecessor_account_id();
        let held = self.holdings_of(&requester_id);
        if held > 0 {
            return Err(MintError::SetMintLimitExceeded(format!(
                "{} already holds {} tokens",
                requester_id, held
            )));
        }

        let price = self.mint_config.set_price.0;
        let deposit = env::attached_deposit().as_yoctonear();
        if deposit < price {
            return Err(MintError::payment_short(price, deposit));
        }

        self.proceeds += price;
        // Set tokens are excluded from the per-wallet cap ledger; the gate
        // for this path is current holdings.
        let token_ids = self.mint_batch(&requester_id, self.mint_config.set_size);

        events::nep171::emit_mint(requester_id.as_str(), &token_ids, None);
        events::emit_set_mint(&requester_id, &token_ids, U128(price));

        self.refund_excess(&requester_id, deposit - price);
        Ok(token_ids)
    }
}

impl Contract {
    pub(crate) fn check_wallet_cap(
        &self,
        account_id: &AccountId,
        quantity: u32,
    ) -> Result<(), MintError> {
        if quantity == 0 {
            return Err(MintError::InvalidQuantity("must be at least 1".into()));
        }
        let max = self.mint_config.max_per_wallet;
        match self.mint_config.limit_mode {
            LimitMode::PerCall => {
                if quantity > max {
                    return Err(MintError::InvalidQuantity(format!(
                        "requested {}, max {} per call",
                        quantity, max
                    )));
                }
            }
            LimitMode::Lifetime => {
                let already_minted = self.minted_per_wallet.get(account_id).copied().unwrap_or(0);
                if already_minted + quantity > max {
                    return Err(MintError::InvalidQuantity(format!(
                        "minted {}, requesting {}, max {} per wallet",
                        already_minted, quantity, max
                    )));
                }
            }
        }
        Ok(())
    }

    pub(crate) fn bump_wallet_count(&mut self, account_id: &AccountId, quantity: u32) {
        let cur = self.minted_per_wallet.get(account_id).copied().unwrap_or(0);
        self.minted_per_wallet.insert(account_id.clone(), cur + quantity);
    }

    pub(crate) fn mint_batch(&mut self, receiver_id: &AccountId, quantity: u32) -> Vec<TokenId> {
        let minted_at_ms = env::block_timestamp_ms();
        let mut token_ids = Vec::with_capacity(quantity as usize);
        for _ in 0..quantity {
            self.next_token_id += 1;
            let token_id = self.next_token_id.to_string();
            self.tokens_by_id.insert(
                token_id.clone(),
                TokenRecord {
                    owner_id: receiver_id.clone(),
                    minted_at_ms,
                },
            );
            self.add_token_to_owner(receiver_id, &token_id);
            token_ids.push(token_id);
        }
        token_ids
    }

    pub(crate) fn add_token_to_owner(&mut self, owner_id: &AccountId, token_id: &TokenId) {
        if !self.tokens_per_owner.contains_key(owner_id) {
            self.tokens_per_owner.insert(
                owner_id.clone(),
                IterableSet::new(StorageKey::TokensPerOwnerInner {
                    account_id_hash: guards::hash_account_id(owner_id),
                }),
            );
        }
        self.tokens_per_owner
            .get_mut(owner_id)
            .unwrap()
            .insert(token_id.clone());
    }

    pub(crate) fn holdings_of(&self, account_id: &AccountId) -> u32 {
        self.tokens_per_owner
            .get(account_id)
            .map(|tokens| tokens.len())
            .unwrap_or(0)
    }

    fn refund_excess(&self, requester_id: &AccountId, excess: u128) {
        if excess > 0 {
            let _ = Promise::new(requester_id.clone())
                .transfer(NearToken::from_yoctonear(excess));
        }
    }
}
